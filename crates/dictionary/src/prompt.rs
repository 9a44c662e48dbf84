use crate::dictionary::capitalize;
use crate::format::Field;

/// What the model is told to put after each marker.
fn hint(field: Field) -> &'static str {
    match field {
        Field::PartOfSpeech => "(N for noun, V for verb, etc.)",
        Field::Singular | Field::Plural => "(only if noun)",
        Field::PastSimple | Field::PastParticiple => "(only if verb)",
        _ => "",
    }
}

/// Builds the instruction sent to the language model for `word`.
pub fn build_prompt(word: &str) -> String {
    let mut prompt = format!("Explain the word \"{word}\" in the following format:\n\n");
    for field in Field::ALL {
        let line = match field {
            Field::Headword => field.line(&capitalize(word)),
            field => field.line(hint(field)),
        };
        prompt.push_str(line.trim_end());
        prompt.push('\n');
    }
    prompt.push_str("\nUse beginner-level English. Do not write anything outside this format.\n");
    prompt
}
