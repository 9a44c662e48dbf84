//! Rewrites a free-form, line-oriented explanation into the emoji-tagged
//! display template.
//!
//! Lines are recognised by their leading glyph. The part of speech found in
//! the text decides whether the noun lines (`🔢`) or the verb lines (`🔁`)
//! survive; anything that is neither `N` nor `V` drops both families.

use std::collections::HashMap;

use tracing::debug;

use crate::dictionary::{capitalize, PartOfSpeech};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Headword,
    PartOfSpeech,
    Pronunciation,
    SimpleMeaning,
    Synonyms,
    Singular,
    Plural,
    PastSimple,
    PastParticiple,
    Example,
}

impl Field {
    /// Template order.
    pub const ALL: [Field; 10] = [
        Field::Headword,
        Field::PartOfSpeech,
        Field::Pronunciation,
        Field::SimpleMeaning,
        Field::Synonyms,
        Field::Singular,
        Field::Plural,
        Field::PastSimple,
        Field::PastParticiple,
        Field::Example,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Field::Headword => "📘",
            Field::PartOfSpeech => "📖",
            Field::Pronunciation => "🔊",
            Field::SimpleMeaning => "🔤",
            Field::Synonyms => "🟢",
            Field::Singular | Field::Plural => "🔢",
            Field::PastSimple | Field::PastParticiple => "🔁",
            Field::Example => "💬",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Headword => "Word",
            Field::PartOfSpeech => "Part of Speech",
            Field::Pronunciation => "Pronunciation (IPA)",
            Field::SimpleMeaning => "Simple Meaning",
            Field::Synonyms => "Synonyms",
            Field::Singular => "Singular",
            Field::Plural => "Plural",
            Field::PastSimple => "Past Simple",
            Field::PastParticiple => "Past Participle",
            Field::Example => "Example",
        }
    }

    pub fn line(self, value: &str) -> String {
        format!("{} {}: {}", self.glyph(), self.label(), value)
    }

    fn is_noun_form(self) -> bool {
        matches!(self, Field::Singular | Field::Plural)
    }

    fn is_verb_form(self) -> bool {
        matches!(self, Field::PastSimple | Field::PastParticiple)
    }

    /// Identifies a trimmed line by its glyph. Glyphs shared by two fields
    /// are told apart by the label that follows.
    pub fn classify(line: &str) -> Option<Field> {
        let glyph_field = Field::ALL
            .into_iter()
            .find(|field| line.starts_with(field.glyph()))?;
        let rest = line[glyph_field.glyph().len()..]
            .trim_start_matches(|c: char| c.is_whitespace() || c == '*')
            .to_lowercase();
        let field = match glyph_field {
            Field::Singular if rest.starts_with("plural") => Field::Plural,
            Field::PastSimple if rest.starts_with("past participle") => Field::PastParticiple,
            field => field,
        };
        Some(field)
    }
}

/// Text after the first colon, trimmed. `None` when the line has no colon.
fn value_of(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, value)| value.trim())
}

fn discover_part_of_speech(lines: &[(Field, &str)]) -> PartOfSpeech {
    // no early exit: the last part-of-speech line wins
    lines
        .iter()
        .filter(|(field, _)| *field == Field::PartOfSpeech)
        .map(|(_, line)| PartOfSpeech::from_tag(value_of(line).unwrap_or("")))
        .last()
        .unwrap_or_default()
}

fn emphasised(field: Field, line: &str, markup: &str) -> Option<String> {
    match value_of(line) {
        Some(value) if !value.is_empty() => Some(field.line(&format!("{markup}{value}{markup}"))),
        Some(_) => {
            debug!(?field, "dropping line with an empty value");
            None
        }
        None => {
            debug!(?field, line, "dropping line without a colon");
            None
        }
    }
}

fn rewrite(field: Field, line: &str, base_word: &str, pos: &PartOfSpeech) -> Option<String> {
    match field {
        Field::Headword => Some(Field::Headword.line(&capitalize(base_word))),
        Field::PartOfSpeech | Field::Pronunciation | Field::Synonyms => Some(line.to_string()),
        Field::SimpleMeaning => emphasised(field, line, "**"),
        Field::Example => emphasised(field, line, "*"),
        field if field.is_verb_form() => (*pos == PartOfSpeech::Verb).then(|| line.to_string()),
        field if field.is_noun_form() => (*pos == PartOfSpeech::Noun).then(|| line.to_string()),
        _ => None,
    }
}

/// Formats `raw` for display, showing `base_word` as the headword.
///
/// - Unrecognised lines are dropped.
/// - When a field appears more than once only its last line is kept.
/// - The headword line is added when missing, unless nothing in `raw` was
///   recognised at all, in which case the result is empty.
pub fn format_output(raw: &str, base_word: &str) -> String {
    let lines = raw
        .lines()
        .map(str::trim)
        .filter_map(|line| Field::classify(line).map(|field| (field, line)))
        .collect::<Vec<(Field, &str)>>();
    if lines.is_empty() {
        return String::new();
    }

    let part_of_speech = discover_part_of_speech(&lines);

    let kept = lines
        .iter()
        .filter_map(|(field, line)| {
            rewrite(*field, line, base_word, &part_of_speech).map(|rewritten| (*field, rewritten))
        })
        .collect::<Vec<(Field, String)>>();

    // only lines that survive rewriting compete for a field's slot
    let mut last_seen = HashMap::new();
    for (index, (field, _)) in kept.iter().enumerate() {
        last_seen.insert(*field, index);
    }

    let mut result = Vec::with_capacity(kept.len() + 1);
    if !last_seen.contains_key(&Field::Headword) {
        result.push(Field::Headword.line(&capitalize(base_word)));
    }
    for (index, (field, line)) in kept.into_iter().enumerate() {
        if last_seen.get(&field) != Some(&index) {
            debug!(?field, "dropping duplicate line");
            continue;
        }
        result.push(line);
    }
    result.join("\n")
}
