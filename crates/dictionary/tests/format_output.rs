use dictionary::{format_output, Field};

const RUN: &str = "📘 Word: Run\n📖 Part of Speech: V\n🔤 Simple Meaning: to move fast\n🔁 Past Simple: ran\n🔁 Past Participle: run\n🔢 Singular: run\n💬 Example: I run every day";

fn inflected(pos_line: &str) -> String {
    format!(
        "📘 Word: Light\n{pos_line}\n🔊 Pronunciation (IPA): /laɪt/\n🔤 Simple Meaning: brightness\n🟢 Synonyms: glow, shine\n🔢 Singular: light\n🔢 Plural: lights\n🔁 Past Simple: lit\n🔁 Past Participle: lit\n💬 Example: Turn on the light."
    )
}

fn has_noun_forms(out: &str) -> bool {
    out.lines()
        .any(|line| matches!(Field::classify(line), Some(Field::Singular | Field::Plural)))
}

fn has_verb_forms(out: &str) -> bool {
    out.lines().any(|line| {
        matches!(
            Field::classify(line),
            Some(Field::PastSimple | Field::PastParticiple)
        )
    })
}

#[test]
fn verb_example_from_the_description() {
    assert_eq!(
        format_output(RUN, "run"),
        "📘 Word: Run\n\
         📖 Part of Speech: V\n\
         🔤 Simple Meaning: **to move fast**\n\
         🔁 Past Simple: ran\n\
         🔁 Past Participle: run\n\
         💬 Example: *I run every day*"
    );
}

#[test]
fn verbs_keep_only_verb_forms() {
    let out = format_output(&inflected("📖 Part of Speech: V"), "light");
    assert!(has_verb_forms(&out));
    assert!(!has_noun_forms(&out));
}

#[test]
fn nouns_keep_only_noun_forms() {
    let out = format_output(&inflected("📖 Part of Speech: N"), "light");
    assert!(out.contains("🔢 Singular: light\n🔢 Plural: lights"));
    assert!(!has_verb_forms(&out));
}

#[test]
fn other_tags_drop_both_families() {
    for pos_line in [
        "📖 Part of Speech: ADJ",
        "📖 Part of Speech:",
        "📖 Part of Speech: N/V",
        "📖 Part of Speech: (N for noun, V for verb, etc.)",
        "📖 Part of Speech V",
    ] {
        let out = format_output(&inflected(pos_line), "light");
        assert!(!has_noun_forms(&out), "{pos_line}");
        assert!(!has_verb_forms(&out), "{pos_line}");
    }
}

#[test]
fn missing_part_of_speech_drops_both_families() {
    let raw = inflected("").replacen("\n\n", "\n", 1);
    let out = format_output(&raw, "light");
    assert!(!has_noun_forms(&out));
    assert!(!has_verb_forms(&out));
    assert!(out.starts_with("📘 Word: Light\n🔊"));
}

#[test]
fn headword_always_shows_the_base_word() {
    let echoed = format_output("📘 Word: Running\n📖 Part of Speech: V", "run");
    assert!(echoed.starts_with("📘 Word: Run\n"));
    assert!(!echoed.contains("Running"));

    let absent = format_output("📖 Part of Speech: N\n🔤 Simple Meaning: a pet", "CAT");
    assert_eq!(
        absent,
        "📘 Word: Cat\n📖 Part of Speech: N\n🔤 Simple Meaning: **a pet**"
    );
}

#[test]
fn pass_through_lines_are_unchanged() {
    let out = format_output(&inflected("📖 Part of Speech: N"), "light");
    assert!(out.contains("\n🔊 Pronunciation (IPA): /laɪt/\n"));
    assert!(out.contains("\n🟢 Synonyms: glow, shine\n"));
    assert!(out.contains("\n🔤 Simple Meaning: **brightness**\n"));
    assert!(out.ends_with("\n💬 Example: *Turn on the light.*"));
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(format_output("", "run"), "");
    assert_eq!(format_output("  \n\n ", "run"), "");
}

#[test]
fn error_strings_pass_through_harmlessly() {
    assert_eq!(format_output("❌ Error: timeout", "run"), "");
    let out = format_output("Sorry, I cannot help with that.\n❌ Error: rate limited", "run");
    assert!(Field::ALL.iter().all(|field| !out.contains(field.glyph())));
}

#[test]
fn unrecognised_lines_are_dropped() {
    let raw = "Here is your explanation:\n📘 Word: Cat\n📖 Part of Speech: N\nHope this helps!";
    assert_eq!(format_output(raw, "cat"), "📘 Word: Cat\n📖 Part of Speech: N");
}
