use std::fmt;

use crate::format::Field;

/// Grammatical category as far as the explanation template cares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Other(String),
    #[default]
    Unknown,
}

impl PartOfSpeech {
    /// Parses the tag written after `Part of Speech:`. Only the exact codes
    /// `N` and `V` (case-insensitive) select the noun and verb families.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_uppercase();
        match tag.as_str() {
            "" => PartOfSpeech::Unknown,
            "N" => PartOfSpeech::Noun,
            "V" => PartOfSpeech::Verb,
            _ => PartOfSpeech::Other(tag),
        }
    }

    /// Maps a WordNet synset pos letter (`n v a s r`).
    pub fn from_wordnet(pos: &str) -> Self {
        match pos.trim() {
            "n" => PartOfSpeech::Noun,
            "v" => PartOfSpeech::Verb,
            "a" | "s" => PartOfSpeech::Other("ADJ".into()),
            "r" => PartOfSpeech::Other("ADV".into()),
            "" => PartOfSpeech::Unknown,
            other => PartOfSpeech::Other(other.to_uppercase()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "N",
            PartOfSpeech::Verb => "V",
            PartOfSpeech::Other(tag) => tag,
            PartOfSpeech::Unknown => "",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pronunciation {
    pub ipa: Option<String>,
    pub arpabet: Option<String>,
}

/// Inflected forms. The variant ties each family to its part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordForms {
    Noun {
        singular: Option<String>,
        plural: Option<String>,
    },
    Verb {
        past_simple: Option<String>,
        past_participle: Option<String>,
    },
    #[default]
    None,
}

/// One sense pulled out of the lexical database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    pub definition: String,
    pub synonyms: Vec<String>,
    pub example: Option<String>,
}

pub const MAX_SYNONYMS: usize = 5;

const NOT_AVAILABLE: &str = "Not available";
const UNKNOWN_FORM: &str = "(unknown)";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplanationRecord {
    pub word: String,
    pub base_word: String,
    pub part_of_speech: PartOfSpeech,
    pub pronunciation: Pronunciation,
    pub simple_meaning: String,
    pub synonyms: Vec<String>,
    pub forms: WordForms,
    pub example_sentence: String,
}

impl ExplanationRecord {
    /// Writes the record as marker lines in template order, ready for
    /// [`crate::format_output`].
    pub fn to_marker_text(&self) -> String {
        let mut lines = Vec::new();
        lines.push(Field::Headword.line(&capitalize(&self.base_word)));
        lines.push(Field::PartOfSpeech.line(self.part_of_speech.tag()));

        let ipa = self
            .pronunciation
            .ipa
            .as_deref()
            .map(|ipa| format!("/{ipa}/"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let arpabet = self.pronunciation.arpabet.as_deref().unwrap_or(NOT_AVAILABLE);
        lines.push(Field::Pronunciation.line(&format!("{ipa} (ARPABET: {arpabet})")));

        if !self.simple_meaning.is_empty() {
            lines.push(Field::SimpleMeaning.line(&self.simple_meaning));
        }
        let synonyms = self
            .synonyms
            .iter()
            .take(MAX_SYNONYMS)
            .map(String::as_str)
            .collect::<Vec<&str>>();
        if !synonyms.is_empty() {
            lines.push(Field::Synonyms.line(&synonyms.join(", ")));
        }

        match &self.forms {
            WordForms::Noun { singular, plural } => {
                lines.push(Field::Singular.line(singular.as_deref().unwrap_or(UNKNOWN_FORM)));
                lines.push(Field::Plural.line(plural.as_deref().unwrap_or(UNKNOWN_FORM)));
            }
            WordForms::Verb {
                past_simple,
                past_participle,
            } => {
                lines.push(Field::PastSimple.line(past_simple.as_deref().unwrap_or(UNKNOWN_FORM)));
                lines.push(
                    Field::PastParticiple.line(past_participle.as_deref().unwrap_or(UNKNOWN_FORM)),
                );
            }
            WordForms::None => {}
        }

        if !self.example_sentence.is_empty() {
            lines.push(Field::Example.line(&self.example_sentence));
        }
        lines.join("\n")
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
