use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use crate::DictionaryError;

/// One WordNet-style sense. `pos` is a synset letter: `n v a s r`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sense {
    pub pos: String,
    pub definition: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub example: Option<String>,
}

/// Headword to ordered senses, most common sense first, plus the
/// irregular-form exception lists keyed by pos letter.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Sense>>,
    exceptions: HashMap<String, HashMap<String, Vec<String>>>,
}

impl Lexicon {
    pub fn from_json(origin: &str, json: &str) -> Result<Self, DictionaryError> {
        let raw: HashMap<String, Vec<Sense>> =
            serde_json::from_str(json).map_err(|error| DictionaryError::Data {
                origin: origin.to_string(),
                message: error.to_string(),
            })?;
        let mut entries: HashMap<String, Vec<Sense>> = HashMap::with_capacity(raw.len());
        for (word, senses) in raw {
            entries
                .entry(word.trim().to_lowercase())
                .or_default()
                .extend(senses);
        }
        Ok(Self {
            entries,
            exceptions: HashMap::new(),
        })
    }

    pub(crate) fn from_parts(
        entries: HashMap<String, Vec<Sense>>,
        exceptions: HashMap<String, HashMap<String, Vec<String>>>,
    ) -> Self {
        Self {
            entries,
            exceptions,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn senses(&self, word: &str) -> &[Sense] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Base forms listed for an irregular `word`, e.g. `mice` -> `mouse`.
    pub fn exceptions(&self, word: &str, pos: &str) -> &[String] {
        self.exceptions
            .get(pos)
            .and_then(|forms| forms.get(word))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when `word` has a sense with one of the given pos letters.
    pub fn has_pos(&self, word: &str, pos: &[&str]) -> bool {
        self.senses(word)
            .iter()
            .any(|sense| pos.contains(&sense.pos.as_str()))
    }

    /// Every lower-case word used anywhere in the lexicon.
    pub fn vocabulary(&self) -> BTreeSet<String> {
        let mut vocabulary = BTreeSet::new();
        let mut add_text = |text: &str| {
            for token in text.split(|c: char| !c.is_alphabetic()) {
                if !token.is_empty() {
                    vocabulary.insert(token.to_lowercase());
                }
            }
        };
        for (word, senses) in &self.entries {
            add_text(word);
            for sense in senses {
                add_text(&sense.definition);
                sense.synonyms.iter().for_each(|synonym| add_text(synonym));
                if let Some(example) = &sense.example {
                    add_text(example);
                }
            }
        }
        vocabulary
    }
}
