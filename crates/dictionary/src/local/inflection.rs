use std::collections::HashMap;
use std::sync::Arc;

use crate::dictionary::{PartOfSpeech, WordForms};
use crate::providers::InflectionLookup;
use crate::DictionaryError;

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("person", "people"),
    ("mouse", "mice"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("sheep", "sheep"),
    ("fish", "fish"),
    ("deer", "deer"),
    ("series", "series"),
    ("species", "species"),
];

const F_TO_VES: &[&str] = &[
    "calf", "elf", "half", "knife", "leaf", "life", "loaf", "self", "sheaf", "shelf", "thief",
    "wife", "wolf",
];

const O_TO_OES: &[&str] = &["echo", "hero", "potato", "tomato", "torpedo", "veto"];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Singular for an irregular plural, e.g. `children` -> `child`.
pub(crate) fn irregular_singular(plural: &str) -> Option<&'static str> {
    IRREGULAR_PLURALS
        .iter()
        .find(|(_, p)| *p == plural)
        .map(|(singular, _)| *singular)
        .or_else(|| {
            F_TO_VES
                .iter()
                .find(|singular| plural_of(singular) == plural)
                .copied()
        })
}

pub fn plural_of(noun: &str) -> String {
    let noun = noun.trim().to_lowercase();
    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(s, _)| *s == noun) {
        return plural.to_string();
    }
    if F_TO_VES.contains(&noun.as_str()) {
        let stem = noun
            .strip_suffix("fe")
            .or_else(|| noun.strip_suffix('f'))
            .unwrap_or(&noun);
        return format!("{stem}ves");
    }
    if O_TO_OES.contains(&noun.as_str()) {
        return format!("{noun}es");
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|end| noun.ends_with(end)) {
        return format!("{noun}es");
    }
    if let Some(stem) = noun.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{noun}s")
}

/// `past simple` and `past participle` for verbs that do not take `-ed`.
#[derive(Debug, Default)]
pub struct IrregularVerbs {
    forms: HashMap<String, (String, String)>,
    bases: HashMap<String, String>,
}

impl IrregularVerbs {
    /// Parses `base past participle` lines. `#` starts a comment and
    /// alternatives are written `was/were`.
    pub fn parse(origin: &str, text: &str) -> Result<Self, DictionaryError> {
        let mut verbs = Self::default();
        for (number, line) in text.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let parts = line.split_whitespace().collect::<Vec<&str>>();
            let [base, past, participle] = parts[..] else {
                return Err(DictionaryError::Data {
                    origin: origin.to_string(),
                    message: format!("line {}: expected 3 columns, found {}", number + 1, parts.len()),
                });
            };
            let base = base.to_lowercase();
            for form in past.split('/').chain(participle.split('/')) {
                verbs
                    .bases
                    .entry(form.to_lowercase())
                    .or_insert_with(|| base.clone());
            }
            verbs
                .forms
                .insert(base, (past.to_lowercase(), participle.to_lowercase()));
        }
        Ok(verbs)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn forms(&self, base: &str) -> Option<(&str, &str)> {
        self.forms
            .get(base)
            .map(|(past, participle)| (past.as_str(), participle.as_str()))
    }

    /// Base form of an irregular past or participle, e.g. `went` -> `go`.
    pub fn base_of(&self, form: &str) -> Option<&str> {
        self.bases.get(form).map(String::as_str)
    }
}

fn regular_past(verb: &str) -> String {
    if verb.ends_with('e') {
        return format!("{verb}d");
    }
    if let Some(stem) = verb.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ied");
        }
    }
    let chars = verb.chars().collect::<Vec<char>>();
    let vowel_groups = chars
        .iter()
        .enumerate()
        .filter(|(i, c)| is_vowel(**c) && (*i == 0 || !is_vowel(chars[i - 1])))
        .count();
    if let [.., a, b, c] = chars[..] {
        let doubles = vowel_groups == 1
            && !is_vowel(a)
            && is_vowel(b)
            && !is_vowel(c)
            && !matches!(c, 'w' | 'x' | 'y');
        if doubles {
            return format!("{verb}{c}ed");
        }
    }
    format!("{verb}ed")
}

/// Returns `(past simple, past participle)`.
pub fn past_forms(verb: &str, irregulars: &IrregularVerbs) -> (String, String) {
    let verb = verb.trim().to_lowercase();
    if let Some((past, participle)) = irregulars.forms(&verb) {
        return (past.to_string(), participle.to_string());
    }
    let past = regular_past(&verb);
    (past.clone(), past)
}

#[derive(Debug, Clone)]
pub struct Inflections {
    irregulars: Arc<IrregularVerbs>,
}

impl Inflections {
    pub fn new(irregulars: Arc<IrregularVerbs>) -> Self {
        Self { irregulars }
    }
}

impl InflectionLookup for Inflections {
    fn forms(&self, word: &str, part_of_speech: &PartOfSpeech) -> WordForms {
        let word = word.trim();
        if word.is_empty() {
            return WordForms::None;
        }
        match part_of_speech {
            PartOfSpeech::Noun => WordForms::Noun {
                singular: Some(word.to_string()),
                plural: Some(plural_of(word)),
            },
            PartOfSpeech::Verb => {
                let (past, participle) = past_forms(word, &self.irregulars);
                WordForms::Verb {
                    past_simple: Some(past),
                    past_participle: Some(participle),
                }
            }
            _ => WordForms::None,
        }
    }
}
