//! The offline explanation path: lexicon, morphology, pronunciation and
//! inflection tables assembled into the same template the model fills in.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

mod inflection;
mod lexicon;
mod morphy;
mod phonetics;
mod simplify;
mod wndb;

pub use inflection::{past_forms, plural_of, Inflections, IrregularVerbs};
pub use lexicon::{Lexicon, Sense};
pub use morphy::WordNet;
pub use phonetics::{arpabet_to_ipa, PronouncingDictionary};
pub use simplify::PlainWords;

use crate::config::DataConfig;
use crate::dictionary::ExplanationRecord;
use crate::format::format_output;
use crate::providers::{InflectionLookup, LexicalLookup, PhoneticLookup, TextSimplifier};
use crate::{DictionaryError, ERROR_GLYPH};

const EMBEDDED_LEXICON: &str = include_str!("../../data/lexicon.json");
const EMBEDDED_CMUDICT: &str = include_str!("../../data/cmudict.txt");
const EMBEDDED_IRREGULAR_VERBS: &str = include_str!("../../data/irregular_verbs.txt");

fn read_data(path: Option<&Path>, embedded: &'static str) -> Result<(String, Cow<'static, str>), DictionaryError> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map(|text| (path.display().to_string(), Cow::Owned(text)))
            .map_err(|source| DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            }),
        None => Ok(("embedded data".to_string(), Cow::Borrowed(embedded))),
    }
}

/// Read-only linguistic data, loaded once and shared by every request.
#[derive(Debug, Clone)]
pub struct Resources {
    pub wordnet: Arc<WordNet>,
    pub pronouncing: Arc<PronouncingDictionary>,
    pub inflections: Arc<Inflections>,
    pub simplifier: Arc<PlainWords>,
}

fn load_lexicon(config: &DataConfig) -> Result<(String, Lexicon), DictionaryError> {
    if let Some(dir) = &config.wordnet {
        return Ok((dir.display().to_string(), wndb::load(dir)?));
    }
    let (origin, text) = read_data(config.lexicon.as_deref(), EMBEDDED_LEXICON)?;
    let lexicon = Lexicon::from_json(&origin, &text)?;
    Ok((origin, lexicon))
}

fn warn_if_empty(origin: &str, kind: &str, empty: bool) {
    if empty {
        warn!(origin, kind, "data file has no entries");
    }
}

impl Resources {
    pub fn load(config: &DataConfig) -> Result<Self, DictionaryError> {
        let (origin, lexicon) = load_lexicon(config)?;
        warn_if_empty(&origin, "lexicon", lexicon.is_empty());
        let lexicon = Arc::new(lexicon);

        let (origin, text) = read_data(config.cmudict.as_deref(), EMBEDDED_CMUDICT)?;
        let pronouncing = PronouncingDictionary::parse(&origin, &text)?;
        warn_if_empty(&origin, "pronunciations", pronouncing.is_empty());

        let (origin, text) =
            read_data(config.irregular_verbs.as_deref(), EMBEDDED_IRREGULAR_VERBS)?;
        let irregular_verbs = Arc::new(IrregularVerbs::parse(&origin, &text)?);
        warn_if_empty(&origin, "irregular verbs", irregular_verbs.is_empty());

        info!(
            headwords = lexicon.len(),
            pronunciations = pronouncing.len(),
            irregular_verbs = irregular_verbs.len(),
            "loaded lexical resources"
        );

        let vocabulary = lexicon.vocabulary();
        let known_words = vocabulary
            .iter()
            .cloned()
            .chain(pronouncing.words().map(str::to_string))
            .collect::<Vec<String>>();

        Ok(Self {
            simplifier: Arc::new(PlainWords::new(vocabulary)),
            wordnet: Arc::new(
                WordNet::new(lexicon, irregular_verbs.clone()).with_known_words(known_words),
            ),
            pronouncing: Arc::new(pronouncing),
            inflections: Arc::new(Inflections::new(irregular_verbs)),
        })
    }

    /// Resources built from the starter data shipped with the crate.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::load(&DataConfig::default())
    }
}

/// Builds explanations without any network call.
pub struct LocalExplainer<L, S, P, F> {
    lexicon: L,
    simplifier: S,
    phonetics: P,
    inflections: F,
}

impl LocalExplainer<Arc<WordNet>, Arc<PlainWords>, Arc<PronouncingDictionary>, Arc<Inflections>> {
    pub fn from_resources(resources: &Resources) -> Self {
        Self::new(
            resources.wordnet.clone(),
            resources.simplifier.clone(),
            resources.pronouncing.clone(),
            resources.inflections.clone(),
        )
    }
}

impl<L, S, P, F> LocalExplainer<L, S, P, F>
where
    L: LexicalLookup,
    S: TextSimplifier,
    P: PhoneticLookup,
    F: InflectionLookup,
{
    pub fn new(lexicon: L, simplifier: S, phonetics: P, inflections: F) -> Self {
        Self {
            lexicon,
            simplifier,
            phonetics,
            inflections,
        }
    }

    pub fn record(&self, word: &str) -> Result<ExplanationRecord, DictionaryError> {
        let entry = self
            .lexicon
            .lookup(word)
            .ok_or_else(|| DictionaryError::NotFound(word.to_string()))?;
        let base_word = entry.lemma;
        let example_sentence = entry
            .example
            .unwrap_or_else(|| format!("I saw a {base_word} in the story."));
        Ok(ExplanationRecord {
            word: word.to_string(),
            pronunciation: self.phonetics.pronounce(&base_word),
            simple_meaning: self.simplifier.simplify(&entry.definition),
            synonyms: entry.synonyms,
            forms: self.inflections.forms(&base_word, &entry.part_of_speech),
            part_of_speech: entry.part_of_speech,
            example_sentence,
            base_word,
        })
    }

    /// The formatted explanation, or an apology when the word is unknown.
    pub fn explain(&self, word: &str) -> String {
        match self.record(word) {
            Ok(record) => format_output(&record.to_marker_text(), &record.base_word),
            Err(error) => {
                info!(word, %error, "word not in lexicon");
                format!("{ERROR_GLYPH} Sorry, I don't understand the word '{word}' yet.")
            }
        }
    }
}
