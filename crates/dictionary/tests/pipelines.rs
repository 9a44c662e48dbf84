use std::sync::Arc;

use dictionary::local::{LocalExplainer, Resources};
use dictionary::{
    Dictionary, DictionaryError, ExplanationGenerator, ImageLookup, InflectionLookup,
    LexicalEntry, LexicalLookup, OpenAiConfig, OpenAiGenerator, PartOfSpeech, PhoneticLookup,
    Pronunciation, TextSimplifier, WordForms,
};

struct OneWord;

impl LexicalLookup for OneWord {
    fn lookup(&self, word: &str) -> Option<LexicalEntry> {
        (word == "geese" || word == "goose").then(|| LexicalEntry {
            lemma: "goose".into(),
            part_of_speech: PartOfSpeech::Noun,
            definition: "a large water bird".into(),
            synonyms: vec!["gander".into()],
            example: None,
        })
    }
}

struct Shout;

impl TextSimplifier for Shout {
    fn simplify(&self, text: &str) -> String {
        text.to_uppercase()
    }
}

struct Silent;

impl PhoneticLookup for Silent {
    fn pronounce(&self, _word: &str) -> Pronunciation {
        Pronunciation::default()
    }
}

struct Forms;

impl InflectionLookup for Forms {
    fn forms(&self, word: &str, part_of_speech: &PartOfSpeech) -> WordForms {
        match part_of_speech {
            PartOfSpeech::Noun => WordForms::Noun {
                singular: Some(word.into()),
                plural: None,
            },
            _ => WordForms::None,
        }
    }
}

#[test]
fn local_pipeline_with_synthetic_providers() {
    let explainer = LocalExplainer::new(OneWord, Shout, Silent, Forms);
    assert_eq!(
        explainer.explain("geese"),
        "📘 Word: Goose\n\
         📖 Part of Speech: N\n\
         🔊 Pronunciation (IPA): Not available (ARPABET: Not available)\n\
         🔤 Simple Meaning: **A LARGE WATER BIRD**\n\
         🟢 Synonyms: gander\n\
         🔢 Singular: goose\n\
         🔢 Plural: (unknown)\n\
         💬 Example: *I saw a goose in the story.*"
    );
    assert!(matches!(
        explainer.record("duck"),
        Err(DictionaryError::NotFound(word)) if word == "duck"
    ));
}

#[test]
fn local_pipeline_with_embedded_data() {
    let resources = Resources::embedded().unwrap();
    let explainer = LocalExplainer::from_resources(&resources);

    let noun = explainer.explain("children");
    assert!(noun.starts_with("📘 Word: Child\n📖 Part of Speech: N\n"));
    assert!(noun.contains("🟢 Synonyms: child, kid, youngster, minor, nipper"));
    assert!(noun.contains("🔢 Plural: children"));

    let adverb = explainer.explain("quickly");
    assert!(adverb.contains("📖 Part of Speech: ADV"));
    assert!(!adverb.contains("🔢") && !adverb.contains("🔁"));

    let verb = explainer.explain("jumped");
    assert!(verb.starts_with("📘 Word: Jump\n📖 Part of Speech: V\n"));
    assert!(verb.contains("🔁 Past Participle: jumped"));

    let record = explainer.record("wrote").unwrap();
    assert_eq!(record.base_word, "write");
    assert_eq!(
        record.forms,
        WordForms::Verb {
            past_simple: Some("wrote".into()),
            past_participle: Some("written".into()),
        }
    );
}

struct Echo;

impl ExplanationGenerator for Echo {
    async fn generate(&self, word: &str) -> Result<String, DictionaryError> {
        Ok(format!(
            "📘 Word: {word}\n📖 Part of Speech: V\n🔤 Simple Meaning: move fast\n🔢 Plural: runs\n🔁 Past Simple: ran\n💬 Example: I am running."
        ))
    }
}

struct NoImage;

impl ImageLookup for NoImage {
    async fn find_image(&self, _query: &str) -> Result<Option<String>, DictionaryError> {
        Ok(None)
    }
}

#[tokio::test]
async fn remote_pipeline_normalizes_before_formatting() {
    let resources = Resources::embedded().unwrap();
    let dict = Dictionary::new(Arc::clone(&resources.wordnet), Echo, NoImage);
    let explanation = dict.explain("Running").await;
    assert_eq!(explanation.base_word, "run");
    assert_eq!(
        explanation.text,
        "📘 Word: Run\n\
         📖 Part of Speech: V\n\
         🔤 Simple Meaning: **move fast**\n\
         🔁 Past Simple: ran\n\
         💬 Example: *I am running.*"
    );
    assert_eq!(explanation.image_url, None);
}

#[tokio::test]
async fn remote_pipeline_normalizes_words_outside_the_lexicon() {
    let resources = Resources::embedded().unwrap();
    let dict = Dictionary::new(Arc::clone(&resources.wordnet), Echo, NoImage);
    let explanation = dict.explain("Smiling").await;
    assert_eq!(explanation.base_word, "smile");
    assert!(explanation.text.starts_with("📘 Word: Smile\n"));
}

#[tokio::test]
async fn remote_failure_yields_no_markers() {
    let resources = Resources::embedded().unwrap();
    let generator = OpenAiGenerator::new(OpenAiConfig {
        base_url: "http://127.0.0.1:9".into(),
        ..Default::default()
    });
    let dict = Dictionary::new(Arc::clone(&resources.wordnet), generator, NoImage);
    let explanation = dict.explain("cat").await;
    assert_eq!(explanation.text, "");
}
