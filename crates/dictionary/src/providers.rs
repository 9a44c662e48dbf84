//! Seams between the formatter and the services that feed it.

use std::future::Future;
use std::sync::Arc;

use crate::dictionary::{LexicalEntry, PartOfSpeech, Pronunciation, WordForms};
use crate::DictionaryError;

/// Reduces a surface word to its dictionary form.
pub trait Normalizer {
    fn base_form(&self, word: &str) -> String;
}

pub trait LexicalLookup {
    fn lookup(&self, word: &str) -> Option<LexicalEntry>;
}

pub trait TextSimplifier {
    fn simplify(&self, text: &str) -> String;
}

pub trait PhoneticLookup {
    fn pronounce(&self, word: &str) -> Pronunciation;
}

pub trait InflectionLookup {
    fn forms(&self, word: &str, part_of_speech: &PartOfSpeech) -> WordForms;
}

/// Produces free explanation text for a word, normally from a hosted model.
pub trait ExplanationGenerator {
    fn generate(&self, word: &str)
        -> impl Future<Output = Result<String, DictionaryError>> + Send;
}

pub trait ImageLookup {
    fn find_image(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<String>, DictionaryError>> + Send;
}

impl<T: Normalizer + ?Sized> Normalizer for Arc<T> {
    fn base_form(&self, word: &str) -> String {
        (**self).base_form(word)
    }
}

impl<T: LexicalLookup + ?Sized> LexicalLookup for Arc<T> {
    fn lookup(&self, word: &str) -> Option<LexicalEntry> {
        (**self).lookup(word)
    }
}

impl<T: TextSimplifier + ?Sized> TextSimplifier for Arc<T> {
    fn simplify(&self, text: &str) -> String {
        (**self).simplify(text)
    }
}

impl<T: PhoneticLookup + ?Sized> PhoneticLookup for Arc<T> {
    fn pronounce(&self, word: &str) -> Pronunciation {
        (**self).pronounce(word)
    }
}

impl<T: InflectionLookup + ?Sized> InflectionLookup for Arc<T> {
    fn forms(&self, word: &str, part_of_speech: &PartOfSpeech) -> WordForms {
        (**self).forms(word, part_of_speech)
    }
}
