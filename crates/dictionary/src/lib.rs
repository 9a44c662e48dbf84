use std::path::PathBuf;

use tracing::{info, warn};

mod config;
mod dictionary;
mod format;
mod image_api;
pub mod local;
mod openai_api;
mod prompt;
mod providers;

pub use config::{Config, DataConfig, ImageConfig, OpenAiConfig};
pub use dictionary::{capitalize, ExplanationRecord, LexicalEntry, PartOfSpeech, Pronunciation, WordForms};
pub use format::{format_output, Field};
pub use image_api::UnsplashImages;
pub use openai_api::OpenAiGenerator;
pub use prompt::build_prompt;
pub use providers::{
    ExplanationGenerator, ImageLookup, InflectionLookup, LexicalLookup, Normalizer, PhoneticLookup,
    TextSimplifier,
};

/// Glyph that prefixes every failure message shown to the user.
pub const ERROR_GLYPH: &str = "❌";

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("request to {service} failed: {source}")]
    Fetch {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response from {service}: {source}")]
    Deserialize {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} answered {status}: {message}")]
    Api {
        service: &'static str,
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("the model returned no text")]
    EmptyResponse,
    #[error("no entry for '{0}'")]
    NotFound(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid data in {origin}: {message}")]
    Data { origin: String, message: String },
}

/// What the web form shows for one submitted word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub base_word: String,
    pub text: String,
    pub image_url: Option<String>,
}

/// The remote explanation path: normalize, ask the model, reformat, find a picture.
pub struct Dictionary<N, G, I> {
    normalizer: N,
    generator: G,
    images: I,
}

impl<N, G, I> Dictionary<N, G, I>
where
    N: Normalizer,
    G: ExplanationGenerator,
    I: ImageLookup,
{
    pub fn new(normalizer: N, generator: G, images: I) -> Self {
        Self {
            normalizer,
            generator,
            images,
        }
    }

    pub async fn explain(&self, word: &str) -> Explanation {
        let base_word = self.normalizer.base_form(word);
        info!(word, base_word = %base_word, "explaining word");

        let raw = match self.generator.generate(word).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "explanation request failed");
                format!("{ERROR_GLYPH} Error: {error}")
            }
        };
        let text = format_output(&raw, &base_word);

        let image_url = match self.images.find_image(&base_word).await {
            Ok(url) => url,
            Err(error) => {
                warn!(%error, "image lookup failed");
                None
            }
        };

        Explanation {
            base_word,
            text,
            image_url,
        }
    }
}
