//! Runtime configuration, read once from the process environment.
//!
//! Credentials are not validated here. A missing key only shows up when the
//! remote call is made, through the usual error paths.

use std::env;
use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_UNSPLASH_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_OPENAI_URL.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    pub access_key: Option<String>,
    pub base_url: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: DEFAULT_UNSPLASH_URL.into(),
        }
    }
}

/// Paths to full data files. `None` means the embedded starter data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataConfig {
    /// WordNet database directory; takes precedence over `lexicon`.
    pub wordnet: Option<PathBuf>,
    pub lexicon: Option<PathBuf>,
    pub cmudict: Option<PathBuf>,
    pub irregular_verbs: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub openai: OpenAiConfig,
    pub images: ImageConfig,
    pub data: DataConfig,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai: OpenAiConfig::default(),
            images: ImageConfig::default(),
            data: DataConfig::default(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        config.openai.api_key = get("OPENAI_API_KEY");
        if let Some(model) = get("EASY_DICT_MODEL") {
            config.openai.model = model;
        }
        if let Some(url) = get("EASY_DICT_OPENAI_URL") {
            config.openai.base_url = url.trim_end_matches('/').to_string();
        }

        config.images.access_key = get("UNSPLASH_ACCESS_KEY");
        if let Some(url) = get("EASY_DICT_UNSPLASH_URL") {
            config.images.base_url = url.trim_end_matches('/').to_string();
        }

        config.data.wordnet = get("EASY_DICT_WORDNET").map(PathBuf::from);
        config.data.lexicon = get("EASY_DICT_LEXICON").map(PathBuf::from);
        config.data.cmudict = get("EASY_DICT_CMUDICT").map(PathBuf::from);
        config.data.irregular_verbs = get("EASY_DICT_IRREGULAR_VERBS").map(PathBuf::from);

        if let Some(port) = get("EASY_DICT_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!(%port, "ignoring invalid EASY_DICT_PORT"),
            }
        }

        config
    }
}
