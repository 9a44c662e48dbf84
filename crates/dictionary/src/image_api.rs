// https://unsplash.com/documentation#search-photos

use serde::Deserialize;

use crate::config::ImageConfig;
use crate::providers::ImageLookup;
use crate::DictionaryError;

const SERVICE: &str = "Unsplash";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

pub(crate) async fn search_photo(
    client: &reqwest::Client,
    config: &ImageConfig,
    query: &str,
) -> Result<Option<String>, DictionaryError> {
    let mut req = client
        .get(format!("{}/search/photos", config.base_url))
        .query(&[("query", query), ("per_page", "1")]);
    if let Some(access_key) = &config.access_key {
        req = req.header(reqwest::header::AUTHORIZATION, format!("Client-ID {access_key}"));
    }
    let res = req.send().await.map_err(|source| DictionaryError::Fetch {
        service: SERVICE,
        source,
    })?;
    let status = res.status();
    if !status.is_success() {
        return Err(DictionaryError::Api {
            service: SERVICE,
            status,
            message: status.canonical_reason().unwrap_or("unknown error").to_string(),
        });
    }
    let body = res
        .json::<SearchResponse>()
        .await
        .map_err(|source| DictionaryError::Deserialize {
            service: SERVICE,
            source,
        })?;
    Ok(body.first_url())
}

impl SearchResponse {
    fn first_url(self) -> Option<String> {
        self.results.into_iter().next().map(|photo| photo.urls.regular)
    }
}

/// Finds one illustrative photo per word.
#[derive(Debug, Clone)]
pub struct UnsplashImages {
    client: reqwest::Client,
    config: ImageConfig,
}

impl UnsplashImages {
    pub fn new(config: ImageConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ImageConfig) -> Self {
        Self { client, config }
    }
}

impl ImageLookup for UnsplashImages {
    async fn find_image(&self, query: &str) -> Result<Option<String>, DictionaryError> {
        search_photo(&self.client, &self.config, query).await
    }
}
