//! Web form: type a word, get the model's explanation and a picture.

use std::convert::Infallible;
use std::sync::Arc;

use dictionary::local::{Resources, WordNet};
use dictionary::{Config, Dictionary, OpenAiGenerator, UnsplashImages};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warp::Filter;

mod page;

type WebDictionary = Dictionary<Arc<WordNet>, OpenAiGenerator, UnsplashImages>;

#[derive(Debug, Default, Deserialize)]
struct WordQuery {
    #[serde(default)]
    word: String,
}

async fn explain_page(
    query: WordQuery,
    dict: Arc<WebDictionary>,
) -> Result<impl warp::Reply, Infallible> {
    let word = query.word.trim();
    let explanation = if word.is_empty() {
        None
    } else {
        Some(dict.explain(word).await)
    };
    Ok(warp::reply::html(page::render(word, explanation.as_ref())))
}

fn routes(
    dict: Arc<WebDictionary>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .and(warp::query::<WordQuery>())
        .and(warp::any().map(move || dict.clone()))
        .and_then(explain_page);

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .map(|| warp::reply::json(&serde_json::json!({ "status": "alive" })));

    index.or(health)
}

/// Both remote clients share one connection pool.
fn dictionary_for(config: &Config, resources: &Resources) -> WebDictionary {
    let client = reqwest::Client::new();
    Dictionary::new(
        resources.wordnet.clone(),
        OpenAiGenerator::with_client(client.clone(), config.openai.clone()),
        UnsplashImages::with_client(client, config.images.clone()),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        info!(path = %path.display(), "loaded environment file");
    }
    let config = Config::from_env();
    let resources = Resources::load(&config.data)?;
    let dict = Arc::new(dictionary_for(&config, &resources));

    info!(port = config.port, model = %config.openai.model, "serving {}", page::TITLE);
    warp::serve(routes(dict)).run(([0, 0, 0, 0], config.port)).await;
    Ok(())
}
