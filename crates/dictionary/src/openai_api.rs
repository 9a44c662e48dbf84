// https://platform.openai.com/docs/api-reference/responses/create

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::OpenAiConfig;
use crate::prompt::build_prompt;
use crate::providers::ExplanationGenerator;
use crate::DictionaryError;

const SERVICE: &str = "OpenAI";

#[derive(Debug, Serialize)]
struct ResponseRequest<'a> {
    model: &'a str,
    input: [InputMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ResponseBody {
    /// Concatenates every `output_text` part, like the SDK's `output_text`.
    fn output_text(&self) -> String {
        self.output
            .iter()
            .flat_map(|item| item.content.iter())
            .filter(|content| content.kind == "output_text")
            .map(|content| content.text.as_str())
            .collect()
    }
}

pub(crate) async fn create_response(
    client: &reqwest::Client,
    config: &OpenAiConfig,
    prompt: &str,
) -> Result<String, DictionaryError> {
    let body = ResponseRequest {
        model: &config.model,
        input: [InputMessage {
            role: "user",
            content: prompt,
        }],
    };
    let mut req = client
        .post(format!("{}/responses", config.base_url))
        .json(&body);
    if let Some(api_key) = &config.api_key {
        req = req.bearer_auth(api_key);
    }
    let res = req.send().await.map_err(|source| DictionaryError::Fetch {
        service: SERVICE,
        source,
    })?;

    let status = res.status();
    if !status.is_success() {
        let message = res
            .json::<ErrorBody>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
        return Err(DictionaryError::Api {
            service: SERVICE,
            status,
            message,
        });
    }

    let body = res
        .json::<ResponseBody>()
        .await
        .map_err(|source| DictionaryError::Deserialize {
            service: SERVICE,
            source,
        })?;
    let text = body.output_text();
    if text.trim().is_empty() {
        return Err(DictionaryError::EmptyResponse);
    }
    debug!(chars = text.len(), "model answered");
    Ok(text)
}

/// Asks a hosted model to fill in the explanation template.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiGenerator {
    pub fn new(config: OpenAiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }
}

impl ExplanationGenerator for OpenAiGenerator {
    async fn generate(&self, word: &str) -> Result<String, DictionaryError> {
        create_response(&self.client, &self.config, &build_prompt(word)).await
    }
}
