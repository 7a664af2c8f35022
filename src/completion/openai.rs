use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{CompletionRequest, CompletionService, Message};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    /// A missing key is not an error here; the service rejects the first call instead.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Vec<String>> {
        let mut builder = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("content-type", "application/json")
            .json(request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await
            .context("Failed to send request to OpenAI API")?
            .error_for_status()
            .context("OpenAI API error")?;

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI API response")?;

        Ok(api_response
            .choices
            .into_iter()
            .map(|choice| choice.message.content)
            .collect())
    }
}
