pub(crate) mod openai;
#[cfg(test)]
pub(crate) mod stub;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// One chat-completion call: a conversation plus the sampling parameters.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub n: u32,
    pub messages: Vec<Message>,
}

/// A hosted chat-completion endpoint.
///
/// Implementations return the text of every generated choice, in the order the
/// service lists them. The number of choices is whatever the service sends back.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Vec<String>>;
}
