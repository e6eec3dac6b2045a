//! OpenAI Chat Completions client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::ai::{Completion, CompletionProvider, Prompt, TokenUsage};
use crate::error::{CommitMessageError, Result};

/// OpenAI Chat Completions endpoint
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI API client
pub struct OpenAiClient {
    client: Client,
    api_key: SecretString,
    model: String,
}

impl OpenAiClient {
    /// Create a new OpenAI client
    pub fn new(api_key: SecretString, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &Prompt) -> Result<Completion> {
        let mut messages = vec![ChatMessage {
            role: "system".to_string(),
            content: prompt.system.clone(),
        }];
        messages.extend(prompt.user_parts.iter().map(|part| ChatMessage {
            role: "user".to_string(),
            content: part.clone(),
        }));

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CommitMessageError::Provider(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CommitMessageError::Provider(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| CommitMessageError::Provider(format!("failed to parse response: {}", e)))?;

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(CommitMessageError::Provider(
                "empty completion from API".to_string(),
            ));
        }

        Ok(Completion {
            text,
            model: chat_response.model.unwrap_or_else(|| self.model.clone()),
            response_id: chat_response.id,
            usage: chat_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OpenAI API Request/Response types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    id: Option<String>,
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}
