//! Gemini API client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::ai::{Completion, CompletionProvider, Prompt, TokenUsage};
use crate::error::{CommitMessageError, Result};

/// Gemini API base URL
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    api_key: SecretString,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(api_key: SecretString, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &Prompt) -> Result<Completion> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE,
            self.model,
            self.api_key.expose_secret()
        );

        let request_body = GeminiRequest {
            system_instruction: Some(GeminiContent {
                parts: vec![Part {
                    text: prompt.system.clone(),
                }],
            }),
            contents: vec![GeminiContent {
                parts: prompt
                    .user_parts
                    .iter()
                    .map(|part| Part { text: part.clone() })
                    .collect(),
            }],
            generation_config: Some(GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 1024,
            }),
        };

        let response = self
            .client
            .post(&url)
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

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| CommitMessageError::Provider(format!("failed to parse response: {}", e)))?;

        let text = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(CommitMessageError::Provider(
                "empty response from API".to_string(),
            ));
        }

        Ok(Completion {
            text,
            model: self.model.clone(),
            response_id: gemini_response.response_id,
            usage: gemini_response.usage_metadata.map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            }),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gemini API Request/Response types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
    response_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    // Absent when generation was blocked; surfaced as an empty completion
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
    #[serde(default)]
    total_token_count: u64,
}
