//! AI integration module
//!
//! One trait, two hosted backends (OpenAI and Google Gemini). The concrete
//! client is chosen once at startup; the rest of the pipeline only sees
//! [`CompletionProvider`].

pub mod gemini;
pub mod openai;
pub mod prompts;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use prompts::Prompt;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::core::config::{Config, ProviderKind};
use crate::error::Result;

/// Token usage reported by the provider, when it reports any
#[derive(Debug, Clone, Copy)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// A raw completion together with generation metadata
#[derive(Debug, Clone)]
pub struct Completion {
    /// Unprocessed completion text
    pub text: String,
    /// Model that produced the completion
    pub model: String,
    /// Provider-assigned response identifier
    pub response_id: Option<String>,
    /// Token accounting for the request
    pub usage: Option<TokenUsage>,
}

/// Common contract for hosted completion providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Model identifier this client will request
    fn model_name(&self) -> &str;

    /// Send the prompt and return the raw completion
    async fn complete(&self, prompt: &Prompt) -> Result<Completion>;
}

/// Build the provider selected by the configuration
pub fn create_provider(config: &Config) -> Box<dyn CompletionProvider> {
    match config.provider {
        ProviderKind::Openai => Box::new(OpenAiClient::new(
            config.api_key.clone(),
            config.model.clone(),
        )),
        ProviderKind::Google => Box::new(GeminiClient::new(
            config.api_key.clone(),
            config.model.clone(),
        )),
    }
}
