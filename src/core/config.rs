//! Application configuration
//!
//! All provider, model and language selection happens here, once, at
//! process start. The resulting [`Config`] is passed by reference into the
//! prompt builder, the provider client and the formatter; nothing else in
//! the crate reads the environment.

use clap::ValueEnum;
use secrecy::SecretString;

use crate::error::{CommitMessageError, Result};

/// Provider override, e.g. `GIT_COMMIT_MESSAGE_PROVIDER=google`
pub const ENV_PROVIDER: &str = "GIT_COMMIT_MESSAGE_PROVIDER";
/// OpenAI model overrides, in precedence order
pub const ENV_OPENAI_MODEL: &str = "GIT_COMMIT_MESSAGE_MODEL";
pub const ENV_OPENAI_MODEL_FALLBACK: &str = "OPENAI_MODEL";
/// Gemini model overrides, in precedence order
pub const ENV_GEMINI_MODEL: &str = "GIT_COMMIT_MESSAGE_GEMINI_MODEL";
pub const ENV_GEMINI_MODEL_FALLBACK: &str = "GOOGLE_GENAI_MODEL";
/// Output language override
pub const ENV_LANGUAGE: &str = "GIT_COMMIT_MESSAGE_LANGUAGE";
/// Credentials
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

const DEFAULT_OPENAI_MODEL: &str = "gpt-5-mini";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_LANGUAGE: &str = "en-GB";
pub const DEFAULT_SUBJECT_MAX: usize = 72;

/// Supported completion providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    /// OpenAI Chat Completions API
    Openai,
    /// Google Gemini generateContent API
    Google,
}

impl ProviderKind {
    fn from_env_value(value: &str) -> Option<Self> {
        match value {
            "openai" => Some(ProviderKind::Openai),
            "google" => Some(ProviderKind::Google),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Openai => write!(f, "openai"),
            ProviderKind::Google => write!(f, "google"),
        }
    }
}

/// Settings the user supplied on the command line
#[derive(Debug, Default)]
pub struct Overrides {
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub one_line: bool,
    pub max_length: usize,
}

/// Resolved application configuration
pub struct Config {
    /// Which completion provider to call
    pub provider: ProviderKind,
    /// Model identifier sent to the provider
    pub model: String,
    /// IETF locale tag controlling output spelling and the rationale label
    pub language: String,
    /// Produce only a subject line
    pub one_line: bool,
    /// Maximum subject line length in characters
    pub max_length: usize,
    /// API key for the selected provider
    pub api_key: SecretString,
}

impl Config {
    /// Resolve the full configuration from CLI overrides and the environment
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        if overrides.max_length == 0 {
            return Err(CommitMessageError::Validation(
                "--max-length must be a positive integer".to_string(),
            ));
        }

        let provider = resolve_provider(
            env_value(ENV_PROVIDER).as_deref(),
            overrides.provider,
            overrides.model.as_deref(),
        );

        let model = match provider {
            ProviderKind::Openai => resolve_model(
                overrides.model.as_deref(),
                env_value(ENV_OPENAI_MODEL).as_deref(),
                env_value(ENV_OPENAI_MODEL_FALLBACK).as_deref(),
                DEFAULT_OPENAI_MODEL,
            ),
            ProviderKind::Google => resolve_model(
                overrides.model.as_deref(),
                env_value(ENV_GEMINI_MODEL).as_deref(),
                env_value(ENV_GEMINI_MODEL_FALLBACK).as_deref(),
                DEFAULT_GEMINI_MODEL,
            ),
        };

        let language = resolve_language(
            overrides.language.as_deref(),
            env_value(ENV_LANGUAGE).as_deref(),
        );

        let key_var = match provider {
            ProviderKind::Openai => ENV_OPENAI_API_KEY,
            ProviderKind::Google => ENV_GOOGLE_API_KEY,
        };
        let api_key = env_value(key_var)
            .map(SecretString::from)
            .ok_or(CommitMessageError::MissingApiKey(key_var))?;

        Ok(Config {
            provider,
            model,
            language,
            one_line: overrides.one_line,
            max_length: overrides.max_length,
            api_key,
        })
    }
}

/// Read an environment variable, treating empty values as unset
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Pick the provider: environment override, then the explicit flag, then a
/// guess from the model name, then OpenAI.
fn resolve_provider(
    env_provider: Option<&str>,
    explicit: Option<ProviderKind>,
    model: Option<&str>,
) -> ProviderKind {
    if let Some(kind) = env_provider.and_then(ProviderKind::from_env_value) {
        return kind;
    }
    if let Some(kind) = explicit {
        return kind;
    }
    match model {
        Some(name) if name.to_lowercase().contains("gemini") => ProviderKind::Google,
        _ => ProviderKind::Openai,
    }
}

/// Pick the model name: explicit flag, then the two env overrides, then the
/// provider default.
fn resolve_model(
    explicit: Option<&str>,
    env_primary: Option<&str>,
    env_fallback: Option<&str>,
    default: &str,
) -> String {
    explicit
        .or(env_primary)
        .or(env_fallback)
        .unwrap_or(default)
        .to_string()
}

/// Pick the output language tag
fn resolve_language(explicit: Option<&str>, env_language: Option<&str>) -> String {
    explicit
        .or(env_language)
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_env_beats_flag() {
        let kind = resolve_provider(Some("google"), Some(ProviderKind::Openai), None);
        assert_eq!(kind, ProviderKind::Google);
    }

    #[test]
    fn test_provider_flag_beats_inference() {
        let kind = resolve_provider(None, Some(ProviderKind::Openai), Some("gemini-2.5-flash"));
        assert_eq!(kind, ProviderKind::Openai);
    }

    #[test]
    fn test_provider_inferred_from_model_name() {
        assert_eq!(
            resolve_provider(None, None, Some("gemini-2.5-flash")),
            ProviderKind::Google
        );
        assert_eq!(
            resolve_provider(None, None, Some("gpt-5-mini")),
            ProviderKind::Openai
        );
        assert_eq!(resolve_provider(None, None, None), ProviderKind::Openai);
    }

    #[test]
    fn test_unknown_provider_env_value_is_ignored() {
        let kind = resolve_provider(Some("anthropic"), None, Some("gemini-pro"));
        assert_eq!(kind, ProviderKind::Google);
    }

    #[test]
    fn test_model_precedence() {
        assert_eq!(
            resolve_model(Some("flag"), Some("env1"), Some("env2"), "default"),
            "flag"
        );
        assert_eq!(
            resolve_model(None, Some("env1"), Some("env2"), "default"),
            "env1"
        );
        assert_eq!(resolve_model(None, None, Some("env2"), "default"), "env2");
        assert_eq!(resolve_model(None, None, None, "default"), "default");
    }

    #[test]
    fn test_language_default() {
        assert_eq!(resolve_language(None, None), "en-GB");
        assert_eq!(resolve_language(None, Some("ko-KR")), "ko-KR");
        assert_eq!(resolve_language(Some("ja-JP"), Some("ko-KR")), "ja-JP");
    }
}
