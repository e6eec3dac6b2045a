//! Command handler: generate the message, print or commit it

use crate::ai::prompts::{self, Prompt};
use crate::ai::{self, Completion, CompletionProvider};
use crate::cli::commands::Cli;
use crate::core::config::{Config, Overrides};
use crate::core::git::GitRepository;
use crate::error::{CommitMessageError, Result};
use crate::message::{format_message, FormatOptions};

/// Handle the single top-level command
pub async fn handle_generate(args: Cli) -> Result<()> {
    let git = GitRepository::open_current_dir()?;

    if !git.has_staged_changes()? {
        return Err(CommitMessageError::NoStagedChanges);
    }
    let diff = git.staged_diff()?;

    let config = Config::resolve(Overrides {
        provider: args.provider,
        model: args.model,
        language: args.language,
        one_line: args.one_line,
        max_length: args.max_length,
    })?;

    let provider = ai::create_provider(&config);
    tracing::debug!(
        provider = %config.provider,
        model = %config.model,
        language = %config.language,
        "requesting completion"
    );

    let prompt = prompts::build_prompt(&diff, args.context.as_deref(), &config);
    let (message, completion) = generate_message(provider.as_ref(), &prompt, &config).await?;

    if args.debug {
        print_debug_info(&prompt, &completion, &message);
    }

    if !args.commit {
        println!("{message}");
        return Ok(());
    }

    git.commit_with_message(&message, args.edit)?;
    Ok(())
}

/// The provider-facing half of the pipeline, separated so tests can inject a
/// mock provider
pub(crate) async fn generate_message(
    provider: &dyn CompletionProvider,
    prompt: &Prompt,
    config: &Config,
) -> Result<(String, Completion)> {
    let completion = provider.complete(prompt).await?;
    let message = format_message(
        &completion.text,
        &FormatOptions {
            one_line: config.one_line,
            max_length: config.max_length,
            language: config.language.clone(),
        },
    )?;
    Ok((message, completion))
}

fn print_debug_info(prompt: &Prompt, completion: &Completion, message: &str) {
    println!("==== Usage ====");
    println!("model: {}", completion.model);
    println!(
        "response_id: {}",
        completion.response_id.as_deref().unwrap_or("(n/a)")
    );
    match completion.usage {
        Some(usage) => println!(
            "tokens: prompt={} completion={} total={}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        ),
        None => println!("tokens: (provider did not return usage)"),
    }
    println!("\n==== Prompt ====");
    println!("{}", prompt.combined());
    println!("\n==== Response ====");
    println!("{}", completion.text);
    println!("\n==== Commit Message ====");
    println!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockCompletionProvider;
    use crate::core::config::ProviderKind;
    use secrecy::SecretString;

    fn config() -> Config {
        Config {
            provider: ProviderKind::Openai,
            model: "gpt-5-mini".to_string(),
            language: "en-GB".to_string(),
            one_line: false,
            max_length: 72,
            api_key: SecretString::from("test-key"),
        }
    }

    fn prompt() -> Prompt {
        Prompt {
            system: "system".to_string(),
            user_parts: vec!["# Changes (diff)\n+hello".to_string()],
        }
    }

    fn completion(text: &str) -> Completion {
        Completion {
            text: text.to_string(),
            model: "gpt-5-mini".to_string(),
            response_id: Some("resp-1".to_string()),
            usage: None,
        }
    }

    #[tokio::test]
    async fn test_completion_is_formatted() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Ok(completion("Add greeting\r\n\r\nNote: new file\n")));

        let (message, _) = generate_message(&provider, &prompt(), &config())
            .await
            .unwrap();
        assert_eq!(message, "Add greeting\n\nnew file");
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_| Err(CommitMessageError::Provider("rate limited".to_string())));

        let result = generate_message(&provider, &prompt(), &config()).await;
        assert!(matches!(result, Err(CommitMessageError::Provider(_))));
    }

    #[tokio::test]
    async fn test_empty_completion_is_a_validation_error() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_| Ok(completion("\n\n  \n")));

        let result = generate_message(&provider, &prompt(), &config()).await;
        assert!(matches!(result, Err(CommitMessageError::Validation(_))));
    }
}
