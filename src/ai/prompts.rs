//! Prompt templates for commit message generation

use crate::core::config::Config;
use crate::message::locale;

/// Upper bound on diff text sent to a provider
const MAX_DIFF_CHARS: usize = 32_000;

const TRUNCATION_MARKER: &str = "... (diff truncated)";

/// System instruction plus ordered user content parts
pub struct Prompt {
    pub system: String,
    pub user_parts: Vec<String>,
}

impl Prompt {
    /// All user parts as one text block, for debug output and for providers
    /// that take a single content blob
    pub fn combined(&self) -> String {
        self.user_parts.join("\n\n")
    }
}

/// Compose the prompt for the staged diff and optional user context
pub fn build_prompt(diff: &str, context: Option<&str>, config: &Config) -> Prompt {
    let system = if config.one_line {
        single_line_instruction(config.max_length, &config.language)
    } else {
        multi_line_instruction(config.max_length, &config.language)
    };

    let mut user_parts = Vec::new();
    if let Some(hint) = context {
        user_parts.push(format!("# Auxiliary context (user-provided)\n{hint}"));
    }
    user_parts.push(format!(
        "# Changes (diff)\n{}",
        cap_diff(diff, MAX_DIFF_CHARS)
    ));

    Prompt { system, user_parts }
}

fn single_line_instruction(max_len: usize, language: &str) -> String {
    format!(
        "You are an expert Git commit message generator. \
Always use '{language}' spelling and style. \
Return a single-line imperative subject only (<= {max_len} chars). \
Do not include a body, bullet points, or any rationale. Do not include any line breaks. \
Consider the user-provided auxiliary context if present. \
Return only the commit message text (no code fences or prefixes like 'Commit message:')."
    )
}

fn multi_line_instruction(max_len: usize, language: &str) -> String {
    let label = locale::rationale_label(language);
    format!(
        "You are an expert Git commit message generator. \
Always use '{language}' spelling and style. \
The subject line is mandatory: start the output with the subject as the very first non-empty line, \
in imperative mood, and keep it <= {max_len} chars. Insert exactly one blank line after the subject. \
Never place bullets, headings, or labels before the subject line.

Guidelines:
- Use '-' bullets; keep each bullet short (<= 1 line).
- Prefer imperative mood verbs (Add, Fix, Update, Remove, Refactor, Document, etc.).
- Focus on what changed and why; avoid copying diff hunks verbatim.
- The only allowed label is '{label}' introducing 1-2 concise sentences explaining the intent and why; do not add other headings or prefaces.
- Do not include code fences or any surrounding labels like 'Commit message:'.
- If few details are necessary, include at least one bullet summarising the key change.
- Consider the user-provided auxiliary context if present.
Return only the commit message text in the above format."
    )
}

/// Cut an oversized diff at a line boundary, with an explicit marker so the
/// model knows content is missing
fn cap_diff(diff: &str, max_chars: usize) -> String {
    if diff.len() <= max_chars {
        return diff.to_string();
    }

    let budget = max_chars.saturating_sub(TRUNCATION_MARKER.len() + 1);
    let mut result = String::with_capacity(max_chars);
    for line in diff.lines() {
        if result.len() + line.len() + 1 > budget {
            break;
        }
        result.push_str(line);
        result.push('\n');
    }
    result.push_str(TRUNCATION_MARKER);
    result
}
