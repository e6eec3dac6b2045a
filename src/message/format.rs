//! Message formatting and validation
//!
//! Turns a raw model completion into a policy-compliant commit message:
//! line-ending normalization, subject extraction and word-boundary
//! truncation, label filtering in the body, and blank-line collapsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CommitMessageError, Result};
use crate::message::locale;

/// A short token followed by a colon at line start, e.g. "Note:" or "근거:".
/// The colon must be followed by whitespace or end the line, so prose like
/// "https://example" or "12:30" is left alone.
static LABEL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\s:]{1,16}):(?:\s+|$)").unwrap());

/// Formatting constraints derived from the resolved configuration
pub struct FormatOptions {
    /// Keep only the subject line
    pub one_line: bool,
    /// Maximum subject length in characters
    pub max_length: usize,
    /// Locale tag selecting the rationale label
    pub language: String,
}

/// Format a raw completion into the final commit message.
///
/// The result honours three invariants: the subject never exceeds
/// `max_length` characters, the body carries at most one label (the
/// rationale label for the requested locale), and there are no trailing
/// blank lines or runs of more than one blank line.
pub fn format_message(raw: &str, opts: &FormatOptions) -> Result<String> {
    if opts.max_length == 0 {
        return Err(CommitMessageError::Validation(
            "the subject length limit must be positive".to_string(),
        ));
    }

    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.lines().map(str::trim_end).collect();

    let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return Err(CommitMessageError::Validation(
            "the provider returned an empty message".to_string(),
        ));
    };

    let subject = truncate_subject(lines[first].trim(), opts.max_length);
    if opts.one_line {
        return Ok(subject);
    }

    let label = locale::rationale_label(&opts.language);
    let body = rebuild_body(&lines[first + 1..], label);
    if body.is_empty() {
        Ok(subject)
    } else {
        Ok(format!("{subject}\n\n{body}"))
    }
}

/// Truncate an overlong subject at the last whitespace boundary at or before
/// the limit; hard-cut when no boundary exists within the limit. A truncated
/// subject never ends in punctuation or whitespace.
fn truncate_subject(subject: &str, max: usize) -> String {
    if subject.chars().count() <= max {
        return subject.to_string();
    }

    let cut = subject
        .char_indices()
        .nth(max)
        .map(|(i, _)| i)
        .unwrap_or(subject.len());
    let head = &subject[..cut];

    // The cut already lands on a word boundary when the next character is
    // whitespace; otherwise back up to the last boundary inside the head.
    let next_is_boundary = subject[cut..]
        .chars()
        .next()
        .map_or(true, char::is_whitespace);
    let at_boundary = if next_is_boundary {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(ws) => &head[..ws],
            None => head,
        }
    };

    let trimmed =
        at_boundary.trim_end_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());
    if trimmed.is_empty() {
        // All-punctuation subjects would vanish entirely; keep the hard cut.
        head.trim_end().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Reassemble the body: strip every label-like prefix except the first
/// occurrence of the rationale label, and collapse blank runs to a single
/// blank line with no leading or trailing blanks.
fn rebuild_body(lines: &[&str], rationale_label: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut kept_rationale = false;

    for line in lines {
        let cleaned = if line.trim().is_empty() {
            String::new()
        } else {
            clean_line(line, rationale_label, &mut kept_rationale)
        };

        if cleaned.trim().is_empty() {
            if out.last().is_some_and(|prev| !prev.is_empty()) {
                out.push(String::new());
            }
            continue;
        }
        out.push(cleaned);
    }

    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// Keep, strip or pass through a single body line depending on its prefix
fn clean_line(line: &str, rationale_label: &str, kept_rationale: &mut bool) -> String {
    let Some(caps) = LABEL_PREFIX.captures(line) else {
        return line.to_string();
    };

    let token_end = caps.get(1).map(|m| m.end()).unwrap_or(0);
    let label = &line[..token_end + 1];
    if !*kept_rationale && label.eq_ignore_ascii_case(rationale_label) {
        *kept_rationale = true;
        return line.to_string();
    }

    line[caps.get(0).map(|m| m.end()).unwrap_or(0)..]
        .trim_start()
        .to_string()
}
