//! Commit message formatting
//!
//! This module turns raw provider completions into policy-compliant commit
//! messages: subject length enforcement, rationale label handling per
//! locale, and whitespace normalization.

pub mod format;
pub mod locale;

pub use format::{format_message, FormatOptions};
