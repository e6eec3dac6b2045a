//! Locale handling for the rationale label
//!
//! The body of a generated message may carry a single explanatory section
//! introduced by a "Rationale:" label. The label is translated to the
//! requested output language; unrecognized locales fall back to English.

/// English fallback label
pub const ENGLISH_LABEL: &str = "Rationale:";

/// Normalizes a locale tag to its primary language subtag
/// (e.g. "en_GB.UTF-8" -> "en").
pub fn normalize_tag(input: &str) -> String {
    let trimmed = input.trim();

    let base = trimmed
        .split('.')
        .next()
        .unwrap_or(trimmed)
        .split('@')
        .next()
        .unwrap_or(trimmed)
        .replace('_', "-");

    base.split('-')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// The rationale label for a locale tag, falling back to English
pub fn rationale_label(tag: &str) -> &'static str {
    match normalize_tag(tag).as_str() {
        "en" => "Rationale:",
        "ko" => "근거:",
        "ja" => "理由:",
        "zh" => "理由:",
        "fr" => "Justification:",
        "de" => "Begründung:",
        "es" => "Justificación:",
        "it" => "Motivazione:",
        "pt" => "Justificativa:",
        "ru" => "Обоснование:",
        _ => ENGLISH_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("en-GB"), "en");
        assert_eq!(normalize_tag("ko_KR"), "ko");
        assert_eq!(normalize_tag("pt_BR.UTF-8"), "pt");
        assert_eq!(normalize_tag("de_DE@euro"), "de");
        assert_eq!(normalize_tag("JA"), "ja");
    }

    #[test]
    fn test_known_locales() {
        assert_eq!(rationale_label("en-GB"), "Rationale:");
        assert_eq!(rationale_label("ko-KR"), "근거:");
        assert_eq!(rationale_label("fr-FR"), "Justification:");
    }

    #[test]
    fn test_unrecognized_locale_falls_back_to_english() {
        assert_eq!(rationale_label("tlh"), ENGLISH_LABEL);
        assert_eq!(rationale_label(""), ENGLISH_LABEL);
        assert_eq!(rationale_label("x-custom"), ENGLISH_LABEL);
    }
}
