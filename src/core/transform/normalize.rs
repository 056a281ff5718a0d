//! Display-name normalization
//!
//! This module implements the pure function that turns a field's human
//! display name into a stable, filesystem- and identifier-safe token:
//! lowercase, accent-free, hyphen-delimited.

use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn non_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9-]").expect("valid regex"))
}

fn hyphen_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("valid regex"))
}

/// Normalizes a field display name into a stable token
///
/// The transformation:
/// 1. Unicode NFKD decomposition with combining marks stripped
///    (`"Statut Déploiement"` → `"Statut Deploiement"`)
/// 2. Runs of whitespace become a single hyphen
/// 3. Every character outside `[a-zA-Z0-9-]` becomes a hyphen
/// 4. Consecutive hyphens collapse; leading/trailing hyphens are stripped
/// 5. Lowercase
///
/// Deterministic, pure and total: invalid input degrades to an empty
/// token rather than failing. An empty result means "no rename possible";
/// scripts with no Latin decomposition (CJK, Cyrillic, ...) normalize to
/// the empty token.
///
/// # Examples
///
/// ```
/// use quarry::core::transform::normalize_field_name;
///
/// assert_eq!(normalize_field_name("Statut Déploiement"), "statut-deploiement");
/// assert_eq!(normalize_field_name(""), "");
/// ```
pub fn normalize_field_name(display_name: &str) -> String {
    if display_name.is_empty() {
        tracing::warn!("Invalid field display name: empty");
        return String::new();
    }

    let without_accents: String = display_name
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let hyphenated = whitespace_re().replace_all(&without_accents, "-");
    let cleaned = non_token_re().replace_all(&hyphenated, "-");
    let collapsed = hyphen_run_re().replace_all(&cleaned, "-");
    let result = collapsed.trim_matches('-').to_lowercase();

    tracing::debug!(
        display_name = %display_name,
        token = %result,
        "Normalized field display name"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Statut Déploiement", "statut-deploiement"; "accented french")]
    #[test_case("Root Cause", "root-cause"; "plain two words")]
    #[test_case("Épinglé", "epingle"; "leading accent")]
    #[test_case("Sprint 2024/Q1", "sprint-2024-q1"; "slash becomes hyphen")]
    #[test_case("  padded   name  ", "padded-name"; "whitespace runs and edges")]
    #[test_case("già_fatto (sì)", "gia-fatto-si"; "punctuation collapses")]
    #[test_case("UPPER case", "upper-case"; "lowercased")]
    #[test_case("a--b---c", "a-b-c"; "existing hyphen runs collapse")]
    fn normalizes(input: &str, expected: &str) {
        assert_eq!(normalize_field_name(input), expected);
    }

    #[test]
    fn test_empty_input_degrades_to_empty_token() {
        assert_eq!(normalize_field_name(""), "");
    }

    #[test]
    fn test_non_latin_scripts_degrade_to_empty_token() {
        // No accent decomposition exists for these scripts; every char
        // falls outside the token class and is stripped.
        assert_eq!(normalize_field_name("日本語"), "");
        assert_eq!(normalize_field_name("Кириллица"), "");
    }

    #[test]
    fn test_idempotent_on_normalized_tokens() {
        for input in ["Statut Déploiement", "Root Cause", "a b-c", "x (y) z"] {
            let once = normalize_field_name(input);
            assert_eq!(normalize_field_name(&once), once, "not a fixed point: {input}");
        }
    }

    #[test]
    fn test_output_alphabet_is_ascii_token() {
        for input in ["Statut Déploiement", "àéîõü", "crème brûlée!", "Ça va?"] {
            let token = normalize_field_name(input);
            assert!(
                token
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "non-token char in {token:?}"
            );
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            normalize_field_name("Statut Déploiement"),
            normalize_field_name("Statut Déploiement")
        );
    }
}
