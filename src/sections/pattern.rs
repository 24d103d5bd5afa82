//! Pattern analysis section - detects runs of the same character.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Feedback;

const REPEAT_RUN: usize = 3;

/// Returns `true` if any character appears three or more times in a row.
pub fn has_repeated_run(password: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut repeated_count = 0;
    for c in password.chars() {
        if prev == Some(c) {
            repeated_count += 1;
            if repeated_count >= REPEAT_RUN {
                return true;
            }
        } else {
            prev = Some(c);
            repeated_count = 1;
        }
    }
    false
}

/// Analyzes password for repeated-character runs (e.g., "aaa").
///
/// # Returns
/// - `[RepeatedCharacters]` if a run was found
/// - `[]` otherwise
pub fn pattern_analysis_section(password: &SecretString) -> SectionResult {
    if has_repeated_run(password.expose_secret()) {
        return vec![Feedback::RepeatedCharacters];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let result = pattern_analysis_section(&secret("Aa1!1111"));
        assert_eq!(result, vec![Feedback::RepeatedCharacters]);
    }

    #[test]
    fn test_pattern_section_two_in_a_row_is_fine() {
        assert!(pattern_analysis_section(&secret("aabbcc11!!")).is_empty());
    }

    #[test]
    fn test_pattern_section_sequences_are_not_runs() {
        assert!(pattern_analysis_section(&secret("abcd1234")).is_empty());
    }

    #[test]
    fn test_pattern_section_too_short() {
        assert!(pattern_analysis_section(&secret("")).is_empty());
        assert!(pattern_analysis_section(&secret("aa")).is_empty());
    }

    #[test]
    fn test_repeated_run_positions() {
        assert!(has_repeated_run("aaa"));
        assert!(has_repeated_run("xyz!!!"));
        assert!(has_repeated_run("ab   cd"));
        assert!(has_repeated_run("\n\n\n"));
        assert!(has_repeated_run("ééé"));
        assert!(!has_repeated_run("aabaa"));
    }
}
