//! Character variety section - checks for lowercase, uppercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Feedback;

/// Which of the four character classes occur in a password.
///
/// Classes use ASCII ranges only; anything outside `A-Z`, `a-z` and `0-9`
/// counts as special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharacterClasses {
    pub fn scan(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            match c {
                'a'..='z' => classes.lower = true,
                'A'..='Z' => classes.upper = true,
                '0'..='9' => classes.digit = true,
                _ => classes.special = true,
            }
        }
        classes
    }

    /// Number of classes present, 0 to 4.
    pub fn count(&self) -> usize {
        [self.lower, self.upper, self.digit, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Checks if the password contains each character class.
///
/// # Returns
/// One entry per missing class, in lowercase, uppercase, digit, special order.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let classes = CharacterClasses::scan(password.expose_secret());

    [
        (classes.lower, Feedback::AddLowercase),
        (classes.upper, Feedback::AddUppercase),
        (classes.digit, Feedback::AddDigits),
        (classes.special, Feedback::AddSpecial),
    ]
    .into_iter()
    .filter(|(present, _)| !present)
    .map(|(_, feedback)| feedback)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = character_variety_section(&secret("lowercase123!"));
        assert_eq!(result, vec![Feedback::AddUppercase]);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = character_variety_section(&secret("UPPERCASE123!"));
        assert_eq!(result, vec![Feedback::AddLowercase]);
    }

    #[test]
    fn test_variety_section_missing_digits() {
        let result = character_variety_section(&secret("NoNumbers!"));
        assert_eq!(result, vec![Feedback::AddDigits]);
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = character_variety_section(&secret("NoSpecial123"));
        assert_eq!(result, vec![Feedback::AddSpecial]);
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert!(character_variety_section(&secret("HasAll123!@#")).is_empty());
    }

    #[test]
    fn test_variety_section_empty_reports_all_four_in_order() {
        assert_eq!(
            character_variety_section(&secret("")),
            vec![
                Feedback::AddLowercase,
                Feedback::AddUppercase,
                Feedback::AddDigits,
                Feedback::AddSpecial,
            ]
        );
    }

    #[test]
    fn test_non_ascii_counts_as_special() {
        let classes = CharacterClasses::scan("ÄÖü٣");
        assert_eq!(
            classes,
            CharacterClasses { lower: false, upper: false, digit: false, special: true }
        );
        assert_eq!(classes.count(), 1);
    }

    #[test]
    fn test_count() {
        assert_eq!(CharacterClasses::scan("").count(), 0);
        assert_eq!(CharacterClasses::scan("Password1").count(), 3);
        assert_eq!(CharacterClasses::scan("Password1 ").count(), 4);
    }
}
