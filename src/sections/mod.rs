//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength.

mod length;
mod pattern;
mod variety;

pub use length::{length_section, MIN_LENGTH, STRONG_LENGTH};
pub use pattern::{has_repeated_run, pattern_analysis_section};
pub use variety::{character_variety_section, CharacterClasses};

use crate::types::Feedback;

/// Result type for section evaluation functions.
/// Empty when the section passed; otherwise the feedback in emission order.
pub type SectionResult = Vec<Feedback>;

/// Length of a password in characters, not bytes.
pub(crate) fn char_len(password: &str) -> usize {
    password.chars().count()
}
