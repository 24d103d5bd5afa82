//! Length section - checks password length against the comfortable range.

use secrecy::{ExposeSecret, SecretString};
use super::{char_len, SectionResult};
use crate::types::Feedback;

pub const MIN_LENGTH: usize = 8;
pub const STRONG_LENGTH: usize = 12;
const MAX_COMFORTABLE_LENGTH: usize = 20;

/// Checks the password length.
///
/// At most one message is produced: too short wins over too long.
///
/// # Returns
/// - `[TooShort]` if fewer than 8 characters
/// - `[TooLong]` if more than 20 characters
/// - `[]` otherwise
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = char_len(password.expose_secret());
    if len < MIN_LENGTH {
        vec![Feedback::TooShort]
    } else if len > MAX_COMFORTABLE_LENGTH {
        vec![Feedback::TooLong]
    } else {
        Vec::new()
    }
}
