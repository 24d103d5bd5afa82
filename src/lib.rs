//! Password strength meter library
//!
//! This library classifies a password as `Weak`, `Moderate` or `Strong`
//! from its length, character-class variety and repeated-character runs,
//! and lists concrete suggestions for improving it.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Password1".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.label, StrengthLabel::Moderate);
//! assert_eq!(evaluation.messages(), vec!["Add special characters."]);
//! println!("{}", evaluation);
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

// Public API
pub use evaluator::{evaluate, evaluate_password_strength};
pub use sections::CharacterClasses;
pub use types::{EvaluationResult, Feedback, ParseStrengthLabelError, StrengthLabel};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, EvaluateError, DEFAULT_DEBOUNCE};
