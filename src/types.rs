//! Evaluation result types: strength label, feedback entries and the pair of both.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse three-level classification of password quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strength label: {0:?}")]
pub struct ParseStrengthLabelError(pub String);

impl FromStr for StrengthLabel {
    type Err = ParseStrengthLabelError;

    /// Parses the exact label name, case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weak" => Ok(StrengthLabel::Weak),
            "Moderate" => Ok(StrengthLabel::Moderate),
            "Strong" => Ok(StrengthLabel::Strong),
            other => Err(ParseStrengthLabelError(other.to_string())),
        }
    }
}

/// A single improvement suggestion.
///
/// Variants are declared in the order the evaluator emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    TooShort,
    TooLong,
    AddLowercase,
    AddUppercase,
    AddDigits,
    AddSpecial,
    RepeatedCharacters,
}

impl Feedback {
    /// Human-readable advice shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::TooShort => "Password should be at least 8 characters long.",
            Feedback::TooLong => {
                "Password is quite long, consider if you can remember it easily."
            }
            Feedback::AddLowercase => "Add lowercase letters.",
            Feedback::AddUppercase => "Add uppercase letters.",
            Feedback::AddDigits => "Add digits.",
            Feedback::AddSpecial => "Add special characters.",
            Feedback::RepeatedCharacters => {
                "Avoid using the same character three or more times in a row."
            }
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of a single evaluation: label plus ordered feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub label: StrengthLabel,
    pub feedback: Vec<Feedback>,
}

impl EvaluationResult {
    /// Feedback as plain strings, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.feedback.iter().map(|f| f.message().to_string()).collect()
    }

    pub fn needs_improvement(&self) -> bool {
        !self.feedback.is_empty()
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strength: {}", self.label)?;
        if self.feedback.is_empty() {
            return write!(f, "Your password looks good!");
        }
        for (i, item) in self.feedback.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {}", item)?;
        }
        Ok(())
    }
}
