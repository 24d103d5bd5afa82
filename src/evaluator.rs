//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    CharacterClasses, MIN_LENGTH, STRONG_LENGTH, SectionResult, char_len,
    character_variety_section, has_repeated_run, length_section, pattern_analysis_section,
};
use crate::types::{EvaluationResult, StrengthLabel};

/// Minimum number of character classes for anything better than `Weak`.
const MIN_CLASSES: usize = 3;

/// Debounce window used by callers that re-evaluate on every keystroke.
#[cfg(feature = "async")]
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[cfg(feature = "async")]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    #[error("Evaluation cancelled")]
    Cancelled,
    #[error("Evaluation result receiver dropped")]
    ChannelClosed,
}

/// Evaluates password strength and returns the label with ordered feedback.
///
/// Sections run unconditionally and in a fixed order (length, variety,
/// pattern); the label is derived independently from the same measurements.
pub fn evaluate_password_strength(password: &SecretString) -> EvaluationResult {
    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("pattern", pattern_analysis_section),
    ];

    let mut feedback = Vec::new();
    for (_section_name, section_fn) in sections {
        let section_feedback = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            "section {} produced {} feedback entries",
            _section_name,
            section_feedback.len()
        );
        feedback.extend(section_feedback);
    }

    let label = classify(password.expose_secret());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: label={}, length={}, feedback={}",
        label,
        char_len(password.expose_secret()),
        feedback.len()
    );

    EvaluationResult { label, feedback }
}

/// Convenience entry point for callers holding a plain string.
pub fn evaluate(password: &str) -> EvaluationResult {
    evaluate_password_strength(&SecretString::new(password.into()))
}

fn classify(pwd: &str) -> StrengthLabel {
    let len = char_len(pwd);
    let types_count = CharacterClasses::scan(pwd).count();

    if len >= MIN_LENGTH && types_count >= MIN_CLASSES && !has_repeated_run(pwd) {
        if len >= STRONG_LENGTH && types_count == 4 {
            StrengthLabel::Strong
        } else {
            StrengthLabel::Moderate
        }
    } else {
        StrengthLabel::Weak
    }
}

/// Async version that waits out a debounce window and sends the result via channel.
///
/// Cancelling `token` during the wait aborts without evaluating. The
/// evaluation itself is never interrupted.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    debounce: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) -> Result<(), EvaluateError> {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled during debounce");
            return Err(EvaluateError::Cancelled);
        }
        _ = tokio::time::sleep(debounce) => {}
    }

    let evaluation = evaluate_password_strength(password);

    tx.send(evaluation).await.map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
        EvaluateError::ChannelClosed
    })
}
