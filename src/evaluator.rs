//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    RuleOutcome, common_word_section, digit_section, length_section, lowercase_section,
    symbol_section, uppercase_section,
};
use crate::types::{PasswordEvaluation, PasswordScore};

/// Evaluates password strength and returns the accumulated score plus
/// feedback keys in rule order.
///
/// Pure and language-independent; localize the result with
/// [`PasswordEvaluation::advice`] and [`StrengthTier::label`].
///
/// Callers reject empty passwords before invoking this (empty input is a
/// UI-level error, see [`InputError::EmptyPassword`]).
///
/// [`StrengthTier::label`]: crate::types::StrengthTier::label
/// [`InputError::EmptyPassword`]: crate::types::InputError::EmptyPassword
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    // Rule order is fixed; it doubles as the feedback ordering.
    let sections: [(&str, fn(&SecretString) -> RuleOutcome); 6] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("symbol", symbol_section),
        ("common_word", common_word_section),
    ];

    for (section_name, section_fn) in sections {
        let outcome = section_fn(password);
        score += outcome.points;
        if let Some(reason) = outcome.feedback {
            #[cfg(feature = "tracing")]
            tracing::debug!("password section failed: {}", section_name);
            #[cfg(not(feature = "tracing"))]
            let _ = section_name;
            feedback.push(reason);
        }
    }

    PasswordEvaluation {
        score: PasswordScore::new(score),
        feedback,
    }
}
