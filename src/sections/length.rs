//! Length section - rewards longer passwords.

use secrecy::{ExposeSecret, SecretString};

use super::RuleOutcome;
use crate::types::Feedback;

const MIN_LENGTH: usize = 8;
const BONUS_LENGTH: usize = 12;

/// Scores the password length.
///
/// # Returns
/// - +2 for length ≥ 12
/// - +1 for length ≥ 8
/// - 0 with a "too short" suggestion otherwise
pub fn length_section(password: &SecretString) -> RuleOutcome {
    let len = password.expose_secret().chars().count();
    if len >= BONUS_LENGTH {
        RuleOutcome::passed(2)
    } else if len >= MIN_LENGTH {
        RuleOutcome::passed(1)
    } else {
        RuleOutcome::failed(Feedback::TooShort)
    }
}
