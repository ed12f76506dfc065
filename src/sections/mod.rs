//! Password scoring sections
//!
//! Each section evaluates one composition rule against the full password.
//! Rules are independent: a rule contributes a fixed increment on pass or a
//! feedback key on failure, and no rule ever decreases the score.

mod common;
mod length;
mod variety;

pub use common::common_word_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

use crate::types::Feedback;

/// Outcome of a single scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    /// 0 or the rule's fixed increment.
    pub points: u8,
    /// Set only when the rule failed.
    pub feedback: Option<Feedback>,
}

impl RuleOutcome {
    pub fn passed(points: u8) -> Self {
        Self {
            points,
            feedback: None,
        }
    }

    pub fn failed(feedback: Feedback) -> Self {
        Self {
            points: 0,
            feedback: Some(feedback),
        }
    }

    /// Rule did not apply; no increment, no feedback.
    pub fn skipped() -> Self {
        Self {
            points: 0,
            feedback: None,
        }
    }
}
