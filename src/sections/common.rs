//! Common-word section - penalizes guessable substrings.

use secrecy::{ExposeSecret, SecretString};

use super::RuleOutcome;
use crate::types::Feedback;

/// Substrings that make a password guessable, matched case-insensitively.
const COMMON_SUBSTRINGS: [&str; 4] = ["name", "123", "password", "abc"];

/// +1 if the password contains none of the common substrings.
///
/// Skipped entirely for the empty password: no increment, no feedback.
/// Empty input is rejected before evaluation, so in practice this rule
/// always runs.
pub fn common_word_section(password: &SecretString) -> RuleOutcome {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return RuleOutcome::skipped();
    }

    let lowered = pwd.to_lowercase();
    if COMMON_SUBSTRINGS.iter().any(|w| lowered.contains(w)) {
        RuleOutcome::failed(Feedback::CommonWord)
    } else {
        RuleOutcome::passed(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_word_section_clean_password() {
        let pwd = SecretString::new("Tr0ub4dor&9xyz".to_string().into());
        assert_eq!(common_word_section(&pwd), RuleOutcome::passed(1));
    }

    #[test]
    fn test_common_word_section_detects_substring() {
        let pwd = SecretString::new("mypassword99".to_string().into());
        assert_eq!(
            common_word_section(&pwd),
            RuleOutcome::failed(Feedback::CommonWord)
        );
    }

    #[test]
    fn test_common_word_section_case_insensitive() {
        let pwd = SecretString::new("MyPASSword!".to_string().into());
        assert_eq!(
            common_word_section(&pwd),
            RuleOutcome::failed(Feedback::CommonWord)
        );
        let pwd = SecretString::new("ABCdef".to_string().into());
        assert_eq!(
            common_word_section(&pwd),
            RuleOutcome::failed(Feedback::CommonWord)
        );
    }

    #[test]
    fn test_common_word_section_digit_run() {
        let pwd = SecretString::new("hello1234".to_string().into());
        assert_eq!(
            common_word_section(&pwd),
            RuleOutcome::failed(Feedback::CommonWord)
        );
    }

    #[test]
    fn test_common_word_section_skips_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert_eq!(common_word_section(&pwd), RuleOutcome::skipped());
    }
}
