//! Character variety sections - uppercase, lowercase, digits, symbols.
//!
//! Four independent rules, each worth +1 and each with its own suggestion.
//! Character classes are ASCII, matching the classic `[A-Z]` / `[a-z]` /
//! `[0-9]` / `[^A-Za-z0-9]` definitions.

use secrecy::{ExposeSecret, SecretString};

use super::RuleOutcome;
use crate::types::Feedback;

/// +1 if the password contains an ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString) -> RuleOutcome {
    if password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
    {
        RuleOutcome::passed(1)
    } else {
        RuleOutcome::failed(Feedback::MissingUppercase)
    }
}

/// +1 if the password contains an ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString) -> RuleOutcome {
    if password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_lowercase())
    {
        RuleOutcome::passed(1)
    } else {
        RuleOutcome::failed(Feedback::MissingLowercase)
    }
}

/// +1 if the password contains a digit.
pub fn digit_section(password: &SecretString) -> RuleOutcome {
    if password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        RuleOutcome::passed(1)
    } else {
        RuleOutcome::failed(Feedback::MissingDigit)
    }
}

/// +1 if the password contains a non-alphanumeric character.
pub fn symbol_section(password: &SecretString) -> RuleOutcome {
    if password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
    {
        RuleOutcome::passed(1)
    } else {
        RuleOutcome::failed(Feedback::MissingSymbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_section_missing() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        assert_eq!(
            uppercase_section(&pwd),
            RuleOutcome::failed(Feedback::MissingUppercase)
        );
    }

    #[test]
    fn test_lowercase_section_missing() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        assert_eq!(
            lowercase_section(&pwd),
            RuleOutcome::failed(Feedback::MissingLowercase)
        );
    }

    #[test]
    fn test_digit_section_missing() {
        let pwd = SecretString::new("NoNumbers!".to_string().into());
        assert_eq!(digit_section(&pwd), RuleOutcome::failed(Feedback::MissingDigit));
    }

    #[test]
    fn test_symbol_section_missing() {
        let pwd = SecretString::new("NoSpecial123".to_string().into());
        assert_eq!(symbol_section(&pwd), RuleOutcome::failed(Feedback::MissingSymbol));
    }

    #[test]
    fn test_all_classes_present() {
        let pwd = SecretString::new("HasAll123!@#".to_string().into());
        assert_eq!(uppercase_section(&pwd), RuleOutcome::passed(1));
        assert_eq!(lowercase_section(&pwd), RuleOutcome::passed(1));
        assert_eq!(digit_section(&pwd), RuleOutcome::passed(1));
        assert_eq!(symbol_section(&pwd), RuleOutcome::passed(1));
    }

    #[test]
    fn test_non_ascii_letters_count_as_symbols() {
        // Matches the [^A-Za-z0-9] definition.
        let pwd = SecretString::new("পাসওয়ার্ড".to_string().into());
        assert_eq!(symbol_section(&pwd), RuleOutcome::passed(1));
        assert_eq!(
            uppercase_section(&pwd),
            RuleOutcome::failed(Feedback::MissingUppercase)
        );
    }
}
