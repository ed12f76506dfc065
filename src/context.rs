//! Session context.
//!
//! Replaces the original page's ambient globals (current language, loaded
//! translations) with an explicit state object. The session validates raw
//! user input, delegates to the pure evaluators and answers localized
//! queries; rendering stays with the caller.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_password_strength;
use crate::link::classify_url;
use crate::locale::{Tip, Translations};
use crate::types::{InputError, Language, PasswordEvaluation, SuspicionVerdict};

/// Fallback welcome when the string table has no `chatbot.welcome`.
const DEFAULT_WELCOME: &str = "Hello!";

/// Active language plus the loaded string table.
#[derive(Debug, Clone)]
pub struct Session {
    language: Language,
    translations: Translations,
}

impl Session {
    pub fn new(translations: Translations, language: Language) -> Self {
        Self {
            language,
            translations,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Localized welcome message for a fresh chat log.
    pub fn welcome(&self) -> String {
        self.translations
            .lookup(self.language, "chatbot.welcome")
            .unwrap_or(DEFAULT_WELCOME)
            .to_string()
    }

    /// Switches the active language and returns the new language's welcome
    /// message. The caller clears its chat log and shows this fresh
    /// welcome; everything rendered afterwards uses the new language.
    pub fn set_language(&mut self, language: Language) -> String {
        self.language = language;
        self.welcome()
    }

    /// Looks up a UI string by dot path in the active language. `None`
    /// means the caller keeps its prior text.
    pub fn text(&self, key_path: &str) -> Option<&str> {
        self.translations.lookup(self.language, key_path)
    }

    /// Validates and classifies a raw URL. The input is trimmed here;
    /// empty input is rejected before the evaluator runs.
    pub fn check_url(&self, raw: &str) -> Result<SuspicionVerdict, InputError> {
        let url = raw.trim();
        if url.is_empty() {
            return Err(InputError::EmptyUrl);
        }
        Ok(classify_url(url))
    }

    /// Validates and evaluates a password. Empty input is rejected before
    /// the evaluator runs.
    pub fn analyze_password(
        &self,
        password: &SecretString,
    ) -> Result<PasswordEvaluation, InputError> {
        if password.expose_secret().is_empty() {
            return Err(InputError::EmptyPassword);
        }
        Ok(evaluate_password_strength(password))
    }

    /// Awareness tips in the active language.
    pub fn tips(&self) -> Vec<Tip> {
        self.translations.tips(self.language)
    }

    /// Awareness tips matching a search query, case-insensitively.
    pub fn search_tips(&self, query: &str) -> Vec<Tip> {
        self.translations.search_tips(self.language, query)
    }
}
