//! Localization module
//!
//! Loads the bilingual string table from a JSON document and answers
//! dot-path lookups and tips queries. The table is read-only after load;
//! missing keys degrade gracefully (lookups return `None`, tips default to
//! empty) so callers can keep whatever text they already show.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::types::Language;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Localization file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read localization file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse localization file: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Localization document must be an object keyed by language code")]
    InvalidDocument,
}

/// A single awareness tip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tip {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// The loaded localization table.
///
/// Top-level keys are language codes; values hold a `tips` array plus
/// arbitrary nested UI strings addressable by dot-separated key paths
/// (e.g. `chatbot.welcome`). Unknown languages fall back to English.
#[derive(Debug, Clone)]
pub struct Translations {
    root: Value,
}

/// Returns the localization file path.
///
/// Priority:
/// 1. Environment variable `TOOLKIT_LOCALE_PATH`
/// 2. Default path `./assets/localization.json`
pub fn locale_path() -> PathBuf {
    std::env::var("TOOLKIT_LOCALE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/localization.json"))
}

impl Translations {
    /// Loads the localization table from the path returned by
    /// [`locale_path`]. Call once at startup.
    pub fn load() -> Result<Self, LocaleError> {
        Self::load_from_path(locale_path())
    }

    /// Loads the localization table from a specific file path.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, LocaleError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("localization load FAILED: file not found {}", path.display());
            return Err(LocaleError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "localization loaded: {} languages from {}",
            table.root.as_object().map(|o| o.len()).unwrap_or(0),
            path.display()
        );

        Ok(table)
    }

    /// Parses a localization table from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, LocaleError> {
        let root: Value = serde_json::from_str(content)?;
        if !root.is_object() {
            return Err(LocaleError::InvalidDocument);
        }
        Ok(Self { root })
    }

    /// An empty table; every lookup misses. Useful as a degraded default
    /// when the localization file cannot be loaded.
    pub fn empty() -> Self {
        Self {
            root: Value::Object(serde_json::Map::new()),
        }
    }

    /// The language pack for `language`, falling back to English when the
    /// requested language is absent.
    fn pack(&self, language: Language) -> Option<&Value> {
        self.root
            .get(language.code())
            .or_else(|| self.root.get(Language::English.code()))
    }

    /// Looks up a UI string by dot-separated key path, e.g.
    /// `chatbot.welcome`. Returns `None` on any missing segment or when
    /// the value is not a string; never panics.
    pub fn lookup(&self, language: Language, key_path: &str) -> Option<&str> {
        let mut value = self.pack(language)?;
        for key in key_path.split('.') {
            value = value.get(key)?;
        }
        value.as_str()
    }

    /// The tips list for `language`; empty when absent or malformed.
    pub fn tips(&self, language: Language) -> Vec<Tip> {
        self.pack(language)
            .and_then(|pack| pack.get("tips"))
            .and_then(|tips| serde_json::from_value(tips.clone()).ok())
            .unwrap_or_default()
    }

    /// Tips whose title or content contains `query`, case-insensitively.
    /// An empty query returns every tip.
    pub fn search_tips(&self, language: Language, query: &str) -> Vec<Tip> {
        let query = query.to_lowercase();
        self.tips(language)
            .into_iter()
            .filter(|tip| {
                tip.title.to_lowercase().contains(&query)
                    || tip.content.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "en": {
            "chatbot": { "welcome": "Welcome to the toolkit!" },
            "tips": [
                { "title": "Use strong passwords", "content": "Mix letters, numbers and symbols." },
                { "title": "Spot phishing", "content": "Check the sender before clicking." }
            ]
        },
        "bn": {
            "chatbot": { "welcome": "টুলকিটে স্বাগতম!" },
            "tips": [
                { "title": "শক্তিশালী পাসওয়ার্ড", "content": "অক্ষর, সংখ্যা ও চিহ্ন মেশান।" }
            ]
        }
    }"#;

    fn sample_table() -> Translations {
        Translations::from_json_str(SAMPLE).expect("sample must parse")
    }

    #[test]
    fn test_lookup_dot_path() {
        let table = sample_table();
        assert_eq!(
            table.lookup(Language::English, "chatbot.welcome"),
            Some("Welcome to the toolkit!")
        );
        assert_eq!(
            table.lookup(Language::Bengali, "chatbot.welcome"),
            Some("টুলকিটে স্বাগতম!")
        );
    }

    #[test]
    fn test_lookup_missing_key_returns_none() {
        let table = sample_table();
        assert_eq!(table.lookup(Language::English, "chatbot.goodbye"), None);
        assert_eq!(table.lookup(Language::English, "no.such.path"), None);
        // Non-string values are not strings to the caller either.
        assert_eq!(table.lookup(Language::English, "tips"), None);
    }

    #[test]
    fn test_tips_listing_per_language() {
        let table = sample_table();
        assert_eq!(table.tips(Language::English).len(), 2);
        assert_eq!(table.tips(Language::Bengali).len(), 1);
    }

    #[test]
    fn test_search_tips_case_insensitive() {
        let table = sample_table();
        let hits = table.search_tips(Language::English, "PHISHING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Spot phishing");

        let hits = table.search_tips(Language::English, "clicking");
        assert_eq!(hits.len(), 1);

        assert!(table.search_tips(Language::English, "no match").is_empty());
        assert_eq!(table.search_tips(Language::English, "").len(), 2);
    }

    #[test]
    fn test_missing_language_falls_back_to_english() {
        let table = Translations::from_json_str(
            r#"{ "en": { "chatbot": { "welcome": "Hello!" } } }"#,
        )
        .unwrap();
        assert_eq!(table.lookup(Language::Bengali, "chatbot.welcome"), Some("Hello!"));
    }

    #[test]
    fn test_empty_table_misses_everything() {
        let table = Translations::empty();
        assert_eq!(table.lookup(Language::English, "chatbot.welcome"), None);
        assert!(table.tips(Language::English).is_empty());
    }

    #[test]
    fn test_invalid_document_rejected() {
        assert!(matches!(
            Translations::from_json_str("[1, 2, 3]"),
            Err(LocaleError::InvalidDocument)
        ));
        assert!(matches!(
            Translations::from_json_str("not json"),
            Err(LocaleError::ParseError(_))
        ));
    }

    #[test]
    #[serial]
    fn test_load_from_env_path() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{}", SAMPLE).expect("Failed to write");

        // SAFETY: env mutation confined to serial tests
        unsafe {
            std::env::set_var("TOOLKIT_LOCALE_PATH", temp_file.path());
        }
        let table = Translations::load().expect("load must succeed");
        assert_eq!(
            table.lookup(Language::English, "chatbot.welcome"),
            Some("Welcome to the toolkit!")
        );
        unsafe {
            std::env::remove_var("TOOLKIT_LOCALE_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_load_missing_file() {
        unsafe {
            std::env::set_var("TOOLKIT_LOCALE_PATH", "/nonexistent/localization.json");
        }
        let result = Translations::load();
        assert!(matches!(result, Err(LocaleError::FileNotFound(_))));
        unsafe {
            std::env::remove_var("TOOLKIT_LOCALE_PATH");
        }
    }
}
