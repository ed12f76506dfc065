//! Core data types shared by the evaluators.

use thiserror::Error;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Bengali,
}

impl Language {
    /// Language code as used in the localization document ("en" / "bn").
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Bengali => "bn",
        }
    }

    /// Parses a language code; unknown codes return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "bn" => Some(Language::Bengali),
            _ => None,
        }
    }
}

/// Classification of a checked URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspicionVerdict {
    Safe,
    Suspicious,
}

impl SuspicionVerdict {
    /// User-facing verdict message in the given language.
    pub fn message(&self, language: Language) -> &'static str {
        match (self, language) {
            (SuspicionVerdict::Safe, Language::English) => {
                "Success: This link seems safe to visit."
            }
            (SuspicionVerdict::Safe, Language::Bengali) => {
                "Success: এই লিংকটি নিরাপদ বলে মনে হচ্ছে।"
            }
            (SuspicionVerdict::Suspicious, Language::English) => {
                "Warning: This link looks suspicious. Avoid clicking!"
            }
            (SuspicionVerdict::Suspicious, Language::Bengali) => {
                "Warning: এই লিংকটি সন্দেহজনক। ক্লিক করবেন না!"
            }
        }
    }
}

/// Accumulated password score. Each rule adds 0 or a fixed positive
/// increment; the maximum over the current rule set is 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Password strength tier, a pure function of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Maps a score to its tier: ≤3 weak, ≤5 medium, else strong.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..=3 => StrengthTier::Weak,
            4..=5 => StrengthTier::Medium,
            _ => StrengthTier::Strong,
        }
    }

    /// User-facing tier label in the given language.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (StrengthTier::Weak, Language::English) => "Weak",
            (StrengthTier::Weak, Language::Bengali) => "দুর্বল",
            (StrengthTier::Medium, Language::English) => "Medium",
            (StrengthTier::Medium, Language::Bengali) => "মাঝারি",
            (StrengthTier::Strong, Language::English) => "Strong",
            (StrengthTier::Strong, Language::Bengali) => "শক্তিশালী",
        }
    }
}

/// Improvement suggestion emitted by a failed scoring rule.
///
/// Kept as a key so the evaluator stays language-independent; the text is
/// resolved at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSymbol,
    CommonWord,
}

impl Feedback {
    /// Suggestion text in the given language.
    pub fn message(&self, language: Language) -> &'static str {
        match (self, language) {
            (Feedback::TooShort, Language::English) => "Use at least 8 characters",
            (Feedback::TooShort, Language::Bengali) => "কমপক্ষে ৮ অক্ষর ব্যবহার করুন",
            (Feedback::MissingUppercase, Language::English) => "Add uppercase letters",
            (Feedback::MissingUppercase, Language::Bengali) => "বড় হাতের অক্ষর যোগ করুন",
            (Feedback::MissingLowercase, Language::English) => "Add lowercase letters",
            (Feedback::MissingLowercase, Language::Bengali) => "ছোট হাতের অক্ষর যোগ করুন",
            (Feedback::MissingDigit, Language::English) => "Add numbers",
            (Feedback::MissingDigit, Language::Bengali) => "সংখ্যা যোগ করুন",
            (Feedback::MissingSymbol, Language::English) => "Add symbols (!@#$%)",
            (Feedback::MissingSymbol, Language::Bengali) => "চিহ্ন যোগ করুন (!@#$%)",
            (Feedback::CommonWord, Language::English) => "Avoid common words",
            (Feedback::CommonWord, Language::Bengali) => "সাধারণ শব্দ এড়িয়ে চলুন",
        }
    }
}

/// Result of a password evaluation: the accumulated score plus feedback
/// keys in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub feedback: Vec<Feedback>,
}

/// At most this many suggestions are rendered, in rule order.
pub const MAX_RENDERED_FEEDBACK: usize = 3;

impl PasswordEvaluation {
    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_score(self.score)
    }

    /// Renders the suggestion line for the given language: the first 3
    /// suggestions joined with " • " behind a "Tips:" label, or a positive
    /// affirmation when every rule passed.
    pub fn advice(&self, language: Language) -> String {
        if self.feedback.is_empty() {
            return match language {
                Language::English => "Great! Your password is strong.".to_string(),
                Language::Bengali => "দারুণ! তোমার পাসওয়ার্ড শক্তিশালী।".to_string(),
            };
        }

        let label = match language {
            Language::English => "Tips:",
            Language::Bengali => "টিপস:",
        };
        let joined = self
            .feedback
            .iter()
            .take(MAX_RENDERED_FEEDBACK)
            .map(|f| f.message(language))
            .collect::<Vec<_>>()
            .join(" • ");
        format!("{label} {joined}")
    }
}

/// Invalid user input, rejected before an evaluator is invoked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("URL is empty")]
    EmptyUrl,
    #[error("password is empty")]
    EmptyPassword,
}

impl InputError {
    /// Inline message shown to the user in the given language.
    pub fn message(&self, language: Language) -> &'static str {
        match (self, language) {
            (InputError::EmptyUrl, Language::English) => "Please enter a URL.",
            (InputError::EmptyUrl, Language::Bengali) => "একটি URL লিখুন।",
            (InputError::EmptyPassword, Language::English) => "Please enter a password.",
            (InputError::EmptyPassword, Language::Bengali) => "একটি পাসওয়ার্ড লিখুন।",
        }
    }
}
