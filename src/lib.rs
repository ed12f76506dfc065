//! Bilingual cyber safety toolkit core
//!
//! This library provides the logic behind a small English/Bengali cyber
//! safety toolkit: a phishing link heuristic, a rule-based password
//! strength evaluator, a localized tips browser and a chat resolver that
//! proxies to an external completion API with a local fallback.
//!
//! The evaluators are pure functions; all state (active language, loaded
//! translations, credential) lives in explicit objects so the core is
//! testable without any UI environment.
//!
//! # Features
//!
//! - `async` (default): Enables the delayed cancellable link check and
//!   the remote chat resolver
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `TOOLKIT_LOCALE_PATH`: Custom path to the localization JSON file
//!   (default: `./assets/localization.json`)
//! - `TOOLKIT_API_KEY_PATH`: Custom path to the API key JSON file
//!   (default: `./assets/openai-key.json`)
//!
//! # Example
//!
//! ```rust,no_run
//! use safety_toolkit::{Language, Session, Translations};
//! use secrecy::SecretString;
//!
//! let translations = Translations::load().expect("Failed to load localization");
//! let mut session = Session::new(translations, Language::English);
//!
//! let verdict = session.check_url("http://secure-bank-login.com").unwrap();
//! println!("Verdict: {}", verdict.message(session.language()));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = session.analyze_password(&password).unwrap();
//! println!("Tier: {}", evaluation.tier().label(session.language()));
//! println!("{}", evaluation.advice(session.language()));
//! ```

// Internal modules
mod chat;
mod context;
mod credential;
mod evaluator;
mod link;
mod locale;
mod sections;
mod types;

// Public API
pub use chat::{AnswerSource, ChatReply, build_prompt, fallback_answer};
pub use context::Session;
pub use credential::{ApiCredential, CredentialError, credential_path};
pub use evaluator::evaluate_password_strength;
pub use link::{DEFAULT_RESULT_DELAY, SUSPICIOUS_KEYWORDS, classify_url};
pub use locale::{LocaleError, Tip, Translations, locale_path};
pub use types::{
    Feedback, InputError, Language, MAX_RENDERED_FEEDBACK, PasswordEvaluation, PasswordScore,
    StrengthTier, SuspicionVerdict,
};

#[cfg(feature = "async")]
pub use chat::ChatResolver;

#[cfg(feature = "async")]
pub use link::classify_url_delayed;
