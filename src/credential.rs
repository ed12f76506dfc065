//! Credential module
//!
//! Loads the external completion service's API key from a small JSON file.
//! A missing or unreadable credential is never fatal to the toolkit; the
//! chat resolver simply runs in fallback-only mode.

use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Credential file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read credential file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse credential file: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Credential file holds an empty API key")]
    EmptyKey,
}

#[derive(Deserialize)]
struct CredentialFile {
    openai_api_key: String,
}

/// The external completion service's API key.
#[derive(Clone)]
pub struct ApiCredential {
    key: SecretString,
}

/// Returns the credential file path.
///
/// Priority:
/// 1. Environment variable `TOOLKIT_API_KEY_PATH`
/// 2. Default path `./assets/openai-key.json`
pub fn credential_path() -> PathBuf {
    std::env::var("TOOLKIT_API_KEY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/openai-key.json"))
}

impl ApiCredential {
    /// Loads the credential from the path returned by [`credential_path`].
    pub fn load() -> Result<Self, CredentialError> {
        Self::load_from_path(credential_path())
    }

    /// Loads the credential from a specific file path.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, CredentialError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::warn!("credential load failed: file not found {}", path.display());
            return Err(CredentialError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let parsed: CredentialFile = serde_json::from_str(&content)?;

        if parsed.openai_api_key.trim().is_empty() {
            return Err(CredentialError::EmptyKey);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("API credential loaded from {}", path.display());

        Ok(Self {
            key: SecretString::new(parsed.openai_api_key.into()),
        })
    }

    /// Wraps an already-obtained key.
    pub fn from_key(key: SecretString) -> Self {
        Self { key }
    }

    /// The secret key material.
    pub fn key(&self) -> &SecretString {
        &self.key
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredential").finish_non_exhaustive()
    }
}
