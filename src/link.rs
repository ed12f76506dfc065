//! Link heuristic evaluator.
//!
//! Classifies a URL by the presence of known bait keywords. This is a
//! deliberately naive static heuristic: no network access, no domain or
//! certificate inspection. A keyword-free phishing URL passes and a
//! legitimate URL containing "login" is flagged.

use std::time::Duration;

use crate::types::SuspicionVerdict;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Keywords that mark a URL as suspicious, matched as lower-case
/// substrings anywhere in the input.
pub const SUSPICIOUS_KEYWORDS: [&str; 8] = [
    "login", "verify", "update", "bank", "free", "click", "secure", "account",
];

/// Interval the verdict is held back before delivery, matching the
/// original checker's pacing.
pub const DEFAULT_RESULT_DELAY: Duration = Duration::from_millis(1200);

/// Classifies a URL: any single keyword match is sufficient for
/// [`SuspicionVerdict::Suspicious`], case-insensitively.
///
/// Callers trim the input and reject empty strings beforehand.
pub fn classify_url(url: &str) -> SuspicionVerdict {
    let lowered = url.to_lowercase();
    if SUSPICIOUS_KEYWORDS.iter().any(|word| lowered.contains(word)) {
        SuspicionVerdict::Suspicious
    } else {
        SuspicionVerdict::Safe
    }
}

/// Classifies a URL, holds the verdict back for `delay`, then delivers it
/// via channel.
///
/// The token guards against a stale result: when a newer check supersedes
/// this one, cancelling the token drops the verdict instead of letting it
/// overwrite the newer input's result.
#[cfg(feature = "async")]
pub async fn classify_url_delayed(
    url: &str,
    delay: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<SuspicionVerdict>,
) {
    let verdict = classify_url(url);

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("link check superseded, verdict dropped");
        }
        _ = tokio::time::sleep(delay) => {
            if let Err(e) = tx.send(verdict).await {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send link verdict: {}", e);
                #[cfg(not(feature = "tracing"))]
                let _ = e;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_url_is_suspicious() {
        assert_eq!(
            classify_url("http://secure-bank-login.com"),
            SuspicionVerdict::Suspicious
        );
        assert_eq!(
            classify_url("https://example.com/free-stuff"),
            SuspicionVerdict::Suspicious
        );
    }

    #[test]
    fn test_keyword_free_url_is_safe() {
        assert_eq!(classify_url("https://example.com"), SuspicionVerdict::Safe);
        assert_eq!(
            classify_url("https://en.wikipedia.org/wiki/Rust"),
            SuspicionVerdict::Safe
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            classify_url("LOGIN-required.example.com"),
            SuspicionVerdict::Suspicious
        );
        assert_eq!(
            classify_url("https://MyBANK.example"),
            SuspicionVerdict::Suspicious
        );
    }

    #[test]
    fn test_every_keyword_triggers() {
        for word in SUSPICIOUS_KEYWORDS {
            let url = format!("https://example.com/{word}");
            assert_eq!(classify_url(&url), SuspicionVerdict::Suspicious, "{word}");
        }
    }
}
