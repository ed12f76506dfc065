//! Chat response resolver.
//!
//! Single-turn question answering: a remote completion API when a
//! credential is available, a deterministic keyword-based local fallback
//! otherwise or whenever the remote call fails. The user always receives
//! an answer; no conversation state is kept across calls.

use crate::types::Language;

#[cfg(feature = "async")]
use crate::credential::ApiCredential;
#[cfg(feature = "async")]
use reqwest::Client;
#[cfg(feature = "async")]
use secrecy::ExposeSecret;
#[cfg(feature = "async")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "async")]
use thiserror::Error;

/// Where a chat answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Remote,
    Fallback,
}

/// A resolved chat answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub source: AnswerSource,
    /// Transient notice for the caller's message log, set once when a
    /// configured remote call failed.
    pub notice: Option<&'static str>,
}

impl ChatReply {
    #[cfg(feature = "async")]
    fn fallback(question: &str, language: Language, notice: Option<&'static str>) -> Self {
        Self {
            text: fallback_answer(question, language),
            source: AnswerSource::Fallback,
            notice,
        }
    }
}

#[cfg(feature = "async")]
const REMOTE_FAILED_NOTICE: &str = "Error: API call failed. Using fallback response.";

/// Locally computed answer, derived from keyword matches on the
/// lower-cased question. Matching is plain substring and the greeting
/// branch is tested first, so "this" greets like "hi" and so does
/// "phishing" itself; the English phishing explainer is reachable only
/// for questions that name phishing without spelling it out.
pub fn fallback_answer(question: &str, language: Language) -> String {
    let q = question.to_lowercase();

    if q.contains("hi") || q.contains("hello") || q.contains("হাই") {
        return match language {
            Language::English => "Hi! How can I help you with online safety?",
            Language::Bengali => "হ্যালো! অনলাইন নিরাপত্তা নিয়ে কী জানতে চাও?",
        }
        .to_string();
    }

    if q.contains("phishing") || q.contains("ফিশিং") {
        return match language {
            Language::English => {
                "Phishing is a fake email/link.\n\nHow to spot:\n• Check 'https'\n• Suspicious sender"
            }
            Language::Bengali => {
                "ফিশিং হলো জাল ইমেইল/লিংক।\n\nচেনার উপায়:\n• 'https' আছে কিনা\n• প্রেরক সন্দেহজনক কিনা"
            }
        }
        .to_string();
    }

    match language {
        Language::English => "Great question!\n\nThink Before You Click.",
        Language::Bengali => "খুব ভালো প্রশ্ন!\n\nথিঙ্ক বিফোর ইউ ক্লিক।",
    }
    .to_string()
}

/// Composes the single-turn prompt asking for a brief answer in the
/// requested language.
pub fn build_prompt(question: &str, language: Language) -> String {
    match language {
        Language::English => format!("Answer briefly in English about cyber safety: {question}"),
        Language::Bengali => format!("সাইবার নিরাপত্তা বিষয়ে বাংলায় সংক্ষিপ্ত উত্তর দাও: {question}"),
    }
}

#[cfg(feature = "async")]
const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

#[cfg(feature = "async")]
const MODEL: &str = "gpt-3.5-turbo";

#[cfg(feature = "async")]
#[derive(Error, Debug)]
enum CompletionError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion API returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("completion response had no choices")]
    MalformedResponse,
}

/// Resolves chat questions against the external completion service with
/// local fallback.
#[cfg(feature = "async")]
pub struct ChatResolver {
    client: Client,
    endpoint: String,
    credential: Option<ApiCredential>,
    temperature: f32,
    max_tokens: u32,
}

#[cfg(feature = "async")]
impl ChatResolver {
    pub fn new(credential: Option<ApiCredential>) -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credential,
            temperature: 0.7,
            max_tokens: 150,
        }
    }

    /// Overrides the completion endpoint. Test seam.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Whether a credential is configured; without one every answer is a
    /// local fallback.
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Resolves a question to an answer. Never fails: any remote error is
    /// logged, surfaced as a one-time notice on the reply, and answered
    /// with the local fallback.
    pub async fn resolve(&self, question: &str, language: Language) -> ChatReply {
        let Some(credential) = &self.credential else {
            return ChatReply::fallback(question, language, None);
        };

        match self.call_completion(credential, question, language).await {
            Ok(text) => ChatReply {
                text,
                source: AnswerSource::Remote,
                notice: None,
            },
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("completion call failed, using fallback: {}", e);
                #[cfg(not(feature = "tracing"))]
                let _ = e;
                ChatReply::fallback(question, language, Some(REMOTE_FAILED_NOTICE))
            }
        }
    }

    async fn call_completion(
        &self,
        credential: &ApiCredential,
        question: &str,
        language: Language,
    ) -> Result<String, CompletionError> {
        let payload = ChatCompletionRequest {
            model: MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(question, language),
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.key().expose_secret())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status));
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::MalformedResponse)?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[cfg(feature = "async")]
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[cfg(feature = "async")]
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[cfg(feature = "async")]
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[cfg(feature = "async")]
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[cfg(feature = "async")]
#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
