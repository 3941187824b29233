//! `gemini-client` — minimal driver for the hosted Generative Language API.
//!
//! The site's AI tools need exactly one operation: send a prompt, get the
//! generated text back. This crate wraps the REST `generateContent` endpoint
//! in that single call. Deliberately absent: retries, streaming, response
//! caching, and multi-turn state. A failed call is reported once to the
//! caller, which surfaces it to the user as a notification.
//!
//! The API key is optional by design: without one the client simply is not
//! constructed and the hosting application degrades to "AI tools
//! unavailable" instead of failing at startup.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use gemini_client::GeminiClient;
//!
//! let Some(client) = GeminiClient::from_env() else {
//!     eprintln!("AI tools disabled: no API key");
//!     return;
//! };
//! let text = client.generate("Write a tagline for a bakery.").await?;
//! println!("{text}");
//! ```

pub mod error;
pub mod types;

pub use error::GeminiError;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    UsageMetadata,
};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables checked for an API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_GENAI_API_KEY"];

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build a client from the environment, `None` when no key is set.
    pub fn from_env() -> Option<Self> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|key| !key.trim().is_empty())
            .map(|key| Self::new(key, DEFAULT_MODEL))
    }

    /// Like [`from_env`](Self::from_env), for callers that cannot degrade.
    pub fn from_env_required() -> Result<Self> {
        Self::from_env().ok_or(GeminiError::MissingApiKey)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different host. Used by tests to target a mock
    /// server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Single-shot text generation: one prompt in, the first candidate's text
    /// out. Any failure maps to exactly one [`GeminiError`]; the caller
    /// decides how to surface it.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "generateContent request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<types::ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.first_text().ok_or(GeminiError::EmptyResponse)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
