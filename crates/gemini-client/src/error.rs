use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("no API key: set GEMINI_API_KEY or GOOGLE_GENAI_API_KEY")]
    MissingApiKey,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no usable candidate")]
    EmptyResponse,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
