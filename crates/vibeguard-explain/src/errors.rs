use thiserror::Error;

/// Falhas do explicador. Nunca chegam ao chamador do pipeline.
#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("GEMINI_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("explainer request failed: {0}")]
    Request(String),

    #[error("invalid explainer response: {0}")]
    InvalidResponse(String),

    #[error("Response contains technical identifiers")]
    TechnicalContent,
}

impl From<reqwest::Error> for ExplainError {
    fn from(err: reqwest::Error) -> Self {
        ExplainError::Request(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExplainError>;
