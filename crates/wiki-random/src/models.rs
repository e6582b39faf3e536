use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub json: bool,
    pub quiet: bool,
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Wikipedia request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Wikipedia response could not be validated: {0}")]
    Validation(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Request(_) => "REQUEST_FAILED",
            Self::Validation(_) => "BAD_RESPONSE",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub ok: bool,
    pub error: String,
    pub code: String,
}

/// A random article summary as served by the REST endpoint.
/// Both fields must be present in the payload; anything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub extract: String,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub ok: bool,
    pub lang: String,
    pub item: Page,
}
