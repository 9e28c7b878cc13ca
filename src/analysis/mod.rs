pub mod birads;
pub mod gemini;
pub mod parser;
pub mod prompt;
pub mod types;

pub use birads::*;
pub use gemini::*;
pub use parser::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Cannot reach the Gemini API at {0}")]
    ApiConnection(String),

    #[error("Gemini API returned error (status {status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Model response contained no text candidate")]
    EmptyResponse,

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("Report text too short to analyze (< 10 characters)")]
    InputTooShort,
}
