//! Sequential batch processing of report directories.
//!
//! One pass over a directory of `.txt` reports: each file is analyzed
//! independently and a failure is recorded and skipped, never aborting
//! the batch. Only a missing directory is fatal.

pub mod report;
pub mod runner;

pub use report::*;
pub use runner::*;

use thiserror::Error;

use crate::analysis::AnalysisError;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Report directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
