pub mod types;
pub mod prompt;
pub mod parser;
pub mod openai;
pub mod mock;
pub mod orchestrator;

pub use types::*;
pub use prompt::*;
pub use parser::*;
pub use openai::*;
pub use mock::*;
pub use orchestrator::*;

use thiserror::Error;

/// Failures of a single call to the generation service.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Generation service is not reachable at {0}")]
    Connection(String),

    #[error("Generation service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Generation service returned no completion text")]
    EmptyCompletion,
}

/// The one failure that aborts a lookup: the overview call did not complete.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Error retrieving home information: {0}")]
    Overview(#[source] LlmError),
}
