pub mod backend;
pub mod baseline;
pub mod citation;
pub mod drafter;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod red_flags;
pub mod span;
pub mod types;
pub mod verify;

pub use backend::*;
pub use baseline::*;
pub use citation::*;
pub use drafter::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use red_flags::*;
pub use span::*;
pub use types::*;
pub use verify::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Backend is not reachable at {0}")]
    BackendConnection(String),

    #[error("Backend returned error (status {status}): {body}")]
    BackendError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed draft: {0}")]
    MalformedDraft(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("Response decoding error: {0}")]
    ResponseDecoding(String),
}
