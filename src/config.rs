//! Pipeline configuration.
//!
//! The core takes every knob explicitly; there are no process-wide defaults.
//! The presentation layer (CLI, UI) owns its own defaults and passes them in.

use serde::Serialize;

/// Default Ollama endpoint on the local machine.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default drafting model. Small enough for laptop demos.
pub const DEFAULT_MODEL: &str = "medgemma:4b";

/// Default upper bound on generated tokens per draft.
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Default per-request backend timeout. The backend call is the only blocking
/// operation in a run; without a bound a stalled backend hangs the caller.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Log filter applied when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "edscribe=info".to_string()
}

/// Explicit configuration for one pipeline instance.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineConfig {
    /// Model identifier on the generative backend.
    pub model: String,
    /// Backend base URL.
    pub base_url: String,
    /// Upper bound on generated tokens per draft.
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
