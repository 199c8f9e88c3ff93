//! edscribe — documentation-assistance pipeline for ED chest-pain notes.
//!
//! Two stages: *draft* a structured summary of the note (generative backend,
//! or a deterministic baseline when none is available), then *verify* every
//! drafted claim by locating its evidence as an exact character span in the
//! source note. Unverifiable claims never reach the caller. Red-flag keyword
//! warnings are computed from the raw note, independent of drafting.
//!
//! This is documentation assistance, not medical advice: the pipeline only
//! restructures what the clinician already wrote.

pub mod config;
pub mod pipeline;

pub use config::PipelineConfig;
pub use pipeline::orchestrator::Pipeline;
pub use pipeline::types::{Citation, PipelineResult, StructuredSummary};
