use serde::{Deserialize, Serialize};

/// Byte-offset span into the note, end-exclusive, always on char boundaries.
/// Serializes as a two-element JSON array.
pub type Span = (usize, usize);

/// Structured summary of an ED chest-pain note.
///
/// All nine fields are always present; fields the note does not cover are
/// empty strings. There are no cross-field invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredSummary {
    pub chief_complaint: String,
    pub hpi: String,
    pub pmh: String,
    pub vitals: String,
    pub exam: String,
    pub ekg: String,
    pub labs: String,
    pub assessment: String,
    pub plan: String,
}

/// A drafted assertion plus the verbatim snippet the drafter says backs it.
/// Unverified: the snippet may not actually appear in the note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim: String,
    pub evidence_snippet: String,
}

/// A claim whose evidence was located verbatim in the note.
///
/// Invariant: `note[span.0..span.1]` case-insensitively equals `evidence`.
/// Citations that cannot satisfy this never reach the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub claim: String,
    pub evidence: String,
    pub span: Span,
}

/// Drafter output before citation building and verification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub summary: StructuredSummary,
    pub patient_summary: String,
    pub claims: Vec<Claim>,
}

/// Everything one `run` produces. Owned by the caller; nothing persists
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub structured_summary: StructuredSummary,
    pub patient_friendly_summary: String,
    pub red_flags: Vec<String>,
    pub citations: Vec<Citation>,
    pub raw_model_output: Option<String>,
}
