use crate::config::PipelineConfig;

use super::backend::{OllamaBackend, TextCompletionBackend};
use super::citation::build_citations;
use super::drafter::Drafter;
use super::red_flags::detect_red_flags;
use super::types::PipelineResult;
use super::verify::verify_citations;

/// Two-stage draft/verify pipeline for ED chest-pain notes.
///
/// Drafting is generative when a backend resolved at construction and
/// deterministic otherwise; every surfaced citation is span-verified against
/// the raw note. One `run` processes one note start to finish; instances
/// share no mutable state, so separate pipelines may run concurrently.
pub struct Pipeline {
    drafter: Drafter,
}

impl Pipeline {
    /// Build a pipeline against the Ollama backend described by `config`.
    ///
    /// Backend resolution happens here, once. Failure is cached: the pipeline
    /// then drafts with the baseline for its whole lifetime, surfacing the
    /// failure description via `raw_model_output`.
    pub fn new(config: &PipelineConfig) -> Self {
        match OllamaBackend::new(&config.base_url, &config.model, config.timeout_secs) {
            Ok(backend) => Self::with_backend(Box::new(backend), config),
            Err(e) => {
                tracing::info!(error = %e, "could not construct backend; drafting with baseline");
                Self {
                    drafter: Drafter::unavailable(format!(
                        "backend unavailable or model load failed: {e}"
                    )),
                }
            }
        }
    }

    /// Build a pipeline around an explicit backend (tests, alternate hosts).
    pub fn with_backend(backend: Box<dyn TextCompletionBackend>, config: &PipelineConfig) -> Self {
        Self {
            drafter: Drafter::resolve(backend, config.max_tokens),
        }
    }

    /// Build a pipeline that never touches a generative backend.
    pub fn baseline_only() -> Self {
        Self {
            drafter: Drafter::baseline_only(),
        }
    }

    /// Whether the generative backend resolved at construction.
    pub fn is_generative(&self) -> bool {
        self.drafter.is_generative()
    }

    /// Process one note start to finish. Infallible: a stage that cannot
    /// produce data yields empty or default values instead of aborting.
    pub fn run(&self, note: &str) -> PipelineResult {
        // 1. Draft, generative or baseline.
        let (draft, raw_model_output) = self.drafter.draft(note);

        // 2. Claims become citations only with a located evidence span.
        let citations = build_citations(note, &draft.claims);

        // 3. Red flags come from the raw note, not the draft, so drafting
        //    errors cannot suppress them.
        let red_flags = detect_red_flags(note);

        // 4. Independent span re-check before anything is surfaced.
        let citations = verify_citations(note, citations);

        PipelineResult {
            structured_summary: draft.summary,
            patient_friendly_summary: draft.patient_summary,
            red_flags,
            citations,
            raw_model_output,
        }
    }
}
