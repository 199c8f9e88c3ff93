use super::backend::{GenerationParams, TextCompletionBackend};
use super::baseline::draft_baseline;
use super::parser::parse_draft_response;
use super::prompt::{build_draft_prompt, DRAFT_SYSTEM_PROMPT};
use super::types::Draft;

/// Backend resolution outcome, fixed at construction and never retried.
enum Resolution {
    Available(Box<dyn TextCompletionBackend>),
    Unavailable(String),
}

/// Drafting stage: generative when a backend resolved, baseline otherwise.
pub struct Drafter {
    resolution: Resolution,
    max_tokens: u32,
}

impl Drafter {
    /// Resolve `backend` exactly once. A backend that cannot confirm its
    /// model is treated as unavailable for the lifetime of this drafter; the
    /// failure description is cached and surfaced as the raw output on every
    /// subsequent call.
    pub fn resolve(backend: Box<dyn TextCompletionBackend>, max_tokens: u32) -> Self {
        let resolution = match backend.is_model_available() {
            Ok(true) => {
                tracing::info!("draft backend resolved");
                Resolution::Available(backend)
            }
            Ok(false) => {
                tracing::info!("draft model not served; drafting with baseline");
                Resolution::Unavailable(
                    "backend unavailable or model load failed: model not served".to_string(),
                )
            }
            Err(e) => {
                tracing::info!(error = %e, "draft backend unreachable; drafting with baseline");
                Resolution::Unavailable(format!("backend unavailable or model load failed: {e}"))
            }
        };
        Self {
            resolution,
            max_tokens,
        }
    }

    /// A drafter with no backend at all. Offline demos and tests.
    pub fn baseline_only() -> Self {
        Self::unavailable("generative backend disabled".to_string())
    }

    pub(crate) fn unavailable(reason: String) -> Self {
        Self {
            resolution: Resolution::Unavailable(reason),
            max_tokens: 0,
        }
    }

    /// Whether a generative backend resolved at construction.
    pub fn is_generative(&self) -> bool {
        matches!(self.resolution, Resolution::Available(_))
    }

    /// Draft one note. Returns the draft plus the raw completion, or the
    /// cached resolution-failure message when no backend ever loaded.
    ///
    /// Per-call failures degrade, never abort: a failed generation falls back
    /// to the full baseline draft, and an unparseable completion falls back
    /// to the baseline summary with claims cleared (paraphrased claims from a
    /// broken draft must not reach citation building).
    pub fn draft(&self, note: &str) -> (Draft, Option<String>) {
        let backend = match &self.resolution {
            Resolution::Available(backend) => backend,
            Resolution::Unavailable(reason) => {
                return (draft_baseline(note), Some(reason.clone()));
            }
        };

        let prompt = build_draft_prompt(note);
        let params = GenerationParams {
            max_tokens: self.max_tokens,
        };
        let raw = match backend.complete(DRAFT_SYSTEM_PROMPT, &prompt, params) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "draft generation failed; falling back to baseline");
                return (draft_baseline(note), Some(e.to_string()));
            }
        };

        match parse_draft_response(&raw) {
            Ok(draft) => (draft, Some(raw)),
            Err(e) => {
                tracing::warn!(error = %e, "draft completion unparseable; falling back to baseline");
                let mut draft = draft_baseline(note);
                draft.claims.clear();
                (draft, Some(raw))
            }
        }
    }
}
