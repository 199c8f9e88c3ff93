use super::span::find_span;
use super::types::{Citation, Claim};

/// Promote claims to citations by locating each evidence snippet in the note.
///
/// A claim survives only when both its text and its evidence are non-empty
/// after trimming and the Span Locator finds the evidence verbatim
/// (case-insensitive). Everything else is dropped silently; unverifiable
/// claims are degraded output, not errors.
pub fn build_citations(note: &str, claims: &[Claim]) -> Vec<Citation> {
    claims
        .iter()
        .filter_map(|c| {
            let claim = c.claim.trim();
            let evidence = c.evidence_snippet.trim();
            if claim.is_empty() || evidence.is_empty() {
                return None;
            }
            match find_span(note, evidence) {
                Some(span) => Some(Citation {
                    claim: claim.to_string(),
                    evidence: evidence.to_string(),
                    span,
                }),
                None => {
                    tracing::warn!(
                        claim,
                        "evidence snippet not found verbatim in note — claim dropped"
                    );
                    None
                }
            }
        })
        .collect()
}
