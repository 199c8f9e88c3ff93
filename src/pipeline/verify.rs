use super::types::Citation;

/// Re-validate citation spans against the note before they are surfaced.
///
/// `build_citations` already produced these spans, but the check runs again
/// so that no citation reaches the caller unless its span is in-bounds, on
/// char boundaries, and its slice matches the evidence case-insensitively.
/// Failing citations are removed, never surfaced as errors.
pub fn verify_citations(note: &str, citations: Vec<Citation>) -> Vec<Citation> {
    citations
        .into_iter()
        .filter(|c| {
            if span_matches(note, c) {
                true
            } else {
                tracing::warn!(
                    claim = %c.claim,
                    span = ?c.span,
                    "citation failed span verification — removed"
                );
                false
            }
        })
        .collect()
}

fn span_matches(note: &str, citation: &Citation) -> bool {
    let (start, end) = citation.span;
    if start >= end || end > note.len() {
        return false;
    }
    if !note.is_char_boundary(start) || !note.is_char_boundary(end) {
        return false;
    }
    eq_ignore_case(&note[start..end], &citation.evidence)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
