use super::types::Span;

/// Locate the first case-insensitive occurrence of `snippet` in `text`.
///
/// Returns byte offsets into the original `text` (end-exclusive, on char
/// boundaries), or `None` when the snippet is empty or absent. Deterministic,
/// no side effects.
pub fn find_span(text: &str, snippet: &str) -> Option<Span> {
    if snippet.is_empty() {
        return None;
    }
    for (start, _) in text.char_indices() {
        if let Some(len) = match_len_ignore_case(&text[start..], snippet) {
            return Some((start, start + len));
        }
    }
    None
}

/// Byte length of the prefix of `haystack` that matches `needle`
/// case-insensitively, or `None` if `haystack` does not start with `needle`.
///
/// Comparison is per-char Unicode lowercasing, so the matched prefix in the
/// haystack can differ from the needle in case but never in content.
fn match_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    let mut matched = 0;
    for n in needle.chars() {
        let (i, h) = hay.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
        matched = i + h.len_utf8();
    }
    Some(matched)
}
