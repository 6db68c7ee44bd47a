//! Free-text splitting shared by symptom intake and diagnosis structuring.
//!
//! Splitting is a fixed-delimiter heuristic: runs of delimiters collapse into
//! one boundary, every piece is trimmed, and empty pieces are dropped.

/// Characters separating symptoms in the raw form text.
pub const SYMPTOM_DELIMITERS: &[char] = &['\n', ','];

/// Split `text` on any of `delimiters`, trim each piece, drop empty pieces.
///
/// Never fails; empty or all-whitespace input yields an empty list.
pub fn split_items(text: &str, delimiters: &[char]) -> Vec<String> {
    text.split(|c: char| delimiters.contains(&c))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Turn raw symptom text into an ordered symptom list.
///
/// Order is preserved as typed; duplicates are kept.
pub fn normalize_symptoms(raw: &str) -> Vec<String> {
    split_items(raw, SYMPTOM_DELIMITERS)
}
