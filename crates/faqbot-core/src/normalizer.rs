//! Normalizer — turns free user text into a canonical, comparable form.
//!
//! Steps, in order: trim, lowercase, canonical decomposition with combining
//! marks stripped ("café" → "cafe"), every character that is not a letter,
//! digit or whitespace becomes a space, whitespace runs collapse to one space.
//!
//! Punctuation becomes a separator rather than being deleted, so
//! "privacy-safe" stays two words. Trimming happens before punctuation is
//! replaced, which means trailing punctuation leaves a single trailing space
//! ("hi!" → "hi "). Token-level comparisons are unaffected; string-level ones
//! (exact match, containment) see the same text for the same input.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Produce the canonical form of `text`. Total: any input, including the
/// empty string, yields a (possibly empty) string.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_gap = false;

    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_alphanumeric() {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            // Whitespace and punctuation alike collapse into one separator.
            out.push(' ');
            in_gap = true;
        }
    }
    out
}

/// Split normalized text on whitespace, dropping empty fragments. Order is
/// preserved; the greeting detector looks at the first token.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_owned).collect()
}

/// Normalized text together with its tokens, computed once and reused for
/// every comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub tokens: Vec<String>,
}

impl Normalized {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let tokens = tokenize(&text);
        Self { text, tokens }
    }

    /// Number of Unicode scalar values in the normalized text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Cap `text` at `max_chars` Unicode scalar values without splitting a
/// character.
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
