//! Greeting detection.
//!
//! Greetings are lexically far from every FAQ question, so they are routed to
//! small-talk entries by tag instead of by word overlap. Two checks, in order:
//!
//! 1. The whole normalized input is one elongated greeting ("hiii", "heyyy",
//!    "hellooo", "yooo", "supp").
//! 2. The first token and some greeting variant are prefixes of one another
//!    ("helloo there", "heyy corqon").
//!
//! The second check is deliberately loose: any token that is a prefix of a
//! variant counts, so "h", "he" and "s" all open a greeting.

use phf::phf_set;
use regex::Regex;
use std::sync::LazyLock;

/// Roots looked for inside a small-talk question to decide whether it is
/// itself a greeting.
pub static GREETING_ROOTS: phf::Set<&'static str> = phf_set! {
    "hi", "hey", "hello", "yo", "sup",
};

/// Words accepted as the opening token of a greeting, including the common
/// elongations.
pub static GREETING_VARIANTS: phf::Set<&'static str> = phf_set! {
    "hi", "hey", "hello", "yo", "sup", "hii", "heyy", "helloo",
};

static ELONGATED_GREETING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(h+i+|he+y+|hell+o+|yo+|sup+|hey+)$")
        .expect("built-in greeting pattern must compile")
});

/// Whether a normalized input (and its tokens) reads as a greeting.
pub fn is_greeting(normalized: &str, tokens: &[String]) -> bool {
    if ELONGATED_GREETING.is_match(normalized) {
        return true;
    }

    match tokens.first() {
        Some(first) => GREETING_VARIANTS
            .iter()
            .any(|g| first.starts_with(g) || g.starts_with(first.as_str())),
        None => false,
    }
}

/// Whether `normalized` contains any greeting root as a substring.
pub fn mentions_greeting(normalized: &str) -> bool {
    GREETING_ROOTS.iter().any(|root| normalized.contains(root))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
