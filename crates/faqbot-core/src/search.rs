//! Search layer — scores user input against the knowledge base.
//!
//! Scoring is a priority cascade, not a weighted blend. The first rule that
//! applies decides the score:
//!
//! | Rule | Condition | Score |
//! |------|-----------|-------|
//! | exact | normalized input == normalized question | `1.0` |
//! | greeting | input is a greeting and the entry is small talk | `0.95` if the question mentions a greeting root, else `0.85` |
//! | containment | either normalized string contains the other | `0.85 + 0.10 × shorter/longer` |
//! | overlap | otherwise | `min(1, 0.7 × jaccard + 0.3 × shared/max_len)` |
//!
//! The bands matter: only an exact match reaches `1.0`, containment stays in
//! `[0.85, 0.95]`, and a greeting never boosts an entry that is not tagged
//! small talk.

use crate::greeting::{is_greeting, mentions_greeting};
use crate::knowledge::KnowledgeBase;
use crate::normalizer::Normalized;
use crate::types::{FaqEntry, Match, Suggestion};
use std::collections::HashSet;

/// A match is confident iff its score is at least this value.
pub const CONFIDENCE_THRESHOLD: f64 = 0.28;

/// Number of suggestions offered alongside a fallback reply.
pub const DEFAULT_SUGGESTION_COUNT: usize = 4;

/// Messages are cut to this many characters before matching.
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 500;

const EXACT_SCORE: f64 = 1.0;
const GREETING_SCORE: f64 = 0.95;
const SMALLTALK_SCORE: f64 = 0.85;
const CONTAINMENT_BASE: f64 = 0.85;
const CONTAINMENT_SPAN: f64 = 0.10;
const JACCARD_WEIGHT: f64 = 0.7;
const SHARED_TOKEN_WEIGHT: f64 = 0.3;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// User input prepared for scoring: normalized, tokenized and classified once.
#[derive(Debug, Clone)]
pub struct Query {
    text: Normalized,
    greeting: bool,
}

impl Query {
    pub fn new(input: &str) -> Self {
        let text = Normalized::new(input);
        let greeting = is_greeting(&text.text, &text.tokens);
        Self { text, greeting }
    }

    pub fn normalized(&self) -> &str {
        &self.text.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.text.tokens
    }

    pub fn is_greeting(&self) -> bool {
        self.greeting
    }

    /// True when there is nothing to score (empty, blank or punctuation-only
    /// input).
    pub fn is_empty(&self) -> bool {
        self.text.tokens.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score raw `input` against one entry. Always within `[0, 1]`.
pub fn score(input: &str, entry: &FaqEntry) -> f64 {
    score_prepared(&Query::new(input), &Normalized::new(&entry.question), entry)
}

/// Score a prepared query against an entry whose question is already
/// normalized.
pub fn score_prepared(query: &Query, question: &Normalized, entry: &FaqEntry) -> f64 {
    let input = query.normalized();

    if input == question.text {
        return EXACT_SCORE;
    }

    if query.is_greeting() && entry.is_smalltalk() {
        return if mentions_greeting(&question.text) {
            GREETING_SCORE
        } else {
            SMALLTALK_SCORE
        };
    }

    if input.contains(question.text.as_str()) || question.text.contains(input) {
        let ratio = length_ratio(input.chars().count(), question.char_len());
        return CONTAINMENT_BASE + CONTAINMENT_SPAN * ratio;
    }

    token_overlap(query.tokens(), &question.tokens)
}

/// Jaccard similarity of the two token *sets*. Two empty inputs are
/// identical (`1.0`); exactly one empty input shares nothing (`0.0`).
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            let (shared, union) = overlap(a, b);
            shared as f64 / union as f64
        }
    }
}

fn token_overlap(input: &[String], question: &[String]) -> f64 {
    let jaccard = jaccard(input, question);
    let (shared, _) = overlap(input, question);

    // Denominator is the raw token count, duplicates included.
    let boost = if shared > 0 {
        shared as f64 / input.len().max(question.len()) as f64 * SHARED_TOKEN_WEIGHT
    } else {
        0.0
    };

    (jaccard * JACCARD_WEIGHT + boost).clamp(0.0, 1.0)
}

/// `(|A ∩ B|, |A ∪ B|)` over the distinct tokens of each side.
fn overlap(a: &[String], b: &[String]) -> (usize, usize) {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let shared = a.intersection(&b).count();
    (shared, a.len() + b.len() - shared)
}

fn length_ratio(a: usize, b: usize) -> f64 {
    let longer = a.max(b);
    if longer == 0 {
        return 1.0;
    }
    a.min(b) as f64 / longer as f64
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Whether a score is high enough to answer directly.
pub fn is_confident(score: f64) -> bool {
    score >= CONFIDENCE_THRESHOLD
}

/// The highest-scoring entry for `input`, or `None` when the input has no
/// tokens. Ties go to the entry that comes first in the knowledge base.
pub fn find_best_match<'kb>(input: &str, kb: &'kb KnowledgeBase) -> Option<Match<'kb>> {
    let query = Query::new(input);
    if query.is_empty() {
        return None;
    }

    let mut best: Option<Match<'kb>> = None;
    for indexed in kb.indexed() {
        let score = score_prepared(&query, &indexed.question, &indexed.entry);
        // Strict `>` keeps the first entry on ties.
        if best.map_or(true, |b| score > b.score) {
            best = Some(Match {
                entry: &indexed.entry,
                score,
            });
        }
    }
    best
}

/// Every entry scored against `input`, highest first. Equal scores keep
/// knowledge-base order.
pub fn rank<'kb>(input: &str, kb: &'kb KnowledgeBase) -> Vec<Match<'kb>> {
    let query = Query::new(input);
    let mut scored: Vec<Match<'kb>> = kb
        .indexed()
        .iter()
        .map(|indexed| Match {
            entry: &indexed.entry,
            score: score_prepared(&query, &indexed.question, &indexed.entry),
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Up to `count` entries with a strictly positive score, best first,
/// projected to `{ id, label }`.
pub fn suggest(input: &str, kb: &KnowledgeBase, count: usize) -> Vec<Suggestion> {
    rank(input, kb)
        .into_iter()
        .filter(|m| m.score > 0.0)
        .take(count)
        .map(|m| Suggestion::from(m.entry))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
