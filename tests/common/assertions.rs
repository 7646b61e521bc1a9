//! Domain-specific assertion macros for faqbot harnesses.
//!
//! These add context-rich failure messages that make it clear *which* input
//! produced *which* score when a matching expectation fails.

use faqbot_core::search::score;
use faqbot_core::{KnowledgeBase, Suggestion};

/// Assert two scores are equal up to floating-point noise.
#[macro_export]
macro_rules! assert_score_approx {
    ($actual:expr, $expected:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        if (actual - expected).abs() > 1e-9 {
            panic!(
                "assert_score_approx! failed:\n  expected: {}\n  actual:   {}",
                expected, actual
            );
        }
    }};
}

/// Assert the best match for `input` is the entry `id`. Evaluates to the
/// match score.
///
/// ```rust
/// let score = assert_best_match!(kb, "hey", "greeting");
/// ```
#[macro_export]
macro_rules! assert_best_match {
    ($kb:expr, $input:expr, $id:expr) => {{
        let kb: &faqbot_core::KnowledgeBase = &$kb;
        let input: &str = $input;
        let id: &str = $id;
        match faqbot_core::find_best_match(input, kb) {
            Some(m) if m.entry.id == id => m.score,
            Some(m) => panic!(
                "assert_best_match! failed for {:?}:\n  expected: {:?}\n  actual:   {:?} (score {})",
                input, id, m.entry.id, m.score
            ),
            None => panic!(
                "assert_best_match! failed for {:?}: input had nothing to match",
                input
            ),
        }
    }};
}

/// Assert suggestions are strictly positive and sorted by descending score.
pub fn assert_suggestions_ranked(input: &str, kb: &KnowledgeBase, suggestions: &[Suggestion]) {
    let scores: Vec<f64> = suggestions
        .iter()
        .map(|s| {
            let entry = kb
                .get(&s.id)
                .unwrap_or_else(|| panic!("suggested id {:?} is not in the knowledge base", s.id));
            assert_eq!(s.label, entry.question, "label must be the entry question");
            score(input, entry)
        })
        .collect();

    for (s, value) in suggestions.iter().zip(&scores) {
        assert!(*value > 0.0, "suggested {:?} with score {value} for {input:?}", s.id);
    }
    assert!(
        scores.windows(2).all(|w| w[0] >= w[1]),
        "suggestions for {input:?} are not sorted: {scores:?}"
    );
}
