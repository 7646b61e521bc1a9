//! Core types for faqbot-core.
//!
//! This module defines the data shared between the knowledge base, the
//! matching engine and the request handler: the [`FaqEntry`] itself, the
//! engine's [`Match`] output and the display-only [`Suggestion`] projection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tag carried by conversational small-talk entries (greetings and the like).
pub const SMALLTALK_TAG: &str = "smalltalk";

/// One question/answer pair of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Stable identifier, unique across the knowledge base.
    pub id: String,
    /// Canonical phrasing. Shown as the suggestion label and scored against.
    pub question: String,
    /// Returned verbatim on a confident match.
    pub answer: String,
    /// Lowercase topical labels. Order-insensitive.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl FaqEntry {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Add a tag. Tags are stored lowercase.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_lowercase());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_smalltalk(&self) -> bool {
        self.has_tag(SMALLTALK_TAG)
    }
}

/// The best-scoring entry for an input.
///
/// A `Match` is produced whenever the input had anything to score, even if
/// the score is low. Callers decide what a low score means with
/// [`crate::search::is_confident`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'kb> {
    pub entry: &'kb FaqEntry,
    /// Similarity in `[0, 1]`.
    pub score: f64,
}

impl Match<'_> {
    pub fn is_confident(&self) -> bool {
        crate::search::is_confident(self.score)
    }
}

/// Display-only `{ id, label }` projection of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

impl From<&FaqEntry> for Suggestion {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            id: entry.id.clone(),
            label: entry.question.clone(),
        }
    }
}
