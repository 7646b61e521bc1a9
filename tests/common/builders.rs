//! Test builders — ergonomic constructors for `FaqEntry` and `KnowledgeBase`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use faqbot_core::{FaqEntry, KnowledgeBase};

// ---------------------------------------------------------------------------
// FaqEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`FaqEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = FaqEntryBuilder::new("b")
///     .question("hi there")
///     .answer("Hello!")
///     .smalltalk()
///     .build();
/// ```
pub struct FaqEntryBuilder {
    id: String,
    question: String,
    answer: String,
    tags: Vec<String>,
}

impl FaqEntryBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            id,
            tags: Vec::new(),
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn smalltalk(self) -> Self {
        self.tag(faqbot_core::SMALLTALK_TAG)
    }

    pub fn build(self) -> FaqEntry {
        self.tags
            .iter()
            .fold(FaqEntry::new(self.id, self.question, self.answer), |entry, tag| {
                entry.with_tag(tag)
            })
    }
}

// ---------------------------------------------------------------------------
// Knowledge bases
// ---------------------------------------------------------------------------

/// Build a knowledge base, panicking if the entries are invalid.
pub fn kb(entries: Vec<FaqEntry>) -> KnowledgeBase {
    KnowledgeBase::new(entries).expect("test knowledge base must be valid")
}

/// One plain entry per question, with ids `q0`, `q1`, …
pub fn kb_from_questions(questions: &[&str]) -> KnowledgeBase {
    kb(questions
        .iter()
        .enumerate()
        .map(|(i, q)| FaqEntryBuilder::new(format!("q{i}")).question(*q).build())
        .collect())
}

/// The two-entry knowledge base used by the reference scenarios:
/// a product question and a small-talk greeting.
pub fn scenario_kb() -> KnowledgeBase {
    kb(vec![
        FaqEntryBuilder::new("a")
            .question("What does Corqon do?")
            .answer("X")
            .build(),
        FaqEntryBuilder::new("b")
            .question("hi there")
            .answer("Hello!")
            .smalltalk()
            .build(),
    ])
}

/// The built-in Corqon knowledge base.
pub fn embedded_kb() -> KnowledgeBase {
    KnowledgeBase::embedded()
}
