//! faqbot-core — knowledge base and text-matching engine.
//!
//! The engine is a pure function of the user's text and a static knowledge
//! base. No I/O, no shared mutable state; concurrent callers need nothing but
//! a shared reference to the [`KnowledgeBase`].
//!
//! # Pipeline
//!
//! ```text
//! input ──► normalizer ──► greeting ──► search (score cascade) ──► Match / Suggestions
//!                                           ▲
//!                             knowledge ────┘
//! ```

pub mod config;
pub mod error;
pub mod greeting;
pub mod knowledge;
pub mod normalizer;
pub mod search;
pub mod types;

pub use error::KnowledgeBaseError;
pub use knowledge::KnowledgeBase;
pub use normalizer::{normalize, tokenize};
pub use search::{find_best_match, is_confident, suggest, CONFIDENCE_THRESHOLD};
pub use types::{FaqEntry, Match, Suggestion, SMALLTALK_TAG};
