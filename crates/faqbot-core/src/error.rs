use thiserror::Error;

/// Reasons a knowledge base can be rejected at load time.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read knowledge base: {0}")]
    Source(#[from] config::ConfigError),

    #[error("knowledge base has no entries")]
    Empty,

    #[error("entry #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate entry id {0:?}")]
    DuplicateId(String),

    #[error("entry {0:?} has no words in its question")]
    EmptyQuestion(String),

    #[error("entry {0:?} has an empty answer")]
    EmptyAnswer(String),
}
