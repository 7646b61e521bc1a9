//! Reply policy — what the assistant says for a resolved [`ChatRequest`].
//!
//! The matching engine only scores. This layer applies the confidence gate,
//! picks the fallback text, and attaches suggestions when it cannot answer.

use crate::request::ChatRequest;
use faqbot_core::config::AssistantConfig;
use faqbot_core::normalizer::truncate;
use faqbot_core::search::{self, DEFAULT_MAX_MESSAGE_CHARS, DEFAULT_SUGGESTION_COUNT};
use faqbot_core::{FaqEntry, KnowledgeBase, KnowledgeBaseError, Suggestion};
use serde::Serialize;

/// Sent when no entry is a confident match.
pub const FALLBACK_RESPONSE: &str = "I can help. Are you looking for a sample weekly briefing, privacy and procurement details, or how CORQON measures signals?";

/// Sent when a direct lookup names an id that does not exist.
pub const NOT_FOUND_RESPONSE: &str =
    "I could not find that topic. Please try asking a question or selecting a suggested topic.";

/// JSON body of every chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

impl ChatResponse {
    pub fn answer(entry: &FaqEntry) -> Self {
        Self {
            reply: entry.answer.clone(),
            matched_id: Some(entry.id.clone()),
            suggestions: None,
        }
    }

    pub fn fallback(suggestions: Vec<Suggestion>) -> Self {
        Self {
            reply: FALLBACK_RESPONSE.to_string(),
            matched_id: None,
            suggestions: Some(suggestions),
        }
    }

    /// A bare reply with no match and no suggestions.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            matched_id: None,
            suggestions: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An entry's answer was returned.
    Answered,
    /// Nothing confident; fallback text plus suggestions.
    Fallback,
    /// Direct lookup of an unknown id.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub outcome: Outcome,
    pub body: ChatResponse,
}

/// Answers chat requests from one immutable knowledge base.
#[derive(Debug, Clone)]
pub struct Assistant {
    kb: KnowledgeBase,
    max_message_chars: usize,
    suggestion_count: usize,
}

impl Assistant {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            kb,
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
        }
    }

    /// Build from the `[assistant]` config section, loading its knowledge base.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, KnowledgeBaseError> {
        let kb = config.load_knowledge_base()?;
        Ok(Self::new(kb).with_limits(config.max_message_chars, config.suggestion_count))
    }

    pub fn with_limits(mut self, max_message_chars: usize, suggestion_count: usize) -> Self {
        self.max_message_chars = max_message_chars;
        self.suggestion_count = suggestion_count;
        self
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn reply(&self, request: &ChatRequest) -> Reply {
        match request {
            ChatRequest::ById(id) => self.lookup(id),
            ChatRequest::ByMessage(message) => self.ask(message),
        }
    }

    /// Direct lookup by id.
    pub fn lookup(&self, id: &str) -> Reply {
        match self.kb.get(id) {
            Some(entry) => {
                tracing::debug!(id, "direct lookup hit");
                Reply {
                    outcome: Outcome::Answered,
                    body: ChatResponse::answer(entry),
                }
            }
            None => {
                tracing::debug!(id, "direct lookup miss");
                Reply {
                    outcome: Outcome::NotFound,
                    body: ChatResponse::message(NOT_FOUND_RESPONSE),
                }
            }
        }
    }

    /// Match free text against the knowledge base.
    pub fn ask(&self, message: &str) -> Reply {
        let message = truncate(message, self.max_message_chars);

        match search::find_best_match(message, &self.kb) {
            Some(m) if m.is_confident() => {
                tracing::debug!(id = %m.entry.id, score = m.score, "confident match");
                Reply {
                    outcome: Outcome::Answered,
                    body: ChatResponse::answer(m.entry),
                }
            }
            best => {
                let suggestions = search::suggest(message, &self.kb, self.suggestion_count);
                match best {
                    Some(m) => tracing::debug!(
                        id = %m.entry.id,
                        score = m.score,
                        suggestions = suggestions.len(),
                        "below confidence threshold"
                    ),
                    None => tracing::debug!(suggestions = suggestions.len(), "nothing to match"),
                }
                Reply {
                    outcome: Outcome::Fallback,
                    body: ChatResponse::fallback(suggestions),
                }
            }
        }
    }

    /// Topics offered before the user has typed anything: every entry that
    /// is not small talk, in knowledge-base order.
    pub fn topics(&self) -> Vec<Suggestion> {
        self.kb
            .entries()
            .filter(|e| !e.is_smalltalk())
            .map(Suggestion::from)
            .collect()
    }
}
