//! Knowledge base — the ordered, immutable set of FAQ entries.
//!
//! Entries are validated and their questions normalized once, at
//! construction. After that the knowledge base is only ever read, so it can be
//! shared freely between threads behind an `Arc`.
//!
//! The default knowledge base is embedded in the binary via [`include_str!`];
//! [`KnowledgeBase::load`] reads a replacement from disk in any format the
//! `config` crate understands (TOML, JSON, YAML), chosen by file extension.

use crate::error::KnowledgeBaseError;
use crate::normalizer::Normalized;
use crate::types::FaqEntry;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

const EMBEDDED_SRC: &str = include_str!("../data/knowledge_base.toml");

/// Mirrors the on-disk document: a list of `[[entries]]`.
#[derive(Debug, Deserialize)]
struct RawKnowledgeBase {
    #[serde(default)]
    entries: Vec<FaqEntry>,
}

/// An entry with its question pre-normalized for scoring.
#[derive(Debug, Clone)]
pub(crate) struct IndexedEntry {
    pub(crate) entry: FaqEntry,
    pub(crate) question: Normalized,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<IndexedEntry>,
    by_id: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Validate `entries` and build the knowledge base. Order is preserved.
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self, KnowledgeBaseError> {
        if entries.is_empty() {
            return Err(KnowledgeBaseError::Empty);
        }

        let mut indexed = Vec::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());

        for (index, mut entry) in entries.into_iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(KnowledgeBaseError::EmptyId { index });
            }
            // Punctuation-only questions ("???") normalize to a bare separator.
            let question = Normalized::new(&entry.question);
            if question.tokens.is_empty() {
                return Err(KnowledgeBaseError::EmptyQuestion(entry.id));
            }
            if entry.answer.trim().is_empty() {
                return Err(KnowledgeBaseError::EmptyAnswer(entry.id));
            }
            match by_id.entry(entry.id.clone()) {
                Entry::Occupied(_) => return Err(KnowledgeBaseError::DuplicateId(entry.id)),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }

            entry.tags = entry
                .tags
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();

            indexed.push(IndexedEntry { entry, question });
        }

        Ok(Self {
            entries: indexed,
            by_id,
        })
    }

    /// Parse a TOML document of `[[entries]]` tables.
    pub fn from_toml_str(src: &str) -> Result<Self, KnowledgeBaseError> {
        let raw: RawKnowledgeBase = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Self::new(raw.entries)
    }

    /// Read a knowledge base file. The format follows the file extension.
    pub fn load(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let raw: RawKnowledgeBase = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        let kb = Self::new(raw.entries)?;
        tracing::info!(path = %path.display(), entries = kb.len(), "knowledge base loaded");
        Ok(kb)
    }

    /// The built-in Corqon FAQ.
    pub fn embedded() -> Self {
        Self::from_toml_str(EMBEDDED_SRC).expect("built-in knowledge base must be valid")
    }

    /// Direct lookup by id.
    pub fn get(&self, id: &str) -> Option<&FaqEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i].entry)
    }

    /// Entries in knowledge-base order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &FaqEntry> + '_ {
        self.entries.iter().map(|indexed| &indexed.entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn indexed(&self) -> &[IndexedEntry] {
        &self.entries
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const TWO_ENTRIES: &str = r#"
[[entries]]
id = "a"
question = "What does Corqon do?"
answer = "X"

[[entries]]
id = "b"
question = "hi there"
answer = "Hello!"
tags = ["SmallTalk", " greeting "]
"#;

    #[test]
    fn parses_toml_in_order() {
        let kb = KnowledgeBase::from_toml_str(TWO_ENTRIES).unwrap();
        let ids: Vec<&str> = kb.entries().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(kb.get("a").unwrap().tags.is_empty());
    }

    #[test]
    fn tags_are_lowercased_and_trimmed() {
        let kb = KnowledgeBase::from_toml_str(TWO_ENTRIES).unwrap();
        let b = kb.get("b").unwrap();
        assert!(b.is_smalltalk());
        assert!(b.has_tag("greeting"));
    }

    #[test]
    fn lookup_by_id() {
        let kb = KnowledgeBase::from_toml_str(TWO_ENTRIES).unwrap();
        assert_eq!(kb.get("b").unwrap().answer, "Hello!");
        assert!(kb.get("missing").is_none());
        assert!(kb.get("").is_none());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            KnowledgeBase::new(Vec::new()),
            Err(KnowledgeBaseError::Empty)
        ));
        assert!(matches!(
            KnowledgeBase::from_toml_str(""),
            Err(KnowledgeBaseError::Empty)
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = KnowledgeBase::new(vec![
            FaqEntry::new("a", "one", "1"),
            FaqEntry::new("a", "two", "2"),
        ])
        .unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(matches!(
            KnowledgeBase::new(vec![FaqEntry::new("a", "q", "a"), FaqEntry::new(" ", "q", "a")]),
            Err(KnowledgeBaseError::EmptyId { index: 1 })
        ));
        assert!(matches!(
            KnowledgeBase::new(vec![FaqEntry::new("a", "  ", "a")]),
            Err(KnowledgeBaseError::EmptyQuestion(_))
        ));
        assert!(matches!(
            KnowledgeBase::new(vec![FaqEntry::new("a", "q", "")]),
            Err(KnowledgeBaseError::EmptyAnswer(_))
        ));
    }

    #[test]
    fn rejects_questions_without_words() {
        for question in ["???", " - ", "🎉!"] {
            let err = KnowledgeBase::new(vec![
                FaqEntry::new("a", "What does Corqon do?", "X"),
                FaqEntry::new("punct", question, "Y"),
            ])
            .unwrap_err();
            assert!(
                matches!(err, KnowledgeBaseError::EmptyQuestion(ref id) if id == "punct"),
                "{question:?} gave {err}"
            );
        }
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            KnowledgeBase::from_toml_str("[[entries]\nid = "),
            Err(KnowledgeBaseError::Source(_))
        ));
    }

    #[test]
    fn loads_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"entries": [{{"id": "x", "question": "Is it JSON?", "answer": "Yes", "tags": ["format"]}}]}}"#
        )
        .unwrap();
        let kb = KnowledgeBase::load(file.path()).unwrap();
        assert_eq!(kb.len(), 1);
        assert!(kb.get("x").unwrap().has_tag("format"));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = KnowledgeBase::load(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(KnowledgeBaseError::Source(_))));
    }

    #[test]
    fn embedded_knowledge_base_is_valid() {
        let kb = KnowledgeBase::embedded();
        assert!(!kb.is_empty());
        for id in [
            "greeting",
            "what-does-corqon-do",
            "data-sources",
            "privacy",
            "onboarding",
            "pricing",
            "ai",
        ] {
            assert!(kb.get(id).is_some(), "missing built-in entry {id:?}");
        }
        assert!(kb.get("greeting").unwrap().is_smalltalk());
    }
}
