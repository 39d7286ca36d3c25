//! Story book: the immutable story and ending corpora.
//!
//! A story book is authored as YAML:
//!
//! ```yaml
//! stories:
//!   1: ["variant 0", "variant 1"]
//! endings:
//!   - "An ending."
//! ```

use std::collections::BTreeMap;

use forkpath_core::error::DomainError;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::MAX_DEPTH;

const BUILTIN_SOURCE: &str = include_str!("assets/stranded.yaml");

/// Exactly two fragments for every depth that has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryCorpus(BTreeMap<u32, [String; 2]>);

impl StoryCorpus {
    /// Creates a corpus from depth → fragment pairs.
    #[must_use]
    pub fn new(entries: BTreeMap<u32, [String; 2]>) -> Self {
        Self(entries)
    }

    /// Returns the two fragments configured for `depth`.
    #[must_use]
    pub fn fragments(&self, depth: u32) -> Option<&[String; 2]> {
        self.0.get(&depth)
    }

    /// Depths that have an entry, ascending.
    pub fn depths(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }
}

/// A non-empty ordered list of endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndingCorpus(Vec<String>);

impl EndingCorpus {
    /// Creates an ending corpus.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `endings` is empty.
    pub fn new(endings: Vec<String>) -> Result<Self, DomainError> {
        if endings.is_empty() {
            return Err(DomainError::Validation(
                "story book must define at least one ending".to_owned(),
            ));
        }
        Ok(Self(endings))
    }

    /// Number of endings (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the ending at `index` modulo the corpus length.
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    /// Whether `text` is one of the configured endings.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|ending| ending == text)
    }
}

#[derive(Debug, Deserialize)]
struct StoryBookSource {
    stories: BTreeMap<u32, [String; 2]>,
    endings: Vec<String>,
}

/// The full content set a session reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryBook {
    stories: StoryCorpus,
    endings: EndingCorpus,
    version_hash: String,
}

impl StoryBook {
    /// Parses the story book that ships with the engine.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the embedded source is malformed.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_yaml_str(BUILTIN_SOURCE)
    }

    /// Parses and validates a YAML story book.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the YAML cannot be decoded,
    /// or `DomainError::Validation` if a story depth lies outside
    /// `1..=MAX_DEPTH` or no endings are defined.
    pub fn from_yaml_str(source: &str) -> Result<Self, DomainError> {
        let parsed: StoryBookSource = serde_yaml::from_str(source)
            .map_err(|e| DomainError::Infrastructure(format!("story book decoding failed: {e}")))?;

        if let Some(depth) = parsed
            .stories
            .keys()
            .find(|depth| !(1..=MAX_DEPTH).contains(*depth))
        {
            return Err(DomainError::Validation(format!(
                "story depth {depth} is outside 1..={MAX_DEPTH}"
            )));
        }

        for depth in (1..MAX_DEPTH).filter(|d| !parsed.stories.contains_key(d)) {
            warn!(depth, "story book has no fragments for depth; fallback text will be shown");
        }

        let hash = Sha256::digest(source.as_bytes());

        Ok(Self {
            stories: StoryCorpus::new(parsed.stories),
            endings: EndingCorpus::new(parsed.endings)?,
            version_hash: format!("{hash:x}"),
        })
    }

    /// Reads a YAML story book from disk.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read, plus
    /// any error from [`StoryBook::from_yaml_str`].
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Infrastructure(format!("reading {} failed: {e}", path.display()))
        })?;
        Self::from_yaml_str(&source)
    }

    /// Builds a story book directly from corpora, hashing nothing.
    #[must_use]
    pub fn from_parts(stories: StoryCorpus, endings: EndingCorpus) -> Self {
        Self {
            stories,
            endings,
            version_hash: String::new(),
        }
    }

    /// The story corpus.
    #[must_use]
    pub fn stories(&self) -> &StoryCorpus {
        &self.stories
    }

    /// The ending corpus.
    #[must_use]
    pub fn endings(&self) -> &EndingCorpus {
        &self.endings
    }

    /// SHA-256 hex digest of the source text; empty for books built in code.
    #[must_use]
    pub fn version_hash(&self) -> &str {
        &self.version_hash
    }
}
