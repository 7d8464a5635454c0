use std::fs;
use std::path::Path;

use crate::errors::GenerationError;

/// Source of candidate words for passphrases.
///
/// Implementations must be non-empty when used for generation and answer
/// `word(index)` for every `index < len()`.
pub trait Dictionary {
    fn len(&self) -> usize;

    fn word(&self, index: usize) -> &str;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered in-memory word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self, GenerationError> {
        if words.is_empty() {
            return Err(GenerationError::EmptyDictionary);
        }
        Ok(Self { words })
    }

    /// Parse one word per line. Blank lines and `#` comments are skipped.
    pub fn from_text(text: &str) -> Result<Self, GenerationError> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        Self::new(words)
    }

    pub fn from_path(path: &Path) -> Result<Self, GenerationError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Dictionary for WordList {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn word(&self, index: usize) -> &str {
        &self.words[index]
    }
}

impl<S: AsRef<str>> Dictionary for Vec<S> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn word(&self, index: usize) -> &str {
        self[index].as_ref()
    }
}
