use std::path::Path;

use passgen_generate::{GenerationError, WordList};
use tracing::debug;

static DEFAULT_WORDS: &str = include_str!("../assets/words.txt");

/// Load the passphrase word list from `path`, or the bundled list.
pub fn load_dictionary(path: Option<&Path>) -> Result<WordList, GenerationError> {
    let list = match path {
        Some(path) => WordList::from_path(path)?,
        None => WordList::from_text(DEFAULT_WORDS)?,
    };
    debug!(
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "bundled".to_string()),
        words = list.words().len(),
        "dictionary loaded"
    );
    Ok(list)
}
