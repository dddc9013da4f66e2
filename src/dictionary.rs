//! Reading and checking word lists.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, TreeError};
use crate::reveal::PLACEHOLDER;

/// Parse a word list with one word per line.
pub fn parse_dictionary(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Load a word list from a file on disk.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_dictionary(&text))
}

/// Check that `words` can be fitted and return their common length.
///
/// Every word must have the same number of characters as the first one, none
/// may contain the placeholder character, and no word may appear twice.
pub fn validate(words: &[String]) -> Result<usize> {
    let expected = match words.first() {
        Some(first) => first.chars().count(),
        None => return Err(TreeError::EmptyDictionary),
    };

    let mut seen = HashMap::with_capacity(words.len());
    for (index, word) in words.iter().enumerate() {
        let found = word.chars().count();
        if found != expected {
            return Err(TreeError::UnequalLength {
                index,
                expected,
                found,
            });
        }
        if word.contains(PLACEHOLDER) {
            return Err(TreeError::PlaceholderInWord { index });
        }
        if let Some(&first) = seen.get(word.as_str()) {
            return Err(TreeError::DuplicateWord { index, first });
        }
        seen.insert(word.as_str(), index);
    }

    Ok(expected)
}
