//! Errors raised while building a tree.
//!
//! Only construction can fail. Inconsistencies met while walking a trained
//! tree are reported as [`Diagnostic`](crate::Diagnostic)s instead.

use thiserror::Error;

/// The errors that `word_tree` can produce.
#[derive(Debug, Error)]
pub enum TreeError {
    /// No words were supplied to the builder.
    #[error("the dictionary is empty")]
    EmptyDictionary,

    /// A word does not have the same number of characters as the first word.
    #[error("word {index} has {found} characters, expected {expected}")]
    UnequalLength {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A word contains the mismatch placeholder, which would make masks ambiguous.
    #[error("word {index} contains the placeholder character '_'")]
    PlaceholderInWord { index: usize },

    /// A word repeats an earlier one; identical candidates can never be split.
    #[error("word {index} duplicates word {first}")]
    DuplicateWord { index: usize, first: usize },

    /// Leaves must be allowed to hold at least one word.
    #[error("minimum leaf size must be at least 1, got {0}")]
    InvalidMinLeafSize(usize),

    /// The dictionary file could not be read.
    #[error("could not read the dictionary")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
