//! # Word Tree
//!
//! Offline construction of decision trees for letter-reveal word guessing games.
//!
//! Given a dictionary of equal-length words, [`fit`] builds a tree whose nodes
//! each present a query word. The secret's answer is a mask revealing the
//! positions where it agrees with the query, and that mask selects the next
//! node. Queries are chosen to maximise the entropy of the candidates they
//! split, so games reach a leaf, whose query is the final guess, quickly.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod play;
pub mod reveal;
pub mod split;
pub mod tree;

pub use config::TreeConfig;
pub use dictionary::{load_dictionary, parse_dictionary};
pub use error::{Result, TreeError};
pub use play::{Cursor, Game};
pub use reveal::{normalize_response, reveal, PLACEHOLDER};
pub use split::{best_split, Partition, Split};
pub use tree::{Diagnostic, Node, Tree, TreeStats};

/// Build a tree over `words` with the given stopping criteria.
pub fn fit(words: Vec<String>, min_leaf_size: usize, max_depth: usize) -> Result<Tree> {
    Tree::fit(words, &TreeConfig::new(min_leaf_size, max_depth))
}

/// Build a tree with [`TreeConfig::default`]: single-word leaves, depth 15.
pub fn fit_default(words: Vec<String>) -> Result<Tree> {
    Tree::fit(words, &TreeConfig::default())
}
