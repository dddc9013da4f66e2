//! Stopping criteria for tree construction.

use crate::error::{Result, TreeError};

/// Size and depth caps applied while fitting a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Nodes holding this many candidates or fewer become leaves.
    pub min_leaf_size: usize,
    /// Nodes at this depth or deeper become leaves.
    pub max_depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            min_leaf_size: 1,
            max_depth: 15,
        }
    }
}

impl TreeConfig {
    pub fn new(min_leaf_size: usize, max_depth: usize) -> Self {
        Self {
            min_leaf_size,
            max_depth,
        }
    }

    pub fn with_min_leaf_size(self, min_leaf_size: usize) -> Self {
        Self {
            min_leaf_size,
            ..self
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_leaf_size == 0 {
            return Err(TreeError::InvalidMinLeafSize(self.min_leaf_size));
        }
        Ok(())
    }

    /// Whether a node with `size` candidates at `depth` must stop splitting.
    pub fn is_leaf(&self, size: usize, depth: usize) -> bool {
        size <= self.min_leaf_size || depth >= self.max_depth
    }
}
