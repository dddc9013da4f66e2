//! The decision tree and its nodes.
//!
//! A [`Tree`] owns the dictionary and the root [`Node`]. Every node owns its
//! children and stores only indices into the dictionary, never word data.
//! Trees are built once by [`Tree::fit`] and are read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::TreeConfig;
use crate::dictionary;
use crate::error::Result;
use crate::reveal::normalize_response;
use crate::split::best_split;

/// A recoverable inconsistency met while walking a trained tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A child was requested from a leaf; the leaf was returned unchanged.
    LeafAsked { depth: usize },
    /// The response matched no child; the first child was used instead.
    UnknownResponse {
        depth: usize,
        response: String,
        fallback: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LeafAsked { depth } => {
                write!(f, "leaf at depth {} was asked for a child", depth)
            }
            Diagnostic::UnknownResponse {
                depth,
                response,
                fallback,
            } => write!(
                f,
                "unknown response {:?} at depth {}, falling back to {:?}",
                response, depth, fallback
            ),
        }
    }
}

/// A node of the decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    depth: usize,
    candidates: Vec<usize>,
    is_leaf: bool,
    query: Option<usize>,
    entropy: f64,
    children: BTreeMap<String, Node>,
}

impl Node {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            candidates: Vec::new(),
            is_leaf: true,
            query: None,
            entropy: 0.0,
            children: BTreeMap::new(),
        }
    }

    /// Train this node, and recursively its children, on `candidates`.
    pub fn fit(&mut self, words: &[String], candidates: Vec<usize>, config: &TreeConfig) {
        debug_assert!(!candidates.is_empty(), "node fitted with no candidates");

        if config.is_leaf(candidates.len(), self.depth) {
            self.is_leaf = true;
            self.query = candidates.first().copied();
            self.candidates = candidates;
            return;
        }

        self.is_leaf = false;
        let split = best_split(words, &candidates, self.depth);
        log::trace!(
            "split depth={} candidates={} query={:?} entropy={:.3} branches={}",
            self.depth,
            candidates.len(),
            split.query.map(|q| words[q].as_str()),
            split.entropy,
            split.partition.len()
        );

        self.query = split.query;
        self.entropy = split.entropy;
        self.candidates = candidates;

        for (response, part) in split.partition {
            let mut child = Node::new(self.depth + 1);
            child.fit(words, part, config);
            self.children.insert(response, child);
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// The query asked at this node.
    ///
    /// At a leaf this is the final guess. `None` only at an internal root,
    /// whose empty query reveals nothing but the secret's length.
    pub fn get_query(&self) -> Option<usize> {
        self.query
    }

    /// Dictionary indices still consistent with the path to this node.
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    /// Entropy of the split made here; zero at leaves.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Exact lookup of a child by an already normalized response.
    pub fn child(&self, response: &str) -> Option<&Node> {
        self.children.get(response)
    }

    /// Follow `response` to a child, reporting any fallback that was needed.
    pub fn resolve(&self, response: &str) -> (&Node, Option<Diagnostic>) {
        if self.is_leaf {
            return (self, Some(Diagnostic::LeafAsked { depth: self.depth }));
        }

        let response = normalize_response(response);
        if let Some(child) = self.children.get(&response) {
            return (child, None);
        }

        match self.children.iter().next() {
            Some((fallback, child)) => (
                child,
                Some(Diagnostic::UnknownResponse {
                    depth: self.depth,
                    response,
                    fallback: fallback.clone(),
                }),
            ),
            // internal nodes always have at least one child
            None => (self, Some(Diagnostic::LeafAsked { depth: self.depth })),
        }
    }

    /// Follow `response` to a child, logging a warning on any fallback.
    pub fn get_child(&self, response: &str) -> &Node {
        let (child, diagnostic) = self.resolve(response);
        if let Some(diagnostic) = diagnostic {
            log::warn!("{}", diagnostic);
        }
        child
    }
}

/// Structural summary of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    /// Depth of the deepest node.
    pub height: usize,
}

/// A trained decision tree over a fixed dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    words: Vec<String>,
    config: TreeConfig,
    root: Node,
}

impl Tree {
    /// Build a tree over `words`.
    ///
    /// Fails if the configuration is invalid, the dictionary is empty, or its
    /// words differ in length, repeat, or contain the placeholder character.
    pub fn fit(words: Vec<String>, config: &TreeConfig) -> Result<Self> {
        config.validate()?;
        let length = dictionary::validate(&words)?;

        let mut root = Node::new(0);
        root.fit(&words, (0..words.len()).collect(), config);

        let tree = Self {
            words,
            config: *config,
            root,
        };
        if log::log_enabled!(log::Level::Info) {
            let stats = tree.stats();
            log::info!(
                "fitted tree over {} words of length {}: {} nodes, {} leaves, height {}",
                tree.words.len(),
                length,
                stats.nodes,
                stats.leaves,
                stats.height
            );
        }
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// The word presented at `node`, or `""` for the root's empty query.
    pub fn query_word(&self, node: &Node) -> &str {
        node.get_query().map_or("", |q| self.word(q))
    }

    /// Iterate over every node, depth first, parents before children.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![&self.root],
        }
    }

    pub fn stats(&self) -> TreeStats {
        self.nodes().fold(TreeStats::default(), |mut stats, node| {
            stats.nodes += 1;
            if node.is_leaf() {
                stats.leaves += 1;
            }
            stats.height = stats.height.max(node.depth());
            stats
        })
    }
}

/// Depth-first iterator over the nodes of a [`Tree`].
pub struct Nodes<'t> {
    stack: Vec<&'t Node>,
}

impl<'t> Iterator for Nodes<'t> {
    type Item = &'t Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.values().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_leaf_takes_first_candidate() {
        let mut node = Node::new(3);
        node.fit(&words(&["aa", "bb", "cc"]), vec![2, 0], &TreeConfig::new(5, 10));
        assert!(node.is_leaf());
        assert_eq!(node.get_query(), Some(2));
        assert_eq!(node.candidates(), &[2, 0]);
    }

    #[test]
    fn test_max_depth_makes_leaf() {
        let mut node = Node::new(4);
        node.fit(&words(&["aa", "bb", "cc"]), vec![0, 1, 2], &TreeConfig::new(1, 4));
        assert!(node.is_leaf());
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn test_nodes_visits_parent_first() {
        let tree = Tree::fit(words(&["ab", "ac", "bc"]), &TreeConfig::default()).unwrap();
        let first = tree.nodes().next().unwrap();
        assert_eq!(first.depth(), 0);
        assert_eq!(tree.nodes().count(), tree.stats().nodes);
    }
}
