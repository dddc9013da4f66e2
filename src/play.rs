//! Walking a trained tree during a game.
//!
//! A [`Cursor`] is the only state a game needs: the node it is at and the
//! exchanges that led there. [`Tree::play`] drives a cursor against a known
//! secret, which the evaluation helpers use to score a tree over its whole
//! dictionary.

use rayon::prelude::*;

use crate::reveal::reveal;
use crate::tree::{Diagnostic, Node, Tree};

/// The current position of a game in a tree.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tree: &'t Tree,
    node: &'t Node,
    history: Vec<(Option<usize>, String)>,
}

impl<'t> Cursor<'t> {
    pub fn new(tree: &'t Tree) -> Self {
        Self {
            tree,
            node: tree.root(),
            history: Vec::new(),
        }
    }

    pub fn node(&self) -> &'t Node {
        self.node
    }

    /// Index of the word to present next; see [`Node::get_query`].
    pub fn query(&self) -> Option<usize> {
        self.node.get_query()
    }

    pub fn query_word(&self) -> &'t str {
        self.tree.query_word(self.node)
    }

    /// Move to the child selected by `response`.
    ///
    /// Never fails: unknown responses and responses given at a leaf fall back
    /// as described by [`Node::resolve`], and the diagnostic is returned.
    pub fn respond(&mut self, response: &str) -> Option<Diagnostic> {
        let (next, diagnostic) = self.node.resolve(response);
        if let Some(diagnostic) = &diagnostic {
            log::warn!("{}", diagnostic);
        }
        if !self.node.is_leaf() {
            self.history.push((self.node.get_query(), response.to_string()));
        }
        self.node = next;
        diagnostic
    }

    pub fn is_finished(&self) -> bool {
        self.node.is_leaf()
    }

    /// The final guess, once a leaf has been reached.
    pub fn answer(&self) -> Option<&'t str> {
        if self.is_finished() {
            self.node.get_query().map(|q| self.tree.word(q))
        } else {
            None
        }
    }

    /// Queries asked so far, each with the response that was given.
    pub fn history(&self) -> &[(Option<usize>, String)] {
        &self.history
    }
}

/// The record of a game played against a known secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Words presented, in order, ending with the final guess.
    pub queries: Vec<usize>,
    /// Responses observed, one per internal node visited.
    pub responses: Vec<String>,
    pub guess: Option<usize>,
    pub solved: bool,
}

impl Game {
    /// Number of words presented, counting the final guess.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

impl Tree {
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Play a game with `secret` answering every query truthfully.
    pub fn play(&self, secret: &str) -> Game {
        let mut cursor = self.cursor();
        let mut responses = Vec::new();

        while !cursor.is_finished() {
            let response = reveal(secret, cursor.query_word());
            cursor.respond(&response);
            responses.push(response);
        }

        let guess = cursor.query();
        let mut queries: Vec<usize> = cursor.history().iter().filter_map(|(q, _)| *q).collect();
        queries.extend(guess);

        Game {
            queries,
            responses,
            guess,
            solved: cursor.answer() == Some(secret),
        }
    }

    fn play_all(&self) -> Vec<Game> {
        self.words().par_iter().map(|secret| self.play(secret)).collect()
    }

    /// Average number of words presented over every dictionary secret.
    pub fn average_queries(&self) -> f64 {
        let total: usize = self
            .words()
            .par_iter()
            .map(|secret| self.play(secret).len())
            .sum();

        total as f64 / self.words().len() as f64
    }

    /// Number of secrets needing each count of presented words.
    pub fn query_distribution(&self) -> Vec<(usize, usize)> {
        let counts: Vec<usize> = self.play_all().iter().map(Game::len).collect();

        let max = counts.iter().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max + 1];
        for count in counts {
            distribution[count] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Fraction of dictionary secrets whose game ends on the secret itself.
    pub fn accuracy(&self) -> f64 {
        let solved = self.play_all().iter().filter(|game| game.solved).count();
        solved as f64 / self.words().len() as f64
    }
}
