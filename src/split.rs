//! Entropy-based query selection.
//!
//! A query partitions the candidates of a node by the mask each candidate would
//! reveal. The best query is the one whose partition has the highest Shannon
//! entropy, i.e. the one expected to leave the fewest candidates behind.
//!
//! Scoring every candidate against every other makes this O(n²) per node, which
//! is where construction spends its time on large dictionaries.

use std::collections::BTreeMap;

use crate::reveal::reveal;

/// Candidates grouped by the mask they reveal, in ascending dictionary order.
pub type Partition = BTreeMap<String, Vec<usize>>;

/// The query chosen for a node and the partition it induces.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// Dictionary index of the query, or `None` for the empty query asked at
    /// the root, which only reveals the secret's length.
    pub query: Option<usize>,
    pub entropy: f64,
    pub partition: Partition,
}

/// Group `candidates` by the mask each reveals against `query`.
pub fn partition(words: &[String], candidates: &[usize], query: &str) -> Partition {
    let mut parts = Partition::new();
    for &idx in candidates {
        parts
            .entry(reveal(&words[idx], query))
            .or_insert_with(Vec::new)
            .push(idx);
    }
    parts
}

/// Shannon entropy, in bits, of a distribution given by part sizes.
///
/// Sizes are summed smallest first so that partitions with the same shape
/// always score identically.
pub fn entropy<I>(sizes: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let mut sizes: Vec<usize> = sizes.into_iter().filter(|&s| s > 0).collect();
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }
    sizes.sort_unstable();

    let n = total as f64;
    let mut entropy = 0.0;
    for count in sizes {
        let p = count as f64 / n;
        entropy -= p * p.log2();
    }
    entropy
}

/// Entropy of the part sizes of a partition.
pub fn partition_entropy(partition: &Partition) -> f64 {
    entropy(partition.values().map(Vec::len))
}

/// Score a single query word against the candidates.
pub fn score_query(words: &[String], candidates: &[usize], query: usize) -> f64 {
    partition_entropy(&partition(words, candidates, &words[query]))
}

/// Choose the query for a node at `depth` holding `candidates`.
///
/// The root asks the empty query. Deeper nodes try every candidate as the query
/// in order and keep the first one with the strictly highest entropy.
pub fn best_split(words: &[String], candidates: &[usize], depth: usize) -> Split {
    if depth == 0 {
        let partition = partition(words, candidates, "");
        return Split {
            query: None,
            entropy: partition_entropy(&partition),
            partition,
        };
    }

    let mut best = Split {
        query: None,
        entropy: f64::NEG_INFINITY,
        partition: Partition::new(),
    };

    for &query in candidates {
        let partition = partition(words, candidates, &words[query]);
        let entropy = partition_entropy(&partition);
        if entropy > best.entropy {
            best = Split {
                query: Some(query),
                entropy,
                partition,
            };
        }
    }

    best
}
