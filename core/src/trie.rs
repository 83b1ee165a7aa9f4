//! Weighted prefix trie with best-first top-k retrieval.
//!
//! The trie stores a fixed vocabulary of `(term, weight)` pairs and answers
//! prefix queries without scanning the whole vocabulary. Every node carries
//! the maximum weight reachable in its subtree, which serves as an
//! admissible upper bound for a best-first search over candidates.
use crate::candidate::Candidate;
use crate::error::{Result, TrieError};
use ahash::AHashMap;
use std::collections::BinaryHeap;

/// Index of a node in the trie's arena.
type NodeId = usize;

const ROOT: NodeId = 0;

/// Sentinel symbol for the root node; it labels no edge and is never part
/// of a stored term.
const ROOT_SYMBOL: char = '\0';

#[derive(Debug)]
struct Node {
    /// Symbol on the edge from the parent to this node.
    symbol: char,
    /// Back-reference for bookkeeping only; never used to answer queries.
    parent: Option<NodeId>,
    children: AHashMap<char, NodeId>,
    is_terminal: bool,
    /// The full stored term, populated only when `is_terminal` is true.
    term: Option<String>,
    /// Meaningful only when `is_terminal` is true.
    weight: f64,
    /// Maximum weight among all terminal nodes in this subtree, including
    /// this node itself if terminal.
    subtree_max: f64,
}

impl Node {
    fn new(symbol: char, parent: Option<NodeId>, subtree_max: f64) -> Self {
        Self {
            symbol,
            parent,
            children: AHashMap::new(),
            is_terminal: false,
            term: None,
            weight: 0.0,
            subtree_max,
        }
    }
}

/// Entry in the best-first search queue.
///
/// `bound` is an upper bound on any completed weight reachable through this
/// entry: the node's `subtree_max` for expansion entries, the exact term
/// weight for completed entries. Ties prefer completed terms, then the
/// lower arena id, so results are deterministic for a given insertion order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SearchEntry {
    bound: f64,
    node: NodeId,
    completed: bool,
}

impl Eq for SearchEntry {}

impl Ord for SearchEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bound
            .total_cmp(&other.bound)
            .then_with(|| self.completed.cmp(&other.completed))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for SearchEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A prefix trie over weighted terms.
///
/// Built once from parallel term/weight slices, then queried read-only.
/// All nodes live in an arena owned by the trie; children reference each
/// other by index, and the parent back-reference is an index as well, so
/// there is no shared ownership anywhere in the structure.
///
/// # Example
/// ```
/// use autocomplete_core::WeightedTrie;
///
/// let trie = WeightedTrie::new(
///     &["air", "bat", "bell", "boy"],
///     &[3.0, 2.0, 4.0, 1.0],
/// ).unwrap();
///
/// assert_eq!(trie.top_matches("b", 2), vec!["bell", "bat"]);
/// assert_eq!(trie.top_match("b"), "bell");
/// assert_eq!(trie.weight_of("boy"), 1.0);
/// assert_eq!(trie.weight_of("cat"), 0.0);
/// ```
#[derive(Debug)]
pub struct WeightedTrie {
    nodes: Vec<Node>,
    terms: usize,
}

impl WeightedTrie {
    /// Create an empty trie containing only the root.
    pub fn empty() -> Self {
        Self {
            nodes: vec![Node::new(ROOT_SYMBOL, None, 0.0)],
            terms: 0,
        }
    }

    /// Build a trie from parallel term/weight slices.
    ///
    /// Pairs are inserted in input order; a term repeated later in the input
    /// overwrites the weight stored by the earlier occurrence (last write
    /// wins). Fails if the slices differ in length or any weight is negative
    /// or non-finite.
    pub fn new<S: AsRef<str>>(terms: &[S], weights: &[f64]) -> Result<Self> {
        if terms.len() != weights.len() {
            return Err(TrieError::LengthMismatch {
                terms: terms.len(),
                weights: weights.len(),
            });
        }
        let mut trie = Self::empty();
        for (term, &weight) in terms.iter().zip(weights.iter()) {
            trie.add(term.as_ref(), weight)?;
        }
        tracing::debug!(
            terms = trie.terms,
            nodes = trie.nodes.len(),
            "built weighted trie"
        );
        Ok(trie)
    }

    /// Number of distinct terms stored.
    pub fn len(&self) -> usize {
        self.terms
    }

    /// Whether the trie stores no terms at all.
    pub fn is_empty(&self) -> bool {
        self.terms == 0
    }

    /// Insert a term or update its weight.
    ///
    /// Walks the path for `term` from the root, creating missing nodes, and
    /// raises `subtree_max` to at least `weight` on every node along the
    /// path. Inserting an existing term creates no nodes and only refreshes
    /// the terminal fields.
    ///
    /// Known limitation: updating a term to a *smaller* weight does not
    /// lower the stale `subtree_max` values left behind by the larger one.
    /// The aggregate only grows. Bulk construction never exercises a
    /// decrease, so this is documented rather than repaired with a
    /// recomputation pass.
    pub fn add(&mut self, term: &str, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(TrieError::NonFiniteWeight {
                term: term.to_string(),
            });
        }
        if weight < 0.0 {
            return Err(TrieError::NegativeWeight {
                term: term.to_string(),
                weight,
            });
        }
        let mut cur = ROOT;
        for ch in term.chars() {
            if self.nodes[cur].subtree_max < weight {
                self.nodes[cur].subtree_max = weight;
            }
            cur = match self.nodes[cur].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new(ch, Some(cur), weight));
                    self.nodes[cur].children.insert(ch, child);
                    child
                }
            };
        }
        let node = &mut self.nodes[cur];
        if !node.is_terminal {
            node.is_terminal = true;
            self.terms += 1;
        }
        node.term = Some(term.to_string());
        node.weight = weight;
        if node.subtree_max < weight {
            node.subtree_max = weight;
        }
        Ok(())
    }

    /// Exact-lookup weight of `term`, or `0.0` if the term is not stored.
    ///
    /// A stored term with weight zero is indistinguishable from an absent
    /// term here; callers that need membership must track it separately.
    pub fn weight_of(&self, term: &str) -> f64 {
        match self.descend(term) {
            Some(id) if self.nodes[id].is_terminal => self.nodes[id].weight,
            _ => 0.0,
        }
    }

    /// The single highest-weight term starting with `prefix`, or the empty
    /// string when no stored term extends it.
    ///
    /// Follows the chain of children whose `subtree_max` carries the
    /// current maximum, stopping at the terminal node that achieves it.
    /// When several children carry the max, the lowest symbol wins.
    pub fn top_match(&self, prefix: &str) -> String {
        let Some(mut cur) = self.descend(prefix) else {
            return String::new();
        };
        loop {
            let node = &self.nodes[cur];
            if node.is_terminal && node.weight == node.subtree_max {
                return node.term.clone().unwrap_or_default();
            }
            let carrier = node
                .children
                .iter()
                .filter(|&(_, &child)| self.nodes[child].subtree_max == node.subtree_max)
                .min_by_key(|&(&symbol, _)| symbol)
                .map(|(_, &child)| child);
            match carrier {
                Some(child) => cur = child,
                // No terminal below (empty trie, or a stale aggregate).
                None => return String::new(),
            }
        }
    }

    /// The up-to-`k` highest-weight terms starting with `prefix`, in
    /// non-increasing weight order.
    ///
    /// `k == 0` and unmatched prefixes yield an empty vector; neither is an
    /// error. See [`top_candidates`](Self::top_candidates) for the same
    /// query with weights attached.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        self.top_candidates(prefix, k)
            .into_iter()
            .map(|c| c.term)
            .collect()
    }

    /// Ranked `(term, weight)` results for `prefix`, capped at `k`.
    ///
    /// Best-first branch-and-bound: a max-heap of search entries ordered by
    /// upper bound, seeded with the prefix node. Popping an expansion entry
    /// pushes its children under their `subtree_max` bounds and, if the node
    /// is terminal, re-queues the completed term under its exact weight. A
    /// term is emitted only when popped as a completed entry, i.e. only once
    /// no unexplored bound exceeds its weight, so results come out in
    /// non-increasing weight order without enumerating the matching subtree.
    /// The live queue never holds more than O(branching x depth) expansion
    /// entries plus the completed terms awaiting emission.
    pub fn top_candidates(&self, prefix: &str, k: usize) -> Vec<Candidate> {
        let mut results = Vec::new();
        if k == 0 {
            return results;
        }
        let Some(start) = self.descend(prefix) else {
            return results;
        };
        tracing::trace!(prefix, k, "best-first top-k search");
        let mut queue = BinaryHeap::new();
        queue.push(SearchEntry {
            bound: self.nodes[start].subtree_max,
            node: start,
            completed: false,
        });
        while let Some(entry) = queue.pop() {
            let node = &self.nodes[entry.node];
            if entry.completed {
                if let Some(term) = &node.term {
                    results.push(Candidate::new(term.clone(), node.weight));
                }
                if results.len() == k {
                    break;
                }
                continue;
            }
            if node.is_terminal {
                queue.push(SearchEntry {
                    bound: node.weight,
                    node: entry.node,
                    completed: true,
                });
            }
            for &child in node.children.values() {
                queue.push(SearchEntry {
                    bound: self.nodes[child].subtree_max,
                    node: child,
                    completed: false,
                });
            }
        }
        results
    }

    /// Walk from the root along the symbols of `path`; `None` if it breaks.
    fn descend(&self, path: &str) -> Option<NodeId> {
        let mut cur = ROOT;
        for ch in path.chars() {
            cur = *self.nodes[cur].children.get(&ch)?;
        }
        Some(cur)
    }

    /// Check the trie's structural invariants.
    ///
    /// Verifies that every child's parent back-reference and edge symbol are
    /// consistent, and that every node's `subtree_max` equals the true
    /// maximum weight over its terminal descendants, recomputed from
    /// scratch. Intended for tests and debugging; not a query-path helper.
    pub fn validate(&self) -> bool {
        for (id, node) in self.nodes.iter().enumerate() {
            for (&symbol, &child) in &node.children {
                let child_node = &self.nodes[child];
                if child_node.parent != Some(id) || child_node.symbol != symbol {
                    return false;
                }
            }
            // A terminal-free subtree only occurs at the root of an empty
            // trie; its aggregate is never consulted.
            if let Some(max) = self.true_subtree_max(id) {
                if max != node.subtree_max {
                    return false;
                }
            }
        }
        true
    }

    /// Brute-force maximum weight over the terminal descendants of `id`,
    /// including `id` itself; `None` for a terminal-free subtree.
    fn true_subtree_max(&self, id: NodeId) -> Option<f64> {
        let node = &self.nodes[id];
        let mut max = node.is_terminal.then_some(node.weight);
        for &child in node.children.values() {
            if let Some(m) = self.true_subtree_max(child) {
                if max.map_or(true, |cur| m > cur) {
                    max = Some(m);
                }
            }
        }
        max
    }
}

impl Default for WeightedTrie {
    fn default() -> Self {
        Self::empty()
    }
}
