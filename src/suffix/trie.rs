/// Label trie for public suffix lookups.
///
/// Suffixes are stored right-to-left, so "co.uk" becomes the path
/// `"uk" -> "co"` from the root. Nodes live in a flat arena and refer to their
/// children by index.
use std::collections::HashMap;

use crate::host::is_blank;

/// Index of the root node (the empty suffix).
const ROOT: usize = 0;

/// A single trie node: label -> arena index of the child.
#[derive(Debug, Clone, Default)]
struct SuffixNode {
    children: HashMap<String, usize>,
}

/// Public suffix trie keyed by reversed domain labels.
///
/// There is no terminal marker: every node reachable from the root counts as a
/// known suffix, so inserting "co.uk" also makes "uk" match.
#[derive(Debug, Clone)]
pub struct SuffixTrie {
    nodes: Vec<SuffixNode>,
    /// Number of non-blank suffixes passed to `insert`
    entries: usize,
}

impl Default for SuffixTrie {
    fn default() -> Self {
        Self {
            nodes: vec![SuffixNode::default()],
            entries: 0,
        }
    }
}

impl SuffixTrie {
    /// Create an empty trie containing only the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a suffix such as "co.uk".
    ///
    /// Blank labels from stray delimiters ("..uk", ".com.") are skipped. Labels
    /// are stored verbatim: no case folding, and wildcard or exception syntax
    /// (`*.ck`, `!www.ck`) is not interpreted.
    pub fn insert(&mut self, suffix: &str) {
        if is_blank(suffix) {
            return;
        }
        self.entries += 1;

        let mut current = ROOT;
        for label in suffix.rsplit('.').filter(|label| !is_blank(label)) {
            current = match self.child(current, label) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(SuffixNode::default());
                    self.nodes[current].children.insert(label.to_string(), next);
                    next
                }
            };
        }
    }

    /// Count how many of the rightmost `labels` form a path from the root.
    ///
    /// Walks from the last label toward the first and stops at the first label
    /// with no matching child. Returns `labels.len()` when every label matched.
    pub fn matched_depth(&self, labels: &[&str]) -> usize {
        let mut current = ROOT;
        let mut depth = 0;

        for label in labels.iter().rev() {
            match self.child(current, label) {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => break,
            }
        }

        depth
    }

    /// Check whether every label of `suffix` is reachable from the root.
    pub fn contains(&self, suffix: &str) -> bool {
        let labels: Vec<&str> = suffix.split('.').filter(|l| !is_blank(l)).collect();
        !labels.is_empty() && self.matched_depth(&labels) == labels.len()
    }

    /// Number of suffix entries inserted (duplicates included).
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// Number of nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Check if the trie holds no suffixes
    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].children.is_empty()
    }

    #[inline]
    fn child(&self, node: usize, label: &str) -> Option<usize> {
        self.nodes[node].children.get(label).copied()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SuffixTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        for suffix in iter {
            trie.insert(suffix.as_ref());
        }
        trie
    }
}
