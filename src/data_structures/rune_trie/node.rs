//! Node implementation for the Rune Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node owns its
//! children outright, keyed by the next Unicode scalar value along the path,
//! so the structure is a strict tree without shared or back references.

use fnv::FnvHashMap;

/// A node in the Rune Trie.
///
/// Each node represents one code point along a key path. Terminal nodes mark
/// the end of an inserted key and usually carry the value stored for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode<V> {
    /// Map of code points to owned child nodes
    pub(crate) children: FnvHashMap<char, TrieNode<V>>,

    /// Whether this node represents the end of a key
    pub(crate) is_terminal: bool,

    /// Value associated with the key ending here
    pub(crate) value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            is_terminal: false,
            value: None,
        }
    }

    /// Whether some inserted key ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// The value stored on this node, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Replaces the value stored on this node, returning the previous one.
    ///
    /// This does not touch the terminal flag.
    pub fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    /// Removes and returns the value stored on this node.
    pub fn take_value(&mut self) -> Option<V> {
        self.value.take()
    }

    /// Returns the child reached by `c`, if one exists.
    pub fn child(&self, c: char) -> Option<&TrieNode<V>> {
        self.children.get(&c)
    }

    /// Iterates over the direct children with their edge code points.
    ///
    /// Order is unspecified.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode<V>)> + '_ {
        self.children.iter().map(|(&c, child)| (c, child))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// A childless non-terminal node serves no key and may be pruned.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Number of nodes below this one, not counting itself.
    pub(crate) fn descendant_count(&self) -> usize {
        self.children.len()
            + self
                .children
                .values()
                .map(TrieNode::descendant_count)
                .sum::<usize>()
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
