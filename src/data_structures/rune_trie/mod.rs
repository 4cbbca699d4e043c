//! Rune Trie Implementation
//!
//! A prefix tree keyed by Unicode scalar values (`char`) rather than bytes,
//! so every edge corresponds to exactly one code point regardless of its
//! UTF-8 width. The trie is generic over the value type stored on nodes.
//!
//! # Example
//!
//! ```
//! use rune_trie::data_structures::rune_trie::RuneTrie;
//!
//! let mut trie: RuneTrie = RuneTrie::new();
//! trie.insert("hyph");
//! trie.insert("hen");
//! trie.insert("hena");
//!
//! assert!(trie.contains("hen"));
//! assert_eq!(trie.all_substrings("henation"), vec!["hen", "hena"]);
//! assert_eq!(trie.size(), 7);
//! ```
//!
//! # Concurrency
//!
//! The trie has no internal synchronization. Mutation takes `&mut self` and
//! queries take `&self`, so any number of readers may share an unmodified
//! trie while writers need exclusive access.

mod iter;
mod node;

use std::str::Chars;

pub use iter::PrefixMatches;
pub use node::TrieNode;

/// Rune Trie is a prefix tree over Unicode code points.
///
/// Key features:
/// * Code point keyed edges, independent of UTF-8 byte layout
/// * Values of any type attached to terminal nodes, or to every node on a path
/// * Eager pruning of nodes left useless by a removal
/// * Anchored prefix matching of a query against all stored keys
///
/// The empty key is never stored: insertions of `""` are ignored and lookups
/// of `""` report absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuneTrie<V = ()> {
    /// The root node of the trie, never terminal
    root: TrieNode<V>,
}

impl<V> RuneTrie<V> {
    /// Creates a new empty `RuneTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Inserts a key, creating any missing nodes along its path.
    ///
    /// The final node is marked terminal and returned so the caller can attach
    /// a value to it. Re-inserting an existing key creates no nodes.
    ///
    /// # Returns
    ///
    /// * `Some(&mut TrieNode<V>)` - The terminal node for `key`.
    /// * `None` - If `key` is empty, in which case nothing changes.
    pub fn insert(&mut self, key: &str) -> Option<&mut TrieNode<V>> {
        if key.is_empty() {
            return None;
        }

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }

        node.is_terminal = true;
        Some(node)
    }

    /// Inserts a key and stores `value` on its terminal node.
    ///
    /// Any value previously stored for the same key is replaced. Interior
    /// nodes of the path are left untouched.
    ///
    /// # Returns
    ///
    /// The previous value for `key`, if there was one.
    pub fn insert_with_value(&mut self, key: &str, value: V) -> Option<V> {
        self.insert(key).and_then(|leaf| leaf.set_value(value))
    }

    /// Inserts a key and stores one value on every node along its path.
    ///
    /// The node reached by the i-th code point of `key` receives the i-th
    /// item of `values`. The terminal node always takes its value; an interior
    /// node that already terminates another key keeps its own. Nodes beyond
    /// the end of `values` are left as they are.
    ///
    /// # Returns
    ///
    /// * `Some(&mut TrieNode<V>)` - The terminal node for `key`.
    /// * `None` - If `key` is empty, in which case nothing changes.
    pub fn insert_along<I>(&mut self, key: &str, values: I) -> Option<&mut TrieNode<V>>
    where
        I: IntoIterator<Item = V>,
    {
        if key.is_empty() {
            return None;
        }

        let mut values = values.into_iter();
        let mut chars = key.chars().peekable();
        let mut node = &mut self.root;

        while let Some(c) = chars.next() {
            node = node.children.entry(c).or_default();
            let is_last = chars.peek().is_none();

            if let Some(value) = values.next() {
                if is_last || !node.is_terminal {
                    node.value = Some(value);
                }
            }
        }

        node.is_terminal = true;
        Some(node)
    }

    /// Removes a key, pruning every node the removal leaves without purpose.
    ///
    /// The terminal flag and the value of the key's final node are always
    /// cleared together. Removing a key that is not present, including a
    /// prefix of a stored key, changes nothing. Removing the empty key only reports the current state.
    ///
    /// # Returns
    ///
    /// `true` if the trie holds no nodes after the removal.
    pub fn remove(&mut self, key: &str) -> bool {
        if !key.is_empty() {
            Self::remove_chars(&mut self.root, key.chars());
        }
        self.root.children.is_empty()
    }

    /// Recursive removal helper. Returns `true` if `node` may now be pruned.
    fn remove_chars(node: &mut TrieNode<V>, mut chars: Chars<'_>) -> bool {
        let Some(c) = chars.next() else {
            if !node.is_terminal {
                return false;
            }
            node.is_terminal = false;
            node.value = None;
            return node.is_prunable();
        };

        let prune_child = match node.children.get_mut(&c) {
            Some(child) => Self::remove_chars(child, chars),
            None => false,
        };

        if prune_child {
            node.children.remove(&c);
        }

        node.is_prunable()
    }

    /// Returns the node reached by following `key` from the root.
    ///
    /// Unlike [`RuneTrie::contains`], the node need not be terminal.
    pub fn node(&self, key: &str) -> Option<&TrieNode<V>> {
        if key.is_empty() {
            return None;
        }

        key.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    /// Checks whether `key` was inserted and not since removed.
    pub fn contains(&self, key: &str) -> bool {
        self.node(key).is_some_and(TrieNode::is_terminal)
    }

    /// Retrieves the value stored for `key`.
    ///
    /// # Returns
    ///
    /// * `Some(&V)` - If `key` is present and carries a value.
    /// * `None` - If `key` is absent, or present without a value. Use
    ///   [`RuneTrie::contains`] to tell the two apart.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.node(key)
            .filter(|node| node.is_terminal)
            .and_then(TrieNode::value)
    }

    /// Retrieves a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        if key.is_empty() {
            return None;
        }

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.get_mut(&c)?;
        }

        if node.is_terminal {
            node.value.as_mut()
        } else {
            None
        }
    }

    /// Returns every stored key in lexicographic order.
    pub fn members(&self) -> Vec<String> {
        let mut members = Vec::new();
        self.for_each_member(|key, _| members.push(key.to_owned()));
        members.sort_unstable();
        members
    }

    /// Visits every terminal node depth first with its reconstructed key.
    ///
    /// Visiting order follows the child map and is unspecified.
    pub fn for_each_member<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &TrieNode<V>),
    {
        let mut prefix = String::new();
        Self::walk_members(&self.root, &mut prefix, &mut visit);
    }

    fn walk_members<F>(node: &TrieNode<V>, prefix: &mut String, visit: &mut F)
    where
        F: FnMut(&str, &TrieNode<V>),
    {
        if node.is_terminal {
            visit(prefix.as_str(), node);
        }

        for (&c, child) in &node.children {
            prefix.push(c);
            Self::walk_members(child, prefix, visit);
            prefix.pop();
        }
    }

    /// Counts every node below the root, terminal or not.
    pub fn size(&self) -> usize {
        self.root.descendant_count()
    }

    /// Checks whether the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Removes every key from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }

    /// Returns an iterator over the stored keys that are prefixes of `query`.
    pub fn prefix_matches<'t, 'q>(&'t self, query: &'q str) -> PrefixMatches<'t, 'q, V> {
        PrefixMatches::new(&self.root, query)
    }

    /// Returns every stored key that is a prefix of `query`, shortest first.
    ///
    /// The walk stops at the first code point with no matching edge, so an
    /// empty result is a normal outcome.
    pub fn all_substrings<'q>(&self, query: &'q str) -> Vec<&'q str> {
        self.prefix_matches(query).map(|(matched, _)| matched).collect()
    }

    /// Like [`RuneTrie::all_substrings`], with the value stored for each match.
    ///
    /// The two vectors are parallel: the i-th value belongs to the i-th match.
    pub fn all_substrings_and_values<'t, 'q>(
        &'t self,
        query: &'q str,
    ) -> (Vec<&'q str>, Vec<Option<&'t V>>) {
        self.prefix_matches(query)
            .map(|(matched, node)| (matched, node.value()))
            .unzip()
    }
}

impl<V> Default for RuneTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> Extend<&'a str> for RuneTrie<V> {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, V> FromIterator<&'a str> for RuneTrie<V> {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
