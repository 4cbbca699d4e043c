//! Anchored prefix match iterator.

use std::iter::FusedIterator;
use std::str::CharIndices;

use super::node::TrieNode;

/// Iterator over every stored key that is a prefix of a query string.
///
/// Matches are yielded shortest first, each paired with the terminal node it
/// ends on. The walk stops at the first code point without a matching edge.
#[derive(Debug, Clone)]
pub struct PrefixMatches<'t, 'q, V> {
    query: &'q str,
    chars: CharIndices<'q>,
    node: Option<&'t TrieNode<V>>,
}

impl<'t, 'q, V> PrefixMatches<'t, 'q, V> {
    pub(crate) fn new(root: &'t TrieNode<V>, query: &'q str) -> Self {
        Self {
            query,
            chars: query.char_indices(),
            node: Some(root),
        }
    }
}

impl<'t, 'q, V> Iterator for PrefixMatches<'t, 'q, V> {
    type Item = (&'q str, &'t TrieNode<V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.node?;
            let Some((pos, c)) = self.chars.next() else {
                self.node = None;
                return None;
            };

            match node.children.get(&c) {
                Some(child) => {
                    self.node = Some(child);
                    if child.is_terminal {
                        return Some((&self.query[..pos + c.len_utf8()], child));
                    }
                }
                None => {
                    self.node = None;
                    return None;
                }
            }
        }
    }
}

impl<V> FusedIterator for PrefixMatches<'_, '_, V> {}
