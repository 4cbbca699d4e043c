// Copyright (c) 2025 Rune Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hyphenation Pattern Trie.
//!
//! This module stores TeX-style hyphenation patterns in a [`RuneTrie`] whose
//! values are weight lists. Patterns are supplied in their compact textual
//! form (`hy3phe2n`), decoded by [`Pattern`], and inserted so that every node
//! along the word's path carries the weights of the characters consumed to
//! reach it. The terminal node carries the full list.
//!
//! The trie only reports which stored patterns match the start of a word and
//! with which weights; deciding where to break the word is left to the caller.
//!
//! # Example
//!
//! ```
//! use rune_trie::data_structures::pattern_trie::PatternTrie;
//!
//! let mut trie = PatternTrie::new();
//! trie.add_pattern_string("hy3ph");
//! trie.add_pattern_string("he2n");
//! trie.add_pattern_string("hena4");
//!
//! assert_eq!(trie.get_weights("hyph"), Some(&[0, 3, 0, 0][..]));
//!
//! let (found, weights) = trie.all_substrings_and_values("henation");
//! assert_eq!(found, vec!["hen", "hena"]);
//! assert_eq!(weights, vec![&[0, 2, 0][..], &[0, 0, 0, 4][..]]);
//! ```
//!
//! # Weight layout
//!
//! One weight per character, where weight *i* is the digit written after
//! character *i*. A pattern with a digit before its first character stores
//! that digit as an extra leading slot, so `5emnix` stores
//! `[5, 0, 0, 0, 0, 0]` for the five characters of `emnix`.

mod error;
mod pattern;

#[cfg(test)]
mod tests;

use std::io::Read;

use tracing::{trace, warn};

use super::rune_trie::{RuneTrie, TrieNode};
use crate::config::DecoderConfig;
use crate::error::loader::LoaderError;

pub use error::PatternError;
pub use pattern::Pattern;

/// Result type for pattern operations
pub type PatternResult<T> = Result<T, PatternError>;

/// A trie of hyphenation patterns keyed by their plain words.
#[derive(Debug, Clone, Default)]
pub struct PatternTrie {
    /// Underlying trie; each node holds the weight prefix for its path
    trie: RuneTrie<Vec<u8>>,

    /// Decoder options applied to pattern strings
    config: DecoderConfig,
}

impl PatternTrie {
    /// Creates a new empty `PatternTrie` with the default decoder configuration.
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    /// Creates a new empty `PatternTrie` with the specified decoder configuration.
    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            trie: RuneTrie::new(),
            config,
        }
    }

    /// Builds a trie from a TeX pattern listing.
    ///
    /// See [`crate::loader`] for the accepted format.
    pub fn from_reader<R: Read>(reader: R, config: DecoderConfig) -> Result<Self, LoaderError> {
        crate::loader::load_patterns(reader, config).map(|loaded| loaded.trie)
    }

    /// The decoder configuration in use.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// The underlying trie.
    pub fn as_trie(&self) -> &RuneTrie<Vec<u8>> {
        &self.trie
    }

    /// Decodes and inserts a pattern string such as `hy3phe2n`.
    ///
    /// Malformed patterns are logged and ignored, leaving the trie unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the pattern was inserted.
    pub fn add_pattern_string(&mut self, source: &str) -> bool {
        match self.try_add_pattern_string(source) {
            Ok(()) => true,
            Err(err) => {
                warn!(pattern = source, error = %err, "Ignoring malformed hyphenation pattern");
                false
            }
        }
    }

    /// Decodes and inserts a pattern string, reporting malformed input.
    pub fn try_add_pattern_string(&mut self, source: &str) -> PatternResult<()> {
        let pattern = Pattern::parse_with(source, &self.config)?;
        self.add_pattern(&pattern);
        Ok(())
    }

    /// Inserts an already decoded pattern.
    ///
    /// Re-adding a word replaces its weights. Interior nodes that terminate
    /// other patterns keep their own weights.
    pub fn add_pattern(&mut self, pattern: &Pattern) {
        self.trie
            .insert_along(pattern.letters(), pattern.path_values());
        trace!(pattern = %pattern, "Inserted hyphenation pattern");
    }

    /// Inserts a plain word with an explicit weight list.
    ///
    /// `weights` holds one weight per character of `word`, optionally
    /// preceded by a leading slot.
    pub fn insert_weights(&mut self, word: &str, weights: &[u8]) -> PatternResult<()> {
        let pattern = Pattern::from_parts(word, weights)?;
        self.add_pattern(&pattern);
        Ok(())
    }

    /// Checks whether a pattern for `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Retrieves the weights stored for `word`.
    pub fn get_weights(&self, word: &str) -> Option<&[u8]> {
        self.trie.get(word).map(Vec::as_slice)
    }

    /// Retrieves the partial weights stored on the node for `prefix`.
    ///
    /// Unlike [`PatternTrie::get_weights`], `prefix` need not be a stored
    /// word; any prefix of one reports the weights of the pattern that last
    /// wrote to that node.
    pub fn prefix_weights(&self, prefix: &str) -> Option<&[u8]> {
        self.trie
            .node(prefix)
            .and_then(TrieNode::value)
            .map(Vec::as_slice)
    }

    /// Removes the pattern for `word`.
    ///
    /// Nodes the removed pattern shared with surviving patterns are
    /// re-stamped from a surviving pattern, so no partial weights of the
    /// removed pattern remain.
    ///
    /// # Returns
    ///
    /// `true` if the trie is empty after the removal.
    pub fn remove(&mut self, word: &str) -> bool {
        if !self.trie.contains(word) {
            return self.trie.remove(word);
        }

        let now_empty = self.trie.remove(word);
        if let Some(survivor) = self.surviving_pattern(word) {
            self.trie
                .insert_along(survivor.letters(), survivor.path_values());
            trace!(removed = word, survivor = %survivor, "Re-stamped shared prefix");
        }
        now_empty
    }

    /// Finds a stored pattern below the deepest node still left on `word`'s path.
    fn surviving_pattern(&self, word: &str) -> Option<Pattern> {
        let end = word
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .rev()
            .find(|&end| self.trie.node(&word[..end]).is_some())?;

        let mut key = word[..end].to_string();
        let mut node = self.trie.node(&key)?;
        while !node.is_terminal() {
            let (c, child) = node.children().min_by_key(|&(c, _)| c)?;
            key.push(c);
            node = child;
        }

        Pattern::from_parts(&key, node.value()?).ok()
    }

    /// Returns every stored word, without weights, in lexicographic order.
    pub fn members(&self) -> Vec<String> {
        self.trie.members()
    }

    /// Returns every stored pattern re-encoded with its weights, sorted.
    ///
    /// Zero weights are omitted unless `include_zero_weights` is set.
    pub fn pattern_members(&self, include_zero_weights: bool) -> Vec<String> {
        let mut members = Vec::new();
        self.trie.for_each_member(|word, node| {
            let encoded = node
                .value()
                .and_then(|values| Pattern::from_parts(word, values).ok())
                .map(|pattern| pattern.encode(include_zero_weights));
            members.push(encoded.unwrap_or_else(|| word.to_owned()));
        });
        members.sort_unstable();
        members
    }

    /// Counts every node below the root.
    pub fn size(&self) -> usize {
        self.trie.size()
    }

    /// Checks whether no patterns are stored.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Removes every pattern.
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// Returns every stored word that is a prefix of `query`, shortest first.
    pub fn all_substrings<'q>(&self, query: &'q str) -> Vec<&'q str> {
        self.trie.all_substrings(query)
    }

    /// Like [`PatternTrie::all_substrings`], with the weights of each match.
    pub fn all_substrings_and_values<'t, 'q>(
        &'t self,
        query: &'q str,
    ) -> (Vec<&'q str>, Vec<&'t [u8]>) {
        self.trie
            .prefix_matches(query)
            .map(|(matched, node)| (matched, node.value().map_or(&[][..], Vec::as_slice)))
            .unzip()
    }
}

impl<'a> Extend<&'a str> for PatternTrie {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for source in iter {
            self.add_pattern_string(source);
        }
    }
}

impl<'a> FromIterator<&'a str> for PatternTrie {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
