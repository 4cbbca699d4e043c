//! Data structures for the Rune Trie crate.
//!
//! The generic code point trie and the hyphenation pattern trie built on it.
//! Neither uses unsafe code or internal locking.

pub mod pattern_trie;
pub mod rune_trie;

// Re-export common data structures
pub use pattern_trie::{Pattern, PatternError, PatternResult, PatternTrie};
pub use rune_trie::{PrefixMatches, RuneTrie, TrieNode};
