//! Rune Trie Library
//!
//! A prefix tree keyed by Unicode code points, and a specialization of it
//! that stores TeX-style hyphenation patterns with their weights.
//!
//! # Architecture
//!
//! - [`data_structures::rune_trie`]: the generic trie. Insertion, removal with
//!   pruning, lookup, ordered enumeration and anchored prefix matching.
//! - [`data_structures::pattern_trie`]: the pattern decoder and the weighted
//!   trie built on top of the generic one.
//! - [`loader`]: reading `\patterns{...}` listings into a pattern trie.
//! - [`config`], [`error`], [`logging`]: configuration, error types and
//!   tracing setup.
//!
//! # Example
//!
//! ```
//! use rune_trie::PatternTrie;
//!
//! let mut trie = PatternTrie::new();
//! trie.add_pattern_string("hy3phe2n5a4t2io2n");
//!
//! assert_eq!(
//!     trie.get_weights("hyphenation"),
//!     Some(&[0, 3, 0, 0, 2, 5, 4, 2, 0, 2, 0][..])
//! );
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{Pattern, PatternError, PatternTrie, RuneTrie, TrieNode};
pub use error::{TrieError, TrieResult};

/// Version information for the Rune Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
