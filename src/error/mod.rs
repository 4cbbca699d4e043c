//! Error module for the Rune Trie crate.
//!
//! The trie operations themselves are total and never fail. Errors arise only
//! at the edges: decoding a malformed hyphenation pattern, loading
//! configuration, reading a pattern file, or installing the log subscriber.

use thiserror::Error;

pub mod config;
pub mod loader;

pub use crate::data_structures::pattern_trie::PatternError;

/// Result type alias used throughout the crate.
pub type TrieResult<T> = Result<T, TrieError>;

/// Core error enum for the Rune Trie crate.
#[derive(Error, Debug)]
pub enum TrieError {
    /// A hyphenation pattern could not be decoded.
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while reading a pattern file.
    #[error("Loader error: {0}")]
    Loader(#[from] loader::LoaderError),

    /// The global tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
