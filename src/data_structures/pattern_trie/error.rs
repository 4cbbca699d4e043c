// Copyright (c) 2025 Rune Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for hyphenation pattern decoding.

/// Errors that can occur while decoding or inserting a hyphenation pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern contains no characters besides digits.
    #[error("Pattern '{pattern}' contains no letters")]
    NoLetters {
        /// The rejected pattern.
        pattern: String,
    },

    /// Two or more digits in a row, so the weight is ambiguous.
    #[error("Pattern '{pattern}' has consecutive digits at position {position}")]
    DigitRun {
        /// The rejected pattern.
        pattern: String,
        /// Zero-based character position of the second digit.
        position: usize,
    },

    /// The pattern has more characters than the decoder allows.
    #[error("Pattern '{pattern}' exceeds maximum length of {max_len}")]
    TooLong {
        /// The rejected pattern.
        pattern: String,
        /// The maximum allowed number of characters.
        max_len: usize,
    },

    /// The weight list does not line up with the word.
    #[error("Word '{word}' has {letters} characters but {weights} weights were given")]
    WeightCountMismatch {
        /// The word the weights were meant for.
        word: String,
        /// Number of characters in the word.
        letters: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// A weight that cannot be written as a single digit.
    #[error("Weight {weight} is out of range 0-9")]
    WeightOutOfRange {
        /// The offending weight.
        weight: u8,
    },
}
