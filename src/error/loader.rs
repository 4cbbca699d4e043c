//! Pattern file loader error module.
//!
//! Structural problems in a pattern listing are fatal. Individual malformed
//! patterns are not: the loader skips and counts them.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading a hyphenation pattern file.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Error when reading the underlying source.
    #[error("Failed to read pattern source: {0}")]
    Io(#[from] io::Error),

    /// A control sequence other than `\patterns` or `\hyphenation`.
    #[error("Unrecognized command '\\{command}' on line {line}")]
    UnknownCommand {
        /// The command name, without the backslash
        command: String,
        /// One-based line number
        line: usize,
    },

    /// A control sequence appeared inside an open block.
    #[error("Command '\\{command}' not allowed inside a block on line {line}")]
    UnexpectedCommand {
        /// The command name, without the backslash
        command: String,
        /// One-based line number
        line: usize,
    },

    /// A brace that does not open or close a command block.
    #[error("Unexpected '{brace}' on line {line}")]
    UnexpectedBrace {
        /// The offending brace character
        brace: char,
        /// One-based line number
        line: usize,
    },

    /// A command not directly followed by its opening brace.
    #[error("Command '\\{command}' on line {line} is not followed by '{{'")]
    MissingBrace {
        /// The command name, without the backslash
        command: String,
        /// One-based line number of the command
        line: usize,
    },

    /// A block still open at the end of the input.
    #[error("Block '\\{command}' opened on line {line} is never closed")]
    UnterminatedBlock {
        /// The command that opened the block
        command: String,
        /// One-based line number where the block was opened
        line: usize,
    },
}
