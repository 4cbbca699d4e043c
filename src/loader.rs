// Copyright (c) 2025 Rune Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Loader for TeX hyphenation pattern files.
//!
//! The accepted format is the one used by the `hyph-*.tex` pattern files:
//!
//! ```text
//! % comments run to the end of the line
//! \patterns{
//! .hy3ph he2n hena4 hen5at
//! }
//! \hyphenation{
//! as-so-ciate ta-ble
//! }
//! ```
//!
//! Words inside `\patterns{...}` are decoded and inserted into a
//! [`PatternTrie`]. Words inside `\hyphenation{...}` are exception words; they
//! are collected but never inserted. A listing without any command is read as
//! one bare list of patterns.

use std::io::Read;

use tracing::{debug, info, warn};

use crate::config::DecoderConfig;
use crate::data_structures::pattern_trie::PatternTrie;
use crate::error::loader::LoaderError;

/// Result of loading a pattern listing.
#[derive(Debug, Clone, Default)]
pub struct LoadedPatterns {
    /// Trie holding every successfully decoded pattern
    pub trie: PatternTrie,

    /// Exception words from `\hyphenation` blocks, hyphens preserved
    pub exceptions: Vec<String>,

    /// Number of patterns inserted
    pub loaded: usize,

    /// Number of malformed patterns skipped
    pub skipped: usize,
}

/// Reads a pattern listing from `reader` and builds a trie from it.
///
/// # Errors
///
/// Returns a [`LoaderError`] if the source cannot be read or its block
/// structure is invalid. Malformed individual patterns are skipped.
pub fn load_patterns<R: Read>(
    mut reader: R,
    config: DecoderConfig,
) -> Result<LoadedPatterns, LoaderError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_patterns(&source, config)
}

/// Parses a pattern listing held in memory.
pub fn parse_patterns(source: &str, config: DecoderConfig) -> Result<LoadedPatterns, LoaderError> {
    let mut loaded = LoadedPatterns {
        trie: PatternTrie::with_config(config),
        ..LoadedPatterns::default()
    };

    // Command awaiting its opening brace, then the block currently open
    let mut pending: Option<(Block, usize)> = None;
    let mut open: Option<(Block, usize)> = None;

    for (token, line) in Tokens::new(source) {
        if let Some((block, opened)) = pending.filter(|_| token != Token::Open) {
            return Err(LoaderError::MissingBrace {
                command: block.command().to_string(),
                line: opened,
            });
        }

        match token {
            Token::Command(name) => {
                if open.is_some() {
                    return Err(LoaderError::UnexpectedCommand {
                        command: name.to_string(),
                        line,
                    });
                }
                let block = Block::from_command(name).ok_or_else(|| LoaderError::UnknownCommand {
                    command: name.to_string(),
                    line,
                })?;
                pending = Some((block, line));
            }
            Token::Open => match pending.take() {
                Some((block, opened)) => {
                    debug!(command = block.command(), line = opened, "Opening block");
                    open = Some((block, opened));
                }
                None => return Err(LoaderError::UnexpectedBrace { brace: '{', line }),
            },
            Token::Close => {
                if open.take().is_none() {
                    return Err(LoaderError::UnexpectedBrace { brace: '}', line });
                }
            }
            Token::Word(word) => match open.map(|(block, _)| block) {
                Some(Block::Exceptions) => loaded.exceptions.push(word.to_string()),
                Some(Block::Patterns) | None => match loaded.trie.try_add_pattern_string(word) {
                    Ok(()) => loaded.loaded += 1,
                    Err(err) => {
                        warn!(line, pattern = word, error = %err, "Skipping malformed pattern");
                        loaded.skipped += 1;
                    }
                },
            },
        }
    }

    if let Some((block, line)) = pending {
        return Err(LoaderError::MissingBrace {
            command: block.command().to_string(),
            line,
        });
    }

    if let Some((block, line)) = open {
        return Err(LoaderError::UnterminatedBlock {
            command: block.command().to_string(),
            line,
        });
    }

    info!(
        loaded = loaded.loaded,
        skipped = loaded.skipped,
        exceptions = loaded.exceptions.len(),
        nodes = loaded.trie.size(),
        "Loaded hyphenation patterns"
    );

    Ok(loaded)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Patterns,
    Exceptions,
}

impl Block {
    fn from_command(name: &str) -> Option<Self> {
        match name {
            "patterns" => Some(Self::Patterns),
            "hyphenation" => Some(Self::Exceptions),
            _ => None,
        }
    }

    fn command(self) -> &'static str {
        match self {
            Self::Patterns => "patterns",
            Self::Exceptions => "hyphenation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Command(&'a str),
    Open,
    Close,
    Word(&'a str),
}

/// Splits a listing into tokens tagged with their one-based line number.
struct Tokens<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Consumes characters while `keep` holds and returns them.
    fn take_while<F: Fn(char) -> bool>(&mut self, keep: F) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !keep(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (Token<'a>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.rest().chars().next()?;
            let line = self.line;

            match c {
                '\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                '%' => {
                    self.take_while(|c| c != '\n');
                }
                c if c.is_whitespace() => {
                    self.pos += c.len_utf8();
                }
                '{' => {
                    self.pos += 1;
                    return Some((Token::Open, line));
                }
                '}' => {
                    self.pos += 1;
                    return Some((Token::Close, line));
                }
                '\\' => {
                    self.pos += 1;
                    let name = self.take_while(|c| c.is_ascii_alphabetic());
                    return Some((Token::Command(name), line));
                }
                _ => {
                    let word = self.take_while(|c| {
                        !c.is_whitespace() && !matches!(c, '{' | '}' | '\\' | '%')
                    });
                    return Some((Token::Word(word), line));
                }
            }
        }
    }
}
