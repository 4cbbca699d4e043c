//! Crate-level test suites.
//!
//! - Property-based tests of the trie invariants using proptest
//! - Configuration loading against real files
//! - Error conversions and messages
//! - Shared fixtures and strategies
