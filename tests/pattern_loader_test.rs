// Copyright (c) 2025 Rune Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for loading TeX pattern files into a Pattern Trie.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use rune_trie::config::DecoderConfig;
use rune_trie::loader::{load_patterns, LoadedPatterns};
use rune_trie::PatternTrie;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/en-sample.tex")
}

fn load_sample() -> LoadedPatterns {
    let file = File::open(sample_path()).unwrap();
    load_patterns(BufReader::new(file), DecoderConfig::default()).unwrap()
}

/// Breaks `word` at the odd inter-letter weights of every matching pattern.
fn hyphenate(trie: &PatternTrie, word: &str) -> String {
    let dotted: Vec<char> = format!(".{word}.").chars().collect();
    let text: String = dotted.iter().collect();
    let mut gaps = vec![0u8; dotted.len() + 1];

    for (start, (offset, _)) in text.char_indices().enumerate() {
        let (found, weights) = trie.all_substrings_and_values(&text[offset..]);
        for (matched, weights) in found.into_iter().zip(weights) {
            let len = matched.chars().count();
            // A leading slot sits before the first character
            let first_gap = if weights.len() > len { start } else { start + 1 };
            for (i, &w) in weights.iter().enumerate() {
                gaps[first_gap + i] = gaps[first_gap + i].max(w);
            }
        }
    }

    let letters: Vec<char> = word.chars().collect();
    let mut out = String::new();
    for (i, c) in letters.iter().enumerate() {
        if i > 0 && gaps[i + 1] % 2 == 1 {
            out.push('-');
        }
        out.push(*c);
    }
    out
}

#[test]
fn test_load_sample_file() {
    let loaded = load_sample();

    assert_eq!(loaded.loaded, 141);
    assert_eq!(loaded.skipped, 0);
    assert_eq!(loaded.trie.members().len(), 141);
    assert_eq!(loaded.exceptions.len(), 14);
    assert_eq!(loaded.exceptions.first().map(String::as_str), Some("as-so-ciate"));
    assert!(!loaded.trie.contains("associate"));
}

#[test]
fn test_sample_weights() {
    let trie = load_sample().trie;

    assert_eq!(trie.get_weights("hyph"), Some(&[0, 3, 0, 0][..]));
    assert_eq!(trie.get_weights("na"), Some(&[1, 0, 0][..]));
    assert_eq!(trie.get_weights(".ach"), Some(&[0, 0, 0, 4][..]));
    assert_eq!(trie.get_weights("ab.").map(<[u8]>::len), Some(4));

    let (found, weights) = trie.all_substrings_and_values("henation");
    assert_eq!(found, vec!["hen", "hena", "henat"]);
    assert_eq!(
        weights,
        vec![&[0, 2, 0][..], &[0, 0, 0, 4][..], &[0, 0, 5, 0, 0][..]]
    );

    let (found, weights) = trie.all_substrings_and_values("nation");
    assert_eq!(found, vec!["na", "nat"]);
    assert_eq!(weights, vec![&[1, 0, 0][..], &[2, 0, 0][..]]);
}

#[test]
fn test_hyphenate_with_sample() {
    let trie = load_sample().trie;
    assert_eq!(hyphenate(&trie, "hyphenation"), "hy-phen-ation");
}

#[test]
fn test_from_reader_matches_loader() {
    let file = File::open(sample_path()).unwrap();
    let trie = PatternTrie::from_reader(file, DecoderConfig::default()).unwrap();
    assert_eq!(trie.pattern_members(false), load_sample().trie.pattern_members(false));
}

#[test]
fn test_reload_rendered_patterns() {
    let original = load_sample().trie;

    // A bare listing of the re-encoded patterns loads back to the same trie
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rendered.tex");
    std::fs::write(&path, original.pattern_members(true).join("\n")).unwrap();

    let reloaded = PatternTrie::from_reader(File::open(&path).unwrap(), DecoderConfig::default())
        .unwrap();
    assert_eq!(reloaded.pattern_members(false), original.pattern_members(false));
    assert_eq!(reloaded.size(), original.size());
}
