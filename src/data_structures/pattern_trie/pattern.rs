// Copyright (c) 2025 Rune Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Decoding of TeX-style hyphenation pattern strings.
//!
//! A pattern such as `hy3phe2n` interleaves the characters of a word with
//! single decimal digits. Decoding splits it into the plain word
//! (`hyphen`) and one weight per character, where each weight is the digit
//! directly after that character or zero. A digit before the first
//! character (`5emnix`) becomes the leading slot.

use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

use super::error::PatternError;
use crate::config::DecoderConfig;

/// A decoded hyphenation pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    letters: String,
    leading: Option<u8>,
    weights: Vec<u8>,
}

impl Pattern {
    /// Decodes a pattern string with the default decoder configuration.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        Self::parse_with(source, &DecoderConfig::default())
    }

    /// Decodes a pattern string in a single pass.
    ///
    /// Only ASCII digits are weights; every other code point, including
    /// non-ASCII digits, is a letter of the word.
    ///
    /// # Errors
    ///
    /// * [`PatternError::NoLetters`] - `source` is empty or all digits.
    /// * [`PatternError::DigitRun`] - consecutive digits while `config.strict` is set.
    ///   Otherwise the first digit of a run is the weight and the rest are ignored.
    /// * [`PatternError::TooLong`] - more than `config.max_pattern_len` letters.
    pub fn parse_with(source: &str, config: &DecoderConfig) -> Result<Self, PatternError> {
        let mut letters = String::with_capacity(source.len());
        let mut weights = Vec::with_capacity(source.len());
        let mut leading = None;
        let mut run = 0usize;

        for (position, c) in source.chars().enumerate() {
            let Some(digit) = ascii_digit(c) else {
                if weights.len() == config.max_pattern_len {
                    return Err(PatternError::TooLong {
                        pattern: source.to_string(),
                        max_len: config.max_pattern_len,
                    });
                }
                letters.push(c);
                weights.push(0);
                run = 0;
                continue;
            };

            run += 1;
            if run > 1 && config.strict {
                return Err(PatternError::DigitRun {
                    pattern: source.to_string(),
                    position,
                });
            }

            // Non-strict runs keep their first digit
            if run == 1 {
                let slot = match weights.last_mut() {
                    Some(weight) => weight,
                    None => leading.get_or_insert(0),
                };
                *slot = digit;
            }
        }

        if letters.is_empty() {
            return Err(PatternError::NoLetters {
                pattern: source.to_string(),
            });
        }

        Ok(Self {
            letters,
            leading,
            weights,
        })
    }

    /// Builds a pattern from a plain word and its weight list.
    ///
    /// `values` holds one weight per character of `word`, optionally preceded
    /// by a leading slot, in the layout returned by [`Pattern::values`].
    pub fn from_parts(word: &str, values: &[u8]) -> Result<Self, PatternError> {
        let letters = word.chars().count();
        if letters == 0 {
            return Err(PatternError::NoLetters {
                pattern: word.to_string(),
            });
        }

        if let Some(&weight) = values.iter().find(|&&w| w > 9) {
            return Err(PatternError::WeightOutOfRange { weight });
        }

        let (leading, weights) = match values.len() {
            n if n == letters => (None, values.to_vec()),
            n if n == letters + 1 => (Some(values[0]), values[1..].to_vec()),
            n => {
                return Err(PatternError::WeightCountMismatch {
                    word: word.to_string(),
                    letters,
                    weights: n,
                })
            }
        };

        Ok(Self {
            letters: word.to_string(),
            leading,
            weights,
        })
    }

    /// The word with all weights removed.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// The weight written before the first character, if any.
    pub fn leading(&self) -> Option<u8> {
        self.leading
    }

    /// One weight per character of [`Pattern::letters`].
    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    /// Number of characters in the word.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`: a decoded pattern has at least one character.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The stored weight list: the leading slot, if present, then one weight
    /// per character.
    pub fn values(&self) -> Vec<u8> {
        self.leading.iter().chain(&self.weights).copied().collect()
    }

    /// Weight prefixes for each node along the word's path.
    ///
    /// The i-th item covers the leading slot and the weights of characters
    /// `0..=i`; the last item equals [`Pattern::values`].
    pub(crate) fn path_values(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        let values = self.values();
        let lead = usize::from(self.leading.is_some());
        (1..=self.weights.len()).map(move |i| values[..lead + i].to_vec())
    }

    /// Re-encodes the pattern with digits interspersed.
    ///
    /// Zero weights are omitted unless `include_zero_weights` is set.
    pub fn encode(&self, include_zero_weights: bool) -> String {
        let mut out = String::with_capacity(self.letters.len() * 2 + 1);
        let push_weight = |out: &mut String, weight: u8| {
            if weight != 0 || include_zero_weights {
                // Writing to a String cannot fail
                let _ = write!(out, "{weight}");
            }
        };

        if let Some(leading) = self.leading {
            push_weight(&mut out, leading);
        }
        for (c, &weight) in self.letters.chars().zip(&self.weights) {
            out.push(c);
            push_weight(&mut out, weight);
        }

        out
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(false))
    }
}

fn ascii_digit(c: char) -> Option<u8> {
    c.is_ascii_digit().then(|| c as u8 - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hy3phe2n5a4t2io2n", "hyphenation", None, &[0, 3, 0, 0, 2, 5, 4, 2, 0, 2, 0] ; "interspersed")]
    #[test_case("5emnix", "emnix", Some(5), &[0, 0, 0, 0, 0] ; "leading digit")]
    #[test_case("hena4", "hena", None, &[0, 0, 0, 4] ; "trailing digit")]
    #[test_case(".hy3ph", ".hyph", None, &[0, 0, 3, 0, 0] ; "word boundary marker")]
    #[test_case("1na", "na", Some(1), &[0, 0] ; "leading with two letters")]
    #[test_case("a", "a", None, &[0] ; "single letter")]
    #[test_case("ü3ber", "über", None, &[3, 0, 0, 0] ; "multibyte letter")]
    #[test_case("a٣b", "a٣b", None, &[0, 0, 0] ; "non ascii digit is a letter")]
    fn test_parse(source: &str, letters: &str, leading: Option<u8>, weights: &[u8]) {
        let pattern = Pattern::parse(source).unwrap();
        assert_eq!(pattern.letters(), letters);
        assert_eq!(pattern.leading(), leading);
        assert_eq!(pattern.weights(), weights);
        assert_eq!(pattern.len(), letters.chars().count());
    }

    #[test]
    fn test_values_include_leading_slot() {
        let pattern = Pattern::parse("5emnix").unwrap();
        assert_eq!(pattern.values(), vec![5, 0, 0, 0, 0, 0]);

        let pattern = Pattern::parse("hy3ph").unwrap();
        assert_eq!(pattern.values(), vec![0, 3, 0, 0]);
    }

    #[test]
    fn test_path_values() {
        let pattern = Pattern::parse("he2n").unwrap();
        let prefixes: Vec<Vec<u8>> = pattern.path_values().collect();
        assert_eq!(prefixes, vec![vec![0], vec![0, 2], vec![0, 2, 0]]);

        let pattern = Pattern::parse("4ab").unwrap();
        let prefixes: Vec<Vec<u8>> = pattern.path_values().collect();
        assert_eq!(prefixes, vec![vec![4, 0], vec![4, 0, 0]]);
    }

    #[test_case("" ; "empty")]
    #[test_case("7" ; "single digit")]
    #[test_case("4242" ; "digits only")]
    fn test_no_letters(source: &str) {
        let config = DecoderConfig::new().with_strict(false);
        assert!(matches!(
            Pattern::parse_with(source, &config),
            Err(PatternError::NoLetters { .. })
        ));
    }

    #[test]
    fn test_digit_run_strict() {
        let err = Pattern::parse("ab12c").unwrap_err();
        assert_eq!(
            err,
            PatternError::DigitRun {
                pattern: "ab12c".to_string(),
                position: 3,
            }
        );

        assert!(matches!(
            Pattern::parse("12ab"),
            Err(PatternError::DigitRun { position: 1, .. })
        ));
    }

    #[test]
    fn test_digit_run_lenient_keeps_first() {
        let config = DecoderConfig::new().with_strict(false);

        let pattern = Pattern::parse_with("ab152c", &config).unwrap();
        assert_eq!(pattern.letters(), "abc");
        assert_eq!(pattern.weights(), &[0, 1, 0]);

        let pattern = Pattern::parse_with("a12b", &config).unwrap();
        assert_eq!(pattern.weights(), &[1, 0]);

        let pattern = Pattern::parse_with("13ab", &config).unwrap();
        assert_eq!(pattern.leading(), Some(1));
        assert_eq!(pattern.weights(), &[0, 0]);
    }

    #[test]
    fn test_too_long() {
        let config = DecoderConfig::new().with_max_pattern_len(3);
        assert!(Pattern::parse_with("a1b2c3", &config).is_ok());
        assert!(matches!(
            Pattern::parse_with("abcd", &config),
            Err(PatternError::TooLong { max_len: 3, .. })
        ));
    }

    #[test]
    fn test_from_parts() {
        let pattern = Pattern::from_parts("emnix", &[5, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(pattern, Pattern::parse("5emnix").unwrap());

        let pattern = Pattern::from_parts("hyph", &[0, 3, 0, 0]).unwrap();
        assert_eq!(pattern, Pattern::parse("hy3ph").unwrap());

        assert!(matches!(
            Pattern::from_parts("ab", &[1, 2, 3, 4]),
            Err(PatternError::WeightCountMismatch {
                letters: 2,
                weights: 4,
                ..
            })
        ));
        assert!(matches!(
            Pattern::from_parts("", &[]),
            Err(PatternError::NoLetters { .. })
        ));
        assert_eq!(
            Pattern::from_parts("ab", &[0, 10]),
            Err(PatternError::WeightOutOfRange { weight: 10 })
        );
    }

    #[test]
    fn test_encode() {
        let pattern: Pattern = "hy3phe2n5a4t2io2n".parse().unwrap();
        assert_eq!(pattern.to_string(), "hy3phe2n5a4t2io2n");
        assert_eq!(pattern.encode(true), "h0y3p0h0e2n5a4t2i0o2n0");

        let pattern: Pattern = "5emnix".parse().unwrap();
        assert_eq!(pattern.to_string(), "5emnix");
        assert_eq!(pattern.encode(true), "5e0m0n0i0x0");
    }
}
