//! Pattern decoder configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default maximum number of characters in one pattern.
pub const DEFAULT_MAX_PATTERN_LEN: usize = 64;

/// Configuration for decoding TeX-style hyphenation patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Reject runs of consecutive digits instead of keeping the first one
    pub strict: bool,

    /// Maximum number of characters (digits excluded) in one pattern
    pub max_pattern_len: usize,
}

impl DecoderConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - strict: true
    /// - max_pattern_len: 64
    pub fn new() -> Self {
        Self {
            strict: true,
            max_pattern_len: DEFAULT_MAX_PATTERN_LEN,
        }
    }

    /// Set whether digit runs are rejected.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the maximum pattern length in characters.
    pub fn with_max_pattern_len(mut self, max_pattern_len: usize) -> Self {
        self.max_pattern_len = max_pattern_len;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for DecoderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_pattern_len == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "decoder.max_pattern_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert!(config.strict);
        assert_eq!(config.max_pattern_len, DEFAULT_MAX_PATTERN_LEN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = DecoderConfig::new()
            .with_strict(false)
            .with_max_pattern_len(8);

        assert!(!config.strict);
        assert_eq!(config.max_pattern_len, 8);
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = DecoderConfig::new().with_max_pattern_len(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));
    }
}
