use std::env;

use anyhow::{Context, Result};

use crate::source::Encoding;

/// Decimal places used when printing radians unless overridden.
pub const DEFAULT_PRECISION: usize = 6;
/// More digits than an f64 carries is just noise.
pub const MAX_PRECISION: usize = 17;
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, and command-line flags
/// take precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// How files are decoded (WORDSIM_ENCODING, default latin1)
    pub encoding: Encoding,
    /// Decimal places for printed distances (WORDSIM_PRECISION)
    pub precision: usize,
    /// How many of the most frequent words `stats` lists (WORDSIM_TOP_WORDS)
    pub top_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            precision: DEFAULT_PRECISION,
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Unset keys fall
    /// back to defaults; set but malformed keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let encoding = match lookup("WORDSIM_ENCODING") {
            Some(raw) => raw
                .parse()
                .context("WORDSIM_ENCODING is not a supported encoding")?,
            None => defaults.encoding,
        };

        let precision = match lookup("WORDSIM_PRECISION") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("WORDSIM_PRECISION must be a whole number, got {raw:?}"))?
                .min(MAX_PRECISION),
            None => defaults.precision,
        };

        let top_words = match lookup("WORDSIM_TOP_WORDS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("WORDSIM_TOP_WORDS must be a whole number, got {raw:?}"))?,
            None => defaults.top_words,
        };

        Ok(Self {
            encoding,
            precision,
            top_words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = load(&[
            ("WORDSIM_ENCODING", "utf-8"),
            ("WORDSIM_PRECISION", "3"),
            ("WORDSIM_TOP_WORDS", "25"),
        ])
        .unwrap();
        assert_eq!(config.encoding, Encoding::Utf8);
        assert_eq!(config.precision, 3);
        assert_eq!(config.top_words, 25);
    }

    #[test]
    fn test_precision_is_capped() {
        let config = load(&[("WORDSIM_PRECISION", "40")]).unwrap();
        assert_eq!(config.precision, MAX_PRECISION);
    }

    #[test]
    fn test_malformed_values_fail() {
        assert!(load(&[("WORDSIM_ENCODING", "klingon")]).is_err());
        assert!(load(&[("WORDSIM_PRECISION", "six")]).is_err());
        assert!(load(&[("WORDSIM_TOP_WORDS", "-1")]).is_err());
    }
}
