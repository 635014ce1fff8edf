// FrequencyVector: one document seen as a sparse vector in word space.
//
// Built once, in a single pass over its input, and read-only afterwards.
// Counts are exact big integers so a pathological input can never wrap.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use num_bigint::BigUint;
use num_traits::One;
use tracing::{debug, warn};

use super::algebra;
use super::distance;
use super::tokenizer::{self, LineMode};
use crate::source::{self, Encoding, SourceError};

/// Normalized word -> exact number of occurrences.
pub type Frequencies = HashMap<String, BigUint>;

/// Word frequencies for a single document plus the counters gathered while
/// building them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyVector {
    frequencies: Frequencies,
    line_count: usize,
    word_count: BigUint,
}

impl FrequencyVector {
    /// Build a vector from a sequence of lines.
    ///
    /// `mode` decides how lines are counted; accumulation is identical either
    /// way. With `SingleLogicalLine` the count is 1 as soon as any line has
    /// content and 0 otherwise.
    pub fn build<I, S>(lines: I, mode: LineMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vector = Self::default();
        for line in lines {
            let line = line.as_ref();
            match mode {
                LineMode::PerPhysicalLine => vector.line_count += 1,
                LineMode::SingleLogicalLine => {
                    if !line.is_empty() {
                        vector.line_count = 1;
                    }
                }
            }
            vector.accumulate(line);
        }

        debug!(
            lines = vector.line_count,
            words = %vector.word_count,
            unique = vector.unique_word_count(),
            "Built frequency vector"
        );
        vector
    }

    /// Build from in-memory text. The whole string is one logical line, so
    /// embedded line breaks do not add to the line count. `None` and `""`
    /// give the empty vector.
    pub fn from_text(text: Option<&str>) -> Self {
        match text {
            Some(text) if !text.is_empty() => Self::build([text], LineMode::SingleLogicalLine),
            _ => Self::default(),
        }
    }

    /// Build from already separated lines, one count per line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(lines, LineMode::PerPhysicalLine)
    }

    /// Build from a line-oriented reader, decoding each line with `encoding`.
    ///
    /// A read failure part-way through is returned as an error; the lines
    /// read before it are discarded along with the partial vector.
    pub fn from_reader<R: BufRead>(reader: R, encoding: Encoding) -> io::Result<Self> {
        let mut failure = None;
        let lines = source::read_lines(reader, encoding).map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                failure = Some(e);
                None
            }
        });
        let vector = Self::build(lines, LineMode::PerPhysicalLine);
        match failure {
            Some(e) => Err(e),
            None => Ok(vector),
        }
    }

    /// Build from a file on disk.
    pub fn from_path(path: &Path, encoding: Encoding) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|e| SourceError::open(path, e))?;
        Self::from_reader(BufReader::new(file), encoding).map_err(|e| SourceError::read(path, e))
    }

    /// Build from a file, falling back to the empty vector when the file is
    /// missing or unreadable. The failure is logged rather than returned.
    pub fn from_path_or_empty(path: &Path, encoding: Encoding) -> Self {
        match Self::from_path(path, encoding) {
            Ok(vector) => vector,
            Err(e) => {
                warn!(error = %e, "Treating unreadable source as empty");
                Self::default()
            }
        }
    }

    fn accumulate(&mut self, line: &str) {
        let folded = tokenizer::fold(line);
        for word in tokenizer::words(&folded) {
            match self.frequencies.get_mut(word) {
                Some(count) => *count += 1u32,
                None => {
                    self.frequencies.insert(word.to_owned(), BigUint::one());
                }
            }
            self.word_count += 1u32;
        }
    }

    /// Total number of valid words seen, duplicates included.
    pub fn word_count(&self) -> &BigUint {
        &self.word_count
    }

    /// Lines processed; 0 only for empty or absent input.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Number of distinct words.
    pub fn unique_word_count(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Count for a single word, if it occurs.
    pub fn frequency(&self, word: &str) -> Option<&BigUint> {
        self.frequencies.get(word)
    }

    /// Read-only view of the mapping.
    pub fn frequencies(&self) -> &Frequencies {
        &self.frequencies
    }

    /// Independent deep copy of the mapping. Changing it leaves this vector
    /// untouched.
    pub fn copy_of_frequencies(&self) -> Frequencies {
        self.frequencies.clone()
    }

    pub fn euclidean_norm(&self) -> f64 {
        algebra::euclidean_norm(&self.frequencies)
    }

    pub fn dot_product(&self, other: Option<&Frequencies>) -> f64 {
        algebra::dot_product(&self.frequencies, other)
    }

    /// Cosine distance in radians, see [`distance::distance`].
    pub fn distance(&self, other: Option<&Frequencies>) -> f64 {
        distance::distance(self, other)
    }

    /// The `n` most frequent words, highest count first and ties in
    /// alphabetical order.
    pub fn top_words(&self, n: usize) -> Vec<(&str, &BigUint)> {
        let mut ranked: Vec<(&str, &BigUint)> = self
            .frequencies
            .iter()
            .map(|(word, count)| (word.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}
