// Comparison report: everything worth showing about one pair of documents.
//
// The vectors themselves stay untouched; this just gathers the norms, the dot
// product and the resulting distance under human-readable labels so the CLI
// can print them or emit them as JSON.

use std::path::Path;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use crate::source::{Encoding, SourceError};

use crate::vector::algebra::shared_vocabulary;
use crate::vector::distance::cosine_similarity;
use crate::vector::FrequencyVector;

/// Per-document counters included in a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub label: String,
    pub lines: usize,
    /// Exact, so rendered as a decimal string in JSON
    #[serde(serialize_with = "as_decimal")]
    pub words: BigUint,
    pub unique_words: usize,
    pub norm: f64,
}

impl DocumentSummary {
    pub fn of(label: &str, vector: &FrequencyVector) -> Self {
        Self {
            label: label.to_string(),
            lines: vector.line_count(),
            words: vector.word_count().clone(),
            unique_words: vector.unique_word_count(),
            norm: vector.euclidean_norm(),
        }
    }
}

/// The result of comparing document `a` against document `b`.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub a: DocumentSummary,
    pub b: DocumentSummary,
    /// Words that occur in both documents
    pub shared_words: usize,
    pub dot_product: f64,
    /// Cosine distance in radians, 0.0 (same profile) to π/2 (nothing shared)
    pub distance: f64,
    /// Cosine of the angle, 0.0 when the distance is the π/2 sentinel
    pub similarity: f64,
}

impl Comparison {
    pub fn new(label_a: &str, a: &FrequencyVector, label_b: &str, b: &FrequencyVector) -> Self {
        let other = Some(b.frequencies());
        Self {
            a: DocumentSummary::of(label_a, a),
            b: DocumentSummary::of(label_b, b),
            shared_words: shared_vocabulary(a.frequencies(), b.frequencies()),
            dot_product: a.dot_product(other),
            distance: a.distance(other),
            similarity: cosine_similarity(a, other),
        }
    }

    /// True when both documents have the same word profile.
    pub fn is_identical(&self) -> bool {
        self.distance == 0.0
    }
}

/// Build a document from a command-line argument: the text itself when
/// `literal` is set, otherwise a path to read with `encoding`.
pub fn load(
    input: &str,
    literal: bool,
    encoding: Encoding,
) -> Result<FrequencyVector, SourceError> {
    if literal {
        Ok(FrequencyVector::from_text(Some(input)))
    } else {
        FrequencyVector::from_path(Path::new(input), encoding)
    }
}

fn as_decimal<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
