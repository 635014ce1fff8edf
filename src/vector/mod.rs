// Frequency vectors: tokenization, exact vector algebra and cosine distance.

pub mod algebra;
pub mod distance;
pub mod frequency;
pub mod tokenizer;

pub use frequency::{Frequencies, FrequencyVector};
pub use tokenizer::LineMode;
