// wordsim: cosine distance between text documents over word frequencies.
//
// This is the library root. `vector` holds the core (tokenizing, exact
// counting, norms, dot products, distance); the remaining modules are the
// file, configuration and display plumbing around it.

pub mod compare;
pub mod config;
pub mod output;
pub mod source;
pub mod vector;

pub use source::{Encoding, SourceError};
pub use vector::{Frequencies, FrequencyVector, LineMode};
