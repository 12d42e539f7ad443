//! Configuration for the diff engine

use crate::algorithm::DiffAlgorithm;
use crate::tokenizers::Tokenizer;

/// Configuration for diff computation
///
/// Both seams default to the standard pair (word tokenizer, LCS aligner)
/// when left unset.
#[derive(Clone, Default)]
pub struct DiffConfig {
    /// Tokenizer to use
    pub tokenizer: Option<Box<dyn Tokenizer>>,

    /// Alignment algorithm to use
    pub algorithm: Option<Box<dyn DiffAlgorithm>>,
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Set the alignment algorithm
    pub fn with_algorithm(mut self, algorithm: Box<dyn DiffAlgorithm>) -> Self {
        self.algorithm = Some(algorithm);
        self
    }
}
