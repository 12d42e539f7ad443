//! Main diff engine that orchestrates the diff process

use crate::algorithm::{DiffAlgorithm, LcsAlgorithm};
use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::proofread::{ProofreadError, Proofreader};
use crate::tokenizers::{Token, Tokenizer, WordTokenizer};

/// The main diff engine
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Create a diff engine with the default configuration
    pub fn default_config() -> Self {
        Self::new(DiffConfig::default())
    }

    /// Compute the diff between an original and a revised string
    ///
    /// Tokenizes both inputs, aligns the token sequences, and assembles a
    /// `DiffResult` with statistics. Pure and deterministic: identical
    /// inputs always produce identical output.
    pub fn diff(&self, original: &str, revised: &str) -> DiffResult {
        let (original_tokens, revised_tokens) = self.tokenize(original, revised);

        log::debug!(
            "aligning {} original tokens against {} revised tokens",
            original_tokens.len(),
            revised_tokens.len()
        );

        let algorithm = self
            .config
            .algorithm
            .as_ref()
            .map(|a| a.clone_box())
            .unwrap_or_else(|| Box::new(LcsAlgorithm::new()));

        let (annotated_original, annotated_revised) =
            algorithm.align(&original_tokens, &revised_tokens);

        DiffResult::new(annotated_original, annotated_revised)
    }

    /// Obtain a revision from the proofreading collaborator and diff against it
    ///
    /// Mirrors the interactive flow: submit the text, receive the revised
    /// version, compare the two. A collaborator failure is propagated
    /// untouched; no diff is attempted without a revision.
    pub fn proofread_and_diff(
        &self,
        proofreader: &dyn Proofreader,
        text: &str,
    ) -> Result<DiffResult, ProofreadError> {
        let revised = proofreader.proofread(text)?;
        Ok(self.diff(text, &revised))
    }

    /// Tokenize both input strings with the configured tokenizer
    fn tokenize(&self, original: &str, revised: &str) -> (Vec<Token>, Vec<Token>) {
        let tokenizer = self
            .config
            .tokenizer
            .as_ref()
            .map(|t| t.clone_box())
            .unwrap_or_else(|| Box::new(WordTokenizer::new()));

        (tokenizer.tokenize(original), tokenizer.tokenize(revised))
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::default_config()
    }
}
