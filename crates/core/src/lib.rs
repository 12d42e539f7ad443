//! # Proofdiff Library
//!
//! A word-level diff library for comparing an original text against its
//! proofread revision. Both inputs are tokenized losslessly (words,
//! punctuation, and whitespace runs all become tokens), the token sequences
//! are aligned with a longest-common-subsequence strategy, and the result is
//! a pair of parallel annotated sequences marking each token unchanged,
//! removed, or added.
//!
//! ## Core Concepts
//!
//! - **Tokenizers**: Split text into comparable tokens without losing a byte
//! - **Aligner**: LCS dynamic programming with a fixed tie-break policy
//! - **DiffEngine**: Compute diffs using configurable seams
//! - **Proofreader**: Opaque collaborator that produces the revised text
//!
//! ## Example
//!
//! ```rust
//! use proofdiff_core::compute_diff;
//!
//! let result = compute_diff("The cat sat.", "The cat sits.", None);
//! assert_eq!(result.removed_tokens(), vec!["sat"]);
//! assert_eq!(result.added_tokens(), vec!["sits"]);
//! ```

pub mod algorithm;
pub mod config;
pub mod diff;
pub mod engine;
pub mod proofread;
pub mod span;
pub mod tokenizers;

// Re-export main types
pub use config::DiffConfig;
pub use diff::{AnnotatedToken, ChangeKind, DiffResult, DiffStatistics};
pub use engine::DiffEngine;
pub use proofread::{ProofreadError, Proofreader, ScriptedProofreader};
pub use span::CharSpan;

/// Main entry point for computing diffs between two strings
///
/// # Arguments
///
/// * `original` - The original text
/// * `revised` - The revised text
/// * `config` - Optional configuration (uses default if None)
///
/// # Returns
///
/// A complete `DiffResult` with both annotated sequences and statistics
///
/// # Example
///
/// ```rust
/// use proofdiff_core::compute_diff;
///
/// let result = compute_diff("Hello world", "Hello there", None);
/// println!("{}", result.summary());
/// ```
pub fn compute_diff(original: &str, revised: &str, config: Option<DiffConfig>) -> DiffResult {
    let config = config.unwrap_or_default();
    let engine = DiffEngine::new(config);
    engine.diff(original, revised)
}

/// Align two strings and return the bare annotated sequences
///
/// Convenience wrapper over [`compute_diff`] for callers that only want the
/// two parallel sequences: the original side (unchanged/removed) and the
/// revised side (unchanged/added).
pub fn align(original: &str, revised: &str) -> (Vec<AnnotatedToken>, Vec<AnnotatedToken>) {
    let result = compute_diff(original, revised, None);
    (result.original, result.revised)
}
