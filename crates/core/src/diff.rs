//! Diff result types and structures

use crate::span::CharSpan;
use crate::tokenizers::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a token relative to the other sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Token present in both sequences at this aligned position
    Unchanged,
    /// Token present only in the original sequence
    Removed,
    /// Token present only in the revised sequence
    Added,
}

/// A token paired with its change classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// The token text
    pub text: String,

    /// Change classification
    pub kind: ChangeKind,

    /// Byte span in the side this token came from
    pub span: CharSpan,
}

impl AnnotatedToken {
    /// Annotate a token as unchanged
    pub fn unchanged(token: &Token) -> Self {
        Self::annotate(token, ChangeKind::Unchanged)
    }

    /// Annotate a token as removed (original side only)
    pub fn removed(token: &Token) -> Self {
        Self::annotate(token, ChangeKind::Removed)
    }

    /// Annotate a token as added (revised side only)
    pub fn added(token: &Token) -> Self {
        Self::annotate(token, ChangeKind::Added)
    }

    fn annotate(token: &Token, kind: ChangeKind) -> Self {
        Self {
            text: token.text.clone(),
            kind,
            span: token.span,
        }
    }

    /// Whether this token survived unchanged
    pub fn is_unchanged(&self) -> bool {
        self.kind == ChangeKind::Unchanged
    }
}

/// Statistics about the diff
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffStatistics {
    /// Number of tokens in the original sequence
    pub original_tokens: usize,

    /// Number of tokens in the revised sequence
    pub revised_tokens: usize,

    /// Number of unchanged tokens (same count on both sides)
    pub unchanged: usize,

    /// Number of removed tokens
    pub removed: usize,

    /// Number of added tokens
    pub added: usize,

    /// Fraction of tokens changed, relative to the longer side (0.0 to 1.0)
    pub change_ratio: f64,
}

impl DiffStatistics {
    /// Calculate the change ratio from the counted tokens
    pub fn calculate_change_ratio(&mut self) {
        let max_tokens = self.original_tokens.max(self.revised_tokens);

        self.change_ratio = if max_tokens > 0 {
            (self.removed + self.added) as f64 / max_tokens as f64
        } else {
            0.0
        };
    }
}

/// Complete diff result: two parallel annotated token sequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    /// The original sequence, tokens classified unchanged or removed
    pub original: Vec<AnnotatedToken>,

    /// The revised sequence, tokens classified unchanged or added
    pub revised: Vec<AnnotatedToken>,

    /// Statistics about the diff
    pub statistics: DiffStatistics,
}

impl DiffResult {
    /// Build a result from the two annotated sequences
    pub fn new(original: Vec<AnnotatedToken>, revised: Vec<AnnotatedToken>) -> Self {
        let mut result = Self {
            original,
            revised,
            statistics: DiffStatistics::default(),
        };
        result.finalize();
        result
    }

    /// Recount statistics from the annotated sequences
    pub fn finalize(&mut self) {
        let stats = &mut self.statistics;
        stats.original_tokens = self.original.len();
        stats.revised_tokens = self.revised.len();
        stats.unchanged = self
            .original
            .iter()
            .filter(|t| t.kind == ChangeKind::Unchanged)
            .count();
        stats.removed = self
            .original
            .iter()
            .filter(|t| t.kind == ChangeKind::Removed)
            .count();
        stats.added = self
            .revised
            .iter()
            .filter(|t| t.kind == ChangeKind::Added)
            .count();
        stats.calculate_change_ratio();
    }

    /// Reconstruct the original text by concatenating tokens
    pub fn original_text(&self) -> String {
        self.original.iter().map(|t| t.text.as_str()).collect()
    }

    /// Reconstruct the revised text by concatenating tokens
    pub fn revised_text(&self) -> String {
        self.revised.iter().map(|t| t.text.as_str()).collect()
    }

    /// Check if the diff is empty (no changes)
    pub fn is_empty(&self) -> bool {
        self.statistics.removed == 0 && self.statistics.added == 0
    }

    /// Texts of the removed tokens, in order
    pub fn removed_tokens(&self) -> Vec<&str> {
        self.original
            .iter()
            .filter(|t| t.kind == ChangeKind::Removed)
            .map(|t| t.text.as_str())
            .collect()
    }

    /// Texts of the added tokens, in order
    pub fn added_tokens(&self) -> Vec<&str> {
        self.revised
            .iter()
            .filter(|t| t.kind == ChangeKind::Added)
            .map(|t| t.text.as_str())
            .collect()
    }

    /// Get a summary of the diff
    pub fn summary(&self) -> String {
        format!(
            "Diff Summary: {} unchanged, {} removed, {} added. Change: {:.1}%",
            self.statistics.unchanged,
            self.statistics.removed,
            self.statistics.added,
            self.statistics.change_ratio * 100.0
        )
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Diff Result ===")?;
        writeln!(f, "{}", self.summary())?;
        writeln!(f, "\nOriginal:")?;
        for token in &self.original {
            match token.kind {
                ChangeKind::Removed => write!(f, "[-{}-]", token.text)?,
                _ => write!(f, "{}", token.text)?,
            }
        }
        writeln!(f, "\n\nRevised:")?;
        for token in &self.revised {
            match token.kind {
                ChangeKind::Added => write!(f, "[+{}+]", token.text)?,
                _ => write!(f, "{}", token.text)?,
            }
        }
        writeln!(f)
    }
}
