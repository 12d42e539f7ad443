//! Proofreading collaborator interface
//!
//! The revised text comes from an external proofreading service. The core
//! only depends on this seam, never on a concrete transport, and must work
//! with any revised string regardless of where it came from.

use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by a proofreading collaborator
#[derive(Debug, Error)]
pub enum ProofreadError {
    /// The service call failed (network, authorization, service-side error)
    #[error("proofreading service failed: {0}")]
    Service(String),

    /// The service answered but produced no revised text
    #[error("proofreading service returned an empty revision")]
    EmptyRevision,
}

/// Capability that turns a text into its revised version
///
/// Implementations may fail; callers must not assume the success path.
pub trait Proofreader: Send + Sync {
    /// Produce the revised version of `text`
    fn proofread(&self, text: &str) -> Result<String, ProofreadError>;
}

/// Proofreader backed by a fixed table of canned revisions
///
/// Used to exercise the diff pipeline with arbitrary literal revisions and
/// to script failure paths in tests. Inputs without a scripted revision
/// produce a service error; a scripted empty revision is reported as
/// `EmptyRevision`, matching how a blank service response is treated.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProofreader {
    revisions: HashMap<String, String>,
}

impl ScriptedProofreader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a revision for the given input
    pub fn with_revision(mut self, original: impl Into<String>, revised: impl Into<String>) -> Self {
        self.revisions.insert(original.into(), revised.into());
        self
    }
}

impl Proofreader for ScriptedProofreader {
    fn proofread(&self, text: &str) -> Result<String, ProofreadError> {
        match self.revisions.get(text) {
            Some(revised) if revised.is_empty() => Err(ProofreadError::EmptyRevision),
            Some(revised) => Ok(revised.clone()),
            None => Err(ProofreadError::Service(format!(
                "no scripted revision for input of {} bytes",
                text.len()
            ))),
        }
    }
}
