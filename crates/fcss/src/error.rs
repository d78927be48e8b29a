//! Error types for the insertion pipelines.

use fcss_style::StyleError;
use thiserror::Error;

/// The style sheet could not accept a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// No document or page context is attached.
    #[error("no document context: attach a style sheet before inserting rules")]
    NoDocument,

    /// The host rejected the rule text.
    #[error("style sheet rejected rule: {0}")]
    Rejected(String),
}

/// Errors returned by `css`, `global`, and `keyframes`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    /// The arguments were not a valid style object or animation name.
    #[error(transparent)]
    Argument(#[from] StyleError),

    /// The compiled rule could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}
