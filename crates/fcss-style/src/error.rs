//! Argument errors raised before any compilation happens.

use thiserror::Error;

/// A style argument was not shaped like a style object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The top-level argument was not an object of key/value pairs.
    #[error("CSS must be an object of key/value pairs (got {found}).")]
    NotAnObject {
        /// JSON kind of the rejected argument.
        found: &'static str,
    },

    /// An explicit keyframes name was supplied but was not a string.
    #[error("Animation name must be a string (got {found}). Omit argument to auto-generate.")]
    InvalidAnimationName {
        /// JSON kind of the rejected name.
        found: &'static str,
    },

    /// A value nested under `key` cannot be expressed as CSS.
    #[error("unsupported value for `{key}`: {reason}")]
    InvalidValue {
        /// The style key holding the value.
        key: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
}
