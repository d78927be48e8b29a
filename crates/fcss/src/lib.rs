#![forbid(unsafe_code)]

//! Memoized, insert-once CSS from style objects.
//!
//! # Role in fcss
//! `fcss` is the public face of the workspace. It compiles
//! [`StyleObject`]s through [`fcss_registry`], remembers the result per
//! object, and writes each distinct rule to a [`StyleSheet`] exactly once.
//!
//! # Primary responsibilities
//! - **memo**: identity-keyed caching in front of the compiler.
//! - **gate**: at-most-once insertion keyed by content hash.
//! - **sheet**: the write capability and its in-memory, detached, and
//!   callback implementations.
//! - **runtime**: the `css`/`global`/`keyframes` pipeline over one sheet.
//! - **page**: a thread-local runtime behind the free functions.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use fcss::{MemorySheet, StyleObject, StyleRuntime};
//!
//! let mut runtime = StyleRuntime::new(MemorySheet::new());
//! let button = Arc::new(
//!     StyleObject::new()
//!         .with("color", "white")
//!         .with("backgroundColor", "black"),
//! );
//!
//! let class = runtime.css(&button)?;
//! assert_eq!(class, "f6e2hlp");
//! assert_eq!(runtime.sheet().text(), ".f6e2hlp{background-color:black;color:white}");
//! # Ok::<(), fcss::WriteError>(())
//! ```

pub mod error;
pub mod gate;
pub mod memo;
pub mod page;
pub mod runtime;
pub mod sheet;

pub use error::{CssError, WriteError};
pub use gate::{GateStats, InsertionGate};
pub use memo::{Memo, MemoCache, MemoStats, memo};
pub use page::{attach_sheet, css, detach_sheet, global, keyframes, with_page};
pub use runtime::{RuntimeConfig, StyleRuntime};
pub use sheet::{CallbackSheet, DetachedSheet, InsertPosition, MemorySheet, StyleSheet};

pub use fcss_registry::{CompiledRule, Identifier, Registry, Scope, StyleRegistry};
pub use fcss_style::{GLOBAL_FLAG, KeyframesName, Scalar, StyleError, StyleObject, StyleValue};

use serde_json::Value;

/// Compile scoped styles without inserting them.
pub fn make_css(styles: &StyleObject) -> CompiledRule {
    Registry.compile(styles)
}

/// Compile unscoped styles without inserting them.
pub fn make_global(styles: &StyleObject) -> CompiledRule {
    Registry.compile_in(styles, Scope::Global)
}

/// Compile keyframes without inserting them.
///
/// ```
/// let frames = fcss::StyleObject::new()
///     .with("from", fcss::StyleObject::new().with("color", "red"))
///     .with("to", fcss::StyleObject::new().with("color", "blue"));
///
/// let rule = fcss::make_keyframes("custom-name-here", &frames);
/// assert_eq!(rule.id, "custom-name-here");
/// assert_eq!(rule.css, "@keyframes custom-name-here{from{color:red}to{color:blue}}");
/// ```
pub fn make_keyframes(name: impl Into<KeyframesName>, frames: &StyleObject) -> CompiledRule {
    Registry.compile_keyframes(&name.into(), frames)
}

/// [`make_css`] for an untyped argument.
pub fn make_css_value(styles: &Value) -> Result<CompiledRule, StyleError> {
    Ok(make_css(&StyleObject::try_from(styles)?))
}

/// [`make_global`] for an untyped argument.
pub fn make_global_value(styles: &Value) -> Result<CompiledRule, StyleError> {
    Ok(make_global(&StyleObject::try_from(styles)?))
}

/// [`make_keyframes`] for untyped arguments.
pub fn make_keyframes_value(
    name: Option<&Value>,
    frames: &Value,
) -> Result<CompiledRule, StyleError> {
    let name = KeyframesName::from_value(name)?;
    Ok(make_keyframes(name, &StyleObject::try_from(frames)?))
}
