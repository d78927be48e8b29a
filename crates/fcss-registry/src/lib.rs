#![forbid(unsafe_code)]

//! Content-addressed style compiler for fcss.
//!
//! Turns a [`StyleObject`](fcss_style::StyleObject) into a [`CompiledRule`]:
//! a short identifier derived from the object's content, and the minified
//! CSS implementing it.
//!
//! ```
//! use fcss_registry::{Registry, StyleRegistry};
//! use fcss_style::StyleObject;
//!
//! let styles = StyleObject::new()
//!     .with("color", "white")
//!     .with("backgroundColor", "black");
//!
//! let rule = Registry.compile(&styles);
//! assert_eq!(rule.id, "f6e2hlp");
//! assert_eq!(rule.css, ".f6e2hlp{background-color:black;color:white}");
//! ```
//!
//! # Determinism
//!
//! Declarations are sorted by CSS property name, so property order never
//! affects the result. Nested selectors keep their written order because it
//! decides emission order; keyframe stops are sorted.

mod compiled;
mod emit;
pub mod hash;
pub mod property;
mod registry;
pub mod selector;
mod stylize;

pub use compiled::{CompiledRule, Identifier, Scope};
pub use registry::{Registry, StyleRegistry};
