#![forbid(unsafe_code)]

//! Style object model for fcss.
//!
//! This crate provides:
//! - [`StyleObject`], an insertion-ordered tree of style keys and values
//! - [`StyleValue`] and [`Scalar`] for the values a style key can hold
//! - [`KeyframesName`] for the auto/named keyframe call shapes
//! - Validation of dynamic (JSON) style arguments via [`StyleError`]

pub mod error;
mod json;
pub mod name;
pub mod object;
pub mod value;

pub use error::StyleError;
pub use name::KeyframesName;
pub use object::{GLOBAL_FLAG, StyleObject};
pub use value::{Scalar, StyleValue};
