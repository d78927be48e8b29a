//! Values a style key can map to.

use std::fmt;

use crate::StyleObject;

/// A single CSS value as written by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A string value, emitted verbatim.
    Str(String),
    /// A numeric value. Non-zero numbers may receive a `px` unit on output.
    Num(f64),
    /// A boolean value, emitted as `true`/`false`.
    Bool(bool),
}

impl Scalar {
    /// Whether the value is a bare number.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Num(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            // Negative zero prints as `0`, integral values without a fraction.
            Self::Num(n) if *n == 0.0 => f.write_str("0"),
            Self::Num(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Num(f64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Num(f64::from(value))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// The value stored under a style key.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A property value.
    Scalar(Scalar),
    /// Fallback values for one property, emitted as repeated declarations.
    List(Vec<Scalar>),
    /// A nested selector, at-rule, or keyframe stop block.
    Object(StyleObject),
    /// An absent value. Ignored on output.
    Null,
}

impl StyleValue {
    /// Returns the nested block if this value is one.
    #[inline]
    pub fn as_object(&self) -> Option<&StyleObject> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns true for [`StyleValue::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Truthiness as used by reserved `$` flags.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_truthy(),
            Self::List(_) | Self::Object(_) => true,
            Self::Null => false,
        }
    }
}

macro_rules! scalar_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_value!(&str, String, f64, i32, u32, bool);

impl From<Scalar> for StyleValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<StyleObject> for StyleValue {
    fn from(value: StyleObject) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for StyleValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
