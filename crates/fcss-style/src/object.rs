//! Insertion-ordered style objects.
//!
//! A [`StyleObject`] mirrors a nested JavaScript style literal:
//!
//! ```
//! use fcss_style::StyleObject;
//!
//! let button = StyleObject::new()
//!     .with("color", "white")
//!     .with("backgroundColor", "black")
//!     .with("&:hover", StyleObject::new().with("color", "yellow"));
//!
//! assert_eq!(button.len(), 3);
//! assert!(!button.is_global());
//! ```
//!
//! Key order is preserved because nested selectors are emitted in the order
//! they were written. Property order never matters.

use crate::StyleValue;

/// Reserved key that switches a style object to global (unscoped) output.
pub const GLOBAL_FLAG: &str = "$global";

/// A nested mapping from style keys to [`StyleValue`]s.
///
/// Keys are one of:
/// - a property name (`backgroundColor`, `font-size`)
/// - a selector fragment (`& h2`, `&:hover`, `.foo`)
/// - an at-rule (`@media (min-width: 300px)`, `@keyframes &`)
/// - a reserved `$` key such as [`GLOBAL_FLAG`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    entries: Vec<(String, StyleValue)>,
}

impl StyleObject {
    /// Create an empty style object.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key` to `value`.
    ///
    /// An existing key keeps its position and its previous value is returned.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Option<StyleValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries, reserved keys included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the object has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether [`GLOBAL_FLAG`] is present and truthy.
    pub fn is_global(&self) -> bool {
        self.get(GLOBAL_FLAG).is_some_and(StyleValue::is_truthy)
    }
}

impl<K, V> FromIterator<(K, V)> for StyleObject
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = Self::new();
        for (k, v) in iter {
            obj.set(k, v);
        }
        obj
    }
}
