//! Compiled rule types.

use std::borrow::Cow;
use std::fmt;

/// A short deterministic token usable as a class or animation name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the identifier text.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

/// Whether output is namespaced under a generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Selectors are nested under `.{identifier}`.
    #[default]
    Scoped,
    /// Selectors are emitted as written.
    Global,
}

impl Scope {
    /// Scope requested by a style object's `$global` flag.
    pub fn of(styles: &fcss_style::StyleObject) -> Self {
        if styles.is_global() {
            Self::Global
        } else {
            Self::Scoped
        }
    }

    /// Returns true for [`Scope::Global`].
    #[inline]
    pub fn is_global(self) -> bool {
        self == Self::Global
    }
}

/// The `(identifier, css)` pair produced for a style object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    /// Name handed back to the caller. For named keyframes this is the
    /// caller's name; otherwise it equals `hash`.
    pub id: Identifier,
    /// Content hash of the style object.
    pub hash: Identifier,
    /// Serialized CSS text.
    pub css: String,
    /// Scope the object was compiled in.
    pub scope: Scope,
}

impl CompiledRule {
    /// Split into the `(identifier, css)` pair.
    pub fn into_parts(self) -> (Identifier, String) {
        (self.id, self.css)
    }

    /// Replace the returned identifier, keeping the content hash.
    #[must_use]
    pub fn renamed(mut self, id: Identifier) -> Self {
        self.id = id;
        self
    }

    /// Key under which insertion of this rule is tracked.
    ///
    /// Scoped rules are keyed by their hash alone. Global rules are keyed in
    /// a separate namespace, since a scoped and a global object can share a
    /// fingerprint while producing different text.
    pub fn dedup_key(&self) -> Cow<'_, str> {
        match self.scope {
            Scope::Scoped => Cow::Borrowed(self.hash.as_str()),
            Scope::Global => Cow::Owned(format!("$global:{}", self.hash)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(scope: Scope) -> CompiledRule {
        CompiledRule {
            id: Identifier::new("f1"),
            hash: Identifier::new("f1"),
            css: String::new(),
            scope,
        }
    }

    #[test]
    fn dedup_keys_separate_scopes() {
        assert_eq!(rule(Scope::Scoped).dedup_key(), "f1");
        assert_eq!(rule(Scope::Global).dedup_key(), "$global:f1");
    }

    #[test]
    fn renaming_keeps_hash() {
        let renamed = rule(Scope::Global).renamed(Identifier::new("spin"));
        assert_eq!(renamed.id, "spin");
        assert_eq!(renamed.hash, "f1");
    }

    #[test]
    fn identifier_compares_with_str() {
        let id = Identifier::new("f6e2hlp");
        assert_eq!(id, "f6e2hlp");
        assert_eq!(id.to_string(), "f6e2hlp");
        assert_eq!(String::from(id), "f6e2hlp");
    }
}
