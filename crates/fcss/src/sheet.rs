//! The sheet-write capability.
//!
//! A [`StyleSheet`] is anything that can append CSS text to a live,
//! order-preserving style sheet. The crate ships three:
//!
//! - [`MemorySheet`] keeps rules in memory (server rendering, tests)
//! - [`DetachedSheet`] models a missing document and always fails
//! - [`CallbackSheet`] forwards text to a host closure

use std::cell::RefCell;
use std::rc::Rc;

use crate::WriteError;

/// Destination for compiled CSS text.
pub trait StyleSheet {
    /// Append `css` to the sheet.
    fn insert(&mut self, css: &str) -> Result<(), WriteError>;
}

impl<S: StyleSheet + ?Sized> StyleSheet for Box<S> {
    fn insert(&mut self, css: &str) -> Result<(), WriteError> {
        (**self).insert(css)
    }
}

impl<S: StyleSheet + ?Sized> StyleSheet for &mut S {
    fn insert(&mut self, css: &str) -> Result<(), WriteError> {
        (**self).insert(css)
    }
}

impl<S: StyleSheet + ?Sized> StyleSheet for Rc<RefCell<S>> {
    fn insert(&mut self, css: &str) -> Result<(), WriteError> {
        self.borrow_mut().insert(css)
    }
}

/// Where new rules land in a [`MemorySheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    /// After every existing rule.
    #[default]
    Append,
    /// Before every existing rule.
    Prepend,
}

/// An in-memory style sheet.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    rules: Vec<String>,
    position: InsertPosition,
}

impl MemorySheet {
    /// Create an empty appending sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where new rules are inserted.
    #[must_use]
    pub fn with_position(mut self, position: InsertPosition) -> Self {
        self.position = position;
        self
    }

    /// Rules in sheet order.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// The full sheet text.
    pub fn text(&self) -> String {
        self.rules.concat()
    }

    /// Number of inserted chunks.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if nothing was inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl StyleSheet for MemorySheet {
    fn insert(&mut self, css: &str) -> Result<(), WriteError> {
        match self.position {
            InsertPosition::Append => self.rules.push(css.to_owned()),
            InsertPosition::Prepend => self.rules.insert(0, css.to_owned()),
        }
        Ok(())
    }
}

/// A sheet with no document behind it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSheet;

impl StyleSheet for DetachedSheet {
    fn insert(&mut self, _css: &str) -> Result<(), WriteError> {
        Err(WriteError::NoDocument)
    }
}

/// Adapts a closure into a [`StyleSheet`].
pub struct CallbackSheet<F>(F);

impl<F> CallbackSheet<F>
where
    F: FnMut(&str) -> Result<(), WriteError>,
{
    /// Wrap `write`.
    pub fn new(write: F) -> Self {
        Self(write)
    }
}

impl<F> StyleSheet for CallbackSheet<F>
where
    F: FnMut(&str) -> Result<(), WriteError>,
{
    fn insert(&mut self, css: &str) -> Result<(), WriteError> {
        (self.0)(css)
    }
}

impl<F> std::fmt::Debug for CallbackSheet<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSheet").finish_non_exhaustive()
    }
}
