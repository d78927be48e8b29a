//! The page-level runtime behind the free functions.
//!
//! Each thread has one page runtime. It starts out detached: compilation
//! works but every write fails with [`WriteError::NoDocument`] until a
//! sheet is attached with [`attach_sheet`].
//!
//! Sheets must not call back into this module from
//! [`StyleSheet::insert`]; the page runtime is already borrowed there.

use std::cell::RefCell;
use std::sync::Arc;

use fcss_registry::Identifier;
use fcss_style::{KeyframesName, StyleObject};
use serde_json::Value;

use crate::error::{CssError, WriteError};
use crate::runtime::StyleRuntime;
use crate::sheet::{DetachedSheet, StyleSheet};

/// Runtime type backing the page.
pub type PageRuntime = StyleRuntime<Box<dyn StyleSheet>>;

thread_local! {
    static PAGE: RefCell<PageRuntime> = RefCell::new(detached());
}

fn detached() -> PageRuntime {
    StyleRuntime::new(Box::new(DetachedSheet))
}

/// Attach `sheet` as this thread's page, returning the previous sheet.
///
/// The new page starts with an empty inserted set.
pub fn attach_sheet<S: StyleSheet + 'static>(sheet: S) -> Box<dyn StyleSheet> {
    PAGE.with_borrow_mut(|page| {
        std::mem::replace(page, StyleRuntime::new(Box::new(sheet))).into_sheet()
    })
}

/// Return this thread's page to the detached state.
pub fn detach_sheet() -> Box<dyn StyleSheet> {
    PAGE.with_borrow_mut(|page| std::mem::replace(page, detached()).into_sheet())
}

/// Run `f` with this thread's page runtime.
pub fn with_page<T>(f: impl FnOnce(&mut PageRuntime) -> T) -> T {
    PAGE.with_borrow_mut(f)
}

/// Insert scoped styles into the page and return their class name.
pub fn css(styles: &Arc<StyleObject>) -> Result<Identifier, WriteError> {
    with_page(|page| page.css(styles))
}

/// Insert unscoped styles into the page.
pub fn global(styles: &StyleObject) -> Result<(), WriteError> {
    with_page(|page| page.global(styles))
}

/// Insert keyframes into the page and return the animation name.
pub fn keyframes(
    name: impl Into<KeyframesName>,
    frames: &StyleObject,
) -> Result<Identifier, WriteError> {
    let name = name.into();
    with_page(|page| page.keyframes(name, frames))
}

/// [`css`] for an untyped argument.
pub fn css_value(styles: &Value) -> Result<Identifier, CssError> {
    with_page(|page| page.css_value(styles))
}

/// [`global`] for an untyped argument.
pub fn global_value(styles: &Value) -> Result<(), CssError> {
    with_page(|page| page.global_value(styles))
}

/// [`keyframes`] for untyped arguments.
pub fn keyframes_value(name: Option<&Value>, frames: &Value) -> Result<Identifier, CssError> {
    with_page(|page| page.keyframes_value(name, frames))
}
