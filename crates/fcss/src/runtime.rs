//! The compile, memoize, and insert pipeline.
//!
//! A [`StyleRuntime`] ties a [`StyleRegistry`] to an [`InsertionGate`]:
//!
//! ```text
//! StyleObject ─► MemoCache ─► StyleRegistry ─► InsertionGate ─► StyleSheet
//!   (Arc)        (identity)    (content hash)    (insert once)
//! ```
//!
//! Only [`css`](StyleRuntime::css) goes through the memo cache. Globals and
//! keyframes are compiled on every call and deduplicated by the gate, and
//! dynamic JSON arguments have no identity to key on.

use std::sync::Arc;

use fcss_registry::{CompiledRule, Identifier, Registry, Scope, StyleRegistry};
use fcss_style::{KeyframesName, StyleObject};
use serde_json::Value;
use tracing::trace;

use crate::error::{CssError, WriteError};
use crate::gate::{GateStats, InsertionGate};
use crate::memo::{DEFAULT_SWEEP_FLOOR, MemoCache, MemoStats};
use crate::sheet::StyleSheet;

/// Tuning for a [`StyleRuntime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Entry count at which the `css` memo cache first sweeps dropped keys.
    pub memo_sweep_floor: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            memo_sweep_floor: DEFAULT_SWEEP_FLOOR,
        }
    }
}

impl RuntimeConfig {
    /// Set the memo sweep floor.
    #[must_use]
    pub fn with_memo_sweep_floor(mut self, floor: usize) -> Self {
        self.memo_sweep_floor = floor;
        self
    }
}

/// Registry, memo cache, and insertion gate over one style sheet.
#[derive(Debug)]
pub struct StyleRuntime<S, R = Registry> {
    registry: R,
    memo: MemoCache<StyleObject, CompiledRule>,
    gate: InsertionGate<S>,
}

impl<S: StyleSheet> StyleRuntime<S> {
    /// Create a runtime over `sheet` with the default registry.
    pub fn new(sheet: S) -> Self {
        Self::with_config(sheet, RuntimeConfig::default())
    }

    /// Create a runtime over `sheet` with the default registry and `config`.
    pub fn with_config(sheet: S, config: RuntimeConfig) -> Self {
        Self::with_registry(sheet, Registry, config)
    }
}

impl<S: StyleSheet, R: StyleRegistry> StyleRuntime<S, R> {
    /// Create a runtime compiling through `registry`.
    pub fn with_registry(sheet: S, registry: R, config: RuntimeConfig) -> Self {
        Self {
            registry,
            memo: MemoCache::with_sweep_floor(config.memo_sweep_floor),
            gate: InsertionGate::new(sheet),
        }
    }

    /// Insert scoped styles and return their class name.
    ///
    /// Repeated calls with the same `Arc` skip compilation. A `$global` flag
    /// on the object compiles it unscoped.
    pub fn css(&mut self, styles: &Arc<StyleObject>) -> Result<Identifier, WriteError> {
        let registry = &self.registry;
        let rule = self.memo.get_or_compute(styles, |s| registry.compile(s));
        self.gate.insert(&rule)
    }

    /// Insert unscoped styles.
    ///
    /// Global rules have no class to hand back; use
    /// [`make_global`](Self::make_global) for the fingerprint.
    pub fn global(&mut self, styles: &StyleObject) -> Result<(), WriteError> {
        let rule = self.registry.compile_in(styles, Scope::Global);
        self.gate.insert(&rule).map(drop)
    }

    /// Insert an `@keyframes` block and return the animation name.
    pub fn keyframes(
        &mut self,
        name: KeyframesName,
        frames: &StyleObject,
    ) -> Result<Identifier, WriteError> {
        let rule = self.registry.compile_keyframes(&name, frames);
        self.gate.insert(&rule)
    }

    /// Insert keyframes under a generated name.
    pub fn keyframes_auto(&mut self, frames: &StyleObject) -> Result<Identifier, WriteError> {
        self.keyframes(KeyframesName::Auto, frames)
    }

    /// Insert keyframes under `name`.
    pub fn keyframes_named(
        &mut self,
        name: impl Into<String>,
        frames: &StyleObject,
    ) -> Result<Identifier, WriteError> {
        self.keyframes(KeyframesName::Named(name.into()), frames)
    }

    /// [`css`](Self::css) for an untyped argument.
    ///
    /// The argument is validated before anything is compiled or written.
    pub fn css_value(&mut self, styles: &Value) -> Result<Identifier, CssError> {
        let styles = StyleObject::try_from(styles)?;
        trace!("css from dynamic value");
        Ok(self.gate.insert(&self.registry.compile(&styles))?)
    }

    /// [`global`](Self::global) for an untyped argument.
    pub fn global_value(&mut self, styles: &Value) -> Result<(), CssError> {
        let styles = StyleObject::try_from(styles)?;
        Ok(self.global(&styles)?)
    }

    /// [`keyframes`](Self::keyframes) for untyped arguments.
    ///
    /// `name` may be absent or a string.
    pub fn keyframes_value(
        &mut self,
        name: Option<&Value>,
        frames: &Value,
    ) -> Result<Identifier, CssError> {
        let name = KeyframesName::from_value(name)?;
        let frames = StyleObject::try_from(frames)?;
        Ok(self.keyframes(name, &frames)?)
    }

    /// Compile scoped styles without inserting them.
    pub fn make_css(&self, styles: &StyleObject) -> CompiledRule {
        self.registry.compile(styles)
    }

    /// Compile unscoped styles without inserting them.
    pub fn make_global(&self, styles: &StyleObject) -> CompiledRule {
        self.registry.compile_in(styles, Scope::Global)
    }

    /// Compile keyframes without inserting them.
    pub fn make_keyframes(&self, name: &KeyframesName, frames: &StyleObject) -> CompiledRule {
        self.registry.compile_keyframes(name, frames)
    }

    /// Statistics of the `css` memo cache.
    pub fn memo_stats(&self) -> MemoStats {
        self.memo.stats()
    }

    /// Insertion counters.
    pub fn gate_stats(&self) -> GateStats {
        self.gate.stats()
    }

    /// Drop memo entries for style objects that no longer exist.
    pub fn purge(&mut self) -> usize {
        self.memo.purge()
    }

    /// Borrow the sheet.
    pub fn sheet(&self) -> &S {
        self.gate.sheet()
    }

    /// Mutably borrow the sheet.
    pub fn sheet_mut(&mut self) -> &mut S {
        self.gate.sheet_mut()
    }

    /// Take the sheet back.
    pub fn into_sheet(self) -> S {
        self.gate.into_sheet()
    }
}
