//! Insert-once gate in front of a style sheet.
//!
//! The gate owns the sheet together with the set of rules already written
//! to it. A rule is written at most once for the lifetime of the gate;
//! repeats are answered with the identifier alone. Failed writes are not
//! recorded, so the same rule is written again on the next call.

use fcss_registry::{CompiledRule, Identifier};
use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::WriteError;
use crate::sheet::StyleSheet;

/// Counters for [`InsertionGate`] activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateStats {
    /// Rules recorded as inserted, including empty ones.
    pub inserted: u64,
    /// Rules whose text was handed to the sheet.
    pub written: u64,
    /// Calls answered without touching the sheet.
    pub suppressed: u64,
    /// Writes rejected by the sheet.
    pub failed: u64,
}

/// Owns a [`StyleSheet`] and writes each compiled rule to it at most once.
#[derive(Debug)]
pub struct InsertionGate<S> {
    sheet: S,
    inserted: FxHashSet<String>,
    stats: GateStats,
}

impl<S: StyleSheet> InsertionGate<S> {
    /// Create a gate over `sheet` with nothing inserted.
    pub fn new(sheet: S) -> Self {
        Self {
            sheet,
            inserted: FxHashSet::default(),
            stats: GateStats::default(),
        }
    }

    /// Ensure `rule` is present in the sheet and return its identifier.
    pub fn insert(&mut self, rule: &CompiledRule) -> Result<Identifier, WriteError> {
        let key = rule.dedup_key();
        if self.inserted.contains(key.as_ref()) {
            self.stats.suppressed += 1;
            trace!(id = %rule.id, "rule already inserted");
            return Ok(rule.id.clone());
        }

        if !rule.css.is_empty() {
            if let Err(err) = self.sheet.insert(&rule.css) {
                self.stats.failed += 1;
                warn!(id = %rule.id, error = %err, "style sheet write failed");
                return Err(err);
            }
            self.stats.written += 1;
            debug!(id = %rule.id, bytes = rule.css.len(), "inserted rule");
        }

        self.inserted.insert(key.into_owned());
        self.stats.inserted += 1;
        Ok(rule.id.clone())
    }

    /// Returns true if `rule` has already been recorded.
    pub fn contains(&self, rule: &CompiledRule) -> bool {
        self.inserted.contains(rule.dedup_key().as_ref())
    }

    /// Number of recorded rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.inserted.len()
    }

    /// Returns true if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }

    /// Activity counters.
    #[inline]
    pub fn stats(&self) -> GateStats {
        self.stats
    }

    /// Borrow the sheet.
    pub fn sheet(&self) -> &S {
        &self.sheet
    }

    /// Mutably borrow the sheet.
    ///
    /// Rules removed from the sheet through this handle stay recorded.
    pub fn sheet_mut(&mut self) -> &mut S {
        &mut self.sheet
    }

    /// Take the sheet back, discarding the inserted set.
    pub fn into_sheet(self) -> S {
        self.sheet
    }
}
