//! Identity-keyed memoization.
//!
//! [`MemoCache`] remembers the output computed for a particular `Arc<T>`
//! allocation. The key is the allocation, not its contents: a structurally
//! equal value in a different `Arc` is a miss. Content-level deduplication
//! happens downstream, in the registry hash and the insertion gate.
//!
//! # Lifetime
//!
//! Each entry holds a [`Weak`] to its key, so the cache never keeps a style
//! object alive. Entries whose key has been dropped are reclaimed by
//! [`MemoCache::purge`], which also runs automatically on misses once the
//! map has grown past its sweep threshold. There is no invalidation API.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use fcss::memo;
//!
//! let mut calls = 0;
//! let mut len = memo(|s: &str| {
//!     calls += 1;
//!     s.len()
//! });
//!
//! let key: Arc<str> = Arc::from("hello");
//! assert_eq!(len.call(&key), 5);
//! assert_eq!(len.call(&key), 5);
//! drop(len);
//! assert_eq!(calls, 1);
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Default size at which a miss first triggers a sweep of dead entries.
pub const DEFAULT_SWEEP_FLOOR: usize = 64;

struct MemoEntry<T: ?Sized, O> {
    key: Weak<T>,
    value: O,
}

/// How often a [`MemoCache`] avoided recompiling.
#[derive(Debug, Clone, Default)]
pub struct MemoStats {
    /// Remembered keys, including dropped ones awaiting a sweep.
    pub entries: usize,
    /// Lookups answered from a remembered output.
    pub hits: u64,
    /// Lookups that ran the wrapped computation.
    pub misses: u64,
    /// `hits / (hits + misses)`, or 0 before the first lookup.
    pub hit_rate: f64,
}

/// Cache from `Arc<T>` identity to a computed output.
pub struct MemoCache<T: ?Sized, O> {
    entries: FxHashMap<usize, MemoEntry<T, O>>,
    hits: u64,
    misses: u64,
    sweep_floor: usize,
    sweep_at: usize,
}

impl<T: ?Sized, O: Clone> MemoCache<T, O> {
    /// Create an empty cache with the default sweep floor.
    pub fn new() -> Self {
        Self::with_sweep_floor(DEFAULT_SWEEP_FLOOR)
    }

    /// Create an empty cache that first sweeps dead entries at `floor` entries.
    pub fn with_sweep_floor(floor: usize) -> Self {
        let floor = floor.max(1);
        Self {
            entries: FxHashMap::default(),
            hits: 0,
            misses: 0,
            sweep_floor: floor,
            sweep_at: floor,
        }
    }

    #[inline]
    fn address(key: &Arc<T>) -> usize {
        Arc::as_ptr(key).cast::<()>() as usize
    }

    fn lookup(&mut self, key: &Arc<T>) -> Option<O> {
        let entry = self.entries.get(&Self::address(key))?;
        // The entry's weak reference pins the allocation, so a live `Arc` at
        // this address is the same key.
        self.hits += 1;
        trace!(hits = self.hits, "memo hit");
        Some(entry.value.clone())
    }

    fn store(&mut self, key: &Arc<T>, value: O) {
        if self.entries.len() >= self.sweep_at {
            self.purge();
            self.sweep_at = (self.entries.len() * 2).max(self.sweep_floor);
        }
        self.entries.insert(
            Self::address(key),
            MemoEntry {
                key: Arc::downgrade(key),
                value,
            },
        );
    }

    /// Get the cached output for `key` or compute and cache a new one.
    ///
    /// `compute` runs at most once per live key.
    pub fn get_or_compute<F>(&mut self, key: &Arc<T>, compute: F) -> O
    where
        F: FnOnce(&T) -> O,
    {
        if let Some(value) = self.lookup(key) {
            return value;
        }

        self.misses += 1;
        let value = compute(key);
        self.store(key, value.clone());
        value
    }

    /// Fallible [`get_or_compute`](Self::get_or_compute).
    ///
    /// Errors are returned without being cached, so a later call retries.
    pub fn try_get_or_compute<F, E>(&mut self, key: &Arc<T>, compute: F) -> Result<O, E>
    where
        F: FnOnce(&T) -> Result<O, E>,
    {
        if let Some(value) = self.lookup(key) {
            return Ok(value);
        }

        self.misses += 1;
        let value = compute(key)?;
        self.store(key, value.clone());
        Ok(value)
    }

    /// Drop entries whose key is no longer referenced anywhere else.
    ///
    /// Returns the number of entries removed.
    pub fn purge(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.key.strong_count() > 0);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "memo swept dead entries");
        }
        removed
    }

    /// Snapshot of hit and miss counts.
    pub fn stats(&self) -> MemoStats {
        let lookups = self.hits + self.misses;
        let hit_rate = match lookups {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        };
        MemoStats {
            entries: self.len(),
            hits: self.hits,
            misses: self.misses,
            hit_rate,
        }
    }

    /// Zero the hit and miss counts. Remembered outputs are kept.
    #[inline]
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of remembered keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no key is remembered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized, O: Clone> Default for MemoCache<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, O> fmt::Debug for MemoCache<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("entries", &self.entries.len())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .field("sweep_at", &self.sweep_at)
            .finish()
    }
}

/// A function wrapped with a [`MemoCache`].
///
/// Created by [`memo`].
pub struct Memo<T: ?Sized, O, F> {
    f: F,
    cache: MemoCache<T, O>,
}

impl<T: ?Sized, O: Clone, F: FnMut(&T) -> O> Memo<T, O, F> {
    /// Call the wrapped function, reusing the output for a repeated key.
    pub fn call(&mut self, x: &Arc<T>) -> O {
        let f = &mut self.f;
        self.cache.get_or_compute(x, |value| f(value))
    }

    /// Statistics of the underlying cache.
    pub fn stats(&self) -> MemoStats {
        self.cache.stats()
    }

    /// Reclaim entries for dropped keys.
    pub fn purge(&mut self) -> usize {
        self.cache.purge()
    }
}

impl<T: ?Sized, O, F> fmt::Debug for Memo<T, O, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo").field("cache", &self.cache).finish_non_exhaustive()
    }
}

/// Wrap `f` so repeated calls with the same `Arc` run it at most once.
pub fn memo<T: ?Sized, O: Clone, F: FnMut(&T) -> O>(f: F) -> Memo<T, O, F> {
    Memo {
        f,
        cache: MemoCache::new(),
    }
}
