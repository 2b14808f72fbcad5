//! In-memory memoization of design-rule evaluations.
//!
//! Keys are structural: two influents with identical field values share an
//! entry. The outer lock only guards the key space; each key has its own slot
//! lock, so concurrent callers for the same key wait for a single computation
//! while other keys proceed. Failed evaluations are not stored.
//!
//! Entries are never evicted. A cache assumes one `Constants` table for its
//! whole lifetime.

use ag_core::AgResult;
use ag_design::{DesignOutcome, Technology};
use ag_influent::{Influent, InfluentKey};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

pub type CacheKey = (Technology, InfluentKey);

type Slot = Arc<Mutex<Option<DesignOutcome>>>;

#[derive(Default)]
pub struct DesignCache {
    slots: Mutex<HashMap<CacheKey, Slot>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    // Stored values are plain data; a panic mid-insert cannot leave them half-written.
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DesignCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: CacheKey) -> Slot {
        Arc::clone(lock(&self.slots).entry(key).or_default())
    }

    /// Cached outcome for `key`, or the result of `compute` (stored on success).
    ///
    /// The slot lock is held while `compute` runs, so `compute` must not
    /// re-enter this cache for the same technology and influent.
    pub fn get_or_compute<F>(
        &self,
        technology: Technology,
        influent: &Influent,
        compute: F,
    ) -> AgResult<DesignOutcome>
    where
        F: FnOnce() -> AgResult<DesignOutcome>,
    {
        let slot = self.slot((technology, influent.key()));
        let mut entry = lock(&slot);

        if let Some(outcome) = entry.as_ref() {
            debug!(technology = %technology, "design cache hit");
            return Ok(outcome.clone());
        }

        debug!(technology = %technology, "design cache miss");
        let outcome = compute()?;
        *entry = Some(outcome.clone());
        Ok(outcome)
    }

    /// Cached outcome without computing.
    pub fn get(&self, technology: Technology, influent: &Influent) -> Option<DesignOutcome> {
        let slot = lock(&self.slots)
            .get(&(technology, influent.key()))
            .map(Arc::clone)?;
        let entry = lock(&slot);
        entry.clone()
    }

    /// Number of stored outcomes.
    pub fn len(&self) -> usize {
        let slots: Vec<Slot> = lock(&self.slots).values().map(Arc::clone).collect();
        slots.iter().filter(|slot| lock(slot).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        lock(&self.slots).clear();
    }
}
