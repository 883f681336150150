//! Working array shared between the UI and the active run.
//!
//! The store is a cheap-to-clone handle. Writes from a run are only
//! accepted while that run owns the store, so a superseded run can never
//! overwrite the array its successor is sorting.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ArrayConfig;
use crate::run::RunId;

#[derive(Debug, Default)]
struct StoreInner {
    values: Vec<u32>,
    owner: Option<RunId>,
}

#[derive(Clone, Debug, Default)]
pub struct ArrayStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ArrayStore {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                values,
                owner: None,
            })),
        }
    }

    pub fn snapshot(&self) -> Vec<u32> {
        self.inner.lock().values.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().values.is_empty()
    }

    pub fn owner(&self) -> Option<RunId> {
        self.inner.lock().owner
    }

    /// Swap in a freshly generated array. Any run that owned the old array
    /// loses ownership.
    pub fn replace(&self, values: Vec<u32>) {
        let mut inner = self.inner.lock();
        inner.values = values;
        inner.owner = None;
    }

    /// Hand the store to `run` and return the array it should sort.
    pub fn claim(&self, run: RunId) -> Vec<u32> {
        let mut inner = self.inner.lock();
        inner.owner = Some(run);
        inner.values.clone()
    }

    /// Write a step snapshot on behalf of `run`.
    ///
    /// Returns `false` without touching the array when `run` no longer owns
    /// the store.
    pub fn apply(&self, run: RunId, snapshot: &[u32]) -> bool {
        self.apply_with(run, snapshot, || {})
    }

    /// Like [`apply`](Self::apply), then runs `emit` before the lock is
    /// released. A successor's [`claim`](Self::claim) waits for `emit`, so
    /// whatever `emit` renders can never interleave with the next run.
    ///
    /// `emit` must not call back into this store.
    pub fn apply_with<F: FnOnce()>(&self, run: RunId, snapshot: &[u32], emit: F) -> bool {
        let mut inner = self.inner.lock();
        if inner.owner != Some(run) {
            tracing::warn!(%run, owner = ?inner.owner, "refused write from stale run");
            return false;
        }
        debug_assert_eq!(
            inner.values.len(),
            snapshot.len(),
            "array length changed mid-run"
        );
        inner.values.clear();
        inner.values.extend_from_slice(snapshot);
        emit();
        true
    }

    /// Give up ownership if `run` still holds it.
    pub fn release(&self, run: RunId) {
        let mut inner = self.inner.lock();
        if inner.owner == Some(run) {
            inner.owner = None;
        }
    }
}

/// Uniform sampler for the arrays a user sorts.
pub struct ArrayGenerator {
    rng: StdRng,
    length: usize,
    min_value: u32,
    max_value: u32,
}

impl ArrayGenerator {
    /// Seeded from `config.seed` when present, otherwise from OS entropy.
    pub fn new(config: &ArrayConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            length: config.length,
            min_value: config.min_value,
            max_value: config.max_value,
        }
    }

    /// Values drawn uniformly from `[min_value, max_value)`.
    pub fn generate(&mut self) -> Vec<u32> {
        let range = self.min_value..self.max_value.max(self.min_value.saturating_add(1));
        (0..self.length)
            .map(|_| self.rng.gen_range(range.clone()))
            .collect()
    }
}
