//! Process-local reservation of claimed coordinates.
//!
//! Searches running in this process record every coordinate they hand out
//! here, before the corresponding store write is visible, so two concurrent
//! searches never emit the same candidate. The set is a fast-path hint, not
//! the correctness guard -- the store's conditional claim is the final
//! authority -- so it is deliberately never cleared: entries live for the
//! process lifetime, a leaked entry costs at most one skipped candidate,
//! and a restart costs at most some re-sampling.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use gridlands_types::Coordinate;

/// A monotonically growing set of coordinates handed out by searches.
///
/// Cheap to share: interior mutability behind a [`Mutex`], never held
/// across an await point.
#[derive(Debug, Default)]
pub struct ReservationSet {
    inner: Mutex<HashSet<Coordinate>>,
}

impl ReservationSet {
    /// Create an empty reservation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `coord` has already been handed out.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.lock().contains(&coord)
    }

    /// Record `coord` as handed out. Returns `false` if it was already
    /// reserved.
    pub fn reserve(&self, coord: Coordinate) -> bool {
        self.lock().insert(coord)
    }

    /// Number of reserved coordinates.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been reserved yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Lock the inner set, recovering from a poisoned mutex -- reservation
    /// state stays usable even if a holder panicked.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<Coordinate>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
