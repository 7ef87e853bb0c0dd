//! In-memory state keyed by visitor id.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use uuid::Uuid;

/// How long an untouched entry is kept by default.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Upper bound on the time between two sweeps of expired entries.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct Slot<T> {
    touched: Instant,
    value: T,
}

#[derive(Debug)]
struct Entries<T> {
    slots: HashMap<Uuid, Slot<T>>,
    last_sweep: Instant,
}

/// Holds one `T` per visitor. The lock is only taken inside the closure
/// based accessors, so callers cannot keep it across an `.await`.
///
/// Entries not touched for the idle TTL are dropped on a later access.
#[derive(Debug)]
pub struct VisitorStore<T> {
    entries: Mutex<Entries<T>>,
    idle_ttl: Duration,
}

impl<T> Default for VisitorStore<T> {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }
}

impl<T> VisitorStore<T> {
    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(Entries {
                slots: HashMap::new(),
                last_sweep: Instant::now(),
            }),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    /// Runs `f` on the visitor's entry if one exists. Never inserts.
    pub fn with_existing<R>(&self, visitor: Uuid, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut entries = self.lock_swept();
        let slot = entries.slots.get_mut(&visitor)?;
        slot.touched = Instant::now();
        Some(f(&mut slot.value))
    }

    pub fn len(&self) -> usize {
        self.lock_swept().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_swept(&self) -> std::sync::MutexGuard<'_, Entries<T>> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        if now.duration_since(entries.last_sweep) >= self.idle_ttl.min(SWEEP_INTERVAL) {
            let idle_ttl = self.idle_ttl;
            let before = entries.slots.len();
            entries
                .slots
                .retain(|_, slot| now.duration_since(slot.touched) < idle_ttl);
            let expired = before - entries.slots.len();
            if expired > 0 {
                log::debug!("Expired {expired} idle visitor entries");
            }
            entries.last_sweep = now;
        }
        entries
    }
}

impl<T: Default> VisitorStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on the visitor's entry, creating a default one first if needed.
    pub fn with<R>(&self, visitor: Uuid, f: impl FnOnce(&mut T) -> R) -> R {
        let mut entries = self.lock_swept();
        let slot = entries.slots.entry(visitor).or_insert_with(|| Slot {
            touched: Instant::now(),
            value: T::default(),
        });
        slot.touched = Instant::now();
        f(&mut slot.value)
    }
}
