use crate::{Result, SequenceKey, SequenceStore};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// An in-process [`SequenceStore`] suitable for tests and single-process
/// deployments.
///
/// Each key owns its own `Arc<Mutex<u32>>` slot; the outer map lock is held
/// only long enough to find or create a slot, so sustained allocation
/// against one key never blocks allocation against another.
///
/// ## Caveats
///
/// State lives in memory and does not survive a restart, and the mutexes
/// only serialize callers within this process. Multi-process deployments
/// need a store whose atomicity is enforced by durable storage, such as
/// `SqliteSequenceStore` from the `rosterid-sqlite` crate.
#[derive(Default)]
pub struct MemorySequenceStore {
    slots: Mutex<HashMap<SequenceKey, Arc<Mutex<u32>>>>,
}

impl MemorySequenceStore {
    /// Creates an empty store; every key starts allocating at 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: &SequenceKey) -> Result<Arc<Mutex<u32>>> {
        let mut slots = self.slots.lock()?;
        Ok(Arc::clone(slots.entry(key.clone()).or_default()))
    }
}

impl SequenceStore for MemorySequenceStore {
    fn try_next(&self, key: &SequenceKey) -> Result<u32> {
        let slot = self.slot(key)?;
        let mut value = slot.lock()?;
        *value += 1;
        Ok(*value)
    }

    fn current(&self, key: &SequenceKey) -> Result<u32> {
        let slots = self.slots.lock()?;
        match slots.get(key) {
            Some(slot) => Ok(*slot.lock()?),
            None => Ok(0),
        }
    }
}
