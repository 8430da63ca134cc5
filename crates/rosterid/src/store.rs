use crate::{Result, SequenceKey};

/// A durable, per-partition sequence counter.
///
/// Implementations own one monotonically increasing counter per
/// [`SequenceKey`] and hand out its values one at a time. This is the single
/// correctness-critical seam of the crate: everything else is formatting.
///
/// ## Contract
///
/// - [`try_next`] locates the counter for the exact key — creating it at 0
///   if absent — increments it by 1, and returns the new value. The
///   locate-or-create-then-increment must be a single atomic unit with
///   respect to every other concurrent call for the same key: under N
///   simultaneous calls the returned values are exactly
///   `{prev+1, ..., prev+N}`, no duplicates, no gaps.
/// - Calls for different keys never block or interfere with each other.
///   There is no global lock, only per-key serialization.
/// - On failure nothing is consumed: either the increment committed and a
///   value was returned, or the counter is unchanged. Failures surface as
///   [`Error::StorageUnavailable`] and are safe to retry.
/// - Counters are never deleted or reset. Identifiers issued from them must
///   stay unique for the lifetime of the system, so a consumed value is
///   permanently spent even if the caller later aborts.
///
/// In a multi-process deployment the atomicity must come from the durable
/// store itself (row locking within a transaction, or a single-statement
/// upsert); an in-process mutex only suffices when every allocator shares
/// one process, as [`MemorySequenceStore`] does.
///
/// [`try_next`]: SequenceStore::try_next
/// [`Error::StorageUnavailable`]: crate::Error::StorageUnavailable
/// [`MemorySequenceStore`]: crate::MemorySequenceStore
pub trait SequenceStore {
    /// Atomically increments the counter for `key` and returns the new
    /// value. The first allocation for a fresh key returns 1.
    fn try_next(&self, key: &SequenceKey) -> Result<u32>;

    /// Returns the current counter value for `key` without consuming
    /// anything. Absent keys read as 0.
    ///
    /// Useful for inspection and for asserting that failed generation calls
    /// left the counter untouched; the value may be stale by the time the
    /// caller looks at it.
    fn current(&self, key: &SequenceKey) -> Result<u32>;
}
