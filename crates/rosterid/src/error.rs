use std::sync::{MutexGuard, PoisonError};

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `rosterid` can produce.
///
/// The first three variants are validation failures: the inputs were wrong
/// and retrying with the same inputs will fail the same way. Only
/// [`Error::StorageUnavailable`] is retryable — when it is returned, no
/// sequence number was consumed, so the caller may safely repeat the whole
/// generation call.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The role name has no entry in the fixed role-code table.
    #[error("unknown role name: {name:?}")]
    UnknownRole { name: String },

    /// A program name is required for this role but was not supplied.
    ///
    /// Only administrative roles may omit the program name; every other role
    /// allocates within a program partition.
    #[error("program name is required for the {role:?} role")]
    MissingProgram { role: String },

    /// The input to identifier parsing does not match the expected
    /// `TAG/YY/PPP/RRR/NNNN` layout.
    #[error("malformed identifier {input:?}: {reason}")]
    MalformedIdentifier { input: String, reason: String },

    /// The atomic counter increment could not be performed.
    ///
    /// Either the increment committed and a value was returned, or it did
    /// not commit and nothing was consumed — there is no partially-spent
    /// state to clean up before retrying.
    #[error("sequence storage unavailable: {context}")]
    StorageUnavailable { context: String },
}

impl Error {
    /// Shorthand for a [`Error::StorageUnavailable`] with the given context.
    pub fn storage(context: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            context: context.into(),
        }
    }
}

// Convert all poisoned lock errors to `StorageUnavailable`: a poisoned
// counter lock means some other caller panicked mid-increment, and the safe
// move is to treat the store as unavailable rather than trust its state.
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::storage("counter lock poisoned")
    }
}
