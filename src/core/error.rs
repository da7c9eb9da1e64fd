//=========================================================================
// Lifecycle Errors
//=========================================================================
//
// Typed outcomes for every controller operation.
//
// Categories:
//   Usage     → NotRunning, AlreadyRunning, EmptyName, AlreadyExists,
//               NoValidCallbacks, NotFound, CannotDeleteCurrent,
//               NoCurrentState
//   Resource  → AllocationFailed
//   Clock     → Clock(ClockError)
//
// A broken registry during teardown is not listed here: it panics.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::clock::ClockError;

//=== LifecycleError ======================================================

/// Errors returned by [`LifecycleController`](crate::core::LifecycleController)
/// and its [`Registry`](crate::core::state::Registry).
///
/// All variants are recoverable: the controller is left exactly as it was
/// before the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("controller is not running")]
    NotRunning,

    #[error("controller is already running")]
    AlreadyRunning,

    #[error("state name is empty or blank")]
    EmptyName,

    #[error("state {0:?} is already registered")]
    AlreadyExists(String),

    #[error("state {0:?} defines no callbacks")]
    NoValidCallbacks(String),

    #[error("state {0:?} is not registered")]
    NotFound(String),

    #[error("state {0:?} is the current state and cannot be deleted")]
    CannotDeleteCurrent(String),

    #[error("no current state is set")]
    NoCurrentState,

    #[error("failed to allocate registry storage")]
    AllocationFailed,

    #[error("frame clock error: {0}")]
    Clock(#[from] ClockError),
}

/// Shorthand result type for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_state() {
        let err = LifecycleError::CannotDeleteCurrent("menu".into());
        assert_eq!(
            err.to_string(),
            "state \"menu\" is the current state and cannot be deleted"
        );
    }

    #[test]
    fn clock_errors_convert() {
        let err: LifecycleError = ClockError::Unavailable("no source".into()).into();
        assert!(matches!(err, LifecycleError::Clock(_)));
    }
}
