//=========================================================================
// Name Validation
//=========================================================================
//
// State names are exact-match keys. A name is accepted as given (no
// trimming); names that are empty or contain only whitespace are rejected
// as empty.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::error::{LifecycleError, LifecycleResult};

//=== validate_name() =====================================================

/// Checks that `candidate` can be used as a state name.
///
/// Returns the name unchanged on success. Whitespace-only names count as
/// empty; surrounding whitespace on an otherwise valid name is preserved and
/// becomes part of the key.
///
/// ```rust
/// use stagehand::core::{validate_name, LifecycleError};
///
/// assert_eq!(validate_name("menu"), Ok("menu"));
/// assert_eq!(validate_name("   "), Err(LifecycleError::EmptyName));
/// ```
pub fn validate_name(candidate: &str) -> LifecycleResult<&str> {
    if candidate.trim().is_empty() {
        return Err(LifecycleError::EmptyName);
    }
    Ok(candidate)
}

//=== Tests ===============================================================
