//! Input validation for the workload sizes
//!
//! The workload is supposed to be wasteful, not absurd. These caps keep
//! every stage finishable on a developer machine and keep the arithmetic
//! inside `u64`, and they turn nonsense sizes into descriptive errors
//! instead of an OOM kill hours in.

use anyhow::Result;

use crate::error::WastrelError;

/// Largest permitted `--list-size`; roughly 800 MB of squares.
pub const MAX_LIST_SIZE: usize = 100_000_000;
/// Largest permitted `--string-count`; the concatenation is quadratic,
/// so this already means on the order of a terabyte of copying.
pub const MAX_STRING_COUNT: usize = 10_000_000;
/// Largest permitted `--burn`; keeps the running sum within `u64`.
pub const MAX_COMPUTATION_LIMIT: u64 = 4_000_000_000;

/// Validate the number of squares to materialize
pub fn validate_list_size(size: usize) -> Result<()> {
    if size > MAX_LIST_SIZE {
        return Err(WastrelError::invalid_input(
            "list-size",
            format!("{size} exceeds the maximum of {MAX_LIST_SIZE}"),
        )
        .into());
    }
    Ok(())
}

/// Validate the number of integers to concatenate
pub fn validate_string_count(count: usize) -> Result<()> {
    if count > MAX_STRING_COUNT {
        return Err(WastrelError::invalid_input(
            "string-count",
            format!("{count} exceeds the maximum of {MAX_STRING_COUNT}"),
        )
        .into());
    }
    Ok(())
}

/// Validate the upper bound of the burn loop
pub fn validate_computation_limit(limit: u64) -> Result<()> {
    if limit > MAX_COMPUTATION_LIMIT {
        return Err(WastrelError::invalid_input(
            "burn",
            format!("{limit} exceeds the maximum of {MAX_COMPUTATION_LIMIT}"),
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_list_size() {
        assert!(validate_list_size(0).is_ok());
        assert!(validate_list_size(1_000_000).is_ok());
        assert!(validate_list_size(MAX_LIST_SIZE).is_ok());
        assert!(validate_list_size(MAX_LIST_SIZE + 1).is_err());
    }

    #[test]
    fn test_validate_string_count() {
        assert!(validate_string_count(0).is_ok());
        assert!(validate_string_count(MAX_STRING_COUNT).is_ok());
        assert!(validate_string_count(MAX_STRING_COUNT + 1).is_err());
    }

    #[test]
    fn test_validate_computation_limit() {
        assert!(validate_computation_limit(0).is_ok());
        assert!(validate_computation_limit(MAX_COMPUTATION_LIMIT).is_ok());
        assert!(validate_computation_limit(MAX_COMPUTATION_LIMIT + 1).is_err());
    }

    #[test]
    fn test_oversized_input_classifies_as_invalid() {
        let error = validate_list_size(MAX_LIST_SIZE + 1).unwrap_err();
        let classified = error.downcast_ref::<WastrelError>().unwrap();
        assert_eq!(classified.exit_code(), 2);
        assert!(error.to_string().contains("exceeds the maximum"));
    }
}
