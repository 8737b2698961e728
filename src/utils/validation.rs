//! Input validation primitives.
//!
//! Replace verbose ok_or_else + Error::validation_invalid_argument chains.

use crate::error::{Error, Result};

/// Convert a 1-based position into a 0-based index into a list of `len`.
pub fn require_position(position: usize, len: usize, field: &str) -> Result<usize> {
    if position == 0 || position > len {
        let problem = if len == 0 {
            "List is empty".to_string()
        } else {
            format!("Expected a number between 1 and {}", len)
        };
        return Err(Error::validation_invalid_argument(
            field,
            problem,
            Some(position.to_string()),
            None,
        ));
    }
    Ok(position - 1)
}
