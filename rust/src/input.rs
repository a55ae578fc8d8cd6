//! Boundary parsing of user-supplied keys.
//!
//! The engine assumes comparable keys; anything coming from text goes through
//! here first and is rejected with [`AvlTreeError::InvalidArgument`].

use crate::error::{AvlTreeError, KeyResult};

/// Parse a single integer key.
pub fn parse_key(token: &str) -> KeyResult<i64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(AvlTreeError::invalid_argument(token, "is empty"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| AvlTreeError::invalid_argument(trimmed, "is not a valid integer key"))
}

/// Parse a list of keys separated by commas and/or whitespace.
///
/// # Examples
///
/// ```
/// use avltree::input::parse_keys;
///
/// assert_eq!(parse_keys("39, 7 11,72").unwrap(), vec![39, 7, 11, 72]);
/// assert!(parse_keys("1, two").is_err());
/// assert!(parse_keys(" , ").is_err());
/// ```
pub fn parse_keys(input: &str) -> KeyResult<Vec<i64>> {
    let keys = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_key)
        .collect::<KeyResult<Vec<_>>>()?;

    if keys.is_empty() {
        return Err(AvlTreeError::invalid_argument(input, "contains no keys"));
    }
    Ok(keys)
}
