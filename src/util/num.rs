/// Converts a `usize` to `i32`, clamping values that do not fit to
/// `i32::MAX`.
///
/// # Parameters
/// - `value`: The length or count to convert.
///
/// # Returns
/// The value as `i32`, or `i32::MAX` if it is too large.
///
/// # Example
/// ```
/// use anka::util::num::usize_to_i32_saturating;
///
/// assert_eq!(usize_to_i32_saturating(42), 42);
/// assert_eq!(usize_to_i32_saturating(usize::MAX), i32::MAX);
/// ```
#[must_use]
pub fn usize_to_i32_saturating(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Converts a `u32` placeholder number to a zero-based component index.
///
/// `_1` addresses component `0`; the bare `_` (number `0`) has no component
/// index of its own.
///
/// # Returns
/// - `Some(index)` for placeholder numbers `1` and above.
/// - `None` for `0`.
///
/// # Example
/// ```
/// use anka::util::num::placeholder_to_index;
///
/// assert_eq!(placeholder_to_index(1), Some(0));
/// assert_eq!(placeholder_to_index(3), Some(2));
/// assert_eq!(placeholder_to_index(0), None);
/// ```
#[must_use]
pub fn placeholder_to_index(number: u32) -> Option<usize> {
    number.checked_sub(1)
          .and_then(|index| usize::try_from(index).ok())
}

/// Parses a decimal literal into an `i32`, returning `None` when it does not
/// fit.
///
/// # Example
/// ```
/// use anka::util::num::parse_i32_literal;
///
/// assert_eq!(parse_i32_literal("-17"), Some(-17));
/// assert_eq!(parse_i32_literal("2147483648"), None);
/// ```
#[must_use]
pub fn parse_i32_literal(literal: &str) -> Option<i32> {
    literal.parse().ok()
}
