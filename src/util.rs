/// Numeric conversion helpers.
///
/// Conversions between the host's `usize` and anka's 32-bit integers, used
/// wherever a length or an index crosses that boundary.
pub mod num;
