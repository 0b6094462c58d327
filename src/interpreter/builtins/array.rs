use crate::util::num::usize_to_i32_saturating;

/// Builds the integers `1..=n`. Non-positive `n` yields an empty array.
///
/// # Example
/// ```
/// use anka::interpreter::builtins::array::ioata;
///
/// assert_eq!(ioata(5), vec![1, 2, 3, 4, 5]);
/// assert!(ioata(0).is_empty());
/// assert!(ioata(-3).is_empty());
/// ```
pub fn ioata(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

/// Number of elements, saturated at `i32::MAX`.
pub fn length<T>(values: &[T]) -> i32 {
    usize_to_i32_saturating(values.len())
}

/// Wrapping integer sum; `0` for an empty array.
pub fn sum(values: &[i32]) -> i32 {
    values.iter().fold(0, |acc, &value| acc.wrapping_add(value))
}

pub fn sum_double(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Ascending copy of the array.
pub fn sort<T: Ord + Copy>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Ascending copy of a double array, in IEEE 754 total order (NaNs last).
///
/// # Example
/// ```
/// use anka::interpreter::builtins::array::sort_double;
///
/// assert_eq!(sort_double(&[3.0, 4.0, 1.0]), vec![1.0, 3.0, 4.0]);
/// ```
pub fn sort_double(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

pub fn all_of(values: &[bool]) -> bool {
    values.iter().all(|&value| value)
}

pub fn any_of(values: &[bool]) -> bool {
    values.iter().any(|&value| value)
}

pub fn none_of(values: &[bool]) -> bool {
    !any_of(values)
}
