use crate::{error::ExecutionError, interpreter::evaluator::core::EvalResult};

/// Generates a wrapping integer operator that cannot fail.
///
/// Integer arithmetic in anka wraps on overflow, so `add [2147483647 1]` is
/// `-2147483648` rather than an error.
///
/// # Example
/// ```
/// use anka::interpreter::builtins::scalar::{add, mul};
///
/// assert_eq!(add(2, 3).unwrap(), 5);
/// assert_eq!(add(i32::MAX, 1).unwrap(), i32::MIN);
/// assert_eq!(mul(-4, 5).unwrap(), -20);
/// ```
macro_rules! wrapping_int_op {
    ($fname:ident, $method:ident) => {
        pub const fn $fname(lhs: i32, rhs: i32) -> EvalResult<i32> {
            Ok(lhs.$method(rhs))
        }
    };
}

wrapping_int_op!(add, wrapping_add);
wrapping_int_op!(sub, wrapping_sub);
wrapping_int_op!(mul, wrapping_mul);

/// Integer division, truncating toward zero.
///
/// # Errors
/// Returns `ExecutionError::DivisionByZero` when `rhs` is zero.
///
/// # Example
/// ```
/// use anka::{error::ExecutionError, interpreter::builtins::scalar::div};
///
/// assert_eq!(div(7, 2).unwrap(), 3);
/// assert!(matches!(div(1, 0), Err(ExecutionError::DivisionByZero)));
/// ```
pub const fn div(lhs: i32, rhs: i32) -> EvalResult<i32> {
    if rhs == 0 {
        return Err(ExecutionError::DivisionByZero);
    }
    Ok(lhs.wrapping_div(rhs))
}

/// Generates a double operator from an arithmetic operator token.
macro_rules! double_op {
    ($fname:ident, $op:tt) => {
        pub const fn $fname(lhs: f64, rhs: f64) -> f64 {
            lhs $op rhs
        }
    };
}

double_op!(add_double, +);
double_op!(sub_double, -);
double_op!(mul_double, *);
double_op!(div_double, /);

pub const fn inc(value: i32) -> i32 {
    value.wrapping_add(1)
}

pub const fn dec(value: i32) -> i32 {
    value.wrapping_sub(1)
}

pub const fn inc_double(value: f64) -> f64 {
    value + 1.0
}

pub const fn dec_double(value: f64) -> f64 {
    value - 1.0
}

pub const fn neg_double(value: f64) -> f64 {
    -value
}

pub const fn identity(value: f64) -> f64 {
    value
}

pub fn to_double(value: i32) -> f64 {
    f64::from(value)
}

pub const fn and(lhs: bool, rhs: bool) -> bool {
    lhs && rhs
}

pub const fn or(lhs: bool, rhs: bool) -> bool {
    lhs || rhs
}

pub const fn not(value: bool) -> bool {
    !value
}

/// Exact equality. `equals [1 1.0]` is `true` because the integer is
/// promoted before the comparison.
pub fn equals<T: PartialEq>(lhs: T, rhs: T) -> bool {
    lhs == rhs
}

pub fn not_equals<T: PartialEq>(lhs: T, rhs: T) -> bool {
    lhs != rhs
}
