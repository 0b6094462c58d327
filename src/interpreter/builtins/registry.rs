use std::fmt;

use crate::interpreter::{
    builtins::{array, scalar},
    evaluator::core::EvalResult,
};

/// The type of one argument position as seen by the overload resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A 32-bit integer.
    Int,
    /// An array of 32-bit integers.
    IntArray,
    /// A double.
    Double,
    /// An array of doubles.
    DoubleArray,
    /// A boolean.
    Bool,
    /// An array of booleans.
    BoolArray,
    /// A builtin function passed by name, with the signature it must have.
    Function(&'static Signature),
}

impl ArgType {
    /// Returns `true` for the three scalar types.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Int | Self::Double | Self::Bool)
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::IntArray => write!(f, "(int)"),
            Self::Double => write!(f, "double"),
            Self::DoubleArray => write!(f, "(double)"),
            Self::Bool => write!(f, "bool"),
            Self::BoolArray => write!(f, "(bool)"),
            Self::Function(signature) => write!(f, "fn{signature}"),
        }
    }
}

/// Parameter types and return type of one overload.
#[derive(Debug, PartialEq, Eq)]
pub struct Signature {
    /// One entry per argument position.
    pub params: &'static [ArgType],
    /// The type of the produced value.
    pub ret:    ArgType,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [single] = self.params {
            write!(f, "{single}")?;
        } else {
            write!(f, "[")?;
            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{param}")?;
            }
            write!(f, "]")?;
        }
        write!(f, " -> {}", self.ret)
    }
}

/// Signature of an integer operator accepted by `foldl` and `scanl`.
pub const INT_OPERATOR: Signature = Signature { params: &[ArgType::Int, ArgType::Int],
                                                ret:    ArgType::Int, };
/// Signature of a double operator accepted by `foldl` and `scanl`.
pub const DOUBLE_OPERATOR: Signature = Signature { params: &[ArgType::Double, ArgType::Double],
                                                   ret:    ArgType::Double, };
/// Signature of a boolean operator accepted by `foldl` and `scanl`.
pub const BOOL_OPERATOR: Signature = Signature { params: &[ArgType::Bool, ArgType::Bool],
                                                 ret:    ArgType::Bool, };

/// Whether a combinator keeps only the final accumulator or every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceKind {
    /// `foldl`: the final accumulator.
    Fold,
    /// `scanl`: every intermediate accumulator.
    Scan,
}

/// The native implementation behind an overload.
///
/// Scalar variants are applied elementwise by the invoker when an argument
/// is expanded; whole-array variants always receive the complete array.
#[derive(Debug, Clone, Copy)]
pub enum NativeOp {
    /// `int -> int`.
    IntUnary(fn(i32) -> i32),
    /// `double -> double`.
    DoubleUnary(fn(f64) -> f64),
    /// `bool -> bool`.
    BoolUnary(fn(bool) -> bool),
    /// `int -> double`.
    IntToDouble(fn(i32) -> f64),
    /// `int -> (int)`.
    IntToIntArray(fn(i32) -> Vec<i32>),
    /// `[int int] -> int`; fallible because of integer division.
    IntBinary(fn(i32, i32) -> EvalResult<i32>),
    /// `[double double] -> double`.
    DoubleBinary(fn(f64, f64) -> f64),
    /// `[bool bool] -> bool`.
    BoolBinary(fn(bool, bool) -> bool),
    /// `[int int] -> bool`.
    IntCompare(fn(i32, i32) -> bool),
    /// `[double double] -> bool`.
    DoubleCompare(fn(f64, f64) -> bool),
    /// `(int) -> int`.
    IntArrayToInt(fn(&[i32]) -> i32),
    /// `(double) -> int`.
    DoubleArrayToInt(fn(&[f64]) -> i32),
    /// `(bool) -> int`.
    BoolArrayToInt(fn(&[bool]) -> i32),
    /// `(double) -> double`.
    DoubleArrayToDouble(fn(&[f64]) -> f64),
    /// `(bool) -> bool`.
    BoolArrayToBool(fn(&[bool]) -> bool),
    /// `(int) -> (int)`.
    IntArrayToIntArray(fn(&[i32]) -> Vec<i32>),
    /// `(double) -> (double)`.
    DoubleArrayToDoubleArray(fn(&[f64]) -> Vec<f64>),
    /// `(bool) -> (bool)`.
    BoolArrayToBoolArray(fn(&[bool]) -> Vec<bool>),
    /// `[fn (T)] -> T` or `[fn (T)] -> (T)`: left fold or scan of an array
    /// with a builtin operator.
    Reduce(ReduceKind),
}

/// One registered overload of a builtin name.
#[derive(Debug)]
pub struct Overload {
    /// The builtin name.
    pub name:      &'static str,
    /// Parameter and return types.
    pub signature: Signature,
    /// What to call.
    pub op:        NativeOp,
}

/// Defines the overload registry by generating a static table.
///
/// Each entry provides:
/// - a builtin name,
/// - the parameter types (bracketed) and the return type,
/// - the native operation implementing it.
///
/// Several entries may share a name; they are tried in table order by the
/// resolver when more than one matches the same argument types.
macro_rules! overloads {
    (
        $(
            $name:literal : [$($param:expr),* $(,)?] -> $ret:expr => $op:expr
        ),* $(,)?
    ) => {
        static OVERLOAD_TABLE: &[Overload] = &[
            $(
                Overload { name:      $name,
                           signature: Signature { params: &[$($param),*], ret: $ret },
                           op:        $op },
            )*
        ];
    };
}

use ArgType::{Bool, BoolArray, Double, DoubleArray, Int, IntArray};

const INT_FN: ArgType = ArgType::Function(&INT_OPERATOR);
const DOUBLE_FN: ArgType = ArgType::Function(&DOUBLE_OPERATOR);
const BOOL_FN: ArgType = ArgType::Function(&BOOL_OPERATOR);

overloads! {
    "ioata"      : [Int]                  -> IntArray    => NativeOp::IntToIntArray(array::ioata),
    "inc"        : [Int]                  -> Int         => NativeOp::IntUnary(scalar::inc),
    "inc"        : [Double]               -> Double      => NativeOp::DoubleUnary(scalar::inc_double),
    "dec"        : [Int]                  -> Int         => NativeOp::IntUnary(scalar::dec),
    "dec"        : [Double]               -> Double      => NativeOp::DoubleUnary(scalar::dec_double),
    "neg"        : [Int]                  -> Int         => NativeOp::IntUnary(i32::wrapping_neg),
    "neg"        : [Double]               -> Double      => NativeOp::DoubleUnary(scalar::neg_double),
    "abs"        : [Int]                  -> Int         => NativeOp::IntUnary(i32::wrapping_abs),
    "abs"        : [Double]               -> Double      => NativeOp::DoubleUnary(f64::abs),
    "sqrt"       : [Double]               -> Double      => NativeOp::DoubleUnary(f64::sqrt),
    "exp"        : [Double]               -> Double      => NativeOp::DoubleUnary(f64::exp),
    "log"        : [Double]               -> Double      => NativeOp::DoubleUnary(f64::ln),
    "log10"      : [Double]               -> Double      => NativeOp::DoubleUnary(f64::log10),
    "sin"        : [Double]               -> Double      => NativeOp::DoubleUnary(f64::sin),
    "cos"        : [Double]               -> Double      => NativeOp::DoubleUnary(f64::cos),
    "tan"        : [Double]               -> Double      => NativeOp::DoubleUnary(f64::tan),
    "floor"      : [Double]               -> Double      => NativeOp::DoubleUnary(f64::floor),
    "ceil"       : [Double]               -> Double      => NativeOp::DoubleUnary(f64::ceil),
    "trunc"      : [Double]               -> Double      => NativeOp::DoubleUnary(f64::trunc),
    "length"     : [IntArray]             -> Int         => NativeOp::IntArrayToInt(array::length),
    "length"     : [DoubleArray]          -> Int         => NativeOp::DoubleArrayToInt(array::length),
    "length"     : [BoolArray]            -> Int         => NativeOp::BoolArrayToInt(array::length),
    "sort"       : [IntArray]             -> IntArray    => NativeOp::IntArrayToIntArray(array::sort),
    "sort"       : [DoubleArray]          -> DoubleArray => NativeOp::DoubleArrayToDoubleArray(array::sort_double),
    "sort"       : [BoolArray]            -> BoolArray   => NativeOp::BoolArrayToBoolArray(array::sort),
    "add"        : [Int, Int]             -> Int         => NativeOp::IntBinary(scalar::add),
    "add"        : [Double, Double]       -> Double      => NativeOp::DoubleBinary(scalar::add_double),
    "sub"        : [Int, Int]             -> Int         => NativeOp::IntBinary(scalar::sub),
    "sub"        : [Double, Double]       -> Double      => NativeOp::DoubleBinary(scalar::sub_double),
    "mul"        : [Int, Int]             -> Int         => NativeOp::IntBinary(scalar::mul),
    "mul"        : [Double, Double]       -> Double      => NativeOp::DoubleBinary(scalar::mul_double),
    "div"        : [Int, Int]             -> Int         => NativeOp::IntBinary(scalar::div),
    "div"        : [Double, Double]       -> Double      => NativeOp::DoubleBinary(scalar::div_double),
    "and"        : [Bool, Bool]           -> Bool        => NativeOp::BoolBinary(scalar::and),
    "or"         : [Bool, Bool]           -> Bool        => NativeOp::BoolBinary(scalar::or),
    "not"        : [Bool]                 -> Bool        => NativeOp::BoolUnary(scalar::not),
    "equals"     : [Int, Int]             -> Bool        => NativeOp::IntCompare(scalar::equals),
    "equals"     : [Double, Double]       -> Bool        => NativeOp::DoubleCompare(scalar::equals),
    "equals"     : [Bool, Bool]           -> Bool        => NativeOp::BoolBinary(scalar::equals),
    "not_equals" : [Int, Int]             -> Bool        => NativeOp::IntCompare(scalar::not_equals),
    "not_equals" : [Double, Double]       -> Bool        => NativeOp::DoubleCompare(scalar::not_equals),
    "not_equals" : [Bool, Bool]           -> Bool        => NativeOp::BoolBinary(scalar::not_equals),
    "all_of"     : [BoolArray]            -> Bool        => NativeOp::BoolArrayToBool(array::all_of),
    "any_of"     : [BoolArray]            -> Bool        => NativeOp::BoolArrayToBool(array::any_of),
    "none_of"    : [BoolArray]            -> Bool        => NativeOp::BoolArrayToBool(array::none_of),
    "sum"        : [IntArray]             -> Int         => NativeOp::IntArrayToInt(array::sum),
    "sum"        : [DoubleArray]          -> Double      => NativeOp::DoubleArrayToDouble(array::sum_double),
    "to_double"  : [Int]                  -> Double      => NativeOp::IntToDouble(scalar::to_double),
    "to_double"  : [Double]               -> Double      => NativeOp::DoubleUnary(scalar::identity),
    "foldl"      : [INT_FN, IntArray]     -> Int         => NativeOp::Reduce(ReduceKind::Fold),
    "foldl"      : [DOUBLE_FN, DoubleArray] -> Double    => NativeOp::Reduce(ReduceKind::Fold),
    "foldl"      : [BOOL_FN, BoolArray]   -> Bool        => NativeOp::Reduce(ReduceKind::Fold),
    "scanl"      : [INT_FN, IntArray]     -> IntArray    => NativeOp::Reduce(ReduceKind::Scan),
    "scanl"      : [DOUBLE_FN, DoubleArray] -> DoubleArray => NativeOp::Reduce(ReduceKind::Scan),
    "scanl"      : [BOOL_FN, BoolArray]   -> BoolArray   => NativeOp::Reduce(ReduceKind::Scan),
}

/// Names bound to double constants in every fresh session.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI),
                                                ("e", std::f64::consts::E)];

/// Iterates over every overload registered under `name`, in table order.
///
/// # Example
/// ```
/// use anka::interpreter::builtins::registry::overloads;
///
/// assert_eq!(overloads("inc").count(), 2);
/// assert_eq!(overloads("nope").count(), 0);
/// ```
pub fn overloads(name: &str) -> impl Iterator<Item = &'static Overload> + '_ {
    OVERLOAD_TABLE.iter().filter(move |overload| overload.name == name)
}

/// Returns `true` if at least one overload is registered under `name`.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    overloads(name).next().is_some()
}

/// The largest parameter count among the overloads of `name`, or `0` if the
/// name is not registered.
///
/// # Example
/// ```
/// use anka::interpreter::builtins::registry::max_arity;
///
/// assert_eq!(max_arity("add"), 2);
/// assert_eq!(max_arity("sqrt"), 1);
/// assert_eq!(max_arity("nope"), 0);
/// ```
#[must_use]
pub fn max_arity(name: &str) -> usize {
    overloads(name).map(|overload| overload.signature.params.len())
                   .max()
                   .unwrap_or(0)
}

/// Finds the overload of `name` whose parameter types are exactly `params`.
#[must_use]
pub fn find(name: &str, params: &[ArgType]) -> Option<&'static Overload> {
    overloads(name).find(|overload| overload.signature.params == params)
}

/// Finds the overload of `name` with exactly the given signature.
#[must_use]
pub fn find_signature(name: &str, signature: &Signature) -> Option<&'static Overload> {
    overloads(name).find(|overload| overload.signature == *signature)
}

/// Every registered overload, in table order.
#[must_use]
pub fn all() -> &'static [Overload] {
    OVERLOAD_TABLE
}
