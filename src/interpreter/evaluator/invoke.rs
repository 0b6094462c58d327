use crate::{
    error::ExecutionError,
    interpreter::{
        builtins::registry::{self, ArgType, NativeOp, Overload, ReduceKind},
        evaluator::{core::EvalResult, overload::Interpretation},
        value::{
            store::Store,
            word::{Word, WordKind},
        },
    },
};

/// A scalar type that native operations work on elementwise.
///
/// Reading goes through the interpretation the resolver picked: a double
/// parameter may be fed from an integer scalar, which is promoted here.
pub trait Element: Copy + Default {
    /// Reads a scalar argument.
    fn read_scalar(store: &Store, word: Word) -> Self;

    /// Reads an array argument.
    fn read_array(store: &Store, word: Word) -> &[Self];

    /// Stores a scalar result.
    fn store_scalar(store: &mut Store, value: Self) -> Word;

    /// Stores an array result.
    fn store_array(store: &mut Store, values: Vec<Self>) -> Word;
}

macro_rules! plain_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn read_scalar(store: &Store, word: Word) -> Self {
                    *store.read::<$ty>(word)
                }

                fn read_array(store: &Store, word: Word) -> &[Self] {
                    store.read::<Vec<$ty>>(word)
                }

                fn store_scalar(store: &mut Store, value: Self) -> Word {
                    store.create(value)
                }

                fn store_array(store: &mut Store, values: Vec<Self>) -> Word {
                    store.create(values)
                }
            }
        )*
    };
}

plain_element!(i32, bool);

impl Element for f64 {
    fn read_scalar(store: &Store, word: Word) -> Self {
        match word.kind {
            WordKind::Int => Self::from(*store.read::<i32>(word)),
            _ => *store.read::<Self>(word),
        }
    }

    fn read_array(store: &Store, word: Word) -> &[Self] {
        store.read::<Vec<Self>>(word)
    }

    fn store_scalar(store: &mut Store, value: Self) -> Word {
        store.create(value)
    }

    fn store_array(store: &mut Store, values: Vec<Self>) -> Word {
        store.create(values)
    }
}

impl Store {
    /// Runs the native operation of `overload` on `args`, read according to
    /// `candidate`.
    ///
    /// # Errors
    /// - `LengthMismatch` when two expanded arrays differ in length, or when
    ///   the argument count does not fit the overload.
    /// - `DivisionByZero` from integer division.
    /// - `NoMatchingOverload` when a combinator's operator has no overload
    ///   with the required signature.
    pub(crate) fn invoke(&mut self,
                         overload: &Overload,
                         args: &[Word],
                         candidate: &[Interpretation])
                         -> EvalResult<Word> {
        let expand = |position: usize| candidate.get(position).is_some_and(|option| option.expand);

        match (overload.op, args) {
            (NativeOp::IntUnary(f), &[arg]) => Ok(self.apply_unary(f, arg, expand(0))),
            (NativeOp::DoubleUnary(f), &[arg]) => Ok(self.apply_unary(f, arg, expand(0))),
            (NativeOp::BoolUnary(f), &[arg]) => Ok(self.apply_unary(f, arg, expand(0))),
            (NativeOp::IntToDouble(f), &[arg]) => Ok(self.apply_unary(f, arg, expand(0))),
            (NativeOp::IntToIntArray(f), &[arg]) => {
                let values = f(*self.read::<i32>(arg));
                Ok(self.create(values))
            },
            (NativeOp::IntBinary(f), &[lhs, rhs]) => {
                self.apply_binary(f, (lhs, expand(0)), (rhs, expand(1)))
            },
            (NativeOp::DoubleBinary(f), &[lhs, rhs]) => {
                self.apply_binary(|a: f64, b: f64| Ok(f(a, b)), (lhs, expand(0)), (rhs, expand(1)))
            },
            (NativeOp::BoolBinary(f), &[lhs, rhs]) => {
                self.apply_binary(|a: bool, b: bool| Ok(f(a, b)), (lhs, expand(0)), (rhs, expand(1)))
            },
            (NativeOp::IntCompare(f), &[lhs, rhs]) => {
                self.apply_binary(|a: i32, b: i32| Ok(f(a, b)), (lhs, expand(0)), (rhs, expand(1)))
            },
            (NativeOp::DoubleCompare(f), &[lhs, rhs]) => {
                self.apply_binary(|a: f64, b: f64| Ok(f(a, b)), (lhs, expand(0)), (rhs, expand(1)))
            },
            (NativeOp::IntArrayToInt(f), &[arg]) => {
                let value = f(self.read::<Vec<i32>>(arg));
                Ok(self.create(value))
            },
            (NativeOp::DoubleArrayToInt(f), &[arg]) => {
                let value = f(self.read::<Vec<f64>>(arg));
                Ok(self.create(value))
            },
            (NativeOp::BoolArrayToInt(f), &[arg]) => {
                let value = f(self.read::<Vec<bool>>(arg));
                Ok(self.create(value))
            },
            (NativeOp::DoubleArrayToDouble(f), &[arg]) => {
                let value = f(self.read::<Vec<f64>>(arg));
                Ok(self.create(value))
            },
            (NativeOp::BoolArrayToBool(f), &[arg]) => {
                let value = f(self.read::<Vec<bool>>(arg));
                Ok(self.create(value))
            },
            (NativeOp::IntArrayToIntArray(f), &[arg]) => {
                let values = f(self.read::<Vec<i32>>(arg));
                Ok(self.create(values))
            },
            (NativeOp::DoubleArrayToDoubleArray(f), &[arg]) => {
                let values = f(self.read::<Vec<f64>>(arg));
                Ok(self.create(values))
            },
            (NativeOp::BoolArrayToBoolArray(f), &[arg]) => {
                let values = f(self.read::<Vec<bool>>(arg));
                Ok(self.create(values))
            },
            (NativeOp::Reduce(kind), &[operator, array]) => {
                self.reduce_array(kind, overload, operator, array)
            },
            _ => Err(ExecutionError::LengthMismatch { left:  overload.signature.params.len(),
                                                      right: args.len(), }),
        }
    }

    /// Applies a one-argument operation directly or across an expanded
    /// array.
    fn apply_unary<A: Element, R: Element>(&mut self, f: fn(A) -> R, arg: Word, expand: bool) -> Word {
        if expand {
            let values: Vec<R> = A::read_array(self, arg).iter().map(|&a| f(a)).collect();
            R::store_array(self, values)
        } else {
            let value = f(A::read_scalar(self, arg));
            R::store_scalar(self, value)
        }
    }

    /// Applies a two-argument operation with rank polymorphism.
    ///
    /// Unifies the four shapes:
    /// - scalar with scalar
    /// - array with array (lengths must match)
    /// - array with scalar
    /// - scalar with array
    ///
    /// # Parameters
    /// - `f`: The elementwise operation.
    /// - `lhs`, `rhs`: Argument words with their expand flags.
    ///
    /// # Returns
    /// A scalar word, or an array word if either side was expanded.
    fn apply_binary<A, R, F>(&mut self,
                             f: F,
                             (lhs, lhs_expand): (Word, bool),
                             (rhs, rhs_expand): (Word, bool))
                             -> EvalResult<Word>
        where A: Element,
              R: Element,
              F: Fn(A, A) -> EvalResult<R>
    {
        let values = match (lhs_expand, rhs_expand) {
            (false, false) => {
                let value = f(A::read_scalar(self, lhs), A::read_scalar(self, rhs))?;
                return Ok(R::store_scalar(self, value));
            },
            (true, true) => {
                let left = A::read_array(self, lhs);
                let right = A::read_array(self, rhs);
                if left.len() != right.len() {
                    return Err(ExecutionError::LengthMismatch { left:  left.len(),
                                                                right: right.len(), });
                }
                left.iter()
                    .zip(right.iter())
                    .map(|(&a, &b)| f(a, b))
                    .collect::<EvalResult<Vec<R>>>()?
            },
            (true, false) => {
                let scalar = A::read_scalar(self, rhs);
                A::read_array(self, lhs).iter()
                                        .map(|&a| f(a, scalar))
                                        .collect::<EvalResult<Vec<R>>>()?
            },
            (false, true) => {
                let scalar = A::read_scalar(self, lhs);
                A::read_array(self, rhs).iter()
                                        .map(|&b| f(scalar, b))
                                        .collect::<EvalResult<Vec<R>>>()?
            },
        };
        Ok(R::store_array(self, values))
    }

    /// Runs `foldl` or `scanl`: looks up the operator overload the resolver
    /// matched and folds the array with it from the left.
    fn reduce_array(&mut self,
                    kind: ReduceKind,
                    overload: &Overload,
                    operator: Word,
                    array: Word)
                    -> EvalResult<Word> {
        let not_found = ExecutionError::NoMatchingOverload { function: operator,
                                                             argument: array };
        let Some(&ArgType::Function(signature)) = overload.signature.params.first() else {
            return Err(not_found);
        };
        let Some(function) = registry::find_signature(self.name(operator), signature) else {
            return Err(not_found);
        };

        match function.op {
            NativeOp::IntBinary(f) => self.reduce_elements(kind, array, f),
            NativeOp::DoubleBinary(f) => {
                self.reduce_elements(kind, array, |a: f64, b: f64| Ok(f(a, b)))
            },
            NativeOp::BoolBinary(f) => {
                self.reduce_elements(kind, array, |a: bool, b: bool| Ok(f(a, b)))
            },
            _ => Err(not_found),
        }
    }

    /// Left fold (or scan) of an array, starting from its first element.
    /// An empty array folds to the element type's default value and scans to
    /// an empty array.
    fn reduce_elements<T, F>(&mut self, kind: ReduceKind, array: Word, f: F) -> EvalResult<Word>
        where T: Element,
              F: Fn(T, T) -> EvalResult<T>
    {
        let values = T::read_array(self, array).to_vec();
        let Some((&first, rest)) = values.split_first() else {
            return Ok(match kind {
                          ReduceKind::Fold => T::store_scalar(self, T::default()),
                          ReduceKind::Scan => T::store_array(self, Vec::new()),
                      });
        };

        match kind {
            ReduceKind::Fold => {
                let total = rest.iter().try_fold(first, |acc, &value| f(acc, value))?;
                Ok(T::store_scalar(self, total))
            },
            ReduceKind::Scan => {
                let mut steps = Vec::with_capacity(values.len());
                steps.push(first);
                let mut acc = first;
                for &value in rest {
                    acc = f(acc, value)?;
                    steps.push(acc);
                }
                Ok(T::store_array(self, steps))
            },
        }
    }
}
