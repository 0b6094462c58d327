use log::debug;

use crate::{
    error::ExecutionError,
    interpreter::{
        builtins::registry::{self, ArgType},
        evaluator::core::EvalResult,
        value::{
            store::Store,
            word::{Word, WordKind},
        },
    },
};

/// One way of reading an argument for the purpose of overload matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    /// The parameter type this argument is read as.
    pub ty:     ArgType,
    /// Whether an array argument is mapped elementwise over a scalar
    /// parameter.
    pub expand: bool,
}

impl Interpretation {
    const fn exact(ty: ArgType) -> Self {
        Self { ty,
               expand: false }
    }

    const fn expanded(ty: ArgType) -> Self {
        Self { ty,
               expand: true }
    }
}

/// Lists the admissible interpretations of one argument, most specific
/// first.
///
/// - A value is read as its own type first.
/// - An array may be expanded over its element type. Promotion never
///   applies to array elements.
/// - An integer may be promoted to a double.
/// - A builtin name may be passed as any of its overloads' function types.
///
/// # Example
/// ```
/// use anka::interpreter::{
///     builtins::registry::ArgType,
///     evaluator::overload::interpretations,
///     value::store::Store,
/// };
///
/// let mut store = Store::new();
/// let one = store.create(1);
/// let options: Vec<_> = interpretations(&store, one).iter().map(|i| i.ty).collect();
///
/// assert_eq!(options, vec![ArgType::Int, ArgType::Double]);
/// ```
#[must_use]
pub fn interpretations(store: &Store, word: Word) -> Vec<Interpretation> {
    use ArgType::{Bool, BoolArray, Double, DoubleArray, Int, IntArray};

    match word.kind {
        WordKind::Int => vec![Interpretation::exact(Int), Interpretation::exact(Double)],
        WordKind::Double => vec![Interpretation::exact(Double)],
        WordKind::Bool => vec![Interpretation::exact(Bool)],
        WordKind::IntArray => vec![Interpretation::exact(IntArray), Interpretation::expanded(Int)],
        WordKind::DoubleArray => {
            vec![Interpretation::exact(DoubleArray), Interpretation::expanded(Double)]
        },
        WordKind::BoolArray => vec![Interpretation::exact(BoolArray), Interpretation::expanded(Bool)],
        WordKind::Name => registry::overloads(store.name(word))
                          .map(|overload| Interpretation::exact(ArgType::Function(&overload.signature)))
                          .collect(),
        _ => Vec::new(),
    }
}

/// Lazy cartesian product of per-position interpretations.
///
/// Candidates are produced like the readings of an odometer whose first
/// position turns fastest, so the candidate that reads every argument as
/// its own type comes first. If any position has no interpretation the
/// product is empty.
///
/// # Example
/// ```
/// use anka::interpreter::{
///     builtins::registry::ArgType,
///     evaluator::overload::Candidates,
///     value::store::Store,
/// };
///
/// let mut store = Store::new();
/// let ten = store.create(10);
/// let ratio = store.create(1.2);
///
/// let candidates: Vec<Vec<ArgType>> =
///     Candidates::new(&store, &[ten, ratio]).map(|c| c.iter().map(|i| i.ty).collect())
///                                           .collect();
///
/// assert_eq!(candidates,
///            vec![vec![ArgType::Int, ArgType::Double],
///                 vec![ArgType::Double, ArgType::Double]]);
/// ```
#[derive(Debug, Clone)]
pub struct Candidates {
    options:  Vec<Vec<Interpretation>>,
    odometer: Vec<usize>,
    done:     bool,
}

impl Candidates {
    /// Builds the candidate iterator for the given argument words.
    #[must_use]
    pub fn new(store: &Store, args: &[Word]) -> Self {
        let options: Vec<_> = args.iter()
                                  .map(|&word| interpretations(store, word))
                                  .collect();
        let done = options.iter().any(Vec::is_empty);
        Self { odometer: vec![0; options.len()],
               options,
               done }
    }
}

impl Iterator for Candidates {
    type Item = Vec<Interpretation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let candidate = self.odometer
                            .iter()
                            .zip(&self.options)
                            .map(|(&digit, options)| options[digit])
                            .collect();

        self.done = true;
        for (digit, options) in self.odometer.iter_mut().zip(&self.options) {
            *digit += 1;
            if *digit < options.len() {
                self.done = false;
                break;
            }
            *digit = 0;
        }

        Some(candidate)
    }
}

impl Store {
    /// Replaces a user-bound name by its value; other words are returned
    /// unchanged.
    fn substitute_bound(&self, word: Word) -> Word {
        if word.is_name()
           && let Some(bound) = self.lookup(self.name(word))
        {
            return bound;
        }
        word
    }

    /// Calls the builtin `function` with `argument`.
    ///
    /// The argument is split into components and user-bound names among
    /// them are replaced by their values. Candidates are then tried in
    /// order. The first one that names a registered overload is invoked,
    /// unless it expands an array into an overload with a non-scalar result.
    /// Arrays of different lengths make the invoker reject the candidate and
    /// the search continues.
    ///
    /// # Errors
    /// - `NameNotFound` if `function` is not a builtin.
    /// - `NoMatchingOverload` if no candidate could be invoked.
    /// - Any error raised by the native operation itself.
    ///
    /// # Example
    /// ```
    /// use anka::interpreter::value::{compound::Tuple, store::Store};
    ///
    /// let mut store = Store::new();
    /// let mul = store.create(String::from("mul"));
    /// let ten = store.create(10);
    /// let numbers = store.create(vec![3, 4, 5]);
    /// let args = store.create(Tuple::unconnected(vec![ten, numbers]));
    ///
    /// let result = store.call_builtin(mul, args).unwrap();
    /// assert_eq!(store.read::<Vec<i32>>(result), &vec![30, 40, 50]);
    /// ```
    pub fn call_builtin(&mut self, function: Word, argument: Word) -> EvalResult<Word> {
        let name = self.name(function).to_string();
        if !registry::is_builtin(&name) {
            return Err(ExecutionError::NameNotFound { name: function });
        }

        let args: Vec<Word> = self.all_components(argument)
                                  .into_iter()
                                  .map(|word| self.substitute_bound(word))
                                  .collect();

        for candidate in Candidates::new(self, &args) {
            let types: Vec<ArgType> = candidate.iter().map(|option| option.ty).collect();
            let Some(overload) = registry::find(&name, &types) else {
                continue;
            };
            let expands = candidate.iter().any(|option| option.expand);
            if expands && !overload.signature.ret.is_scalar() {
                continue;
            }

            match self.invoke(overload, &args, &candidate) {
                Err(ExecutionError::LengthMismatch { left, right }) => {
                    debug!("{name} {}: lengths {left} and {right} differ", overload.signature);
                },
                Ok(result) => {
                    debug!("{name} resolved to {}", overload.signature);
                    return Ok(result);
                },
                Err(error) => return Err(error),
            }
        }

        Err(ExecutionError::NoMatchingOverload { function, argument })
    }
}
