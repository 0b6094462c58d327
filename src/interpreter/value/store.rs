use std::collections::HashMap;

use crate::interpreter::{
    builtins::registry::BUILTIN_CONSTANTS,
    value::{
        compound::{Block, Executor, Tuple},
        word::{Word, WordKind},
    },
};

/// Whether the next fold step has to bind a name.
///
/// The `:` marker is reached before the name it binds (reduction runs right
/// to left), so folding it only arms the store; the following fold step
/// consumes the pending state and performs the binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentState {
    /// No assignment in progress.
    #[default]
    Normal,
    /// The next fold step binds its left-hand name to its right-hand value.
    Pending,
}

/// The arena owning every runtime value of a run.
///
/// Values live in one append-only column per kind. A [`Word`] returned by
/// [`Store::create`] stays valid for the lifetime of the store: columns are
/// never shrunk and slots are never reused.
///
/// Besides the columns the store holds the name binding table and the
/// pending-assignment state used by the fold engine.
///
/// # Example
/// ```
/// use anka::interpreter::value::{store::Store, word::WordKind};
///
/// let mut store = Store::new();
/// let answer = store.create(42);
/// let ratio = store.create(0.5);
///
/// assert_eq!(answer.kind, WordKind::Int);
/// assert_eq!(*store.read::<i32>(answer), 42);
/// assert_eq!(*store.read::<f64>(ratio), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Store {
    integers:       Vec<i32>,
    integer_arrays: Vec<Vec<i32>>,
    doubles:        Vec<f64>,
    double_arrays:  Vec<Vec<f64>>,
    booleans:       Vec<bool>,
    boolean_arrays: Vec<Vec<bool>>,
    names:          Vec<String>,
    tuples:         Vec<Tuple>,
    executors:      Vec<Executor>,
    blocks:         Vec<Block>,
    bindings:       HashMap<String, Word>,
    assignment:     AssignmentState,
}

/// A value type with its own column in the [`Store`].
pub trait Storable: Sized {
    /// The kind tag of words pointing into this column.
    const KIND: WordKind;

    /// The column holding values of this type.
    fn column(store: &Store) -> &Vec<Self>;

    /// Mutable access to the column, used for appending only.
    fn column_mut(store: &mut Store) -> &mut Vec<Self>;
}

macro_rules! storable {
    ($($ty:ty => $kind:ident, $field:ident;)*) => {
        $(
            impl Storable for $ty {
                const KIND: WordKind = WordKind::$kind;

                fn column(store: &Store) -> &Vec<Self> {
                    &store.$field
                }

                fn column_mut(store: &mut Store) -> &mut Vec<Self> {
                    &mut store.$field
                }
            }
        )*
    };
}

storable! {
    i32 => Int, integers;
    Vec<i32> => IntArray, integer_arrays;
    f64 => Double, doubles;
    Vec<f64> => DoubleArray, double_arrays;
    bool => Bool, booleans;
    Vec<bool> => BoolArray, boolean_arrays;
    String => Name, names;
    Tuple => Tuple, tuples;
    Executor => Executor, executors;
    Block => Block, blocks;
}

impl Store {
    /// Creates an empty store with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose binding table already holds the builtin
    /// constants (`pi`, `e`).
    ///
    /// # Example
    /// ```
    /// use anka::interpreter::value::store::Store;
    ///
    /// let store = Store::with_constants();
    /// let pi = store.lookup("pi").unwrap();
    /// assert_eq!(*store.read::<f64>(pi), std::f64::consts::PI);
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let mut store = Self::new();
        for &(name, value) in BUILTIN_CONSTANTS {
            let word = store.create(value);
            store.bind(name, word);
        }
        store
    }

    /// Appends `value` to its column and returns a word pointing at it.
    ///
    /// # Panics
    /// Panics if a column outgrows `u32` indices.
    pub fn create<T: Storable>(&mut self, value: T) -> Word {
        let column = T::column_mut(self);
        let index = u32::try_from(column.len()).unwrap_or_else(|_| {
                                                    panic!("{:?} column is full", T::KIND)
                                                });
        column.push(value);
        Word::new(T::KIND, index)
    }

    /// Returns the value a word points at.
    ///
    /// # Panics
    /// Panics if the word's kind does not match `T`, or if the word does not
    /// belong to this store. Both are programming errors: the evaluator only
    /// reads words whose kind it has checked.
    #[must_use]
    pub fn read<T: Storable>(&self, word: Word) -> &T {
        assert_eq!(word.kind, T::KIND, "read a {:?} word as {:?}", word.kind, T::KIND);
        &T::column(self)[word.slot()]
    }

    /// Returns the identifier behind a name word.
    ///
    /// # Panics
    /// Panics if `word` is not a name.
    #[must_use]
    pub fn name(&self, word: Word) -> &str {
        self.read::<String>(word)
    }

    /// Returns the identifier stored at `index` in the name column.
    ///
    /// # Panics
    /// Panics if the index is out of range.
    #[must_use]
    pub fn name_at(&self, index: u32) -> &str {
        &self.names[index as usize]
    }

    /// Returns the `index`-th component of a word.
    ///
    /// A tuple yields its element if the index is in range. Any other word is
    /// its own single component: it is returned for index `0` only.
    ///
    /// # Example
    /// ```
    /// use anka::interpreter::value::{compound::Tuple, store::Store};
    ///
    /// let mut store = Store::new();
    /// let one = store.create(1);
    /// let two = store.create(2);
    /// let pair = store.create(Tuple::unconnected(vec![one, two]));
    ///
    /// assert_eq!(store.get_component(pair, 1), Some(two));
    /// assert_eq!(store.get_component(pair, 2), None);
    /// assert_eq!(store.get_component(one, 0), Some(one));
    /// assert_eq!(store.get_component(one, 1), None);
    /// ```
    #[must_use]
    pub fn get_component(&self, word: Word, index: usize) -> Option<Word> {
        if word.is_tuple() {
            return self.read::<Tuple>(word).words.get(index).copied();
        }
        (index == 0).then_some(word)
    }

    /// Expands a word into its components: a tuple's elements, or the word
    /// itself.
    #[must_use]
    pub fn all_components(&self, word: Word) -> Vec<Word> {
        if word.is_tuple() {
            self.read::<Tuple>(word).words.clone()
        } else {
            vec![word]
        }
    }

    /// Number of components: the tuple length, or `1` for any other word.
    #[must_use]
    pub fn component_count(&self, word: Word) -> usize {
        if word.is_tuple() {
            self.read::<Tuple>(word).words.len()
        } else {
            1
        }
    }

    /// Looks up a user binding.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Word> {
        self.bindings.get(name).copied()
    }

    /// Returns `true` if `name` has a user binding.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Binds `name` to `word`. Callers are responsible for checking that the
    /// name is free.
    pub fn bind(&mut self, name: &str, word: Word) {
        self.bindings.insert(name.to_string(), word);
    }

    /// Iterates over all user bindings in unspecified order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, Word)> {
        self.bindings.iter().map(|(name, word)| (name.as_str(), *word))
    }

    /// The current assignment state.
    #[must_use]
    pub const fn assignment_state(&self) -> AssignmentState {
        self.assignment
    }

    /// Records that the next fold step has to bind a name.
    pub const fn arm_assignment(&mut self) {
        self.assignment = AssignmentState::Pending;
    }

    /// Consumes the pending assignment, returning whether one was armed.
    pub const fn take_assignment(&mut self) -> bool {
        let pending = matches!(self.assignment, AssignmentState::Pending);
        self.assignment = AssignmentState::Normal;
        pending
    }

    /// Drops a pending assignment left over from an aborted sentence.
    pub const fn reset_assignment(&mut self) {
        self.assignment = AssignmentState::Normal;
    }

    /// The integer column.
    #[must_use]
    pub fn integers(&self) -> &[i32] {
        &self.integers
    }

    /// The integer array column.
    #[must_use]
    pub fn integer_arrays(&self) -> &[Vec<i32>] {
        &self.integer_arrays
    }

    /// The double column.
    #[must_use]
    pub fn doubles(&self) -> &[f64] {
        &self.doubles
    }

    /// The double array column.
    #[must_use]
    pub fn double_arrays(&self) -> &[Vec<f64>] {
        &self.double_arrays
    }

    /// The boolean column.
    #[must_use]
    pub fn booleans(&self) -> &[bool] {
        &self.booleans
    }

    /// The boolean array column.
    #[must_use]
    pub fn boolean_arrays(&self) -> &[Vec<bool>] {
        &self.boolean_arrays
    }

    /// The name column.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The executor column.
    #[must_use]
    pub fn executors(&self) -> &[Executor] {
        &self.executors
    }
}
