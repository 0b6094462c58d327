use crate::{
    error::ExecutionError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            compound::Tuple,
            store::Store,
            word::{Word, WordKind},
        },
    },
    util::num::placeholder_to_index,
};

impl Store {
    /// Folds a standalone placeholder against `rhs`.
    ///
    /// `_N` picks component `N` (one-based) of a tuple. Against any other
    /// word only `_1` is valid and yields the word itself; the bare `_` is
    /// never valid on its own.
    ///
    /// # Errors
    /// - `CannotFoldPlaceholderToPlaceholder` if `rhs` is a placeholder.
    /// - `PlaceholderOutOfRange` if the component does not exist.
    ///
    /// # Example
    /// ```
    /// use anka::interpreter::value::{compound::Tuple, store::Store, word::Word};
    ///
    /// let mut store = Store::new();
    /// let a = store.create(1);
    /// let b = store.create(2);
    /// let pair = store.create(Tuple::unconnected(vec![a, b]));
    ///
    /// assert_eq!(store.fold_placeholder(Word::placeholder(2), pair).unwrap(), b);
    /// assert_eq!(store.fold_placeholder(Word::placeholder(1), a).unwrap(), a);
    /// assert!(store.fold_placeholder(Word::placeholder(0), a).is_err());
    /// ```
    pub fn fold_placeholder(&self, placeholder: Word, rhs: Word) -> EvalResult<Word> {
        let out_of_range = ExecutionError::PlaceholderOutOfRange { placeholder,
                                                                   argument: rhs };

        match rhs.kind {
            WordKind::Placeholder => {
                Err(ExecutionError::CannotFoldPlaceholderToPlaceholder { lhs: placeholder,
                                                                         rhs })
            },
            WordKind::Tuple => {
                let words = &self.read::<Tuple>(rhs).words;
                placeholder_to_index(placeholder.index).and_then(|index| words.get(index))
                                                       .copied()
                                                       .ok_or(out_of_range)
            },
            _ if placeholder.index == 1 => Ok(rhs),
            _ => Err(out_of_range),
        }
    }
}
