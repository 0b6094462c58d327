use log::{debug, trace};

use crate::{
    error::ExecutionError,
    interpreter::value::{
        compound::{Block, Sentence},
        store::Store,
        word::{Word, WordKind},
    },
};

pub type EvalResult<T> = Result<T, ExecutionError>;

impl Store {
    /// Executes a program.
    ///
    /// Every sentence is reduced right to left against this store, so names
    /// bound by one sentence are visible to the next. The result of the last
    /// sentence is resolved once more (a bare user name yields its value) and
    /// returned. An empty program yields `None`.
    ///
    /// # Parameters
    /// - `sentences`: The parsed program, in source order.
    ///
    /// # Returns
    /// The word produced by the last sentence, if any.
    ///
    /// # Example
    /// ```
    /// use anka::interpreter::{
    ///     parser::core::parse_program,
    ///     value::{store::Store, word::WordKind},
    /// };
    ///
    /// let mut store = Store::with_constants();
    /// let sentences = parse_program("val: 42\nadd[val _] 10", &mut store).unwrap();
    /// let result = store.execute(&sentences).unwrap().unwrap();
    ///
    /// assert_eq!(result.kind, WordKind::Int);
    /// assert_eq!(*store.read::<i32>(result), 52);
    /// ```
    pub fn execute(&mut self, sentences: &[Sentence]) -> EvalResult<Option<Word>> {
        let mut result = None;
        for sentence in sentences {
            self.reset_assignment();
            if let Some(word) = self.reduce(&sentence.words)? {
                debug!("sentence result: {}", self.display(word));
                result = Some(word);
            }
        }
        self.reset_assignment();

        result.map(|word| self.resolve_if_foldable(word)).transpose()
    }

    /// Reduces a word sequence right to left into a single word.
    ///
    /// The last word is the initial accumulator; every word before it is
    /// folded onto the accumulator in turn. An empty sequence yields `None`.
    pub fn reduce(&mut self, words: &[Word]) -> EvalResult<Option<Word>> {
        let Some((&last, rest)) = words.split_last() else {
            return Ok(None);
        };
        self.fold_onto(last, rest).map(Some)
    }

    /// Folds each of `words`, last first, onto `seed`.
    pub(crate) fn fold_onto(&mut self, seed: Word, words: &[Word]) -> EvalResult<Word> {
        words.iter()
             .rev()
             .try_fold(seed, |acc, &word| self.fold(word, acc))
    }

    /// Folds one word onto the accumulator.
    ///
    /// The rules are tried in order and the first that applies wins:
    /// 1. a pending assignment binds `lhs` (which must be a free name) to the
    ///    resolved `rhs` and yields `lhs`;
    /// 2. `:` arms the assignment and passes `rhs` through;
    /// 3. a name on the right is resolved first;
    /// 4. a user-bound name on the left is resolved first;
    /// 5. a block on the right is reduced with `lhs` in front of its body;
    /// 6. a builtin name on the left is called with `rhs` as its argument;
    /// 7. a tuple on the left is filled from `rhs`;
    /// 8. a placeholder on the left picks a component of `rhs`;
    /// 9. an executor on the left fans `rhs` out to its stages;
    /// 10. a block on the left is reduced with `rhs` after its body.
    ///
    /// Anything else cannot be folded.
    ///
    /// # Parameters
    /// - `lhs`: The word being folded.
    /// - `rhs`: The accumulator.
    ///
    /// # Returns
    /// The new accumulator.
    pub fn fold(&mut self, lhs: Word, rhs: Word) -> EvalResult<Word> {
        trace!("fold {} onto {}", self.display(lhs), self.display(rhs));

        if self.take_assignment() {
            return self.assign(lhs, rhs);
        }

        if lhs.kind == WordKind::Assignment {
            self.arm_assignment();
            return Ok(rhs);
        }

        if rhs.is_name() {
            let resolved = self.resolve_if_foldable(rhs)?;
            return self.fold(lhs, resolved);
        }

        if lhs.is_name()
           && let Some(bound) = self.lookup(self.name(lhs))
        {
            return self.fold(bound, rhs);
        }

        if rhs.kind == WordKind::Block {
            let body = self.read::<Block>(rhs).words.clone();
            let Some((&last, rest)) = body.split_last() else {
                return Ok(lhs);
            };
            let mut words = Vec::with_capacity(body.len());
            words.push(lhs);
            words.extend_from_slice(rest);
            return self.fold_onto(last, &words);
        }

        match lhs.kind {
            WordKind::Name => self.call_builtin(lhs, rhs),
            WordKind::Tuple => self.fill_tuple(lhs, rhs),
            WordKind::Placeholder => self.fold_placeholder(lhs, rhs),
            WordKind::Executor => self.fan_out(lhs, rhs),
            WordKind::Block => {
                let body = self.read::<Block>(lhs).words.clone();
                self.fold_onto(rhs, &body)
            },
            _ => Err(ExecutionError::CannotFold { left:  lhs,
                                                  right: Some(rhs), }),
        }
    }
}
