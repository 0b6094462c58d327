use crate::interpreter::{
    evaluator::core::EvalResult,
    value::{
        compound::{Executor, Tuple},
        store::Store,
        word::Word,
    },
};

impl Store {
    /// Splits executor words into stages.
    ///
    /// A connected tuple belongs to the word before it (`add[1 _]` is one
    /// stage); every other word starts a new stage.
    ///
    /// # Example
    /// ```
    /// use anka::interpreter::value::{compound::Tuple, store::Store, word::Word};
    ///
    /// let mut store = Store::new();
    /// let add = store.create(String::from("add"));
    /// let one = store.create(1);
    /// let args = store.create(Tuple::connected(vec![one, Word::placeholder(0)], add.index));
    /// let first = Word::placeholder(1);
    ///
    /// let stages = store.stages(&[add, args, first]);
    /// assert_eq!(stages, vec![vec![add, args], vec![first]]);
    /// ```
    #[must_use]
    pub fn stages(&self, words: &[Word]) -> Vec<Vec<Word>> {
        let mut stages: Vec<Vec<Word>> = Vec::new();
        for &word in words {
            let joins_previous = word.is_tuple() && self.read::<Tuple>(word).is_connected();
            match stages.last_mut() {
                Some(stage) if joins_previous => stage.push(word),
                _ => stages.push(vec![word]),
            }
        }
        stages
    }

    /// Folds an executor against `rhs`: every stage receives `rhs` as its
    /// final word and is reduced on its own. The stage results are collected,
    /// in stage order, into a new tuple.
    pub fn fan_out(&mut self, executor: Word, rhs: Word) -> EvalResult<Word> {
        let words = self.read::<Executor>(executor).words.clone();
        let results = self.stages(&words)
                          .into_iter()
                          .map(|stage| self.fold_onto(rhs, &stage))
                          .collect::<EvalResult<Vec<_>>>()?;
        Ok(self.create(Tuple::unconnected(results)))
    }
}
