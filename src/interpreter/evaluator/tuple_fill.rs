use log::trace;

use crate::{
    error::ExecutionError,
    interpreter::{
        builtins::registry,
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
    /// Fills a tuple from an incoming argument (currying).
    ///
    /// The incoming word is split into its components. Each placeholder in
    /// the tuple is replaced: `_` by all components, `_N` by component `N`.
    /// Other words are copied.
    ///
    /// A tuple written directly after a function name is then topped up to
    /// that function's largest arity with the leading components no
    /// placeholder consumed, so that `add[10] 20` becomes `[10 20]`.
    ///
    /// # Parameters
    /// - `tuple`: The tuple word on the left of the fold.
    /// - `rhs`: The incoming argument.
    ///
    /// # Returns
    /// A new, unconnected tuple.
    ///
    /// # Errors
    /// `PlaceholderOutOfRange` if an `_N` has no matching component.
    pub fn fill_tuple(&mut self, tuple: Word, rhs: Word) -> EvalResult<Word> {
        let Tuple { words, connected_name } = self.read::<Tuple>(tuple).clone();
        let incoming = self.all_components(rhs);
        let mut used = vec![false; incoming.len()];
        let mut filled = Vec::with_capacity(words.len() + incoming.len());

        for word in words {
            if word.kind != WordKind::Placeholder {
                filled.push(word);
                continue;
            }
            if word.index == 0 {
                filled.extend_from_slice(&incoming);
                used.fill(true);
                continue;
            }
            let index = placeholder_to_index(word.index).filter(|&index| index < incoming.len())
                                                        .ok_or(ExecutionError::PlaceholderOutOfRange { placeholder: word,
                                                                                                       argument:    rhs, })?;
            filled.push(incoming[index]);
            used[index] = true;
        }

        if let Some(name_index) = connected_name {
            let arity = registry::max_arity(self.name_at(name_index));
            let deficit = arity.saturating_sub(filled.len());
            let unused = incoming.iter()
                                 .zip(&used)
                                 .filter(|&(_, &consumed)| !consumed)
                                 .map(|(&word, _)| word)
                                 .take(deficit);
            filled.extend(unused);
        }

        trace!("filled tuple has {} words", filled.len());
        Ok(self.create(Tuple::unconnected(filled)))
    }
}
