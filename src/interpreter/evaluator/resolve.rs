use log::debug;

use crate::{
    error::ExecutionError,
    interpreter::{
        builtins::registry,
        evaluator::core::EvalResult,
        value::{
            store::Store,
            word::{Word, WordKind},
        },
    },
};

impl Store {
    /// Turns a word into something that can take part in a fold as a value.
    ///
    /// Names are replaced by their bound word (which is not resolved again).
    /// Placeholders and the assignment marker are never values. Every other
    /// word is returned unchanged.
    ///
    /// # Errors
    /// - `NameNotFound` for a name without a user binding, including builtin
    ///   names.
    /// - `CannotFold` for placeholders and `:`.
    ///
    /// # Example
    /// ```
    /// use anka::{error::ExecutionError, interpreter::value::store::Store};
    ///
    /// let mut store = Store::new();
    /// let name = store.create(String::from("val"));
    /// assert!(matches!(store.resolve_if_foldable(name),
    ///                  Err(ExecutionError::NameNotFound { .. })));
    ///
    /// let value = store.create(42);
    /// store.bind("val", value);
    /// assert_eq!(store.resolve_if_foldable(name).unwrap(), value);
    /// ```
    pub fn resolve_if_foldable(&self, word: Word) -> EvalResult<Word> {
        match word.kind {
            WordKind::Name => {
                self.lookup(self.name(word))
                    .ok_or(ExecutionError::NameNotFound { name: word })
            },
            WordKind::Placeholder | WordKind::Assignment => {
                Err(ExecutionError::CannotFold { left:  word,
                                                 right: None, })
            },
            _ => Ok(word),
        }
    }

    /// Returns `true` if `name` is a builtin or already has a user binding.
    #[must_use]
    pub fn is_taken(&self, name: &str) -> bool {
        registry::is_builtin(name) || self.is_bound(name)
    }

    /// Completes a pending assignment by binding `target` to `value`.
    pub(crate) fn assign(&mut self, target: Word, value: Word) -> EvalResult<Word> {
        if !target.is_name() {
            return Err(ExecutionError::CannotAssign { target, value });
        }
        if self.is_taken(self.name(target)) {
            return Err(ExecutionError::NameAlreadyTaken { name: target });
        }

        let resolved = self.resolve_if_foldable(value)?;
        let name = self.name(target).to_string();
        debug!("bind {name} to {}", self.display(resolved));
        self.bind(&name, resolved);
        Ok(target)
    }
}
