use std::collections::BTreeMap;

use tracing::debug;

use crate::{error::RuntimeError, util::ident::is_valid_identifier};

/// Flat namespace of numeric variables owned by one interpreter.
///
/// A name is bound once by [`declare`](Self::declare) and afterwards only
/// overwritten by [`set`](Self::set); bindings are never removed and there is
/// no scoping or shadowing. Iteration yields bindings in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    values: BTreeMap<String, f64>,
}

impl VariableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Binds a new variable.
    ///
    /// # Errors
    /// - [`RuntimeError::VariableAlreadyExists`] if `name` is already bound.
    /// - [`RuntimeError::InvalidIdentifier`] if `name` is not an identifier.
    pub fn declare(&mut self, name: &str, value: f64) -> Result<(), RuntimeError> {
        if self.contains(name) {
            return Err(RuntimeError::VariableAlreadyExists { name: name.to_string() });
        }
        if !is_valid_identifier(name) {
            return Err(RuntimeError::InvalidIdentifier { name: name.to_string() });
        }
        debug!(name, value, "declared variable");
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Reads a bound variable.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] if `name` is not bound.
    pub fn get(&self, name: &str) -> Result<f64, RuntimeError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Overwrites a bound variable and returns the new value.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] if `name` is not bound.
    pub fn set(&mut self, name: &str, value: f64) -> Result<f64, RuntimeError> {
        let slot = self.values
                       .get_mut(name)
                       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })?;
        *slot = value;
        debug!(name, value, "assigned variable");
        Ok(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
