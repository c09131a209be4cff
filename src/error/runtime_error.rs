use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign a variable that was never declared.
    #[error("No variable with name '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to declare a variable whose name is already bound.
    #[error("Variable with identifier '{name}' already exists.")]
    VariableAlreadyExists {
        /// The name of the variable.
        name: String,
    },
    /// Tried to declare a variable under a name that is not an identifier.
    #[error("Invalid variable identifier: '{name}'.")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
    },
    /// The right-hand side of `%` evaluated to exactly zero.
    #[error("Modulo by zero.")]
    ModuloByZero,
}
