/// Parsing errors.
///
/// Defines the error raised when the stripped expression text does not match
/// the grammar: a character that cannot start an atom, a missing closing
/// parenthesis, or input left over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while a well-formed expression is being
/// evaluated: unknown or duplicate variables, rejected identifiers, and modulo
/// by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a top-level evaluation call.
///
/// Every grammar layer returns this type so that `?` carries both parse and
/// runtime failures straight up to the caller of
/// [`Interpreter::evaluate`](crate::interpreter::evaluator::Interpreter::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The expression text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is well-formed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type used by every grammar layer and evaluator entry point.
pub type EvalResult<T> = Result<T, EvalError>;
