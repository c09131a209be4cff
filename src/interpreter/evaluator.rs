use tracing::trace;

use crate::{
    error::EvalResult,
    interpreter::{
        parser::core::{ParseState, parse_statement},
        store::VariableStore,
    },
    util::ident::is_valid_identifier,
};

/// Evaluates arithmetic expressions against its own set of variables.
///
/// Each interpreter owns one [`VariableStore`]. Bindings made by one
/// interpreter are never visible to another.
///
/// ## Usage
///
/// `Interpreter` is created once and reused for any number of expressions.
/// Variables declared on one line stay available on the following ones.
///
/// ```
/// use varith::Interpreter;
///
/// let mut interpreter = Interpreter::new();
/// assert_eq!(interpreter.evaluate("rate = 2 ** 3").unwrap(), 8.0);
/// assert_eq!(interpreter.evaluate("rate * (1 + 1)").unwrap(), 16.0);
/// assert_eq!(interpreter.get_variable("rate").unwrap(), 8.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    variables: VariableStore,
}

impl Interpreter {
    /// Creates an interpreter with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a single expression.
    ///
    /// All whitespace is removed first; an expression that is empty afterwards
    /// evaluates to `0`.
    ///
    /// # Errors
    /// Returns the first syntax or runtime error met. Declarations and
    /// assignments completed before the failure are kept.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn evaluate(&mut self, expression: &str) -> EvalResult<f64> {
        let mut state = ParseState::new(expression, &mut self.variables);
        parse_statement(&mut state)
    }

    /// Evaluates `lines` in order and returns the value of the last one.
    ///
    /// Earlier lines only matter for the variables they declare or assign. An
    /// empty batch evaluates to `0`.
    ///
    /// # Errors
    /// Stops at the first failing line and returns its error.
    ///
    /// # Example
    /// ```
    /// use varith::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// let last = interpreter.evaluate_lines(["a=1", "b=2", "a+b"]).unwrap();
    /// assert_eq!(last, 3.0);
    /// assert_eq!(interpreter.evaluate_lines(Vec::<&str>::new()).unwrap(), 0.0);
    /// ```
    #[tracing::instrument(level = "trace", skip(self, lines))]
    pub fn evaluate_lines<I, S>(&mut self, lines: I) -> EvalResult<f64>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let mut last = 0.0;
        for line in lines {
            last = self.evaluate(line.as_ref())?;
        }
        trace!(last, "evaluated batch");
        Ok(last)
    }

    /// Evaluates `lines` in order and returns every line's value.
    ///
    /// # Errors
    /// Stops at the first failing line and returns its error; values of the
    /// lines before it are discarded.
    #[tracing::instrument(level = "trace", skip(self, lines))]
    pub fn evaluate_each<I, S>(&mut self, lines: I) -> EvalResult<Vec<f64>>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        lines.into_iter()
             .map(|line| self.evaluate(line.as_ref()))
             .collect()
    }

    /// Evaluates `lines` in order, writing the value of line `i` to `out[i]`.
    ///
    /// `out` is resized to `lines.len()` before evaluation starts.
    ///
    /// # Errors
    /// Stops at the first failing line and returns its error. The contents of
    /// `out` are unspecified in that case.
    #[tracing::instrument(level = "trace", skip(self, lines, out))]
    pub fn evaluate_lines_into<S>(&mut self, lines: &[S], out: &mut Vec<f64>) -> EvalResult<()>
        where S: AsRef<str>
    {
        out.resize(lines.len(), 0.0);
        for (line, slot) in lines.iter().zip(out.iter_mut()) {
            *slot = self.evaluate(line.as_ref())?;
        }
        Ok(())
    }

    /// Returns `true` if `name` is bound in this interpreter.
    #[must_use]
    pub fn variable_exists(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    /// Declares `name` with `value`.
    ///
    /// # Errors
    /// - `RuntimeError::VariableAlreadyExists` if `name` is already bound.
    /// - `RuntimeError::InvalidIdentifier` if `name` is not an identifier.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_variable(&mut self, name: &str, value: f64) -> EvalResult<()> {
        Ok(self.variables.declare(name, value)?)
    }

    /// Evaluates `expression` and declares `name` with the result.
    ///
    /// The expression is evaluated as a line of its own, so it may itself
    /// declare variables.
    ///
    /// # Errors
    /// Any error from evaluating `expression`, then the errors of
    /// [`declare_variable`](Self::declare_variable).
    ///
    /// # Example
    /// ```
    /// use varith::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.declare_variable_from("area", "3 * (2 + 2)").unwrap();
    /// assert_eq!(interpreter.get_variable("area").unwrap(), 12.0);
    /// ```
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn declare_variable_from(&mut self, name: &str, expression: &str) -> EvalResult<()> {
        let value = self.evaluate(expression)?;
        self.declare_variable(name, value)
    }

    /// Reads the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if `name` is not bound.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn get_variable(&self, name: &str) -> EvalResult<f64> {
        Ok(self.variables.get(name)?)
    }

    /// Overwrites the value bound to `name` and returns it.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if `name` is not bound.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn set_variable(&mut self, name: &str, value: f64) -> EvalResult<f64> {
        Ok(self.variables.set(name, value)?)
    }

    /// Iterates over all bindings in name order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter()
    }

    /// Checks whether `name` could be declared as a variable.
    ///
    /// Purely syntactic; no interpreter is needed.
    #[must_use]
    pub fn is_valid_identifier(name: &str) -> bool {
        is_valid_identifier(name)
    }
}
