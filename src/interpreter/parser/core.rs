use tracing::trace;

use crate::{
    error::EvalResult,
    interpreter::{cursor::Cursor, parser::binary::parse_additive, store::VariableStore},
};

/// Mutable state of one top-level parse.
///
/// The grammar layers evaluate while they parse, so the state carries both
/// the read position and the store that declarations and assignments write
/// to. A fresh state is built for every expression; nothing survives the call
/// except the changes made to the store.
#[derive(Debug)]
pub struct ParseState<'s> {
    /// Read position into the stripped expression.
    pub cursor: Cursor,
    /// Variables visible to, and mutated by, the expression.
    pub store:  &'s mut VariableStore,
}

impl<'s> ParseState<'s> {
    /// Strips `source` and positions the cursor at its first character.
    pub fn new(source: &str, store: &'s mut VariableStore) -> Self {
        Self { cursor: Cursor::new(source),
               store }
    }

    /// Returns `true` if `offset` is the first character of the whole
    /// expression, the only place where a declaration may appear.
    #[must_use]
    pub const fn is_expression_start(offset: usize) -> bool {
        offset == 0
    }
}

/// Parses and evaluates one complete expression.
///
/// This is the entry point for a single line. An expression that is empty
/// after whitespace removal evaluates to `0`. Otherwise parsing starts at the
/// additive level, and the value is whatever that level returns. Characters
/// the additive level stops at are left unread, so `2)` is `2` and `(2+3)4` is
/// `5`.
///
/// Grammar: `statement := additive?`
///
/// # Parameters
/// - `state`: Fresh parse state positioned at offset 0.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `ParseError::InvalidSyntax` from any lower layer.
/// - Any runtime error raised while evaluating the expression. Store changes
///   made before the failure are kept.
pub fn parse_statement(state: &mut ParseState<'_>) -> EvalResult<f64> {
    if state.cursor.is_empty() {
        return Ok(0.0);
    }
    let value = parse_additive(state)?;
    trace!(expression = %state.cursor.as_string(),
           consumed = state.cursor.position(),
           value,
           "evaluated expression");
    Ok(value)
}
