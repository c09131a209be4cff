use crate::{
    error::EvalResult,
    interpreter::parser::{binary::parse_additive, core::ParseState},
    util::ident::is_identifier_start,
};

/// Parses and evaluates an atom.
///
/// Dispatches on the character under the cursor:
/// - a digit starts a number literal,
/// - `-` negates the following atom (repeatable, so `--3` is `3`),
/// - `(` opens a group holding a full expression,
/// - a letter or `_` starts an identifier.
///
/// Unary minus binds tighter than every binary operator, including `**`:
/// `-2**2` is `(-2)**2`.
///
/// Grammar:
/// ```text
///     unary := NUMBER
///            | "-" unary
///            | "(" additive ")"
///            | identifier
/// ```
/// # Parameters
/// - `state`: Parse state positioned at the start of an atom.
///
/// # Returns
/// The value of the atom.
///
/// # Errors
/// Returns `ParseError::InvalidSyntax` at the cursor if no atom can start
/// here, and propagates errors from nested expressions and identifiers.
pub fn parse_unary(state: &mut ParseState<'_>) -> EvalResult<f64> {
    match state.cursor.peek() {
        c if c.is_ascii_digit() => state.cursor.scan_number(),
        '-' => {
            state.cursor.advance();
            Ok(-parse_unary(state)?)
        },
        '(' => parse_grouping(state),
        c if is_identifier_start(c) => parse_identifier(state),
        _ => Err(state.cursor.invalid_syntax().into()),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// # Errors
/// `ParseError::InvalidSyntax` at the cursor if the closing `)` is missing.
fn parse_grouping(state: &mut ParseState<'_>) -> EvalResult<f64> {
    state.cursor.advance();
    let value = parse_additive(state)?;
    if !state.cursor.eat(')') {
        return Err(state.cursor.invalid_syntax().into());
    }
    Ok(value)
}

/// Parses an identifier together with any declaration or assignment it
/// introduces.
///
/// Supported forms:
///
/// - `name = expression` at offset 0 with `name` unbound: declares `name`
///   with the value of the rest of the line.
/// - `name = expression` anywhere else: assigns to the existing `name`.
/// - `name` as the entire expression with `name` unbound: declares `name`
///   as `0`.
/// - `name`: reads the existing `name`.
///
/// Only the first character of the whole expression counts as the start, so
/// `(x=1)` or `2+x=1` never declare.
///
/// # Returns
/// The value bound to `name` once any declaration or assignment is done.
///
/// # Errors
/// `RuntimeError::UnknownVariable` when `name` must already exist but does
/// not. For assignments this is reported after the right-hand side has been
/// evaluated, so anything the right-hand side declared or assigned is kept.
fn parse_identifier(state: &mut ParseState<'_>) -> EvalResult<f64> {
    let start = state.cursor.position();
    let name = state.cursor.take_identifier();
    let at_start = ParseState::is_expression_start(start);
    let exists = state.store.contains(&name);

    if state.cursor.eat('=') {
        if at_start && !exists {
            let value = parse_additive(state)?;
            state.store.declare(&name, value)?;
            return Ok(value);
        }
        let value = parse_additive(state)?;
        return Ok(state.store.set(&name, value)?);
    }

    if at_start && !exists && state.cursor.at_end() {
        state.store.declare(&name, 0.0)?;
        return Ok(0.0);
    }
    Ok(state.store.get(&name)?)
}
