use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::parser::{core::ParseState, unary::parse_unary},
};

/// Parses and evaluates addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `state`: Parse state positioned at the start of a term.
///
/// # Returns
/// The accumulated value. The cursor is left on the first character that is
/// neither `+` nor `-` after a term.
pub fn parse_additive(state: &mut ParseState<'_>) -> EvalResult<f64> {
    let mut left = parse_multiplicative(state)?;
    loop {
        if state.cursor.eat('+') {
            left += parse_multiplicative(state)?;
        } else if state.cursor.eat('-') {
            left -= parse_multiplicative(state)?;
        } else {
            break;
        }
    }
    Ok(left)
}

/// Parses and evaluates multiplication-level expressions.
///
/// Handles `*`, `/` and `%` left to right, each taking a single atom as its
/// right operand. `**` is exponentiation: its right operand is a whole
/// multiplicative expression, which makes chains right-associative
/// (`2**3**2` is `2**9`). The base is everything accumulated so far on the
/// left, so `2*2**3` is `(2*2)**3`.
///
/// Because `/` only takes an atom, `8/2*2` is `(8/2)*2`.
///
/// The rule is:
/// ```text
///     multiplicative := unary (("*" | "/" | "%") unary | "**" multiplicative)*
/// ```
///
/// # Parameters
/// - `state`: Parse state positioned at the start of an atom.
///
/// # Returns
/// The accumulated value.
///
/// # Errors
/// - `RuntimeError::ModuloByZero` when the right operand of `%` is exactly
///   zero. Division by zero is not an error and yields an infinity or NaN.
/// - Anything raised by the operands.
#[allow(clippy::float_cmp)]
pub fn parse_multiplicative(state: &mut ParseState<'_>) -> EvalResult<f64> {
    let mut left = parse_unary(state)?;
    loop {
        if state.cursor.eat('/') {
            left /= parse_unary(state)?;
        } else if state.cursor.eat('*') {
            if state.cursor.eat('*') {
                left = left.powf(parse_multiplicative(state)?);
            } else {
                left *= parse_unary(state)?;
            }
        } else if state.cursor.eat('%') {
            let divisor = parse_unary(state)?;
            if divisor == 0.0 {
                return Err(RuntimeError::ModuloByZero.into());
            }
            left %= divisor;
        } else {
            break;
        }
    }
    Ok(left)
}
