/// The cursor module walks the stripped expression text.
///
/// Whitespace is removed once up front; the cursor then hands characters to
/// the grammar layers one at a time, reports offsets for syntax errors and
/// scans number literals and identifier bodies.
pub mod cursor;
/// The evaluator module exposes the public interpreter.
///
/// [`Interpreter`](evaluator::Interpreter) owns a variable store and offers
/// single-line, batch, and direct variable access entry points.
///
/// # Responsibilities
/// - Builds a fresh parse state for every expression.
/// - Runs batches of lines in order, stopping at the first failure.
/// - Declares, reads and assigns variables without going through text.
pub mod evaluator;
/// The parser module evaluates expressions by recursive descent.
///
/// There is no token stream and no syntax tree: each grammar layer reads
/// characters from the cursor and returns a number directly. Declarations and
/// assignments take effect the moment their right-hand side has been
/// evaluated.
///
/// # Responsibilities
/// - Implements the additive, multiplicative and atom precedence levels.
/// - Applies the positional declaration and assignment rules.
/// - Reports syntax errors with the offset of the offending character.
pub mod parser;
/// The store module holds variable bindings.
///
/// A [`VariableStore`](store::VariableStore) maps identifiers to numbers. It
/// validates names on declaration and refuses to rebind or to touch unknown
/// names.
pub mod store;
