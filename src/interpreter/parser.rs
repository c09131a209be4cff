/// Shared parse state and the top-level entry point.
///
/// Holds the cursor and the mutable borrow of the variable store that every
/// grammar layer threads through the recursion.
pub mod core;

/// Binary operator layers.
///
/// Implements the additive (`+`, `-`) and multiplicative (`*`, `/`, `%`, `**`)
/// precedence levels.
pub mod binary;

/// Atom layer.
///
/// Numbers, parenthesized groups, unary minus, and identifiers, including
/// variable declaration and assignment.
pub mod unary;
