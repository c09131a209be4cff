use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while reading expression text.
pub enum ParseError {
    /// Found a character that is not valid at this point of the grammar.
    #[error("Invalid syntax at index {offset}.")]
    InvalidSyntax {
        /// Character offset into the whitespace-stripped expression.
        offset: usize,
    },
}

