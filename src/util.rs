/// Identifier classification helpers.
///
/// This module holds the character classes shared by the scanner and the
/// variable store: which characters may start an identifier, which may
/// continue one, and whether a complete name is a valid identifier.
///
/// # Responsibilities
/// - Classify single characters for the identifier grammar.
/// - Validate whole names before they are bound in a store.
pub mod ident;
