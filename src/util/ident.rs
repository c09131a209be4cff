/// Returns `true` if `c` may begin an identifier (`[A-Za-z_]`).
#[must_use]
pub const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` if `c` may appear after the first character of an
/// identifier (`[A-Za-z0-9_]`).
#[must_use]
pub const fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks whether `name` is a syntactically valid identifier.
///
/// A valid identifier is non-empty, starts with an ASCII letter or `_`, and
/// contains only ASCII letters, digits and `_` afterwards.
///
/// ## Example
/// ```
/// use varith::util::ident::is_valid_identifier;
///
/// assert!(is_valid_identifier("_ok"));
/// assert!(is_valid_identifier("rate2"));
/// assert!(!is_valid_identifier("1abc"));
/// assert!(!is_valid_identifier(""));
/// assert!(!is_valid_identifier("a-b"));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_continue)
}
