use crate::{
    error::{EvalResult, ParseError},
    util::ident::is_identifier_continue,
};

/// Character returned when the cursor looks past the end of the expression.
///
/// No grammar rule matches it, so every layer stops cleanly at the end.
pub const END: char = '\0';

/// Read position into a whitespace-stripped expression.
///
/// The cursor only ever moves forward. Looking at the position one past the
/// last character yields [`END`] instead of failing, which lets the grammar
/// layers compare the current character without bounds checks.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos:   usize,
}

impl Cursor {
    /// Creates a cursor at offset 0 of `source` with all whitespace removed.
    ///
    /// # Example
    /// ```
    /// use varith::interpreter::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(" 1 +\t2 ");
    /// assert_eq!(cursor.as_string(), "1+2");
    /// assert_eq!(cursor.position(), 0);
    /// ```
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { chars: source.chars().filter(|c| !c.is_whitespace()).collect(),
               pos:   0, }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current character offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// `true` once every character has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The character under the cursor, or [`END`].
    #[must_use]
    pub fn peek(&self) -> char {
        self.chars.get(self.pos).copied().unwrap_or(END)
    }

    /// Moves one character forward. Does nothing at the end.
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Consumes `expected` if it is under the cursor.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == expected && !self.at_end() {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Builds the syntax error for the character under the cursor.
    #[must_use]
    pub const fn invalid_syntax(&self) -> ParseError {
        ParseError::InvalidSyntax { offset: self.pos }
    }

    /// The stripped expression as a `String`.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Consumes a maximal run of characters matching `pred` and returns them.
    pub fn take_while<P>(&mut self, pred: P) -> String
        where P: Fn(char) -> bool
    {
        let start = self.pos;
        while !self.at_end() && pred(self.peek()) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Consumes an identifier body starting at the cursor.
    ///
    /// The caller has already checked that the first character may start an
    /// identifier.
    pub fn take_identifier(&mut self) -> String {
        self.take_while(is_identifier_continue)
    }

    /// Scans a numeric literal: `digits` optionally followed by `.` and more
    /// digits.
    ///
    /// The fractional part may be empty, in which case it counts as zero, so
    /// `5.` reads as `5`. No sign and no exponent are accepted here.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidSyntax`] at the literal's start if the
    /// cursor is not on a digit.
    pub fn scan_number(&mut self) -> EvalResult<f64> {
        let start = self.pos;
        let mut text = self.take_while(|c| c.is_ascii_digit());
        if self.eat('.') {
            text.push('.');
            text.push_str(&self.take_while(|c| c.is_ascii_digit()));
        }
        text.parse::<f64>()
            .map_err(|_| ParseError::InvalidSyntax { offset: start }.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::EvalError;

    #[test]
    fn strips_every_kind_of_whitespace() {
        let cursor = Cursor::new(" a =\t1\n+ 2\r\n");
        assert_eq!(cursor.as_string(), "a=1+2");
        assert!(!cursor.is_empty());
        assert!(Cursor::new(" \t\n").is_empty());
    }

    #[test]
    fn peeking_past_the_end_yields_sentinel() {
        let mut cursor = Cursor::new("7");
        assert_eq!(cursor.peek(), '7');
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.peek(), END);
        cursor.advance();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn scans_integer_and_fractional_literals() {
        let mut cursor = Cursor::new("12.5+3");
        assert_eq!(cursor.scan_number().unwrap(), 12.5);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.peek(), '+');

        let mut cursor = Cursor::new("42");
        assert_eq!(cursor.scan_number().unwrap(), 42.0);
        assert!(cursor.at_end());
    }

    #[test]
    fn missing_fraction_reads_as_zero() {
        let mut cursor = Cursor::new("5.*2");
        assert_eq!(cursor.scan_number().unwrap(), 5.0);
        assert_eq!(cursor.peek(), '*');
    }

    #[test]
    fn stops_before_a_second_dot() {
        let mut cursor = Cursor::new("1.2.3");
        assert_eq!(cursor.scan_number().unwrap(), 1.2);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn non_digit_start_is_a_syntax_error() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.scan_number().unwrap_err(),
                   EvalError::from(ParseError::InvalidSyntax { offset: 0 }));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn identifiers_stop_at_operators() {
        let mut cursor = Cursor::new("_rate2=3");
        assert_eq!(cursor.take_identifier(), "_rate2");
        assert!(cursor.eat('='));
        assert!(!cursor.eat('='));
    }
}
