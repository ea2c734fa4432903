//! Cursors over the source text.
//!
//! [`Cursor`] walks the whole source line by line. [`FieldCursor`] walks the fields of a single
//! line. Both only stop at ASCII bytes, so every slice they return lies on `char` boundaries.

use super::primitive::parse_integer_prefix;

/// Returns `true` for `\r` and `\n`. The end of input terminates a line too.
pub(crate) const fn is_line_terminator(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}

/// Returns `true` for horizontal whitespace.
pub(crate) const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// Trims blanks at both ends of `text`.
pub(crate) fn trim_blank(text: &str) -> &str {
    text.trim_matches([' ', '\t'])
}

/// A cursor walking over the lines of the source.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source str.
    source: &'a str,
    /// The byte index position.
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source, index: 0 }
    }

    /// Creates a cursor at `index` of `source`, which must be a `char` boundary.
    #[must_use]
    pub const fn at(source: &'a str, index: usize) -> Self {
        Self { source, index }
    }

    /// Returns the current byte index in the source string.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if no byte is left.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Returns the unread part of the source.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.index..).unwrap_or_default()
    }

    /// Moves past the next line terminator, or to the end of input.
    ///
    /// With `require_non_blank`, returns `false` and stops as soon as a non-blank character is met
    /// before the terminator. That is, leftover text on a line which must already be consumed.
    pub fn advance_to_next_line(&mut self, require_non_blank: bool) -> bool {
        let bytes = self.source.as_bytes();
        while let Some(&byte) = bytes.get(self.index) {
            if is_line_terminator(byte) {
                self.index += 1;
                return true;
            }
            if require_non_blank && !is_blank(byte) {
                return false;
            }
            self.index += 1;
        }
        true
    }

    /// Returns the index of the terminator of the current line, or the source length.
    #[must_use]
    pub fn line_end(&self) -> usize {
        self.remaining()
            .bytes()
            .position(is_line_terminator)
            .map_or(self.source.len(), |pos| self.index + pos)
    }

    /// Returns the index just past the last non-blank character before the line terminator.
    ///
    /// If the rest of the line is blank, it is the current index.
    #[must_use]
    pub fn trim_trailing_blank(&self) -> usize {
        let end = self.line_end();
        self.source
            .get(self.index..end)
            .unwrap_or_default()
            .bytes()
            .rposition(|byte| !is_blank(byte))
            .map_or(self.index, |pos| self.index + pos + 1)
    }

    /// Moves through the current line and returns its content without the terminator.
    pub fn next_line(&mut self) -> &'a str {
        let end = self.line_end();
        let line = self.source.get(self.index..end).unwrap_or_default();
        self.index = end;
        self.advance_to_next_line(false);
        line
    }
}

/// A cursor walking over the delimited fields of one line.
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    /// The line being split.
    line: &'a str,
    /// The byte index position in `line`.
    index: usize,
    /// Whether the last field was already returned.
    exhausted: bool,
}

impl<'a> FieldCursor<'a> {
    /// Creates a cursor at the start of `line`.
    #[must_use]
    pub const fn new(line: &'a str) -> Self {
        Self {
            line,
            index: 0,
            exhausted: false,
        }
    }

    /// Returns the current byte index in the line.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` once the last field of the line has been taken.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns the unread part of the line.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        self.line.get(self.index..).unwrap_or_default()
    }

    /// Takes the text up to the next `delimiter`, moving past the delimiter.
    ///
    /// The last field runs to the end of the line. Returns `None` after the last field.
    pub fn split_next_field(&mut self, delimiter: u8) -> Option<&'a str> {
        if self.exhausted {
            return None;
        }
        let rest = self.rest();
        if let Some(pos) = rest.bytes().position(|byte| byte == delimiter) {
            self.index += pos + 1;
            rest.get(..pos)
        } else {
            self.index = self.line.len();
            self.exhausted = true;
            Some(rest)
        }
    }

    /// Like [`Self::split_next_field`], but a field starting with `"` runs to the closing `"`
    /// regardless of delimiters inside. The quotes are not included in the returned field.
    ///
    /// Returns `None` if the quote is not closed, or if the closing quote is not followed by
    /// `delimiter` or the end of line.
    pub fn split_next_quoted_field(&mut self, delimiter: u8) -> Option<&'a str> {
        if self.exhausted {
            return None;
        }
        let rest = self.rest();
        let Some(quoted) = rest.strip_prefix('"') else {
            return self.split_next_field(delimiter);
        };
        let close = quoted.find('"')?;
        let inner = quoted.get(..close)?;
        match quoted.as_bytes().get(close + 1) {
            None => {
                self.index = self.line.len();
                self.exhausted = true;
            }
            Some(&byte) if byte == delimiter => self.index += close + 3,
            Some(_) => return None,
        }
        Some(inner)
    }

    /// Returns the next byte without consuming it.
    #[must_use]
    pub fn peek_byte(&self) -> Option<u8> {
        self.line.as_bytes().get(self.index).copied()
    }

    /// Consumes the next byte if it equals `expected`.
    pub fn eat_byte(&mut self, expected: u8) -> bool {
        let matched = self.peek_byte() == Some(expected);
        if matched {
            self.index += 1;
        }
        matched
    }

    /// Consumes and returns the next byte if it is ASCII.
    pub fn next_ascii(&mut self) -> Option<u8> {
        let byte = self.peek_byte().filter(u8::is_ascii)?;
        self.index += 1;
        Some(byte)
    }

    /// Reads an optionally negative integer up to the first non-digit character.
    pub fn next_integer_prefix(&mut self) -> Option<i64> {
        let (value, len) = parse_integer_prefix(self.rest())?;
        self.index += len;
        Some(value)
    }

    /// Consumes the rest of the line.
    pub fn take_rest(&mut self) -> &'a str {
        let rest = self.rest();
        self.index = self.line.len();
        self.exhausted = true;
        rest
    }
}
