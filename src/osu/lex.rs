//! Lexical layer of the `.osu` format: the header line, line cursors and value primitives.
//!
//! Raw [String] == [`read_header`] ==> first content line == [`Cursor`] ==> lines ==
//! [parse](crate::osu::parse) ==> [`Beatmap`](crate::osu::model::Beatmap)

pub mod cursor;
pub mod primitive;

use super::error::{ParseError, Result};

use self::cursor::is_line_terminator;

pub use self::cursor::{Cursor, FieldCursor};

/// The literal every beatmap starts with.
pub const HEADER_PREFIX: &str = "osu file format v";

/// The only format version this crate reads.
pub const SUPPORTED_VERSION: &str = "14";

/// Upper bound of the version token length, including its line terminator.
pub const MAX_VERSION_LEN: usize = 16;

/// The validated header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    /// The version token, e.g. `14`.
    pub version: &'a str,
    /// Byte offset of the first content line, past the header line terminator.
    pub content_start: usize,
}

/// Validates the `osu file format v<version>` line at the start of `source`.
///
/// # Errors
///
/// - [`ParseError::MalformedHeader`] if the prefix does not match, or the version token is empty
///   or longer than [`MAX_VERSION_LEN`] bytes with its terminator.
/// - [`ParseError::UnsupportedVersion`] if the version is not [`SUPPORTED_VERSION`].
pub fn read_header(source: &str) -> Result<Header<'_>> {
    let rest = source
        .strip_prefix(HEADER_PREFIX)
        .ok_or(ParseError::MalformedHeader)?;
    let version_len = rest
        .bytes()
        .take(MAX_VERSION_LEN)
        .position(is_line_terminator)
        .or_else(|| (rest.len() < MAX_VERSION_LEN).then_some(rest.len()))
        .ok_or(ParseError::MalformedHeader)?;
    let version = rest.get(..version_len).ok_or(ParseError::MalformedHeader)?;
    if version.is_empty() {
        return Err(ParseError::MalformedHeader);
    }
    if version != SUPPORTED_VERSION {
        return Err(ParseError::UnsupportedVersion(version.to_string()));
    }
    let mut cursor = Cursor::at(source, HEADER_PREFIX.len() + version_len);
    cursor.advance_to_next_line(false);
    Ok(Header {
        version,
        content_start: cursor.index(),
    })
}
