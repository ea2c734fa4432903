//! Value primitives shared by every section decoder.
//!
//! Numeric parsers accept blanks around the value. Strings are copied as is.

use crate::osu::{
    command::{Decimal, Rgb},
    error::ValueError,
};

use super::cursor::trim_blank;

/// Parses a decimal integer into any integer type `T` it fits in.
///
/// # Errors
///
/// Returns [`ValueError::Integer`] if `text` is not an integer or is out of the range of `T`.
pub fn parse_integer<T: TryFrom<i64>>(text: &str) -> Result<T, ValueError> {
    let trimmed = trim_blank(text);
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(|value| T::try_from(value).ok())
        .ok_or_else(|| ValueError::Integer(text.to_string()))
}

/// Parses a decimal number such as `-33.5`.
///
/// # Errors
///
/// Returns [`ValueError::Decimal`] if `text` is not a decimal number. Special values such as
/// `NaN` or `inf` and exponent notation are not decimal numbers.
pub fn parse_decimal(text: &str) -> Result<Decimal, ValueError> {
    let err = || ValueError::Decimal(text.to_string());
    let trimmed = trim_blank(text);
    let plain = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.'));
    if !plain || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    trimmed.parse().map_err(|_| err())
}

/// Parses a boolean written as `0` or `1`.
///
/// # Errors
///
/// Returns [`ValueError::Boolean`] for any other token.
pub fn parse_bool(text: &str) -> Result<bool, ValueError> {
    match trim_blank(text) {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ValueError::Boolean(text.to_string())),
    }
}

/// Parses a colour written as `r,g,b`, each component in `0..=255`.
///
/// # Errors
///
/// Returns [`ValueError::Rgb`] if there are not exactly three valid components.
pub fn parse_rgb(text: &str) -> Result<Rgb, ValueError> {
    let err = || ValueError::Rgb(text.to_string());
    let mut components = text.split(',').map(parse_integer::<u8>);
    let mut next = || components.next().ok_or_else(err)?.map_err(|_| err());
    let rgb = Rgb::new(next()?, next()?, next()?);
    if components.next().is_some() {
        return Err(err());
    }
    Ok(rgb)
}

/// Copies a value out of the source so that it outlives the input buffer.
#[must_use]
pub fn copy_string(text: &str) -> String {
    text.to_owned()
}

/// Reads an optionally negative decimal integer from the start of `text`, stopping at the first
/// non-digit character.
///
/// Returns the value and the count of bytes read, or `None` if no digit is found or the value
/// overflows.
#[must_use]
pub fn parse_integer_prefix(text: &str) -> Option<(i64, usize)> {
    let sign_len = usize::from(text.starts_with('-'));
    let digits_len = text
        .bytes()
        .skip(sign_len)
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    let len = sign_len + digits_len;
    let value = text.get(..len)?.parse().ok()?;
    Some((value, len))
}
