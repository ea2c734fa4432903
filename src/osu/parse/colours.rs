//! Decoder of `[Colours]`.
//!
//! Keys here are separated from their values by ` : `. Combo colours are keyed `Combo<N>`, where
//! `N` is the 1-based slot read straight out of the key.

use crate::osu::{
    error::{ParseError, Result},
    lex::{Cursor, primitive::parse_rgb},
    model::colours::{COMBO_SLOTS, Colours},
};

use super::{
    Section,
    key_value::{KeyDecoder, match_key},
};

const COMBO_PREFIX: &str = "Combo";
const SEPARATOR: &str = " : ";

static COLOUR_KEYS: &[KeyDecoder<Colours>] = &[
    KeyDecoder {
        prefix: "SliderTrackOverride : ",
        decode: |v, c| {
            c.slider_track_override = Some(parse_rgb(v)?);
            Ok(())
        },
    },
    KeyDecoder {
        prefix: "SliderBorder : ",
        decode: |v, c| {
            c.slider_border = Some(parse_rgb(v)?);
            Ok(())
        },
    },
];

/// Decodes a line of `[Colours]`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidKeyValueLine`] for an unknown key, a combo slot outside
/// `1..=8`, or a malformed colour.
pub fn decode_line(line: &str, colours: &mut Colours) -> Result<()> {
    let section = Section::Colours;
    if let Some((decoder, value)) = match_key(COLOUR_KEYS, line) {
        return (decoder.decode)(value, colours).map_err(|err| {
            ParseError::key_value(section, format!("`{}`: {err}", decoder.prefix.trim_end()))
        });
    }

    let rest = line
        .strip_prefix(COMBO_PREFIX)
        .ok_or_else(|| ParseError::key_value(section, format!("unknown key in {line:?}")))?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (index, rest) = rest.split_at(digits);
    let slot = index
        .parse::<usize>()
        .ok()
        .filter(|slot| (1..=COMBO_SLOTS).contains(slot))
        .ok_or_else(|| {
            ParseError::key_value(
                section,
                format!("combo index {index:?} is not in 1..={COMBO_SLOTS}"),
            )
        })?;
    let value = rest.strip_prefix(SEPARATOR).ok_or_else(|| {
        ParseError::key_value(section, format!("expected `{SEPARATOR}` after `Combo{slot}`"))
    })?;
    let value = value
        .get(..Cursor::new(value).trim_trailing_blank())
        .unwrap_or(value);
    let rgb = parse_rgb(value)
        .map_err(|err| ParseError::key_value(section, format!("`Combo{slot}`: {err}")))?;
    if let Some(combo) = colours.combos.get_mut(slot - 1) {
        *combo = Some(rgb);
    }
    Ok(())
}
