//! Decoder of `[HitObjects]` rows.
//!
//! ```text
//! x,y,time,type,hitSound,objectParams,hitSample
//! ```
//!
//! The five leading fields are plain comma-separated values. The parameters after them are read
//! with a small grammar selected by the type bitfield:
//!
//! - circle: nothing.
//! - slider: `<B|C|L|P>|x:y|x:y...,slides,length,s|s...,n:a|n:a...,`
//! - spinner: `endTime,`
//! - hold: `endTime:`
//!
//! The hit sample `normalSet:additionSet:index:volume:filename` ends the row, the filename taking
//! the rest of the line.

use crate::osu::{
    command::{CurveType, HitObjectType, HitSound, Point, SampleSet},
    error::{ParseError, Result},
    lex::{
        FieldCursor,
        primitive::{parse_decimal, parse_integer},
    },
    model::hit_object::{EdgeSet, HitObject, HitObjectKind, HitSample, SliderParams},
};

use super::{Section, next_field, record_field};

const SECTION: Section = Section::HitObjects;

/// Decodes one hit object row.
///
/// # Errors
///
/// - [`ParseError::InvalidRecordLine`] if one of `x,y,time,type,hitSound` is missing or malformed.
/// - [`ParseError::InvalidHitObjectPayload`] if the type does not have exactly one object kind
///   bit, or the parameters or the hit sample are malformed.
pub fn decode_line(line: &str) -> Result<HitObject> {
    let mut fields = FieldCursor::new(line);
    let mut field = |name: &str| next_field(&mut fields, SECTION, name);
    let x = record_field(SECTION, "x", parse_integer(field("x")?))?;
    let y = record_field(SECTION, "y", parse_integer(field("y")?))?;
    let time = record_field(SECTION, "time", parse_integer(field("time")?))?;
    let object_type = HitObjectType(record_field(SECTION, "type", parse_integer(field("type")?))?);
    let hit_sound = HitSound(record_field(
        SECTION,
        "hitSound",
        parse_integer(field("hitSound")?),
    )?);

    if object_type.kind_bit_count() != 1 {
        return Err(ParseError::hit_object(format!(
            "type {} must have exactly one of the circle, slider, spinner and hold bits",
            object_type.bits()
        )));
    }
    if fields.is_exhausted() {
        return Err(ParseError::hit_object("missing hit sample"));
    }

    let bits = object_type.bits();
    let kind = if bits & HitObjectType::CIRCLE != 0 {
        HitObjectKind::Circle
    } else if bits & HitObjectType::SLIDER != 0 {
        HitObjectKind::Slider(slider_params(&mut fields)?)
    } else if bits & HitObjectType::SPINNER != 0 {
        let end_time = integer(&mut fields, "spinner end time")?;
        expect(&mut fields, b',', "spinner end time")?;
        HitObjectKind::Spinner { end_time }
    } else {
        let end_time = integer(&mut fields, "hold end time")?;
        expect(&mut fields, b':', "hold end time")?;
        HitObjectKind::Hold { end_time }
    };
    let hit_sample = hit_sample(&mut fields)?;

    Ok(HitObject {
        x,
        y,
        time,
        object_type,
        hit_sound,
        kind,
        hit_sample,
    })
}

fn integer<T: TryFrom<i64>>(fields: &mut FieldCursor<'_>, what: &str) -> Result<T> {
    fields
        .next_integer_prefix()
        .and_then(|value| T::try_from(value).ok())
        .ok_or_else(|| ParseError::hit_object(format!("expected {what} at {:?}", fields.rest())))
}

fn sample_set(fields: &mut FieldCursor<'_>, what: &str) -> Result<SampleSet> {
    let value = integer::<i64>(fields, what)?;
    SampleSet::try_from(value)
        .map_err(|value| ParseError::hit_object(format!("{what} {value} is not in 0..=3")))
}

fn expect(fields: &mut FieldCursor<'_>, byte: u8, after: &str) -> Result<()> {
    if fields.eat_byte(byte) {
        Ok(())
    } else {
        Err(ParseError::hit_object(format!(
            "expected `{}` after {after} at {:?}",
            char::from(byte),
            fields.rest()
        )))
    }
}

/// Reads `item|item|...,`, at least one item.
fn list<T>(
    fields: &mut FieldCursor<'_>,
    what: &str,
    mut read_item: impl FnMut(&mut FieldCursor<'_>) -> Result<T>,
) -> Result<Vec<T>> {
    let mut items = vec![];
    loop {
        items.push(read_item(fields)?);
        match fields.next_ascii() {
            Some(b'|') => {}
            Some(b',') => return Ok(items),
            _ => {
                return Err(ParseError::hit_object(format!(
                    "expected `|` or `,` after {what} at {:?}",
                    fields.rest()
                )));
            }
        }
    }
}

fn slider_params(fields: &mut FieldCursor<'_>) -> Result<SliderParams> {
    let curve_type = fields
        .next_ascii()
        .and_then(|letter| CurveType::try_from(char::from(letter)).ok())
        .ok_or_else(|| ParseError::hit_object("unknown curve type"))?;
    expect(fields, b'|', "curve type")?;
    let curve_points = list(fields, "curve point", |fields| {
        let x = integer(fields, "curve point x")?;
        expect(fields, b':', "curve point x")?;
        let y = integer(fields, "curve point y")?;
        Ok(Point::new(x, y))
    })?;
    let slides = integer(fields, "slides")?;
    expect(fields, b',', "slides")?;
    let length = fields
        .split_next_field(b',')
        .filter(|_| !fields.is_exhausted())
        .ok_or_else(|| ParseError::hit_object("missing slider length"))?;
    let length = parse_decimal(length).map_err(|err| ParseError::hit_object(err.to_string()))?;
    let edge_sounds = list(fields, "edge sound", |fields| {
        Ok(HitSound(integer(fields, "edge sound")?))
    })?;
    let edge_sets = list(fields, "edge set", |fields| {
        let normal_set = sample_set(fields, "edge normal set")?;
        expect(fields, b':', "edge normal set")?;
        let addition_set = sample_set(fields, "edge addition set")?;
        Ok(EdgeSet {
            normal_set,
            addition_set,
        })
    })?;
    Ok(SliderParams {
        curve_type,
        curve_points,
        slides,
        length,
        edge_sounds,
        edge_sets,
    })
}

fn hit_sample(fields: &mut FieldCursor<'_>) -> Result<HitSample> {
    let normal_set = sample_set(fields, "normal set")?;
    expect(fields, b':', "normal set")?;
    let addition_set = sample_set(fields, "addition set")?;
    expect(fields, b':', "addition set")?;
    let index = integer(fields, "sample index")?;
    expect(fields, b':', "sample index")?;
    let volume = integer(fields, "sample volume")?;
    expect(fields, b':', "sample volume")?;
    let filename = sample_filename(fields.take_rest())?;
    Ok(HitSample {
        normal_set,
        addition_set,
        index,
        volume,
        filename,
    })
}

fn sample_filename(text: &str) -> Result<Option<String>> {
    let filename = match text.strip_prefix('"') {
        Some(quoted) => quoted
            .strip_suffix('"')
            .ok_or_else(|| ParseError::hit_object(format!("unterminated filename {text:?}")))?,
        None => text,
    };
    Ok((!filename.is_empty()).then(|| filename.to_string()))
}
