//! Decoder of `[TimingPoints]` rows.

use crate::osu::{
    command::{Effects, SampleSet},
    error::{Result, ValueError},
    lex::{
        FieldCursor,
        primitive::{parse_bool, parse_decimal, parse_integer},
    },
    model::timing_point::TimingPoint,
};

use super::{Section, expect_record_end, next_field, record_field};

const SECTION: Section = Section::TimingPoints;

fn sample_set(text: &str) -> core::result::Result<SampleSet, ValueError> {
    SampleSet::try_from(parse_integer::<i64>(text)?).map_err(|value| ValueError::UnknownVariant {
        kind: "sample set".to_string(),
        value: value.to_string(),
    })
}

/// Decodes `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`.
///
/// # Errors
///
/// Returns [`crate::osu::error::ParseError::InvalidRecordLine`] unless there are exactly eight
/// valid fields.
pub fn decode_line(line: &str) -> Result<TimingPoint> {
    let mut fields = FieldCursor::new(line);
    let mut field = |name: &str| next_field(&mut fields, SECTION, name);
    let time = record_field(SECTION, "time", parse_integer(field("time")?))?;
    let beat_length = record_field(SECTION, "beatLength", parse_decimal(field("beatLength")?))?;
    let meter = record_field(SECTION, "meter", parse_integer(field("meter")?))?;
    let sample_set = record_field(SECTION, "sampleSet", sample_set(field("sampleSet")?))?;
    let sample_index = record_field(SECTION, "sampleIndex", parse_integer(field("sampleIndex")?))?;
    let volume = record_field(SECTION, "volume", parse_integer(field("volume")?))?;
    let uninherited = record_field(SECTION, "uninherited", parse_bool(field("uninherited")?))?;
    let effects = Effects(record_field(SECTION, "effects", parse_integer(field("effects")?))?);
    expect_record_end(&fields, SECTION)?;
    Ok(TimingPoint {
        time,
        beat_length,
        meter,
        sample_set,
        sample_index,
        volume,
        uninherited,
        effects,
    })
}
