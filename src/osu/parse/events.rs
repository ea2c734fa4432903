//! Decoder of `[Events]` rows.
//!
//! Only backgrounds, videos and breaks are kept. Anything else, storyboard commands included,
//! fails to decode and is left to the caller to skip.

use crate::osu::{
    error::{ParseError, Result},
    lex::{FieldCursor, primitive::parse_integer},
    model::event::{Event, EventKind},
};

use super::{Section, expect_record_end, next_field, record_field};

const SECTION: Section = Section::Events;

/// Decodes one event row.
///
/// # Errors
///
/// Returns [`ParseError::InvalidRecordLine`] for an unsupported event type or malformed fields.
pub fn decode_line(line: &str) -> Result<Event> {
    let mut fields = FieldCursor::new(line);
    let event_type = next_field(&mut fields, SECTION, "eventType")?;
    let start_time = record_field(
        SECTION,
        "startTime",
        parse_integer(next_field(&mut fields, SECTION, "startTime")?),
    )?;
    let kind = match event_type {
        "0" => {
            let (filename, x_offset, y_offset) = image_params(&mut fields)?;
            EventKind::Background {
                filename,
                x_offset,
                y_offset,
            }
        }
        "1" | "Video" => {
            let (filename, x_offset, y_offset) = image_params(&mut fields)?;
            EventKind::Video {
                filename,
                x_offset,
                y_offset,
            }
        }
        "2" | "Break" => EventKind::Break {
            end_time: record_field(
                SECTION,
                "endTime",
                parse_integer(next_field(&mut fields, SECTION, "endTime")?),
            )?,
        },
        other => {
            return Err(ParseError::record(
                SECTION,
                format!("unsupported event type {other:?}"),
            ));
        }
    };
    expect_record_end(&fields, SECTION)?;
    Ok(Event { start_time, kind })
}

/// Reads `filename[,xOffset[,yOffset]]`, the offsets defaulting to `0`.
fn image_params(fields: &mut FieldCursor<'_>) -> Result<(String, i32, i32)> {
    let filename = fields
        .split_next_quoted_field(b',')
        .ok_or_else(|| ParseError::record(SECTION, "missing or malformed `filename`"))?;
    let mut offset = |name: &str| -> Result<i32> {
        match fields.split_next_field(b',') {
            Some(text) => record_field(SECTION, name, parse_integer(text)),
            None => Ok(0),
        }
    };
    let x_offset = offset("xOffset")?;
    let y_offset = offset("yOffset")?;
    Ok((filename.to_string(), x_offset, y_offset))
}
