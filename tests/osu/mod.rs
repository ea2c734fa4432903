//! Tests for `osu_rs::osu`.

#[cfg(feature = "diagnostics")]
mod diagnostics_test;
mod errors;
mod files;
mod hit_objects;
mod sections;

use osu_rs::osu::prelude::*;

/// Prepends the header line to `body`.
pub fn with_header(body: &str) -> String {
    format!("osu file format v14\n\n{body}")
}

/// Decodes `body` after a header, expecting success without warnings.
pub fn parse_body(body: &str) -> Beatmap {
    let OsuOutput { beatmap, warnings } = parse_osu(&with_header(body)).unwrap();
    pretty_assertions::assert_eq!(warnings, vec![]);
    beatmap
}

/// Decodes `body` after a header, expecting an error.
pub fn parse_body_err(body: &str) -> ParseError {
    parse_osu(&with_header(body)).unwrap_err().into_content()
}
