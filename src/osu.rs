//! The decoder of osu! beatmap files (`.osu`), format version 14.
//!
//! A beatmap is a UTF-8 text file starting with the `osu file format v14` line, followed by
//! sections introduced by bracketed headers such as `[General]`. Five sections hold `Key: value`
//! pairs and three hold comma-separated records, one per line.
//!
//! Decoding runs in one pass:
//!
//! - `lex` validates the header line and provides the line and field cursors.
//! - `parse` tracks the current section and decodes each line into the model.
//! - `model` is the decoded [`Beatmap`], owning copies of every value.
//!
//! Our policies are:
//!
//! - Read only v14. Older formats differ in too many details.
//! - Fail on any malformed line, except in `[Events]` where unsupported rows such as storyboard
//!   commands are skipped with a warning.
//! - Do not support writing beatmaps back to text.
//!
//! # Example
//!
//! ```rust
//! use osu_rs::osu::parse_osu;
//!
//! let source = "osu file format v14\n\n[HitObjects]\n256,192,350,1,0,0:0:0:0:\n";
//! let output = parse_osu(source).unwrap();
//! assert_eq!(output.beatmap.hit_objects.len(), 1);
//! assert!(output.warnings.is_empty());
//! ```

pub mod command;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod error;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use self::{
    command::mixin::SourceRangeMixinExt,
    error::{ParseErrorWithRange, ParseWarningWithRange, ReadError},
    lex::{Cursor, read_header},
    model::Beatmap,
    parse::BeatmapParser,
};

/// The byte order mark some editors put before the header.
const BOM: &str = "\u{feff}";

/// Options of decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    /// Fail on a malformed `[Events]` row instead of skipping it with a warning.
    pub strict_events: bool,
    /// Skip a UTF-8 byte order mark before the header.
    pub skip_bom: bool,
}

impl ParseConfig {
    /// Sets whether malformed `[Events]` rows fail decoding.
    #[must_use]
    pub const fn strict_events(mut self, strict_events: bool) -> Self {
        self.strict_events = strict_events;
        self
    }

    /// Sets whether a leading byte order mark is skipped.
    #[must_use]
    pub const fn skip_bom(mut self, skip_bom: bool) -> Self {
        self.skip_bom = skip_bom;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        default_config()
    }
}

/// Returns the default config: lenient `[Events]`, BOM skipped.
#[must_use]
pub const fn default_config() -> ParseConfig {
    ParseConfig {
        strict_events: false,
        skip_bom: true,
    }
}

/// Output of decoding a beatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsuOutput {
    /// The decoded beatmap.
    pub beatmap: Beatmap,
    /// Warnings that occurred during decoding.
    pub warnings: Vec<ParseWarningWithRange>,
}

/// Decodes a beatmap from source text with [`default_config`].
///
/// # Errors
///
/// Returns the first error with the byte range of its line. Nothing decoded is kept.
pub fn parse_osu(source: &str) -> Result<OsuOutput, ParseErrorWithRange> {
    parse_osu_with_config(source, default_config())
}

/// Decodes a beatmap from source text.
///
/// # Errors
///
/// Returns the first error with the byte range of its line. Nothing decoded is kept.
pub fn parse_osu_with_config(
    source: &str,
    config: ParseConfig,
) -> Result<OsuOutput, ParseErrorWithRange> {
    let (offset, body) = strip_bom(source, config);
    let header = read_header(body)
        .map_err(|err| err.into_wrapper_range(offset..offset + Cursor::new(body).line_end()))?;
    let mut parser = BeatmapParser::new(header.version, config);
    feed_lines(&mut parser, body.get(header.content_start..).unwrap_or_default(), offset + header.content_start)?;
    parser.finish(source.len())
}

/// Decodes a beatmap from a reader, line by line.
///
/// Decoding is the same as [`parse_osu_with_config`], and error ranges are byte offsets from the
/// start of the stream.
///
/// # Errors
///
/// - [`ReadError::Io`] if reading fails, including on invalid UTF-8.
/// - [`ReadError::Parse`] if the text fails to decode.
pub fn parse_osu_reader(mut reader: impl BufRead, config: ParseConfig) -> Result<OsuOutput, ReadError> {
    let mut buf = String::new();
    reader.read_line(&mut buf)?;
    let (offset, body) = strip_bom(&buf, config);
    let header = read_header(body)
        .map_err(|err| err.into_wrapper_range(offset..offset + Cursor::new(body).line_end()))?;
    let mut parser = BeatmapParser::new(header.version, config);
    feed_lines(&mut parser, body.get(header.content_start..).unwrap_or_default(), offset + header.content_start)?;

    let mut position = buf.len();
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        feed_lines(&mut parser, &buf, position)?;
        position += read;
    }
    Ok(parser.finish(position)?)
}

/// Opens the file at `path` and decodes it with [`parse_osu_reader`].
///
/// # Errors
///
/// Same as [`parse_osu_reader`], plus [`ReadError::Io`] if the file cannot be opened.
pub fn parse_osu_file(path: impl AsRef<Path>, config: ParseConfig) -> Result<OsuOutput, ReadError> {
    let file = File::open(path)?;
    parse_osu_reader(BufReader::new(file), config)
}

/// Returns the offset of the header and the text from it.
fn strip_bom(source: &str, config: ParseConfig) -> (usize, &str) {
    match source.strip_prefix(BOM) {
        Some(body) if config.skip_bom => (BOM.len(), body),
        _ => (0, source),
    }
}

/// Feeds every line of `chunk`, which starts at byte `base` of the source.
fn feed_lines(
    parser: &mut BeatmapParser,
    chunk: &str,
    base: usize,
) -> Result<(), ParseErrorWithRange> {
    let mut cursor = Cursor::new(chunk);
    while !cursor.is_end() {
        let start = base + cursor.index();
        let line = cursor.next_line();
        parser.feed_line(line, start..start + line.len())?;
    }
    Ok(())
}
