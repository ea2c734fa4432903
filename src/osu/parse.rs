//! Decoding lines into a [`Beatmap`].
//!
//! [`BeatmapParser`] is the section state machine: it tracks the current section and hands every
//! content line to [`dispatch`], which routes it to the decoder of that section.

pub mod colours;
pub mod events;
pub mod hit_objects;
pub mod key_value;
pub mod timing_points;

use std::ops::Range;

use log::{debug, trace};

use super::{
    OsuOutput, ParseConfig,
    command::mixin::SourceRangeMixinExt,
    error::{ParseError, ParseErrorWithRange, ParseWarning, ParseWarningWithRange, Result, ValueError},
    lex::{Cursor, FieldCursor},
    model::{Beatmap, record_list::RecordList},
};

/// One of the eight named regions of a beatmap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `[General]`, key-value.
    General,
    /// `[Editor]`, key-value.
    Editor,
    /// `[Metadata]`, key-value.
    Metadata,
    /// `[Difficulty]`, key-value.
    Difficulty,
    /// `[Colours]`, key-value with indexed combo keys.
    Colours,
    /// `[Events]`, comma-separated records.
    Events,
    /// `[TimingPoints]`, comma-separated records.
    TimingPoints,
    /// `[HitObjects]`, comma-separated records.
    HitObjects,
}

impl Section {
    /// Every section in the usual file order.
    pub const ALL: [Self; 8] = [
        Self::General,
        Self::Editor,
        Self::Metadata,
        Self::Difficulty,
        Self::Events,
        Self::TimingPoints,
        Self::Colours,
        Self::HitObjects,
    ];

    /// The name between the brackets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Editor => "Editor",
            Self::Metadata => "Metadata",
            Self::Difficulty => "Difficulty",
            Self::Colours => "Colours",
            Self::Events => "Events",
            Self::TimingPoints => "TimingPoints",
            Self::HitObjects => "HitObjects",
        }
    }

    /// The header literal, e.g. `[General]`.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::General => "[General]",
            Self::Editor => "[Editor]",
            Self::Metadata => "[Metadata]",
            Self::Difficulty => "[Difficulty]",
            Self::Colours => "[Colours]",
            Self::Events => "[Events]",
            Self::TimingPoints => "[TimingPoints]",
            Self::HitObjects => "[HitObjects]",
        }
    }

    /// Matches a header line. Only blanks may follow the header literal.
    #[must_use]
    pub fn from_header_line(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| {
            line.strip_prefix(section.header())
                .is_some_and(|rest| Cursor::new(rest).advance_to_next_line(true))
        })
    }

    /// Whether lines of the section are `Key: value` pairs.
    #[must_use]
    pub const fn is_key_value(self) -> bool {
        matches!(
            self,
            Self::General | Self::Editor | Self::Metadata | Self::Difficulty | Self::Colours
        )
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes one content line of `section` into `beatmap`.
///
/// The line must not contain its terminator. Trailing blanks are ignored.
///
/// # Errors
///
/// Returns the error of the section decoder. Whether an `[Events]` error is fatal is up to the
/// caller.
pub fn dispatch(section: Section, line: &str, beatmap: &mut Beatmap) -> Result<()> {
    // Key prefixes may end with a space, so only record rows are trimmed up front.
    let line = if section.is_key_value() {
        line
    } else {
        line.get(..Cursor::new(line).trim_trailing_blank()).unwrap_or(line)
    };
    match section {
        Section::General => {
            key_value::decode_line(section, key_value::GENERAL_KEYS, line, &mut beatmap.general)
        }
        Section::Editor => {
            key_value::decode_line(section, key_value::EDITOR_KEYS, line, &mut beatmap.editor)
        }
        Section::Metadata => {
            key_value::decode_line(section, key_value::METADATA_KEYS, line, &mut beatmap.metadata)
        }
        Section::Difficulty => key_value::decode_line(
            section,
            key_value::DIFFICULTY_KEYS,
            line,
            &mut beatmap.difficulty,
        ),
        Section::Colours => colours::decode_line(line, &mut beatmap.colours),
        Section::Events => push_record(section, &mut beatmap.events, events::decode_line(line)?),
        Section::TimingPoints => push_record(
            section,
            &mut beatmap.timing_points,
            timing_points::decode_line(line)?,
        ),
        Section::HitObjects => push_record(
            section,
            &mut beatmap.hit_objects,
            hit_objects::decode_line(line)?,
        ),
    }
}

fn push_record<T>(section: Section, list: &mut RecordList<T>, record: T) -> Result<()> {
    list.push(record)
        .map_err(|_| ParseError::AllocationFailure(section))
}

/// Takes the next comma-separated field of a record.
pub(crate) fn next_field<'a>(
    fields: &mut FieldCursor<'a>,
    section: Section,
    name: &str,
) -> Result<&'a str> {
    fields
        .split_next_field(b',')
        .ok_or_else(|| ParseError::record(section, format!("missing field `{name}`")))
}

/// Attaches the field name to a value error.
pub(crate) fn record_field<T>(
    section: Section,
    name: &str,
    value: core::result::Result<T, ValueError>,
) -> Result<T> {
    value.map_err(|err| ParseError::record(section, format!("`{name}`: {err}")))
}

/// Fails if fields are left after the last expected one.
pub(crate) fn expect_record_end(fields: &FieldCursor<'_>, section: Section) -> Result<()> {
    if fields.is_exhausted() {
        Ok(())
    } else {
        Err(ParseError::record(
            section,
            format!("unexpected trailing fields {:?}", fields.rest()),
        ))
    }
}

/// The section state machine, fed one line at a time.
#[derive(Debug)]
pub struct BeatmapParser {
    config: ParseConfig,
    section: Option<Section>,
    beatmap: Beatmap,
    warnings: Vec<ParseWarningWithRange>,
}

impl BeatmapParser {
    /// Creates a parser for a beatmap whose header declared `version`.
    #[must_use]
    pub fn new(version: &str, config: ParseConfig) -> Self {
        Self {
            config,
            section: None,
            beatmap: Beatmap {
                version: version.to_string(),
                ..Beatmap::default()
            },
            warnings: vec![],
        }
    }

    /// Returns the section lines are currently routed to.
    #[must_use]
    pub const fn current_section(&self) -> Option<Section> {
        self.section
    }

    /// Processes one line, given without its terminator. `range` is its byte range in the source.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnknownSection`] for a `[`-line that is not an exact known header.
    /// - [`ParseError::ContentOutsideSection`] for content before the first header.
    /// - Any error of the section decoder. Malformed `[Events]` lines become warnings instead
    ///   unless `strict_events` of [`ParseConfig`] is set, but [`ParseError::AllocationFailure`]
    ///   is always returned.
    pub fn feed_line(
        &mut self,
        line: &str,
        range: Range<usize>,
    ) -> core::result::Result<(), ParseErrorWithRange> {
        if Cursor::new(line).advance_to_next_line(true) || line.starts_with("//") {
            return Ok(());
        }
        if line.starts_with('[') {
            let section = Section::from_header_line(line).ok_or_else(|| {
                let trimmed = line.get(..Cursor::new(line).trim_trailing_blank()).unwrap_or(line);
                ParseError::UnknownSection(trimmed.to_string()).into_wrapper_range(range.clone())
            })?;
            trace!("entering section [{section}]");
            self.section = Some(section);
            return Ok(());
        }
        let Some(section) = self.section else {
            return Err(ParseError::ContentOutsideSection.into_wrapper_range(range));
        };
        match dispatch(section, line, &mut self.beatmap) {
            Err(err) if self.skips_as_warning(section, &err) => {
                debug!("skipping event line {line:?}: {err}");
                self.warnings
                    .push(ParseWarning::SkippedEvent(err.to_string()).into_wrapper_range(range));
                Ok(())
            }
            result => result.map_err(|err| err.into_wrapper_range(range)),
        }
    }

    const fn skips_as_warning(&self, section: Section, err: &ParseError) -> bool {
        matches!(section, Section::Events)
            && !self.config.strict_events
            && err.is_line_content_error()
    }

    /// Finishes decoding. `end` is the byte length of the source.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyBeatmap`] if no section header was seen.
    pub fn finish(self, end: usize) -> core::result::Result<OsuOutput, ParseErrorWithRange> {
        if self.section.is_none() {
            return Err(ParseError::EmptyBeatmap.into_wrapper_range(end..end));
        }
        let (circles, sliders, spinners, holds) = self.beatmap.object_counts();
        debug!(
            "decoded beatmap: {} events, {} timing points, {circles} circles, {sliders} sliders, {spinners} spinners, {holds} holds, {} warnings",
            self.beatmap.events.len(),
            self.beatmap.timing_points.len(),
            self.warnings.len(),
        );
        Ok(OsuOutput {
            beatmap: self.beatmap,
            warnings: self.warnings,
        })
    }
}
