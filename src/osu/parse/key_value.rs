//! Decoders of the `Key: value` sections.
//!
//! Every section has a table of [`KeyDecoder`]s. A line is matched against the prefixes in order,
//! the rest of the line is the value, and the decoder of the matched key stores it into the
//! section record. A repeated key overwrites the earlier value.

use std::str::FromStr;

use itertools::Itertools;

use crate::osu::{
    error::{ParseError, Result, ValueError},
    lex::{
        Cursor,
        cursor::trim_blank,
        primitive::{copy_string, parse_bool, parse_decimal, parse_integer},
    },
    model::{difficulty::Difficulty, editor::Editor, general::General, metadata::Metadata},
};

use super::Section;

/// Decodes the value of one key into the section record `T`.
pub type DecodeFn<T> = fn(&str, &mut T) -> core::result::Result<(), ValueError>;

/// A key literal, including its separator, and the decoder of its value.
#[derive(Debug)]
pub struct KeyDecoder<T> {
    /// The exact text the line starts with, e.g. `AudioLeadIn: `.
    pub prefix: &'static str,
    /// Stores the decoded value.
    pub decode: DecodeFn<T>,
}

const fn key<T>(prefix: &'static str, decode: DecodeFn<T>) -> KeyDecoder<T> {
    KeyDecoder { prefix, decode }
}

/// Finds the decoder whose prefix starts `line`, returning it with the value right-trimmed.
pub(crate) fn match_key<'t, 'l, T>(
    table: &'t [KeyDecoder<T>],
    line: &'l str,
) -> Option<(&'t KeyDecoder<T>, &'l str)> {
    table.iter().find_map(|decoder| {
        let value = line.strip_prefix(decoder.prefix)?;
        let end = Cursor::new(value).trim_trailing_blank();
        Some((decoder, value.get(..end).unwrap_or(value)))
    })
}

/// Decodes a line of a key-value section with `table`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidKeyValueLine`] if no key matches or the value fails to decode.
pub fn decode_line<T>(
    section: Section,
    table: &[KeyDecoder<T>],
    line: &str,
    target: &mut T,
) -> Result<()> {
    let (decoder, value) = match_key(table, line)
        .ok_or_else(|| ParseError::key_value(section, format!("unknown key in {line:?}")))?;
    (decoder.decode)(value, target)
        .map_err(|err| ParseError::key_value(section, format!("`{}`: {err}", decoder.prefix.trim_end())))
}

fn set<T>(slot: &mut Option<T>, value: T) -> core::result::Result<(), ValueError> {
    *slot = Some(value);
    Ok(())
}

fn int_enum<E: TryFrom<i64, Error = i64>>(
    kind: &str,
    text: &str,
) -> core::result::Result<E, ValueError> {
    E::try_from(parse_integer::<i64>(text)?).map_err(|value| ValueError::UnknownVariant {
        kind: kind.to_string(),
        value: value.to_string(),
    })
}

fn str_enum<E: FromStr<Err = String>>(
    kind: &str,
    text: &str,
) -> core::result::Result<E, ValueError> {
    trim_blank(text)
        .parse()
        .map_err(|value| ValueError::UnknownVariant {
            kind: kind.to_string(),
            value,
        })
}

/// Parses `Bookmarks`. An empty value is an empty list, but an empty item is an error.
pub(crate) fn parse_bookmarks(text: &str) -> core::result::Result<Vec<i32>, ValueError> {
    if trim_blank(text).is_empty() {
        return Ok(vec![]);
    }
    text.split(',').map(parse_integer).collect()
}

/// Parses `Tags`, separated by single spaces. Empty tokens are dropped.
pub(crate) fn parse_tags(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|tag| !tag.is_empty())
        .map(copy_string)
        .collect_vec()
}

/// Keys of `[General]`.
pub static GENERAL_KEYS: &[KeyDecoder<General>] = &[
    key("AudioFilename: ", |v, g| set(&mut g.audio_filename, copy_string(v))),
    key("AudioLeadIn: ", |v, g| set(&mut g.audio_lead_in, parse_integer(v)?)),
    key("AudioHash: ", |v, g| set(&mut g.audio_hash, copy_string(v))),
    key("PreviewTime: ", |v, g| set(&mut g.preview_time, parse_integer(v)?)),
    key("Countdown: ", |v, g| set(&mut g.countdown, int_enum("countdown", v)?)),
    key("SampleSet: ", |v, g| set(&mut g.sample_set, str_enum("sample set", v)?)),
    key("StackLeniency: ", |v, g| set(&mut g.stack_leniency, parse_decimal(v)?)),
    key("Mode: ", |v, g| set(&mut g.mode, int_enum("game mode", v)?)),
    key("LetterboxInBreaks: ", |v, g| set(&mut g.letterbox_in_breaks, parse_bool(v)?)),
    key("StoryFireInFront: ", |v, g| set(&mut g.story_fire_in_front, parse_bool(v)?)),
    key("UseSkinSprites: ", |v, g| set(&mut g.use_skin_sprites, parse_bool(v)?)),
    key("AlwaysShowPlayfield: ", |v, g| set(&mut g.always_show_playfield, parse_bool(v)?)),
    key("OverlayPosition: ", |v, g| {
        set(&mut g.overlay_position, str_enum("overlay position", v)?)
    }),
    key("SkinPreference: ", |v, g| set(&mut g.skin_preference, copy_string(v))),
    key("EpilepsyWarning: ", |v, g| set(&mut g.epilepsy_warning, parse_bool(v)?)),
    key("CountdownOffset: ", |v, g| set(&mut g.countdown_offset, parse_integer(v)?)),
    key("SpecialStyle: ", |v, g| set(&mut g.special_style, parse_bool(v)?)),
    key("WidescreenStoryboard: ", |v, g| set(&mut g.widescreen_storyboard, parse_bool(v)?)),
    key("SamplesMatchPlaybackRate: ", |v, g| {
        set(&mut g.samples_match_playback_rate, parse_bool(v)?)
    }),
];

/// Keys of `[Editor]`.
pub static EDITOR_KEYS: &[KeyDecoder<Editor>] = &[
    key("Bookmarks: ", |v, e| {
        e.bookmarks = parse_bookmarks(v)?;
        Ok(())
    }),
    key("DistanceSpacing: ", |v, e| set(&mut e.distance_spacing, parse_decimal(v)?)),
    key("BeatDivisor: ", |v, e| set(&mut e.beat_divisor, parse_decimal(v)?)),
    key("GridSize: ", |v, e| set(&mut e.grid_size, parse_integer(v)?)),
    key("TimelineZoom: ", |v, e| set(&mut e.timeline_zoom, parse_decimal(v)?)),
];

/// Keys of `[Metadata]`.
pub static METADATA_KEYS: &[KeyDecoder<Metadata>] = &[
    key("Title:", |v, m| set(&mut m.title, copy_string(v))),
    key("TitleUnicode:", |v, m| set(&mut m.title_unicode, copy_string(v))),
    key("Artist:", |v, m| set(&mut m.artist, copy_string(v))),
    key("ArtistUnicode:", |v, m| set(&mut m.artist_unicode, copy_string(v))),
    key("Creator:", |v, m| set(&mut m.creator, copy_string(v))),
    key("Version:", |v, m| set(&mut m.version, copy_string(v))),
    key("Source:", |v, m| set(&mut m.source, copy_string(v))),
    key("Tags:", |v, m| {
        m.tags = parse_tags(v);
        Ok(())
    }),
    key("BeatmapID:", |v, m| set(&mut m.beatmap_id, parse_integer(v)?)),
    key("BeatmapSetID:", |v, m| set(&mut m.beatmap_set_id, parse_integer(v)?)),
];

/// Keys of `[Difficulty]`.
pub static DIFFICULTY_KEYS: &[KeyDecoder<Difficulty>] = &[
    key("HPDrainRate:", |v, d| set(&mut d.hp_drain_rate, parse_decimal(v)?)),
    key("CircleSize:", |v, d| set(&mut d.circle_size, parse_decimal(v)?)),
    key("OverallDifficulty:", |v, d| set(&mut d.overall_difficulty, parse_decimal(v)?)),
    key("ApproachRate:", |v, d| set(&mut d.approach_rate, parse_decimal(v)?)),
    key("SliderMultiplier:", |v, d| set(&mut d.slider_multiplier, parse_decimal(v)?)),
    key("SliderTickRate:", |v, d| set(&mut d.slider_tick_rate, parse_decimal(v)?)),
];
