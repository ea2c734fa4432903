//! Prelude module for the osu! beatmap decoder.
//!
//! Re-exports the types most callers need.

#[cfg(feature = "diagnostics")]
pub use super::diagnostics::{
    SimpleSource, ToAriadne, collect_osu_reports, emit_osu_error, emit_osu_warnings,
};

pub use super::{
    OsuOutput, ParseConfig,
    command::{
        CurveType, Countdown, Decimal, Effects, GameMode, HitObjectType, HitSound, OverlayPosition,
        Point, Rgb, SampleSet, decimal_is_negative, decimal_to_f64,
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
    },
    default_config,
    error::{
        ParseError, ParseErrorWithRange, ParseWarning, ParseWarningWithRange, ReadError,
        ValueError,
    },
    model::{
        Beatmap,
        colours::Colours,
        difficulty::Difficulty,
        editor::Editor,
        event::{Event, EventKind},
        general::General,
        hit_object::{EdgeSet, HitObject, HitObjectKind, HitSample, SliderParams},
        metadata::Metadata,
        record_list::RecordList,
        timing_point::TimingPoint,
    },
    parse::Section,
    parse_osu, parse_osu_file, parse_osu_reader, parse_osu_with_config,
};
