//! The decoded beatmap and its sections.

/// `[Colours]`.
pub mod colours;
/// `[Difficulty]`.
pub mod difficulty;
/// `[Editor]`.
pub mod editor;
/// Rows of `[Events]`.
pub mod event;
/// `[General]`.
pub mod general;
/// Rows of `[HitObjects]` and their type-specific parameters.
pub mod hit_object;
/// `[Metadata]`.
pub mod metadata;
pub mod record_list;
/// Rows of `[TimingPoints]`.
pub mod timing_point;

use self::{
    colours::Colours,
    difficulty::Difficulty,
    editor::Editor,
    event::Event,
    general::General,
    hit_object::{HitObject, HitObjectKind},
    metadata::Metadata,
    record_list::RecordList,
    timing_point::TimingPoint,
};

/// A decoded `.osu` beatmap.
///
/// Every string is owned, so the beatmap outlives the source it was decoded from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The format version from the header line.
    pub version: String,
    /// The `[General]` section.
    pub general: General,
    /// The `[Editor]` section.
    pub editor: Editor,
    /// The `[Metadata]` section.
    pub metadata: Metadata,
    /// The `[Difficulty]` section.
    pub difficulty: Difficulty,
    /// The `[Colours]` section.
    pub colours: Colours,
    /// Backgrounds, videos and breaks in source order.
    pub events: RecordList<Event>,
    /// Timing points in source order.
    pub timing_points: RecordList<TimingPoint>,
    /// Hit objects in source order.
    pub hit_objects: RecordList<HitObject>,
}

impl Beatmap {
    /// Iterates over the uninherited (tempo-defining) timing points.
    pub fn uninherited_timing_points(&self) -> impl Iterator<Item = &TimingPoint> {
        self.timing_points.iter().filter(|point| point.uninherited)
    }

    /// Counts hit objects per kind as `(circles, sliders, spinners, holds)`.
    #[must_use]
    pub fn object_counts(&self) -> (usize, usize, usize, usize) {
        self.hit_objects
            .iter()
            .fold((0, 0, 0, 0), |(c, sl, sp, h), obj| match obj.kind {
                HitObjectKind::Circle => (c + 1, sl, sp, h),
                HitObjectKind::Slider(_) => (c, sl + 1, sp, h),
                HitObjectKind::Spinner { .. } => (c, sl, sp + 1, h),
                HitObjectKind::Hold { .. } => (c, sl, sp, h + 1),
            })
    }
}
