use crate::osu::command::{CurveType, Decimal, HitObjectType, HitSound, Point, SampleSet};

/// A hit object of the `[HitObjects]` section.
///
/// `x,y,time,type,hitSound,objectParams,hitSample`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// Horizontal position in osu! pixels.
    pub x: i32,
    /// Vertical position in osu! pixels.
    pub y: i32,
    /// Time in milliseconds when the object is to be hit.
    pub time: i32,
    /// The raw type bitfield, including combo information.
    pub object_type: HitObjectType,
    /// Hit sound applied to the object.
    pub hit_sound: HitSound,
    /// Type-specific parameters.
    pub kind: HitObjectKind,
    /// Samples played when the object is hit.
    pub hit_sample: HitSample,
}

impl HitObject {
    /// Returns the position as a point.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the end time of spinners and holds, or the start time for the others.
    ///
    /// Slider end times depend on timing and are not computed here.
    #[must_use]
    pub const fn end_time(&self) -> i32 {
        match self.kind {
            HitObjectKind::Spinner { end_time } | HitObjectKind::Hold { end_time } => end_time,
            HitObjectKind::Circle | HitObjectKind::Slider(_) => self.time,
        }
    }
}

/// Type-specific parameters of a hit object, selected by its type bitfield.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    /// A hit circle, no parameters.
    Circle,
    /// A slider.
    Slider(SliderParams),
    /// A spinner.
    Spinner {
        /// End time in milliseconds.
        end_time: i32,
    },
    /// An osu!mania hold note.
    Hold {
        /// End time in milliseconds.
        end_time: i32,
    },
}

/// Parameters of a slider.
///
/// `curveType|curvePoints,slides,length,edgeSounds,edgeSets`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderParams {
    /// Type of curve.
    pub curve_type: CurveType,
    /// Anchor points of the curve after the head, at least one.
    pub curve_points: Vec<Point>,
    /// Amount of times the player has to follow the slider's curve back-and-forth.
    pub slides: i32,
    /// Visual length in osu! pixels.
    pub length: Decimal,
    /// Hit sounds on each edge of the slider.
    pub edge_sounds: Vec<HitSound>,
    /// Sample sets on each edge of the slider.
    pub edge_sets: Vec<EdgeSet>,
}

/// Sample sets of a slider edge, written as `normalSet:additionSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSet {
    /// Sample set of the normal sound.
    pub normal_set: SampleSet,
    /// Sample set of the whistle, finish and clap sounds.
    pub addition_set: SampleSet,
}

/// Samples played when a hit object is hit.
///
/// `normalSet:additionSet:index:volume:filename`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitSample {
    /// Sample set of the normal sound.
    pub normal_set: SampleSet,
    /// Sample set of the whistle, finish and clap sounds.
    pub addition_set: SampleSet,
    /// Index of the sample, `0` means the timing point's index.
    pub index: i32,
    /// Volume of the sample, `0` means the timing point's volume.
    pub volume: i32,
    /// Custom sample file replacing the addition sound, `None` means the default samples.
    pub filename: Option<String>,
}

impl HitSample {
    /// Returns `true` if every field asks for the defaults.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
