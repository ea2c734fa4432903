use crate::osu::command::{Decimal, Effects, SampleSet, decimal_is_negative, decimal_to_f64};

/// A timing point of the `[TimingPoints]` section.
///
/// `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// Start time of the timing section in milliseconds.
    pub time: i32,
    /// For uninherited points, the duration of a beat in milliseconds. For inherited points, a
    /// negative inverse slider velocity multiplier as a percentage.
    pub beat_length: Decimal,
    /// Amount of beats in a measure.
    pub meter: i32,
    /// Default sample set for hit objects.
    pub sample_set: SampleSet,
    /// Custom sample index for hit objects, `0` means the skin's default.
    pub sample_index: i32,
    /// Volume percentage for hit objects.
    pub volume: i32,
    /// Whether the point is uninherited, as written in the file.
    pub uninherited: bool,
    /// Extra effects.
    pub effects: Effects,
}

impl TimingPoint {
    /// Whether the point looks inherited judging by the sign of its beat length.
    ///
    /// This is the interpretation older files rely on. It may disagree with [`Self::uninherited`].
    #[must_use]
    pub fn is_inherited_by_sign(&self) -> bool {
        decimal_is_negative(&self.beat_length)
    }

    /// Returns the slider velocity multiplier of an inherited point, `1.0` otherwise.
    #[must_use]
    pub fn slider_velocity(&self) -> f64 {
        if self.uninherited || !decimal_is_negative(&self.beat_length) {
            1.0
        } else {
            -100.0 / decimal_to_f64(&self.beat_length)
        }
    }

    /// Returns the tempo in beats per minute of an uninherited point.
    #[must_use]
    pub fn bpm(&self) -> Option<f64> {
        let beat_length = decimal_to_f64(&self.beat_length);
        (self.uninherited && beat_length > 0.0).then(|| 60_000.0 / beat_length)
    }
}
