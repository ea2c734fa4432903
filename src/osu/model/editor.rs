use crate::osu::command::Decimal;

/// Saved settings for the beatmap editor, the `[Editor]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Editor {
    /// Times in milliseconds of editor bookmarks, in written order.
    pub bookmarks: Vec<i32>,
    /// Distance snap multiplier.
    pub distance_spacing: Option<Decimal>,
    /// Beat snap divisor.
    pub beat_divisor: Option<Decimal>,
    /// Grid size.
    pub grid_size: Option<i32>,
    /// Scale factor for the object timeline.
    pub timeline_zoom: Option<Decimal>,
}
