/// A visual event of the `[Events]` section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Start time in milliseconds. For backgrounds it is usually `0`.
    pub start_time: i32,
    /// Kind-specific data.
    pub kind: EventKind,
}

/// The kinds of events read. Storyboard commands are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// `0,startTime,filename,xOffset,yOffset`
    Background {
        /// Image location relative to the beatmap folder.
        filename: String,
        /// Horizontal offset in osu! pixels from the centre of the screen.
        x_offset: i32,
        /// Vertical offset in osu! pixels from the centre of the screen.
        y_offset: i32,
    },
    /// `Video,startTime,filename,xOffset,yOffset` or with type `1`.
    Video {
        /// Video location relative to the beatmap folder.
        filename: String,
        /// Horizontal offset in osu! pixels from the centre of the screen.
        x_offset: i32,
        /// Vertical offset in osu! pixels from the centre of the screen.
        y_offset: i32,
    },
    /// `Break,startTime,endTime` or with type `2`.
    Break {
        /// End time in milliseconds.
        end_time: i32,
    },
}
