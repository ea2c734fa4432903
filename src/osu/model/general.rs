use crate::osu::command::{Countdown, Decimal, GameMode, OverlayPosition, SampleSet};

/// General information about the beatmap, the `[General]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct General {
    /// Location of the audio file relative to the beatmap folder.
    pub audio_filename: Option<String>,
    /// Milliseconds of silence before the audio starts playing.
    pub audio_lead_in: Option<i32>,
    /// Deprecated audio hash.
    pub audio_hash: Option<String>,
    /// Time in milliseconds when the audio preview should start.
    pub preview_time: Option<i32>,
    /// Speed of the countdown before the first hit object.
    pub countdown: Option<Countdown>,
    /// Sample set used when timing points do not override it.
    pub sample_set: Option<SampleSet>,
    /// Multiplier for the threshold in time where hit objects placed close together stack.
    pub stack_leniency: Option<Decimal>,
    /// Game mode.
    pub mode: Option<GameMode>,
    /// Whether breaks have a letterboxing effect.
    pub letterbox_in_breaks: Option<bool>,
    /// Deprecated.
    pub story_fire_in_front: Option<bool>,
    /// Whether the storyboard can use the user's skin images.
    pub use_skin_sprites: Option<bool>,
    /// Deprecated.
    pub always_show_playfield: Option<bool>,
    /// Draw order of hit circle overlays compared to hit numbers.
    pub overlay_position: Option<OverlayPosition>,
    /// Preferred skin to use during gameplay.
    pub skin_preference: Option<String>,
    /// Whether a warning about flashing colours should be shown at the beginning of the map.
    pub epilepsy_warning: Option<bool>,
    /// Time in beats that the countdown starts before the first hit object.
    pub countdown_offset: Option<i32>,
    /// Whether the "N+1" style key layout is used for osu!mania.
    pub special_style: Option<bool>,
    /// Whether the storyboard allows widescreen viewing.
    pub widescreen_storyboard: Option<bool>,
    /// Whether sound samples change rate when playing with speed-changing mods.
    pub samples_match_playback_rate: Option<bool>,
}
