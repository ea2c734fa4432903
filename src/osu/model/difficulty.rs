use crate::osu::command::Decimal;

/// Difficulty settings, the `[Difficulty]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Difficulty {
    /// HP setting, `0..=10`.
    pub hp_drain_rate: Option<Decimal>,
    /// CS setting, `0..=10`.
    pub circle_size: Option<Decimal>,
    /// OD setting, `0..=10`.
    pub overall_difficulty: Option<Decimal>,
    /// AR setting, `0..=10`.
    pub approach_rate: Option<Decimal>,
    /// Base slider velocity in hundreds of osu! pixels per beat.
    pub slider_multiplier: Option<Decimal>,
    /// Amount of slider ticks per beat.
    pub slider_tick_rate: Option<Decimal>,
}
