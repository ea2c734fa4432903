use crate::osu::command::Rgb;

/// The number of combo colour slots, `Combo1` to `Combo8`.
pub const COMBO_SLOTS: usize = 8;

/// Combo and skin colours, the `[Colours]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colours {
    /// Combo colours, the slot at index `i` is `Combo{i + 1}`.
    pub combos: [Option<Rgb>; COMBO_SLOTS],
    /// Override colour of the slider track.
    pub slider_track_override: Option<Rgb>,
    /// Colour of the slider border.
    pub slider_border: Option<Rgb>,
}

impl Colours {
    /// Returns the colour of `Combo{index}`, where `index` starts with 1.
    #[must_use]
    pub fn combo(&self, index: usize) -> Option<Rgb> {
        index
            .checked_sub(1)
            .and_then(|slot| self.combos.get(slot))
            .copied()
            .flatten()
    }

    /// Iterates over the defined combo colours in slot order.
    pub fn defined_combos(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.combos.iter().flatten().copied()
    }
}
