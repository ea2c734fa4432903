//! Definitions of field value data.
//!
//! Structures in this module are produced by the [lex](crate::osu::lex) primitives, consumed by the
//! [parse](crate::osu::parse) decoders, and stored in the output [model](crate::osu::model).

pub mod mixin;

use std::str::FromStr;

use fraction::GenericDecimal;
use num::{BigUint, ToPrimitive, Zero};

/// Decimal type of every fractional field, e.g. a beat length of `333.333333333333`.
///
/// Values keep the exact digits they were written with, so nothing is lost on reading.
pub type Decimal = GenericDecimal<BigUint, usize>;

/// Converts a decimal to the nearest `f64`.
#[must_use]
pub fn decimal_to_f64(value: &Decimal) -> f64 {
    <Decimal as ToPrimitive>::to_f64(value).unwrap_or(f64::NAN)
}

/// Returns `true` if the decimal is less than zero.
#[must_use]
pub fn decimal_is_negative(value: &Decimal) -> bool {
    *value < Decimal::zero()
}

/// A colour written as `r,g,b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component.
    pub red: u8,
    /// Green component.
    pub green: u8,
    /// Blue component.
    pub blue: u8,
}

impl Rgb {
    /// Creates a new colour.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A point in osu! pixels, written as `x:y` in slider curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Speed of the countdown before the first hit object, `Countdown` in `[General]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Countdown {
    /// 0, no countdown.
    None,
    /// 1, normal speed.
    #[default]
    Normal,
    /// 2, half speed.
    Half,
    /// 3, double speed.
    Double,
}

impl TryFrom<i64> for Countdown {
    type Error = i64;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::None,
            1 => Self::Normal,
            2 => Self::Half,
            3 => Self::Double,
            other => return Err(other),
        })
    }
}

/// The game mode the beatmap is made for, `Mode` in `[General]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// 0, osu!standard.
    #[default]
    Osu,
    /// 1, osu!taiko.
    Taiko,
    /// 2, osu!catch.
    Catch,
    /// 3, osu!mania.
    Mania,
}

impl TryFrom<i64> for GameMode {
    type Error = i64;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Osu,
            1 => Self::Taiko,
            2 => Self::Catch,
            3 => Self::Mania,
            other => return Err(other),
        })
    }
}

/// A bank of hit sound samples.
///
/// Written as an integer `0..=3` in timing points and hit samples, and by name in `[General]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSet {
    /// 0, inherits the set from the timing point or the skin.
    #[default]
    Default,
    /// 1, normal.
    Normal,
    /// 2, soft.
    Soft,
    /// 3, drum.
    Drum,
}

impl TryFrom<i64> for SampleSet {
    type Error = i64;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Default,
            1 => Self::Normal,
            2 => Self::Soft,
            3 => Self::Drum,
            other => return Err(other),
        })
    }
}

impl FromStr for SampleSet {
    type Err = String;
    /// Parses the named form used by `SampleSet: ` in `[General]`, which has no `Default`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(Self::Normal),
            "Soft" => Ok(Self::Soft),
            "Drum" => Ok(Self::Drum),
            _ => Err(s.to_string()),
        }
    }
}

/// Draw order of hit circle overlays relative to hit numbers, `OverlayPosition` in `[General]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayPosition {
    /// Use the skin setting.
    #[default]
    NoChange,
    /// Draw overlays under numbers.
    Below,
    /// Draw overlays on top of numbers.
    Above,
}

impl FromStr for OverlayPosition {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NoChange" => Ok(Self::NoChange),
            "Below" => Ok(Self::Below),
            "Above" => Ok(Self::Above),
            _ => Err(s.to_string()),
        }
    }
}

/// The kind of curve a slider path follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveType {
    /// `B`, bézier.
    Bezier,
    /// `C`, centripetal catmull-rom.
    CentripetalCatmullRom,
    /// `L`, linear.
    Linear,
    /// `P`, perfect circle.
    PerfectCircle,
}

impl TryFrom<char> for CurveType {
    type Error = char;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            'B' => Self::Bezier,
            'C' => Self::CentripetalCatmullRom,
            'L' => Self::Linear,
            'P' => Self::PerfectCircle,
            other => return Err(other),
        })
    }
}

impl std::fmt::Display for CurveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Self::Bezier => 'B',
            Self::CentripetalCatmullRom => 'C',
            Self::Linear => 'L',
            Self::PerfectCircle => 'P',
        };
        write!(f, "{letter}")
    }
}

/// Hit sound bitfield applied to a hit object or a slider edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitSound(pub u8);

impl HitSound {
    /// Bit 0.
    pub const NORMAL: u8 = 1 << 0;
    /// Bit 1.
    pub const WHISTLE: u8 = 1 << 1;
    /// Bit 2.
    pub const FINISH: u8 = 1 << 2;
    /// Bit 3.
    pub const CLAP: u8 = 1 << 3;

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the normal sound is played.
    #[must_use]
    pub const fn normal(self) -> bool {
        self.0 & Self::NORMAL != 0
    }

    /// Whether the whistle sound is played.
    #[must_use]
    pub const fn whistle(self) -> bool {
        self.0 & Self::WHISTLE != 0
    }

    /// Whether the finish sound is played.
    #[must_use]
    pub const fn finish(self) -> bool {
        self.0 & Self::FINISH != 0
    }

    /// Whether the clap sound is played.
    #[must_use]
    pub const fn clap(self) -> bool {
        self.0 & Self::CLAP != 0
    }
}

/// Type bitfield of a hit object.
///
/// Exactly one of [`Self::CIRCLE`], [`Self::SLIDER`], [`Self::SPINNER`] and [`Self::HOLD`] is set in
/// a valid object. The remaining bits carry combo information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObjectType(pub u8);

impl HitObjectType {
    /// Bit 0.
    pub const CIRCLE: u8 = 1 << 0;
    /// Bit 1.
    pub const SLIDER: u8 = 1 << 1;
    /// Bit 2.
    pub const NEW_COMBO: u8 = 1 << 2;
    /// Bit 3.
    pub const SPINNER: u8 = 1 << 3;
    /// Bits 4 to 6.
    pub const COMBO_SKIP: u8 = 0b0111_0000;
    /// Bit 7, osu!mania hold note.
    pub const HOLD: u8 = 1 << 7;

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Number of object kind bits set; `1` for every valid object.
    #[must_use]
    pub const fn kind_bit_count(self) -> u32 {
        (self.0 & (Self::CIRCLE | Self::SLIDER | Self::SPINNER | Self::HOLD)).count_ones()
    }

    /// Whether the object starts a new combo.
    #[must_use]
    pub const fn is_new_combo(self) -> bool {
        self.0 & Self::NEW_COMBO != 0
    }

    /// How many combo colours to skip.
    #[must_use]
    pub const fn combo_skip(self) -> u8 {
        (self.0 & Self::COMBO_SKIP) >> 4
    }
}

/// Effect bitfield of a timing point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effects(pub u8);

impl Effects {
    /// Bit 0.
    pub const KIAI: u8 = 1 << 0;
    /// Bit 3.
    pub const OMIT_FIRST_BARLINE: u8 = 1 << 3;

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether kiai time is enabled.
    #[must_use]
    pub const fn kiai(self) -> bool {
        self.0 & Self::KIAI != 0
    }

    /// Whether the first barline is omitted in osu!taiko and osu!mania.
    #[must_use]
    pub const fn omit_first_barline(self) -> bool {
        self.0 & Self::OMIT_FIRST_BARLINE != 0
    }
}
