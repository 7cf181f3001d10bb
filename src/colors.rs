//! Predefined color table.
//!
//! Seven fixed colors addressable by index (`0..7`) or by name. Index `7` is
//! reserved for "custom" when raw configuration values are decoded, see
//! [`CUSTOM_COLOR_INDEX`].

use core::str::FromStr;
use palette::Srgb;

use crate::types::ConfigError;

/// Raw color index that selects a custom RGB triplet instead of a table entry.
pub const CUSTOM_COLOR_INDEX: u8 = PredefinedColor::COUNT as u8;

/// One of the seven built-in colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PredefinedColor {
    Red = 0,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

const COLOR_TABLE: [Srgb<u8>; PredefinedColor::COUNT] = [
    Srgb::new(255, 0, 0),
    Srgb::new(0, 255, 0),
    Srgb::new(0, 0, 255),
    Srgb::new(255, 255, 0),
    Srgb::new(0, 255, 255),
    Srgb::new(255, 0, 255),
    Srgb::new(255, 255, 255),
];

impl PredefinedColor {
    /// Number of entries in the table.
    pub const COUNT: usize = 7;

    /// All predefined colors in index order.
    pub const ALL: [PredefinedColor; Self::COUNT] = [
        PredefinedColor::Red,
        PredefinedColor::Green,
        PredefinedColor::Blue,
        PredefinedColor::Yellow,
        PredefinedColor::Cyan,
        PredefinedColor::Magenta,
        PredefinedColor::White,
    ];

    /// Looks up a color by table index. Returns `None` outside `0..COUNT`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Table index of this color.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// 8-bit RGB components of this color.
    #[inline]
    pub fn rgb(self) -> Srgb<u8> {
        COLOR_TABLE[self.index()]
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PredefinedColor::Red => "red",
            PredefinedColor::Green => "green",
            PredefinedColor::Blue => "blue",
            PredefinedColor::Yellow => "yellow",
            PredefinedColor::Cyan => "cyan",
            PredefinedColor::Magenta => "magenta",
            PredefinedColor::White => "white",
        }
    }
}

impl TryFrom<u8> for PredefinedColor {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value as usize).ok_or(ConfigError::InvalidColor(value))
    }
}

impl From<PredefinedColor> for Srgb<u8> {
    fn from(color: PredefinedColor) -> Self {
        color.rgb()
    }
}

/// Error returned when parsing an unknown color name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownColorName;

impl core::fmt::Display for UnknownColorName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown color name, expected one of: red, green, blue, yellow, cyan, magenta, white"
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownColorName {}

impl FromStr for PredefinedColor {
    type Err = UnknownColorName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownColorName)
    }
}

impl core::fmt::Display for PredefinedColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
