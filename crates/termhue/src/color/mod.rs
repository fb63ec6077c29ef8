//! Terminal colors and their canonical identifiers.
//!
//! A [`Color`] is either a concrete color (a palette index or a 24-bit RGB
//! value) or one of three sentinels that defer to the terminal:
//!
//! | Variant            | Identifier            |
//! |--------------------|-----------------------|
//! | `Color::None`      | `none`                |
//! | `Color::Default`   | `default`             |
//! | `Color::Reset`     | `reset`               |
//! | `Color::Indexed(n)`| ANSI name or `colorN` |
//! | `Color::Named(..)` | CSS name              |
//! | `Color::Rgb(..)`   | `#rrggbb`             |
//!
//! Identifiers parse back to the same color:
//!
//! ```rust
//! use termhue::Color;
//!
//! let teal: Color = "teal".parse().unwrap();
//! assert_eq!(teal, Color::Indexed(6));
//! assert_eq!(teal.id(), "teal");
//!
//! let accent = Color::rgb(0x33, 0x66, 0xff);
//! assert_eq!(accent.to_string(), "#3366ff");
//! assert_eq!("#3366FF".parse::<Color>().unwrap(), accent);
//! ```
//!
//! Parsing also accepts `#rgb` shorthands and `colorN` for the basic
//! sixteen. CSS color names such as `orange` or `cyan` parse to
//! [`NamedColor`] values, which keep their name:
//!
//! ```rust
//! use termhue::Color;
//!
//! let orange: Color = "orange".parse().unwrap();
//! assert_eq!(orange.id(), "orange");
//! assert_ne!(orange, "#ffa500".parse::<Color>().unwrap());
//! ```

mod names;

pub use names::NamedColor;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use termhue_caps::Rgb;

use crate::error::ColorParseError;

/// A terminal color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// No color at all.
    None,
    /// The terminal's default color.
    #[default]
    Default,
    /// Reset to the terminal's default color, overriding any inherited color.
    Reset,
    /// A palette index: 0–15 are the ANSI colors, 16–255 the extended palette.
    Indexed(u8),
    /// A CSS extended color, rendered as its RGB value.
    Named(NamedColor),
    /// A 24-bit true color.
    Rgb(Rgb),
}

impl Color {
    /// Creates a true color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(Rgb(r, g, b))
    }

    /// Creates a true color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Color::Rgb(Rgb::from_hex(hex))
    }

    /// Whether this color is `None`, `Default` or `Reset`.
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Color::None | Color::Default | Color::Reset)
    }

    /// The palette index of an indexed color.
    pub const fn index(self) -> Option<u8> {
        match self {
            Color::Indexed(index) => Some(index),
            _ => None,
        }
    }

    /// The RGB value this color displays as, if it has one.
    ///
    /// Palette colors use the standard xterm values. Sentinels have no RGB.
    pub const fn to_rgb(self) -> Option<Rgb> {
        match self {
            Color::Rgb(rgb) => Some(rgb),
            Color::Indexed(index) => Some(Rgb::from_xterm(index)),
            Color::Named(named) => Some(named.rgb()),
            Color::None | Color::Default | Color::Reset => None,
        }
    }

    /// Returns the canonical identifier of this color.
    ///
    /// Sentinels identify as `none`, `default` and `reset`, palette and CSS
    /// colors by name, true colors as lowercase `#rrggbb`. The identifier
    /// parses back to an equal color.
    pub fn id(&self) -> Cow<'static, str> {
        match *self {
            Color::None => Cow::Borrowed("none"),
            Color::Default => Cow::Borrowed("default"),
            Color::Reset => Cow::Borrowed("reset"),
            Color::Indexed(index) => Cow::Borrowed(names::index_name(index)),
            Color::Named(named) => Cow::Borrowed(named.name()),
            Color::Rgb(Rgb(r, g, b)) => Cow::Owned(format!("#{r:02x}{g:02x}{b:02x}")),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        let name = s.to_ascii_lowercase();
        match name.as_str() {
            "none" => Ok(Color::None),
            "default" => Ok(Color::Default),
            "reset" => Ok(Color::Reset),
            _ => names::lookup(&name)
                .or_else(|| parse_color_index(&name))
                .ok_or_else(|| ColorParseError::UnknownName(s.to_string())),
        }
    }
}

/// Parses the digits of a `#rgb` or `#rrggbb` literal.
fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color::rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => u32::from_str_radix(hex, 16).ok().map(Color::from_hex),
        _ => None,
    }
}

/// Accepts `colorN` for the basic sixteen too, which only identify by name.
fn parse_color_index(name: &str) -> Option<Color> {
    let digits = name.strip_prefix("color")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u8>().ok().map(Color::Indexed)
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Identity
    // =========================================================================

    #[test]
    fn sentinel_ids() {
        assert_eq!(Color::None.id(), "none");
        assert_eq!(Color::Default.id(), "default");
        assert_eq!(Color::Reset.id(), "reset");
    }

    #[test]
    fn palette_ids() {
        assert_eq!(Color::Indexed(1).id(), "maroon");
        assert_eq!(Color::Indexed(12).id(), "blue");
        assert_eq!(Color::Indexed(208).id(), "color208");
    }

    #[test]
    fn rgb_ids_are_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).id(), "#ab01ff");
        assert_eq!(Color::rgb(0, 0, 0).id(), "#000000");
    }

    #[test]
    fn rgb_matching_palette_value_still_uses_hex() {
        // Only palette indices carry names.
        assert_eq!(Color::rgb(255, 0, 0).id(), "#ff0000");
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn parse_sentinels_case_insensitive() {
        assert_eq!("None".parse::<Color>().unwrap(), Color::None);
        assert_eq!("DEFAULT".parse::<Color>().unwrap(), Color::Default);
        assert_eq!("reset".parse::<Color>().unwrap(), Color::Reset);
    }

    #[test]
    fn parse_short_hex() {
        assert_eq!("#f80".parse::<Color>().unwrap(), Color::rgb(255, 136, 0));
    }

    #[test]
    fn parse_invalid_hex() {
        for s in ["#ff", "#ffff", "#gggggg", "#", "#+12345"] {
            assert!(
                matches!(s.parse::<Color>(), Err(ColorParseError::InvalidHex(_))),
                "{s}"
            );
        }
    }

    #[test]
    fn parse_color_n() {
        assert_eq!("color9".parse::<Color>().unwrap(), Color::Indexed(9));
        assert_eq!("color255".parse::<Color>().unwrap(), Color::Indexed(255));
        assert!("color256".parse::<Color>().is_err());
        assert!("color".parse::<Color>().is_err());
        assert!("color+1".parse::<Color>().is_err());
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert_eq!(
            "purplish".parse::<Color>(),
            Err(ColorParseError::UnknownName("purplish".into()))
        );
        assert_eq!("  ".parse::<Color>(), Err(ColorParseError::Empty));
    }

    #[test]
    fn css_names_keep_their_name() {
        let c: Color = "RebeccaPurple".parse().unwrap();
        assert_eq!(c.id(), "rebeccapurple");
        assert_eq!(c.to_rgb(), Some(Rgb(0x66, 0x33, 0x99)));
        assert_ne!(c, Color::rgb(0x66, 0x33, 0x99));
        assert_eq!(Color::rgb(0x66, 0x33, 0x99).id(), "#663399");
    }

    #[test]
    fn css_aliases_of_palette_colors() {
        for name in ["grey", "cyan", "magenta"] {
            assert_eq!(name.parse::<Color>().unwrap().id(), name);
        }
    }

    #[test]
    fn every_named_color_roundtrips() {
        for named in NamedColor::all() {
            let c = Color::Named(named);
            assert_eq!(c.id().parse::<Color>().unwrap(), c);
        }
    }

    #[test]
    fn every_palette_name_roundtrips() {
        for index in 0..=255u8 {
            let c = Color::Indexed(index);
            assert_eq!(c.id().parse::<Color>().unwrap(), c);
        }
    }

    // =========================================================================
    // RGB values
    // =========================================================================

    #[test]
    fn sentinels() {
        for c in [Color::None, Color::Default, Color::Reset] {
            assert!(c.is_sentinel());
            assert_eq!(c.to_rgb(), None);
        }
        assert!(!Color::Indexed(0).is_sentinel());
        assert!(!Color::rgb(0, 0, 0).is_sentinel());
        assert!(!"orange".parse::<Color>().unwrap().is_sentinel());
    }

    #[test]
    fn to_rgb_values() {
        assert_eq!(Color::Indexed(12).to_rgb(), Some(Rgb(0, 0, 255)));
        assert_eq!(Color::rgb(1, 2, 3).to_rgb(), Some(Rgb(1, 2, 3)));
        assert_eq!(Color::Reset.to_rgb(), None);
        assert_eq!(Color::None.to_rgb(), None);
    }

    #[test]
    fn serde_uses_identifiers() {
        let json = serde_json::to_string(&Color::Indexed(2)).unwrap();
        assert_eq!(json, "\"green\"");
        let back: Color = serde_json::from_str("\"#00ff7f\"").unwrap();
        assert_eq!(back, Color::rgb(0, 0xff, 0x7f));
        assert!(serde_json::from_str::<Color>("\"nonsense\"").is_err());
    }
}
