//! Colors that adapt to the terminal's color profile and background.
//!
//! An [`AdaptiveColor`] holds one [`PortableColor`] per theme (dark and
//! light), and each portable color holds one value per profile tier. At
//! render time the capability source picks the theme and the tier:
//!
//! | Profile      | Tier used             |
//! |--------------|-----------------------|
//! | `Ansi`       | `ansi16`              |
//! | `Xterm256`   | `ansi256`             |
//! | `TrueColor`  | `rgb`                 |
//! | `Monochrome` | none: `Color::Default`|
//! | unknown      | none: `Color::Default`|
//!
//! ```rust
//! use termhue::{AdaptiveColor, Color, ColorProfile, Resolve, Snapshot};
//!
//! let accent = AdaptiveColor::builder(Color::rgb(0x33, 0x66, 0xff))
//!     .with_light_rgb(Color::rgb(0x00, 0x33, 0x99))
//!     .build();
//!
//! let caps = Snapshot::new()
//!     .with_color_profile(ColorProfile::TrueColor)
//!     .with_light_background(true);
//! assert_eq!(accent.resolve(&caps), Color::rgb(0x00, 0x33, 0x99));
//! ```
//!
//! Adaptive colors can also be declared in configuration files:
//!
//! ```yaml
//! accent: "#3366ff"
//! warning:
//!   color: orange
//!   ansi16: yellow
//!   light:
//!     rgb: "#aa5500"
//! ```

use serde::Deserialize;
use termhue_caps::{CapabilitySource, ColorProfile};

use crate::color::Color;
use crate::quantize::{to_ansi16, to_ansi256};

/// A value that resolves to a concrete [`Color`] for a terminal.
pub trait Resolve {
    /// Picks the color to use given the terminal's capabilities.
    fn resolve(&self, caps: &dyn CapabilitySource) -> Color;
}

impl Resolve for Color {
    fn resolve(&self, _caps: &dyn CapabilitySource) -> Color {
        *self
    }
}

// ─── PortableColor ──────────────────────────────────────────────────────────

/// One color expressed in each profile tier.
///
/// `ansi16` is always a sentinel or an index 0–15, `ansi256` a sentinel or
/// an index. `rgb` is kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortableColor {
    ansi16: Color,
    ansi256: Color,
    rgb: Color,
}

impl PortableColor {
    /// Quantizes `color` into every tier.
    pub fn new(color: Color) -> Self {
        Self {
            ansi16: to_ansi16(color),
            ansi256: to_ansi256(color),
            rgb: color,
        }
    }

    /// The 16-color tier.
    pub fn ansi16(&self) -> Color {
        self.ansi16
    }

    /// The 256-color tier.
    pub fn ansi256(&self) -> Color {
        self.ansi256
    }

    /// The true-color tier.
    pub fn rgb(&self) -> Color {
        self.rgb
    }

    /// The tier matching `profile`, or `Color::Default` if color is off or
    /// the profile is unknown.
    pub fn for_profile(&self, profile: Option<ColorProfile>) -> Color {
        match profile {
            Some(ColorProfile::Ansi) => self.ansi16,
            Some(ColorProfile::Xterm256) => self.ansi256,
            Some(ColorProfile::TrueColor) => self.rgb,
            Some(ColorProfile::Monochrome) | None => Color::Default,
        }
    }
}

impl From<Color> for PortableColor {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl Resolve for PortableColor {
    fn resolve(&self, caps: &dyn CapabilitySource) -> Color {
        self.for_profile(caps.color_profile())
    }
}

// ─── AdaptiveColor ──────────────────────────────────────────────────────────

/// A color with separate variants for dark and light backgrounds.
///
/// Built with [`AdaptiveColor::builder`] and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "AdaptiveColorDef")]
pub struct AdaptiveColor {
    dark: PortableColor,
    light: PortableColor,
}

impl AdaptiveColor {
    /// Starts a builder with both themes seeded from `color`.
    pub fn builder(color: Color) -> AdaptiveColorBuilder {
        let seed = PortableColor::new(color);
        AdaptiveColorBuilder {
            color: AdaptiveColor {
                dark: seed,
                light: seed,
            },
        }
    }

    /// The variant used on dark backgrounds.
    pub fn dark(&self) -> PortableColor {
        self.dark
    }

    /// The variant used on light backgrounds.
    pub fn light(&self) -> PortableColor {
        self.light
    }
}

impl From<Color> for AdaptiveColor {
    fn from(color: Color) -> Self {
        AdaptiveColor::builder(color).build()
    }
}

impl From<AdaptiveColorBuilder> for AdaptiveColor {
    fn from(builder: AdaptiveColorBuilder) -> Self {
        builder.build()
    }
}

impl Resolve for AdaptiveColor {
    fn resolve(&self, caps: &dyn CapabilitySource) -> Color {
        if caps.light_background_mode() {
            self.light.resolve(caps)
        } else {
            self.dark.resolve(caps)
        }
    }
}

/// Builder for [`AdaptiveColor`].
///
/// The `with_*` setters change both themes; `with_light_*` only the light
/// one. Tier setters quantize their argument into the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct AdaptiveColorBuilder {
    color: AdaptiveColor,
}

impl AdaptiveColorBuilder {
    /// Sets the 16-color tier for both themes.
    pub fn with_ansi16(mut self, color: Color) -> Self {
        let color = to_ansi16(color);
        self.color.dark.ansi16 = color;
        self.color.light.ansi16 = color;
        self
    }

    /// Sets the 256-color tier for both themes.
    pub fn with_ansi256(mut self, color: Color) -> Self {
        let color = to_ansi256(color);
        self.color.dark.ansi256 = color;
        self.color.light.ansi256 = color;
        self
    }

    /// Sets the true-color tier for both themes, verbatim.
    pub fn with_rgb(mut self, color: Color) -> Self {
        self.color.dark.rgb = color;
        self.color.light.rgb = color;
        self
    }

    /// Sets the 16-color tier for light backgrounds.
    pub fn with_light_ansi16(mut self, color: Color) -> Self {
        self.color.light.ansi16 = to_ansi16(color);
        self
    }

    /// Sets the 256-color tier for light backgrounds.
    pub fn with_light_ansi256(mut self, color: Color) -> Self {
        self.color.light.ansi256 = to_ansi256(color);
        self
    }

    /// Sets the true-color tier for light backgrounds, verbatim.
    pub fn with_light_rgb(mut self, color: Color) -> Self {
        self.color.light.rgb = color;
        self
    }

    /// Finishes the color.
    pub fn build(self) -> AdaptiveColor {
        self.color
    }
}

// ─── Declarative definitions ────────────────────────────────────────────────

/// Adaptive color as written in a configuration file.
///
/// Either a single color identifier, or a [`TieredDef`] map. Unknown keys
/// and maps without any color are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AdaptiveColorDef {
    Plain(Color),
    Tiered(TieredDef),
}

/// Tier overrides of an [`AdaptiveColorDef`].
///
/// - `color`: the seed, quantized into every tier (defaults to `rgb`, then
///   to `default`);
/// - `ansi16`, `ansi256`, `rgb`: tier overrides for both themes;
/// - `light`: tier overrides for light backgrounds only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TieredDef {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub ansi16: Option<Color>,
    #[serde(default)]
    pub ansi256: Option<Color>,
    #[serde(default)]
    pub rgb: Option<Color>,
    #[serde(default)]
    pub light: LightDef,
}

/// Light-background overrides of a [`TieredDef`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDef {
    #[serde(default)]
    pub ansi16: Option<Color>,
    #[serde(default)]
    pub ansi256: Option<Color>,
    #[serde(default)]
    pub rgb: Option<Color>,
}

impl TryFrom<AdaptiveColorDef> for AdaptiveColor {
    type Error = String;

    fn try_from(def: AdaptiveColorDef) -> Result<Self, Self::Error> {
        let tiers = match def {
            AdaptiveColorDef::Plain(color) => return Ok(color.into()),
            AdaptiveColorDef::Tiered(tiers) => tiers,
        };
        if tiers == TieredDef::default() {
            return Err("adaptive color needs 'color' or at least one tier override".to_string());
        }

        let seed = tiers.color.or(tiers.rgb).unwrap_or(Color::Default);
        let mut builder = AdaptiveColor::builder(seed);
        if let Some(c) = tiers.ansi16 {
            builder = builder.with_ansi16(c);
        }
        if let Some(c) = tiers.ansi256 {
            builder = builder.with_ansi256(c);
        }
        if let Some(c) = tiers.rgb {
            builder = builder.with_rgb(c);
        }
        if let Some(c) = tiers.light.ansi16 {
            builder = builder.with_light_ansi16(c);
        }
        if let Some(c) = tiers.light.ansi256 {
            builder = builder.with_light_ansi256(c);
        }
        if let Some(c) = tiers.light.rgb {
            builder = builder.with_light_rgb(c);
        }
        Ok(builder.build())
    }
}
