//! # Termhue - Adaptive Terminal Colors and Style Tags
//!
//! `termhue` lets an application declare a color once per intended
//! appearance and picks the right concrete color at render time, based on
//! what the terminal supports and whether its background is light or dark.
//!
//! ## Core Concepts
//!
//! - [`Color`]: a palette index, a true color, or a terminal sentinel
//!   (`none`, `default`, `reset`), with a canonical text identifier
//! - [`quantize`]: nearest-color reduction into the 16 and 256 color palettes
//!   using the CIEDE2000 perceptual distance
//! - [`AdaptiveColor`]: per-theme, per-profile color variants, resolved
//!   against a [`CapabilitySource`]
//! - [`Style`]: a style patch with a round-trippable tag encoding
//!   (`[fg:bg:attrs[:url]]`)
//! - [`BaseStyle`]: the interface a renderer's style type implements to
//!   receive patches; [`CellStyle`] is a ready-made implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use termhue::{AdaptiveColor, Color, ColorProfile, Resolve, Snapshot, Style};
//!
//! let accent = AdaptiveColor::builder(Color::rgb(0xff, 0x00, 0x00))
//!     .with_light_ansi16(Color::Indexed(1))
//!     .build();
//!
//! // Normally captured from `Detector::new()` once per render pass.
//! let caps = Snapshot::new().with_color_profile(ColorProfile::Xterm256);
//!
//! let style = Style::new().with_fg(accent.resolve(&caps)).with_bold(true);
//! assert_eq!(style.to_string(), "[color196::b]");
//! ```
//!
//! ## Degradation
//!
//! Resolution never fails. A color that cannot be represented, or a
//! terminal whose capabilities are unknown, yields [`Color::Default`]. Only
//! decoding text ([`Color`] identifiers and [`Style`] tags) returns errors.

mod adaptive;
mod color;
mod colorspace;
mod error;
pub mod quantize;
pub mod style;

pub use adaptive::{
    AdaptiveColor, AdaptiveColorBuilder, AdaptiveColorDef, LightDef, PortableColor, Resolve,
    TieredDef,
};
pub use color::{Color, NamedColor};
pub use error::{ColorParseError, TagField, TagParseError};
pub use style::{AdaptiveStyle, Attrs, BaseStyle, CellStyle, Style};

// Capability model
pub use termhue_caps::{
    detect_os_mode, reset_mode_detector, set_mode_detector, stub, CapabilitySource, ColorProfile,
    Detector, EnvReader, MockEnv, OsMode, RealEnv, Rgb, Snapshot, Stub,
};
