//! Live capability detection from the environment.
//!
//! [`Detector`] answers capability queries by inspecting the conventional
//! terminal environment variables on every call:
//!
//! | Variable    | Used for |
//! |-------------|----------|
//! | `NO_COLOR`  | forces [`ColorProfile::Monochrome`] when non-empty |
//! | `COLORTERM` | `truecolor` / `24bit` select [`ColorProfile::TrueColor`] |
//! | `TERM`      | terminal family: `dumb`, `*-256color`, direct-color terminals |
//! | `COLORFGBG` | `fg;bg` palette indices of the default colors |
//!
//! When the background color is not advertised, the OS appearance preference
//! decides between light and dark (see [`detect_os_mode`]).
//!
//! Nothing here talks to the terminal itself. Because answers can change
//! between calls, resolve colors against a [`Snapshot`](crate::Snapshot)
//! captured from the detector rather than against the detector directly.

use std::fmt;

use crate::env::{EnvReader, RealEnv};
use crate::mode::{detect_os_mode, OsMode};
use crate::{CapabilitySource, ColorProfile, Rgb};

/// `TERM` values of terminals known to support direct color.
const DIRECT_COLOR_TERMS: &[&str] = &["xterm-kitty", "xterm-ghostty", "alacritty", "wezterm"];

/// A capability source backed by the process environment.
pub struct Detector {
    env: Box<dyn EnvReader>,
}

impl Detector {
    /// Creates a detector reading the real process environment.
    pub fn new() -> Self {
        Self::with_env(RealEnv)
    }

    /// Creates a detector reading from a custom environment.
    pub fn with_env<E: EnvReader + 'static>(env: E) -> Self {
        Self { env: Box::new(env) }
    }

    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.env.var(name).filter(|v| !v.is_empty())
    }

    /// Parses `COLORFGBG` into `(foreground, background)` palette colors.
    ///
    /// The variable is `fg;bg`, or `fg;default;bg` as set by rxvt. Fields that
    /// are not palette indices are reported as unknown.
    fn colorfgbg(&self) -> (Option<Rgb>, Option<Rgb>) {
        let Some(value) = self.non_empty_var("COLORFGBG") else {
            return (None, None);
        };

        let fields: Vec<&str> = value.split(';').collect();
        if fields.len() < 2 {
            return (None, None);
        }

        let to_rgb = |field: &str| field.trim().parse::<u8>().ok().map(Rgb::from_xterm);
        (to_rgb(fields[0]), to_rgb(fields[fields.len() - 1]))
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector").finish_non_exhaustive()
    }
}

impl CapabilitySource for Detector {
    fn color_profile(&self) -> Option<ColorProfile> {
        if self.non_empty_var("NO_COLOR").is_some() {
            tracing::debug!("NO_COLOR is set, color profile is monochrome");
            return Some(ColorProfile::Monochrome);
        }

        let term = self.non_empty_var("TERM");
        if term.as_deref() == Some("dumb") {
            tracing::debug!("TERM=dumb, color profile is monochrome");
            return Some(ColorProfile::Monochrome);
        }

        if let Some(colorterm) = self.non_empty_var("COLORTERM") {
            if colorterm.eq_ignore_ascii_case("truecolor") || colorterm.eq_ignore_ascii_case("24bit")
            {
                tracing::debug!(%colorterm, "COLORTERM selects truecolor");
                return Some(ColorProfile::TrueColor);
            }
        }

        let Some(term) = term else {
            tracing::debug!("TERM is unset, color profile is unknown");
            return None;
        };

        let profile = if term.ends_with("-direct") || DIRECT_COLOR_TERMS.contains(&term.as_str()) {
            ColorProfile::TrueColor
        } else if term.contains("256color") {
            ColorProfile::Xterm256
        } else {
            ColorProfile::Ansi
        };
        tracing::debug!(%term, %profile, "color profile from TERM");
        Some(profile)
    }

    fn background_color(&self) -> Option<Rgb> {
        self.colorfgbg().1
    }

    fn foreground_color(&self) -> Option<Rgb> {
        self.colorfgbg().0
    }

    fn light_background_mode(&self) -> bool {
        if let Some(bg) = self.background_color() {
            tracing::debug!(?bg, "light background from COLORFGBG");
            return bg.is_light();
        }
        detect_os_mode() == Some(OsMode::Light)
    }
}
