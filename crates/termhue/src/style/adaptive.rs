//! Style templates with adaptive colors.

use termhue_caps::CapabilitySource;

use super::Style;
use crate::adaptive::{AdaptiveColor, Resolve};

/// A [`Style`] whose colors are resolved per terminal.
///
/// Attributes and hyperlinks come from the template style. Adaptive colors,
/// when set, replace the template's colors at resolution time.
///
/// ```rust
/// use termhue::{AdaptiveColor, AdaptiveStyle, Color, ColorProfile, Snapshot, Style};
///
/// let heading = AdaptiveStyle::new(Style::new().with_bold(true))
///     .with_fg(AdaptiveColor::builder(Color::rgb(0xff, 0x00, 0x00)).build());
///
/// let caps = Snapshot::new().with_color_profile(ColorProfile::Ansi);
/// assert_eq!(heading.resolve(&caps).to_string(), "[red::b]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct AdaptiveStyle {
    template: Style,
    fg: Option<AdaptiveColor>,
    bg: Option<AdaptiveColor>,
}

impl AdaptiveStyle {
    pub fn new(template: Style) -> Self {
        Self {
            template,
            fg: None,
            bg: None,
        }
    }

    pub fn with_fg(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.fg = Some(color.into());
        self
    }

    pub fn with_bg(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.bg = Some(color.into());
        self
    }

    pub fn template(&self) -> &Style {
        &self.template
    }

    /// Produces the concrete style for a terminal.
    pub fn resolve(&self, caps: &dyn CapabilitySource) -> Style {
        let mut style = self.template.clone();
        if let Some(fg) = &self.fg {
            style = style.with_fg(fg.resolve(caps));
        }
        if let Some(bg) = &self.bg {
            style = style.with_bg(bg.resolve(caps));
        }
        style
    }
}

impl From<Style> for AdaptiveStyle {
    fn from(template: Style) -> Self {
        Self::new(template)
    }
}
