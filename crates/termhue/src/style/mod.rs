//! Styles and their tag encoding.
//!
//! A [`Style`] is a patch applied on top of a base style: it may set the
//! foreground and background, turn attributes on or off, and attach a
//! hyperlink. Anything it leaves unset is inherited from the base.
//!
//! Styles encode to compact tags that can be embedded in text:
//!
//! ```rust
//! use termhue::{Color, Style};
//!
//! let style = Style::new()
//!     .with_fg(Color::Reset)
//!     .with_bold(true)
//!     .with_dim(false);
//! assert_eq!(style.to_string(), "[-::-b]");
//! assert_eq!("[-::-b]".parse::<Style>().unwrap().to_string(), "[-::-b]");
//! ```

mod adaptive;
mod attrs;
mod base;
mod tag;

pub use adaptive::AdaptiveStyle;
pub use attrs::Attrs;
pub use base::{BaseStyle, CellStyle};

use crate::color::Color;

/// A style patch: colors, attribute changes and a hyperlink.
///
/// `Style::default()` is the identity: applying it changes nothing and it
/// encodes to an empty string. An attribute is never both turned on and
/// turned off; the last setter wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    attrs_on: Attrs,
    attrs_off: Attrs,
    url: String,
    url_id: String,
}

impl Style {
    /// Creates the identity style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Turns `attrs` on, cancelling any earlier request to turn them off.
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs_on |= attrs;
        self.attrs_off -= attrs;
        self
    }

    /// Turns `attrs` off, cancelling any earlier request to turn them on.
    pub fn without_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs_off |= attrs;
        self.attrs_on -= attrs;
        self
    }

    /// Turns bold on or off.
    pub fn with_bold(self, on: bool) -> Self {
        self.with_attrs_patch(Attrs::BOLD, on)
    }

    /// Turns dim (faint) on or off.
    pub fn with_dim(self, on: bool) -> Self {
        self.with_attrs_patch(Attrs::DIM, on)
    }

    /// Turns blink on or off.
    pub fn with_blink(self, on: bool) -> Self {
        self.with_attrs_patch(Attrs::BLINK, on)
    }

    /// Turns italic on or off.
    pub fn with_italic(self, on: bool) -> Self {
        self.with_attrs_patch(Attrs::ITALIC, on)
    }

    /// Turns reverse video on or off.
    pub fn with_reverse(self, on: bool) -> Self {
        self.with_attrs_patch(Attrs::REVERSE, on)
    }

    /// Turns underline on or off.
    pub fn with_underline(self, on: bool) -> Self {
        self.with_attrs_patch(Attrs::UNDERLINE, on)
    }

    /// Turns strikethrough on or off.
    pub fn with_strikethrough(self, on: bool) -> Self {
        self.with_attrs_patch(Attrs::STRIKETHROUGH, on)
    }

    /// Attaches a hyperlink target.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the hyperlink id, used by terminals to group link cells.
    /// Not part of the tag encoding.
    pub fn with_url_id(mut self, url_id: impl Into<String>) -> Self {
        self.url_id = url_id.into();
        self
    }

    fn with_attrs_patch(self, attrs: Attrs, on: bool) -> Self {
        if on {
            self.with_attrs(attrs)
        } else {
            self.without_attrs(attrs)
        }
    }

    /// The foreground color, or `None` when inherited.
    pub fn fg(&self) -> Option<Color> {
        self.fg
    }

    /// The background color, or `None` when inherited.
    pub fn bg(&self) -> Option<Color> {
        self.bg
    }

    pub fn attrs_on(&self) -> Attrs {
        self.attrs_on
    }

    pub fn attrs_off(&self) -> Attrs {
        self.attrs_off
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn url_id(&self) -> &str {
        &self.url_id
    }

    /// Whether this is the identity style.
    ///
    /// The hyperlink id counts: a style that only sets `url_id` still
    /// changes the base when applied, so it is not the identity even though
    /// its tag encoding is empty.
    pub fn is_identity(&self) -> bool {
        *self == Style::default()
    }

    /// Applies this style on top of `base`.
    ///
    /// Set colors replace the base colors. Attributes turned on are added
    /// and then attributes turned off are removed. The hyperlink and its id
    /// are replaced only when non-empty.
    pub fn apply<B: BaseStyle>(&self, base: B) -> B {
        let (fg, bg, attrs) = base.decompose();
        let fg = self.fg.unwrap_or(fg);
        let bg = self.bg.unwrap_or(bg);
        let attrs = (attrs | self.attrs_on) - self.attrs_off;

        let mut result = base.with_parts(fg, bg, attrs);
        if !self.url.is_empty() {
            result = result.with_url(&self.url);
        }
        if !self.url_id.is_empty() {
            result = result.with_url_id(&self.url_id);
        }
        result
    }
}
