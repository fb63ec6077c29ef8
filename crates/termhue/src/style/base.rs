//! The base style a [`Style`](super::Style) patch is applied to.
//!
//! Rendering libraries own their style type. [`BaseStyle`] is the small
//! interface a style type implements to receive patches. [`CellStyle`] is a
//! plain implementation that converts to a [`console::Style`] for output.

use super::Attrs;
use crate::color::Color;
use crate::quantize::to_ansi256;

/// A complete style that [`Style::apply`](super::Style::apply) can patch.
pub trait BaseStyle: Sized {
    /// Splits the style into foreground, background and attributes.
    fn decompose(&self) -> (Color, Color, Attrs);

    /// Rebuilds the style with new colors and attributes, keeping the rest.
    fn with_parts(self, fg: Color, bg: Color, attrs: Attrs) -> Self;

    fn with_url(self, url: &str) -> Self;

    fn with_url_id(self, url_id: &str) -> Self;
}

/// A resolved cell style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct CellStyle {
    fg: Color,
    bg: Color,
    attrs: Attrs,
    url: Option<String>,
    url_id: Option<String>,
}

impl CellStyle {
    /// Default colors, no attributes, no link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Sets the background color.
    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Replaces the attribute set.
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Sets the hyperlink target.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the hyperlink id.
    pub fn with_url_id(mut self, url_id: impl Into<String>) -> Self {
        self.url_id = Some(url_id.into());
        self
    }

    pub fn fg(&self) -> Color {
        self.fg
    }

    pub fn bg(&self) -> Color {
        self.bg
    }

    pub fn attrs(&self) -> Attrs {
        self.attrs
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn url_id(&self) -> Option<&str> {
        self.url_id.as_deref()
    }

    /// Converts to a [`console::Style`].
    ///
    /// True and named colors are reduced to the 256-color palette. Sentinels
    /// leave the terminal's color in place. Hyperlinks are not carried over.
    pub fn to_console(&self) -> console::Style {
        let mut style = console::Style::new();
        if let Some(fg) = to_console_color(self.fg) {
            style = style.fg(fg);
        }
        if let Some(bg) = to_console_color(self.bg) {
            style = style.bg(bg);
        }

        let attrs: [(Attrs, fn(console::Style) -> console::Style); 7] = [
            (Attrs::BOLD, console::Style::bold),
            (Attrs::BLINK, console::Style::blink),
            (Attrs::DIM, console::Style::dim),
            (Attrs::ITALIC, console::Style::italic),
            (Attrs::REVERSE, console::Style::reverse),
            (Attrs::UNDERLINE, console::Style::underlined),
            (Attrs::STRIKETHROUGH, console::Style::strikethrough),
        ];
        for (attr, set) in attrs {
            if self.attrs.contains(attr) {
                style = set(style);
            }
        }
        style
    }
}

fn to_console_color(color: Color) -> Option<console::Color> {
    if color.is_sentinel() {
        return None;
    }
    to_ansi256(color).index().map(console::Color::Color256)
}

impl BaseStyle for CellStyle {
    fn decompose(&self) -> (Color, Color, Attrs) {
        (self.fg, self.bg, self.attrs)
    }

    fn with_parts(self, fg: Color, bg: Color, attrs: Attrs) -> Self {
        Self {
            fg,
            bg,
            attrs,
            ..self
        }
    }

    fn with_url(self, url: &str) -> Self {
        CellStyle::with_url(self, url)
    }

    fn with_url_id(self, url_id: &str) -> Self {
        CellStyle::with_url_id(self, url_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(style: console::Style) -> String {
        style.force_styling(true).apply_to("x").to_string()
    }

    #[test]
    fn plain_cell_renders_unstyled() {
        assert_eq!(render(CellStyle::new().to_console()), "x");
    }

    #[test]
    fn indexed_colors_pass_through() {
        let cell = CellStyle::new()
            .with_fg(Color::Indexed(208))
            .with_bg(Color::Indexed(4));
        assert_eq!(
            render(cell.to_console()),
            render(console::Style::new().color256(208).on_color256(4))
        );
    }

    #[test]
    fn rgb_reduced_to_palette() {
        let cell = CellStyle::new().with_fg(Color::rgb(255, 0, 0));
        assert_eq!(
            render(cell.to_console()),
            render(console::Style::new().color256(196))
        );
    }

    #[test]
    fn named_colors_reduced_to_palette() {
        let cell = CellStyle::new().with_bg("red".parse::<Color>().unwrap());
        assert_eq!(
            render(cell.to_console()),
            render(console::Style::new().on_color256(9))
        );
        let cell = CellStyle::new().with_fg("cyan".parse::<Color>().unwrap());
        assert_eq!(
            render(cell.to_console()),
            render(console::Style::new().color256(51))
        );
    }

    #[test]
    fn sentinels_set_no_color() {
        for c in [Color::None, Color::Default, Color::Reset] {
            assert_eq!(render(CellStyle::new().with_fg(c).with_bg(c).to_console()), "x");
        }
    }

    #[test]
    fn attributes_map_to_console() {
        let cell = CellStyle::new().with_attrs(Attrs::BOLD | Attrs::UNDERLINE);
        assert_eq!(
            render(cell.to_console()),
            render(console::Style::new().bold().underlined())
        );
    }

    #[test]
    fn with_parts_keeps_links() {
        let cell = CellStyle::new()
            .with_url("https://example.com")
            .with_parts(Color::Reset, Color::None, Attrs::DIM);
        assert_eq!(cell.url(), Some("https://example.com"));
        assert_eq!(cell.decompose(), (Color::Reset, Color::None, Attrs::DIM));
    }
}
