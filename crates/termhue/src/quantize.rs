//! Nearest-color quantization into constrained palettes.
//!
//! A color is reduced to a palette tier by scanning the candidate indices in
//! ascending order and keeping the one with the smallest CIEDE2000 distance.
//! Ties go to the lowest index.
//!
//! ```rust
//! use termhue::{quantize, Color};
//!
//! let red = Color::rgb(255, 0, 0);
//! assert_eq!(quantize::to_ansi16(red), Color::Indexed(9));
//! assert_eq!(quantize::to_ansi256(red), Color::Indexed(196));
//! ```

use crate::color::Color;
use crate::colorspace::{delta_e, palette_lab, rgb_to_lab};

/// Returns the palette index in `low..=high` perceptually closest to `source`.
///
/// A source with no RGB value (any sentinel) yields [`Color::Default`], the
/// only result that can fall outside the range.
pub fn nearest_in_range(source: Color, low: u8, high: u8) -> Color {
    let Some(rgb) = source.to_rgb() else {
        tracing::trace!(color = %source, "no rgb value, quantizing to default");
        return Color::Default;
    };
    let target = rgb_to_lab(rgb);

    let mut best = None;
    let mut best_distance = f32::INFINITY;
    for index in low..=high {
        let distance = delta_e(target, palette_lab(index));
        if distance < best_distance {
            best_distance = distance;
            best = Some(index);
        }
    }

    match best {
        Some(index) => Color::Indexed(index),
        None => {
            tracing::trace!(color = %source, low, high, "empty range, quantizing to default");
            Color::Default
        }
    }
}

/// Quantizes to the basic sixteen ANSI colors.
///
/// `Default`, `Reset` and indices 0–15 pass through unchanged.
pub fn to_ansi16(color: Color) -> Color {
    match color {
        Color::Default | Color::Reset => color,
        Color::Indexed(index) if index < 16 => color,
        _ => nearest_in_range(color, 0, 15),
    }
}

/// Quantizes to the 256-color palette.
///
/// `Default`, `Reset` and every index pass through unchanged. Other colors map
/// into the extended range 16–255, whose values do not depend on the
/// terminal theme.
pub fn to_ansi256(color: Color) -> Color {
    match color {
        Color::Default | Color::Reset | Color::Indexed(_) => color,
        _ => nearest_in_range(color, 16, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Pass-through
    // =========================================================================

    #[test]
    fn ansi16_indices_unchanged() {
        for index in 0..16u8 {
            assert_eq!(to_ansi16(Color::Indexed(index)), Color::Indexed(index));
        }
    }

    #[test]
    fn ansi256_indices_unchanged() {
        for index in 0..=255u8 {
            assert_eq!(to_ansi256(Color::Indexed(index)), Color::Indexed(index));
        }
    }

    #[test]
    fn default_and_reset_unchanged() {
        for color in [Color::Default, Color::Reset] {
            assert_eq!(to_ansi16(color), color);
            assert_eq!(to_ansi256(color), color);
        }
    }

    #[test]
    fn none_quantizes_to_default() {
        assert_eq!(to_ansi16(Color::None), Color::Default);
        assert_eq!(to_ansi256(Color::None), Color::Default);
    }

    // =========================================================================
    // Nearest match
    // =========================================================================

    #[test]
    fn exact_palette_values() {
        assert_eq!(to_ansi256(Color::rgb(0x5f, 0x87, 0xaf)), Color::Indexed(67));
        assert_eq!(to_ansi256(Color::rgb(8, 8, 8)), Color::Indexed(232));
        assert_eq!(to_ansi256(Color::rgb(0, 0, 0)), Color::Indexed(16));
        assert_eq!(to_ansi256(Color::rgb(255, 0, 0)), Color::Indexed(196));
        assert_eq!(to_ansi16(Color::rgb(255, 0, 0)), Color::Indexed(9));
        assert_eq!(to_ansi16(Color::rgb(0, 0, 128)), Color::Indexed(4));
    }

    #[test]
    fn extended_index_into_ansi16() {
        // color196 is pure red.
        assert_eq!(to_ansi16(Color::Indexed(196)), Color::Indexed(9));
        // color231 is pure white.
        assert_eq!(to_ansi16(Color::Indexed(231)), Color::Indexed(15));
    }

    #[test]
    fn near_colors() {
        assert_eq!(to_ansi16(Color::rgb(250, 5, 5)), Color::Indexed(9));
        assert_eq!(to_ansi256(Color::rgb(254, 1, 1)), Color::Indexed(196));
    }

    #[test]
    fn result_stays_in_range() {
        for hex in [0x3366ff, 0x123456, 0xfedcba, 0x808080, 0x00ff7f] {
            match nearest_in_range(Color::from_hex(hex), 100, 120) {
                Color::Indexed(index) => assert!((100..=120).contains(&index)),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn single_candidate_range() {
        assert_eq!(
            nearest_in_range(Color::rgb(255, 255, 255), 16, 16),
            Color::Indexed(16)
        );
    }

    #[test]
    fn inverted_range_is_default() {
        assert_eq!(nearest_in_range(Color::rgb(1, 2, 3), 10, 5), Color::Default);
    }

    #[test]
    fn sentinel_source_is_default() {
        assert_eq!(nearest_in_range(Color::Reset, 0, 15), Color::Default);
    }
}
