//! CIE LAB conversion and perceptual color distance.
//!
//! Quantization compares colors in LAB space with the CIEDE2000 difference
//! formula, which tracks perceived difference far better than RGB distance.
//! The LAB values of the 256-color xterm palette are computed once and cached.

use once_cell::sync::Lazy;
use termhue_caps::Rgb;

// ─── CIE LAB internals ─────────────────────────────────────────────────────

/// A color in CIE L*a*b* space, D65 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

// D65 reference white
const XN: f64 = 0.95047;
const YN: f64 = 1.0;
const ZN: f64 = 1.08883;

/// Convert an sRGB channel (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Convert an [`Rgb`] color to CIE LAB via XYZ.
pub(crate) fn rgb_to_lab(rgb: Rgb) -> Lab {
    let r = srgb_to_linear(rgb.0);
    let g = srgb_to_linear(rgb.1);
    let b = srgb_to_linear(rgb.2);

    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

// ─── Palette cache ─────────────────────────────────────────────────────────

static PALETTE_LAB: Lazy<[Lab; 256]> = Lazy::new(|| {
    let mut table = [Lab { l: 0.0, a: 0.0, b: 0.0 }; 256];
    for (index, slot) in table.iter_mut().enumerate() {
        *slot = rgb_to_lab(Rgb::from_xterm(index as u8));
    }
    table
});

/// LAB value of an xterm palette index.
pub(crate) fn palette_lab(index: u8) -> Lab {
    PALETTE_LAB[index as usize]
}

// ─── Distance ──────────────────────────────────────────────────────────────

impl From<Lab> for deltae::LabValue {
    fn from(lab: Lab) -> Self {
        deltae::LabValue {
            l: lab.l as f32,
            a: lab.a as f32,
            b: lab.b as f32,
        }
    }
}

/// CIEDE2000 color difference between two LAB colors.
pub(crate) fn delta_e(x: Lab, y: Lab) -> f32 {
    let x: deltae::LabValue = x.into();
    let y: deltae::LabValue = y.into();
    *deltae::DeltaE::new(x, y, deltae::DEMethod::DE2000).value()
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lab_black_is_zero_lightness() {
        let lab = rgb_to_lab(Rgb(0, 0, 0));
        assert!(lab.l.abs() < 0.01);
    }

    #[test]
    fn lab_white_is_full_lightness() {
        let lab = rgb_to_lab(Rgb(255, 255, 255));
        assert!((lab.l - 100.0).abs() < 0.1);
        assert!(lab.a.abs() < 0.5);
        assert!(lab.b.abs() < 0.5);
    }

    #[test]
    fn lab_red_has_positive_a() {
        let lab = rgb_to_lab(Rgb(255, 0, 0));
        assert!(lab.a > 50.0, "red should have strongly positive a*, got {}", lab.a);
    }

    #[test]
    fn palette_matches_direct_conversion() {
        assert_eq!(palette_lab(196), rgb_to_lab(Rgb(255, 0, 0)));
        assert_eq!(palette_lab(232), rgb_to_lab(Rgb(8, 8, 8)));
    }

    #[test]
    fn identical_colors_have_zero_distance() {
        let lab = rgb_to_lab(Rgb(0x33, 0x66, 0xff));
        assert!(delta_e(lab, lab).abs() < f32::EPSILON);
    }

    #[test]
    fn distance_is_symmetric_and_ordered() {
        let red = rgb_to_lab(Rgb(255, 0, 0));
        let dark_red = rgb_to_lab(Rgb(200, 0, 0));
        let blue = rgb_to_lab(Rgb(0, 0, 255));
        assert!((delta_e(red, blue) - delta_e(blue, red)).abs() < 1e-3);
        assert!(delta_e(red, dark_red) < delta_e(red, blue));
    }
}
