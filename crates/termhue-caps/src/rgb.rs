//! 24-bit RGB values and the standard xterm palette.

/// A 24-bit color in sRGB space.
///
/// This is the crate's own RGB type, shared by every capability source and by
/// the color model built on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Creates a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Returns the packed `0xRRGGBB` value.
    pub const fn to_hex(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }

    /// Returns the RGB value of an xterm palette index.
    ///
    /// Indices 0–15 use the VGA-style values terminals ship by default,
    /// 16–231 form the 6×6×6 color cube and 232–255 the grayscale ramp.
    pub const fn from_xterm(index: u8) -> Self {
        match index {
            0..=15 => ANSI16[index as usize],
            16..=231 => {
                let i = index - 16;
                Rgb(
                    CUBE_LEVELS[(i / 36) as usize],
                    CUBE_LEVELS[((i / 6) % 6) as usize],
                    CUBE_LEVELS[(i % 6) as usize],
                )
            }
            _ => {
                let v = 8 + (index - 232) * 10;
                Rgb(v, v, v)
            }
        }
    }

    /// HSL lightness of the color, in `0.0..=1.0`.
    pub fn lightness(self) -> f64 {
        let max = self.0.max(self.1).max(self.2) as f64;
        let min = self.0.min(self.1).min(self.2) as f64;
        (max + min) / 2.0 / 255.0
    }

    /// Whether text drawn on this color should use a dark foreground.
    pub fn is_light(self) -> bool {
        self.lightness() >= 0.5
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

/// Per-axis intensity steps of the xterm 6×6×6 color cube.
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Default RGB values of the sixteen ANSI colors.
pub const ANSI16: [Rgb; 16] = [
    Rgb::from_hex(0x000000), // black
    Rgb::from_hex(0x800000), // maroon
    Rgb::from_hex(0x008000), // green
    Rgb::from_hex(0x808000), // olive
    Rgb::from_hex(0x000080), // navy
    Rgb::from_hex(0x800080), // purple
    Rgb::from_hex(0x008080), // teal
    Rgb::from_hex(0xc0c0c0), // silver
    Rgb::from_hex(0x808080), // gray
    Rgb::from_hex(0xff0000), // red
    Rgb::from_hex(0x00ff00), // lime
    Rgb::from_hex(0xffff00), // yellow
    Rgb::from_hex(0x0000ff), // blue
    Rgb::from_hex(0xff00ff), // fuchsia
    Rgb::from_hex(0x00ffff), // aqua
    Rgb::from_hex(0xffffff), // white
];
