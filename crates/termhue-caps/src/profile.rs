//! Terminal color profiles.

use std::fmt;

/// The color depth a terminal supports.
///
/// Profiles are matched exactly; callers must not rely on their ordering to
/// mean "at least this capable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorProfile {
    /// No color support at all.
    Monochrome,
    /// The sixteen ANSI colors.
    Ansi,
    /// The xterm 256-color palette.
    Xterm256,
    /// 24-bit direct color.
    TrueColor,
}

impl fmt::Display for ColorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorProfile::Monochrome => "monochrome",
            ColorProfile::Ansi => "ansi",
            ColorProfile::Xterm256 => "xterm-256",
            ColorProfile::TrueColor => "truecolor",
        };
        f.write_str(name)
    }
}
