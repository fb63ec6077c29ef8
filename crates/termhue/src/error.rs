//! Error types for color and style tag parsing.
//!
//! Resolution and quantization never fail: an unrepresentable color or an
//! unknown terminal capability degrades to [`Color::Default`](crate::Color::Default).
//! Only text decoding reports errors.

/// Error returned when a color identifier cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The identifier was empty.
    #[error("empty color identifier")]
    Empty,

    /// A `#` literal that is not `#rgb` or `#rrggbb`.
    #[error("invalid hex color '{0}' (must be #rgb or #rrggbb)")]
    InvalidHex(String),

    /// A name that is not in the color dictionary.
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

/// The color slot of a style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Foreground,
    Background,
}

impl std::fmt::Display for TagField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagField::Foreground => f.write_str("foreground"),
            TagField::Background => f.write_str("background"),
        }
    }
}

/// Error returned when a style tag cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagParseError {
    /// The tag is not enclosed in `[` and `]`.
    #[error("style tag must be enclosed in brackets: '{0}'")]
    MissingBrackets(String),

    /// The tag has fewer than the three `fg:bg:attrs` fields.
    #[error("style tag needs at least 3 fields, got {0}")]
    FieldCount(usize),

    /// A color field holds an invalid color.
    #[error("invalid {field} color in style tag")]
    InvalidColor {
        /// Which color slot failed.
        field: TagField,
        /// The underlying color error.
        #[source]
        source: ColorParseError,
    },

    /// An attribute letter outside `bldirus`.
    #[error("unknown attribute letter '{0}'")]
    UnknownAttribute(char),

    /// An attribute letter given more than once.
    #[error("attribute letter '{0}' appears more than once")]
    DuplicateAttribute(char),

    /// A `-` anywhere but the start of the attribute field.
    #[error("'-' may only start the attribute field")]
    MisplacedNegation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_color_error_display() {
        let err = ColorParseError::UnknownName("chartreuse-ish".into());
        assert!(err.to_string().contains("chartreuse-ish"));
    }

    #[test]
    fn test_invalid_color_has_source() {
        let err = TagParseError::InvalidColor {
            field: TagField::Background,
            source: ColorParseError::InvalidHex("#12".into()),
        };
        assert!(err.to_string().contains("background"));
        let source = err.source().expect("source");
        assert!(source.to_string().contains("#12"));
    }
}
