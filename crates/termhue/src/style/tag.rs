//! Style tag encoding: `[fg:bg:attrs[:url]]`.
//!
//! - `fg` and `bg` are empty when inherited, `-` for `reset`, otherwise the
//!   color identifier.
//! - `attrs` starts with `-` when any attribute is turned off, followed by
//!   the letters of the attributes turned on, in the order `b l d i r u s`.
//! - `:url` is present only when the style has a hyperlink. Everything after
//!   the third `:` up to the closing `]` is the URL.
//!
//! The identity style encodes to an empty string. The hyperlink id is not
//! encoded, so a style that only sets it also encodes to an empty string
//! while not being the identity. The tag names which
//! attributes are on but not which are off, so a decoded `-` turns off every
//! attribute not listed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Attrs, Style};
use crate::color::Color;
use crate::error::{TagField, TagParseError};

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fg.is_none()
            && self.bg.is_none()
            && self.attrs_on.is_empty()
            && self.attrs_off.is_empty()
            && self.url.is_empty()
        {
            return Ok(());
        }

        let mut tag = String::from("[");
        push_color(&mut tag, self.fg);
        tag.push(':');
        push_color(&mut tag, self.bg);
        tag.push(':');
        if !self.attrs_off.is_empty() {
            tag.push('-');
        }
        self.attrs_on.write_letters(&mut tag);
        if !self.url.is_empty() {
            tag.push(':');
            tag.push_str(&self.url);
        }
        tag.push(']');
        f.write_str(&tag)
    }
}

fn push_color(tag: &mut String, color: Option<Color>) {
    match color {
        None => {}
        Some(Color::Reset) => tag.push('-'),
        Some(color) => tag.push_str(&color.id()),
    }
}

impl FromStr for Style {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Style::default());
        }

        let body = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| TagParseError::MissingBrackets(s.to_string()))?;

        let fields: Vec<&str> = body.splitn(4, ':').collect();
        let [fg, bg, attrs, url @ ..] = fields.as_slice() else {
            return Err(TagParseError::FieldCount(fields.len()));
        };

        let mut style = Style {
            fg: parse_color(fg, TagField::Foreground)?,
            bg: parse_color(bg, TagField::Background)?,
            ..Style::default()
        };

        let (negated, letters) = match attrs.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, *attrs),
        };
        for letter in letters.chars() {
            if letter == '-' {
                return Err(TagParseError::MisplacedNegation);
            }
            let attr = Attrs::from_letter(letter).ok_or(TagParseError::UnknownAttribute(letter))?;
            if style.attrs_on.contains(attr) {
                return Err(TagParseError::DuplicateAttribute(letter));
            }
            style.attrs_on |= attr;
        }
        if negated {
            style.attrs_off = Attrs::all() - style.attrs_on;
        }

        if let Some(url) = url.first() {
            style.url = (*url).to_string();
        }
        Ok(style)
    }
}

fn parse_color(field: &str, which: TagField) -> Result<Option<Color>, TagParseError> {
    match field {
        "" => Ok(None),
        "-" => Ok(Some(Color::Reset)),
        id => id
            .parse()
            .map(Some)
            .map_err(|source| TagParseError::InvalidColor {
                field: which,
                source,
            }),
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
