//! The static color name dictionary.
//!
//! Two lookups are built lazily, once per process:
//!
//! - identity names, one per palette index: the sixteen ANSI names for
//!   0–15 and `colorN` for 16–255.
//! - parse names: the identity names plus the CSS extended color names,
//!   which decode to [`NamedColor`] values and identify by name again.
//!
//! Every parse name is what [`Color::id`] returns for the color it decodes to.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use termhue_caps::Rgb;

use super::Color;

/// Names of the sixteen ANSI palette colors, by index.
const ANSI_NAMES: [&str; 16] = [
    "black", "maroon", "green", "olive", "navy", "purple", "teal", "silver", "gray", "red", "lime",
    "yellow", "blue", "fuchsia", "aqua", "white",
];

/// CSS extended colors, minus the names the ANSI palette already uses.
const CSS_NAMES: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("blanchedalmond", 0xffebcd),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("forestgreen", 0x228b22),
    ("gainsboro", 0xdcdcdc),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("oldlace", 0xfdf5e6),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("rebeccapurple", 0x663399),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("whitesmoke", 0xf5f5f5),
    ("yellowgreen", 0x9acd32),
];

/// A CSS extended color, identified by its name.
///
/// Named colors display as their RGB value but keep their name, so
/// `"orange"` parses to a color whose identifier is `orange` while
/// `"#ffa500"` stays a plain [`Color::Rgb`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedColor(u8);

impl NamedColor {
    /// Looks up a lowercase CSS color name.
    pub fn from_name(name: &str) -> Option<NamedColor> {
        CSS_NAMES
            .iter()
            .position(|(css, _)| *css == name)
            .map(|index| NamedColor(index as u8))
    }

    /// Every named color, in table order.
    pub fn all() -> impl Iterator<Item = NamedColor> {
        (0..CSS_NAMES.len()).map(|index| NamedColor(index as u8))
    }

    pub const fn name(self) -> &'static str {
        CSS_NAMES[self.0 as usize].0
    }

    pub const fn rgb(self) -> Rgb {
        Rgb::from_hex(CSS_NAMES[self.0 as usize].1)
    }
}

impl fmt::Debug for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamedColor").field(&self.name()).finish()
    }
}

/// Palette index → identity name.
static IDENTITY_NAMES: Lazy<Vec<String>> = Lazy::new(|| {
    (0..=255u8)
        .map(|index| match ANSI_NAMES.get(index as usize) {
            Some(name) => (*name).to_string(),
            None => format!("color{index}"),
        })
        .collect()
});

/// Lowercase name → color, for parsing.
static PARSE_NAMES: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    let mut names = HashMap::with_capacity(256 + CSS_NAMES.len());
    for named in NamedColor::all() {
        names.insert(named.name(), Color::Named(named));
    }
    for (index, name) in IDENTITY_NAMES.iter().enumerate() {
        names.insert(name.as_str(), Color::Indexed(index as u8));
    }
    names
});

/// Returns the identity name of a palette index.
pub(crate) fn index_name(index: u8) -> &'static str {
    IDENTITY_NAMES[index as usize].as_str()
}

/// Looks up a lowercase color name.
pub(crate) fn lookup(name: &str) -> Option<Color> {
    PARSE_NAMES.get(name).copied()
}
