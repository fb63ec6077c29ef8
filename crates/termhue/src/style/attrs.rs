//! Text attribute flags and their tag letters.

bitflags::bitflags! {
    /// Text attributes a style can turn on or off.
    ///
    /// ```
    /// use termhue::Attrs;
    ///
    /// let attrs = Attrs::BOLD | Attrs::ITALIC;
    /// assert!(attrs.contains(Attrs::BOLD));
    /// assert!(!attrs.contains(Attrs::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attrs: u8 {
        const BOLD          = 0b0000_0001;
        const BLINK         = 0b0000_0010;
        const DIM           = 0b0000_0100;
        const ITALIC        = 0b0000_1000;
        const REVERSE       = 0b0001_0000;
        const UNDERLINE     = 0b0010_0000;
        const STRIKETHROUGH = 0b0100_0000;
    }
}

/// Tag letter of each attribute, in encoding order.
pub(crate) const LETTERS: [(Attrs, char); 7] = [
    (Attrs::BOLD, 'b'),
    (Attrs::BLINK, 'l'),
    (Attrs::DIM, 'd'),
    (Attrs::ITALIC, 'i'),
    (Attrs::REVERSE, 'r'),
    (Attrs::UNDERLINE, 'u'),
    (Attrs::STRIKETHROUGH, 's'),
];

impl Attrs {
    /// The attribute a tag letter stands for.
    pub fn from_letter(letter: char) -> Option<Attrs> {
        LETTERS
            .iter()
            .find(|(_, l)| *l == letter)
            .map(|(attr, _)| *attr)
    }

    /// Writes the letters of the set attributes in encoding order.
    pub(crate) fn write_letters(self, out: &mut String) {
        for (attr, letter) in LETTERS {
            if self.contains(attr) {
                out.push(letter);
            }
        }
    }
}
