//! Offset table from (style, character class) to substitution rule.

use super::style::StyleVariant;

/// First code point of the fullwidth forms block (`！`).
const FULLWIDTH_START: u32 = 0xFF01;

/// First printable ASCII character (`!`), mapped onto `FULLWIDTH_START`.
const PRINTABLE_START: u32 = 0x21;

/// Mathematical italic small h, used because U+1D455 is reserved for ℎ.
const SERIF_ITALIC_SMALL_H: char = '\u{1D489}';

/// Character class derived from an input character's value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    UppercaseLatin,
    LowercaseLatin,
    Digit,
    /// Printable ASCII under the fullwidth style only
    FullWidthPrintable,
    Other,
}

impl CharacterClass {
    /// Classify `c` for `style`.
    ///
    /// The fullwidth class only exists for [`StyleVariant::FullWidth`] and wins
    /// over the letter and digit classes.
    pub fn of(c: char, style: StyleVariant) -> Self {
        match c {
            '!'..='~' if style == StyleVariant::FullWidth => Self::FullWidthPrintable,
            'A'..='Z' => Self::UppercaseLatin,
            'a'..='z' => Self::LowercaseLatin,
            '0'..='9' => Self::Digit,
            _ => Self::Other,
        }
    }

    /// The ASCII character the class range starts at.
    fn origin(&self) -> u32 {
        match self {
            Self::UppercaseLatin => 'A' as u32,
            Self::LowercaseLatin => 'a' as u32,
            Self::Digit => '0' as u32,
            Self::FullWidthPrintable => PRINTABLE_START,
            Self::Other => 0,
        }
    }
}

/// What to do with a character of a given class under a given style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Emit the character unchanged
    PassThrough,
    /// Shift the class range so that its origin lands on this code point
    Block(u32),
    /// Emit this exact character
    Fixed(char),
}

impl Substitution {
    /// Apply the rule to `c` of class `class`.
    pub fn apply(self, c: char, class: CharacterClass) -> char {
        match self {
            Self::PassThrough => c,
            Self::Fixed(out) => out,
            Self::Block(start) => {
                let delta = c as u32 - class.origin();
                char::from_u32(start + delta).unwrap_or(c)
            }
        }
    }
}

/// Look up the substitution rule for `c` (already classified as `class`).
///
/// Combinations without an entry resolve to [`Substitution::PassThrough`].
pub fn lookup(style: StyleVariant, class: CharacterClass, c: char) -> Substitution {
    use CharacterClass::*;
    use StyleVariant::*;
    use Substitution::*;

    match (class, style) {
        (FullWidthPrintable, FullWidth) => Block(FULLWIDTH_START),

        (UppercaseLatin, Serif) => PassThrough,
        (UppercaseLatin, SerifItalic) => Block(0x1D434),
        (UppercaseLatin, SerifBold) => Block(0x1D400),
        (UppercaseLatin, SerifBoldItalic) => Block(0x1D468),
        (UppercaseLatin, SansSerif) => Block(0x1D5A0),
        (UppercaseLatin, SansSerifItalic) => Block(0x1D608),
        (UppercaseLatin, SansSerifBold) => Block(0x1D5D4),
        (UppercaseLatin, SansSerifBoldItalic) => Block(0x1D63C),
        (UppercaseLatin, Monospace) => Block(0x1D670),
        (UppercaseLatin, ScriptBold) => Block(0x1D4D0),
        (UppercaseLatin, FrakturBold) => Block(0x1D56C),

        (LowercaseLatin, Serif) => PassThrough,
        (LowercaseLatin, SerifItalic) if c == 'h' => Fixed(SERIF_ITALIC_SMALL_H),
        (LowercaseLatin, SerifItalic) => Block(0x1D44E),
        (LowercaseLatin, SerifBold) => Block(0x1D41A),
        (LowercaseLatin, SerifBoldItalic) => Block(0x1D482),
        (LowercaseLatin, SansSerif) => Block(0x1D5BA),
        (LowercaseLatin, SansSerifItalic) => Block(0x1D622),
        (LowercaseLatin, SansSerifBold) => Block(0x1D5EE),
        (LowercaseLatin, SansSerifBoldItalic) => Block(0x1D656),
        (LowercaseLatin, Monospace) => Block(0x1D68A),
        (LowercaseLatin, ScriptBold) => Block(0x1D4EA),
        (LowercaseLatin, FrakturBold) => Block(0x1D586),

        (Digit, SerifBold) => Block(0x1D7CE),
        (Digit, SansSerif) => Block(0x1D7E2),
        (Digit, SansSerifBold) => Block(0x1D7EC),
        (Digit, Monospace) => Block(0x1D7F6),
        (
            Digit,
            Serif | SerifItalic | SerifBoldItalic | SansSerifItalic | SansSerifBoldItalic
            | ScriptBold | FrakturBold,
        ) => PassThrough,

        _ => PassThrough,
    }
}
