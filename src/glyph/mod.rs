//! Glyph substitution.
//!
//! Maps ASCII letters and digits onto the Unicode Mathematical Alphanumeric
//! Symbols block (and printable ASCII onto the Fullwidth Forms block) so that
//! plain text renders bold, italic, script, fraktur, and so on in any terminal
//! with a capable font.
//!
//! Substitution is cosmetic and best-effort: characters with no rule for the
//! active style are emitted unchanged.

mod style;
mod table;

pub use style::StyleVariant;
pub use table::{lookup, CharacterClass, Substitution};

/// Substitute a single character under `style`.
pub fn map_char(c: char, style: StyleVariant) -> char {
    let class = CharacterClass::of(c, style);
    let out = lookup(style, class, c).apply(c, class);
    tracing::trace!(input = %c, output = %out, %style, "glyph substitution");
    out
}

/// Substitute every character of `text` under `style`.
pub fn stylize(text: &str, style: StyleVariant) -> String {
    text.chars().map(|c| map_char(c, style)).collect()
}
