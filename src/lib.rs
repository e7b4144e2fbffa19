//! glyphline - styled Unicode text and aligned header rows for the terminal
//!
//! Text is styled by substituting ASCII letters and digits with code points
//! from the Mathematical Alphanumeric Symbols and Fullwidth Forms blocks, so
//! the styling survives copy/paste and needs no terminal attributes.
//!
//! # Module Structure
//!
//! - [`glyph`] - per-character substitution for each [`StyleVariant`]
//! - [`cursor`] - pending cursor offsets and the movement directives they produce
//! - [`align`] - value formatting and padding for header cells
//! - [`console`] - the compositor writing all of the above to a terminal
//! - [`config`] - user configuration file
//! - [`cli`] - command-line definitions (shared with `xtask` for man pages)
//!
//! # Usage
//!
//! ```
//! use glyphline::{Console, StyleVariant};
//!
//! let mut console = Console::with_style(Vec::new(), StyleVariant::SansSerifBold);
//! console.print_styled("AB3").unwrap();
//! assert_eq!(
//!     String::from_utf8(console.into_inner()).unwrap(),
//!     "\u{1D5D4}\u{1D5D5}\u{1D7EF}"
//! );
//! ```

pub mod align;
pub mod cli;
pub mod config;
pub mod console;
pub mod cursor;
pub mod glyph;

pub use align::{align, Alignment, CellValue, FieldSpec};
pub use config::Config;
pub use console::{Cell, Console, ConsoleError, HeaderSettings};
pub use cursor::{CursorMove, CursorState, PositionTracker, PrintPath};
pub use glyph::{map_char, stylize, StyleVariant};
