//! Console compositor.
//!
//! [`Console`] ties the pieces together for each print call:
//! 1. Pending cursor offsets become movement directives
//! 2. The foreground color is set
//! 3. Text is written, glyph-substituted on the styled path
//! 4. The color is reset and the running column advanced
//!
//! Header rows go through the plain path after each cell has been formatted
//! and padded to its field width.

mod error;

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::align::{align_cell, Alignment, CellValue, FieldSpec};
use crate::cursor::{PositionTracker, PrintPath};
use crate::glyph::{stylize, StyleVariant};

pub use error::ConsoleError;

/// Parse a color name (`red`, `dark_cyan`, `grey`, ...).
pub fn parse_color(name: &str) -> Result<Color, ConsoleError> {
    Color::try_from(name).map_err(|_| ConsoleError::UnknownColor {
        name: name.to_string(),
    })
}

/// How header rows are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSettings {
    /// Whether header rows are written at all
    pub show: bool,
    /// Padding policy for every cell
    pub alignment: Alignment,
    /// Text placed between cells
    pub separator: String,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            show: true,
            alignment: Alignment::Center,
            separator: " ".to_string(),
        }
    }
}

/// One header cell: a value and its column layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub spec: FieldSpec,
}

impl Cell {
    pub fn new(value: impl Into<CellValue>, spec: FieldSpec) -> Self {
        Self {
            value: value.into(),
            spec,
        }
    }
}

/// Writes styled text and header rows to `W`, keeping cursor offsets between
/// calls.
pub struct Console<W: Write> {
    out: W,
    tracker: PositionTracker,
    style: StyleVariant,
    color: Option<Color>,
    header: HeaderSettings,
}

impl<W: Write> Console<W> {
    /// Create a console with the default style and no color.
    pub fn new(out: W) -> Self {
        Self::with_style(out, StyleVariant::default())
    }

    /// Create a console whose styled prints use `style`.
    pub fn with_style(out: W, style: StyleVariant) -> Self {
        Self {
            out,
            tracker: PositionTracker::new(),
            style,
            color: None,
            header: HeaderSettings::default(),
        }
    }

    /// Cursor state owned by this console.
    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    pub fn style(&self) -> StyleVariant {
        self.style
    }

    pub fn set_style(&mut self, style: StyleVariant) {
        self.style = style;
    }

    /// Foreground color for subsequent prints; `None` leaves the terminal's.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn header(&self) -> &HeaderSettings {
        &self.header
    }

    pub fn set_header(&mut self, header: HeaderSettings) {
        self.header = header;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.header.alignment = alignment;
    }

    pub fn show_header(&mut self, show: bool) {
        self.header.show = show;
    }

    /// Queue upward movement for the next print.
    pub fn move_up(&mut self, lines: usize) {
        self.tracker.move_up(lines);
    }

    /// Queue rightward movement for the next print.
    pub fn move_right(&mut self, columns: usize) {
        self.tracker.move_right(columns);
    }

    /// Write `text` verbatim.
    pub fn print_plain(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.emit(PrintPath::Plain, text, text.chars().count())
    }

    /// Write `text` in the console's style.
    pub fn print_styled(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.print_styled_with(text, self.style)
    }

    /// Write `text` in `style`, leaving the console's style unchanged.
    pub fn print_styled_with(&mut self, text: &str, style: StyleVariant) -> Result<(), ConsoleError> {
        let styled = stylize(text, style);
        self.emit(PrintPath::Styled, &styled, text.chars().count())
    }

    /// Write one header row.
    ///
    /// Does nothing while headers are hidden.
    pub fn print_header(&mut self, cells: &[Cell]) -> Result<(), ConsoleError> {
        if !self.header.show {
            tracing::debug!(cells = cells.len(), "header hidden, skipping row");
            return Ok(());
        }

        let row = cells
            .iter()
            .map(|cell| align_cell(&cell.value, &cell.spec, self.header.alignment))
            .collect::<Vec<_>>()
            .join(&self.header.separator);
        self.print_plain(&row)
    }

    /// End the current line.
    pub fn newline(&mut self) -> Result<(), ConsoleError> {
        self.out.write_all(b"\n")?;
        self.tracker.carriage_return();
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ConsoleError> {
        self.out.flush()?;
        Ok(())
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, path: PrintPath, rendered: &str, raw_len: usize) -> Result<(), ConsoleError> {
        for mv in self.tracker.begin_print(path) {
            mv.queue(&mut self.out)?;
        }
        if let Some(color) = self.color {
            queue!(self.out, SetForegroundColor(color))?;
        }
        queue!(self.out, Print(rendered))?;
        if self.color.is_some() {
            queue!(self.out, ResetColor)?;
        }
        self.tracker.end_print(path, raw_len);
        Ok(())
    }
}
