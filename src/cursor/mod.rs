//! Cursor offset tracking across print calls.
//!
//! Callers queue relative moves (up N lines, right N columns) between prints.
//! The next print consumes them: [`PositionTracker::begin_print`] turns the
//! pending offsets into [`CursorMove`] directives, and
//! [`PositionTracker::end_print`] advances the running column.
//!
//! The two print paths clear pending motion differently:
//! - [`PrintPath::Plain`] clears each pending offset as it is emitted.
//! - [`PrintPath::Styled`] clears both pending offsets once the text is out,
//!   whether or not they were emitted.

mod directive;

pub use directive::CursorMove;

/// Which print operation is consuming the pending offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintPath {
    /// Text written verbatim
    Plain,
    /// Text run through glyph substitution
    Styled,
}

/// Accumulated cursor offsets for one print session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Lines to move up before the next print
    pub vertical_pending: usize,
    /// Columns to move right before the next print
    pub horizontal_pending: usize,
    /// Column reached on the current line
    pub horizontal_global: usize,
}

/// Turns pending offsets into cursor directives and tracks the running column.
#[derive(Debug, Clone, Default)]
pub struct PositionTracker {
    state: CursorState,
}

impl PositionTracker {
    /// Create a tracker with all offsets at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Column reached on the current line.
    pub fn column(&self) -> usize {
        self.state.horizontal_global
    }

    /// Queue `lines` more lines of upward movement for the next print.
    pub fn move_up(&mut self, lines: usize) {
        self.state.vertical_pending = self.state.vertical_pending.saturating_add(lines);
    }

    /// Queue `columns` more columns of rightward movement for the next print.
    pub fn move_right(&mut self, columns: usize) {
        self.state.horizontal_pending = self.state.horizontal_pending.saturating_add(columns);
    }

    /// Replace both pending offsets.
    pub fn set_pending(&mut self, vertical: usize, horizontal: usize) {
        self.state.vertical_pending = vertical;
        self.state.horizontal_pending = horizontal;
    }

    /// Start of a new line: the running column goes back to zero.
    pub fn carriage_return(&mut self) {
        self.state.horizontal_global = 0;
    }

    /// Zero every offset.
    pub fn reset(&mut self) {
        self.state = CursorState::default();
    }

    /// Produce the directives needed before printing on `path`.
    ///
    /// Upward movement always comes before rightward movement. A pending
    /// horizontal offset also becomes the new running column.
    pub fn begin_print(&mut self, path: PrintPath) -> Vec<CursorMove> {
        let mut moves = Vec::with_capacity(2);

        if self.state.vertical_pending > 0 {
            moves.push(CursorMove::Up(self.state.vertical_pending));
            self.state.vertical_pending = 0;
        }

        if self.state.horizontal_pending > 0 {
            self.state.horizontal_global = self.state.horizontal_pending;
            moves.push(CursorMove::Right(self.state.horizontal_pending));
            if path == PrintPath::Plain {
                self.state.horizontal_pending = 0;
            }
        }

        if !moves.is_empty() {
            tracing::debug!(?path, ?moves, "cursor directives");
        }
        moves
    }

    /// Record that `emitted_len` characters were printed on `path`.
    pub fn end_print(&mut self, path: PrintPath, emitted_len: usize) {
        self.state.horizontal_global = self.state.horizontal_global.saturating_add(emitted_len);
        if path == PrintPath::Styled {
            self.state.vertical_pending = 0;
            self.state.horizontal_pending = 0;
        }
    }
}
