//! Relative cursor movement directives.

use std::io::{self, Write};

use crossterm::cursor::{MoveRight, MoveUp};
use crossterm::queue;

/// A one-shot relative cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// Move up by N lines
    Up(usize),
    /// Move right by N columns
    Right(usize),
}

impl CursorMove {
    /// Number of lines or columns to move.
    pub fn magnitude(&self) -> usize {
        match self {
            Self::Up(n) | Self::Right(n) => *n,
        }
    }

    /// Queue the control sequence for this move on `out`.
    ///
    /// Magnitudes beyond what a terminal sequence can carry are clamped to
    /// `u16::MAX`.
    pub fn queue<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let n = u16::try_from(self.magnitude()).unwrap_or(u16::MAX);
        match self {
            Self::Up(_) => queue!(out, MoveUp(n)),
            Self::Right(_) => queue!(out, MoveRight(n)),
        }
    }
}
