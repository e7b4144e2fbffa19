//! Console errors.

/// Errors that can occur while writing to the console.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Failed to write to terminal: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown color '{name}'")]
    UnknownColor { name: String },
}
