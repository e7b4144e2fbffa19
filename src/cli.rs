//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::align::Alignment;
use crate::glyph::StyleVariant;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("GLYPHLINE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("GLYPHLINE_BUILD_DATE"),
    ")"
);

/// Print styled Unicode text and aligned header rows
#[derive(Debug, Parser)]
#[command(name = "glyphline", version = VERSION, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print text, styled through glyph substitution
    Print(PrintArgs),

    /// Print one aligned header row
    Header(HeaderArgs),

    /// List every style with a sample
    Styles {
        /// Sample text rendered in each style
        #[arg(long, default_value = "Hello World 0123")]
        sample: String,
    },

    /// Show the code points TEXT maps to in a style
    Map {
        /// Text to map
        text: String,

        /// Style to map with
        #[arg(short, long, value_enum)]
        style: StyleVariant,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Text to print (joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Style to print in (defaults to the configured style)
    #[arg(short, long, value_enum)]
    pub style: Option<StyleVariant>,

    /// Print the text verbatim, without glyph substitution
    #[arg(long)]
    pub plain: bool,

    /// Move the cursor up N lines before printing
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub up: usize,

    /// Move the cursor right N columns before printing
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub right: usize,

    /// Foreground color (e.g. red, dark_cyan)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Do not end the output with a newline
    #[arg(short = 'n', long)]
    pub no_newline: bool,
}

#[derive(Debug, Args)]
pub struct HeaderArgs {
    /// Cell values; integers, decimals and text are told apart automatically
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Alignment within each cell (defaults to the configured alignment)
    #[arg(short, long, value_enum)]
    pub align: Option<Alignment>,

    /// Width of every cell
    #[arg(short, long, default_value_t = 8)]
    pub width: usize,

    /// Digits after the decimal point for decimal values
    #[arg(short, long, default_value_t = 2)]
    pub precision: usize,

    /// Text between cells (defaults to the configured separator)
    #[arg(long)]
    pub separator: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
