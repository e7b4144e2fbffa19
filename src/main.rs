//! glyphline command-line entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use glyphline::cli::{Cli, Commands, ConfigCommand};

/// Environment variable holding the log filter (e.g. `debug`, `glyphline=trace`).
const LOG_ENV: &str = "GLYPHLINE_LOG";

/// Log to stderr so stdout stays clean for rendered text.
#[cfg(not(tarpaulin_include))]
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Colors are used only on a terminal and when `NO_COLOR` is unset.
fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let use_color = color_enabled();

    match cli.command {
        Commands::Print(args) => commands::print::handle(&args, use_color),
        Commands::Header(args) => commands::header::handle(&args, use_color),
        Commands::Styles { sample } => commands::styles::handle(&sample),
        Commands::Map { text, style, json } => commands::map::handle(&text, style, json),
        Commands::Config(cmd) => match cmd {
            ConfigCommand::Show => commands::config::handle_show(),
            ConfigCommand::Path => commands::config::handle_path(),
            ConfigCommand::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
