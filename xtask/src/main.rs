//! Development tasks for glyphline.
//!
//! Usage: `cargo run -p xtask -- man [--out DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

#[derive(Parser)]
#[command(name = "xtask")]
enum Task {
    /// Generate man pages for glyphline and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn render(cmd: clap::Command, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buf)?;
    fs::write(path, buf).with_context(|| format!("Failed to write {}", path.display()))
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::Man { out } => {
            fs::create_dir_all(&out)
                .with_context(|| format!("Failed to create {}", out.display()))?;

            let cmd = glyphline::cli::Cli::command();
            render(cmd.clone(), &out.join("glyphline.1"))?;

            for sub in cmd.get_subcommands() {
                let file = format!("glyphline-{}.1", sub.get_name());
                render(sub.clone(), &out.join(file))?;
            }
            println!("Man pages written to {}", out.display());
        }
    }
    Ok(())
}
