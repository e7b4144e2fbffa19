//! Print command handler

use std::io;

use anyhow::Result;

use glyphline::cli::PrintArgs;
use glyphline::console::parse_color;
use glyphline::Config;

/// Print the joined text, styled unless `--plain` is given.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PrintArgs, use_color: bool) -> Result<()> {
    let config = Config::load()?;
    let stdout = io::stdout();
    let mut console = config.console(stdout.lock(), use_color)?;

    if let Some(style) = args.style {
        console.set_style(style);
    }
    if use_color {
        if let Some(name) = &args.color {
            console.set_color(Some(parse_color(name)?));
        }
    }

    console.move_up(args.up);
    console.move_right(args.right);

    let text = args.text.join(" ");
    if args.plain {
        console.print_plain(&text)?;
    } else {
        console.print_styled(&text)?;
    }

    if !args.no_newline {
        console.newline()?;
    }
    console.flush()?;
    Ok(())
}
