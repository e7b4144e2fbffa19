//! Header command handler

use std::io;

use anyhow::Result;

use glyphline::cli::HeaderArgs;
use glyphline::{Cell, CellValue, Config, FieldSpec};

/// Build the header cells from command-line values.
pub fn cells(args: &HeaderArgs) -> Vec<Cell> {
    let spec = FieldSpec::new(args.width, args.precision);
    args.values
        .iter()
        .map(|v| Cell::new(CellValue::parse(v), spec))
        .collect()
}

/// Print one aligned header row followed by a newline.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &HeaderArgs, use_color: bool) -> Result<()> {
    let config = Config::load()?;
    let stdout = io::stdout();
    let mut console = config.console(stdout.lock(), use_color)?;

    if let Some(alignment) = args.align {
        console.set_alignment(alignment);
    }
    if let Some(separator) = &args.separator {
        let mut header = console.header().clone();
        header.separator = separator.clone();
        console.set_header(header);
    }

    if console.header().show {
        console.print_header(&cells(args))?;
        console.newline()?;
    }
    console.flush()?;
    Ok(())
}
