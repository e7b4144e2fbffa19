//! Styles command handler

use anyhow::Result;

use glyphline::{align, stylize, Alignment, StyleVariant};

/// Width of the style name column.
const NAME_WIDTH: usize = 24;

/// One listing line per style: the padded name, then the styled sample.
pub fn listing(sample: &str) -> Vec<String> {
    StyleVariant::ALL
        .iter()
        .map(|style| {
            format!(
                "{}{}",
                align(style.name(), NAME_WIDTH, Alignment::Left),
                stylize(sample, *style)
            )
        })
        .collect()
}

#[cfg(not(tarpaulin_include))]
pub fn handle(sample: &str) -> Result<()> {
    for line in listing(sample) {
        println!("{}", line);
    }
    Ok(())
}
