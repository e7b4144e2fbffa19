//! Map command handler

use anyhow::Result;
use serde::Serialize;

use glyphline::{map_char, StyleVariant};

/// How one input character was substituted.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GlyphInfo {
    pub input: char,
    pub output: char,
    /// Output code point as `U+XXXX`
    pub code_point: String,
    pub changed: bool,
}

impl GlyphInfo {
    pub fn new(input: char, style: StyleVariant) -> Self {
        let output = map_char(input, style);
        Self {
            input,
            output,
            code_point: format!("U+{:04X}", output as u32),
            changed: output != input,
        }
    }
}

/// Describe every character of `text` under `style`.
pub fn describe(text: &str, style: StyleVariant) -> Vec<GlyphInfo> {
    text.chars().map(|c| GlyphInfo::new(c, style)).collect()
}

#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str, style: StyleVariant, json: bool) -> Result<()> {
    let infos = describe(text, style);
    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }
    for info in infos {
        println!("{} -> {} {}", info.input, info.output, info.code_point);
    }
    Ok(())
}
