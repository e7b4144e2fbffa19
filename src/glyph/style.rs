//! Style selectors for glyph substitution.

use serde::{Deserialize, Serialize};

/// A visual rendering mode realized through Unicode code-point substitution.
///
/// Names use kebab-case on the command line and in the config file
/// (`sans-serif-bold`, `fraktur-bold`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StyleVariant {
    /// Plain serif, letters and digits are left as typed
    Serif,
    SerifItalic,
    SerifBold,
    SerifBoldItalic,
    SansSerif,
    SansSerifItalic,
    SansSerifBold,
    SansSerifBoldItalic,
    #[default]
    Monospace,
    ScriptBold,
    FrakturBold,
    /// Fullwidth forms for the whole printable ASCII range
    FullWidth,
}

impl StyleVariant {
    /// Every style, in display order.
    pub const ALL: [StyleVariant; 12] = [
        Self::Serif,
        Self::SerifItalic,
        Self::SerifBold,
        Self::SerifBoldItalic,
        Self::SansSerif,
        Self::SansSerifItalic,
        Self::SansSerifBold,
        Self::SansSerifBoldItalic,
        Self::Monospace,
        Self::ScriptBold,
        Self::FrakturBold,
        Self::FullWidth,
    ];

    /// Kebab-case name used in config files and CLI arguments.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SerifItalic => "serif-italic",
            Self::SerifBold => "serif-bold",
            Self::SerifBoldItalic => "serif-bold-italic",
            Self::SansSerif => "sans-serif",
            Self::SansSerifItalic => "sans-serif-italic",
            Self::SansSerifBold => "sans-serif-bold",
            Self::SansSerifBoldItalic => "sans-serif-bold-italic",
            Self::Monospace => "monospace",
            Self::ScriptBold => "script-bold",
            Self::FrakturBold => "fraktur-bold",
            Self::FullWidth => "full-width",
        }
    }
}

impl std::fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
