//! Value formatting and padding for header rows.

use serde::{Deserialize, Serialize};

/// How slack width around a value is distributed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    #[default]
    Center,
}

/// Per-column layout supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Target width in characters
    pub width: usize,
    /// Digits after the decimal point, only used for floating-point values
    pub precision: usize,
}

impl FieldSpec {
    pub fn new(width: usize, precision: usize) -> Self {
        Self { width, precision }
    }
}

/// A header value, tagged with how it should be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Fixed-point notation at the field's precision
    Float(f64),
    /// Plain decimal
    Integer(i128),
    /// Used as-is
    Text(String),
}

impl CellValue {
    /// Render the value to display text for `spec`.
    pub fn format(&self, spec: &FieldSpec) -> String {
        match self {
            Self::Float(v) => format!("{:.*}", spec.precision, v),
            Self::Integer(v) => v.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Parse a command-line token: integers first, then floats, else text.
    pub fn parse(token: &str) -> Self {
        if let Ok(v) = token.parse::<i128>() {
            Self::Integer(v)
        } else if let Ok(v) = token.parse::<f64>() {
            Self::Float(v)
        } else {
            Self::Text(token.to_string())
        }
    }
}

macro_rules! cell_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for CellValue {
            fn from(v: $t) -> Self {
                Self::Integer(i128::from(v))
            }
        })*
    };
}

cell_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Pad `value` to `width` characters according to `alignment`.
///
/// Centered values put the odd leftover space after the value. Values at
/// least `width` characters long are returned unchanged.
pub fn align(value: &str, width: usize, alignment: Alignment) -> String {
    let len = value.chars().count();
    let pad = width.saturating_sub(len);
    if pad == 0 {
        return value.to_string();
    }

    let (before, after) = match alignment {
        Alignment::Left => (0, pad),
        Alignment::Right => (pad, 0),
        Alignment::Center => (pad / 2, pad - pad / 2),
    };

    let mut out = String::with_capacity(value.len() + pad);
    out.extend(std::iter::repeat(' ').take(before));
    out.push_str(value);
    out.extend(std::iter::repeat(' ').take(after));
    out
}

/// Format `value` for `spec`, then pad it to the field width.
pub fn align_cell(value: &CellValue, spec: &FieldSpec, alignment: Alignment) -> String {
    align(&value.format(spec), spec.width, alignment)
}
