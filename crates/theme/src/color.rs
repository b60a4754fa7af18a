//! Color value parsing.

use tracing::debug;

use crate::types::{ColorValue, Rgb};

/// Parse a single color-file value.
///
/// Tried in order:
/// 1. comma-separated decimal components (`255, 128, 0`)
/// 2. `#rrggbb` / `#rrggbbaa` hex, alpha discarded
/// 3. anything else is kept verbatim
///
/// Component lists must have exactly three parts: a four-part value with
/// alpha (`61,174,233,255`) stays [`ColorValue::Raw`] and is emitted as a
/// string in JSON output.
pub fn parse_color_value(value: &str) -> ColorValue {
    if value.contains(',') {
        if let Some(rgb) = parse_components(value) {
            return ColorValue::Rgb(rgb);
        }
    }

    if value.starts_with('#') && matches!(value.chars().count(), 7 | 9) {
        match Rgb::from_hex(value) {
            Some(rgb) => return ColorValue::Rgb(rgb),
            None => debug!(value, "failed to parse hex color"),
        }
    }

    ColorValue::Raw(value.to_string())
}

fn parse_components(value: &str) -> Option<Rgb> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let all_digits = parts
        .iter()
        .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
    if !all_digits {
        return None;
    }

    let components = parts
        .iter()
        .map(|p| p.parse::<u32>())
        .collect::<Result<Vec<_>, _>>();

    match components.as_deref() {
        Ok(&[r, g, b]) => Some(Rgb::new(r, g, b)),
        Ok(other) => {
            debug!(value, count = other.len(), "not a three-component color");
            None
        }
        Err(e) => {
            debug!(value, error = %e, "color component out of range");
            None
        }
    }
}
