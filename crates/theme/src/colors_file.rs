//! Color file parsing.

use std::path::Path;

use kde_colors_platform::FileSystem;
use tracing::debug;

use crate::color::parse_color_value;
use crate::error::{Result, ThemeError};
use crate::ini::Ini;
use crate::types::{ColorSection, ColorSections};

/// Read and parse an INI file through the file-system capability.
pub(crate) fn read_ini(fs: &impl FileSystem, path: &Path) -> Result<Ini> {
    let content = fs.read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ini::parse(&content).map_err(|source| ThemeError::Ini {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a KDE color file into its sections.
///
/// Every value goes through [`parse_color_value`]. A missing, unreadable or
/// malformed file yields an empty map.
pub fn parse_colors_file(fs: &impl FileSystem, path: &Path) -> ColorSections {
    if !fs.is_file(path) {
        return ColorSections::new();
    }

    match read_ini(fs, path) {
        Ok(ini) => sections_from_ini(&ini),
        Err(e) => {
            debug!(error = %e, "skipping color file");
            ColorSections::new()
        }
    }
}

fn sections_from_ini(ini: &Ini) -> ColorSections {
    ini.sections()
        .map(|name| {
            let section: ColorSection = ini
                .section(name)
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| (key.to_string(), parse_color_value(value)))
                .collect();
            (name.to_string(), section)
        })
        .collect()
}
