use kde_colors_platform::{BaseDirs, FileSystem};
use kde_colors_theme::{ThemeCatalog, ThemeRecord};
use serde::Serialize;
use tracing::debug;

use crate::error::CommandError;
use crate::output::Render;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeDetails {
    pub theme: ThemeRecord,
}

/// Look up `name`, or the current theme when no name is given.
pub fn run<F: FileSystem, D: BaseDirs>(
    catalog: &ThemeCatalog<F, D>,
    name: Option<&str>,
) -> Result<ThemeDetails, CommandError> {
    let name = match name.filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => {
            let current = catalog.current_theme().ok_or(CommandError::NoCurrentTheme)?;
            debug!(theme = %current, "using current theme");
            current
        }
    };

    let theme = catalog
        .load(&name)
        .ok_or_else(|| CommandError::ThemeNotFound(name.clone()))?;

    Ok(ThemeDetails {
        theme: theme.clone(),
    })
}

impl Render for ThemeDetails {
    fn to_text(&self) -> String {
        let theme = &self.theme;
        let mut lines = vec![
            format!("Name: {}", theme.name),
            format!("Id: {}", theme.id),
            format!("Package: {}", theme.package_id),
            format!("Path: {}", theme.path.display()),
            "\nColors:".to_string(),
        ];

        let mut sections: Vec<_> = theme.colors.iter().collect();
        sections.sort_by(|a, b| a.0.cmp(b.0));

        for (section, entries) in sections {
            lines.push(format!("[{section}]"));

            let mut entries: Vec<_> = entries.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            lines.extend(entries.into_iter().map(|(key, value)| format!("    {key}: {value}")));

            lines.push(String::new());
        }

        lines.join("\n")
    }
}
