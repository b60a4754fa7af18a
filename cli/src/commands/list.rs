use kde_colors_platform::{BaseDirs, FileSystem};
use kde_colors_theme::ThemeCatalog;
use serde::Serialize;

use crate::output::Render;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeList {
    /// The last installed theme marked current, if any.
    pub current: Option<String>,
    /// Theme names, sorted.
    pub themes: Vec<String>,
    /// Every theme marked current; more than one when names normalize alike.
    #[serde(skip)]
    pub marked: Vec<String>,
}

pub fn run<F: FileSystem, D: BaseDirs>(catalog: &ThemeCatalog<F, D>) -> ThemeList {
    let themes = catalog.load_themes();

    let mut names: Vec<String> = themes.keys().cloned().collect();
    names.sort();

    let marked: Vec<String> = themes
        .values()
        .filter(|theme| theme.is_current)
        .map(|theme| theme.name.clone())
        .collect();

    ThemeList {
        current: marked.last().cloned(),
        themes: names,
        marked,
    }
}

impl Render for ThemeList {
    fn to_text(&self) -> String {
        if self.themes.is_empty() {
            return "No themes found.".to_string();
        }

        let mut lines = vec!["Available desktop themes (current theme marked with *):".to_string()];
        for name in &self.themes {
            if self.marked.contains(name) {
                lines.push(format!("  * {name}"));
            } else {
                lines.push(format!("  {name}"));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::commands::test_support::{catalog, sample_catalog, DATA, PLASMARC};
    use kde_colors_platform::MemoryFileSystem;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_text() {
        let list = run(&sample_catalog());
        assert_eq!(
            list.to_text(),
            "Available desktop themes (current theme marked with *):\n\
             \x20 * Breeze\n\
             \x20 Breeze Dark\n\
             \x20 Oxygen"
        );
    }

    #[test]
    fn test_list_json() {
        let json = run(&sample_catalog()).render(OutputFormat::Json).unwrap();
        assert_eq!(
            json,
            "{\n  \"current\": \"Breeze\",\n  \"themes\": [\n    \"Breeze\",\n    \
             \"Breeze Dark\",\n    \"Oxygen\"\n  ]\n}"
        );
    }

    #[test]
    fn test_list_empty() {
        let list = run(&catalog(MemoryFileSystem::new()));
        assert_eq!(list.to_text(), "No themes found.");

        let json: serde_json::Value = serde_json::from_str(&list.to_json().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"current": null, "themes": []}));
    }

    #[test]
    fn test_current_not_installed() {
        let fs = MemoryFileSystem::new()
            .with_file(format!("{DATA}/Air/colors"), "[Colors:View]\nBackgroundNormal=1,2,3\n")
            .with_file(PLASMARC, "[Theme]\nname=Missing\n");
        let list = run(&catalog(fs));

        assert_eq!(list.current, None);
        assert_eq!(
            list.to_text(),
            "Available desktop themes (current theme marked with *):\n  Air"
        );
    }

    #[test]
    fn test_current_matched_loosely() {
        let fs = MemoryFileSystem::new()
            .with_file(
                format!("{DATA}/Breeze Dark/colors"),
                "[Colors:View]\nBackgroundNormal=1,2,3\n",
            )
            .with_file(
                "/home/user/.config/kdedefaults/package",
                "org.kde.breezedark.desktop\n",
            );
        let list = run(&catalog(fs));
        assert_eq!(list.current.as_deref(), Some("Breeze Dark"));
    }
}
