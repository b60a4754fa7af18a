use std::path::PathBuf;

use kde_colors_platform::{BaseDirs, FileSystem};
use kde_colors_theme::ThemeCatalog;
use serde::Serialize;

use crate::output::{bullet_list, Render};

const COLOR_SCHEMES_SUBDIR: &str = "color-schemes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPaths {
    pub config_paths: Vec<PathBuf>,
    pub theme_paths: Vec<PathBuf>,
    pub color_scheme_paths: Vec<PathBuf>,
}

pub fn run<F: FileSystem, D: BaseDirs>(catalog: &ThemeCatalog<F, D>) -> SearchPaths {
    let dirs = catalog.dirs();

    let mut config_paths = vec![dirs.config_home()];
    config_paths.extend(dirs.config_dirs());

    let mut data_paths = vec![dirs.data_home()];
    data_paths.extend(dirs.data_dirs());

    SearchPaths {
        config_paths,
        theme_paths: catalog.theme_search_paths(),
        color_scheme_paths: data_paths
            .into_iter()
            .map(|dir| dir.join(COLOR_SCHEMES_SUBDIR))
            .collect(),
    }
}

impl Render for SearchPaths {
    fn to_text(&self) -> String {
        let mut lines = vec!["KDE Theme Search Paths:".to_string()];

        if !self.config_paths.is_empty() {
            lines.extend(bullet_list("Config paths", &self.config_paths));
            lines.push(String::new());
        }
        if !self.theme_paths.is_empty() {
            lines.extend(bullet_list("Theme paths", &self.theme_paths));
            lines.push(String::new());
        }
        if !self.color_scheme_paths.is_empty() {
            lines.extend(bullet_list("Color scheme paths", &self.color_scheme_paths));
        }

        lines.join("\n")
    }
}
