//! Theme catalog.
//!
//! Ties discovery, color parsing and current-theme detection together into
//! a name-keyed map of [`ThemeRecord`]s. The map is built on first use and
//! kept for the lifetime of the catalog; build a new catalog to rescan.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use kde_colors_platform::{BaseDirs, FileSystem};
use tracing::{debug, info};

use crate::colors_file::parse_colors_file;
use crate::current::current_theme;
use crate::discovery::{
    color_file_candidates, discover_theme_dirs, search_roots, theme_search_paths,
};
use crate::names::{normalize, package_id, theme_id};
use crate::types::{ColorSections, ThemeRecord};

/// Themes keyed by directory name, in discovery order.
pub type Themes = IndexMap<String, ThemeRecord>;

pub struct ThemeCatalog<F, D> {
    fs: F,
    dirs: D,
    themes: OnceCell<Themes>,
}

impl<F: FileSystem, D: BaseDirs> ThemeCatalog<F, D> {
    pub fn new(fs: F, dirs: D) -> Self {
        Self {
            fs,
            dirs,
            themes: OnceCell::new(),
        }
    }

    pub fn dirs(&self) -> &D {
        &self.dirs
    }

    /// All themes with color data.
    ///
    /// When two search roots hold a theme directory with the same name, the
    /// later root's theme replaces the earlier one in place.
    pub fn load_themes(&self) -> &Themes {
        self.themes.get_or_init(|| self.build())
    }

    /// Look up a theme by name, ignoring case, spaces and hyphens.
    pub fn load(&self, name: &str) -> Option<&ThemeRecord> {
        let wanted = normalize(name);
        self.load_themes()
            .values()
            .find(|theme| theme.normalized_name == wanted)
    }

    /// Name of the active theme as configured, whether or not it is installed.
    pub fn current_theme(&self) -> Option<String> {
        current_theme(&self.fs, &self.dirs)
    }

    /// Base directories searched for themes, in precedence order.
    pub fn search_roots(&self) -> Vec<PathBuf> {
        search_roots(&self.dirs)
    }

    /// The `plasma/desktoptheme` directory of every search root.
    pub fn theme_search_paths(&self) -> Vec<PathBuf> {
        theme_search_paths(&self.dirs)
    }

    fn build(&self) -> Themes {
        let current = self.current_theme().map(|name| normalize(&name));
        let mut themes = Themes::new();

        for dir in discover_theme_dirs(&self.fs, &self.dirs) {
            let Some(name) = dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };

            let Some(colors) = self.load_theme_colors(&dir) else {
                debug!(dir = %dir.display(), "no colors found, skipping theme");
                continue;
            };

            let normalized_name = normalize(&name);
            let record = ThemeRecord {
                id: theme_id(&name),
                package_id: package_id(&name),
                is_current: current.as_deref() == Some(normalized_name.as_str()),
                normalized_name,
                path: dir,
                colors,
                name: name.clone(),
            };

            if let Some(previous) = themes.insert(name, record) {
                debug!(
                    theme = %previous.name,
                    replaced = %previous.path.display(),
                    "theme shadowed by later search root"
                );
            }
        }

        info!(count = themes.len(), "loaded themes");
        themes
    }

    /// Colors from the first candidate file that yields any sections.
    fn load_theme_colors(&self, dir: &Path) -> Option<ColorSections> {
        color_file_candidates(&self.fs, dir)
            .into_iter()
            .map(|path| parse_colors_file(&self.fs, &path))
            .find(|colors| !colors.is_empty())
    }
}
