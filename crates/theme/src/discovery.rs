//! Theme directory discovery.
//!
//! A theme directory is any directory under `<root>/plasma/desktoptheme`
//! that carries color data in one of the layouts Plasma uses:
//!
//! 1. `colors/<scheme>.colors`
//! 2. `colors` file at the theme root
//! 3. `colors/colors`
//!
//! [`color_file_candidates`] lists these in loading precedence and is shared
//! by discovery and color loading.

use std::path::{Path, PathBuf};

use kde_colors_platform::{BaseDirs, FileSystem};
use tracing::{debug, trace};

pub const THEME_SUBDIR: &str = "plasma/desktoptheme";
const COLORS: &str = "colors";
const COLORS_GLOB: &str = "*.colors";

/// Color files present in a theme directory, in loading precedence.
///
/// Only the first `colors/*.colors` match is returned.
pub fn color_file_candidates(fs: &impl FileSystem, theme_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    let colors_path = theme_dir.join(COLORS);

    if fs.is_dir(&colors_path) {
        match fs.glob(&colors_path.join(COLORS_GLOB)) {
            Ok(schemes) => candidates.extend(schemes.into_iter().take(1)),
            Err(e) => {
                debug!(dir = %colors_path.display(), error = %e, "failed to list color schemes")
            }
        }
    }

    if fs.is_file(&colors_path) {
        candidates.push(colors_path.clone());
    }

    let nested = colors_path.join(COLORS);
    if fs.is_file(&nested) {
        candidates.push(nested);
    }

    candidates
}

/// Whether a directory carries any recognised color data.
pub fn is_theme_dir(fs: &impl FileSystem, dir: &Path) -> bool {
    fs.is_dir(dir) && !color_file_candidates(fs, dir).is_empty()
}

/// Theme directories directly under `parent`, in name order.
pub fn find_theme_dirs(fs: &impl FileSystem, parent: &Path) -> Vec<PathBuf> {
    let entries = match fs.list_dir(parent) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %parent.display(), error = %e, "skipping unreadable theme directory");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .map(|name| parent.join(name))
        .filter(|child| {
            let valid = is_theme_dir(fs, child);
            trace!(dir = %child.display(), valid, "probed theme directory");
            valid
        })
        .collect()
}

/// Base directories searched for themes, in precedence order.
///
/// Config home and config dirs come first, then the data dirs with data home
/// put in front unless it is already listed.
pub fn search_roots(dirs: &impl BaseDirs) -> Vec<PathBuf> {
    let mut roots = vec![dirs.config_home()];
    roots.extend(dirs.config_dirs());

    let mut data_dirs = dirs.data_dirs();
    let data_home = dirs.data_home();
    if !data_dirs.contains(&data_home) {
        data_dirs.insert(0, data_home);
    }
    roots.extend(data_dirs);
    roots
}

/// `<root>/plasma/desktoptheme` for every search root.
pub fn theme_search_paths(dirs: &impl BaseDirs) -> Vec<PathBuf> {
    search_roots(dirs)
        .into_iter()
        .map(|root| root.join(THEME_SUBDIR))
        .collect()
}

/// Every theme directory across all search roots.
///
/// Root order is preserved and nothing is de-duplicated; missing roots are
/// skipped.
pub fn discover_theme_dirs(fs: &impl FileSystem, dirs: &impl BaseDirs) -> Vec<PathBuf> {
    theme_search_paths(dirs)
        .into_iter()
        .filter(|path| fs.is_dir(path))
        .flat_map(|path| find_theme_dirs(fs, &path))
        .collect()
}
