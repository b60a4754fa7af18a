//! Current theme detection.
//!
//! Plasma records the active theme in several places. They are checked in
//! this order and the first hit wins:
//!
//! 1. `$XDG_CONFIG_HOME/kdedefaults/package`
//! 2. `$XDG_CONFIG_HOME/kdedefaults/kdeglobals`
//! 3. `$XDG_CONFIG_HOME/kdeglobals`
//! 4. `plasmarc` in config home, then each config dir
//!
//! Unreadable or malformed files count as a miss.

use std::path::{Path, PathBuf};

use kde_colors_platform::{BaseDirs, FileSystem};
use tracing::debug;

use crate::colors_file::read_ini;
use crate::error::ThemeError;
use crate::ini::Ini;
use crate::names::theme_from_package;

const KDEDEFAULTS_PACKAGE: &str = "kdedefaults/package";
const KDEDEFAULTS_KDEGLOBALS: &str = "kdedefaults/kdeglobals";
const KDEGLOBALS: &str = "kdeglobals";
const PLASMARC: &str = "plasmarc";

const THEME_KEY: &str = "Theme";
const LOOK_AND_FEEL_KEY: &str = "LookAndFeelPackage";
const PLASMA_THEME_SECTION: &str = "Theme";
const PLASMA_THEME_NAME_KEY: &str = "name";

/// Where the current theme name was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentThemeSource {
    KdeDefaultsPackage,
    KdeDefaultsGlobals,
    KdeGlobals,
    Plasmarc,
}

impl CurrentThemeSource {
    pub fn label(&self) -> &'static str {
        match self {
            CurrentThemeSource::KdeDefaultsPackage => KDEDEFAULTS_PACKAGE,
            CurrentThemeSource::KdeDefaultsGlobals => KDEDEFAULTS_KDEGLOBALS,
            CurrentThemeSource::KdeGlobals => KDEGLOBALS,
            CurrentThemeSource::Plasmarc => PLASMARC,
        }
    }
}

/// Name of the active theme, if any configuration file names one.
pub fn current_theme(fs: &impl FileSystem, dirs: &impl BaseDirs) -> Option<String> {
    current_theme_with_source(fs, dirs).map(|(name, _)| name)
}

/// Like [`current_theme`], also reporting which file supplied the name.
pub fn current_theme_with_source(
    fs: &impl FileSystem,
    dirs: &impl BaseDirs,
) -> Option<(String, CurrentThemeSource)> {
    let config_home = dirs.config_home();
    debug!(config_home = %config_home.display(), "resolving current theme");

    let found = from_kdedefaults_package(fs, &config_home)
        .map(|n| (n, CurrentThemeSource::KdeDefaultsPackage))
        .or_else(|| {
            from_kdedefaults_kdeglobals(fs, &config_home)
                .map(|n| (n, CurrentThemeSource::KdeDefaultsGlobals))
        })
        .or_else(|| {
            from_kdeglobals(fs, &config_home).map(|n| (n, CurrentThemeSource::KdeGlobals))
        })
        .or_else(|| {
            let mut config_dirs = vec![config_home.clone()];
            config_dirs.extend(dirs.config_dirs());
            from_plasmarc(fs, &config_dirs).map(|n| (n, CurrentThemeSource::Plasmarc))
        });

    match &found {
        Some((name, source)) => {
            debug!(theme = %name, source = source.label(), "found current theme")
        }
        None => debug!("no current theme configured"),
    }
    found
}

fn from_kdedefaults_package(fs: &impl FileSystem, config_home: &Path) -> Option<String> {
    let path = config_home.join(KDEDEFAULTS_PACKAGE);
    if !fs.is_file(&path) {
        return None;
    }

    let content = match fs.read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "failed to read package file");
            return None;
        }
    };

    let package = content.trim();
    if package.is_empty() {
        return None;
    }
    non_empty(theme_from_package(package))
}

fn from_kdedefaults_kdeglobals(fs: &impl FileSystem, config_home: &Path) -> Option<String> {
    let ini = probe_ini(fs, &config_home.join(KDEDEFAULTS_KDEGLOBALS))?;
    let value = ["KDE", "General"]
        .into_iter()
        .find_map(|section| ini.get(section, THEME_KEY));
    non_empty(value.map(str::to_string))
}

fn from_kdeglobals(fs: &impl FileSystem, config_home: &Path) -> Option<String> {
    let ini = probe_ini(fs, &config_home.join(KDEGLOBALS))?;
    let package = ini.get("KDE", LOOK_AND_FEEL_KEY)?;
    non_empty(theme_from_package(package))
}

/// The first `plasmarc` carrying `[Theme] name` decides, even if its value
/// is empty.
fn from_plasmarc(fs: &impl FileSystem, config_dirs: &[PathBuf]) -> Option<String> {
    let value = config_dirs.iter().find_map(|dir| {
        let ini = probe_ini(fs, &dir.join(PLASMARC))?;
        ini.get(PLASMA_THEME_SECTION, PLASMA_THEME_NAME_KEY)
            .map(str::to_string)
    });
    non_empty(value)
}

fn probe_ini(fs: &impl FileSystem, path: &Path) -> Option<Ini> {
    if !fs.is_file(path) {
        return None;
    }
    read_ini(fs, path)
        .inspect_err(|e: &ThemeError| debug!(error = %e, "ignoring config file"))
        .ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kde_colors_platform::{MapEnvironment, MemoryFileSystem, Xdg, XDG_CONFIG_DIRS};
    use pretty_assertions::assert_eq;

    const HOME_CONFIG: &str = "/home/user/.config";

    fn resolve(fs: &MemoryFileSystem) -> Option<(String, CurrentThemeSource)> {
        let xdg = Xdg::new(MapEnvironment::new(), fs);
        current_theme_with_source(fs, &xdg)
    }

    fn config(path: &str) -> String {
        format!("{HOME_CONFIG}/{path}")
    }

    #[test]
    fn test_nothing_configured() {
        let fs = MemoryFileSystem::new();
        assert_eq!(resolve(&fs), None);
    }

    #[test]
    fn test_package_file() {
        let fs = MemoryFileSystem::new()
            .with_file(config("kdedefaults/package"), "org.kde.breezedark.desktop\n");
        assert_eq!(
            resolve(&fs),
            Some(("breeze-dark".into(), CurrentThemeSource::KdeDefaultsPackage))
        );
    }

    #[test]
    fn test_package_wins_over_plasmarc() {
        let fs = MemoryFileSystem::new()
            .with_file(config("kdedefaults/package"), "org.kde.oxygen.desktop")
            .with_file(config("plasmarc"), "[Theme]\nname=Breeze\n");
        assert_eq!(
            resolve(&fs),
            Some(("oxygen".into(), CurrentThemeSource::KdeDefaultsPackage))
        );
    }

    #[test]
    fn test_short_package_falls_through() {
        let fs = MemoryFileSystem::new()
            .with_file(config("kdedefaults/package"), "breeze")
            .with_file(config("kdedefaults/kdeglobals"), "[KDE]\nTheme=Oxygen\n");
        assert_eq!(
            resolve(&fs),
            Some(("Oxygen".into(), CurrentThemeSource::KdeDefaultsGlobals))
        );
    }

    #[test]
    fn test_kdedefaults_kdeglobals_general_section() {
        let fs = MemoryFileSystem::new()
            .with_file(config("kdedefaults/kdeglobals"), "[General]\nTheme=Breeze Dark\n");
        assert_eq!(
            resolve(&fs),
            Some(("Breeze Dark".into(), CurrentThemeSource::KdeDefaultsGlobals))
        );
    }

    #[test]
    fn test_kdedefaults_kdeglobals_prefers_kde_section() {
        let fs = MemoryFileSystem::new().with_file(
            config("kdedefaults/kdeglobals"),
            "[General]\nTheme=General\n[KDE]\ntheme=FromKde\n",
        );
        assert_eq!(resolve(&fs).unwrap().0, "FromKde");
    }

    #[test]
    fn test_kdeglobals_look_and_feel() {
        let fs = MemoryFileSystem::new().with_file(
            config("kdeglobals"),
            "[KDE]\nLookAndFeelPackage=org.kde.breezedark.desktop\n",
        );
        assert_eq!(
            resolve(&fs),
            Some(("breeze-dark".into(), CurrentThemeSource::KdeGlobals))
        );
    }

    #[test]
    fn test_malformed_kdeglobals_falls_through() {
        let fs = MemoryFileSystem::new()
            .with_file(config("kdeglobals"), "LookAndFeelPackage=org.kde.oxygen.desktop\n")
            .with_file(config("plasmarc"), "[Theme]\nname=Breeze\n");
        assert_eq!(
            resolve(&fs),
            Some(("Breeze".into(), CurrentThemeSource::Plasmarc))
        );
    }

    #[test]
    fn test_unreadable_package_falls_through() {
        let fs = MemoryFileSystem::new()
            .with_unreadable_file(config("kdedefaults/package"))
            .with_file(config("plasmarc"), "[Theme]\nname=Breeze\n");
        assert_eq!(resolve(&fs).unwrap().0, "Breeze");
    }

    #[test]
    fn test_plasmarc_in_config_dirs() {
        let fs = MemoryFileSystem::new()
            .with_file("/etc/xdg/plasmarc", "[Theme]\nname=Oxygen\n")
            .with_file("/opt/xdg/plasmarc", "[Theme]\nname=Air\n");
        let env = MapEnvironment::new().with_var(XDG_CONFIG_DIRS, "/etc/xdg:/opt/xdg");
        let xdg = Xdg::new(env, &fs);

        assert_eq!(current_theme(&fs, &xdg).as_deref(), Some("Oxygen"));
    }

    #[test]
    fn test_plasmarc_without_theme_is_skipped() {
        let fs = MemoryFileSystem::new()
            .with_file(config("plasmarc"), "[Wallpaper]\nimage=x\n")
            .with_file("/etc/xdg/plasmarc", "[Theme]\nname=Oxygen\n");
        assert_eq!(resolve(&fs).unwrap().0, "Oxygen");
    }

    #[test]
    fn test_plasmarc_with_indented_options() {
        let fs = MemoryFileSystem::new()
            .with_file(config("plasmarc"), "[Theme]\n  foo=x\n  name=Breeze\n");
        assert_eq!(
            resolve(&fs),
            Some(("Breeze".into(), CurrentThemeSource::Plasmarc))
        );
    }

    #[test]
    fn test_plasmarc_value_spanning_blank_line() {
        let fs = MemoryFileSystem::new().with_file(
            config("plasmarc"),
            "[Theme]\nname=Breeze\n\n  Dark\n[Wallpaper]\nimage=x\n",
        );
        assert_eq!(resolve(&fs).unwrap().0, "Breeze\n\nDark");
    }

    #[test]
    fn test_empty_plasmarc_value_stops_search() {
        let fs = MemoryFileSystem::new()
            .with_file(config("plasmarc"), "[Theme]\nname=\n")
            .with_file("/etc/xdg/plasmarc", "[Theme]\nname=Oxygen\n");
        assert_eq!(resolve(&fs), None);
    }
}
