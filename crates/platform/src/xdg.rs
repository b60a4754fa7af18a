//! XDG base-directory resolution.
//!
//! Each accessor reads its `XDG_*` variable and falls back to the default
//! from the base-directory specification when the variable is unset, empty,
//! or (for single paths) relative. Directory lists drop relative entries and
//! fall back to the full default list if nothing absolute remains.

use std::path::{Path, PathBuf};

use crate::env::Environment;
use crate::fs::FileSystem;

pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const XDG_CONFIG_DIRS: &str = "XDG_CONFIG_DIRS";
pub const XDG_DATA_HOME: &str = "XDG_DATA_HOME";
pub const XDG_DATA_DIRS: &str = "XDG_DATA_DIRS";

/// Source of the standard base directories.
pub trait BaseDirs {
    /// `$XDG_CONFIG_HOME`, default `~/.config`.
    fn config_home(&self) -> PathBuf;

    /// `$XDG_CONFIG_DIRS`, default `/etc/xdg`.
    fn config_dirs(&self) -> Vec<PathBuf>;

    /// `$XDG_DATA_HOME`, default `~/.local/share`.
    fn data_home(&self) -> PathBuf;

    /// `$XDG_DATA_DIRS`, default `/usr/local/share:/usr/share`.
    fn data_dirs(&self) -> Vec<PathBuf>;
}

impl<T: BaseDirs + ?Sized> BaseDirs for &T {
    fn config_home(&self) -> PathBuf {
        (**self).config_home()
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        (**self).config_dirs()
    }

    fn data_home(&self) -> PathBuf {
        (**self).data_home()
    }

    fn data_dirs(&self) -> Vec<PathBuf> {
        (**self).data_dirs()
    }
}

/// [`BaseDirs`] resolved from an [`Environment`].
#[derive(Debug, Clone)]
pub struct Xdg<E> {
    env: E,
    home: PathBuf,
    root: PathBuf,
}

impl<E: Environment> Xdg<E> {
    /// Home and root defaults are taken from the file system.
    pub fn new(env: E, fs: &impl FileSystem) -> Self {
        Self {
            env,
            home: fs.home(),
            root: fs.root(),
        }
    }

    fn path_from_env(&self, variable: &str, default: PathBuf) -> PathBuf {
        match self.env.var(variable) {
            Some(value) if Path::new(&value).is_absolute() => PathBuf::from(value),
            Some(value) if !value.is_empty() => {
                tracing::debug!(variable, value = %value, "ignoring relative path");
                default
            }
            _ => default,
        }
    }

    fn paths_from_env(&self, variable: &str, default: Vec<PathBuf>) -> Vec<PathBuf> {
        let Some(value) = self.env.var(variable).filter(|v| !v.is_empty()) else {
            return default;
        };

        let paths: Vec<PathBuf> = value
            .split(':')
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .collect();

        if paths.is_empty() {
            tracing::debug!(variable, value = %value, "no absolute paths, using defaults");
            default
        } else {
            paths
        }
    }
}

impl<E: Environment> BaseDirs for Xdg<E> {
    fn config_home(&self) -> PathBuf {
        self.path_from_env(XDG_CONFIG_HOME, self.home.join(".config"))
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        self.paths_from_env(XDG_CONFIG_DIRS, vec![self.root.join("etc/xdg")])
    }

    fn data_home(&self) -> PathBuf {
        self.path_from_env(XDG_DATA_HOME, self.home.join(".local").join("share"))
    }

    fn data_dirs(&self) -> Vec<PathBuf> {
        self.paths_from_env(
            XDG_DATA_DIRS,
            vec![
                self.root.join("usr/local/share"),
                self.root.join("usr/share"),
            ],
        )
    }
}
