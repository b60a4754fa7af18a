//! Read-only file-system capability.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::glob::wildcard_match;

/// Read-only view of a file system.
///
/// Every path handed to the theme engine is resolved through this trait so
/// that discovery and parsing can run against an in-memory tree in tests.
pub trait FileSystem {
    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if a path is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// List the names of the immediate children of a directory, sorted.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Find paths matching a pattern.
    ///
    /// Wildcards (`*`, `?`) are honoured in the final component only; a
    /// missing parent directory yields an empty result. Results are sorted.
    fn glob(&self, pattern: &Path) -> io::Result<Vec<PathBuf>> {
        let Some(file_pattern) = pattern.file_name().and_then(|n| n.to_str()) else {
            return Ok(Vec::new());
        };
        let parent = pattern.parent().unwrap_or_else(|| Path::new(""));
        if !self.is_dir(parent) {
            return Ok(Vec::new());
        }

        let mut matches: Vec<PathBuf> = self
            .list_dir(parent)?
            .into_iter()
            .filter(|name| wildcard_match(file_pattern, name))
            .map(|name| parent.join(name))
            .collect();
        matches.sort();
        Ok(matches)
    }

    /// The current user's home directory.
    fn home(&self) -> PathBuf;

    /// The file-system root that absolute defaults are anchored to.
    fn root(&self) -> PathBuf {
        PathBuf::from("/")
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).list_dir(path)
    }

    fn glob(&self, pattern: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).glob(pattern)
    }

    fn home(&self) -> PathBuf {
        (**self).home()
    }

    fn root(&self) -> PathBuf {
        (**self).root()
    }
}

/// File system backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(path)?
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    fn home(&self) -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_std_list_dir_is_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b"), "").unwrap();
        fs::write(dir.path().join("a"), "").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        let names = StdFileSystem.list_dir(dir.path()).unwrap();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_std_list_dir_missing() {
        let dir = TempDir::new().unwrap();
        let err = StdFileSystem
            .list_dir(&dir.path().join("missing"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_std_glob_matches_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Breeze.colors"), "").unwrap();
        fs::write(dir.path().join("Air.colors"), "").unwrap();
        fs::write(dir.path().join("metadata.desktop"), "").unwrap();

        let found = StdFileSystem.glob(&dir.path().join("*.colors")).unwrap();
        assert_eq!(
            found,
            vec![
                dir.path().join("Air.colors"),
                dir.path().join("Breeze.colors")
            ]
        );
    }

    #[test]
    fn test_std_glob_missing_parent_is_empty() {
        let dir = TempDir::new().unwrap();
        let found = StdFileSystem
            .glob(&dir.path().join("nope").join("*.colors"))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_std_read_and_probe() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("colors");
        fs::write(&file, "[Colors:View]\n").unwrap();

        assert!(StdFileSystem.exists(&file));
        assert!(StdFileSystem.is_file(&file));
        assert!(!StdFileSystem.is_dir(&file));
        assert!(StdFileSystem.is_dir(dir.path()));
        assert_eq!(
            StdFileSystem.read_to_string(&file).unwrap(),
            "[Colors:View]\n"
        );
    }
}
