//! In-memory file system.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::FileSystem;

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(String),
    /// A file that exists but cannot be read.
    Unreadable,
}

/// File system held entirely in memory.
///
/// Parent directories are created implicitly when a file or directory is
/// added. Paths are taken literally; no normalisation of `..` is done.
#[derive(Debug)]
pub struct MemoryFileSystem {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    home: PathBuf,
    root: PathBuf,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir);
        Self {
            nodes: RefCell::new(nodes),
            home: PathBuf::from("/home/user"),
            root: PathBuf::from("/"),
        }
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = home.into();
        self
    }

    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }

    pub fn with_unreadable_file(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::Unreadable);
        self
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(content.into()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.borrow_mut().insert(path.to_path_buf(), Node::Dir);
    }

    fn add_parents(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn node(&self, path: &Path) -> Option<Node> {
        self.nodes.borrow().get(path).cloned()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.node(path) {
            Some(Node::File(content)) => Ok(content),
            Some(Node::Unreadable) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            )),
            Some(Node::Dir) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.node(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.node(path), Some(Node::Dir))
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.node(path), Some(Node::File(_) | Node::Unreadable))
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        if !self.is_dir(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", path.display()),
            ));
        }

        // BTreeMap keeps children ordered by path, hence by name.
        let names = self
            .nodes
            .borrow()
            .keys()
            .filter(|child| child.parent() == Some(path))
            .filter_map(|child| child.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    fn home(&self) -> PathBuf {
        self.home.clone()
    }

    fn root(&self) -> PathBuf {
        self.root.clone()
    }
}
