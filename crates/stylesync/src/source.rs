//! Document access abstractions.
//!
//! The synchronizer never touches the filesystem directly. It reads and writes
//! documents through a [`DocumentSource`], so tests can run every pass
//! against in-memory fixtures.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read/write access to text documents by path.
pub trait DocumentSource {
    /// Read the whole document at `path`.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Replace the whole document at `path` with `contents`.
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &mut S {
    fn read(&self, path: &Path) -> io::Result<String> {
        (**self).read(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}

// === Real implementation ===

/// Filesystem source. Relative paths resolve against `root`.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Source rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute paths are used as-is by [`Path::join`].
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for FsSource {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl DocumentSource for FsSource {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(self.resolve(path), contents)
    }
}

// === Mock implementation for testing ===

/// In-memory document store.
///
/// Reading a path that was never added fails with [`io::ErrorKind::NotFound`].
/// Every successful write is recorded in order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: BTreeMap<PathBuf, String>,
    writes: Vec<PathBuf>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document.
    pub fn with_document(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.documents.insert(path.into(), contents.into());
        self
    }

    /// Current contents of a document.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.documents.get(path.as_ref()).map(String::as_str)
    }

    /// Paths written so far, in write order.
    pub fn writes(&self) -> &[PathBuf] {
        &self.writes
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.documents.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no document at {}", path.display()),
            )
        })
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.documents
            .insert(path.to_path_buf(), contents.to_string());
        self.writes.push(path.to_path_buf());
        Ok(())
    }
}
