//! I/O boundary traits for testability
//!
//! These traits abstract external I/O and the markup collaborator, allowing
//! services to be tested with mock implementations.

use std::io;
use std::path::Path;

use crate::domain::MarkupElement;
use crate::infrastructure::error::MarkupError;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// Markup parser/serializer turning text into element records and back.
pub trait MarkupFormat: Send + Sync {
    /// Parse a whole document and return its root element.
    fn parse(&self, input: &str) -> Result<MarkupElement, MarkupError>;

    /// Render a document rooted at `root`.
    fn serialize(&self, root: &MarkupElement) -> Result<String, MarkupError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                std::fs::create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}
