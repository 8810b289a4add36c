//! Error conversion helpers for the document entry points
//!
//! Collaborator errors (filesystem, markup) are folded into `ReadFailure` or
//! `WriteFailure` carrying the document path.

use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting collaborator results to `ApplicationResult`.
pub trait DocumentResultExt<T> {
    /// Report any error as a read failure of `path`.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&path).read_context(&path)?;
    /// ```
    fn read_context(self, path: &Path) -> ApplicationResult<T>;

    /// Report any error as a write failure of `path`.
    fn write_context(self, path: &Path) -> ApplicationResult<T>;
}

impl<T, E> DocumentResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn read_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::ReadFailure {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    fn write_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::WriteFailure {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }
}
