//! Document service
//!
//! Reads markup files into `Tree<NodeMap>` and writes such trees back out.
//! Filesystem and markup errors are reported as `ReadFailure`/`WriteFailure`;
//! nothing partial is returned on failure.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, DocumentResultExt};
use crate::config::Settings;
use crate::domain::{self, render, DomainError, NodeMap, Tree};
use crate::infrastructure::traits::{FileSystem, MarkupFormat};

/// Pseudo path reported for documents parsed from memory.
const IN_MEMORY: &str = "<memory>";

/// Service for reading and writing markup documents as trees.
pub struct DocumentService {
    fs: Arc<dyn FileSystem>,
    markup: Arc<dyn MarkupFormat>,
    settings: Arc<Settings>,
}

impl DocumentService {
    /// Create a new document service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        markup: Arc<dyn MarkupFormat>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fs,
            markup,
            settings,
        }
    }

    /// Read and decode the document at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn read_file(&self, path: &Path) -> ApplicationResult<Tree<NodeMap>> {
        let content = self.fs.read_to_string(path).read_context(path)?;
        let tree = self.decode_str(&content, path)?;
        info!("read {} nodes from {}", tree.len(), path.display());
        Ok(tree)
    }

    /// Decode a document held in memory.
    pub fn parse_str(&self, input: &str) -> ApplicationResult<Tree<NodeMap>> {
        self.decode_str(input, Path::new(IN_MEMORY))
    }

    /// Encode `tree` and write it to `path`, appending the configured
    /// extension if `path` lacks it. Returns the path actually written.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn write_file(&self, tree: &Tree<NodeMap>, path: &Path) -> ApplicationResult<PathBuf> {
        let target = with_markup_extension(path, &self.settings.markup.extension);
        let content = self.encode_string(tree, &target)?;

        self.fs.ensure_parent(&target).write_context(&target)?;
        self.fs.write(&target, &content).write_context(&target)?;

        info!("wrote {} nodes to {}", tree.len(), target.display());
        Ok(target)
    }

    /// Encode `tree` into markup text without touching the filesystem.
    pub fn to_markup_string(&self, tree: &Tree<NodeMap>) -> ApplicationResult<String> {
        self.encode_string(tree, Path::new(IN_MEMORY))
    }

    fn decode_str(&self, input: &str, path: &Path) -> ApplicationResult<Tree<NodeMap>> {
        let document = self.markup.parse(input).read_context(path)?;
        let tree = domain::decode(&document);
        self.trace_tree(&tree);
        Ok(tree)
    }

    fn encode_string(&self, tree: &Tree<NodeMap>, path: &Path) -> ApplicationResult<String> {
        // Precondition violations surface as domain errors, not write failures.
        // Leaf data becomes one more element level, so the deepest node must
        // stay strictly below the limit.
        let limit = self.settings.markup.max_depth;
        if let Some(depth) = tree.height().filter(|depth| *depth >= limit) {
            return Err(DomainError::NestingTooDeep { depth, limit }.into());
        }
        let document = domain::encode(tree)?;
        let content = self.markup.serialize(&document).write_context(path)?;
        self.trace_tree(tree);
        Ok(content)
    }

    fn trace_tree(&self, tree: &Tree<NodeMap>) {
        if self.settings.verbose {
            for line in render::list_lines(tree) {
                info!("{}", line);
            }
        } else {
            debug!("tree with {} nodes", tree.len());
        }
    }
}

/// Append `.<extension>` unless `path` already ends with it.
pub fn with_markup_extension(path: &Path, extension: &str) -> PathBuf {
    let suffix = format!(".{}", extension);
    if path.to_string_lossy().ends_with(&suffix) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(&suffix);
    PathBuf::from(name)
}
