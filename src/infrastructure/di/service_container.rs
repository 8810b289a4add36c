//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DocumentService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, MarkupFormat, RealFileSystem};
use crate::infrastructure::xml::XmlFormat;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Markup parser/serializer
    pub markup: Arc<dyn MarkupFormat>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let markup = Arc::new(XmlFormat::from(&settings.markup));
        Self::with_deps(settings, Arc::new(RealFileSystem), markup)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        markup: Arc<dyn MarkupFormat>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            markup,
        }
    }

    /// Document service sharing this container's dependencies.
    pub fn document_service(&self) -> DocumentService {
        DocumentService::new(
            Arc::clone(&self.fs),
            Arc::clone(&self.markup),
            Arc::clone(&self.settings),
        )
    }
}
