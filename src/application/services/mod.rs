//! Application services

pub mod document;

pub use document::{with_markup_extension, DocumentService};
