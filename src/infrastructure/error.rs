//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Errors raised by a markup parser/serializer.
#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("malformed markup: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("invalid UTF-8 in markup: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("document has no root element")]
    NoRootElement,

    #[error("content outside the root element: {0}")]
    ContentOutsideRoot(String),

    #[error("unclosed element: <{0}>")]
    UnclosedElement(String),

    #[error("element nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("invalid markup name: {0:?}")]
    InvalidName(String),

    #[error("cannot serialize markup: {0}")]
    Serialize(String),
}
