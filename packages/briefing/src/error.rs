//! Typed errors for the briefing pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Errors are layered by
//! collaborator: document loading, the model service, and the pipeline
//! itself.

use thiserror::Error;

use crate::pipeline::Stage;

/// Errors that can occur while running the briefing pipeline.
#[derive(Debug, Error)]
pub enum BriefingError {
    /// Document loading failed before any stage ran
    #[error("document load failed: {0}")]
    Load(#[from] LoadError),

    /// A model call failed; the pipeline stops at this stage
    #[error("model call failed in {stage} stage: {source}")]
    Model {
        stage: Stage,
        #[source]
        source: ModelError,
    },

    /// Missing or invalid configuration
    #[error("config error: {0}")]
    Config(String),
}

/// Errors that can occur while loading a document into plain text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the file from disk failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a readable zip container
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The container has no main document part
    #[error("no document part in archive: {path}")]
    MissingDocumentPart { path: String },

    /// The document part is not well-formed XML
    #[error("document XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Errors that can occur during a model invocation.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Transport-level failure reaching the service
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service answered without any completion
    #[error("no completion in response")]
    EmptyCompletion,
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, BriefingError>;

/// Result type alias for document loading.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Result type alias for model invocations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;
