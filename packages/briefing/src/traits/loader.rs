//! DocumentLoader trait for pluggable document ingestion.
//!
//! The pipeline depends on one capability from its input boundary:
//! given a path, return the document's full plain-text content.
//! Format specifics (zip containers, XML parts) live behind this seam.

use std::path::Path;

use async_trait::async_trait;

use crate::error::LoadResult;

/// Loads a document's plain-text content from a path.
///
/// Implementations:
/// - `DocxLoader` - word-processor `.docx` files
/// - `MockLoader` - predefined documents for testing
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Load the document at `path` and return its plain-text content.
    async fn load(&self, path: &Path) -> LoadResult<String>;

    /// Get the loader name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
