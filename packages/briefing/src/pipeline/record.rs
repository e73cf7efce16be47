//! The briefing record threaded through all stages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shared state for one pipeline run.
///
/// Created with empty output fields at pipeline start; each stage writes
/// exactly one field and leaves the rest untouched. `source` is set once
/// and never mutated by any stage. The record lives for a single run and
/// is handed back to the caller when drafting completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Briefing {
    /// Opaque reference to the input document (typically its path).
    pub source: String,

    /// Raw plain-text content handed to the extraction stage.
    pub document_text: String,

    /// Per-country update blocks produced by the extraction stage.
    pub country_updates: String,

    /// Cross-country thematic summary produced by the summary stage.
    pub regional_summary: String,

    /// Final email text produced by the drafting stage.
    pub email_draft: String,
}

impl Briefing {
    /// Create a new record for the given source with empty fields.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Set the raw document text.
    pub fn with_document_text(mut self, text: impl Into<String>) -> Self {
        self.document_text = text.into();
        self
    }
}

/// The three model-backed stages, in execution order.
///
/// A failed stage is terminal: the error is tagged with the stage and
/// the pipeline does not advance further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Per-country update extraction from raw text.
    Extract,

    /// Cross-country regional summary.
    Summarize,

    /// Email drafting.
    Draft,
}

impl Stage {
    /// Stable lowercase name, used in errors and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Summarize => "summarize",
            Stage::Draft => "draft",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
