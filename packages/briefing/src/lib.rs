//! Country-Update Briefing Pipeline
//!
//! Extracts country-level updates from a document, summarizes the
//! regional themes, and drafts a notification email, using three
//! sequential calls to a language-model service.
//!
//! # Design Philosophy
//!
//! - One forward pipeline, no branching, no retries
//! - Each stage's output is the next stage's sole input
//! - Stage outputs are opaque text; the library never parses them
//! - Collaborators (model, document loader) are explicit trait
//!   dependencies, substitutable with scripted mocks
//! - Instruction templates are configuration, not module globals
//!
//! # Usage
//!
//! ```rust,ignore
//! use briefing::{DocxLoader, OpenAI, Pipeline};
//!
//! let model = OpenAI::from_env()?;
//! let pipeline = Pipeline::new(model);
//!
//! let briefing = pipeline
//!     .run_document(&DocxLoader::new(), Path::new("updates.docx"))
//!     .await?;
//! println!("{}", briefing.email_draft);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Model, DocumentLoader)
//! - [`pipeline`] - The three-stage pipeline, record, and templates
//! - [`ai`] - Model implementations (OpenAI)
//! - [`loaders`] - Document loader implementations (DocxLoader)
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod loaders;
pub mod pipeline;
pub mod testing;
pub mod traits;

// Re-export core types at crate root
pub use error::{BriefingError, LoadError, ModelError, Result};
pub use traits::{ai::Model, loader::DocumentLoader};

// Re-export the pipeline
pub use pipeline::{Briefing, Pipeline, Prompts, Stage, EMAIL_PROMPT, EXTRACT_PROMPT, SUMMARY_PROMPT};

// Re-export implementations
pub use ai::OpenAI;
pub use loaders::DocxLoader;

// Re-export testing utilities
pub use testing::{MockLoader, MockModel};
