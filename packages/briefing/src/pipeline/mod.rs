//! The briefing pipeline - the core of the library.
//!
//! Three model-backed stages run in a fixed order:
//! - Extract per-country updates from raw document text
//! - Summarize cross-country regional themes
//! - Draft the notification email
//!
//! Control flows strictly forward. Each stage formats one instruction
//! template, issues one model call, and writes one field of the shared
//! [`Briefing`] record. A stage failure stops the run; later stages
//! never execute.

pub mod prompts;
pub mod record;
pub mod stages;

pub use prompts::{Prompts, EMAIL_PROMPT, EXTRACT_PROMPT, SUMMARY_PROMPT};
pub use record::{Briefing, Stage};
pub use stages::Pipeline;
