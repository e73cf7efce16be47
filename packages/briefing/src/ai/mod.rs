//! Model implementations for the briefing library.
//!
//! This module provides a reference implementation of the `Model` trait.
//! Users can use it directly or implement their own.

mod openai;

pub use openai::OpenAI;
