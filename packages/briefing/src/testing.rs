//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the briefing
//! library without making real model or filesystem calls. Stage outputs
//! are opaque strings, so the mocks script responses and record calls
//! rather than modeling any real behavior.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{LoadError, LoadResult, ModelError, ModelResult};
use crate::traits::{ai::Model, loader::DocumentLoader};

/// A mock model for testing.
///
/// Returns scripted responses in order and records every prompt it
/// receives. Cloning shares the underlying state, so a test can keep a
/// handle for assertions after the pipeline takes ownership.
#[derive(Default, Clone)]
pub struct MockModel {
    /// Scripted responses, consumed front to back
    responses: Arc<RwLock<VecDeque<String>>>,

    /// 1-based call numbers that should fail
    fail_on: Arc<RwLock<HashSet<usize>>>,

    /// Prompts received, in call order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockModel {
    /// Create a new mock with no scripted responses.
    ///
    /// Unscripted calls return a generated `mock completion N` string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one scripted response.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.write().unwrap().push_back(response.into());
        self
    }

    /// Queue several scripted responses, consumed in order.
    pub fn with_responses<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue = self.responses.write().unwrap();
        for response in responses {
            queue.push_back(response.into());
        }
        drop(queue);
        self
    }

    /// Make the n-th call (1-based) fail with a mock API error.
    pub fn fail_on_call(self, call: usize) -> Self {
        self.fail_on.write().unwrap().insert(call);
        self
    }

    /// All prompts received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl Model for MockModel {
    async fn complete(&self, prompt: &str) -> ModelResult<String> {
        let call_number = {
            let mut calls = self.calls.write().unwrap();
            calls.push(prompt.to_string());
            calls.len()
        };

        if self.fail_on.read().unwrap().contains(&call_number) {
            return Err(ModelError::Api {
                status: 500,
                message: format!("mock failure on call {call_number}"),
            });
        }

        let scripted = self.responses.write().unwrap().pop_front();
        Ok(scripted.unwrap_or_else(|| format!("mock completion {call_number}")))
    }
}

/// A mock document loader for testing.
///
/// Returns predefined texts keyed by path without touching the
/// filesystem. Unknown paths fail with a not-found io error.
#[derive(Default, Clone)]
pub struct MockLoader {
    /// Predefined documents by path
    documents: Arc<RwLock<HashMap<String, String>>>,

    /// Paths requested, in call order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockLoader {
    /// Create a new mock loader with no documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined document.
    pub fn with_document(self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents
            .write()
            .unwrap()
            .insert(path.into(), text.into());
        self
    }

    /// All paths requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl DocumentLoader for MockLoader {
    async fn load(&self, path: &Path) -> LoadResult<String> {
        let key = path.display().to_string();
        self.calls.write().unwrap().push(key.clone());

        self.documents
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| {
                LoadError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no mock document for {key}"),
                ))
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
