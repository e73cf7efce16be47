//! Pipeline orchestration: extract, summarize, draft.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{BriefingError, Result};
use crate::pipeline::prompts::Prompts;
use crate::pipeline::record::{Briefing, Stage};
use crate::traits::{ai::Model, loader::DocumentLoader};

/// The three-stage briefing pipeline.
///
/// Holds the model collaborator and the instruction templates as explicit
/// dependencies, so either can be substituted (a scripted mock, a wording
/// variant) without touching the stage logic. Each run owns its record;
/// running twice shares no state.
pub struct Pipeline<M: Model> {
    model: M,
    prompts: Prompts,
}

impl<M: Model> Pipeline<M> {
    /// Create a pipeline over the given model with the default templates.
    pub fn new(model: M) -> Self {
        Self {
            model,
            prompts: Prompts::default(),
        }
    }

    /// Replace the instruction templates.
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// The templates this pipeline formats.
    pub fn prompts(&self) -> &Prompts {
        &self.prompts
    }

    /// Load a document and run all three stages over its text.
    ///
    /// The record's `source` is the path as displayed. A load failure
    /// propagates before any model call is issued.
    pub async fn run_document<L: DocumentLoader>(
        &self,
        loader: &L,
        path: &Path,
    ) -> Result<Briefing> {
        info!(loader = loader.name(), path = %path.display(), "loading document");
        let text = loader.load(path).await?;
        info!(bytes = text.len(), "document loaded");
        self.run(path.display().to_string(), text).await
    }

    /// Run all three stages over already-loaded document text.
    ///
    /// An empty document is not short-circuited: the extraction stage is
    /// invoked with an empty-document prompt and whatever the model
    /// returns is threaded through the remaining stages.
    pub async fn run(
        &self,
        source: impl Into<String>,
        document_text: impl Into<String>,
    ) -> Result<Briefing> {
        let mut briefing = Briefing::new(source).with_document_text(document_text);

        self.extract_updates(&mut briefing).await?;
        self.summarize_region(&mut briefing).await?;
        self.draft_email(&mut briefing).await?;

        Ok(briefing)
    }

    /// Stage 1: per-country updates from the raw document text.
    async fn extract_updates(&self, briefing: &mut Briefing) -> Result<()> {
        let prompt = self.prompts.extract_prompt(&briefing.document_text);
        briefing.country_updates = self.complete_stage(Stage::Extract, &prompt).await?;
        Ok(())
    }

    /// Stage 2: cross-country themes from the extracted updates.
    async fn summarize_region(&self, briefing: &mut Briefing) -> Result<()> {
        let prompt = self.prompts.summary_prompt(&briefing.country_updates);
        briefing.regional_summary = self.complete_stage(Stage::Summarize, &prompt).await?;
        Ok(())
    }

    /// Stage 3: the email draft from the regional summary.
    async fn draft_email(&self, briefing: &mut Briefing) -> Result<()> {
        let prompt = self.prompts.email_prompt(&briefing.regional_summary);
        briefing.email_draft = self.complete_stage(Stage::Draft, &prompt).await?;
        Ok(())
    }

    /// One model call, tagged with its stage on failure.
    async fn complete_stage(&self, stage: Stage, prompt: &str) -> Result<String> {
        debug!(%stage, prompt_len = prompt.len(), "sending prompt");
        let response = self
            .model
            .complete(prompt)
            .await
            .map_err(|source| BriefingError::Model { stage, source })?;
        info!(%stage, response_len = response.len(), "stage complete");
        Ok(response)
    }
}
