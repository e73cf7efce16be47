//! Instruction templates for the three pipeline stages.
//!
//! Templates are plain strings with named placeholders, formatted by
//! simple replacement. The defaults carry the behavioral constraints the
//! downstream stages rely on (the `Country:`/`Summary:` return format,
//! the three-paragraph regional summary, the two-section email under 300
//! words). Swap any of them through [`Prompts`] without touching the
//! pipeline itself.

/// Prompt for extracting per-country updates from raw document text.
pub const EXTRACT_PROMPT: &str = r#"You are an expert management consultant. Below is a Word document with updates for several countries. Some text is in paragraphs, some in tables.
Extract and summarize each country's key updates from the document.
Do not add in any additional text or information.
Only reference and take information from the report and not from your own knowledge.

Document:
----
{document_text}
----

Return format:
Country: <country name>
Summary: <executive summary>"#;

/// Prompt for summarizing cross-country regional themes.
pub const SUMMARY_PROMPT: &str = r#"You are a strategy analyst. Based on the following country updates, summarize the key regional themes and strategic takeaways.
Only reference and take information from the report and not from your own knowledge.

Country Updates:
----
{country_updates}
----

Return a 3-paragraph summary with insights across countries."#;

/// Prompt for drafting the notification email.
pub const EMAIL_PROMPT: &str = r#"You are a senior communications director. Write a professional email regarding news monitoring highlights from our Asia countries, to the Asia President based on the summary below.
The email content is to contain the below two sections:
1. Key highlights from the news monitoring (indicate the country)
2. Recommendations to be taken only from the reports, do not add in any additional text or information.
Keep email within 300 words.
Do not need any introduction or summary in the email.
Do not use your own knowledge.

Summary:
----
{regional_summary}
----

Return a polished email in proper format."#;

/// The three instruction templates, carried as explicit configuration.
///
/// Passed into [`Pipeline`](crate::pipeline::Pipeline) so a wording
/// variant is a config change rather than a second pipeline.
#[derive(Debug, Clone)]
pub struct Prompts {
    /// Extraction template; `{document_text}` placeholder.
    pub extract: String,

    /// Regional summary template; `{country_updates}` placeholder.
    pub summarize: String,

    /// Email draft template; `{regional_summary}` placeholder.
    pub draft: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            extract: EXTRACT_PROMPT.to_string(),
            summarize: SUMMARY_PROMPT.to_string(),
            draft: EMAIL_PROMPT.to_string(),
        }
    }
}

impl Prompts {
    /// Create the default template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the extraction template.
    pub fn with_extract(mut self, template: impl Into<String>) -> Self {
        self.extract = template.into();
        self
    }

    /// Replace the summary template.
    pub fn with_summarize(mut self, template: impl Into<String>) -> Self {
        self.summarize = template.into();
        self
    }

    /// Replace the email template.
    pub fn with_draft(mut self, template: impl Into<String>) -> Self {
        self.draft = template.into();
        self
    }

    /// Format the extraction prompt with the document text.
    pub fn extract_prompt(&self, document_text: &str) -> String {
        self.extract.replace("{document_text}", document_text)
    }

    /// Format the summary prompt with the country updates.
    pub fn summary_prompt(&self, country_updates: &str) -> String {
        self.summarize.replace("{country_updates}", country_updates)
    }

    /// Format the email prompt with the regional summary.
    pub fn email_prompt(&self, regional_summary: &str) -> String {
        self.draft.replace("{regional_summary}", regional_summary)
    }
}
