//! Cache-first LLM classification of a patent.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{ClassificationResult, PatentId, PatentMetadata};
use crate::error::{ClassificationFailure, Error, Result};
use crate::port::outbound::cache::PatentCache;
use crate::port::outbound::llm::Llm;

/// System message sent with every classification request.
pub const SYSTEM_PROMPT: &str = "You are a patent analyst.";

/// Classifies patents into technology areas and IPC/CPC/USPC codes.
///
/// A cached classification is returned as-is; one that no longer decodes
/// is treated as a miss and overwritten. Otherwise the model is asked
/// once and its reply must be a bare JSON object; only successful results
/// are cached, so a failed attempt can be retried by resubmitting.
pub struct Classifier {
    llm: Arc<dyn Llm>,
    cache: Arc<dyn PatentCache>,
    strict_schema: bool,
}

impl Classifier {
    #[must_use]
    pub fn new(llm: Arc<dyn Llm>, cache: Arc<dyn PatentCache>) -> Self {
        Self {
            llm,
            cache,
            strict_schema: false,
        }
    }

    /// Reject parsed replies that leave out any of the five requested fields.
    #[must_use]
    pub fn with_strict_schema(mut self, strict: bool) -> Self {
        self.strict_schema = strict;
        self
    }

    /// Classify one patent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Classification`] if the model call fails or its reply
    /// is unusable, or a storage error if the cache fails.
    pub async fn classify(&self, metadata: &PatentMetadata) -> Result<ClassificationResult> {
        let id = PatentId::parse(&metadata.patent_number)?;

        if let Some(cached) = self.cache.get_classification(&id)? {
            match ClassificationResult::from_cached(&cached) {
                Ok(result) => {
                    debug!(patent = %id, "classification cache hit");
                    return Ok(result);
                }
                Err(e) => {
                    warn!(patent = %id, error = %e, "ignoring undecodable cached classification");
                }
            }
        }

        let prompt = build_prompt(metadata);
        let reply = self
            .llm
            .complete(SYSTEM_PROMPT, &prompt)
            .await
            .map_err(|e| {
                warn!(patent = %id, provider = self.llm.name(), error = %e, "LLM call failed");
                ClassificationFailure::Call(e.to_string())
            })?;
        debug!(patent = %id, provider = self.llm.name(), bytes = reply.len(), "LLM replied");

        let result = ClassificationResult::parse(&reply).inspect_err(|e| {
            warn!(patent = %id, error = %e, "unusable LLM reply");
        })?;

        if self.strict_schema {
            let missing = result.missing_fields();
            if !missing.is_empty() {
                warn!(patent = %id, missing = ?missing, "LLM reply is incomplete");
                return Err(Error::Classification(ClassificationFailure::Schema(missing)));
            }
        }

        self.cache.put_classification(&id, &result.to_cached()?)?;
        info!(patent = %id, provider = self.llm.name(), "classified patent");
        Ok(result)
    }
}

/// Render the classification prompt for a patent.
#[must_use]
pub fn build_prompt(metadata: &PatentMetadata) -> String {
    let title = metadata.title_or_empty();
    let abstract_text = metadata.abstract_or_empty();
    format!(
        r#"You are a patent analyst. Given the patent title and abstract, categorize the patent using CPC, IPC, and USPC codes if applicable.
Provide also high-level technology categories (like AI, biotech, mechanical, etc). Include a paragraph of reasoning.

Title: {title}
Abstract: {abstract_text}

Return only JSON with:
- technology_areas
- ipc_predicted
- cpc_predicted
- uspc_predicted
- reasoning
"#
    )
}
