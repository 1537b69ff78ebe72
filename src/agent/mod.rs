//! The orchestration core: classify, then either search-and-synthesize or
//! answer directly.
//!
//! Per request the flow is strictly sequential: one classifier call, then
//! either one tool invocation followed by one synthesis call, or one direct
//! generation call. Tool failures degrade into the synthesis prompt as data;
//! generator failures are fatal for the request.

pub mod classification;
pub mod prompts;

pub use classification::{parse_classification, Classification};

use std::sync::Arc;

use crate::ai::{AiError, TextGenerator};
use crate::tools::SearchTool;

pub struct Orchestrator {
    generator: Arc<dyn TextGenerator>,
    search_tool: Arc<dyn SearchTool>,
}

impl Orchestrator {
    pub fn new(generator: Arc<dyn TextGenerator>, search_tool: Arc<dyn SearchTool>) -> Self {
        Orchestrator {
            generator,
            search_tool,
        }
    }

    /// Produce the final answer for one prompt.
    ///
    /// Exactly one terminal outcome: the answer string, or the provider
    /// error that aborted the request. The search tool is invoked at most
    /// once, and only when the classifier extracted a non-empty query.
    pub async fn answer(&self, prompt: &str) -> Result<String, AiError> {
        let classifier_prompt = prompts::build_classifier_prompt(prompt);
        let raw = self.generator.generate(&classifier_prompt).await?;

        match parse_classification(&raw) {
            Classification::NeedsSearch(query) => {
                log::info!("Classifier requested web search: {}", query);
                let outcome = self.search_tool.search(&query).await;
                if !outcome.success {
                    log::warn!(
                        "Web search failed, synthesizing from error payload: {}",
                        outcome.payload
                    );
                }
                let synthesis_prompt = prompts::build_synthesis_prompt(prompt, &outcome.payload);
                self.generator.generate(&synthesis_prompt).await
            }
            Classification::DirectAnswer => {
                log::info!("Classifier chose direct answer");
                self.generator.generate(prompt).await
            }
        }
    }
}
