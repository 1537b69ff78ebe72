pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::AiError;

use async_trait::async_trait;

/// One-shot text generation seam.
///
/// Every call is independent: no conversation state is carried between calls
/// and no provider-side tool protocol is exercised. The orchestrator builds
/// whatever context a call needs into the prompt itself.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}
