pub mod web_search;

pub use web_search::WebSearchTool;

use async_trait::async_trait;
use serde_json::{json, Value};

/// Outcome of one search invocation.
///
/// A failed invocation is still an outcome: the error is folded into the
/// payload so the orchestrator can hand it to the synthesis call as data
/// instead of aborting the request.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub success: bool,
    pub payload: Value,
    /// The query that was sent, echoed back for logging and synthesis.
    pub query: String,
}

impl SearchOutcome {
    pub fn success(query: impl Into<String>, payload: Value) -> Self {
        SearchOutcome {
            success: true,
            payload,
            query: query.into(),
        }
    }

    pub fn failure(
        query: impl Into<String>,
        error_kind: &str,
        message: impl Into<String>,
    ) -> Self {
        let query = query.into();
        SearchOutcome {
            success: false,
            payload: json!({
                "error_kind": error_kind,
                "message": message.into(),
                "query": query.clone(),
            }),
            query,
        }
    }
}

/// The single external capability this service can delegate to.
///
/// Kept as a narrow trait so the orchestrator can be tested against a mock
/// without a running webhook.
#[async_trait]
pub trait SearchTool: Send + Sync {
    async fn search(&self, query: &str) -> SearchOutcome;
}
