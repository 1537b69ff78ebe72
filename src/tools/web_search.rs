//! Web search via a fixed webhook endpoint.
//!
//! The webhook takes `{"query": "..."}` and returns a JSON body with the
//! search results. One attempt per invocation, bounded by a 30 second
//! timeout. This module never surfaces an error to the caller: every
//! failure mode becomes a structured [`SearchOutcome`] payload.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::tools::{SearchOutcome, SearchTool};

/// Timeout for the webhook round trip. Overrides the shared client default.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct WebSearchTool {
    client: Client,
    webhook_url: String,
}

impl WebSearchTool {
    pub fn new(webhook_url: &str) -> Self {
        WebSearchTool {
            client: crate::http::shared_client().clone(),
            webhook_url: webhook_url.to_string(),
        }
    }
}

#[async_trait]
impl SearchTool for WebSearchTool {
    async fn search(&self, query: &str) -> SearchOutcome {
        log::info!("Calling search webhook for query: {}", query);

        let response = match self
            .client
            .post(&self.webhook_url)
            .json(&json!({ "query": query }))
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Search webhook request failed: {}", e);
                return SearchOutcome::failure(query, "request_failed", e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Search webhook returned status {}: {}", status, body);
            return SearchOutcome::failure(
                query,
                "request_failed",
                format!("search webhook returned status {}: {}", status, body),
            );
        }

        match response.json::<Value>().await {
            Ok(payload) => SearchOutcome::success(query, payload),
            Err(e) => {
                log::warn!("Search webhook returned a non-JSON body: {}", e);
                SearchOutcome::failure(
                    query,
                    "unexpected_error",
                    format!("failed to parse webhook response: {}", e),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on this port, so the connection is refused immediately.
    const UNREACHABLE_URL: &str = "http://127.0.0.1:1/webhook/search-web";

    #[tokio::test]
    async fn test_network_error_becomes_failure_outcome() {
        let tool = WebSearchTool::new(UNREACHABLE_URL);
        let outcome = tool.search("weather Paris today").await;

        assert!(!outcome.success);
        assert_eq!(outcome.payload["error_kind"], "request_failed");
        assert_eq!(outcome.payload["query"], "weather Paris today");
        assert!(outcome.payload["message"].is_string());
    }

    #[tokio::test]
    async fn test_query_echoed_on_failure() {
        let tool = WebSearchTool::new(UNREACHABLE_URL);
        let outcome = tool.search("btc price").await;

        assert_eq!(outcome.query, "btc price");
    }
}
