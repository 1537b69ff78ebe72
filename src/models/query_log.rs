use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted record of one request that reached completion.
///
/// `final_answer` is nullable so a handled failure can still be recorded
/// without an answer.
#[derive(Debug, Clone, Serialize)]
pub struct QueryLog {
    pub id: i64,
    pub user_name: String,
    pub prompt_text: String,
    pub final_answer: Option<String>,
    pub timestamp: DateTime<Utc>,
}
