//! Query log database operations
//!
//! The log is append-only: entries are inserted once per completed request
//! and never updated or deleted.

use chrono::{DateTime, Utc};
use rusqlite::Result as SqliteResult;

use super::super::Database;
use crate::models::QueryLog;

impl Database {
    /// Insert one log entry. The timestamp is assigned here, at insert time.
    pub fn insert_query_log(
        &self,
        user_name: &str,
        prompt_text: &str,
        final_answer: Option<&str>,
    ) -> SqliteResult<QueryLog> {
        let conn = self.conn();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO query_logs (user_name, prompt_text, final_answer, timestamp)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![user_name, prompt_text, final_answer, now.to_rfc3339()],
        )?;

        let id = conn.last_insert_rowid();

        Ok(QueryLog {
            id,
            user_name: user_name.to_string(),
            prompt_text: prompt_text.to_string(),
            final_answer: final_answer.map(|s| s.to_string()),
            timestamp: now,
        })
    }

    /// List all log entries, newest first.
    pub fn list_query_logs(&self) -> SqliteResult<Vec<QueryLog>> {
        let conn = self.conn();

        let mut stmt = conn.prepare(
            "SELECT id, user_name, prompt_text, final_answer, timestamp
             FROM query_logs ORDER BY timestamp DESC",
        )?;

        let logs = stmt
            .query_map([], |row| Self::row_to_query_log(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(logs)
    }

    fn row_to_query_log(row: &rusqlite::Row) -> rusqlite::Result<QueryLog> {
        // Column order: id, user_name, prompt_text, final_answer, timestamp
        let timestamp_str: String = row.get(4)?;

        Ok(QueryLog {
            id: row.get(0)?,
            user_name: row.get(1)?,
            prompt_text: row.get(2)?,
            final_answer: row.get(3)?,
            timestamp: DateTime::parse_from_rfc3339(&timestamp_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (Database, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let db = Database::new(path.to_str().unwrap()).unwrap();
        (db, dir)
    }

    #[test]
    fn test_insert_assigns_id_and_timestamp() {
        let (db, _dir) = test_db();

        let entry = db
            .insert_query_log("alice", "What's 2+2?", Some("4"))
            .unwrap();

        assert_eq!(entry.id, 1);
        assert_eq!(entry.user_name, "alice");
        assert_eq!(entry.prompt_text, "What's 2+2?");
        assert_eq!(entry.final_answer.as_deref(), Some("4"));
    }

    #[test]
    fn test_ids_autoincrement() {
        let (db, _dir) = test_db();

        let first = db.insert_query_log("alice", "q1", Some("a1")).unwrap();
        let second = db.insert_query_log("bob", "q2", Some("a2")).unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn test_final_answer_may_be_null() {
        let (db, _dir) = test_db();

        let entry = db.insert_query_log("alice", "q", None).unwrap();
        assert!(entry.final_answer.is_none());

        let logs = db.list_query_logs().unwrap();
        assert!(logs[0].final_answer.is_none());
    }

    #[test]
    fn test_list_orders_newest_first() {
        let (db, _dir) = test_db();

        // Distinct timestamps so the ordering is deterministic
        {
            let conn = db.conn();
            conn.execute(
                "INSERT INTO query_logs (user_name, prompt_text, final_answer, timestamp)
                 VALUES ('alice', 'old', 'a', '2024-01-01T00:00:00+00:00')",
                [],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO query_logs (user_name, prompt_text, final_answer, timestamp)
                 VALUES ('bob', 'new', 'b', '2024-06-01T00:00:00+00:00')",
                [],
            )
            .unwrap();
        }

        let logs = db.list_query_logs().unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].prompt_text, "new");
        assert_eq!(logs[1].prompt_text, "old");
    }

    #[test]
    fn test_list_empty_database() {
        let (db, _dir) = test_db();
        assert!(db.list_query_logs().unwrap().is_empty());
    }
}
