//! SQLite storage behind an r2d2 connection pool.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Result as SqliteResult;
use std::path::Path;

pub type DbConn = PooledConnection<SqliteConnectionManager>;

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn new(path: &str) -> Result<Self, String> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create database directory: {}", e))?;
            }
        }

        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::new(manager)
            .map_err(|e| format!("Failed to create connection pool: {}", e))?;

        let db = Database { pool };
        db.init_schema()
            .map_err(|e| format!("Failed to initialize schema: {}", e))?;
        Ok(db)
    }

    pub(crate) fn conn(&self) -> DbConn {
        self.pool
            .get()
            .expect("Failed to get database connection from pool")
    }

    fn init_schema(&self) -> SqliteResult<()> {
        let conn = self.conn();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS query_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_name TEXT NOT NULL,
                prompt_text TEXT NOT NULL,
                final_answer TEXT,
                timestamp TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}
