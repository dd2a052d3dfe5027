//! SQLite content store
//!
//! One connection, owned by a [`DbExecutor`] after startup. Content tables
//! are written only by seeding; `ai_queries` and `quiz_attempts` are
//! append-only logs written during normal operation.

pub mod executor;

pub use executor::{DbExecutor, DbExecutorError};

use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;
use thiserror::Error;

const CURRENT_SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration failed: {0}")]
    Migration(String),
    #[error("Database corruption detected")]
    Corruption,
}

/// Database manager: open, migrate, verify.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database file.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        Self::configure(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        Self::configure(&conn)?;
        Ok(Self { conn })
    }

    fn configure(conn: &Connection) -> Result<(), DbError> {
        // Enable foreign key enforcement (join tables rely on it)
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        // Set busy timeout (5 seconds) to avoid SQLITE_BUSY errors
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;

        // WAL gives better read concurrency; harmless if unsupported
        let _ = conn.execute_batch("PRAGMA journal_mode = WAL;");

        Ok(())
    }

    /// Initialize database schema.
    pub fn initialize(&self) -> Result<(), DbError> {
        self.check_integrity()?;

        let version = self.get_schema_version()?;
        if version < CURRENT_SCHEMA_VERSION {
            self.run_migrations(version)?;
        }

        Ok(())
    }

    /// Check database integrity.
    pub fn check_integrity(&self) -> Result<(), DbError> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result != "ok" {
            return Err(DbError::Corruption);
        }

        Ok(())
    }

    /// Get current schema version.
    fn get_schema_version(&self) -> Result<i32, DbError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS app_settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        let version: SqliteResult<String> = self.conn.query_row(
            "SELECT value FROM app_settings WHERE key = 'schema_version'",
            [],
            |row| row.get(0),
        );

        match version {
            Ok(v) => v
                .parse()
                .map_err(|_| DbError::Migration("Invalid schema version".into())),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DbError::Sqlite(e)),
        }
    }

    /// Set schema version.
    fn set_schema_version(&self, version: i32) -> Result<(), DbError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO app_settings (key, value) VALUES ('schema_version', ?)",
            rusqlite::params![version.to_string()],
        )?;
        Ok(())
    }

    /// Run database migrations.
    fn run_migrations(&self, from_version: i32) -> Result<(), DbError> {
        let tx = self.conn.unchecked_transaction()?;

        if from_version < 1 {
            self.migrate_v1()?;
        }

        tx.commit()?;
        self.set_schema_version(CURRENT_SCHEMA_VERSION)?;

        Ok(())
    }

    /// Migration to v1: full content schema plus the two append-only logs.
    fn migrate_v1(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            r#"
            -- Flat key/value settings (also carries schema_version)
            CREATE TABLE IF NOT EXISTS app_settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            -- Parts of the Constitution, displayed in sort_order
            CREATE TABLE IF NOT EXISTS parts (
                id INTEGER PRIMARY KEY,
                number INTEGER NOT NULL UNIQUE,
                sort_order INTEGER NOT NULL,
                title_en TEXT NOT NULL,
                title_hi TEXT,
                title_ta TEXT,
                description TEXT
            );

            -- Articles; number is the cross-referencing key ("14", "21A")
            CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY,
                number TEXT NOT NULL UNIQUE,
                part_id INTEGER NOT NULL,
                title_en TEXT NOT NULL,
                title_hi TEXT,
                title_ta TEXT,
                content_en TEXT NOT NULL,
                content_hi TEXT,
                content_ta TEXT,
                category TEXT NOT NULL DEFAULT 'other'
                    CHECK(category IN ('fundamental_right', 'directive_principle', 'fundamental_duty', 'other')),
                importance INTEGER NOT NULL DEFAULT 3 CHECK(importance BETWEEN 1 AND 5),
                FOREIGN KEY (part_id) REFERENCES parts(id) ON DELETE CASCADE
            );
            CREATE INDEX IF NOT EXISTS idx_articles_part ON articles(part_id);
            CREATE INDEX IF NOT EXISTS idx_articles_category ON articles(category);

            -- Plain-language glosses, at most one per (article, language)
            CREATE TABLE IF NOT EXISTS simplified_explanations (
                id INTEGER PRIMARY KEY,
                article_id INTEGER NOT NULL,
                language TEXT NOT NULL CHECK(language IN ('en', 'hi', 'ta')),
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                examples_json TEXT,
                dos_json TEXT,
                donts_json TEXT,
                FOREIGN KEY (article_id) REFERENCES articles(id) ON DELETE CASCADE
            );
            CREATE UNIQUE INDEX IF NOT EXISTS idx_explanations_article_lang
                ON simplified_explanations(article_id, language);

            -- Constitutional amendments
            CREATE TABLE IF NOT EXISTS amendments (
                id INTEGER PRIMARY KEY,
                number INTEGER NOT NULL UNIQUE,
                year INTEGER NOT NULL,
                title_en TEXT NOT NULL,
                title_hi TEXT,
                title_ta TEXT,
                description TEXT NOT NULL,
                act_name TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_amendments_year ON amendments(year);

            CREATE TABLE IF NOT EXISTS article_amendments (
                article_id INTEGER NOT NULL,
                amendment_id INTEGER NOT NULL,
                PRIMARY KEY (article_id, amendment_id),
                FOREIGN KEY (article_id) REFERENCES articles(id) ON DELETE CASCADE,
                FOREIGN KEY (amendment_id) REFERENCES amendments(id) ON DELETE CASCADE
            );

            -- Judicial decisions interpreting articles
            CREATE TABLE IF NOT EXISTS case_laws (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                citation TEXT NOT NULL,
                court TEXT NOT NULL,
                year INTEGER NOT NULL,
                summary_en TEXT NOT NULL,
                summary_hi TEXT,
                summary_ta TEXT,
                landmark INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS article_case_laws (
                article_id INTEGER NOT NULL,
                case_law_id INTEGER NOT NULL,
                PRIMARY KEY (article_id, case_law_id),
                FOREIGN KEY (article_id) REFERENCES articles(id) ON DELETE CASCADE,
                FOREIGN KEY (case_law_id) REFERENCES case_laws(id) ON DELETE CASCADE
            );

            -- Quiz questions, optionally tied to an article
            CREATE TABLE IF NOT EXISTS mcqs (
                id INTEGER PRIMARY KEY,
                article_id INTEGER,
                question TEXT NOT NULL,
                option_a TEXT NOT NULL,
                option_b TEXT NOT NULL,
                option_c TEXT NOT NULL,
                option_d TEXT NOT NULL,
                correct_answer TEXT NOT NULL CHECK(correct_answer IN ('A', 'B', 'C', 'D')),
                explanation TEXT NOT NULL,
                difficulty TEXT NOT NULL DEFAULT 'medium'
                    CHECK(difficulty IN ('easy', 'medium', 'hard')),
                category TEXT NOT NULL,
                FOREIGN KEY (article_id) REFERENCES articles(id) ON DELETE SET NULL
            );
            CREATE INDEX IF NOT EXISTS idx_mcqs_category ON mcqs(category);
            CREATE INDEX IF NOT EXISTS idx_mcqs_difficulty ON mcqs(difficulty);

            -- What-to-do guides for police encounters and similar situations
            CREATE TABLE IF NOT EXISTS emergency_guides (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                category TEXT NOT NULL,
                content_en TEXT NOT NULL,
                content_hi TEXT,
                content_ta TEXT,
                helpline TEXT NOT NULL,
                legal_aid TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_guides_category ON emergency_guides(category);

            -- Append-only assistant log
            CREATE TABLE IF NOT EXISTS ai_queries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                context TEXT,
                rating INTEGER,
                created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_ai_queries_user ON ai_queries(user_id, created_at DESC);

            -- Append-only quiz attempt log
            CREATE TABLE IF NOT EXISTS quiz_attempts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                score INTEGER NOT NULL,
                total INTEGER NOT NULL,
                time_spent INTEGER,
                category TEXT,
                created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_quiz_attempts_user ON quiz_attempts(user_id, created_at DESC);
            "#,
        )?;

        Ok(())
    }

    /// Get inner connection reference.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_creates_schema() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();

        let count: i64 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'articles'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_initialize_sets_schema_version() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        assert_eq!(db.get_schema_version().unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_initialize_is_repeatable() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        db.initialize().unwrap();
        assert_eq!(db.get_schema_version().unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_category_check_constraint() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();

        db.conn
            .execute(
                "INSERT INTO parts (id, number, sort_order, title_en) VALUES (1, 3, 1, 'Fundamental Rights')",
                [],
            )
            .unwrap();

        let bad = db.conn.execute(
            "INSERT INTO articles (number, part_id, title_en, content_en, category)
             VALUES ('14', 1, 'Equality before law', 'text', 'basic_right')",
            [],
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_article_requires_existing_part() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();

        let orphan = db.conn.execute(
            "INSERT INTO articles (number, part_id, title_en, content_en, category)
             VALUES ('14', 99, 'Equality before law', 'text', 'fundamental_right')",
            [],
        );
        assert!(orphan.is_err());
    }

    #[test]
    fn test_explanation_unique_per_language() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();

        db.conn
            .execute(
                "INSERT INTO parts (id, number, sort_order, title_en) VALUES (1, 3, 1, 'Fundamental Rights')",
                [],
            )
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO articles (id, number, part_id, title_en, content_en, category)
                 VALUES (1, '14', 1, 'Equality before law', 'text', 'fundamental_right')",
                [],
            )
            .unwrap();

        db.conn
            .execute(
                "INSERT INTO simplified_explanations (article_id, language, title, content)
                 VALUES (1, 'en', 'What it means', 'Everyone is equal before law')",
                [],
            )
            .unwrap();
        let dup = db.conn.execute(
            "INSERT INTO simplified_explanations (article_id, language, title, content)
             VALUES (1, 'en', 'Again', 'duplicate')",
            [],
        );
        assert!(dup.is_err());
    }
}
