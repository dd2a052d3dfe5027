//! One-time fixture population for the content tables.
//!
//! Runs inside a single transaction: any failure rolls the whole load back
//! and the store is left untouched. Seeding is not idempotent by design;
//! the unique keys on part, article, and amendment numbers make a second
//! run fail, so the startup path checks [`is_empty`] first.

mod fixtures;

use rusqlite::Connection;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("fixture references unknown {kind} {key}")]
    UnknownReference { kind: &'static str, key: String },
}

/// Rows inserted per table, returned by the seed endpoint and logged at
/// startup.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedCounts {
    pub parts: usize,
    pub articles: usize,
    pub explanations: usize,
    pub amendments: usize,
    pub article_amendments: usize,
    pub case_laws: usize,
    pub article_case_laws: usize,
    pub mcqs: usize,
    pub emergency_guides: usize,
    pub settings: usize,
}

/// True when no content has been seeded yet.
pub fn is_empty(conn: &Connection) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM articles", [], |r| r.get(0))?;
    Ok(count == 0)
}

fn article_id(number: &str) -> Result<i64, SeedError> {
    fixtures::ARTICLES
        .iter()
        .find(|a| a.number == number)
        .map(|a| a.id)
        .ok_or_else(|| SeedError::UnknownReference {
            kind: "article",
            key: number.to_string(),
        })
}

fn part_id(number: i64) -> Result<i64, SeedError> {
    fixtures::PARTS
        .iter()
        .find(|p| p.number == number)
        .map(|p| p.id)
        .ok_or_else(|| SeedError::UnknownReference {
            kind: "part",
            key: number.to_string(),
        })
}

/// Load the full catalogue. All-or-nothing: the transaction commits only
/// when every table loaded.
pub fn run(conn: &Connection) -> Result<SeedCounts, SeedError> {
    let tx = conn.unchecked_transaction()?;
    let mut counts = SeedCounts::default();

    for part in &fixtures::PARTS {
        tx.execute(
            "INSERT INTO parts (id, number, sort_order, title_en, title_hi, title_ta, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                part.id,
                part.number,
                part.sort_order,
                part.title_en,
                part.title_hi,
                part.title_ta,
                part.description,
            ),
        )?;
        counts.parts += 1;
    }

    for article in &fixtures::ARTICLES {
        tx.execute(
            "INSERT INTO articles (id, number, part_id, title_en, title_hi, title_ta,
                                   content_en, content_hi, content_ta, category, importance)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            (
                article.id,
                article.number,
                part_id(article.part)?,
                article.title_en,
                article.title_hi,
                article.title_ta,
                article.content_en,
                article.content_hi,
                article.content_ta,
                article.category,
                article.importance,
            ),
        )?;
        counts.articles += 1;
    }

    for explanation in &fixtures::EXPLANATIONS {
        tx.execute(
            "INSERT INTO simplified_explanations
                 (article_id, language, title, content, examples_json, dos_json, donts_json)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                article_id(explanation.article)?,
                explanation.language,
                explanation.title,
                explanation.content,
                string_list_json(explanation.examples),
                string_list_json(explanation.dos),
                string_list_json(explanation.donts),
            ),
        )?;
        counts.explanations += 1;
    }

    for amendment in &fixtures::AMENDMENTS {
        tx.execute(
            "INSERT INTO amendments (id, number, year, title_en, title_hi, description, act_name)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                amendment.id,
                amendment.number,
                amendment.year,
                amendment.title_en,
                amendment.title_hi,
                amendment.description,
                amendment.act_name,
            ),
        )?;
        counts.amendments += 1;

        for &number in amendment.articles {
            tx.execute(
                "INSERT INTO article_amendments (article_id, amendment_id) VALUES (?1, ?2)",
                (article_id(number)?, amendment.id),
            )?;
            counts.article_amendments += 1;
        }
    }

    for case_law in &fixtures::CASE_LAWS {
        tx.execute(
            "INSERT INTO case_laws (id, title, citation, court, year, summary_en, summary_hi, landmark)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            (
                case_law.id,
                case_law.title,
                case_law.citation,
                case_law.court,
                case_law.year,
                case_law.summary_en,
                case_law.summary_hi,
                case_law.landmark as i64,
            ),
        )?;
        counts.case_laws += 1;

        for &number in case_law.articles {
            tx.execute(
                "INSERT INTO article_case_laws (article_id, case_law_id) VALUES (?1, ?2)",
                (article_id(number)?, case_law.id),
            )?;
            counts.article_case_laws += 1;
        }
    }

    for mcq in &fixtures::MCQS {
        let article = mcq.article.map(article_id).transpose()?;
        tx.execute(
            "INSERT INTO mcqs (article_id, question, option_a, option_b, option_c, option_d,
                               correct_answer, explanation, difficulty, category)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            (
                article,
                mcq.question,
                mcq.option_a,
                mcq.option_b,
                mcq.option_c,
                mcq.option_d,
                mcq.correct_answer,
                mcq.explanation,
                mcq.difficulty,
                mcq.category,
            ),
        )?;
        counts.mcqs += 1;
    }

    for guide in &fixtures::EMERGENCY_GUIDES {
        tx.execute(
            "INSERT INTO emergency_guides
                 (title, category, content_en, content_hi, content_ta, helpline, legal_aid)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                guide.title,
                guide.category,
                guide.content_en,
                guide.content_hi,
                guide.content_ta,
                guide.helpline,
                guide.legal_aid,
            ),
        )?;
        counts.emergency_guides += 1;
    }

    for (key, value) in fixtures::SETTINGS {
        tx.execute(
            "INSERT OR REPLACE INTO app_settings (key, value) VALUES (?1, ?2)",
            (key, value),
        )?;
        counts.settings += 1;
    }

    tx.commit()?;
    Ok(counts)
}

fn string_list_json(items: &[&str]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        serde_json::to_string(items).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn seeded() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        run(db.conn()).unwrap();
        db
    }

    #[test]
    fn test_counts_match_fixture_lengths() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        let counts = run(db.conn()).unwrap();
        assert_eq!(counts.parts, fixtures::PARTS.len());
        assert_eq!(counts.articles, fixtures::ARTICLES.len());
        assert_eq!(counts.explanations, fixtures::EXPLANATIONS.len());
        assert_eq!(counts.amendments, fixtures::AMENDMENTS.len());
        assert_eq!(counts.case_laws, fixtures::CASE_LAWS.len());
        assert_eq!(counts.mcqs, fixtures::MCQS.len());
        assert_eq!(counts.emergency_guides, fixtures::EMERGENCY_GUIDES.len());
        assert!(counts.article_amendments > 0);
        assert!(counts.article_case_laws > 0);
    }

    #[test]
    fn test_referential_integrity() {
        let db = seeded();
        let orphan_articles: i64 = db
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM articles a
                 LEFT JOIN parts p ON p.id = a.part_id WHERE p.id IS NULL",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(orphan_articles, 0);

        let orphan_mcqs: i64 = db
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM mcqs m
                 LEFT JOIN articles a ON a.id = m.article_id
                 WHERE m.article_id IS NOT NULL AND a.id IS NULL",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(orphan_mcqs, 0);
    }

    #[test]
    fn test_article_numbers_unique() {
        let mut numbers: Vec<&str> = fixtures::ARTICLES.iter().map(|a| a.number).collect();
        let before = numbers.len();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), before);
    }

    #[test]
    fn test_is_empty_flips_after_seed() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        assert!(is_empty(db.conn()).unwrap());
        run(db.conn()).unwrap();
        assert!(!is_empty(db.conn()).unwrap());
    }

    #[test]
    fn test_second_run_fails_and_rolls_back() {
        let db = seeded();
        let before: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM articles", [], |r| r.get(0))
            .unwrap();
        assert!(run(db.conn()).is_err());
        let after: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM articles", [], |r| r.get(0))
            .unwrap();
        assert_eq!(before, after);
    }
}
