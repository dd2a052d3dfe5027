//! Cross-content substring search over articles, amendments, and guides.

use std::str::FromStr;

use rusqlite::Connection;
use serde::Serialize;

use crate::content::escape_like;
use crate::localize::{resolve, Lang};
use crate::models::Category;

const ARTICLE_CAP: usize = 20;
const AMENDMENT_CAP: usize = 10;
const GUIDE_CAP: usize = 10;
const SNIPPET_CHARS: usize = 200;

/// Which content kinds a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Articles,
    Amendments,
    Guides,
}

impl FromStr for SearchScope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "articles" => Ok(Self::Articles),
            "amendments" => Ok(Self::Amendments),
            "guides" => Ok(Self::Guides),
            _ => Err(()),
        }
    }
}

/// One search result. The `type` tag distinguishes the shapes on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchHit {
    #[serde(rename_all = "camelCase")]
    Article {
        id: i64,
        number: String,
        title: String,
        snippet: String,
        category: Category,
        importance: i64,
    },
    #[serde(rename_all = "camelCase")]
    Amendment {
        id: i64,
        number: i64,
        year: i64,
        title: String,
        act_name: String,
    },
    #[serde(rename_all = "camelCase")]
    Guide {
        id: i64,
        title: String,
        category: String,
        helpline: String,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub total: usize,
    pub results: Vec<SearchHit>,
}

/// Run a case-insensitive substring search. Articles come first, ordered by
/// importance; amendments and guides follow in table order. Each kind is
/// capped independently. The caller is responsible for rejecting blank
/// queries; `LIKE` handles ASCII case folding, which is enough since the
/// Hindi and Tamil scripts are caseless.
pub fn run(
    conn: &Connection,
    lang: Lang,
    query: &str,
    scope: SearchScope,
) -> rusqlite::Result<SearchResults> {
    let pattern = format!("%{}%", escape_like(query));
    let mut results = Vec::new();

    if matches!(scope, SearchScope::All | SearchScope::Articles) {
        results.extend(articles(conn, lang, &pattern)?);
    }
    if matches!(scope, SearchScope::All | SearchScope::Amendments) {
        results.extend(amendments(conn, lang, &pattern)?);
    }
    if matches!(scope, SearchScope::All | SearchScope::Guides) {
        results.extend(guides(conn, &pattern)?);
    }

    Ok(SearchResults {
        query: query.to_string(),
        total: results.len(),
        results,
    })
}

fn articles(conn: &Connection, lang: Lang, pattern: &str) -> rusqlite::Result<Vec<SearchHit>> {
    let mut stmt = conn.prepare(
        "SELECT id, number, title_en, title_hi, title_ta, content_en, content_hi, content_ta,
                category, importance
         FROM articles
         WHERE number LIKE ?1 ESCAPE '!'
            OR title_en LIKE ?1 ESCAPE '!' OR title_hi LIKE ?1 ESCAPE '!' OR title_ta LIKE ?1 ESCAPE '!'
            OR content_en LIKE ?1 ESCAPE '!' OR content_hi LIKE ?1 ESCAPE '!' OR content_ta LIKE ?1 ESCAPE '!'
         ORDER BY importance DESC
         LIMIT ?2",
    )?;
    let rows = stmt
        .query_map((pattern, ARTICLE_CAP as i64), |row| {
            let title_en: String = row.get(2)?;
            let title_hi: Option<String> = row.get(3)?;
            let title_ta: Option<String> = row.get(4)?;
            let content_en: String = row.get(5)?;
            let content_hi: Option<String> = row.get(6)?;
            let content_ta: Option<String> = row.get(7)?;
            let category: String = row.get(8)?;
            Ok(SearchHit::Article {
                id: row.get(0)?,
                number: row.get(1)?,
                title: resolve(lang, &title_en, title_hi.as_deref(), title_ta.as_deref()),
                snippet: snippet(&resolve(
                    lang,
                    &content_en,
                    content_hi.as_deref(),
                    content_ta.as_deref(),
                )),
                category: category.parse().unwrap_or(Category::Other),
                importance: row.get(9)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn amendments(conn: &Connection, lang: Lang, pattern: &str) -> rusqlite::Result<Vec<SearchHit>> {
    let mut stmt = conn.prepare(
        "SELECT id, number, year, title_en, title_hi, title_ta, act_name
         FROM amendments
         WHERE title_en LIKE ?1 ESCAPE '!' OR title_hi LIKE ?1 ESCAPE '!' OR title_ta LIKE ?1 ESCAPE '!'
            OR description LIKE ?1 ESCAPE '!' OR act_name LIKE ?1 ESCAPE '!'
         LIMIT ?2",
    )?;
    let rows = stmt
        .query_map((pattern, AMENDMENT_CAP as i64), |row| {
            let title_en: String = row.get(3)?;
            let title_hi: Option<String> = row.get(4)?;
            let title_ta: Option<String> = row.get(5)?;
            Ok(SearchHit::Amendment {
                id: row.get(0)?,
                number: row.get(1)?,
                year: row.get(2)?,
                title: resolve(lang, &title_en, title_hi.as_deref(), title_ta.as_deref()),
                act_name: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn guides(conn: &Connection, pattern: &str) -> rusqlite::Result<Vec<SearchHit>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, category, helpline
         FROM emergency_guides
         WHERE title LIKE ?1 ESCAPE '!' OR category LIKE ?1 ESCAPE '!'
            OR content_en LIKE ?1 ESCAPE '!' OR content_hi LIKE ?1 ESCAPE '!' OR content_ta LIKE ?1 ESCAPE '!'
         LIMIT ?2",
    )?;
    let rows = stmt
        .query_map((pattern, GUIDE_CAP as i64), |row| {
            Ok(SearchHit::Guide {
                id: row.get(0)?,
                title: row.get(1)?,
                category: row.get(2)?,
                helpline: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn snippet(text: &str) -> String {
    let mut out: String = text.chars().take(SNIPPET_CHARS).collect();
    if out.chars().count() == SNIPPET_CHARS && text.chars().count() > SNIPPET_CHARS {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn fixture() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        db.conn()
            .execute_batch(
                r#"
                INSERT INTO parts (id, number, sort_order, title_en) VALUES (3, 3, 3, 'Fundamental Rights');
                INSERT INTO articles (id, number, part_id, title_en, title_hi, content_en, content_hi, category, importance) VALUES
                    (1, '14', 3, 'Equality before law', 'विधि के समक्ष समता', 'The State shall not deny to any person equality before the law.', NULL, 'fundamental_right', 5),
                    (2, '16', 3, 'Equality of opportunity', NULL, 'There shall be equality of opportunity for all citizens in matters of public employment.', NULL, 'fundamental_right', 4),
                    (3, '21', 3, 'Protection of life and personal liberty', NULL, 'No person shall be deprived of his life or personal liberty.', 'प्राण और दैहिक स्वतंत्रता का संरक्षण', 'fundamental_right', 5),
                    (4, '48A', 3, 'Environment protection', NULL, 'The State shall endeavour to protect the environment, 100% of forests and wildlife.', NULL, 'directive_principle', 3);
                INSERT INTO amendments (id, number, year, title_en, description, act_name) VALUES
                    (1, 42, 1976, 'Forty-second Amendment', 'Added the words socialist and secular.', 'The Constitution (42nd Amendment) Act, 1976'),
                    (2, 86, 2002, 'Eighty-sixth Amendment', 'Made elementary education a fundamental right.', 'The Constitution (86th Amendment) Act, 2002');
                INSERT INTO emergency_guides (id, title, category, content_en, helpline, legal_aid) VALUES
                    (1, 'If you are arrested', 'arrest', 'You must be produced before a magistrate within 24 hours.', '100', 'NALSA 15100'),
                    (2, 'Equality complaints', 'discrimination', 'File a complaint with the national commission.', '14566', 'NALSA 15100');
                "#,
            )
            .unwrap();
        db
    }

    fn kinds(results: &SearchResults) -> Vec<&'static str> {
        results
            .results
            .iter()
            .map(|hit| match hit {
                SearchHit::Article { .. } => "article",
                SearchHit::Amendment { .. } => "amendment",
                SearchHit::Guide { .. } => "guide",
            })
            .collect()
    }

    #[test]
    fn test_articles_lead_ordered_by_importance() {
        let db = fixture();
        let results = run(db.conn(), Lang::En, "equality", SearchScope::All).unwrap();
        assert_eq!(kinds(&results), ["article", "article", "guide"]);
        match &results.results[0] {
            SearchHit::Article { importance, .. } => assert_eq!(*importance, 5),
            other => panic!("expected article hit, got {other:?}"),
        }
        assert_eq!(results.total, 3);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let db = fixture();
        let results = run(db.conn(), Lang::En, "EQUALITY", SearchScope::Articles).unwrap();
        assert_eq!(results.total, 2);
    }

    #[test]
    fn test_devanagari_content_matches() {
        let db = fixture();
        let results = run(db.conn(), Lang::Hi, "समता", SearchScope::Articles).unwrap();
        assert_eq!(results.total, 1);
        match &results.results[0] {
            SearchHit::Article { title, .. } => assert_eq!(title, "विधि के समक्ष समता"),
            other => panic!("expected article hit, got {other:?}"),
        }
    }

    #[test]
    fn test_number_and_act_name_match() {
        let db = fixture();
        let results = run(db.conn(), Lang::En, "48A", SearchScope::Articles).unwrap();
        assert_eq!(results.total, 1);

        let results = run(db.conn(), Lang::En, "86th", SearchScope::Amendments).unwrap();
        assert_eq!(results.total, 1);
        match &results.results[0] {
            SearchHit::Amendment { number, .. } => assert_eq!(*number, 86),
            other => panic!("expected amendment hit, got {other:?}"),
        }
    }

    #[test]
    fn test_like_metacharacters_are_literal() {
        let db = fixture();
        // "100%" appears in one article body; "%" alone must not match everything
        let results = run(db.conn(), Lang::En, "100%", SearchScope::Articles).unwrap();
        assert_eq!(results.total, 1);
        let results = run(db.conn(), Lang::En, "10_%", SearchScope::Articles).unwrap();
        assert_eq!(results.total, 0);
    }

    #[test]
    fn test_scope_restricts_kinds() {
        let db = fixture();
        let results = run(db.conn(), Lang::En, "fundamental", SearchScope::Guides).unwrap();
        assert!(results.results.is_empty());

        let results = run(db.conn(), Lang::En, "magistrate", SearchScope::All).unwrap();
        assert_eq!(kinds(&results), ["guide"]);
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!("all".parse(), Ok(SearchScope::All));
        assert_eq!("guides".parse(), Ok(SearchScope::Guides));
        assert_eq!("bogus".parse::<SearchScope>(), Err(()));
    }
}
