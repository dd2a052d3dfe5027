//! Constitution tree: every part with its articles

use rusqlite::{params_from_iter, types::Value, Connection};
use serde::Serialize;

use crate::content::article_summary_row;
use crate::localize::{resolve, Lang};
use crate::models::ArticleSummary;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartNode {
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub description: Option<String>,
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstitutionTree {
    pub parts: Vec<PartNode>,
    pub total_parts: usize,
    pub total_articles: usize,
}

/// Assemble the parts tree in display order. Articles are ordered by their
/// `number` string, so "21A" sorts before "3" on purpose: numbers are
/// identifiers, not quantities, and the seeded order is the textual one.
///
/// `part` narrows to a single part number; an unknown number yields `None`.
pub fn tree(
    conn: &Connection,
    lang: Lang,
    part: Option<i64>,
) -> rusqlite::Result<Option<ConstitutionTree>> {
    let mut sql = String::from(
        "SELECT id, number, sort_order, title_en, title_hi, title_ta, description FROM parts",
    );
    let mut params: Vec<Value> = Vec::new();
    if let Some(number) = part {
        sql.push_str(" WHERE number = ?");
        params.push(Value::Integer(number));
    }
    sql.push_str(" ORDER BY sort_order");

    let mut stmt = conn.prepare(&sql)?;
    let mut parts = stmt
        .query_map(params_from_iter(params.iter()), |row| {
            let title_en: String = row.get(3)?;
            let title_hi: Option<String> = row.get(4)?;
            let title_ta: Option<String> = row.get(5)?;
            Ok(PartNode {
                id: row.get(0)?,
                number: row.get(1)?,
                title: resolve(lang, &title_en, title_hi.as_deref(), title_ta.as_deref()),
                description: row.get(6)?,
                articles: Vec::new(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    if part.is_some() && parts.is_empty() {
        return Ok(None);
    }

    for node in &mut parts {
        node.articles = articles_for_part(conn, lang, node.id)?;
    }

    let total_articles = parts.iter().map(|p| p.articles.len()).sum();
    Ok(Some(ConstitutionTree {
        total_parts: parts.len(),
        total_articles,
        parts,
    }))
}

fn articles_for_part(
    conn: &Connection,
    lang: Lang,
    part_id: i64,
) -> rusqlite::Result<Vec<ArticleSummary>> {
    let mut stmt = conn.prepare(
        "SELECT id, number, title_en, title_hi, title_ta, category, importance
         FROM articles
         WHERE part_id = ?
         ORDER BY number",
    )?;

    let articles = stmt
        .query_map([part_id], |row| article_summary_row(row, lang))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn fixture() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        let conn = db.conn();
        conn.execute_batch(
            r#"
            INSERT INTO parts (id, number, sort_order, title_en, title_hi) VALUES
                (1, 3, 1, 'Fundamental Rights', 'मौलिक अधिकार'),
                (2, 4, 2, 'Directive Principles of State Policy', NULL);
            INSERT INTO articles (id, number, part_id, title_en, title_hi, content_en, category, importance) VALUES
                (1, '14', 1, 'Equality before law', 'विधि के समक्ष समता', 'The State shall not deny...', 'fundamental_right', 5),
                (2, '21A', 1, 'Right to education', NULL, 'The State shall provide...', 'fundamental_right', 5),
                (3, '3', 1, 'Formation of new States', NULL, 'Parliament may by law...', 'other', 2),
                (4, '38', 2, 'State to secure a social order', NULL, 'The State shall strive...', 'directive_principle', 4);
            "#,
        )
        .unwrap();
        db
    }

    #[test]
    fn test_tree_orders_articles_lexicographically() {
        let db = fixture();
        let tree = tree(db.conn(), Lang::En, None).unwrap().unwrap();

        assert_eq!(tree.total_parts, 2);
        assert_eq!(tree.total_articles, 4);
        let numbers: Vec<&str> = tree.parts[0]
            .articles
            .iter()
            .map(|a| a.number.as_str())
            .collect();
        // "21A" < "3" in string order
        assert_eq!(numbers, ["14", "21A", "3"]);
    }

    #[test]
    fn test_tree_localizes_with_fallback() {
        let db = fixture();
        let tree = tree(db.conn(), Lang::Hi, None).unwrap().unwrap();

        assert_eq!(tree.parts[0].title, "मौलिक अधिकार");
        // no Hindi title seeded, English comes back
        assert_eq!(tree.parts[1].title, "Directive Principles of State Policy");
        assert_eq!(tree.parts[0].articles[0].title, "विधि के समक्ष समता");
        assert_eq!(tree.parts[0].articles[1].title, "Right to education");
    }

    #[test]
    fn test_tree_part_filter() {
        let db = fixture();
        let tree = tree(db.conn(), Lang::En, Some(4)).unwrap().unwrap();
        assert_eq!(tree.total_parts, 1);
        assert_eq!(tree.parts[0].articles.len(), 1);
    }

    #[test]
    fn test_tree_unknown_part_is_none() {
        let db = fixture();
        assert!(tree(db.conn(), Lang::En, Some(99)).unwrap().is_none());
    }
}
