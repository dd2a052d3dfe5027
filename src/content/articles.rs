//! Single-article detail with explanation, case law, and amendment joins

use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;

use crate::localize::{resolve, Lang};
use crate::models::{AmendmentView, CaseLawView, Category, PartHeader};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationView {
    pub language: Lang,
    pub title: String,
    pub content: String,
    pub examples: Vec<String>,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    pub id: i64,
    pub number: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub importance: i64,
    pub part: PartHeader,
    pub simplified_explanation: Option<ExplanationView>,
    pub case_laws: Vec<CaseLawView>,
    pub amendments: Vec<AmendmentView>,
}

/// Load one article with everything the detail page needs. `None` when the
/// id does not exist.
pub fn detail(conn: &Connection, id: i64, lang: Lang) -> rusqlite::Result<Option<ArticleDetail>> {
    let head = conn
        .query_row(
            "SELECT a.id, a.number, a.title_en, a.title_hi, a.title_ta,
                    a.content_en, a.content_hi, a.content_ta, a.category, a.importance,
                    p.number, p.title_en, p.title_hi, p.title_ta
             FROM articles a
             JOIN parts p ON p.id = a.part_id
             WHERE a.id = ?",
            [id],
            |row| {
                let title_en: String = row.get(2)?;
                let title_hi: Option<String> = row.get(3)?;
                let title_ta: Option<String> = row.get(4)?;
                let content_en: String = row.get(5)?;
                let content_hi: Option<String> = row.get(6)?;
                let content_ta: Option<String> = row.get(7)?;
                let category: String = row.get(8)?;
                let part_title_en: String = row.get(11)?;
                let part_title_hi: Option<String> = row.get(12)?;
                let part_title_ta: Option<String> = row.get(13)?;
                Ok(ArticleDetail {
                    id: row.get(0)?,
                    number: row.get(1)?,
                    title: resolve(lang, &title_en, title_hi.as_deref(), title_ta.as_deref()),
                    content: resolve(
                        lang,
                        &content_en,
                        content_hi.as_deref(),
                        content_ta.as_deref(),
                    ),
                    category: category.parse().unwrap_or(Category::Other),
                    importance: row.get(9)?,
                    part: PartHeader {
                        number: row.get(10)?,
                        title: resolve(
                            lang,
                            &part_title_en,
                            part_title_hi.as_deref(),
                            part_title_ta.as_deref(),
                        ),
                    },
                    simplified_explanation: None,
                    case_laws: Vec::new(),
                    amendments: Vec::new(),
                })
            },
        )
        .optional()?;

    let Some(mut article) = head else {
        return Ok(None);
    };

    article.simplified_explanation = explanation(conn, id, lang)?;
    article.case_laws = case_laws(conn, id, lang)?;
    article.amendments = amendments(conn, id, lang)?;

    Ok(Some(article))
}

/// The explanation row for the requested language, then the English row
/// when no translation exists, then `None`.
fn explanation(
    conn: &Connection,
    article_id: i64,
    lang: Lang,
) -> rusqlite::Result<Option<ExplanationView>> {
    let row = conn
        .query_row(
            "SELECT language, title, content, examples_json, dos_json, donts_json
             FROM simplified_explanations
             WHERE article_id = ?1 AND language IN (?2, 'en')
             ORDER BY CASE language WHEN ?2 THEN 0 ELSE 1 END
             LIMIT 1",
            rusqlite::params![article_id, lang.as_str()],
            |row| {
                let language: String = row.get(0)?;
                Ok(ExplanationView {
                    language: Lang::parse(Some(&language)),
                    title: row.get(1)?,
                    content: row.get(2)?,
                    examples: string_list(row.get(3)?),
                    dos: string_list(row.get(4)?),
                    donts: string_list(row.get(5)?),
                })
            },
        )
        .optional()?;
    Ok(row)
}

fn case_laws(conn: &Connection, article_id: i64, lang: Lang) -> rusqlite::Result<Vec<CaseLawView>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.title, c.citation, c.court, c.year, c.summary_en, c.summary_hi, c.summary_ta, c.landmark
         FROM case_laws c
         JOIN article_case_laws j ON j.case_law_id = c.id
         WHERE j.article_id = ?
         ORDER BY c.year",
    )?;

    let rows = stmt
        .query_map([article_id], |row| {
            let summary_en: String = row.get(5)?;
            let summary_hi: Option<String> = row.get(6)?;
            let summary_ta: Option<String> = row.get(7)?;
            Ok(CaseLawView {
                id: row.get(0)?,
                title: row.get(1)?,
                citation: row.get(2)?,
                court: row.get(3)?,
                year: row.get(4)?,
                summary: resolve(lang, &summary_en, summary_hi.as_deref(), summary_ta.as_deref()),
                landmark: row.get::<_, i64>(8)? != 0,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn amendments(
    conn: &Connection,
    article_id: i64,
    lang: Lang,
) -> rusqlite::Result<Vec<AmendmentView>> {
    let mut stmt = conn.prepare(
        "SELECT m.id, m.number, m.year, m.title_en, m.title_hi, m.title_ta, m.description, m.act_name
         FROM amendments m
         JOIN article_amendments j ON j.amendment_id = m.id
         WHERE j.article_id = ?
         ORDER BY m.number",
    )?;

    let rows = stmt
        .query_map([article_id], |row| {
            let title_en: String = row.get(3)?;
            let title_hi: Option<String> = row.get(4)?;
            let title_ta: Option<String> = row.get(5)?;
            Ok(AmendmentView {
                id: row.get(0)?,
                number: row.get(1)?,
                year: row.get(2)?,
                title: resolve(lang, &title_en, title_hi.as_deref(), title_ta.as_deref()),
                description: row.get(6)?,
                act_name: row.get(7)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Parse a JSON-array column. A missing or malformed value becomes an empty
/// list rather than an error.
fn string_list(raw: Option<String>) -> Vec<String> {
    raw.and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
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
                INSERT INTO parts (id, number, sort_order, title_en, title_hi) VALUES
                    (1, 3, 1, 'Fundamental Rights', 'मौलिक अधिकार');
                INSERT INTO articles (id, number, part_id, title_en, title_hi, content_en, content_hi, category, importance) VALUES
                    (1, '21', 1, 'Protection of life and personal liberty', 'प्राण और दैहिक स्वतंत्रता का संरक्षण',
                     'No person shall be deprived of his life or personal liberty except according to procedure established by law.',
                     'किसी व्यक्ति को उसके प्राण या दैहिक स्वतंत्रता से विधि द्वारा स्थापित प्रक्रिया के अनुसार ही वंचित किया जाएगा।',
                     'fundamental_right', 5);
                INSERT INTO simplified_explanations (article_id, language, title, content, examples_json, dos_json, donts_json) VALUES
                    (1, 'en', 'Your right to live with dignity', 'The government cannot take away your life or freedom without following fair legal procedure.',
                     '["Right to privacy", "Right to clean environment"]', '["Know the procedure"]', '["Do not sign blank papers"]');
                INSERT INTO case_laws (id, title, citation, court, year, summary_en, landmark) VALUES
                    (1, 'Maneka Gandhi v. Union of India', 'AIR 1978 SC 597', 'Supreme Court', 1978,
                     'Procedure under Article 21 must be fair, just and reasonable.', 1);
                INSERT INTO article_case_laws (article_id, case_law_id) VALUES (1, 1);
                INSERT INTO amendments (id, number, year, title_en, description, act_name) VALUES
                    (1, 86, 2002, 'Eighty-sixth Amendment', 'Inserted Article 21A on free and compulsory education.',
                     'The Constitution (Eighty-sixth Amendment) Act, 2002');
                INSERT INTO article_amendments (article_id, amendment_id) VALUES (1, 1);
                "#,
            )
            .unwrap();
        db
    }

    #[test]
    fn test_detail_includes_relations() {
        let db = fixture();
        let article = detail(db.conn(), 1, Lang::En).unwrap().unwrap();

        assert_eq!(article.number, "21");
        assert_eq!(article.part.number, 3);
        assert_eq!(article.case_laws.len(), 1);
        assert!(article.case_laws[0].landmark);
        assert_eq!(article.amendments.len(), 1);
        assert_eq!(article.amendments[0].number, 86);

        let explanation = article.simplified_explanation.unwrap();
        assert_eq!(explanation.examples.len(), 2);
        assert_eq!(explanation.dos, ["Know the procedure"]);
    }

    #[test]
    fn test_detail_missing_article_is_none() {
        let db = fixture();
        assert!(detail(db.conn(), 99, Lang::En).unwrap().is_none());
    }

    #[test]
    fn test_detail_localizes_content() {
        let db = fixture();
        let article = detail(db.conn(), 1, Lang::Hi).unwrap().unwrap();
        assert!(article.content.starts_with("किसी व्यक्ति"));
        assert_eq!(article.part.title, "मौलिक अधिकार");
    }

    #[test]
    fn test_explanation_falls_back_to_english_row() {
        let db = fixture();
        // only an English explanation is seeded
        let article = detail(db.conn(), 1, Lang::Ta).unwrap().unwrap();
        let explanation = article.simplified_explanation.unwrap();
        assert_eq!(explanation.language, Lang::En);
        assert_eq!(explanation.title, "Your right to live with dignity");
    }

    #[test]
    fn test_string_list_tolerates_bad_json() {
        assert!(string_list(None).is_empty());
        assert!(string_list(Some("not json".into())).is_empty());
        assert_eq!(string_list(Some("[\"a\"]".into())), ["a"]);
    }
}
