//! Assistant question flow: article mention extraction and the per-user
//! query log. The HTTP handler drives the completion provider and falls
//! back to canned text; this module supplies everything around that call.

pub mod provider;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use uuid::Uuid;

use crate::localize::{resolve, Lang};
use crate::models::{AiQueryView, Category, PartHeader};

pub const HISTORY_LIMIT: i64 = 20;

/// Matches an article citation in English, Hindi, or Tamil. The keyword is
/// required, so bare numbers ("section 21", "21") never match. The suffix
/// letter is only taken when it sits against the digits or joins them with
/// a hyphen; a space-separated letter is an ordinary word ("Article 14 a
/// law" cites 14, not 14A). The trailing word boundary keeps "Article 21
/// guarantees" from capturing the g.
static MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:article|अनुच्छेद|உறுப்புரை)\s*(\d{1,3})(?:\s*-\s*)?([A-Za-z])?\b")
        .unwrap()
});

/// Distinct normalised article numbers cited in `text`, in first-seen
/// order. "14-a" and "14A" both normalise to "14A".
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for caps in MENTION.captures_iter(text) {
        let digits = &caps[1];
        let suffix = caps
            .get(2)
            .map(|m| m.as_str().to_ascii_uppercase())
            .unwrap_or_default();
        let number = format!("{digits}{suffix}");
        if !seen.contains(&number) {
            seen.push(number);
        }
    }
    seen
}

/// Article context attached to an assistant answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionedArticle {
    pub id: i64,
    pub number: String,
    pub title: String,
    pub category: Category,
    pub part: PartHeader,
}

/// Look up cited numbers and keep the ones that exist, preserving citation
/// order.
pub fn mentioned_articles(
    conn: &Connection,
    lang: Lang,
    numbers: &[String],
) -> rusqlite::Result<Vec<MentionedArticle>> {
    let mut stmt = conn.prepare(
        "SELECT a.id, a.number, a.title_en, a.title_hi, a.title_ta, a.category,
                p.number, p.title_en, p.title_hi, p.title_ta
         FROM articles a JOIN parts p ON p.id = a.part_id
         WHERE a.number = ?1",
    )?;
    let mut found = Vec::new();
    for number in numbers {
        let article = stmt
            .query_row([number], |row| {
                let title_en: String = row.get(2)?;
                let title_hi: Option<String> = row.get(3)?;
                let title_ta: Option<String> = row.get(4)?;
                let category: String = row.get(5)?;
                let part_title_en: String = row.get(7)?;
                let part_title_hi: Option<String> = row.get(8)?;
                let part_title_ta: Option<String> = row.get(9)?;
                Ok(MentionedArticle {
                    id: row.get(0)?,
                    number: row.get(1)?,
                    title: resolve(lang, &title_en, title_hi.as_deref(), title_ta.as_deref()),
                    category: category.parse().unwrap_or(Category::Other),
                    part: PartHeader {
                        number: row.get(6)?,
                        title: resolve(
                            lang,
                            &part_title_en,
                            part_title_hi.as_deref(),
                            part_title_ta.as_deref(),
                        ),
                    },
                })
            })
            .optional()?;
        if let Some(article) = article {
            found.push(article);
        }
    }
    Ok(found)
}

/// Append one Q&A row. Failures are the caller's to log and swallow.
pub fn record_query(
    conn: &Connection,
    user_id: &str,
    question: &str,
    answer: &str,
    context: Option<&str>,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO ai_queries (id, user_id, question, answer, context, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        (
            Uuid::new_v4().to_string(),
            user_id,
            question,
            answer,
            context,
            Utc::now().to_rfc3339(),
        ),
    )?;
    Ok(())
}

/// Most recent questions for a user, newest first.
pub fn history(conn: &Connection, user_id: &str) -> rusqlite::Result<Vec<AiQueryView>> {
    let mut stmt = conn.prepare(
        "SELECT id, question, answer, context, created_at
         FROM ai_queries WHERE user_id = ?1
         ORDER BY created_at DESC LIMIT ?2",
    )?;
    let rows = stmt
        .query_map((user_id, HISTORY_LIMIT), |row| {
            Ok(AiQueryView {
                id: row.get(0)?,
                question: row.get(1)?,
                answer: row.get(2)?,
                context: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
