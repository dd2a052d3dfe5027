//! Read queries behind the content endpoints
//!
//! Every function here is synchronous, takes a plain `&Connection`, and
//! returns already-localized payload types. Handlers move these calls onto
//! the executor thread; tests call them directly against an in-memory
//! database.

pub mod amendments;
pub mod articles;
pub mod constitution;
pub mod quiz;
pub mod rights;
pub mod search;

use crate::localize::{resolve, Lang};
use crate::models::{ArticleSummary, Category};

/// Escape LIKE wildcards in user-supplied search terms. Queries using the
/// result must carry `ESCAPE '!'`.
pub(crate) fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        match c {
            '!' | '%' | '_' => {
                out.push('!');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Map one row of the canonical summary column list
/// (`id, number, title_en, title_hi, title_ta, category, importance`).
pub(crate) fn article_summary_row(
    row: &rusqlite::Row<'_>,
    lang: Lang,
) -> rusqlite::Result<ArticleSummary> {
    let title_en: String = row.get(2)?;
    let title_hi: Option<String> = row.get(3)?;
    let title_ta: Option<String> = row.get(4)?;
    let category: String = row.get(5)?;
    Ok(ArticleSummary {
        id: row.get(0)?,
        number: row.get(1)?,
        title: resolve(lang, &title_en, title_hi.as_deref(), title_ta.as_deref()),
        category: category.parse().unwrap_or(Category::Other),
        importance: row.get(6)?,
    })
}
