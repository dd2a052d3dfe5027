//! Rights overview: Part III groupings, directive principles, duties, and
//! emergency guidance for police encounters.

use rusqlite::{params_from_iter, types::Value, Connection};
use serde::Serialize;

use crate::content::article_summary_row;
use crate::localize::{resolve, Lang};
use crate::models::{ArticleSummary, Category, EmergencyGuideView};

/// Guide categories surfaced on the rights page.
const GUIDE_CATEGORIES: [&str; 3] = ["arrest", "search", "detention"];

#[derive(Debug, Clone, Serialize)]
pub struct RightsGroup {
    pub title: &'static str,
    pub articles: Vec<ArticleSummary>,
}

impl RightsGroup {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            articles: Vec::new(),
        }
    }
}

/// The six classic groupings of Part III. Field names are the group keys
/// in the payload, so they stay snake_case.
#[derive(Debug, Clone, Serialize)]
pub struct FundamentalRightsGroups {
    pub right_to_equality: RightsGroup,
    pub right_to_freedom: RightsGroup,
    pub right_against_exploitation: RightsGroup,
    pub right_to_freedom_of_religion: RightsGroup,
    pub cultural_educational_rights: RightsGroup,
    pub constitutional_remedies: RightsGroup,
}

impl FundamentalRightsGroups {
    fn empty() -> Self {
        Self {
            right_to_equality: RightsGroup::new("Right to Equality"),
            right_to_freedom: RightsGroup::new("Right to Freedom"),
            right_against_exploitation: RightsGroup::new("Right against Exploitation"),
            right_to_freedom_of_religion: RightsGroup::new("Right to Freedom of Religion"),
            cultural_educational_rights: RightsGroup::new("Cultural and Educational Rights"),
            constitutional_remedies: RightsGroup::new("Right to Constitutional Remedies"),
        }
    }

    /// Route an article by its `number` string. Bounds are compared as
    /// strings, which for the catalogued two-digit Part III numbers agrees
    /// with numeric order and places letter suffixes after their base
    /// ("21A" sits between "21" and "22"). Single-digit numbers sort by
    /// first character, so a "2" would land in right_to_freedom; Part III
    /// starts at 12, so no real row hits that case. Articles outside every
    /// bound (e.g. "31B") are left ungrouped.
    fn slot(&mut self, number: &str) -> Option<&mut RightsGroup> {
        if number >= "14" && number <= "18" {
            Some(&mut self.right_to_equality)
        } else if number >= "19" && number <= "22" {
            Some(&mut self.right_to_freedom)
        } else if number >= "23" && number <= "24" {
            Some(&mut self.right_against_exploitation)
        } else if number >= "25" && number <= "28" {
            Some(&mut self.right_to_freedom_of_religion)
        } else if number >= "29" && number <= "30" {
            Some(&mut self.cultural_educational_rights)
        } else if number == "32" {
            Some(&mut self.constitutional_remedies)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RightsStats {
    pub total: usize,
    pub fundamental_rights: usize,
    pub directive_principles: usize,
    pub fundamental_duties: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RightsView {
    pub fundamental_rights: FundamentalRightsGroups,
    pub directive_principles: Vec<ArticleSummary>,
    pub fundamental_duties: Vec<ArticleSummary>,
    pub emergency_guides: Vec<EmergencyGuideView>,
    pub stats: RightsStats,
}

/// Build the rights overview. With no filter the query spans the three
/// rights-bearing categories; with one it is restricted to that category
/// and the other sections come back empty.
pub fn overview(
    conn: &Connection,
    lang: Lang,
    category: Option<Category>,
) -> rusqlite::Result<RightsView> {
    let mut sql = String::from(
        "SELECT id, number, title_en, title_hi, title_ta, category, importance FROM articles WHERE ",
    );
    let mut params: Vec<Value> = Vec::new();
    match category {
        Some(category) => {
            sql.push_str("category = ?");
            params.push(Value::Text(category.to_string()));
        }
        None => {
            sql.push_str("category IN ('fundamental_right', 'directive_principle', 'fundamental_duty')");
        }
    }
    sql.push_str(" ORDER BY number");

    let mut stmt = conn.prepare(&sql)?;
    let articles = stmt
        .query_map(params_from_iter(params.iter()), |row| {
            article_summary_row(row, lang)
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut fundamental_rights = FundamentalRightsGroups::empty();
    let mut directive_principles = Vec::new();
    let mut fundamental_duties = Vec::new();
    let mut fundamental_count = 0usize;
    let total = articles.len();

    for article in articles {
        match article.category {
            Category::FundamentalRight => {
                fundamental_count += 1;
                if let Some(group) = fundamental_rights.slot(&article.number) {
                    group.articles.push(article);
                }
            }
            Category::DirectivePrinciple => directive_principles.push(article),
            Category::FundamentalDuty => fundamental_duties.push(article),
            Category::Other => {}
        }
    }

    let stats = RightsStats {
        total,
        fundamental_rights: fundamental_count,
        directive_principles: directive_principles.len(),
        fundamental_duties: fundamental_duties.len(),
    };

    Ok(RightsView {
        fundamental_rights,
        directive_principles,
        fundamental_duties,
        emergency_guides: emergency_guides(conn, lang)?,
        stats,
    })
}

fn emergency_guides(conn: &Connection, lang: Lang) -> rusqlite::Result<Vec<EmergencyGuideView>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, category, content_en, content_hi, content_ta, helpline, legal_aid
         FROM emergency_guides WHERE category IN (?1, ?2, ?3) ORDER BY id",
    )?;
    let rows = stmt
        .query_map(GUIDE_CATEGORIES, |row| {
            let content_en: String = row.get(3)?;
            let content_hi: Option<String> = row.get(4)?;
            let content_ta: Option<String> = row.get(5)?;
            Ok(EmergencyGuideView {
                id: row.get(0)?,
                title: row.get(1)?,
                category: row.get(2)?,
                content: resolve(lang, &content_en, content_hi.as_deref(), content_ta.as_deref()),
                helpline: row.get(6)?,
                legal_aid: row.get(7)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
