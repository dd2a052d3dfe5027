//! Amendment listing, decade timeline, and aggregate stats

use std::collections::BTreeMap;

use rusqlite::{params_from_iter, types::Value, Connection};
use serde::Serialize;

use crate::localize::{resolve, Lang};
use crate::models::AmendmentView;

/// Optional exact-match filters. Each field is applied only when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmendmentFilter {
    pub year: Option<i64>,
    pub number: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeBucket {
    pub decade: i64,
    pub count: usize,
    /// Amendment numbers that fall in this decade, ascending.
    pub amendments: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentStats {
    pub total: usize,
    /// Number of distinct decades with at least one amendment.
    pub by_decade: usize,
    pub earliest_year: Option<i64>,
    pub latest_year: Option<i64>,
    /// Amendments from the latest decade and the one before it.
    pub last_two_decades: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentsView {
    pub amendments: Vec<AmendmentView>,
    pub timeline: Vec<DecadeBucket>,
    pub stats: AmendmentStats,
}

/// List amendments matching the filter, ordered by number, with the decade
/// timeline and stats computed over the filtered set. An empty match is a
/// valid result with zeroed stats, not an error.
pub fn list(
    conn: &Connection,
    lang: Lang,
    filter: AmendmentFilter,
) -> rusqlite::Result<AmendmentsView> {
    let mut sql = String::from(
        "SELECT id, number, year, title_en, title_hi, title_ta, description, act_name FROM amendments",
    );
    let mut where_parts: Vec<&str> = Vec::new();
    let mut params: Vec<Value> = Vec::new();
    if let Some(year) = filter.year {
        where_parts.push("year = ?");
        params.push(Value::Integer(year));
    }
    if let Some(number) = filter.number {
        where_parts.push("number = ?");
        params.push(Value::Integer(number));
    }
    if !where_parts.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&where_parts.join(" AND "));
    }
    sql.push_str(" ORDER BY number");

    let mut stmt = conn.prepare(&sql)?;
    let mut years = Vec::new();
    let mut numbers = Vec::new();
    let amendments = stmt
        .query_map(params_from_iter(params.iter()), |row| {
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

    for amendment in &amendments {
        years.push(amendment.year);
        numbers.push((amendment.year, amendment.number));
    }

    let mut decades: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
    for (year, number) in numbers {
        decades.entry(decade_of(year)).or_default().push(number);
    }
    let timeline: Vec<DecadeBucket> = decades
        .into_iter()
        .map(|(decade, amendments)| DecadeBucket {
            decade,
            count: amendments.len(),
            amendments,
        })
        .collect();

    let earliest_year = years.iter().copied().min();
    let latest_year = years.iter().copied().max();
    let last_two_decades = match latest_year {
        Some(latest) => {
            let cutoff = decade_of(latest) - 10;
            years.iter().filter(|&&y| y >= cutoff).count()
        }
        None => 0,
    };

    let stats = AmendmentStats {
        total: amendments.len(),
        by_decade: timeline.len(),
        earliest_year,
        latest_year,
        last_two_decades,
    };

    Ok(AmendmentsView {
        amendments,
        timeline,
        stats,
    })
}

fn decade_of(year: i64) -> i64 {
    (year / 10) * 10
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
                INSERT INTO amendments (id, number, year, title_en, title_hi, description, act_name) VALUES
                    (1, 1, 1951, 'First Amendment', 'पहला संशोधन', 'Added Ninth Schedule.', 'The Constitution (First Amendment) Act, 1951'),
                    (2, 42, 1976, 'Forty-second Amendment', NULL, 'Added socialist, secular to the Preamble.', 'The Constitution (42nd Amendment) Act, 1976'),
                    (3, 44, 1978, 'Forty-fourth Amendment', NULL, 'Removed right to property from fundamental rights.', 'The Constitution (44th Amendment) Act, 1978'),
                    (4, 101, 2016, 'One Hundred and First Amendment', NULL, 'Introduced the Goods and Services Tax.', 'The Constitution (101st Amendment) Act, 2016'),
                    (5, 103, 2019, 'One Hundred and Third Amendment', NULL, 'Added reservation for economically weaker sections.', 'The Constitution (103rd Amendment) Act, 2019');
                "#,
            )
            .unwrap();
        db
    }

    #[test]
    fn test_list_orders_by_number_and_buckets_by_decade() {
        let db = fixture();
        let view = list(db.conn(), Lang::En, AmendmentFilter::default()).unwrap();

        let numbers: Vec<i64> = view.amendments.iter().map(|a| a.number).collect();
        assert_eq!(numbers, [1, 42, 44, 101, 103]);

        let decades: Vec<i64> = view.timeline.iter().map(|b| b.decade).collect();
        assert_eq!(decades, [1950, 1970, 2010]);
        assert_eq!(view.timeline[1].amendments, [42, 44]);
    }

    #[test]
    fn test_stats_counts() {
        let db = fixture();
        let view = list(db.conn(), Lang::En, AmendmentFilter::default()).unwrap();

        assert_eq!(view.stats.total, 5);
        assert_eq!(view.stats.by_decade, 3);
        assert_eq!(view.stats.earliest_year, Some(1951));
        assert_eq!(view.stats.latest_year, Some(2019));
        // latest decade is 2010, so the window starts at 2000
        assert_eq!(view.stats.last_two_decades, 2);
    }

    #[test]
    fn test_year_filter() {
        let db = fixture();
        let filter = AmendmentFilter {
            year: Some(1976),
            number: None,
        };
        let view = list(db.conn(), Lang::En, filter).unwrap();
        assert_eq!(view.stats.total, 1);
        assert_eq!(view.amendments[0].number, 42);
    }

    #[test]
    fn test_empty_match_gives_zeroed_stats() {
        let db = fixture();
        let filter = AmendmentFilter {
            year: Some(1900),
            number: None,
        };
        let view = list(db.conn(), Lang::En, filter).unwrap();
        assert!(view.amendments.is_empty());
        assert!(view.timeline.is_empty());
        assert_eq!(view.stats.total, 0);
        assert_eq!(view.stats.earliest_year, None);
        assert_eq!(view.stats.last_two_decades, 0);
    }

    #[test]
    fn test_localized_title_falls_back() {
        let db = fixture();
        let filter = AmendmentFilter {
            number: Some(1),
            year: None,
        };
        let view = list(db.conn(), Lang::Hi, filter).unwrap();
        assert_eq!(view.amendments[0].title, "पहला संशोधन");

        let filter = AmendmentFilter {
            number: Some(42),
            year: None,
        };
        let view = list(db.conn(), Lang::Hi, filter).unwrap();
        assert_eq!(view.amendments[0].title, "Forty-second Amendment");
    }
}
