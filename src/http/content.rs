//! Handlers for the read-only content endpoints: constitution tree,
//! article detail, amendments, rights, and search.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::content::amendments::{self, AmendmentFilter, AmendmentsView};
use crate::content::articles::{self, ArticleDetail};
use crate::content::constitution::{self, ConstitutionTree};
use crate::content::rights::{self, RightsView};
use crate::content::search::{self, SearchResults, SearchScope};
use crate::error::ApiError;
use crate::http::{ok, Envelope};
use crate::localize::Lang;
use crate::models::Category;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ConstitutionQuery {
    pub lang: Option<String>,
    pub part: Option<i64>,
}

pub async fn constitution(
    State(state): State<AppState>,
    Query(query): Query<ConstitutionQuery>,
) -> Result<Json<Envelope<ConstitutionTree>>, ApiError> {
    let lang = Lang::parse(query.lang.as_deref());
    let part = query.part;
    let tree = state
        .db
        .run(move |conn| constitution::tree(conn, lang, part))
        .await?
        .ok_or_else(|| ApiError::not_found("Part not found"))?;
    Ok(ok(tree))
}

#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

pub async fn article_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<Envelope<ArticleDetail>>, ApiError> {
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::bad_request("article id must be an integer"))?;
    let lang = Lang::parse(query.lang.as_deref());
    let article = state
        .db
        .run(move |conn| articles::detail(conn, id, lang))
        .await?
        .ok_or_else(|| ApiError::not_found("Article not found"))?;
    Ok(ok(article))
}

#[derive(Debug, Deserialize)]
pub struct AmendmentsQuery {
    pub lang: Option<String>,
    pub year: Option<i64>,
    pub number: Option<i64>,
}

pub async fn amendments(
    State(state): State<AppState>,
    Query(query): Query<AmendmentsQuery>,
) -> Result<Json<Envelope<AmendmentsView>>, ApiError> {
    let lang = Lang::parse(query.lang.as_deref());
    let filter = AmendmentFilter {
        year: query.year,
        number: query.number,
    };
    let view = state
        .db
        .run(move |conn| amendments::list(conn, lang, filter))
        .await?;
    Ok(ok(view))
}

#[derive(Debug, Deserialize)]
pub struct RightsQuery {
    pub lang: Option<String>,
    pub category: Option<String>,
}

pub async fn rights(
    State(state): State<AppState>,
    Query(query): Query<RightsQuery>,
) -> Result<Json<Envelope<RightsView>>, ApiError> {
    let lang = Lang::parse(query.lang.as_deref());
    let category = match &query.category {
        Some(raw) => Some(raw.parse::<Category>().map_err(|()| {
            ApiError::bad_request(
                "category must be one of: fundamental_right, directive_principle, fundamental_duty, other",
            )
        })?),
        None => None,
    };
    let view = state
        .db
        .run(move |conn| rights::overview(conn, lang, category))
        .await?;
    Ok(ok(view))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub lang: Option<String>,
    #[serde(rename = "type")]
    pub scope: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Envelope<SearchResults>>, ApiError> {
    let term = query.q.as_deref().unwrap_or("").trim().to_string();
    if term.is_empty() {
        return Err(ApiError::missing_field("q"));
    }
    let scope = match &query.scope {
        Some(raw) => raw.parse::<SearchScope>().map_err(|()| {
            ApiError::bad_request("type must be one of: all, articles, amendments, guides")
        })?,
        None => SearchScope::All,
    };
    let lang = Lang::parse(query.lang.as_deref());
    let results = state
        .db
        .run(move |conn| search::run(conn, lang, &term, scope))
        .await?;
    Ok(ok(results))
}
