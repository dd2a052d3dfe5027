//! Quiz endpoints: fetch a question set, grade a submission, and read the
//! per-user attempt history.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use crate::content::quiz::{self, QuizFilter, QuizOutcome, QuizSet};
use crate::error::ApiError;
use crate::http::{ok, Envelope};
use crate::localize::Lang;
use crate::models::{Answer, Difficulty, QuizAttemptView};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    pub lang: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub limit: Option<i64>,
}

pub async fn fetch(
    State(state): State<AppState>,
    Query(query): Query<QuizQuery>,
) -> Result<Json<Envelope<QuizSet>>, ApiError> {
    let lang = Lang::parse(query.lang.as_deref());
    let difficulty = match &query.difficulty {
        Some(raw) => Some(raw.parse::<Difficulty>().map_err(|()| {
            ApiError::bad_request("difficulty must be one of: easy, medium, hard")
        })?),
        None => None,
    };
    let filter = QuizFilter {
        category: query.category,
        difficulty,
        limit: query.limit,
    };
    let set = state
        .db
        .run(move |conn| quiz::fetch(conn, lang, &filter))
        .await?;
    Ok(ok(set))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: i64,
    #[serde(default)]
    pub selected_answer: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub time_spent: Option<i64>,
}

pub async fn submit(
    State(state): State<AppState>,
    Json(submission): Json<QuizSubmission>,
) -> Result<Json<Envelope<QuizOutcome>>, ApiError> {
    if submission.answers.is_empty() {
        return Err(ApiError::bad_request("answers must not be empty"));
    }
    let mut answers = Vec::with_capacity(submission.answers.len());
    for answer in &submission.answers {
        let selected = answer.selected_answer.parse::<Answer>().map_err(|()| {
            ApiError::bad_request("selectedAnswer must be one of: A, B, C, D")
        })?;
        answers.push((answer.question_id, selected));
    }

    let outcome = state
        .db
        .run(move |conn| quiz::grade(conn, &answers))
        .await?;

    // Best-effort attempt log: the graded outcome goes back regardless.
    if let Some(user_id) = submission.user_id {
        let record = outcome.clone();
        let category = submission.category;
        let time_spent = submission.time_spent;
        let logged_user = user_id.clone();
        let write = state
            .db
            .run(move |conn| {
                quiz::record_attempt(conn, &user_id, &record, time_spent, category.as_deref())
            })
            .await;
        if let Err(e) = write {
            warn!(user_id = %logged_user, error = %e, "failed to record quiz attempt");
        }
    }

    Ok(ok(outcome))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub user_id: Option<String>,
}

pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Envelope<Vec<QuizAttemptView>>>, ApiError> {
    let user_id = query
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::missing_field("userId"))?;
    let attempts = state
        .db
        .run(move |conn| quiz::history(conn, &user_id))
        .await?;
    Ok(ok(attempts))
}
