//! The AI assistant endpoint and its history view.
//!
//! Provider failure never surfaces to the caller: the handler degrades to
//! a canned per-language answer with `fallback: true` and an empty mention
//! list, still HTTP 200.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::assistant::{self, MentionedArticle};
use crate::error::ApiError;
use crate::http::{ok, Envelope};
use crate::localize::Lang;
use crate::models::AiQueryView;
use crate::prompts;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    pub user_id: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub answer: String,
    pub fallback: bool,
    pub mentioned_articles: Vec<MentionedArticle>,
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<Envelope<AskResponse>>, ApiError> {
    let question = request.question.trim().to_string();
    if question.is_empty() {
        return Err(ApiError::missing_field("question"));
    }
    let lang = Lang::parse(request.language.as_deref());

    let system = prompts::system_prompt(lang);
    let reply = match state.completions.complete(&system, &question).await {
        Ok(text) if !text.trim().is_empty() => Some(text),
        Ok(_) => {
            error!("completion provider returned an empty reply");
            None
        }
        Err(e) => {
            error!(error = %e, "completion provider failed");
            None
        }
    };

    let response = match reply {
        Some(answer) => {
            let numbers = assistant::extract_mentions(&answer);
            let mentioned = if numbers.is_empty() {
                Vec::new()
            } else {
                state
                    .db
                    .run(move |conn| assistant::mentioned_articles(conn, lang, &numbers))
                    .await?
            };
            AskResponse {
                answer,
                fallback: false,
                mentioned_articles: mentioned,
            }
        }
        None => AskResponse {
            answer: prompts::fallback_answer(lang).to_string(),
            fallback: true,
            mentioned_articles: Vec::new(),
        },
    };

    // Best-effort query log: failure is the operator's problem, not the
    // caller's.
    if let Some(user_id) = request.user_id {
        let question = question.clone();
        let answer = response.answer.clone();
        let context = {
            let numbers: Vec<&str> = response
                .mentioned_articles
                .iter()
                .map(|a| a.number.as_str())
                .collect();
            if numbers.is_empty() {
                None
            } else {
                Some(numbers.join(","))
            }
        };
        let logged_user = user_id.clone();
        let write = state
            .db
            .run(move |conn| {
                assistant::record_query(conn, &user_id, &question, &answer, context.as_deref())
            })
            .await;
        if let Err(e) = write {
            warn!(user_id = %logged_user, error = %e, "failed to record assistant query");
        }
    }

    Ok(ok(response))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub user_id: Option<String>,
}

pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Envelope<Vec<AiQueryView>>>, ApiError> {
    let user_id = query
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::missing_field("userId"))?;
    let rows = state
        .db
        .run(move |conn| assistant::history(conn, &user_id))
        .await?;
    Ok(ok(rows))
}
