//! Samvidhan: a multilingual constitutional-literacy API for India.
//!
//! One SQLite content store, a trilingual localization layer, and a set of
//! `/api` endpoints serving the constitution tree, article detail,
//! amendments, rights groupings, search, quizzes, an AI assistant, speech
//! synthesis, and templated legal-guidance bundles.

pub mod assistant;
pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod guides;
pub mod http;
pub mod localize;
pub mod models;
pub mod prompts;
pub mod seed;
pub mod speech;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};

use crate::assistant::provider::{CompletionProvider, SpeechProvider};
use crate::db::{Database, DbExecutor};

/// Everything a handler needs: the database executor plus the two external
/// providers behind their traits.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbExecutor>,
    pub completions: Arc<dyn CompletionProvider>,
    pub speech: Arc<dyn SpeechProvider>,
}

impl AppState {
    pub fn new(
        db: Database,
        completions: Arc<dyn CompletionProvider>,
        speech: Arc<dyn SpeechProvider>,
    ) -> Self {
        Self {
            db: Arc::new(DbExecutor::new(db)),
            completions,
            speech,
        }
    }
}

/// Assemble the `/api` router. Sector guide routes are registered from the
/// sector catalogue so the route list and the data stay in step.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(http::admin::health))
        .route("/api/constitution", get(http::content::constitution))
        .route("/api/articles/:id", get(http::content::article_detail))
        .route("/api/amendments", get(http::content::amendments))
        .route("/api/rights", get(http::content::rights))
        .route("/api/search", get(http::content::search))
        .route("/api/quiz", get(http::quiz::fetch).post(http::quiz::submit))
        .route("/api/quiz/history", get(http::quiz::history))
        .route(
            "/api/ai-assistant",
            get(http::assistant::history).post(http::assistant::ask),
        )
        .route("/api/tts", post(http::speech::synthesize))
        .route("/api/rti", post(http::guides::rti))
        .route("/api/settings", get(http::admin::settings))
        .route("/api/seed", post(http::admin::seed));

    for sector in guides::sectors::all() {
        router = router.route(
            &format!("/api/{}", sector.key),
            post(move |form: Json<guides::sectors::SectorForm>| {
                http::guides::sector(sector, form)
            }),
        );
    }

    router.with_state(state)
}
