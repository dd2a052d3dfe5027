//! Shared test harness: a seeded router over a scratch database plus
//! scripted stand-ins for the completion and speech providers.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use samvidhan::assistant::provider::{
    CompletionProvider, ProviderError, SpeechProvider,
};
use samvidhan::db::Database;
use samvidhan::{build_router, seed, AppState};

/// Completion provider that replays a fixed reply, or fails when given
/// none.
pub struct ScriptedCompletions {
    pub reply: Option<String>,
}

#[async_trait]
impl CompletionProvider for ScriptedCompletions {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::Api {
                status: 503,
                body: "scripted outage".into(),
            }),
        }
    }
}

/// Speech provider that replays fixed bytes, or fails when given none.
pub struct ScriptedSpeech {
    pub audio: Option<Vec<u8>>,
}

#[async_trait]
impl SpeechProvider for ScriptedSpeech {
    async fn synthesize(
        &self,
        _text: &str,
        _voice: &str,
        _speed: f64,
    ) -> Result<Vec<u8>, ProviderError> {
        match &self.audio {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(ProviderError::Api {
                status: 500,
                body: "synthesis failed".into(),
            }),
        }
    }
}

#[allow(dead_code)]
pub struct TestContext {
    pub temp_dir: TempDir,
    pub router: Router,
}

#[allow(dead_code)]
impl TestContext {
    /// Seeded database, well-behaved providers.
    pub fn new() -> Self {
        Self::build(
            true,
            ScriptedCompletions {
                reply: Some("Article 21 protects life and personal liberty.".into()),
            },
            ScriptedSpeech {
                audio: Some(b"RIFFfake-wav-bytes".to_vec()),
            },
        )
    }

    /// Seeded database with a scripted completion reply.
    pub fn with_reply(reply: Option<&str>) -> Self {
        Self::build(
            true,
            ScriptedCompletions {
                reply: reply.map(str::to_string),
            },
            ScriptedSpeech {
                audio: Some(b"RIFFfake-wav-bytes".to_vec()),
            },
        )
    }

    /// Seeded database with a failing speech provider.
    pub fn with_broken_speech() -> Self {
        Self::build(
            true,
            ScriptedCompletions { reply: None },
            ScriptedSpeech { audio: None },
        )
    }

    /// Empty database: schema only, no content rows.
    pub fn unseeded() -> Self {
        Self::build(
            false,
            ScriptedCompletions { reply: None },
            ScriptedSpeech { audio: None },
        )
    }

    fn build(seeded: bool, completions: ScriptedCompletions, speech: ScriptedSpeech) -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let db_path = temp_dir.path().join("test.sqlite3");
        let db = Database::open(&db_path).expect("open db");
        db.initialize().expect("initialize schema");
        if seeded {
            seed::run(db.conn()).expect("seed content");
        }
        let state = AppState::new(db, Arc::new(completions), Arc::new(speech));
        Self {
            temp_dir,
            router: build_router(state),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        split_json(response).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = self.post_raw(uri, body).await;
        split_json(response).await
    }

    pub async fn post_raw(&self, uri: &str, body: Value) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("response")
    }
}

async fn split_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
