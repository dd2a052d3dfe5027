//! Text-to-speech endpoint: validate, forward, stream the WAV bytes back.

use axum::extract::State;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue};
use axum::Json;

use crate::error::ApiError;
use crate::speech::{validate, TtsRequest};
use crate::AppState;

pub async fn synthesize(
    State(state): State<AppState>,
    Json(request): Json<TtsRequest>,
) -> Result<(HeaderMap, Vec<u8>), ApiError> {
    let params = validate(request)?;

    let audio = state
        .speech
        .synthesize(&params.text, &params.voice, params.speed)
        .await
        .map_err(|e| ApiError::upstream(e.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("audio/wav"));
    headers.insert(CONTENT_LENGTH, audio.len().into());
    Ok((headers, audio))
}
