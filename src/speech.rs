//! Request validation in front of the speech synthesis provider.

use serde::Deserialize;

use crate::error::ApiError;

pub const MAX_TEXT_CHARS: usize = 1024;
pub const MIN_SPEED: f64 = 0.5;
pub const MAX_SPEED: f64 = 2.0;
pub const DEFAULT_VOICE: &str = "alloy";
pub const DEFAULT_SPEED: f64 = 1.0;

/// Voices the provider accepts.
pub const VOICES: [&str; 6] = ["alloy", "echo", "fable", "onyx", "nova", "shimmer"];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsRequest {
    #[serde(default)]
    pub text: String,
    pub voice: Option<String>,
    pub speed: Option<f64>,
}

/// A request that passed validation and can go to the provider as-is.
#[derive(Debug, Clone)]
pub struct TtsParams {
    pub text: String,
    pub voice: String,
    pub speed: f64,
}

/// Check bounds and defaults. Text length is counted in characters, not
/// bytes, so Devanagari and Tamil input gets the same budget as English.
/// Speed bounds are inclusive on both ends.
pub fn validate(request: TtsRequest) -> Result<TtsParams, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::missing_field("text"));
    }
    if request.text.chars().count() > MAX_TEXT_CHARS {
        return Err(ApiError::bad_request(format!(
            "text must be at most {MAX_TEXT_CHARS} characters"
        )));
    }

    let speed = request.speed.unwrap_or(DEFAULT_SPEED);
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(ApiError::bad_request(format!(
            "speed must be between {MIN_SPEED} and {MAX_SPEED}"
        )));
    }

    let voice = request.voice.unwrap_or_else(|| DEFAULT_VOICE.to_string());
    if !VOICES.contains(&voice.as_str()) {
        return Err(ApiError::bad_request(format!(
            "voice must be one of: {}",
            VOICES.join(", ")
        )));
    }

    Ok(TtsParams {
        text: request.text,
        voice,
        speed,
    })
}
