//! Liveness, settings, and the seed endpoint.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::http::{ok, Envelope};
use crate::seed::{self, SeedCounts};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn health() -> Json<Envelope<Health>> {
    ok(Health { status: "ok" })
}

/// The seeded key-value settings, minus internal bookkeeping keys.
pub async fn settings(
    State(state): State<AppState>,
) -> Result<Json<Envelope<BTreeMap<String, String>>>, ApiError> {
    let map = state
        .db
        .run(|conn| {
            let mut stmt = conn.prepare(
                "SELECT key, value FROM app_settings WHERE key != 'schema_version' ORDER BY key",
            )?;
            let rows = stmt
                .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
                .collect::<Result<BTreeMap<_, _>, _>>()?;
            Ok(rows)
        })
        .await?;
    Ok(ok(map))
}

/// Populate the content tables from the embedded catalogue. Fails with 500
/// when the tables already hold content; the transaction leaves the store
/// unchanged in that case.
pub async fn seed(
    State(state): State<AppState>,
) -> Result<Json<Envelope<SeedCounts>>, ApiError> {
    let outcome = state.db.run(|conn| Ok(seed::run(conn))).await?;
    let counts = outcome.map_err(|e| ApiError::internal(e.to_string()))?;
    info!(articles = counts.articles, mcqs = counts.mcqs, "seeded content tables");
    Ok(ok(counts))
}
