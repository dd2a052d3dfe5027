use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use samvidhan::assistant::provider::{OpenAiCompletions, OpenAiSpeech};
use samvidhan::config::ServerConfig;
use samvidhan::db::Database;
use samvidhan::{build_router, seed, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("samvidhan=info")),
        )
        .init();

    let config = ServerConfig::parse();

    let db = Database::open(&config.db)?;
    db.initialize()?;
    info!(path = %config.db.display(), "database ready");

    if config.seed_on_start {
        if seed::is_empty(db.conn())? {
            let counts = seed::run(db.conn())?;
            info!(
                parts = counts.parts,
                articles = counts.articles,
                amendments = counts.amendments,
                mcqs = counts.mcqs,
                "seeded content tables"
            );
        } else {
            info!("content tables already populated, skipping seed");
        }
    }

    let completions = OpenAiCompletions::new(
        config.provider_url.clone(),
        config.api_key.clone(),
        config.completion_model.clone(),
    );
    let speech = OpenAiSpeech::new(
        config.provider_url.clone(),
        config.api_key.clone(),
        config.speech_model.clone(),
    );
    let state = AppState::new(db, Arc::new(completions), Arc::new(speech));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "listening");
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
