//! Server configuration
//!
//! Every knob is a CLI flag with an environment fallback, so the binary
//! runs bare in development and reads its settings from the environment in
//! deployment.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "samvidhan-server")]
#[command(about = "Multilingual constitutional literacy API for India")]
pub struct ServerConfig {
    /// Path to the SQLite database file
    #[arg(long, env = "SAMVIDHAN_DB", default_value = "./samvidhan.sqlite3")]
    pub db: PathBuf,

    /// Address to listen on
    #[arg(long, env = "SAMVIDHAN_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Base URL of the OpenAI-compatible provider used for completions and
    /// speech synthesis
    #[arg(
        long,
        env = "SAMVIDHAN_PROVIDER_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub provider_url: String,

    /// API key for the provider
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Completion model used by the assistant endpoint
    #[arg(long, env = "SAMVIDHAN_COMPLETION_MODEL", default_value = "gpt-4o-mini")]
    pub completion_model: String,

    /// Speech model used by the TTS endpoint
    #[arg(long, env = "SAMVIDHAN_SPEECH_MODEL", default_value = "tts-1")]
    pub speech_model: String,

    /// Seed the content tables at startup when the database is empty
    #[arg(long, env = "SAMVIDHAN_SEED_ON_START")]
    pub seed_on_start: bool,
}
