//! Stagehand bot binary.
//!
//! Wires the conversation engine from stagehand-core to the Telegram Bot
//! API: argument parsing, credential loading, session-store selection, and
//! the long-polling loop.

mod args;
mod run;
mod telegram;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use stagehand_core::{Engine, MemoryStore, SqliteStore};
use telegram::TelegramClient;

/// Environment variable holding the bot credential.
const TOKEN_ENV: &str = "STAGEHAND_BOT_TOKEN";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        persist_sessions,
        api_url,
        poll_timeout,
    } = Args::parse();

    let token = std::env::var(TOKEN_ENV)
        .with_context(|| format!("{TOKEN_ENV} must be set to the bot token"))?;

    let engine = if let Some(path) = database_file {
        Engine::new(SqliteStore::new(path).context("Failed to open session database")?)
    } else if persist_sessions {
        let path = SqliteStore::default_path().context("Failed to resolve session database path")?;
        info!("Persisting sessions to {}", path.display());
        Engine::new(SqliteStore::new(path).context("Failed to open session database")?)
    } else {
        Engine::new(MemoryStore::new())
    };

    let client = TelegramClient::new(&api_url, &token, poll_timeout)?;

    info!("Stagehand started");
    run::run(&client, &engine, poll_timeout).await
}
