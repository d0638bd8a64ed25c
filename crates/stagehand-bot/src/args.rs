use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the Stagehand plan-builder bot
///
/// Stagehand collects a staged plan through a Telegram conversation and
/// exports it as a markdown document. The bot credential is read from the
/// `STAGEHAND_BOT_TOKEN` environment variable; the process refuses to start
/// without it.
#[derive(Parser)]
#[command(version, about, name = "stagehand")]
pub struct Args {
    /// Path to the SQLite session database. Sessions are held in memory
    /// unless this or --persist-sessions is given
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// Persist sessions to the default location,
    /// $XDG_DATA_HOME/stagehand/sessions.db
    #[arg(long, conflicts_with = "database_file")]
    pub persist_sessions: bool,

    /// Base URL of the Telegram Bot API
    #[arg(long, default_value = "https://api.telegram.org")]
    pub api_url: String,

    /// Long-poll timeout for getUpdates, in seconds
    #[arg(long, default_value_t = 30)]
    pub poll_timeout: u64,
}
