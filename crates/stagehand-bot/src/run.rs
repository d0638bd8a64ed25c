//! The long-polling loop connecting Telegram updates to the engine.

use std::time::Duration;

use anyhow::Result;
use log::{debug, error, info};
use stagehand_core::{Engine, Event, Keyboard};

use crate::telegram::{TelegramClient, Update};

/// Message shown when an update could not be processed at all.
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Pause before retrying after a failed poll.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Polls for updates until interrupted, feeding each one to the engine.
///
/// Updates are processed one at a time, to completion, in the order
/// Telegram delivers them; failures are confined to the update that caused
/// them and never take the loop down.
pub async fn run(client: &TelegramClient, engine: &Engine, poll_timeout: u64) -> Result<()> {
    let mut offset = 0i64;

    loop {
        let updates = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down");
                return Ok(());
            }
            updates = client.get_updates(offset, poll_timeout) => updates,
        };

        let updates = match updates {
            Ok(updates) => updates,
            Err(e) => {
                error!("getUpdates failed: {e:#}");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            if let Err(e) = handle_update(client, engine, update).await {
                error!("Failed to handle update: {e:#}");
            }
        }
    }
}

/// Routes one update through the engine and delivers the reply.
async fn handle_update(client: &TelegramClient, engine: &Engine, update: Update) -> Result<()> {
    let Some(message) = update.message else {
        return Ok(());
    };
    let Some(text) = message.text else {
        return Ok(());
    };

    let chat_id = message.chat.id;
    // Channel posts have no sender; fall back to the chat id as the key.
    let key = message.from.map_or(chat_id, |user| user.id);

    let event = match text.trim() {
        "/start" => Event::Start,
        "/cancel" => Event::Cancel,
        _ => Event::Text(text),
    };
    debug!("Handling {event:?} for key {key}");

    let reply = match engine.handle(key, event) {
        Ok(reply) => reply,
        Err(e) => {
            error!("Engine error for key {key}: {e}");
            return client
                .send_message(chat_id, GENERIC_FAILURE, Keyboard::Remove)
                .await;
        }
    };

    match reply.document {
        Some(document) => client.send_document(chat_id, &document, &reply.text).await,
        None => client.send_message(chat_id, &reply.text, reply.keyboard).await,
    }
}
