//! Minimal Telegram Bot API client.
//!
//! Covers exactly the three methods the bot needs — `getUpdates` long
//! polling, `sendMessage` with reply-keyboard markup, and `sendDocument`
//! multipart uploads. Responses arrive in Telegram's `{ok, result}`
//! envelope; `ok: false` is surfaced as an error carrying the API's
//! description.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use stagehand_core::{ExportedDocument, Keyboard, BUTTON_ADD_STAGE, BUTTON_FINISH};

/// One entry from a `getUpdates` response.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

/// An inbound chat message.
#[derive(Debug, Deserialize)]
pub struct Message {
    pub text: Option<String>,
    pub from: Option<User>,
    pub chat: Chat,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
}

/// Telegram's standard response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

/// HTTP client bound to one bot token.
pub struct TelegramClient {
    http: Client,
    base: String,
}

impl TelegramClient {
    /// Creates a client for `api_url` with the given bot token.
    ///
    /// `poll_timeout` sizes the HTTP timeout so that it always outlasts a
    /// full long-poll cycle.
    pub fn new(api_url: &str, token: &str, poll_timeout: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(poll_timeout + 10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    /// Long-polls for updates with ids at or above `offset`.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        self.call(
            "getUpdates",
            json!({
                "offset": offset,
                "timeout": timeout_secs,
                "allowed_updates": ["message"],
            }),
        )
        .await
    }

    /// Sends a plain-text message, optionally updating the reply keyboard.
    pub async fn send_message(&self, chat_id: i64, text: &str, keyboard: Keyboard) -> Result<()> {
        let mut body = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(markup) = reply_markup(keyboard) {
            body["reply_markup"] = markup;
        }

        // The echoed Message object is of no use here.
        let _: serde_json::Value = self.call("sendMessage", body).await?;
        Ok(())
    }

    /// Uploads a rendered document with a caption, removing the keyboard.
    pub async fn send_document(
        &self,
        chat_id: i64,
        document: &ExportedDocument,
        caption: &str,
    ) -> Result<()> {
        let part = Part::bytes(document.bytes.clone())
            .file_name(document.filename.clone())
            .mime_str("text/markdown")
            .context("Invalid document MIME type")?;
        let form = Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .text(
                "reply_markup",
                reply_markup(Keyboard::Remove)
                    .unwrap_or_default()
                    .to_string(),
            )
            .part("document", part);

        let response = self
            .http
            .post(format!("{}/sendDocument", self.base))
            .multipart(form)
            .send()
            .await
            .context("sendDocument request failed")?;

        let envelope: ApiResponse<serde_json::Value> = response
            .json()
            .await
            .context("Failed to decode sendDocument response")?;
        check(envelope, "sendDocument")?;
        Ok(())
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: serde_json::Value) -> Result<T> {
        let response = self
            .http
            .post(format!("{}/{}", self.base, method))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("{method} request failed"))?;

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .with_context(|| format!("Failed to decode {method} response"))?;
        check(envelope, method)
    }
}

fn check<T>(envelope: ApiResponse<T>, method: &str) -> Result<T> {
    if !envelope.ok {
        let description = envelope
            .description
            .unwrap_or_else(|| "no description".to_string());
        bail!("Telegram API error from {method}: {description}");
    }
    envelope
        .result
        .with_context(|| format!("{method} returned ok without a result"))
}

/// Maps an engine keyboard choice onto Bot API reply markup.
fn reply_markup(keyboard: Keyboard) -> Option<serde_json::Value> {
    match keyboard {
        Keyboard::None => None,
        Keyboard::NextAction => Some(json!({
            "keyboard": [[
                { "text": BUTTON_ADD_STAGE },
                { "text": BUTTON_FINISH },
            ]],
            "one_time_keyboard": true,
            "resize_keyboard": true,
        })),
        Keyboard::Remove => Some(json!({ "remove_keyboard": true })),
    }
}
