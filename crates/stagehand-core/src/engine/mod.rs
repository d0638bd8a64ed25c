//! The conversation engine: a finite state machine over per-user sessions.
//!
//! One inbound [`Event`] produces exactly one outbound [`Reply`]. The
//! engine owns no transport: the caller feeds it events keyed by user id
//! and delivers whatever comes back, so the whole dialogue can be driven
//! from a test without a network in sight.
//!
//! The flow walks a session through the states of
//! [`crate::models::ConversationState`]:
//!
//! ```text
//! /start ─▶ AwaitingTitle ─▶ AwaitingStageName ─▶ AwaitingStartDate
//!    ─▶ AwaitingEndDate ─▶ AwaitingGoal ─▶ AwaitingActivities
//!    ─▶ AwaitingNextAction ─▶ { AwaitingStageName | export, done }
//! ```
//!
//! A rejected date keeps the state where it is and re-prompts; `/cancel`
//! discards the session from any state; finishing with at least one stage
//! renders the document and ends the conversation.

use crate::dates;
use crate::error::{Result, StagehandError};
use crate::models::{ConversationState, Session, StageDraft};
use crate::render::{self, ExportedDocument};
use crate::store::SessionStore;

#[cfg(test)]
mod tests;

/// Keyboard button starting another stage.
pub const BUTTON_ADD_STAGE: &str = "Add another stage";

/// Keyboard button finishing the plan and exporting the document.
pub const BUTTON_FINISH: &str = "Finish and export";

const PROMPT_TITLE: &str =
    "Hi! Let's put together a staged plan.\nFirst, send the plan title:";
const PROMPT_FIRST_STAGE_NAME: &str =
    "Title saved. Now send the name of the first stage:";
const PROMPT_NEXT_STAGE_NAME: &str = "Send the name of the next stage:";
const PROMPT_START_DATE: &str = "Send the stage start date (DD.MM.YYYY):";
const PROMPT_END_DATE: &str = "Send the stage end date (DD.MM.YYYY):";
const PROMPT_BAD_DATE: &str = "Invalid date format. Try again (DD.MM.YYYY):";
const PROMPT_GOAL: &str = "Send the stage goal:";
const PROMPT_ACTIVITIES: &str =
    "Send the stage activities (free text; commas or a list both work):";
const PROMPT_NEXT_ACTION: &str = "Stage added! What next?";
const PROMPT_CHOOSE_OPTION: &str = "Please choose one of the options below.";
const PROMPT_NOT_STARTED: &str = "Send /start to begin a new plan.";
const PROMPT_NOTHING_TO_EXPORT: &str = "Nothing to export yet.";
const PROMPT_EXPORT_FAILED: &str =
    "Something went wrong while creating the file. Please try again.";
const PROMPT_CANCELLED: &str = "Plan creation cancelled.";
const CAPTION_PLAN_READY: &str = "Your plan is ready!";

/// An inbound conversation event for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The start signal (`/start`): begin a fresh session
    Start,
    /// The cancel signal (`/cancel`): discard the session
    Cancel,
    /// Free-form text, including presses of the two reply-keyboard buttons
    Text(String),
}

/// The choice affordance attached to an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    /// Leave whatever keyboard is currently shown alone
    None,
    /// Show the two-button add-or-finish keyboard
    NextAction,
    /// Remove the reply keyboard
    Remove,
}

/// The single outbound message produced by one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message text; doubles as the caption when `document` is present
    pub text: String,
    pub keyboard: Keyboard,
    /// The exported document, present only on a successful finish
    pub document: Option<ExportedDocument>,
}

impl Reply {
    fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            keyboard: Keyboard::None,
            document: None,
        }
    }

    fn with_keyboard(text: &str, keyboard: Keyboard) -> Self {
        Self {
            text: text.to_string(),
            keyboard,
            document: None,
        }
    }

    fn with_document(caption: &str, document: ExportedDocument) -> Self {
        Self {
            text: caption.to_string(),
            keyboard: Keyboard::Remove,
            document: Some(document),
        }
    }
}

/// Drives conversations against an injected [`SessionStore`].
pub struct Engine {
    store: Box<dyn SessionStore>,
}

impl Engine {
    /// Creates an engine over the given session store.
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Processes one event for the user identified by `key`.
    ///
    /// # Errors
    ///
    /// Only session-store failures propagate. Everything the user can
    /// cause — bad dates, unrecognized choices, finishing with no stages —
    /// is answered in-band with a [`Reply`], and a render failure is logged
    /// and answered with a generic message.
    pub fn handle(&self, key: i64, event: Event) -> Result<Reply> {
        match event {
            Event::Start => self.handle_start(key),
            Event::Cancel => self.handle_cancel(key),
            Event::Text(text) => self.handle_text(key, &text),
        }
    }

    /// Begins a fresh session, discarding any prior one for the key.
    fn handle_start(&self, key: i64) -> Result<Reply> {
        self.store.put(&Session::new(key))?;
        Ok(Reply::text(PROMPT_TITLE))
    }

    /// Discards the session from any state.
    fn handle_cancel(&self, key: i64) -> Result<Reply> {
        self.store.remove(key)?;
        Ok(Reply::with_keyboard(PROMPT_CANCELLED, Keyboard::Remove))
    }

    fn handle_text(&self, key: i64, text: &str) -> Result<Reply> {
        let text = text.trim();

        let Some(mut session) = self.store.get(key)? else {
            return Ok(Reply::text(PROMPT_NOT_STARTED));
        };

        match session.state {
            ConversationState::AwaitingTitle => {
                session.title = text.to_string();
                session.state = ConversationState::AwaitingStageName;
                self.store.put(&session)?;
                Ok(Reply::text(PROMPT_FIRST_STAGE_NAME))
            }
            ConversationState::AwaitingStageName => {
                session.draft = Some(StageDraft::new(text));
                session.state = ConversationState::AwaitingStartDate;
                self.store.put(&session)?;
                Ok(Reply::text(PROMPT_START_DATE))
            }
            ConversationState::AwaitingStartDate => match dates::parse_date(text) {
                Ok(date) => {
                    draft_mut(&mut session)?.start = Some(date);
                    session.state = ConversationState::AwaitingEndDate;
                    self.store.put(&session)?;
                    Ok(Reply::text(PROMPT_END_DATE))
                }
                Err(_) => Ok(Reply::text(PROMPT_BAD_DATE)),
            },
            ConversationState::AwaitingEndDate => match dates::parse_date(text) {
                Ok(date) => {
                    draft_mut(&mut session)?.end = Some(date);
                    session.state = ConversationState::AwaitingGoal;
                    self.store.put(&session)?;
                    Ok(Reply::text(PROMPT_GOAL))
                }
                Err(_) => Ok(Reply::text(PROMPT_BAD_DATE)),
            },
            ConversationState::AwaitingGoal => {
                draft_mut(&mut session)?.goal = Some(text.to_string());
                session.state = ConversationState::AwaitingActivities;
                self.store.put(&session)?;
                Ok(Reply::text(PROMPT_ACTIVITIES))
            }
            ConversationState::AwaitingActivities => {
                let draft = session.draft.take().ok_or_else(missing_draft)?;
                let stage = draft.finish(text).ok_or_else(missing_draft)?;
                session.stages.push(stage);
                session.state = ConversationState::AwaitingNextAction;
                self.store.put(&session)?;
                Ok(Reply::with_keyboard(PROMPT_NEXT_ACTION, Keyboard::NextAction))
            }
            ConversationState::AwaitingNextAction => match text {
                BUTTON_ADD_STAGE => {
                    session.state = ConversationState::AwaitingStageName;
                    self.store.put(&session)?;
                    Ok(Reply::with_keyboard(PROMPT_NEXT_STAGE_NAME, Keyboard::Remove))
                }
                BUTTON_FINISH => self.export(&session),
                _ => Ok(Reply::with_keyboard(
                    PROMPT_CHOOSE_OPTION,
                    Keyboard::NextAction,
                )),
            },
        }
    }

    /// Terminal export step: the conversation ends here whether or not a
    /// document could be produced.
    fn export(&self, session: &Session) -> Result<Reply> {
        self.store.remove(session.key)?;

        if session.stages.is_empty() {
            return Ok(Reply::with_keyboard(
                PROMPT_NOTHING_TO_EXPORT,
                Keyboard::Remove,
            ));
        }

        match render::render(&session.plan(), session.key) {
            Ok(document) => Ok(Reply::with_document(CAPTION_PLAN_READY, document)),
            Err(e) => {
                log::error!("Failed to render plan for key {}: {e}", session.key);
                Ok(Reply::with_keyboard(PROMPT_EXPORT_FAILED, Keyboard::Remove))
            }
        }
    }
}

fn draft_mut(session: &mut Session) -> Result<&mut StageDraft> {
    session.draft.as_mut().ok_or_else(missing_draft)
}

fn missing_draft() -> StagehandError {
    StagehandError::Configuration {
        message: "session has no stage draft in a draft-collecting state".to_string(),
    }
}
