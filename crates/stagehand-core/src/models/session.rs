//! Per-user conversation session state.

use serde::{Deserialize, Serialize};

use super::{Plan, Stage, StageDraft};

/// Position of a conversation within the collection flow.
///
/// The terminal "idle" condition has no variant: an idle user simply has no
/// session in the store. Every variant names the input the engine is waiting
/// for next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConversationState {
    AwaitingTitle,
    AwaitingStageName,
    AwaitingStartDate,
    AwaitingEndDate,
    AwaitingGoal,
    AwaitingActivities,
    AwaitingNextAction,
}

/// All state tracked for one user between `/start` and export or cancel.
///
/// Title, committed stages and the in-progress draft live in this single
/// record, keyed by the stable user id, so there is exactly one place a
/// conversation can diverge from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Stable per-user key, assigned by the transport
    pub key: i64,

    /// What the engine expects from the user next
    pub state: ConversationState,

    /// Plan title; set once by the first reply and immutable afterwards
    pub title: String,

    /// Fully collected stages, append-only
    pub stages: Vec<Stage>,

    /// The stage currently being filled in, if any.
    ///
    /// Non-empty only between `AwaitingStartDate` and `AwaitingActivities`;
    /// committing the draft into `stages` clears it.
    pub draft: Option<StageDraft>,
}

impl Session {
    /// Creates a fresh, empty session for a user key.
    pub fn new(key: i64) -> Self {
        Self {
            key,
            state: ConversationState::AwaitingTitle,
            title: String::new(),
            stages: Vec::new(),
            draft: None,
        }
    }

    /// Takes the export snapshot of the collected data.
    pub fn plan(&self) -> Plan {
        Plan {
            title: self.title.clone(),
            stages: self.stages.clone(),
        }
    }
}
