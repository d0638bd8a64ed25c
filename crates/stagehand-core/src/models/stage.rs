//! Stage model definition and the in-progress draft type.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One completed phase of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stage {
    /// Name of the stage
    pub name: String,

    /// First day of the stage
    pub start: Date,

    /// Last day of the stage (not required to be on or after `start`)
    pub end: Date,

    /// What the stage is meant to achieve
    pub goal: String,

    /// Free-text list of activities for the stage
    pub activities: String,
}

/// A stage while it is still being collected field by field.
///
/// A draft exists only between the stage-name prompt and the activities
/// prompt of a conversation; [`StageDraft::finish`] consumes it and yields
/// the committed [`Stage`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageDraft {
    pub name: String,
    pub start: Option<Date>,
    pub end: Option<Date>,
    pub goal: Option<String>,
}

impl StageDraft {
    /// Starts a new draft with only the name filled in.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            goal: None,
        }
    }

    /// Completes the draft with the activities text.
    ///
    /// Returns `None` if any earlier field is still missing, which indicates
    /// the conversation state and the draft went out of sync.
    pub fn finish(self, activities: impl Into<String>) -> Option<Stage> {
        Some(Stage {
            name: self.name,
            start: self.start?,
            end: self.end?,
            goal: self.goal?,
            activities: activities.into(),
        })
    }
}
