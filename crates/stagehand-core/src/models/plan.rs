//! Plan model definition.

use serde::{Deserialize, Serialize};

use super::Stage;

/// The complete user-authored plan, as handed to the renderer.
///
/// This is a read-only snapshot taken from a [`super::Session`] at export
/// time; the renderer neither mutates nor retains it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Title of the plan
    pub title: String,

    /// Stages in the order they were entered
    pub stages: Vec<Stage>,
}
