//! Data models for plans, stages, and conversation sessions.
//!
//! This module contains the core domain models of the stagehand plan
//! builder. Display implementations live in [`crate::display`] to keep data
//! structures separate from presentation logic: the same [`Plan`] can be
//! rendered into the exported document or summarized in a log line without
//! the model knowing either format.
//!
//! The three layers mirror the conversation lifecycle:
//!
//! - [`Session`] — everything tracked for one user between `/start` and
//!   export or cancellation, including the [`ConversationState`] pointer and
//!   the [`StageDraft`] being filled in.
//! - [`Stage`] — one committed phase of the plan.
//! - [`Plan`] — the read-only snapshot handed to the renderer at export.

pub mod plan;
pub mod session;
pub mod stage;


pub use plan::Plan;
pub use session::{ConversationState, Session};
pub use stage::{Stage, StageDraft};
