//! Core library for the Stagehand conversational plan builder.
//!
//! This crate contains everything except the transport: the data models for
//! plans and their stages, the turn-by-turn conversation engine, the
//! session store abstraction with in-memory and SQLite backends, strict
//! date handling, and the renderer that turns a finished plan into a
//! shareable markdown document.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Engine      │    │  SessionStore   │    │    Renderer     │
//! │ (state machine) │───▶│ (memory/sqlite) │    │ (Plan ─▶ bytes) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    one Reply per           one Session           invoked once,
//!    inbound Event            per user key          at export
//! ```
//!
//! The engine is transport-agnostic: it consumes [`engine::Event`] values
//! and produces [`engine::Reply`] values, and the binary crate maps those
//! onto the Telegram Bot API.
//!
//! # Quick Start
//!
//! ```rust
//! use stagehand_core::{Engine, Event, MemoryStore};
//!
//! # fn example() -> Result<(), stagehand_core::StagehandError> {
//! let engine = Engine::new(MemoryStore::new());
//!
//! let reply = engine.handle(1234, Event::Start)?;
//! println!("{}", reply.text); // asks for the plan title
//!
//! let reply = engine.handle(1234, Event::Text("Q1 Plan".to_string()))?;
//! println!("{}", reply.text); // asks for the first stage name
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use engine::{Engine, Event, Keyboard, Reply, BUTTON_ADD_STAGE, BUTTON_FINISH};
pub use error::{Result, StagehandError};
pub use models::{ConversationState, Plan, Session, Stage, StageDraft};
pub use render::ExportedDocument;
pub use store::{MemoryStore, SessionStore, SqliteStore};
