//! Display formatting for plans and stages.
//!
//! Domain models stay free of presentation concerns; this module owns the
//! markdown shape of the exported document. The renderer in
//! [`crate::render`] formats a [`crate::models::Plan`] through the Display
//! implementations here and the transport ships the resulting bytes as a
//! file, so the document layout is defined in exactly one place.
//!
//! ## Module Organization
//!
//! - [`date`]: the `DD.MM.YYYY` display wrapper for [`jiff::civil::Date`]
//! - [`models`]: Display implementations for [`crate::models::Plan`] and the
//!   indexed [`StageSection`] wrapper

pub mod date;
pub mod models;

pub use date::DisplayDate;
pub use models::StageSection;
