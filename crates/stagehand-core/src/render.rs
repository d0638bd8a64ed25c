//! Document rendering for completed plans.
//!
//! Rendering is a pure transformation: a [`Plan`] snapshot goes in, a
//! markdown document plus a deterministic filename comes out. Nothing here
//! touches the session store or the transport, and there is no partial
//! output: the caller gets either the whole document or an error.

use std::fmt::Write;

use crate::error::{Result, StagehandError};
use crate::models::Plan;

/// Filename prefix shared by every exported plan document.
const FILENAME_PREFIX: &str = "plan";

/// Extension of the exported document format.
const FILENAME_EXTENSION: &str = "md";

/// A rendered plan ready to be handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The document content, UTF-8 markdown
    pub bytes: Vec<u8>,

    /// Suggested filename, stable for a given user key
    pub filename: String,
}

/// Renders a plan into its shareable document.
///
/// The document layout is owned by the Display implementations in
/// [`crate::display`]: a top-level title heading, then one numbered stage
/// section per stage in entry order. The filename is derived from `key`
/// alone, so a re-export for the same user replaces rather than versions
/// the previous file.
///
/// Callers check that `plan.stages` is non-empty before invoking this; the
/// engine answers an empty export with a user-facing message instead of a
/// document.
///
/// # Errors
///
/// Returns [`StagehandError::Render`] if formatting the document fails.
pub fn render(plan: &Plan, key: i64) -> Result<ExportedDocument> {
    let mut content = String::new();
    write!(content, "{plan}").map_err(|e| StagehandError::render(e.to_string()))?;

    Ok(ExportedDocument {
        bytes: content.into_bytes(),
        filename: format!("{FILENAME_PREFIX}_{key}.{FILENAME_EXTENSION}"),
    })
}
