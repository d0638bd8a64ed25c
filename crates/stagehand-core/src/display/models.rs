//! Display implementations producing the exported document markdown.

use std::fmt;

use super::DisplayDate;
use crate::models::{Plan, Stage};

/// A stage paired with its 1-based position in the plan.
///
/// Stages only carry a heading number in the context of a document, so the
/// index lives in this wrapper rather than on [`Stage`] itself.
pub struct StageSection<'a> {
    pub index: usize,
    pub stage: &'a Stage,
}

impl fmt::Display for StageSection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Stage {}: {}", self.index, self.stage.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "Period: from {} to {}",
            DisplayDate(&self.stage.start),
            DisplayDate(&self.stage.end)
        )?;
        writeln!(f)?;
        writeln!(f, "Goal: {}", self.stage.goal)?;
        writeln!(f)?;
        writeln!(f, "Activities: {}", self.stage.activities)
    }
}

impl fmt::Display for Plan {
    /// Formats the full document: a top-level heading with the title,
    /// followed by one [`StageSection`] per stage in entry order. Field
    /// values are inserted verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        for (i, stage) in self.stages.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{}", StageSection { index: i + 1, stage })?;
        }
        Ok(())
    }
}
