//! Per-repository outcomes and their aggregate.

use std::fmt;

use crate::domain::PrError;

/// Classification of one repository after the action ran (or was skipped).
#[derive(Debug)]
pub enum Outcome {
    Succeeded,
    /// The working copy was never cloned.
    SkippedNotCloned,
    /// The remote has no matching open pull request.
    SkippedNoPr,
    Failed(PrError),
}

impl Outcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::SkippedNotCloned | Outcome::SkippedNoPr)
    }
}

/// Overall status of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    AllOk,
    CompletedWithErrors,
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub done: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Succeeded => self.done += 1,
            Outcome::SkippedNotCloned | Outcome::SkippedNoPr => self.skipped += 1,
            Outcome::Failed(_) => self.errored += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.done + self.skipped + self.errored
    }

    pub fn status(&self) -> RunStatus {
        if self.errored == 0 { RunStatus::AllOk } else { RunStatus::CompletedWithErrors }
    }

    /// One-line summary for `command`, e.g. `update-prs completed (3 OK, 0 skipped, 0 errored)`.
    pub fn render(&self, command: &str) -> String {
        match self.status() {
            RunStatus::AllOk => format!("{} completed ({})", command, self),
            RunStatus::CompletedWithErrors => {
                format!("{} completed with errors ({})", command, self)
            }
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} OK, {} skipped, {} errored", self.done, self.skipped, self.errored)
    }
}
