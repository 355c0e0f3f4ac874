use std::io::Write;

/// Port for reporting progress of a run to the operator.
pub trait ActivityLog {
    type Activity: Activity;

    /// Begin a titled activity, typically one per repository.
    fn start_activity(&self, title: &str) -> Self::Activity;

    /// Emit a success-styled run-level line.
    fn success(&self, message: &str);

    /// Emit a warning-styled run-level line.
    fn warning(&self, message: &str);
}

/// A single in-flight activity.
///
/// Terminal methods consume the activity, so each one ends exactly once.
pub trait Activity {
    /// Stream for incidental output produced while the activity runs.
    fn writer(&mut self) -> &mut dyn Write;

    fn end_with_success(self);

    fn end_with_warning(self, message: &str);

    fn end_with_failure(self, error: &dyn std::error::Error);
}
