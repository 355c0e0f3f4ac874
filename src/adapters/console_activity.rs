//! Terminal rendering of run progress.

use std::io::Write;

use console::{Term, style};

use crate::ports::{Activity, ActivityLog};

/// `ActivityLog` that prints one styled line per finished activity to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleActivityLog {
    term: Term,
}

impl Default for ConsoleActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleActivityLog {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }

    fn line(&self, text: &str) {
        if self.term.write_line(text).is_err() {
            tracing::warn!(%text, "failed to write to terminal");
        }
    }
}

impl ActivityLog for ConsoleActivityLog {
    type Activity = ConsoleActivity;

    fn start_activity(&self, title: &str) -> ConsoleActivity {
        tracing::debug!(activity = %title, "started");
        ConsoleActivity { term: self.term.clone(), title: title.to_string(), output: Vec::new() }
    }

    fn success(&self, message: &str) {
        self.line(&format!("✅ {}", style(message).green()));
    }

    fn warning(&self, message: &str) {
        self.line(&format!("⚠️  {}", style(message).yellow()));
    }
}

/// An activity whose collaborator output is buffered and only shown on failure.
#[derive(Debug)]
pub struct ConsoleActivity {
    term: Term,
    title: String,
    output: Vec<u8>,
}

impl ConsoleActivity {
    fn finish(&self, text: String) {
        if self.term.write_line(&text).is_err() {
            tracing::warn!(activity = %self.title, "failed to write to terminal");
        }
    }
}

impl Activity for ConsoleActivity {
    fn writer(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    fn end_with_success(self) {
        tracing::debug!(activity = %self.title, "succeeded");
        self.finish(format!("  {} {}", style("✓").green(), self.title));
    }

    fn end_with_warning(self, message: &str) {
        tracing::warn!(activity = %self.title, %message, "skipped");
        self.finish(format!(
            "  {} {}: {}",
            style("!").yellow(),
            self.title,
            style(message).yellow()
        ));
    }

    fn end_with_failure(self, error: &dyn std::error::Error) {
        tracing::error!(activity = %self.title, %error, "failed");
        self.finish(format!("  {} {}: {}", style("✗").red(), self.title, style(error).red()));

        let output = String::from_utf8_lossy(&self.output);
        for line in output.lines().filter(|l| !l.trim().is_empty()) {
            self.finish(format!("      {}", style(line).dim()));
        }
    }
}
