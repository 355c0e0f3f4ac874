use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::ports::{Activity, ActivityLog};

/// Everything a run reported, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    Started(String),
    Succeeded(String),
    Warned { title: String, message: String },
    Failed { title: String, error: String, output: String },
    RunSuccess(String),
    RunWarning(String),
}

#[derive(Default)]
pub struct RecordingActivityLog {
    events: Arc<Mutex<Vec<ActivityEvent>>>,
}

impl RecordingActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ActivityEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Run-level summary lines, success or warning.
    pub fn summaries(&self) -> Vec<ActivityEvent> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, ActivityEvent::RunSuccess(_) | ActivityEvent::RunWarning(_)))
            .collect()
    }

    /// Number of terminal events recorded for activities.
    pub fn terminal_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    ActivityEvent::Succeeded(_)
                        | ActivityEvent::Warned { .. }
                        | ActivityEvent::Failed { .. }
                )
            })
            .count()
    }
}

impl ActivityLog for RecordingActivityLog {
    type Activity = RecordingActivity;

    fn start_activity(&self, title: &str) -> RecordingActivity {
        self.events.lock().unwrap().push(ActivityEvent::Started(title.to_string()));
        RecordingActivity {
            events: Arc::clone(&self.events),
            title: title.to_string(),
            output: Vec::new(),
        }
    }

    fn success(&self, message: &str) {
        self.events.lock().unwrap().push(ActivityEvent::RunSuccess(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.events.lock().unwrap().push(ActivityEvent::RunWarning(message.to_string()));
    }
}

pub struct RecordingActivity {
    events: Arc<Mutex<Vec<ActivityEvent>>>,
    title: String,
    output: Vec<u8>,
}

impl Activity for RecordingActivity {
    fn writer(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    fn end_with_success(self) {
        self.events.lock().unwrap().push(ActivityEvent::Succeeded(self.title));
    }

    fn end_with_warning(self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ActivityEvent::Warned { title: self.title, message: message.to_string() });
    }

    fn end_with_failure(self, error: &dyn std::error::Error) {
        let output = String::from_utf8_lossy(&self.output).into_owned();
        self.events.lock().unwrap().push(ActivityEvent::Failed {
            title: self.title,
            error: error.to_string(),
            output,
        });
    }
}
