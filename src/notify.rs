use std::sync::Mutex;

/// Sink for toast-style messages. Delivery is fire-and-forget.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);

    /// Search progress in percent, reported while a search is in flight.
    fn progress(&self, _percent: u8) {}
}

pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn success(&self, message: &str) {
        eprintln!("✓ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {message}");
    }
}

/// Discards everything. Used when stdout carries JSON for another program.
pub struct QuietNotifier;

impl Notifier for QuietNotifier {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(Level, String)>>,
    progress: Mutex<Vec<u8>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    pub fn progress_updates(&self) -> Vec<u8> {
        self.progress
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(Level::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn progress(&self, percent: u8) {
        if let Ok(mut progress) = self.progress.lock() {
            progress.push(percent);
        }
    }
}
