use op_outcome::logging::LogSink;
use op_outcome::Fault;
use std::sync::Mutex;

mod caller;
mod emit;


/// One line captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Info(String),
    Error(String, Option<String>),
}

/// Sink that keeps every line for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<Line>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

impl LogSink for RecordingSink {
    fn info(&self, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(Line::Info(text.to_string()));
        }
    }

    fn error(&self, text: &str, fault: Option<&Fault>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(Line::Error(text.to_string(), fault.map(Fault::message)));
        }
    }
}

pub fn info(text: &str) -> Line {
    Line::Info(text.to_string())
}

pub fn error(text: &str) -> Line {
    Line::Error(text.to_string(), None)
}

pub fn fault_line(message: &str) -> Line {
    Line::Error(
        op_outcome::logging::FAULT_LOG_PREFIX.to_string(),
        Some(message.to_string()),
    )
}
