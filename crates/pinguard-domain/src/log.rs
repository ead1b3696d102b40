//! Logging seam: the engine writes text lines, the host decides where they go.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

pub trait LogSink {
    fn info(&mut self, message: &str);
    fn warn(&mut self, message: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every line in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub lines: Vec<LogLine>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|l| l.level == LogLevel::Warn)
            .map(|l| l.message.as_str())
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }
}

impl LogSink for RecordingSink {
    fn info(&mut self, message: &str) {
        self.lines.push(LogLine {
            level: LogLevel::Info,
            message: message.to_string(),
        });
    }

    fn warn(&mut self, message: &str) {
        self.lines.push(LogLine {
            level: LogLevel::Warn,
            message: message.to_string(),
        });
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn info(&mut self, _message: &str) {}
    fn warn(&mut self, _message: &str) {}
}
