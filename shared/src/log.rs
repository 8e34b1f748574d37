/// Destination for one human-readable line per user-visible action. Sinks
/// own their own timestamping and presentation.
pub trait LogSink {
    fn log(&mut self, message: &str);
}

/// In-memory sink used by tests and headless sessions.
#[derive(Default)]
pub struct MemoryLog {
    lines: Vec<String>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LogSink for MemoryLog {
    fn log(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
