// crates/infra/src/sink.rs
use std::io::Write;

use loot_summary_ports::sink::ChatSink;
use loot_summary_shared_kernel::{InfraResult, InfrastructureError};

/// Per-line capacity of the default chat channel.
pub const DEFAULT_CHAT_LINE_CAPACITY: usize = 350;

/// Default sink: one summary line per stdout line, no icon compression
/// (icon markup prints as plain characters here).
#[derive(Debug)]
pub struct StdoutChatSink {
    capacity: usize,
}

impl Default for StdoutChatSink {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CHAT_LINE_CAPACITY,
        }
    }
}

impl StdoutChatSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl ChatSink for StdoutChatSink {
    fn max_chars_per_line(&self) -> usize {
        self.capacity
    }

    fn print(&mut self, line: &str) -> InfraResult<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{line}").map_err(|e| InfrastructureError::SinkWrite {
            message: e.to_string(),
        })
    }
}

/// Capturing sink with a caller-chosen capacity, used by tests, benches and
/// dry runs. Stands in for richer channels that compress icon width.
#[derive(Debug, Clone)]
pub struct BufferSink {
    capacity: usize,
    compress_icons: bool,
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            compress_icons: false,
            lines: Vec::new(),
        }
    }

    pub fn with_icon_compression(capacity: usize) -> Self {
        Self {
            capacity,
            compress_icons: true,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl ChatSink for BufferSink {
    fn max_chars_per_line(&self) -> usize {
        self.capacity
    }

    fn supports_icon_compression(&self) -> bool {
        self.compress_icons
    }

    fn print(&mut self, line: &str) -> InfraResult<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sink_reports_fixed_capacity() {
        let sink = StdoutChatSink::new();
        assert_eq!(sink.max_chars_per_line(), DEFAULT_CHAT_LINE_CAPACITY);
        assert!(!sink.supports_icon_compression());
        assert_eq!(StdoutChatSink::with_capacity(80).max_chars_per_line(), 80);
    }

    #[test]
    fn buffer_sink_captures_lines() {
        let mut sink = BufferSink::new(80);
        sink.print("first").unwrap();
        sink.print("second").unwrap();
        assert_eq!(sink.lines(), ["first", "second"]);
    }

    #[test]
    fn compression_flag_round_trips() {
        assert!(BufferSink::with_icon_compression(500).supports_icon_compression());
        assert!(!BufferSink::new(500).supports_icon_compression());
    }
}
