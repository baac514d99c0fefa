// crates/ports/src/sink.rs
use loot_summary_shared_kernel::InfraResult;

/// Port for the constrained-width output channel.
///
/// Implementations report their per-line capacity up front; the summary
/// pipeline sizes its packing budget from it. A sink that renders icon
/// markup compactly (a fixed-width glyph instead of the markup characters)
/// reports `supports_icon_compression`, switching the packer to the
/// corrected width metric.
pub trait ChatSink {
    fn max_chars_per_line(&self) -> usize;

    fn supports_icon_compression(&self) -> bool {
        false
    }

    fn print(&mut self, line: &str) -> InfraResult<()>;
}

/// Validates a candidate sink's contract at bind time: a sink reporting a
/// zero capacity cannot hold any line and is rejected.
pub fn meets_contract(sink: &dyn ChatSink) -> bool {
    sink.max_chars_per_line() > 0
}
