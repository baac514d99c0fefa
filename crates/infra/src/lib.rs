// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod sink;

pub use catalog::JsonCatalog;
pub use sink::{BufferSink, StdoutChatSink, DEFAULT_CHAT_LINE_CAPACITY};
