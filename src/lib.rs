#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod parsers;

pub use loot_summary_core::{
    control_descriptors, BufferSink, ChatSink, CurrencyKind, ItemKey, JsonCatalog,
    LootSummaryError, MetadataSource, QualityTier, StdoutChatSink, SummaryBuilder, SummaryEngine,
    DEFAULT_CHAT_LINE_CAPACITY,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
