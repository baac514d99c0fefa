//! Facade crate: re-exports the workspace layers and provides the
//! [`SummaryBuilder`] most callers start from.

#![allow(clippy::multiple_crate_versions)]

pub use loot_summary_domain::format;
pub use loot_summary_domain::link;
pub use loot_summary_domain::model;
pub use loot_summary_domain::options;
pub use loot_summary_domain::pack;
pub use loot_summary_domain::sort;
pub use loot_summary_domain::store;
pub use loot_summary_infra::{BufferSink, JsonCatalog, StdoutChatSink, DEFAULT_CHAT_LINE_CAPACITY};
pub use loot_summary_ports::metadata::{CurrencyRecord, ItemRecord, MetadataSource};
pub use loot_summary_ports::sink::ChatSink;
pub use loot_summary_shared_kernel::{
    ApplicationError, CurrencyKind, DomainError, ErrorContext, InfraResult, InfrastructureError,
    ItemKey, LootSummaryError, QualityTier, QuantityRule, Result,
};
pub use loot_summary_usecase::{control_descriptors, ControlDescriptor, ControlKind, SummaryEngine};

use loot_summary_ports::sink::meets_contract;

/// Wires a metadata source and a sink into a ready [`SummaryEngine`].
/// Omitted parts fall back to an empty catalog and the default stdout sink;
/// a sink failing its contract is replaced by the default as well.
#[derive(Default)]
pub struct SummaryBuilder {
    metadata: Option<Box<dyn MetadataSource>>,
    sink: Option<Box<dyn ChatSink>>,
    prefix: String,
    suffix: String,
    counter_text: Option<String>,
}

impl SummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata(mut self, metadata: Box<dyn MetadataSource>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn sink(mut self, sink: Box<dyn ChatSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn counter_text(mut self, noun: impl Into<String>) -> Self {
        self.counter_text = Some(noun.into());
        self
    }

    pub fn build(self) -> SummaryEngine {
        let metadata = self
            .metadata
            .unwrap_or_else(|| Box::new(JsonCatalog::empty()));
        let sink = self
            .sink
            .filter(|candidate| meets_contract(candidate.as_ref()))
            .unwrap_or_else(|| Box::new(StdoutChatSink::new()));
        let mut engine = SummaryEngine::new(metadata, sink);
        engine.set_prefix(self.prefix);
        engine.set_suffix(self.suffix);
        if let Some(noun) = self.counter_text {
            engine.set_counter_text(noun);
        }
        engine
    }
}
