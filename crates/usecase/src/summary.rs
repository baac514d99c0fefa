// crates/usecase/src/summary.rs
use std::collections::HashMap;

use tracing::{debug, trace, warn};

use loot_summary_domain::format;
use loot_summary_domain::link::parse_item_link;
use loot_summary_domain::model::{CurrencyInfo, ItemInfo};
use loot_summary_domain::options::{OptionRegistry, SettingsTree};
use loot_summary_domain::pack::{display_width, LinePacker};
use loot_summary_domain::sort::{sort_keys, SortMode, SortRank};
use loot_summary_domain::store::EntryStore;
use loot_summary_ports::metadata::{ItemRecord, MetadataSource};
use loot_summary_ports::sink::{meets_contract, ChatSink};
use loot_summary_shared_kernel::{
    ApplicationError, CurrencyKind, ItemKey, QualityTier, QuantityRule, Result,
};

/// Orchestrates Entry Store -> Sorter -> Formatter -> Line Packer -> sink,
/// then resets its accumulated state.
///
/// Single-threaded by design: additions and `print` are expected to run to
/// completion without interleaving. An interleaved sequence that corrupts
/// the store is detected mid-emit and fails fast.
pub struct SummaryEngine {
    registry: OptionRegistry,
    items: EntryStore<ItemKey>,
    currencies: EntryStore<CurrencyKind>,
    counter: u64,
    counter_text: String,
    prefix: String,
    suffix: String,
    sink: Box<dyn ChatSink>,
    metadata: Box<dyn MetadataSource>,
    /// Display names remembered from parsed links, used when the metadata
    /// source does not know an item.
    link_names: HashMap<ItemKey, String>,
    /// Caller-resolved records, taking precedence over the metadata source.
    record_overrides: HashMap<ItemKey, ItemRecord>,
}

impl SummaryEngine {
    pub fn new(metadata: Box<dyn MetadataSource>, sink: Box<dyn ChatSink>) -> Self {
        Self {
            registry: OptionRegistry::new(),
            items: EntryStore::new(QuantityRule::Positive),
            currencies: EntryStore::new(QuantityRule::AllowZero),
            counter: 0,
            counter_text: "drop".to_string(),
            prefix: String::new(),
            suffix: String::new(),
            sink,
            metadata,
            link_names: HashMap::new(),
            record_overrides: HashMap::new(),
        }
    }

    pub fn options(&self) -> &OptionRegistry {
        &self.registry
    }

    pub fn options_mut(&mut self) -> &mut OptionRegistry {
        &mut self.registry
    }

    /// Rebinds the registry to externally owned settings trees; legacy keys
    /// migrate as part of the bind.
    pub fn bind_settings(&mut self, options: SettingsTree, defaults: SettingsTree) {
        self.registry.bind(options, defaults);
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    pub fn set_counter_text(&mut self, noun: impl Into<String>) {
        self.counter_text = noun.into();
    }

    /// Swaps the output sink. A candidate failing the contract (zero
    /// capacity) is discarded and the current sink stays in place.
    pub fn set_sink(&mut self, sink: Box<dyn ChatSink>) {
        if meets_contract(sink.as_ref()) {
            self.sink = sink;
        } else {
            warn!("rejected sink with zero line capacity; keeping current sink");
        }
    }

    /// Records one item addition. Dropped silently while `enabled` is off.
    pub fn add_item(&mut self, key: ItemKey, quantity: u64) -> Result<()> {
        if !self.registry.enabled() {
            trace!(%key, quantity, "addition dropped: summary disabled");
            return Ok(());
        }
        let combine = self.registry.combine_duplicates();
        self.items.add(key, quantity, combine)?;
        Ok(())
    }

    /// Records an item addition from a raw link reference.
    pub fn add_item_link(&mut self, raw: &str, quantity: u64) -> Result<()> {
        let parsed = parse_item_link(raw)?;
        if let Some(name) = parsed.name {
            self.link_names.insert(parsed.key.clone(), name);
        }
        self.add_item(parsed.key, quantity)
    }

    /// Records an item addition together with caller-resolved metadata,
    /// for hosts that already hold the item in hand (e.g. a bag slot).
    /// The record takes precedence over the metadata source at emit time.
    pub fn add_item_record(
        &mut self,
        key: ItemKey,
        record: ItemRecord,
        quantity: u64,
    ) -> Result<()> {
        if !self.registry.enabled() {
            trace!(%key, quantity, "addition dropped: summary disabled");
            return Ok(());
        }
        self.record_overrides.insert(key.clone(), record);
        let combine = self.registry.combine_duplicates();
        self.items.add(key, quantity, combine)?;
        Ok(())
    }

    /// Records one currency addition. Zero amounts are legal and render as
    /// a literal zero.
    pub fn add_currency(&mut self, kind: CurrencyKind, amount: u64) -> Result<()> {
        if !self.registry.enabled() {
            trace!(%kind, amount, "addition dropped: summary disabled");
            return Ok(());
        }
        let combine = self.registry.combine_duplicates();
        self.currencies.add(kind, amount, combine)?;
        Ok(())
    }

    /// Bumps the discrete-event counter (e.g. one loot drop), independent
    /// of item quantities.
    pub fn increment_counter(&mut self, by: u64) {
        if !self.registry.enabled() {
            return;
        }
        self.counter = self.counter.saturating_add(by);
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Per-line capacity of the currently bound sink.
    pub fn sink_capacity(&self) -> usize {
        self.sink.max_chars_per_line()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.currencies.is_empty() && self.counter == 0
    }

    /// Clears accumulated entries and the counter. Idempotent.
    pub fn reset(&mut self) {
        self.items.reset();
        self.currencies.reset();
        self.counter = 0;
    }

    /// Emits the accumulated summary through the sink and resets.
    ///
    /// Zero produced lines (nothing accumulated, or everything filtered
    /// out) raise [`ApplicationError::EmptySummary`] with no output and no
    /// reset, so an unexpected silent emit cannot happen.
    pub fn print(&mut self) -> Result<()> {
        if !self.registry.enabled() {
            return Ok(());
        }

        let render = self.registry.render_options();
        let delimiter = self.registry.delimiter();
        let mode = SortMode::from_flags(self.registry.sorted(), self.registry.sorted_by_quality());

        let budget = self
            .sink
            .max_chars_per_line()
            .saturating_sub(display_width(&self.prefix))
            .saturating_sub(display_width(&self.suffix));
        let mut packer = LinePacker::new(budget, &delimiter, self.sink.supports_icon_compression());

        self.pack_items(&mut packer, mode, &render)?;
        self.pack_currencies(&mut packer, mode, &render)?;

        if self.registry.show_counter() && self.counter > 0 && packer.has_content() {
            packer.push(&format::counter_token(self.counter, &self.counter_text));
        }

        let lines = packer.finish();
        if lines.is_empty() {
            return Err(ApplicationError::EmptySummary.into());
        }
        for line in &lines {
            let wrapped = format!("{}{}{}", self.prefix, line, self.suffix);
            self.sink.print(&wrapped)?;
        }
        debug!(lines = lines.len(), "summary emitted");
        self.reset();
        Ok(())
    }

    fn pack_items(
        &self,
        packer: &mut LinePacker,
        mode: SortMode,
        render: &loot_summary_domain::options::RenderOptions,
    ) -> Result<()> {
        let mut keys = self.items.keys().to_vec();
        let infos: HashMap<ItemKey, ItemInfo> = keys
            .iter()
            .map(|key| (key.clone(), self.resolve_item(key)))
            .collect();
        sort_keys(&mut keys, mode, |key| {
            let info = &infos[key];
            SortRank {
                name: info.name.clone(),
                quality: info.quality,
            }
        });

        for key in &keys {
            let Some(quantities) = self.items.quantities(key) else {
                return Err(ApplicationError::MissingQuantities {
                    key: key.to_string(),
                }
                .into());
            };
            for token in format::item_tokens(&infos[key], quantities, render) {
                packer.push(&token);
            }
        }
        Ok(())
    }

    fn pack_currencies(
        &self,
        packer: &mut LinePacker,
        mode: SortMode,
        render: &loot_summary_domain::options::RenderOptions,
    ) -> Result<()> {
        let mut kinds = self.currencies.keys().to_vec();
        let infos: HashMap<CurrencyKind, CurrencyInfo> = kinds
            .iter()
            .map(|&kind| (kind, self.resolve_currency(kind)))
            .collect();
        sort_keys(&mut kinds, mode.for_currencies(), |kind| SortRank {
            name: infos[kind].plural.clone(),
            quality: QualityTier::MIN,
        });

        for kind in &kinds {
            let Some(amounts) = self.currencies.quantities(kind) else {
                return Err(ApplicationError::MissingQuantities {
                    key: kind.to_string(),
                }
                .into());
            };
            for &amount in amounts {
                packer.push(&format::currency_token(&infos[kind], amount, render));
            }
        }
        Ok(())
    }

    fn resolve_item(&self, key: &ItemKey) -> ItemInfo {
        let record = self
            .record_overrides
            .get(key)
            .cloned()
            .or_else(|| self.metadata.item(key));
        match record {
            Some(record) => ItemInfo {
                key: key.clone(),
                name: record.name,
                quality: record.quality,
                icon: record.icon,
                trait_name: record.trait_name,
                equippable: record.equippable,
                set_piece: record.set_piece,
                collected: record.collected,
            },
            None => {
                let mut info = ItemInfo::minimal(key);
                if let Some(name) = self.link_names.get(key) {
                    info.name = name.clone();
                }
                info
            }
        }
    }

    fn resolve_currency(&self, kind: CurrencyKind) -> CurrencyInfo {
        let record = self.metadata.currency(kind);
        CurrencyInfo {
            kind,
            singular: record.singular,
            plural: record.plural,
            icon: record.icon,
        }
    }
}
