// src/app.rs
use std::cell::RefCell;
use std::fs;
use std::io::{self, BufReader};
use std::rc::Rc;

use anyhow::Context;
use tracing::info;

use loot_summary_core::options::SettingsTree;
use loot_summary_core::pack::display_width;
use loot_summary_core::{
    ChatSink, InfraResult, ItemKey, JsonCatalog, MetadataSource, StdoutChatSink, SummaryBuilder,
    SummaryEngine, DEFAULT_CHAT_LINE_CAPACITY,
};

use crate::config::{Config, OptionOverrides};
use crate::events::{read_events, LootEvent};

/// Sink used by `--dry-run`: captures lines so their metrics can be
/// reported instead of emitting them.
struct CaptureSink {
    capacity: usize,
    lines: Rc<RefCell<Vec<String>>>,
}

impl ChatSink for CaptureSink {
    fn max_chars_per_line(&self) -> usize {
        self.capacity
    }

    fn print(&mut self, line: &str) -> InfraResult<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

pub fn run(config: &Config) -> anyhow::Result<()> {
    let metadata: Box<dyn MetadataSource> = match &config.catalog {
        Some(path) => Box::new(
            JsonCatalog::from_path(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
        ),
        None => Box::new(JsonCatalog::empty()),
    };

    let capacity = config.capacity.unwrap_or(DEFAULT_CHAT_LINE_CAPACITY);
    let captured = config
        .dry_run
        .then(|| Rc::new(RefCell::new(Vec::<String>::new())));
    let sink: Box<dyn ChatSink> = match &captured {
        Some(lines) => Box::new(CaptureSink {
            capacity,
            lines: Rc::clone(lines),
        }),
        None => Box::new(StdoutChatSink::with_capacity(capacity)),
    };

    let mut builder = SummaryBuilder::new()
        .metadata(metadata)
        .sink(sink)
        .prefix(config.prefix.clone().unwrap_or_default())
        .suffix(config.suffix.clone().unwrap_or_default());
    if let Some(noun) = &config.counter_text {
        builder = builder.counter_text(noun.clone());
    }
    let mut engine = builder.build();

    if let Some(path) = &config.options_file {
        bind_saved_options(&mut engine, path)?;
    }
    apply_overrides(&mut engine, &config.overrides);

    let events = match &config.events {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("opening event stream {}", path.display()))?;
            read_events(BufReader::new(file))?
        }
        None => read_events(io::stdin().lock())?,
    };
    info!(events = events.len(), "replaying event stream");

    for event in events {
        apply_event(&mut engine, event)?;
    }
    engine.print().context("emitting summary")?;

    if let Some(lines) = captured {
        let lines = lines.borrow();
        eprintln!("dry run: {} line(s), capacity {capacity}", lines.len());
        for (index, line) in lines.iter().enumerate() {
            eprintln!("  line {}: {} chars: {line}", index + 1, display_width(line));
        }
    }
    Ok(())
}

/// Binds a saved options document as the external options tree; the
/// defaults tier stays an empty document owned by the process.
fn bind_saved_options(engine: &mut SummaryEngine, path: &std::path::Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading options document {}", path.display()))?;
    let doc: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing options document {}", path.display()))?;
    let options_root = Rc::new(RefCell::new(doc));
    let defaults_root = Rc::new(RefCell::new(serde_json::Value::Object(Default::default())));
    engine.bind_settings(
        SettingsTree::new(options_root, Vec::<String>::new()),
        SettingsTree::new(defaults_root, Vec::<String>::new()),
    );
    Ok(())
}

fn apply_overrides(engine: &mut SummaryEngine, overrides: &OptionOverrides) {
    let options = engine.options_mut();
    if overrides.sorted {
        options.set_sorted(true);
    }
    if overrides.sorted_by_quality {
        options.set_sorted_by_quality(true);
    }
    if let Some(tier) = overrides.min_quality {
        options.set_min_quality(tier);
    }
    if overrides.show_icon {
        options.set_show_icon(true);
    }
    if let Some(size) = overrides.icon_size {
        options.set_icon_size(size);
    }
    if overrides.show_trait {
        options.set_show_trait(true);
    }
    if overrides.show_not_collected {
        options.set_show_not_collected(true);
    }
    if overrides.no_combine {
        options.set_combine_duplicates(false);
    }
    if overrides.hide_singular {
        options.set_hide_singular_quantities(true);
    }
    if let Some(delimiter) = &overrides.delimiter {
        options.set_delimiter(delimiter.clone());
    }
    if let Some(style) = overrides.link_style {
        options.set_link_style(style);
    }
    if overrides.show_counter {
        options.set_show_counter(true);
    }
}

fn apply_event(engine: &mut SummaryEngine, event: LootEvent) -> anyhow::Result<()> {
    match event {
        LootEvent::Item { key, quantity } => {
            let key = ItemKey::new(key)?;
            engine.add_item(key, quantity)?;
        }
        LootEvent::ItemLink { link, quantity } => {
            engine.add_item_link(&link, quantity)?;
        }
        LootEvent::Currency { kind, amount } => {
            engine.add_currency(kind, amount)?;
        }
        LootEvent::Count { by } => engine.increment_counter(by),
    }
    Ok(())
}
