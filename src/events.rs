// src/events.rs
//! JSON Lines event stream: one loot event per line. Blank lines and
//! `#`-prefixed comment lines are skipped.

use std::io::BufRead;

use anyhow::Context;
use serde::Deserialize;

use loot_summary_core::CurrencyKind;

fn default_quantity() -> u64 {
    1
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LootEvent {
    /// An item addition by canonical key.
    Item {
        key: String,
        #[serde(default = "default_quantity")]
        quantity: u64,
    },
    /// An item addition by raw link reference.
    ItemLink {
        link: String,
        #[serde(default = "default_quantity")]
        quantity: u64,
    },
    /// A currency addition. Zero amounts are legal.
    Currency { kind: CurrencyKind, amount: u64 },
    /// One discrete loot event for the counter.
    Count {
        #[serde(default = "default_quantity")]
        by: u64,
    },
}

pub fn read_events(reader: impl BufRead) -> anyhow::Result<Vec<LootEvent>> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading event line {}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event: LootEvent = serde_json::from_str(trimmed)
            .with_context(|| format!("parsing event line {}: {trimmed}", index + 1))?;
        events.push(event);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_mixed_stream() {
        let input = concat!(
            "# morning run\n",
            "{\"type\":\"item\",\"key\":\"item:1\",\"quantity\":3}\n",
            "\n",
            "{\"type\":\"item_link\",\"link\":\"|H1:item:7|h[Bone]|h\"}\n",
            "{\"type\":\"currency\",\"kind\":\"gold\",\"amount\":250}\n",
            "{\"type\":\"count\"}\n",
        );
        let events = read_events(input.as_bytes()).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            LootEvent::Item {
                key: "item:1".to_string(),
                quantity: 3
            }
        );
        assert_eq!(
            events[1],
            LootEvent::ItemLink {
                link: "|H1:item:7|h[Bone]|h".to_string(),
                quantity: 1
            }
        );
        assert_eq!(
            events[2],
            LootEvent::Currency {
                kind: CurrencyKind::Gold,
                amount: 250
            }
        );
        assert_eq!(events[3], LootEvent::Count { by: 1 });
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let input = "{\"type\":\"item\",\"key\":\"a\"}\nnot-json\n";
        let err = read_events(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let input = "{\"type\":\"achievement\",\"key\":\"a\"}\n";
        assert!(read_events(input.as_bytes()).is_err());
    }
}
