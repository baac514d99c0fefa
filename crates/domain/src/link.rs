// crates/domain/src/link.rs
//! Raw item-link dissection. Links look like
//! `|H1:item:45055:30:...|h[Rubedite Sword]|h`; the leading style digit and
//! the trailing data fields vary, the numeric id identifies the item.

use std::sync::OnceLock;

use regex::Regex;

use loot_summary_shared_kernel::{DomainError, DomainResult, ItemKey};

static LINK_RE: OnceLock<Regex> = OnceLock::new();

fn link_re() -> &'static Regex {
    LINK_RE.get_or_init(|| {
        Regex::new(r"^\|H(?P<style>\d+):item:(?P<id>\d+)(?::[0-9-]*)*\|h(?:\[(?P<name>[^\[\]|]*)\])?\|h$")
            .expect("item link pattern is valid")
    })
}

/// Outcome of parsing one raw link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLink {
    /// Canonical key. The style digit is dropped so the same item arriving
    /// with different display styles combines under one entry.
    pub key: ItemKey,
    /// Embedded display name, when the link carries one.
    pub name: Option<String>,
}

pub fn parse_item_link(raw: &str) -> DomainResult<ParsedLink> {
    let malformed = || DomainError::MalformedLink {
        link: raw.to_string(),
    };
    let caps = link_re().captures(raw.trim()).ok_or_else(|| malformed())?;
    let id: u64 = caps["id"].parse().map_err(|_| malformed())?;
    let name = caps
        .name("name")
        .map(|m| m.as_str().to_string())
        .filter(|n| !n.is_empty());
    Ok(ParsedLink {
        key: ItemKey::from_numeric_id(id),
        name,
    })
}
