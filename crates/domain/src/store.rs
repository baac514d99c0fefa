// crates/domain/src/store.rs
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use loot_summary_shared_kernel::{DomainResult, QuantityRule};

/// Mapping-based accumulator of (key -> quantities) preserving first-seen
/// insertion order of keys.
///
/// Invariants: `order` contains each key exactly once, in the order first
/// seen; `entries[key]` is never empty while the key is present in `order`.
#[derive(Debug, Clone)]
pub struct EntryStore<K> {
    entries: HashMap<K, Vec<u64>>,
    order: Vec<K>,
    rule: QuantityRule,
}

impl<K> EntryStore<K>
where
    K: Eq + Hash + Clone + Display,
{
    pub fn new(rule: QuantityRule) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            rule,
        }
    }

    /// Records one addition. An unseen key starts a one-element sequence;
    /// a seen key either sums into the first element (`combine`) or appends
    /// a separate element, which later yields one output token per element.
    pub fn add(&mut self, key: K, quantity: u64, combine: bool) -> DomainResult<()> {
        self.rule.validate(&key.to_string(), quantity)?;
        match self.entries.get_mut(&key) {
            Some(quantities) if combine => {
                quantities[0] = quantities[0].saturating_add(quantity);
            }
            Some(quantities) => quantities.push(quantity),
            None => {
                self.entries.insert(key.clone(), vec![quantity]);
                self.order.push(key);
            }
        }
        Ok(())
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    pub fn quantities(&self, key: &K) -> Option<&[u64]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Clears the map and the order sequence. Idempotent.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
