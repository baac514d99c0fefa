// crates/ports/src/metadata.rs
use serde::{Deserialize, Serialize};

use loot_summary_shared_kernel::{CurrencyKind, ItemKey, QualityTier};

/// DTO describing one item as reported by a metadata source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    #[serde(default)]
    pub quality: QualityTier,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, rename = "trait")]
    pub trait_name: Option<String>,
    #[serde(default)]
    pub equippable: bool,
    #[serde(default)]
    pub set_piece: bool,
    #[serde(default)]
    pub collected: bool,
}

/// DTO describing one currency's display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRecord {
    pub singular: String,
    pub plural: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Port for looking up display metadata. Lookups are synchronous and
/// side-effect-free from the core's perspective.
pub trait MetadataSource {
    /// `None` when the source does not know the item; callers degrade to a
    /// minimal record rather than failing.
    fn item(&self, key: &ItemKey) -> Option<ItemRecord>;

    fn currency(&self, kind: CurrencyKind) -> CurrencyRecord;
}
