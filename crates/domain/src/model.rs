// crates/domain/src/model.rs
use loot_summary_shared_kernel::{CurrencyKind, ItemKey, QualityTier};

/// Everything the formatter needs to know about one item entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    pub key: ItemKey,
    pub name: String,
    pub quality: QualityTier,
    /// Icon glyph reference (a texture path), rendered as inline markup.
    pub icon: Option<String>,
    pub trait_name: Option<String>,
    pub equippable: bool,
    pub set_piece: bool,
    pub collected: bool,
}

impl ItemInfo {
    /// Degraded record for items the metadata source does not know.
    /// The key text stands in for the name; nothing gets decorated.
    pub fn minimal(key: &ItemKey) -> Self {
        Self {
            key: key.clone(),
            name: key.as_str().to_string(),
            quality: QualityTier::Normal,
            icon: None,
            trait_name: None,
            equippable: false,
            set_piece: false,
            collected: false,
        }
    }
}

/// Display metadata for one currency domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub kind: CurrencyKind,
    pub singular: String,
    pub plural: String,
    pub icon: Option<String>,
}

/// One formatted display token plus the width correction the packer needs.
///
/// `icon_surplus` is the character count of the token's icon markup beyond
/// the fixed 2-unit display width per glyph. Sinks that render icons
/// compactly subtract it; the plain-text default sink does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub icon_surplus: usize,
}

impl Token {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_surplus: 0,
        }
    }
}
