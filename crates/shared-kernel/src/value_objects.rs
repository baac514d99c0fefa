// crates/shared-kernel/src/value_objects.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Opaque, comparable identifier for an item. Two additions with equal keys
/// are the same entity for combination purposes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidKey {
                reason: "key must not be empty".to_string(),
            });
        }
        Ok(Self(raw))
    }

    /// Canonical key for an item known only by its numeric id.
    pub fn from_numeric_id(id: u64) -> Self {
        Self(format!("item:{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency domains tracked independently of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyKind {
    Gold,
    AlliancePoints,
    TelVar,
    WritVouchers,
}

impl CurrencyKind {
    pub const ALL: [Self; 4] = [
        Self::Gold,
        Self::AlliancePoints,
        Self::TelVar,
        Self::WritVouchers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::AlliancePoints => "alliance_points",
            Self::TelVar => "tel_var",
            Self::WritVouchers => "writ_vouchers",
        }
    }
}

impl FromStr for CurrencyKind {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "gold" => Ok(Self::Gold),
            "alliance_points" => Ok(Self::AlliancePoints),
            "tel_var" => Ok(Self::TelVar),
            "writ_vouchers" => Ok(Self::WritVouchers),
            other => Err(DomainError::UnknownCurrency {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CurrencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal item quality. Ordering follows declaration order, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    #[default]
    Trash,
    Normal,
    Fine,
    Superior,
    Epic,
    Legendary,
}

impl QualityTier {
    /// Minimum tier; the built-in `minQuality` default, filtering nothing.
    pub const MIN: Self = Self::Trash;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trash => "trash",
            Self::Normal => "normal",
            Self::Fine => "fine",
            Self::Superior => "superior",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl FromStr for QualityTier {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "trash" => Ok(Self::Trash),
            "normal" => Ok(Self::Normal),
            "fine" => Ok(Self::Fine),
            "superior" => Ok(Self::Superior),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            other => Err(DomainError::UnknownQuality {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantity constraint fixed at store construction. Items must arrive with a
/// positive quantity; currencies may legitimately report zero ("0 gold").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityRule {
    Positive,
    AllowZero,
}

impl QuantityRule {
    pub fn validate(self, key: &str, quantity: u64) -> DomainResult<()> {
        if self == Self::Positive && quantity == 0 {
            return Err(DomainError::InvalidQuantity {
                key: key.to_string(),
                value: quantity,
                reason: "quantity must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_key_rejects_empty_and_blank() {
        assert!(ItemKey::new("").is_err());
        assert!(ItemKey::new("   ").is_err());
        assert!(ItemKey::new("item:1234").is_ok());
    }

    #[test]
    fn numeric_id_produces_canonical_key() {
        assert_eq!(ItemKey::from_numeric_id(45055).as_str(), "item:45055");
    }

    #[test]
    fn quality_ordering_is_ordinal() {
        assert!(QualityTier::Trash < QualityTier::Normal);
        assert!(QualityTier::Epic < QualityTier::Legendary);
        assert_eq!(QualityTier::MIN, QualityTier::Trash);
    }

    #[test]
    fn quality_round_trips_through_str() {
        for tier in [
            QualityTier::Trash,
            QualityTier::Normal,
            QualityTier::Fine,
            QualityTier::Superior,
            QualityTier::Epic,
            QualityTier::Legendary,
        ] {
            assert_eq!(tier.as_str().parse::<QualityTier>().unwrap(), tier);
        }
        assert!("artifact".parse::<QualityTier>().is_err());
    }

    #[test]
    fn currency_parse_matches_serde_names() {
        for kind in CurrencyKind::ALL {
            assert_eq!(kind.as_str().parse::<CurrencyKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn positive_rule_rejects_zero() {
        assert!(QuantityRule::Positive.validate("item:1", 0).is_err());
        assert!(QuantityRule::Positive.validate("item:1", 1).is_ok());
        assert!(QuantityRule::AllowZero.validate("gold", 0).is_ok());
    }
}
