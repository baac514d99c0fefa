// crates/infra/src/catalog.rs
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use loot_summary_ports::metadata::{CurrencyRecord, ItemRecord, MetadataSource};
use loot_summary_shared_kernel::{CurrencyKind, InfraResult, InfrastructureError, ItemKey};

/// On-disk catalog document. Items are keyed by canonical entry key;
/// currency records are optional and fall back to built-in names.
#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    items: HashMap<String, ItemRecord>,
    #[serde(default)]
    currencies: HashMap<CurrencyKind, CurrencyRecord>,
}

/// Metadata source backed by a JSON catalog file.
#[derive(Debug, Default)]
pub struct JsonCatalog {
    items: HashMap<String, ItemRecord>,
    currencies: HashMap<CurrencyKind, CurrencyRecord>,
}

impl JsonCatalog {
    /// An empty catalog: every item degrades to its minimal record and
    /// currencies use built-in names.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_path(path: &Path) -> InfraResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| InfrastructureError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            items = catalog.items.len(),
            currencies = catalog.currencies.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> InfraResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(raw)?;
        Ok(Self {
            items: doc.items,
            currencies: doc.currencies,
        })
    }

    fn built_in_currency(kind: CurrencyKind) -> CurrencyRecord {
        let (singular, plural) = match kind {
            CurrencyKind::Gold => ("gold", "gold"),
            CurrencyKind::AlliancePoints => ("alliance point", "alliance points"),
            CurrencyKind::TelVar => ("Tel Var stone", "Tel Var stones"),
            CurrencyKind::WritVouchers => ("writ voucher", "writ vouchers"),
        };
        CurrencyRecord {
            singular: singular.to_string(),
            plural: plural.to_string(),
            icon: None,
        }
    }
}

impl MetadataSource for JsonCatalog {
    fn item(&self, key: &ItemKey) -> Option<ItemRecord> {
        self.items.get(key.as_str()).cloned()
    }

    fn currency(&self, kind: CurrencyKind) -> CurrencyRecord {
        self.currencies
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Self::built_in_currency(kind))
    }
}
