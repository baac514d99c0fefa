// crates/domain/src/options.rs
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde_json::{Map, Value};

use loot_summary_shared_kernel::{DomainError, DomainResult, QualityTier};

/// Entity reference rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    #[default]
    Default,
    Brackets,
}

impl LinkStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Brackets => "brackets",
        }
    }
}

impl FromStr for LinkStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "default" => Ok(Self::Default),
            "brackets" => Ok(Self::Brackets),
            other => Err(DomainError::InvalidOptionValue {
                name: "linkStyle".to_string(),
                details: format!("unknown style '{other}'"),
            }),
        }
    }
}

/// The fixed option schema. Names outside this set are rejected by `get`
/// and silently ignored by `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Enabled,
    MinQuality,
    ShowIcon,
    IconSize,
    ShowTrait,
    ShowNotCollected,
    CombineDuplicates,
    HideSingularQuantities,
    Delimiter,
    LinkStyle,
    Sorted,
    SortedByQuality,
    ShowCounter,
}

impl OptionKey {
    pub const ALL: [Self; 13] = [
        Self::Enabled,
        Self::MinQuality,
        Self::ShowIcon,
        Self::IconSize,
        Self::ShowTrait,
        Self::ShowNotCollected,
        Self::CombineDuplicates,
        Self::HideSingularQuantities,
        Self::Delimiter,
        Self::LinkStyle,
        Self::Sorted,
        Self::SortedByQuality,
        Self::ShowCounter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::MinQuality => "minQuality",
            Self::ShowIcon => "showIcon",
            Self::IconSize => "iconSize",
            Self::ShowTrait => "showTrait",
            Self::ShowNotCollected => "showNotCollected",
            Self::CombineDuplicates => "combineDuplicates",
            Self::HideSingularQuantities => "hideSingularQuantities",
            Self::Delimiter => "delimiter",
            Self::LinkStyle => "linkStyle",
            Self::Sorted => "sorted",
            Self::SortedByQuality => "sortedByQuality",
            Self::ShowCounter => "showCounter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Built-in default, the last tier of resolution.
    fn built_in(self) -> Value {
        match self {
            Self::Enabled => Value::Bool(true),
            Self::MinQuality => Value::String(QualityTier::MIN.as_str().to_string()),
            Self::ShowIcon => Value::Bool(false),
            Self::IconSize => Value::from(90u32),
            Self::ShowTrait => Value::Bool(false),
            Self::ShowNotCollected => Value::Bool(false),
            Self::CombineDuplicates => Value::Bool(true),
            Self::HideSingularQuantities => Value::Bool(false),
            Self::Delimiter => Value::String(" ".to_string()),
            Self::LinkStyle => Value::String(LinkStyle::Default.as_str().to_string()),
            Self::Sorted => Value::Bool(false),
            Self::SortedByQuality => Value::Bool(false),
            Self::ShowCounter => Value::Bool(false),
        }
    }

    /// A value of the wrong shape at one resolution tier counts as absent.
    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Enabled
            | Self::ShowIcon
            | Self::ShowTrait
            | Self::ShowNotCollected
            | Self::CombineDuplicates
            | Self::HideSingularQuantities
            | Self::Sorted
            | Self::SortedByQuality
            | Self::ShowCounter => value.is_boolean(),
            Self::IconSize => value.as_u64().is_some(),
            Self::Delimiter => value.is_string(),
            Self::MinQuality => value
                .as_str()
                .is_some_and(|s| s.parse::<QualityTier>().is_ok()),
            Self::LinkStyle => value
                .as_str()
                .is_some_and(|s| s.parse::<LinkStyle>().is_ok()),
        }
    }
}

/// Renamed legacy keys migrated on bind: old name -> current name.
const LEGACY_RENAMES: [(&str, &str); 2] = [("icons", "showIcon"), ("counter", "showCounter")];

/// Live view into a nested object of an externally owned settings tree.
///
/// The root is shared, the path is resolved fresh on every access, so the
/// owner may replace whole subtrees (or the object at the path) between
/// accesses without re-binding.
#[derive(Clone)]
pub struct SettingsTree {
    root: Rc<RefCell<Value>>,
    path: Vec<String>,
}

impl fmt::Debug for SettingsTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsTree")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SettingsTree {
    pub fn new<S: Into<String>>(root: Rc<RefCell<Value>>, path: impl IntoIterator<Item = S>) -> Self {
        Self {
            root,
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    fn read(&self, name: &str) -> Option<Value> {
        let root = self.root.borrow();
        let mut node: &Value = &root;
        for segment in &self.path {
            node = node.get(segment)?;
        }
        node.get(name).cloned()
    }

    fn write(&self, name: &str, value: Value) {
        let mut root = self.root.borrow_mut();
        let mut node: &mut Value = &mut root;
        for segment in &self.path {
            node = ensure_object(node)
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        ensure_object(node).insert(name.to_string(), value);
    }

    fn remove(&self, name: &str) -> Option<Value> {
        let mut root = self.root.borrow_mut();
        let mut node: &mut Value = &mut root;
        for segment in &self.path {
            node = node.get_mut(segment)?;
        }
        node.as_object_mut()?.remove(name)
    }
}

/// Coerces a node to an object, replacing non-object values on write paths.
fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just coerced to an object"),
    }
}

/// One resolution tier: session-local map or a bound external tree.
#[derive(Debug, Clone)]
enum Store {
    Local(Map<String, Value>),
    Bound(SettingsTree),
}

impl Store {
    fn read(&self, name: &str) -> Option<Value> {
        match self {
            Self::Local(map) => map.get(name).cloned(),
            Self::Bound(tree) => tree.read(name),
        }
    }

    fn write(&mut self, name: &str, value: Value) {
        match self {
            Self::Local(map) => {
                map.insert(name.to_string(), value);
            }
            Self::Bound(tree) => tree.write(name, value),
        }
    }

    fn remove(&mut self, name: &str) -> Option<Value> {
        match self {
            Self::Local(map) => map.remove(name),
            Self::Bound(tree) => tree.remove(name),
        }
    }
}

/// Snapshot of the presentation-relevant options, handed to the formatter
/// so it stays pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub min_quality: QualityTier,
    pub show_icon: bool,
    pub icon_size: u32,
    pub show_trait: bool,
    pub show_not_collected: bool,
    pub hide_singular: bool,
    pub link_style: LinkStyle,
}

/// Validated key/value configuration with three-tier resolution:
/// session value, then external default, then built-in default.
#[derive(Debug)]
pub struct OptionRegistry {
    options: Store,
    defaults: Store,
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self {
            options: Store::Local(Map::new()),
            defaults: Store::Local(Map::new()),
        }
    }

    /// Rebinds both tiers to live views inside externally owned trees and
    /// migrates renamed legacy keys in each.
    pub fn bind(&mut self, options: SettingsTree, defaults: SettingsTree) {
        self.options = Store::Bound(options);
        self.defaults = Store::Bound(defaults);
        self.migrate_legacy_keys();
    }

    fn migrate_legacy_keys(&mut self) {
        for store in [&mut self.options, &mut self.defaults] {
            for (old, new) in LEGACY_RENAMES {
                if let Some(value) = store.remove(old) {
                    if store.read(new).is_none() {
                        store.write(new, value);
                    }
                }
            }
        }
    }

    /// Raw resolved value. Unknown names are an error here; `set` is the
    /// lenient side of the pair.
    pub fn get(&self, name: &str) -> DomainResult<Value> {
        let key = OptionKey::from_name(name).ok_or_else(|| DomainError::UnknownOption {
            name: name.to_string(),
        })?;
        Ok(self.lookup(key))
    }

    /// Stores a session value. Unknown names are silently ignored so saved
    /// settings written by newer versions keep loading; a known name with a
    /// value of the wrong shape is a hard error.
    pub fn set(&mut self, name: &str, value: Value) -> DomainResult<()> {
        let Some(key) = OptionKey::from_name(name) else {
            return Ok(());
        };
        if !key.accepts(&value) {
            return Err(DomainError::InvalidOptionValue {
                name: name.to_string(),
                details: format!("rejected value {value}"),
            });
        }
        self.options.write(name, value);
        Ok(())
    }

    fn lookup(&self, key: OptionKey) -> Value {
        for store in [&self.options, &self.defaults] {
            if let Some(value) = store.read(key.name()) {
                if key.accepts(&value) {
                    return value;
                }
            }
        }
        key.built_in()
    }

    fn bool_value(&self, key: OptionKey) -> bool {
        self.lookup(key).as_bool().unwrap_or(false)
    }

    pub fn enabled(&self) -> bool {
        self.bool_value(OptionKey::Enabled)
    }

    pub fn min_quality(&self) -> QualityTier {
        self.lookup(OptionKey::MinQuality)
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or(QualityTier::MIN)
    }

    pub fn show_icon(&self) -> bool {
        self.bool_value(OptionKey::ShowIcon)
    }

    pub fn icon_size(&self) -> u32 {
        self.lookup(OptionKey::IconSize)
            .as_u64()
            .map_or(90, |v| v.min(u64::from(u32::MAX)) as u32)
    }

    pub fn show_trait(&self) -> bool {
        self.bool_value(OptionKey::ShowTrait)
    }

    pub fn show_not_collected(&self) -> bool {
        self.bool_value(OptionKey::ShowNotCollected)
    }

    pub fn combine_duplicates(&self) -> bool {
        self.bool_value(OptionKey::CombineDuplicates)
    }

    pub fn hide_singular_quantities(&self) -> bool {
        self.bool_value(OptionKey::HideSingularQuantities)
    }

    pub fn delimiter(&self) -> String {
        self.lookup(OptionKey::Delimiter)
            .as_str()
            .unwrap_or(" ")
            .to_string()
    }

    pub fn link_style(&self) -> LinkStyle {
        self.lookup(OptionKey::LinkStyle)
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn sorted(&self) -> bool {
        self.bool_value(OptionKey::Sorted)
    }

    pub fn sorted_by_quality(&self) -> bool {
        self.bool_value(OptionKey::SortedByQuality)
    }

    pub fn show_counter(&self) -> bool {
        self.bool_value(OptionKey::ShowCounter)
    }

    pub fn set_enabled(&mut self, value: bool) {
        self.options.write(OptionKey::Enabled.name(), Value::Bool(value));
    }

    pub fn set_min_quality(&mut self, tier: QualityTier) {
        self.options.write(
            OptionKey::MinQuality.name(),
            Value::String(tier.as_str().to_string()),
        );
    }

    pub fn set_show_icon(&mut self, value: bool) {
        self.options.write(OptionKey::ShowIcon.name(), Value::Bool(value));
    }

    pub fn set_icon_size(&mut self, percent: u32) {
        self.options.write(OptionKey::IconSize.name(), Value::from(percent));
    }

    pub fn set_show_trait(&mut self, value: bool) {
        self.options.write(OptionKey::ShowTrait.name(), Value::Bool(value));
    }

    pub fn set_show_not_collected(&mut self, value: bool) {
        self.options
            .write(OptionKey::ShowNotCollected.name(), Value::Bool(value));
    }

    pub fn set_combine_duplicates(&mut self, value: bool) {
        self.options
            .write(OptionKey::CombineDuplicates.name(), Value::Bool(value));
    }

    pub fn set_hide_singular_quantities(&mut self, value: bool) {
        self.options
            .write(OptionKey::HideSingularQuantities.name(), Value::Bool(value));
    }

    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) {
        self.options
            .write(OptionKey::Delimiter.name(), Value::String(delimiter.into()));
    }

    pub fn set_link_style(&mut self, style: LinkStyle) {
        self.options.write(
            OptionKey::LinkStyle.name(),
            Value::String(style.as_str().to_string()),
        );
    }

    pub fn set_sorted(&mut self, value: bool) {
        self.options.write(OptionKey::Sorted.name(), Value::Bool(value));
    }

    pub fn set_sorted_by_quality(&mut self, value: bool) {
        self.options
            .write(OptionKey::SortedByQuality.name(), Value::Bool(value));
    }

    pub fn set_show_counter(&mut self, value: bool) {
        self.options
            .write(OptionKey::ShowCounter.name(), Value::Bool(value));
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            min_quality: self.min_quality(),
            show_icon: self.show_icon(),
            icon_size: self.icon_size(),
            show_trait: self.show_trait(),
            show_not_collected: self.show_not_collected(),
            hide_singular: self.hide_singular_quantities(),
            link_style: self.link_style(),
        }
    }
}
