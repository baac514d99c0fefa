// crates/usecase/src/controls.rs
//! Declarative option-control descriptors, consumed by an external
//! settings UI. The core only exposes current values and the schema shape;
//! rendering widgets is the host's concern.

use serde::Serialize;
use serde_json::Value;

use loot_summary_domain::options::{LinkStyle, OptionKey, OptionRegistry};
use loot_summary_shared_kernel::QualityTier;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ControlKind {
    Checkbox,
    Slider { min: u32, max: u32, step: u32 },
    Dropdown { choices: Vec<String> },
    TextField,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlDescriptor {
    pub option: String,
    pub label: String,
    #[serde(flatten)]
    pub control: ControlKind,
    /// Current resolved value for the option.
    pub value: Value,
}

fn quality_choices() -> Vec<String> {
    [
        QualityTier::Trash,
        QualityTier::Normal,
        QualityTier::Fine,
        QualityTier::Superior,
        QualityTier::Epic,
        QualityTier::Legendary,
    ]
    .iter()
    .map(|tier| tier.as_str().to_string())
    .collect()
}

fn control_for(key: OptionKey) -> (&'static str, ControlKind) {
    match key {
        OptionKey::Enabled => ("Enabled", ControlKind::Checkbox),
        OptionKey::MinQuality => (
            "Minimum quality",
            ControlKind::Dropdown {
                choices: quality_choices(),
            },
        ),
        OptionKey::ShowIcon => ("Show icons", ControlKind::Checkbox),
        OptionKey::IconSize => (
            "Icon size (%)",
            ControlKind::Slider {
                min: 20,
                max: 200,
                step: 5,
            },
        ),
        OptionKey::ShowTrait => ("Show traits", ControlKind::Checkbox),
        OptionKey::ShowNotCollected => ("Mark uncollected set pieces", ControlKind::Checkbox),
        OptionKey::CombineDuplicates => ("Combine duplicates", ControlKind::Checkbox),
        OptionKey::HideSingularQuantities => ("Hide \"x1\"", ControlKind::Checkbox),
        OptionKey::Delimiter => ("Delimiter", ControlKind::TextField),
        OptionKey::LinkStyle => (
            "Link style",
            ControlKind::Dropdown {
                choices: vec![
                    LinkStyle::Default.as_str().to_string(),
                    LinkStyle::Brackets.as_str().to_string(),
                ],
            },
        ),
        OptionKey::Sorted => ("Sort alphabetically", ControlKind::Checkbox),
        OptionKey::SortedByQuality => ("Sort by quality", ControlKind::Checkbox),
        OptionKey::ShowCounter => ("Show event counter", ControlKind::Checkbox),
    }
}

/// One descriptor per schema option, in schema order, carrying the current
/// resolved value.
pub fn control_descriptors(registry: &OptionRegistry) -> Vec<ControlDescriptor> {
    OptionKey::ALL
        .into_iter()
        .map(|key| {
            let (label, control) = control_for(key);
            let value = registry
                .get(key.name())
                .unwrap_or_else(|_| Value::Null);
            ControlDescriptor {
                option: key.name().to_string(),
                label: label.to_string(),
                control,
                value,
            }
        })
        .collect()
}
