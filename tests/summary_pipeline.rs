// tests/summary_pipeline.rs
//! End-to-end library tests: events in, packed chat lines out.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use common::engine;
use loot_summary::{CurrencyKind, ItemKey, QualityTier};
use loot_summary_core::options::SettingsTree;

fn key(id: u64) -> ItemKey {
    ItemKey::from_numeric_id(id)
}

#[test]
fn combined_duplicates_merge_into_one_token() {
    let (mut e, lines) = engine(100);
    e.add_item(key(1), 5).unwrap();
    e.add_item(key(1), 3).unwrap();
    e.print().unwrap();
    assert_eq!(lines.borrow().as_slice(), ["Rubedite Sword x8"]);
}

#[test]
fn uncombined_duplicates_stay_separate() {
    let (mut e, lines) = engine(100);
    e.options_mut().set_combine_duplicates(false);
    e.add_item(key(1), 5).unwrap();
    e.add_item(key(1), 3).unwrap();
    e.print().unwrap();
    assert_eq!(
        lines.borrow().as_slice(),
        ["Rubedite Sword x5 Rubedite Sword x3"]
    );
}

#[test]
fn one_character_over_capacity_wraps() {
    // "Rubedite Sword x1 Ancestor Silk x1" is 34 display units.
    let (mut e, lines) = engine(33);
    e.add_item(key(1), 1).unwrap();
    e.add_item(key(2), 1).unwrap();
    e.print().unwrap();
    assert_eq!(
        lines.borrow().as_slice(),
        ["Rubedite Sword x1", "Ancestor Silk x1"]
    );
}

#[test]
fn exactly_at_capacity_stays_on_one_line() {
    let (mut e, lines) = engine(34);
    e.add_item(key(1), 1).unwrap();
    e.add_item(key(2), 1).unwrap();
    e.print().unwrap();
    assert_eq!(
        lines.borrow().as_slice(),
        ["Rubedite Sword x1 Ancestor Silk x1"]
    );
}

#[test]
fn quality_floor_excludes_items_entirely() {
    let (mut e, lines) = engine(100);
    e.options_mut().set_min_quality(QualityTier::Epic);
    e.add_item(key(1), 1).unwrap();
    e.add_item(key(2), 1).unwrap();
    e.add_item(key(3), 1).unwrap();
    e.print().unwrap();
    assert_eq!(lines.borrow().as_slice(), ["Ancestor Silk x1"]);
}

#[test]
fn filtering_everything_raises_empty_summary() {
    let (mut e, lines) = engine(100);
    e.options_mut().set_min_quality(QualityTier::Legendary);
    e.add_item(key(1), 4).unwrap();
    assert!(e.print().is_err());
    assert!(lines.borrow().is_empty());
}

#[test]
fn quality_sort_orders_tiers_descending() {
    let (mut e, lines) = engine(200);
    e.options_mut().set_sorted_by_quality(true);
    e.add_item(key(3), 1).unwrap();
    e.add_item(key(1), 1).unwrap();
    e.add_item(key(2), 1).unwrap();
    e.print().unwrap();
    assert_eq!(
        lines.borrow().as_slice(),
        ["Ancestor Silk x1 Rubedite Sword x1 Bone x1"]
    );
}

#[test]
fn currencies_pack_after_items() {
    let (mut e, lines) = engine(200);
    e.add_currency(CurrencyKind::Gold, 12345).unwrap();
    e.add_item(key(3), 2).unwrap();
    e.print().unwrap();
    assert_eq!(lines.borrow().as_slice(), ["Bone x2 gold x12,345"]);
}

#[test]
fn zero_currency_amount_prints_literally() {
    let (mut e, lines) = engine(200);
    e.add_currency(CurrencyKind::Gold, 0).unwrap();
    e.print().unwrap();
    assert_eq!(lines.borrow().as_slice(), ["gold x0"]);
}

#[test]
fn newline_delimiter_forces_breaks_inside_a_line() {
    let (mut e, lines) = engine(200);
    e.options_mut().set_delimiter("\n");
    e.add_item(key(1), 1).unwrap();
    e.add_item(key(2), 1).unwrap();
    e.print().unwrap();
    assert_eq!(
        lines.borrow().as_slice(),
        ["\nRubedite Sword x1\nAncestor Silk x1"]
    );
}

#[test]
fn emit_resets_so_a_second_print_is_empty() {
    let (mut e, lines) = engine(100);
    e.add_item(key(1), 2).unwrap();
    e.print().unwrap();
    assert!(e.print().is_err());
    assert_eq!(lines.borrow().len(), 1);
}

#[test]
fn icon_compression_changes_packing_only_when_supported() {
    // With icons on, each token is 45 raw display units but only 20 after
    // compression (27-char markup renders 2 wide).
    let run = |compress: bool| {
        let (mut e, lines) = common::engine_with(41, compress);
        e.options_mut().set_show_icon(true);
        e.options_mut().set_combine_duplicates(false);
        e.add_item(key(1), 1).unwrap();
        e.add_item(key(1), 1).unwrap();
        e.print().unwrap();
        let count = lines.borrow().len();
        count
    };
    assert_eq!(run(false), 2);
    assert_eq!(run(true), 1);
}

#[test]
fn trait_and_collection_markers_render() {
    let (mut e, lines) = engine(200);
    e.options_mut().set_show_trait(true);
    e.options_mut().set_show_not_collected(true);
    e.add_item(key(1), 1).unwrap();
    e.add_item(key(2), 1).unwrap();
    e.print().unwrap();
    let printed = lines.borrow();
    assert!(printed[0].contains("Rubedite Sword (Sharpened) x1"));
    assert!(printed[0].contains("Ancestor Silk |t"));
}

#[test]
fn legacy_icons_option_migrates_through_binding() {
    let (mut e, lines) = engine(200);
    let options_root = Rc::new(RefCell::new(json!({ "icons": true })));
    let defaults_root = Rc::new(RefCell::new(json!({})));
    e.bind_settings(
        SettingsTree::new(Rc::clone(&options_root), Vec::<String>::new()),
        SettingsTree::new(defaults_root, Vec::<String>::new()),
    );
    assert_eq!(e.options().get("showIcon").unwrap(), json!(true));
    assert!(options_root.borrow().get("icons").is_none());

    e.add_item(key(1), 1).unwrap();
    e.print().unwrap();
    assert!(lines.borrow()[0].contains("|t90%:90%:icons/sword.dds|t"));
}

#[test]
fn bound_settings_see_external_edits_without_rebinding() {
    let (mut e, _lines) = engine(200);
    let options_root = Rc::new(RefCell::new(json!({ "profile": {} })));
    let defaults_root = Rc::new(RefCell::new(json!({})));
    e.bind_settings(
        SettingsTree::new(Rc::clone(&options_root), ["profile"]),
        SettingsTree::new(defaults_root, ["profile"]),
    );
    assert!(!e.options().sorted());
    options_root.borrow_mut()["profile"]["sorted"] = json!(true);
    assert!(e.options().sorted());
}

#[test]
fn output_is_deterministic_across_runs() {
    let run = || {
        let (mut e, lines) = engine(40);
        e.options_mut().set_sorted(true);
        e.add_item(key(2), 2).unwrap();
        e.add_item(key(1), 1).unwrap();
        e.add_item(key(3), 7).unwrap();
        e.add_currency(CurrencyKind::Gold, 90).unwrap();
        e.print().unwrap();
        let out = lines.borrow().clone();
        out
    };
    assert_eq!(run(), run());
}
