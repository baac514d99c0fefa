// tests/common/mod.rs
//! 共通テストユーティリティ
#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use tempfile::NamedTempFile;

use loot_summary::{ChatSink, JsonCatalog, SummaryBuilder, SummaryEngine};
use loot_summary_core::InfraResult;

/// Catalog shared by the integration tests. Token widths matter to the
/// packing assertions: "Rubedite Sword x1" is 17 wide, "Ancestor Silk x1"
/// is 16.
pub const SAMPLE_CATALOG: &str = r#"{
    "items": {
        "item:1": {
            "name": "Rubedite Sword",
            "quality": "fine",
            "icon": "icons/sword.dds",
            "trait": "Sharpened",
            "equippable": true
        },
        "item:2": {
            "name": "Ancestor Silk",
            "quality": "epic",
            "set_piece": true
        },
        "item:3": {
            "name": "Bone",
            "quality": "trash"
        }
    },
    "currencies": {
        "gold": { "singular": "gold", "plural": "gold" }
    }
}"#;

/// Sink handing its captured lines back through a shared handle.
pub struct SharedSink {
    capacity: usize,
    compress_icons: bool,
    lines: Rc<RefCell<Vec<String>>>,
}

impl SharedSink {
    pub fn new(capacity: usize, compress_icons: bool) -> (Self, Rc<RefCell<Vec<String>>>) {
        let lines = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                capacity,
                compress_icons,
                lines: Rc::clone(&lines),
            },
            lines,
        )
    }
}

impl ChatSink for SharedSink {
    fn max_chars_per_line(&self) -> usize {
        self.capacity
    }

    fn supports_icon_compression(&self) -> bool {
        self.compress_icons
    }

    fn print(&mut self, line: &str) -> InfraResult<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

/// Engine over the sample catalog with a capturing sink.
pub fn engine(capacity: usize) -> (SummaryEngine, Rc<RefCell<Vec<String>>>) {
    engine_with(capacity, false)
}

pub fn engine_with(
    capacity: usize,
    compress_icons: bool,
) -> (SummaryEngine, Rc<RefCell<Vec<String>>>) {
    let (sink, lines) = SharedSink::new(capacity, compress_icons);
    let catalog = JsonCatalog::from_json(SAMPLE_CATALOG).expect("sample catalog parses");
    let engine = SummaryBuilder::new()
        .metadata(Box::new(catalog))
        .sink(Box::new(sink))
        .build();
    (engine, lines)
}

/// Writes `contents` to a fresh temp file and returns its handle.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
