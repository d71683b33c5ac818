// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Golden file tests for printing and event order.
//!
//! # Updating Golden Files
//!
//! When making intentional changes to printer or traversal behavior:
//! ```bash
//! CSTWALK_UPDATE_GOLDEN=1 cargo test -p cstwalk-cst --test golden
//! git diff tests/golden/  # Review changes
//! ```
//!
//! # Test Organization
//!
//! - Input trees (JSON arrays of root nodes): `tests/golden/trees/`
//! - Expected output: `tests/golden/output/`
//!   - `{name}.groovy`: `SourcePrinter` output
//!   - `{name}_events.json`: source-order event trace (if present)

use std::fs;
use std::path::PathBuf;

use cstwalk_cst::{print_source, traverse_source_order, EventRecorder, PrinterConfig, SyntaxNode};

fn trees_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("trees")
}

fn output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("output")
}

fn update_mode() -> bool {
    std::env::var("CSTWALK_UPDATE_GOLDEN").is_ok()
}

fn load_tree(name: &str) -> Vec<SyntaxNode> {
    let path = trees_dir().join(format!("{name}.json"));
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read tree {path:?}: {e}"));
    serde_json::from_str(&json).unwrap_or_else(|e| panic!("Failed to parse tree {path:?}: {e}"))
}

fn assert_golden_text(file_name: &str, actual: &str) {
    let golden_path = output_dir().join(file_name);
    let actual = format!("{actual}\n");

    if update_mode() {
        fs::create_dir_all(output_dir()).expect("Failed to create output directory");
        fs::write(&golden_path, &actual).expect("Failed to write golden file");
        eprintln!("Updated golden file: {golden_path:?}");
    } else {
        let expected = fs::read_to_string(&golden_path)
            .unwrap_or_else(|e| panic!("Failed to read golden file {golden_path:?}: {e}"));
        assert_eq!(actual, expected, "Golden test failed for {file_name}");
    }
}

fn assert_golden_events(name: &str, actual: &[String]) {
    let golden_path = output_dir().join(format!("{name}_events.json"));

    if update_mode() {
        let json = serde_json::to_string_pretty(actual).expect("Failed to serialize");
        fs::write(&golden_path, json + "\n").expect("Failed to write golden file");
        eprintln!("Updated golden file: {golden_path:?}");
    } else {
        let content = fs::read_to_string(&golden_path)
            .unwrap_or_else(|e| panic!("Failed to read golden file {golden_path:?}: {e}"));
        let expected: Vec<String> = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse golden file {golden_path:?}: {e}"));
        assert_eq!(actual, expected.as_slice(), "Golden events failed for {name}");
    }
}

fn check_print(name: &str) {
    let roots = load_tree(name);
    let text = print_source(&roots, &PrinterConfig::default())
        .unwrap_or_else(|e| panic!("Failed to print {name}: {e}"));
    assert_golden_text(&format!("{name}.groovy"), &text);
}

fn check_events(name: &str) {
    let roots = load_tree(name);
    let mut recorder = EventRecorder::new();
    traverse_source_order(&roots, &mut recorder)
        .unwrap_or_else(|e| panic!("Failed to walk {name}: {e}"));
    assert!(recorder.is_well_nested(), "unbalanced events for {name}");
    assert_golden_events(name, &recorder.trace());
}

#[test]
fn golden_while_loop_print() {
    check_print("while_loop");
}

#[test]
fn golden_while_loop_events() {
    check_events("while_loop");
}

#[test]
fn golden_closure_gstring_print() {
    check_print("closure_gstring");
}

#[test]
fn golden_class_switch_print() {
    check_print("class_switch");
}

#[test]
fn golden_blank_lines_print() {
    check_print("blank_lines");
}
