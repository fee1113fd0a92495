//! End-to-end tests for the "Connect Nodes" action against real files:
//! read-modify-write on relations.json, everything else untouched.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use pan_graph::{Error, NodeRef, Pan, PanStore};

fn write_fixture_assets(dir: &Path) {
    fs::write(
        dir.join("products.json"),
        r#"[{"data": {"id": "p1", "label": "Gear"}, "position": {"x": 0, "y": 0}}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("processes.json"),
        r#"[{"data": {"id": "m1", "label": "Milling"}, "position": {"x": 0, "y": 40}}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("resources.json"),
        r#"[{"data": {"id": "r1", "label": "Lathe"}, "position": {"x": 0, "y": 80}}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("relations.json"),
        r#"[{"data": {"source": "p1", "target": "m1"}}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("pan_stylesheet.json"),
        r#"[{"selector": "node", "style": {"content": "data(label)"}}]"#,
    )
    .unwrap();
}

// ============================================================================
// 1. Connect appends exactly one trailing relation
// ============================================================================

#[test]
fn connect_appends_one_trailing_relation() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_assets(dir.path());
    let pan = Pan::open(dir.path());

    let before = pan.refresh(1).unwrap().snapshot;
    pan.connect(&[NodeRef::new("m1"), NodeRef::new("r1")]).unwrap();
    let after = pan.refresh(2).unwrap().snapshot;

    assert_eq!(after.len(), before.len() + 1);
    let last = after.elements().last().unwrap().as_relation().unwrap();
    assert_eq!(last.source().as_str(), "m1");
    assert_eq!(last.target().as_str(), "r1");
}

// ============================================================================
// 2. Invalid selections leave the file byte-for-byte unchanged
// ============================================================================

#[test]
fn invalid_selection_leaves_relations_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_assets(dir.path());
    let relations_path = dir.path().join("relations.json");
    let before = fs::read(&relations_path).unwrap();
    let pan = Pan::open(dir.path());

    let err = pan.connect(&[]).unwrap_err();
    assert!(matches!(err, Error::InvalidSelection(0)), "got {err:?}");

    let err = pan.connect(&[NodeRef::new("p1")]).unwrap_err();
    assert!(matches!(err, Error::InvalidSelection(1)), "got {err:?}");

    assert_eq!(fs::read(&relations_path).unwrap(), before);
}

// ============================================================================
// 3. No deduplication: repeating a pair appends identical entries
// ============================================================================

#[test]
fn repeated_pair_appends_identical_entries() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_assets(dir.path());
    let pan = Pan::open(dir.path());

    let selection = [NodeRef::new("p1"), NodeRef::new("r1")];
    pan.connect(&selection).unwrap();
    pan.connect(&selection).unwrap();

    let relations = pan.store().load_relations().unwrap();
    assert_eq!(relations.len(), 3);
    assert_eq!(relations[1], relations[2]);
}

// ============================================================================
// 4. Connecting unknown ids is permitted (endpoints checked at render time)
// ============================================================================

#[test]
fn connect_does_not_validate_endpoint_existence() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_assets(dir.path());
    let pan = Pan::open(dir.path());

    pan.connect(&[NodeRef::new("p1"), NodeRef::new("no-such-node")])
        .unwrap();

    let snapshot = pan.refresh(1).unwrap().snapshot;
    assert_eq!(snapshot.dangling().len(), 1);
}

// ============================================================================
// 5. Style and graph lifecycles are independent
// ============================================================================

#[test]
fn connect_does_not_disturb_the_stylesheet() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_assets(dir.path());
    let pan = Pan::open(dir.path());

    let before = pan.refresh_style().unwrap();
    pan.connect(&[NodeRef::new("p1"), NodeRef::new("r1")]).unwrap();
    let after = pan.refresh_style().unwrap();

    assert_eq!(before, after);
}

// ============================================================================
// 6. Other collections are never written by a connect
// ============================================================================

#[test]
fn connect_writes_only_the_relations_file() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_assets(dir.path());
    let products_before = fs::read(dir.path().join("products.json")).unwrap();
    let style_before = fs::read(dir.path().join("pan_stylesheet.json")).unwrap();
    let pan = Pan::open(dir.path());

    pan.connect(&[NodeRef::new("p1"), NodeRef::new("m1")]).unwrap();

    assert_eq!(fs::read(dir.path().join("products.json")).unwrap(), products_before);
    assert_eq!(
        fs::read(dir.path().join("pan_stylesheet.json")).unwrap(),
        style_before
    );
}
