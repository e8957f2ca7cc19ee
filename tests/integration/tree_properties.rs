use crate::integration::support::touch;
use note::error::NoteError;
use note::tree::{build_tree, WalkPolicy};
use note::types::ROOT_INDEX;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn ids_by_path(base: &std::path::Path) -> HashMap<PathBuf, usize> {
    let tree = build_tree(base, &WalkPolicy::default()).unwrap();
    tree.notes()
        .map(|n| (n.path.clone(), n.id.unwrap()))
        .collect()
}

#[test]
fn flat_list_counts_root_plus_notes() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/a.md");
    touch(temp.path(), "2024-01-01/b.md");
    touch(temp.path(), "2024-01-02/c.md");

    let tree = build_tree(temp.path(), &WalkPolicy::default()).unwrap();
    assert_eq!(tree.len(), 4);
    let root = tree.note(0).unwrap();
    assert_eq!(root.id, Some(0));
    assert!(root.is_directory());
    assert_eq!(root.path, temp.path());
}

#[test]
fn every_note_path_exists_and_is_markdown() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/a.md");
    touch(temp.path(), "2024-01-01/skip.txt");
    touch(temp.path(), "notes.md");

    let tree = build_tree(temp.path(), &WalkPolicy::default()).unwrap();
    for id in 1..tree.len() {
        let note = tree.note(id).unwrap();
        assert_eq!(note.id, Some(id));
        assert!(note.path.is_file(), "{} should exist", note.path.display());
        assert!(note.path.to_string_lossy().ends_with(".md"));
    }
}

#[test]
fn archive_subtree_is_excluded() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "archive/x.md");
    let tree = build_tree(temp.path(), &WalkPolicy::default()).unwrap();
    assert_eq!(tree.len(), 1);
}

#[test]
fn third_level_note_is_excluded() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/sub/deep.md");
    let tree = build_tree(temp.path(), &WalkPolicy::default()).unwrap();
    assert_eq!(tree.len(), 1);
}

#[test]
fn nonexistent_base_fails_without_tree() {
    let temp = TempDir::new().unwrap();
    let result = build_tree(&temp.path().join("missing"), &WalkPolicy::default());
    assert!(matches!(result, Err(NoteError::Filesystem { .. })));
}

#[test]
fn rebuilding_unchanged_tree_is_idempotent() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-05-01/x.md");
    touch(temp.path(), "2024-04-01/y.md");
    touch(temp.path(), "2024-04-01/z.md");
    touch(temp.path(), "top.md");

    assert_eq!(ids_by_path(temp.path()), ids_by_path(temp.path()));
}

#[test]
fn ids_shift_after_a_new_note() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-04-01/b.md");
    let before = ids_by_path(temp.path());
    touch(temp.path(), "2024-04-01/a.md");
    let after = ids_by_path(temp.path());
    let b = temp.path().join("2024-04-01/b.md");
    assert_eq!(before[&b], 1);
    assert_eq!(after[&b], 2);
}

#[test]
fn max_depth_one_keeps_only_top_level_notes() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-04-01/b.md");
    touch(temp.path(), "top.md");
    let policy = WalkPolicy {
        max_depth: 1,
        ..WalkPolicy::default()
    };
    let tree = build_tree(temp.path(), &policy).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.note(1).unwrap().name, "top.md");
    let day = tree.sorted_children(ROOT_INDEX)[0].1;
    assert_eq!(day.name, "2024-04-01");
    assert!(day.children.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ids_are_dense_and_cover_every_note(
        notes in prop::collection::vec((0u8..3, "[a-z]{1,6}"), 0..12),
        junk in prop::collection::vec("[a-z]{1,6}", 0..4),
    ) {
        let temp = TempDir::new().unwrap();
        let mut expected = BTreeSet::new();
        for (day, name) in &notes {
            let rel = format!("2024-01-0{}/{}.md", day + 1, name);
            touch(temp.path(), &rel);
            expected.insert(temp.path().join(rel));
        }
        for name in &junk {
            touch(temp.path(), &format!("archive/{}.md", name));
            touch(temp.path(), &format!("2024-01-01/{}.txt", name));
        }
        fs::create_dir_all(temp.path().join("2024-01-01/nested")).unwrap();

        let tree = build_tree(temp.path(), &WalkPolicy::default()).unwrap();
        prop_assert_eq!(tree.len(), 1 + expected.len());

        let seen: BTreeSet<PathBuf> = tree.notes().map(|n| n.path.clone()).collect();
        prop_assert_eq!(&seen, &expected);

        let ids: Vec<usize> = tree.notes().map(|n| n.id.unwrap()).collect();
        let dense: Vec<usize> = (1..=expected.len()).collect();
        prop_assert_eq!(ids, dense);
    }
}
