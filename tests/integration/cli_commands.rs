use crate::integration::support::{context, touch};
use note::error::NoteError;
use note::tooling::cli::Commands;
use std::fs;
use tempfile::TempDir;

fn list_text(ctx: &note::tooling::cli::CliContext) -> String {
    ctx.execute(&Commands::List {
        format: "text".to_string(),
    })
    .unwrap()
}

#[test]
fn new_without_editor_creates_dated_note() {
    let temp = TempDir::new().unwrap();
    let ctx = context(temp.path());
    let output = ctx
        .execute(&Commands::New {
            title: Some("standup".to_string()),
            no_edit: true,
        })
        .unwrap();
    assert!(output.starts_with("Created new note: "));

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert!(temp.path().join(&today).join("standup.md").is_file());
}

#[test]
fn list_numbers_notes_in_tree_order() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/b.md");
    touch(temp.path(), "2024-01-01/a.md");
    touch(temp.path(), "archive/old.md");
    let ctx = context(temp.path());

    let output = list_text(&ctx);
    assert_eq!(
        output,
        "Notes:\n└── 2024-01-01\n    ├── (1) a.md\n    └── (2) b.md"
    );
}

#[test]
fn list_json_reports_ids_and_paths() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/a.md");
    let ctx = context(temp.path());
    let output = ctx
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], 1);
    assert_eq!(entries[0]["name"], "a.md");
    assert!(entries[0]["path"].as_str().unwrap().ends_with("a.md"));
}

#[test]
fn list_rejects_unknown_format() {
    let temp = TempDir::new().unwrap();
    let ctx = context(temp.path());
    assert!(ctx
        .execute(&Commands::List {
            format: "yaml".to_string()
        })
        .is_err());
}

#[test]
fn list_on_missing_base_is_filesystem_error() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp.path().join("missing"));
    let err = ctx
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, NoteError::Filesystem { .. }));
}

#[test]
fn rename_by_id_appends_suffix() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/a.md");
    let ctx = context(temp.path());
    let output = ctx
        .execute(&Commands::Rename {
            id: 1,
            new_name: "agenda".to_string(),
        })
        .unwrap();
    assert!(output.contains("agenda.md"));
    assert!(temp.path().join("2024-01-01/agenda.md").is_file());
    assert!(!temp.path().join("2024-01-01/a.md").exists());
}

#[test]
fn rename_out_of_range_is_reported() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/a.md");
    let ctx = context(temp.path());
    let err = ctx
        .execute(&Commands::Rename {
            id: 5,
            new_name: "x".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, NoteError::IdOutOfRange { id: 5, count: 1 }));
}

#[test]
fn remove_with_yes_deletes_the_note() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/a.md");
    touch(temp.path(), "2024-01-01/b.md");
    let ctx = context(temp.path());
    let output = ctx.execute(&Commands::Rm { id: 1, yes: true }).unwrap();
    assert!(output.starts_with("Removed"));
    assert!(!temp.path().join("2024-01-01/a.md").exists());
    assert!(temp.path().join("2024-01-01/b.md").exists());

    // b.md is now the only note and takes id 1.
    assert!(list_text(&ctx).contains("(1) b.md"));
}

#[test]
fn remove_root_id_is_rejected() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/a.md");
    let ctx = context(temp.path());
    let err = ctx.execute(&Commands::Rm { id: 0, yes: true }).unwrap_err();
    assert!(matches!(err, NoteError::IdOutOfRange { id: 0, .. }));
    assert!(temp.path().join("2024-01-01/a.md").exists());
}

#[cfg(unix)]
#[test]
fn open_by_id_runs_editor() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/a.md");
    let ctx = context(temp.path());
    assert_eq!(ctx.execute(&Commands::Open { id: Some(1) }).unwrap(), "");
}

#[cfg(unix)]
#[test]
fn open_default_note_creates_base() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("notes");
    let ctx = context(&base);
    ctx.execute(&Commands::Open { id: None }).unwrap();
    assert!(base.is_dir());
}

#[cfg(unix)]
#[test]
fn new_with_editor_returns_created_notice() {
    let temp = TempDir::new().unwrap();
    let ctx = context(temp.path());
    let output = ctx
        .execute(&Commands::New {
            title: Some("retro".to_string()),
            no_edit: false,
        })
        .unwrap();
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let path = temp.path().join(&today).join("retro.md");
    assert_eq!(output, format!("Created new note: {}", path.display()));
    assert!(path.is_file());
}

#[test]
fn open_with_empty_base_reports_no_notes() {
    let temp = TempDir::new().unwrap();
    let ctx = context(temp.path());
    let err = ctx.execute(&Commands::Open { id: Some(1) }).unwrap_err();
    assert!(matches!(err, NoteError::NoNotes));
}

#[test]
fn clean_removes_empty_day_folders() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "2024-01-01/a.md");
    fs::create_dir_all(temp.path().join("2024-01-02")).unwrap();
    let ctx = context(temp.path());
    let output = ctx.execute(&Commands::Clean).unwrap();
    assert_eq!(output, "Removed empty folders: 2024-01-02");
    assert_eq!(ctx.execute(&Commands::Clean).unwrap(), "No empty folders.");
}

#[test]
fn stash_outside_repo_fails() {
    let temp = TempDir::new().unwrap();
    let ctx = context(temp.path());
    let err = ctx
        .execute(&Commands::Stash { message: None })
        .unwrap_err();
    assert!(matches!(err, NoteError::Git { .. }));
}
