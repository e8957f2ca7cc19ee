use clap::{CommandFactory, Parser};
use note::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["note"],
        vec!["note", "7"],
        vec!["note", "open"],
        vec!["note", "open", "2"],
        vec!["note", "new"],
        vec!["note", "new", "standup", "--no-edit"],
        vec!["note", "list"],
        vec!["note", "list", "--format", "json"],
        vec!["note", "rename", "3", "agenda"],
        vec!["note", "rm", "3"],
        vec!["note", "rm", "3", "-y"],
        vec!["note", "init", "--yes"],
        vec!["note", "clean"],
        vec!["note", "stash", "wip"],
        vec!["note", "list", "--config", "/tmp/note.toml", "--log-level", "debug"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_non_numeric_ids() {
    assert!(Cli::try_parse_from(["note", "rename", "abc", "x"]).is_err());
    assert!(Cli::try_parse_from(["note", "rm", "-1"]).is_err());
    assert!(Cli::try_parse_from(["note", "rename", "3"]).is_err());
}

#[test]
fn subcommand_wins_over_bare_id() {
    let cli = Cli::try_parse_from(["note", "list"]).unwrap();
    assert_eq!(
        cli.resolved_command(),
        Commands::List {
            format: "text".to_string()
        }
    );
}

#[test]
fn help_lists_every_command() {
    let help = Cli::command().render_long_help().to_string();
    for name in ["open", "new", "list", "rename", "rm", "init", "clean", "stash"] {
        assert!(help.contains(name), "help should mention {name}");
    }
}
