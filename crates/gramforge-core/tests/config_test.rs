use clap::{CommandFactory, FromArgMatches, Parser};
use gramforge_core::config::{Config, FilterSettings};
use gramforge_core::table::TableKind;
use std::fs;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command()
        .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
        .expect("arguments should parse");
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.filters, FilterSettings::default());
    assert!(config.filters.filter_whitespace);
    assert_eq!(config.view.table, TableKind::Monograms);
    assert_eq!(config.view.limit, 0);
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (config, _) = parse(&[]);
    assert_eq!(config, Config::default());
}

#[test]
fn test_cli_flags() {
    let (config, _) = parse(&[
        "--filter-whitespace",
        "false",
        "--filter-punctuation",
        "--case-sensitive",
        "--table",
        "words",
        "-q",
        "th",
        "--limit",
        "5",
    ]);
    assert!(!config.filters.filter_whitespace);
    assert!(config.filters.filter_punctuation);
    assert!(config.filters.case_sensitive);
    assert_eq!(config.view.table, TableKind::Words);
    assert_eq!(config.view.query, "th");
    assert_eq!(config.view.limit, 5);
}

#[test]
fn test_file_values_survive_unless_overridden() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "filters": { "filterPunctuation": true, "caseSensitive": true },
             "view": { "table": "bigrams", "limit": 20 } }"#,
    )
    .unwrap();

    let mut config = Config::load_from_file(&path).unwrap();
    assert!(config.filters.filter_whitespace, "missing keys take defaults");
    assert!(config.filters.filter_punctuation);
    assert_eq!(config.view.table, TableKind::Bigrams);

    let (cli, matches) = parse(&["--limit", "3"]);
    config.merge_from_cli(&cli, &matches);

    assert_eq!(config.view.limit, 3, "explicit CLI value wins");
    assert_eq!(config.view.table, TableKind::Bigrams, "CLI default does not clobber file");
    assert!(config.filters.case_sensitive);
}

#[test]
fn test_bad_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.contains("parse"), "{}", err);
}
