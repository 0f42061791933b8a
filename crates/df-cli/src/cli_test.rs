use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn export_takes_two_optional_positionals() {
    let cli = Cli::try_parse_from(["daforfer", "export", "my.duckdb", "out.xlsx"]).unwrap();
    let Commands::Export(args) = cli.command else {
        panic!("expected export");
    };
    assert_eq!(args.db_path, Some(PathBuf::from("my.duckdb")));
    assert_eq!(args.output_path, Some(PathBuf::from("out.xlsx")));
    assert!(!args.strict_sheet_names);
}

#[test]
fn export_strict_flag_and_global_verbose() {
    let cli = Cli::try_parse_from([
        "daforfer",
        "export",
        "my.duckdb",
        "--strict-sheet-names",
        "-v",
    ])
    .unwrap();
    assert!(cli.global.verbose);
    let Commands::Export(args) = cli.command else {
        panic!("expected export");
    };
    assert!(args.strict_sheet_names);
    assert_eq!(args.output_path, None);
}

#[test]
fn show_requires_table() {
    assert!(Cli::try_parse_from(["daforfer", "show"]).is_err());

    let cli = Cli::try_parse_from(["daforfer", "show", "table1", "my.duckdb", "--json"]).unwrap();
    let Commands::Show(args) = cli.command else {
        panic!("expected show");
    };
    assert_eq!(args.table, "table1");
    assert_eq!(args.db_path, Some(PathBuf::from("my.duckdb")));
    assert!(args.json);
}

#[test]
fn config_flag_is_global() {
    let cli = Cli::try_parse_from(["daforfer", "toc", "-c", "custom.yml"]).unwrap();
    assert_eq!(cli.global.config, Some(PathBuf::from("custom.yml")));
    assert!(matches!(cli.command, Commands::Toc(_)));
}
