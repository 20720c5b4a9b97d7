use super::*;

use clap::CommandFactory;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn slim_defaults() {
    let cli = Cli::try_parse_from(["tmdl-slim", "slim"]).unwrap();
    let Commands::Slim(args) = cli.command else {
        panic!("expected slim subcommand");
    };
    assert_eq!(args.root, PathBuf::from("."));
    assert!(args.output.is_none());
    assert_eq!(args.format, ReportFormat::Text);
    assert!(!args.keep.keep_lineage);
}

#[test]
fn slim_with_flags() {
    let cli = Cli::try_parse_from([
        "tmdl-slim",
        "slim",
        "model",
        "-o",
        "out.tmdl",
        "--format",
        "json",
        "--keep-lineage",
        "--keep-display",
    ])
    .unwrap();
    let Commands::Slim(args) = cli.command else {
        panic!("expected slim subcommand");
    };
    assert_eq!(args.root, PathBuf::from("model"));
    assert_eq!(args.output, Some(PathBuf::from("out.tmdl")));
    assert_eq!(args.format, ReportFormat::Json);
    assert!(args.keep.keep_lineage);
    assert!(args.keep.keep_display);
    assert!(!args.keep.keep_annotations);
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["tmdl-slim", "slim", "-v", "-v", "--quiet"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["tmdl-slim", "slim", "--format", "yaml"]).is_err());
}

#[test]
fn init_defaults() {
    let cli = Cli::try_parse_from(["tmdl-slim", "init"]).unwrap();
    let Commands::Init(args) = cli.command else {
        panic!("expected init subcommand");
    };
    assert_eq!(args.output, PathBuf::from(".tmdl-slim.toml"));
    assert!(!args.force);
}
