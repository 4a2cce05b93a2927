use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["bps-package"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn cli_flags_override_defaults() {
    let cli = parse(&["--app-name", "BPS Beta", "--android-scheme", "http", "check"]);
    let config = cli.resolve().unwrap();
    assert_eq!(config.app_name, "BPS Beta");
    assert_eq!(config.server.android_scheme, AndroidScheme::Http);
    assert_eq!(config.app_id, "com.blockpaperscissors.app");
}

#[test]
fn resolve_fails_on_invalid_app_id() {
    let cli = parse(&["--app-id", "bps", "check"]);
    assert!(matches!(cli.resolve(), Err(PackageError::Config(ConfigError::InvalidAppId(_)))));
}

#[test]
fn write_defaults_to_shell_config_filename() {
    let cli = parse(&["write"]);
    match cli.command {
        Command::Write { out } => assert_eq!(out, PathBuf::from("capacitor.config.json")),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn write_emits_json_document() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("shell.json");
    let out_arg = out.to_str().unwrap();
    let cli = parse(&["--web-dir", "dist", "write", "--out", out_arg]);

    run(&cli).unwrap();

    let written: AppConfig = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written.web_dir, "dist");
    assert_eq!(written.app_id, "com.blockpaperscissors.app");
}

#[test]
fn write_into_missing_directory_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("shell.json");
    let cli = parse(&["write", "--out", out.to_str().unwrap()]);
    match run(&cli) {
        Err(PackageError::Write { path, .. }) => assert_eq!(path, out),
        other => panic!("expected write error, got {other:?}"),
    }
}
