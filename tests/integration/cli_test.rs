use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use gitree::{
    cli::{args::Mode, Args, Command},
    config::{load_config_with_env_prefix, CliArgs},
    models::{CheckMode, OutputFormat},
};

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("gitree.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from([
        "gitree",
        "--mode",
        "stray",
        "--output",
        "json",
        "--output-file",
        "results.json",
        "--max-entries",
        "100",
        "--quiet",
        "--no-colors",
        "/git/",
    ]);

    assert_eq!(args.path, Some(PathBuf::from("/git/")));
    assert_eq!(args.mode, Some(Mode::Stray));
    assert_eq!(args.output_file, Some(PathBuf::from("results.json")));
    assert_eq!(args.max_entries, Some(100));
    assert!(args.quiet);
    assert!(args.no_colors);
    assert!(!args.verbose);
    assert!(!args.progress);
}

#[test]
fn test_cli_invalid_output_format() {
    assert!(Args::try_parse_from(["gitree", "--output", "xml"]).is_err());
}

#[test]
fn test_init_command_selected() {
    let command = Command::from_args(Args::parse_from(["gitree", "--init"]));
    assert!(matches!(command, Command::Init));

    let command = Command::from_args(Args::parse_from(["gitree", "/git"]));
    assert!(matches!(command, Command::Audit(_)));
}

#[test]
fn test_cli_overrides_config_file() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(temp_dir.path(), "mode = \"layout\"\noutput_format = \"csv\"\n");

    let args = Args::parse_from([
        "gitree",
        "--config",
        config.to_str().unwrap(),
        "--mode",
        "non-bare",
        temp_dir.path().to_str().unwrap(),
    ]);

    let settings = load_config_with_env_prefix(CliArgs::from(&args), "GITREE_CLI_OVERRIDE").unwrap();

    assert_eq!(settings.mode, CheckMode::NonBare);
    assert_eq!(settings.output_format, OutputFormat::Csv);
    assert_eq!(settings.scan_path, temp_dir.path());
}

#[test]
fn test_run_reports_success_with_warnings() {
    let temp_dir = tempdir().unwrap();
    let tree = temp_dir.path().join("tree");
    fs::create_dir(&tree).unwrap();
    fs::write(tree.join("stray.txt"), "x").unwrap();

    let config = write_config(temp_dir.path(), "");
    let report = temp_dir.path().join("report.txt");

    let args = Args::parse_from([
        "gitree",
        "--config",
        config.to_str().unwrap(),
        "--no-colors",
        "--output-file",
        report.to_str().unwrap(),
        tree.to_str().unwrap(),
    ]);

    assert_eq!(Command::from_args(args).run(), 0);

    let output = fs::read_to_string(&report).unwrap();
    assert!(output.starts_with(&format!("Checking {}\n", tree.display())));
    assert!(output.contains(&format!("WARNING: {} not in a git tree", tree.join("stray.txt").display())));
    assert!(output.ends_with("1 files not in a git tree\n"));
}

#[test]
fn test_run_exit_codes() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(temp_dir.path(), "");
    let tree = temp_dir.path().join("tree");
    fs::create_dir(&tree).unwrap();
    fs::write(tree.join("a"), "a").unwrap();
    fs::write(tree.join("b"), "b").unwrap();

    let bounded = Args::parse_from([
        "gitree",
        "--config",
        config.to_str().unwrap(),
        "--max-entries",
        "1",
        "--quiet",
        "--output-file",
        temp_dir.path().join("out.txt").to_str().unwrap(),
        tree.to_str().unwrap(),
    ]);
    assert_eq!(Command::from_args(bounded).run(), 253);

    let missing = Args::parse_from([
        "gitree",
        "--config",
        config.to_str().unwrap(),
        temp_dir.path().join("missing").to_str().unwrap(),
    ]);
    assert_eq!(Command::from_args(missing).run(), 1);
}

#[cfg(unix)]
#[test]
fn test_run_exit_code_for_unreadable_directory() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempdir().unwrap();
    let config = write_config(temp_dir.path(), "");
    let tree = temp_dir.path().join("tree");
    let locked = tree.join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // privileged users read through the mode bits
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let args = Args::parse_from([
        "gitree",
        "--config",
        config.to_str().unwrap(),
        "--no-colors",
        "--output-file",
        temp_dir.path().join("out.txt").to_str().unwrap(),
        tree.to_str().unwrap(),
    ]);
    let status = Command::from_args(args).run();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(status, 255);

    // lines streamed before the failure are kept
    let output = fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
    assert_eq!(output, format!("Checking {}\n", tree.display()));
}

#[test]
fn test_output_file_is_plain_text_by_default() {
    let temp_dir = tempdir().unwrap();
    let tree = temp_dir.path().join("tree");
    fs::create_dir(&tree).unwrap();
    fs::write(tree.join("stray.txt"), "x").unwrap();

    let config = write_config(temp_dir.path(), "");
    let report = temp_dir.path().join("report.txt");

    let args = Args::parse_from([
        "gitree",
        "--config",
        config.to_str().unwrap(),
        "--output-file",
        report.to_str().unwrap(),
        tree.to_str().unwrap(),
    ]);
    assert_eq!(Command::from_args(args).run(), 0);

    let output = fs::read_to_string(&report).unwrap();
    assert!(!output.contains('\u{1b}'));
    assert!(output.contains(&format!("\nWARNING: {} not in a git tree\n", tree.join("stray.txt").display())));
}

#[test]
fn test_output_file_inside_tree_is_not_audited() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(temp_dir.path(), "");
    let tree = temp_dir.path().join("tree");
    fs::create_dir(&tree).unwrap();
    let report = tree.join("report.txt");

    // the second run finds the first run's report already on disk
    for _ in 0..2 {
        let args = Args::parse_from([
            "gitree",
            "--config",
            config.to_str().unwrap(),
            "--no-colors",
            "--output-file",
            report.to_str().unwrap(),
            tree.to_str().unwrap(),
        ]);
        assert_eq!(Command::from_args(args).run(), 0);

        let output = fs::read_to_string(&report).unwrap();
        assert!(!output.contains("WARNING:"));
        assert!(output.ends_with("0 files not in a git tree\n"));
    }
}
