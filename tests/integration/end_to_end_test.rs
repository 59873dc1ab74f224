//! End-to-end tests for gitree
//!
//! A mirror tree resembling a real hosting root: bare repositories, a
//! working copy, stray files and a badly named repository, audited through
//! configuration loading, the walk and the output layer.

use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use gitree::{
    cli::{audit, Args, Command},
    config::{create_default_config, load_config_with_env_prefix, parse_config_file, CliArgs},
    error::Result,
    models::{CheckMode, Classification, OutputFormat},
};

fn create_repository(dir: &Path, extra: &[&str]) -> Result<()> {
    fs::create_dir_all(dir.join("objects").join("info"))?;
    fs::create_dir_all(dir.join("refs").join("tags"))?;
    fs::create_dir_all(dir.join("hooks"))?;
    fs::write(dir.join("HEAD"), "ref: refs/heads/main\n")?;
    fs::write(dir.join("description"), "mirror\n")?;
    fs::write(dir.join("packed-refs"), "")?;
    for name in extra {
        fs::write(dir.join(name), "x")?;
    }
    Ok(())
}

/// git/
///   kernel/linux.git          clean
///   kernel/tools.git          holds config.orig
///   tools/build               missing the .git suffix
///   work/app/.git             working copy, app/ holds Makefile
///   README                    stray
fn create_mirror(root: &Path) -> Result<()> {
    create_repository(&root.join("kernel").join("linux.git"), &[])?;
    create_repository(&root.join("kernel").join("tools.git"), &["config.orig"])?;
    create_repository(&root.join("tools").join("build"), &[])?;
    create_repository(&root.join("work").join("app").join(".git"), &["index", "ORIG_HEAD"])?;
    fs::write(root.join("work").join("app").join("Makefile"), "all:\n")?;
    fs::write(root.join("README"), "mirror root\n")?;
    Ok(())
}

#[test]
fn test_full_audit_of_mirror() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join("git");
    create_mirror(&root)?;

    let cli_args = CliArgs {
        path: Some(root.clone()),
        no_colors: true,
        config: Some(write_empty_config(temp_dir.path())?),
        ..Default::default()
    };
    let settings = load_config_with_env_prefix(cli_args, "GITREE_E2E_FULL")?;

    let mut output = String::new();
    let report = audit(&settings, &mut output)?;

    assert_eq!(report.counts.layout_violation, 1);
    assert_eq!(report.counts.bad_name_suffix, 1);
    assert_eq!(report.counts.non_bare_layout, 1);
    assert_eq!(report.counts.stray_file, 2);
    assert_eq!(report.repositories.len(), 4);
    assert_eq!(
        report
            .repositories
            .iter()
            .filter(|r| r.classification == Classification::NonBareRoot)
            .count(),
        1
    );

    assert!(output.contains(&format!(
        "WARNING: {} breaks Git repo layout rule",
        root.join("kernel").join("tools.git").join("config.orig").display()
    )));
    assert!(output.contains(&format!("WARNING: {} not in a git tree", root.join("README").display())));
    assert!(output.contains(&format!(
        "WARNING: {} not in a git tree",
        root.join("work").join("app").join("Makefile").display()
    )));
    assert!(output.contains("2 files not in a git tree\n"));
    Ok(())
}

#[test]
fn test_repeated_audits_are_identical() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join("git");
    create_mirror(&root)?;

    let cli_args = CliArgs {
        path: Some(root),
        no_colors: true,
        config: Some(write_empty_config(temp_dir.path())?),
        ..Default::default()
    };
    let settings = load_config_with_env_prefix(cli_args, "GITREE_E2E_REPEAT")?;

    let mut first = String::new();
    let mut second = String::new();
    audit(&settings, &mut first)?;
    audit(&settings, &mut second)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_default_config_round_trip() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join(".gitree.toml");

    create_default_config(&config_path)?;
    let partial = parse_config_file(&config_path)?;
    assert!(partial.mode.is_none());

    // uncomment two settings the way a user would
    let edited = fs::read_to_string(&config_path)?
        .replace("# mode = \"all\"", "mode = \"stray\"")
        .replace("# output_format = \"text\"", "output_format = \"json\"");
    fs::write(&config_path, edited)?;

    let root = temp_dir.path().join("git");
    create_mirror(&root)?;

    let cli_args = CliArgs {
        path: Some(root),
        config: Some(config_path),
        ..Default::default()
    };
    let settings = load_config_with_env_prefix(cli_args, "GITREE_E2E_DEFAULT")?;
    assert_eq!(settings.mode, CheckMode::Stray);
    assert_eq!(settings.output_format, OutputFormat::Json);

    let mut output = String::new();
    let report = audit(&settings, &mut output)?;
    assert_eq!(report.warnings.len(), 2);

    let value: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(value["mode"], "stray");
    assert_eq!(value["counts"]["stray_file"], 2);
    assert_eq!(value["counts"]["layout_violation"], 0);
    Ok(())
}

#[test]
fn test_command_writes_csv_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join("git");
    create_mirror(&root)?;
    let config = write_empty_config(temp_dir.path())?;
    let report_path = temp_dir.path().join("report.csv");

    let args = Args::parse_from([
        "gitree".to_string(),
        "--config".to_string(),
        config.display().to_string(),
        "--mode".to_string(),
        "layout".to_string(),
        "--output".to_string(),
        "csv".to_string(),
        "--output-file".to_string(),
        report_path.display().to_string(),
        format!("{}/", root.display()),
    ]);
    assert_eq!(Command::from_args(args).run(), 0);

    let csv = fs::read_to_string(&report_path)?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "category,path,detail");
    assert_eq!(lines.len(), 3);
    assert!(lines.contains(&format!("bad-name-suffix,{},name not terminated with .git", root.join("tools").join("build").display()).as_str()));
    Ok(())
}

fn write_empty_config(dir: &Path) -> Result<std::path::PathBuf> {
    let path = dir.join("empty.toml");
    fs::write(&path, "")?;
    Ok(path)
}
