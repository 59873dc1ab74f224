use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use gitree::{
    core::{FsLister, Walker},
    error::{GitreeError, Result},
    models::{CheckMode, Classification, Detection, Settings, WarningCategory},
};

/// Lay out a minimal repository at `dir`
fn create_repository(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir.join("objects").join("pack"))?;
    fs::create_dir_all(dir.join("refs").join("heads"))?;
    fs::write(dir.join("HEAD"), "ref: refs/heads/main\n")?;
    fs::write(dir.join("config"), "[core]\n\tbare = true\n")?;
    Ok(())
}

fn settings_for(root: &Path, mode: CheckMode) -> Settings {
    Settings {
        scan_path: root.to_path_buf(),
        mode,
        ..Settings::default()
    }
}

fn paths_in(report: &gitree::AuditReport, category: WarningCategory) -> Vec<PathBuf> {
    report.warnings_in(category).map(|w| w.path.clone()).collect()
}

#[test]
fn test_working_copy_project() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();

    let git_dir = root.join("proj").join(".git");
    create_repository(&git_dir)?;
    fs::write(root.join("proj").join("README.md"), "hello\n")?;

    let report = Walker::new(&settings_for(root, CheckMode::All)).audit(root)?;

    assert_eq!(paths_in(&report, WarningCategory::StrayFile), vec![root.join("proj").join("README.md")]);
    assert_eq!(paths_in(&report, WarningCategory::NonBareLayout), vec![git_dir.clone()]);
    assert_eq!(report.counts.layout_violation, 0);
    assert_eq!(report.counts.bad_name_suffix, 0);

    assert_eq!(report.repositories.len(), 1);
    assert_eq!(report.repositories[0].path, git_dir);
    assert_eq!(report.repositories[0].classification, Classification::NonBareRoot);
    Ok(())
}

#[test]
fn test_bare_repository_with_junk() -> Result<()> {
    let temp_dir = tempdir()?;
    let bare = temp_dir.path().join("tools.git");
    create_repository(&bare)?;
    fs::write(bare.join("junk.bin"), [0u8; 4])?;
    fs::create_dir(bare.join("worktree"))?;

    let report = Walker::new(&settings_for(temp_dir.path(), CheckMode::All)).audit(&bare)?;

    assert_eq!(
        paths_in(&report, WarningCategory::LayoutViolation),
        vec![bare.join("junk.bin"), bare.join("worktree")]
    );
    assert_eq!(report.counts.total(), 2);
    assert_eq!(report.repositories[0].classification, Classification::BareRoot);
    assert_eq!(report.repositories[0].detection, Detection::Content);
    Ok(())
}

#[test]
fn test_non_bare_root_without_head() -> Result<()> {
    let temp_dir = tempdir()?;
    let work = temp_dir.path().join("work");
    fs::create_dir_all(work.join(".git").join("objects"))?;
    fs::create_dir_all(work.join(".git").join("refs"))?;

    let report = Walker::new(&settings_for(&work, CheckMode::All)).audit(&work)?;

    assert_eq!(paths_in(&report, WarningCategory::NonBareLayout), vec![work.join(".git")]);
    assert_eq!(report.counts.total(), 1);
    Ok(())
}

#[test]
fn test_repository_contents_are_not_walked() -> Result<()> {
    let temp_dir = tempdir()?;
    let bare = temp_dir.path().join("a.git");
    create_repository(&bare)?;
    fs::write(bare.join("objects").join("pack").join("loose.txt"), "x")?;

    let report = Walker::new(&settings_for(temp_dir.path(), CheckMode::All)).audit(temp_dir.path())?;

    assert!(report.warnings.is_empty());
    // the root and the repository, nothing below it
    assert_eq!(report.directories_visited, 2);
    Ok(())
}

#[test]
fn test_named_repository_without_markers() -> Result<()> {
    let temp_dir = tempdir()?;
    let empty = temp_dir.path().join("empty.git");
    fs::create_dir(&empty)?;
    fs::write(empty.join("notes.txt"), "x")?;

    let report = Walker::new(&settings_for(temp_dir.path(), CheckMode::All)).audit(temp_dir.path())?;

    assert_eq!(paths_in(&report, WarningCategory::LayoutViolation), vec![empty.join("notes.txt")]);
    assert_eq!(report.counts.stray_file, 0);
    assert_eq!(report.repositories[0].detection, Detection::Name);
    assert!(!report.repositories[0].has_markers);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_followed() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join("root");
    let elsewhere = temp_dir.path().join("elsewhere");
    fs::create_dir(&root)?;
    fs::create_dir(&elsewhere)?;
    fs::write(elsewhere.join("stray.txt"), "x")?;
    std::os::unix::fs::symlink(&elsewhere, root.join("link"))?;

    let report = Walker::new(&settings_for(&root, CheckMode::All)).audit(&root)?;

    assert!(report.warnings.is_empty());
    assert_eq!(report.directories_visited, 1);
    Ok(())
}

#[test]
fn test_entry_bound_aborts() -> Result<()> {
    let temp_dir = tempdir()?;
    for name in ["a", "b", "c", "d"] {
        fs::write(temp_dir.path().join(name), name)?;
    }

    let walker = Walker::with_lister(FsLister, CheckMode::All, 3);
    let err = walker.audit(temp_dir.path()).unwrap_err();

    assert!(matches!(err, GitreeError::TooManyEntries { limit: 3, .. }));
    assert_eq!(err.exit_code(), 253);

    // exactly at the bound is fine
    let walker = Walker::with_lister(FsLister, CheckMode::All, 4);
    assert_eq!(walker.audit(temp_dir.path())?.counts.stray_file, 4);
    Ok(())
}

#[test]
fn test_missing_start_directory() {
    let walker = Walker::with_lister(FsLister, CheckMode::All, 16);
    let err = walker.audit(Path::new("/nonexistent/gitree/start")).unwrap_err();

    assert!(matches!(err, GitreeError::DirectoryOpen { .. }));
    assert_eq!(err.exit_code(), 255);
}

#[test]
fn test_modes_partition_findings() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();

    create_repository(&root.join("proj").join(".git"))?;
    create_repository(&root.join("mirror"))?;
    fs::write(root.join("mirror").join("junk"), "x")?;
    fs::write(root.join("loose.txt"), "x")?;

    let all = Walker::new(&settings_for(root, CheckMode::All)).audit(root)?;
    let layout = Walker::new(&settings_for(root, CheckMode::Layout)).audit(root)?;
    let non_bare = Walker::new(&settings_for(root, CheckMode::NonBare)).audit(root)?;
    let stray = Walker::new(&settings_for(root, CheckMode::Stray)).audit(root)?;

    assert_eq!(all.counts.layout_violation, 1);
    assert_eq!(all.counts.bad_name_suffix, 1);
    assert_eq!(all.counts.non_bare_layout, 1);
    assert_eq!(all.counts.stray_file, 1);

    assert_eq!(layout.warnings.len(), 2);
    assert_eq!(non_bare.warnings.len(), 1);
    assert_eq!(stray.warnings.len(), 1);
    assert_eq!(
        layout.warnings.len() + non_bare.warnings.len() + stray.warnings.len(),
        all.warnings.len()
    );
    Ok(())
}
