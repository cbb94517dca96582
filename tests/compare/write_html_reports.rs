use crate::common::command::{run_snapdiff_command, snapshots_dir};
use crate::common::file::write;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn write_html_report_next_to_the_right_snapshot(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write(&snapshots_dir.path().join("v1"), "a.txt", "one");
    write(&snapshots_dir.path().join("v2"), "a.txt", "two");
    write(&snapshots_dir.path().join("v2"), "b&c.txt", "new");

    run_snapdiff_command(snapshots_dir.path(), &["--html", "v1", "v2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created v2.html"));

    let html = std::fs::read_to_string(snapshots_dir.path().join("v2.html"))?;

    assert!(html.starts_with("<html>"));
    assert!(html.contains("<li>!= "));
    assert!(html.contains("a.txt"));
    assert!(html.contains("b&amp;c.txt"));

    Ok(())
}

#[rstest]
fn skip_html_report_unless_asked(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write(&snapshots_dir.path().join("v1"), "a.txt", "one");
    write(&snapshots_dir.path().join("v2"), "a.txt", "two");

    run_snapdiff_command(snapshots_dir.path(), &["v1", "v2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not());

    assert!(!snapshots_dir.path().join("v2.html").exists());

    Ok(())
}
