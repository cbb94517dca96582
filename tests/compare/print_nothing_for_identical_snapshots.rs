use crate::common::command::{identical_snapshots, snapdiff_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_for_identical_snapshots(
    identical_snapshots: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = "Comparing v1 -> v2\n\n".to_string();
    let actual_output = snapdiff_stdout(identical_snapshots.path(), &["v1", "v2"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn list_unmodified_entries_when_asked_for_all(
    identical_snapshots: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = snapdiff_stdout(identical_snapshots.path(), &["-a", "v1", "v2"]);

    assert!(actual_output.contains("\n=  ./\n"));
    assert!(actual_output.contains("\n  =  readme.txt\n"));
    assert!(actual_output.contains("\n    =  lib.rs\n"));
    assert!(actual_output.contains("\n      =  file rust\n"));
    assert!(actual_output.contains("\n        =  fn answer\n"));
    assert!(!actual_output.contains("!="));
    assert!(!actual_output.contains("#err#"));

    Ok(())
}
