use crate::common::command::{run_snapdiff_command, snapdiff_stdout, snapshots_dir};
use crate::common::file::{create_directory, write};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn write_three_snapshots(dir: &TempDir) {
    write(&dir.path().join("v1"), "a.txt", "one");
    write(&dir.path().join("v2"), "a.txt", "two");
    write(&dir.path().join("v3"), "a.txt", "two");
    write(&dir.path().join("v3"), "b.txt", "three");
}

#[rstest]
fn compare_each_consecutive_pair_of_the_given_chain(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_three_snapshots(&snapshots_dir);

    let expected_output = "Comparing v1 -> v2\n!= ./\n  != a.txt\n\n\
        Comparing v2 -> v3\n!= ./\n  +  b.txt\n\n"
        .to_string();
    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["v1", "v2", "v3"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn compare_sorted_subfolders_of_a_single_path(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_three_snapshots(&snapshots_dir);
    write(snapshots_dir.path(), "stray.txt", "not a snapshot");

    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["."]);
    let headers = actual_output
        .lines()
        .filter(|line| line.starts_with("Comparing"))
        .collect::<Vec<_>>();

    assert_eq!(
        headers,
        vec!["Comparing ./v1 -> ./v2", "Comparing ./v2 -> ./v3"]
    );

    Ok(())
}

#[rstest]
fn fail_when_a_single_path_holds_one_snapshot(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    create_directory(&snapshots_dir.path().join("v1"));

    run_snapdiff_command(snapshots_dir.path(), &["."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two snapshot folders"));

    Ok(())
}

#[rstest]
fn fail_when_a_snapshot_folder_does_not_exist(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    create_directory(&snapshots_dir.path().join("v1"));

    run_snapdiff_command(snapshots_dir.path(), &["v1", "missing"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Directory missing does not exist."));

    Ok(())
}

#[rstest]
fn reject_an_unknown_change_filter(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_three_snapshots(&snapshots_dir);

    run_snapdiff_command(snapshots_dir.path(), &["--filter", "XYZ", "v1", "v2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid change filter"));

    Ok(())
}
