use crate::common::command::{snapdiff_stdout, snapshots_dir};
use crate::common::file::{create_directory, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_every_entry_of_an_added_directory(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let v1 = snapshots_dir.path().join("v1");
    let v2 = snapshots_dir.path().join("v2");
    create_directory(&v1);
    write(&v2, "new/x.txt", "x");
    write(&v2, "new/sub/y.txt", "y");

    let expected_output =
        "Comparing v1 -> v2\n!= ./\n  +  new/\n    +  sub/\n      +  y.txt\n    +  x.txt\n\n"
            .to_string();
    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["v1", "v2"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn report_every_entry_of_a_removed_directory(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let v1 = snapshots_dir.path().join("v1");
    let v2 = snapshots_dir.path().join("v2");
    write(&v1, "old/a.txt", "a");
    write(&v1, "keep.txt", "k");
    write(&v2, "keep.txt", "k");

    let expected_output = "Comparing v1 -> v2\n!= ./\n  -  old/\n    -  a.txt\n\n".to_string();
    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["v1", "v2"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn filter_lists_only_the_selected_change_kinds(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let v1 = snapshots_dir.path().join("v1");
    let v2 = snapshots_dir.path().join("v2");
    write(&v1, "gone.txt", "g");
    write(&v1, "edit.txt", "1");
    write(&v2, "edit.txt", "2");
    write(&v2, "fresh.txt", "f");

    let expected_output = "Comparing v1 -> v2\n!= ./\n  +  fresh.txt\n\n".to_string();
    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["--filter", "A", "v1", "v2"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}
