use crate::common::command::{snapdiff_stdout, snapshots_dir};
use crate::common::file::write;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn write_build_outputs(dir: &TempDir) {
    let v1 = dir.path().join("v1");
    let v2 = dir.path().join("v2");
    write(&v1, "main.txt", "m");
    write(&v2, "main.txt", "m");
    write(&v2, "bin/app.dll", "binary");
    write(&v2, "Obj/cache.o", "object");
    write(&v2, "target/debug.log", "log");
    write(&v2, ".git/config", "[core]");
    write(&v2, ".env", "SECRET=1");
}

#[rstest]
fn skip_default_ignored_folders_and_hidden_entries(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_build_outputs(&snapshots_dir);

    let expected_output =
        "Comparing v1 -> v2\n!= ./\n  +  target/\n    +  debug.log\n\n".to_string();
    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["v1", "v2"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn ignore_list_replaces_the_default_folders(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_build_outputs(&snapshots_dir);

    let expected_output =
        "Comparing v1 -> v2\n!= ./\n  +  bin/\n    +  app.dll\n\n".to_string();
    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["-i", "target,obj", "v1", "v2"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}
