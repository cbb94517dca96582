use crate::common::file::{write, write_generated_files};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn snapshots_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Two snapshot folders `v1` and `v2` holding the same content
#[fixture]
pub fn identical_snapshots(snapshots_dir: TempDir) -> TempDir {
    let v1 = snapshots_dir.path().join("v1");
    write(&v1, "readme.txt", "hello");
    write(&v1, "src/lib.rs", "pub fn answer() -> u32 {\n    42\n}\n");
    write(&v1, "src/notes/todo.txt", "nothing left");
    write_generated_files(&v1.join("data"), 3);

    crate::common::file::copy_tree(&v1, &snapshots_dir.path().join("v2"));

    snapshots_dir
}

pub fn snapshot(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

pub fn run_snapdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("snapdiff").expect("Failed to find snapdiff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run a comparison and return its standard output
pub fn snapdiff_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_snapdiff_command(dir, args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is UTF-8")
}
