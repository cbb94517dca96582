use crate::common::command::{snapdiff_stdout, snapshots_dir};
use crate::common::file::write;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const ORIGINAL: &str = r#"
pub struct Config {
    pub name: String,
}

pub fn load() -> Config {
    Config { name: String::new() }
}

pub fn save(config: &Config) {
    println!("{}", config.name);
}
"#;

#[rstest]
fn report_changed_declarations_and_statements(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let changed = r#"
pub fn save(config: &Config) {
    println!("{}", config.name);
}

pub struct Config {
    pub name: String,
    pub verbose: bool,
}

pub fn load() -> Config {
    Config { name: String::new() }
}
"#;
    write(&snapshots_dir.path().join("v1"), "lib.rs", ORIGINAL);
    write(&snapshots_dir.path().join("v2"), "lib.rs", changed);

    let expected_output = "Comparing v1 -> v2\n\
        != ./\n  \
        != lib.rs\n    \
        != file rust\n      \
        != struct Config\n        \
        +  field verbose\n\n"
        .to_string();
    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["v1", "v2"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn ignore_formatting_only_changes(snapshots_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let reformatted = ORIGINAL.replace("    ", "\t").replace("\n\n", "\n\n\n");
    write(&snapshots_dir.path().join("v1"), "lib.rs", ORIGINAL);
    write(&snapshots_dir.path().join("v2"), "lib.rs", &reformatted);

    let expected_output = "Comparing v1 -> v2\n\n".to_string();
    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["v1", "v2"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn report_unparseable_sources_without_losing_siblings(
    snapshots_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let v1 = snapshots_dir.path().join("v1");
    let v2 = snapshots_dir.path().join("v2");
    write(&v1, "broken.rs", "fn ok() {}");
    write(&v2, "broken.rs", "fn broken( {");
    write(&v1, "notes.txt", "before");
    write(&v2, "notes.txt", "after");
    write(&v1, "same.txt", "same");
    write(&v2, "same.txt", "same");

    let actual_output = snapdiff_stdout(snapshots_dir.path(), &["v1", "v2"]);
    let lines = actual_output.lines().collect::<Vec<_>>();

    assert_eq!(lines[1], "!= ./");
    assert_eq!(lines[2], "  != broken.rs");
    assert!(lines[3].starts_with("    != #err#RustExtractor#broken.rs#"));
    assert_eq!(lines[4], "  != notes.txt");
    assert_eq!(lines.len(), 6);

    Ok(())
}
