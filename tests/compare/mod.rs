mod compare_snapshot_chains;
mod print_nothing_for_identical_snapshots;
mod report_added_and_removed_directories;
mod report_structural_changes_in_rust_sources;
mod skip_ignored_and_hidden_entries;
mod write_html_reports;
