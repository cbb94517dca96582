use anyhow::Context;
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

const HIDDEN_PREFIX: char = '.';
const DEFAULT_IGNORED_FOLDERS: [&str; 4] = ["bin", "obj", "packages", "properties"];

/// Case-insensitive set of directory names excluded from comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet(BTreeSet<String>);

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        IgnoreSet(
            names
                .into_iter()
                .map(|name| name.as_ref().trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Build output folders that are rarely worth comparing
    pub fn default_folders() -> Self {
        Self::new(DEFAULT_IGNORED_FOLDERS)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&name.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Immediate, visible entries of one directory, both lists sorted case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

pub fn compare_names(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

pub fn list_entries(dir_path: &Path, ignore: &IgnoreSet) -> anyhow::Result<DirectoryListing> {
    if !dir_path.is_dir() {
        anyhow::bail!("The specified path is not a directory: {:?}", dir_path);
    }

    let mut listing = DirectoryListing::default();

    // symbolic links are neither files nor directories here and are skipped
    for entry in WalkDir::new(dir_path).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if error.depth() > 0 => {
                warn!(directory = ?dir_path, "Skipping unreadable entry: {}", error);
                continue;
            }
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("Failed to list directory: {:?}", dir_path));
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();

        if is_hidden(&entry, &name) {
            continue;
        }

        if entry.file_type().is_dir() {
            if !ignore.contains(&name) {
                listing.directories.push(name);
            }
        } else if entry.file_type().is_file() {
            listing.files.push(name);
        }
    }

    listing.directories.sort_by(|a, b| compare_names(a, b));
    listing.files.sort_by(|a, b| compare_names(a, b));

    Ok(listing)
}

fn is_hidden(entry: &DirEntry, name: &str) -> bool {
    if name.starts_with(HIDDEN_PREFIX) {
        return true;
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

        if let Ok(metadata) = entry.metadata() {
            return metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0;
        }
    }
    #[cfg(not(windows))]
    let _ = entry;

    false
}

/// SHA-256 digest of a file's content, streamed through a buffered reader
pub fn fingerprint(file_path: &Path) -> anyhow::Result<Vec<u8>> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {:?}", file_path))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();

    std::io::copy(&mut reader, &mut hasher)
        .with_context(|| format!("Failed to read file: {:?}", file_path))?;

    Ok(hasher.finalize().to_vec())
}

/// Byte-level equality of two files
///
/// A missing side is never equal to anything. Lengths are compared first and the
/// fingerprints only when the lengths agree.
pub fn contents_equal(left: Option<&Path>, right: Option<&Path>) -> anyhow::Result<bool> {
    let (Some(left), Some(right)) = (left, right) else {
        return Ok(false);
    };

    let left_len = std::fs::metadata(left)
        .with_context(|| format!("Failed to get metadata for file: {:?}", left))?
        .len();
    let right_len = std::fs::metadata(right)
        .with_context(|| format!("Failed to get metadata for file: {:?}", right))?
        .len();

    if left_len != right_len {
        return Ok(false);
    }

    Ok(fingerprint(left)? == fingerprint(right)?)
}
