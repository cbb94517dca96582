use crate::areas::comparison::Comparison;
use crate::areas::snapshot::{self, IgnoreSet};
use crate::artifacts::diff_tree::node::DiffTreeNode;
use crate::artifacts::report::html::HtmlReport;
use crate::artifacts::report::text::TextReport;
use anyhow::Context;
use colored::Colorize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

const HTML_EXTENSION: &str = ".html";

impl Comparison {
    /// Compare every consecutive pair of the snapshot chain described by `paths`
    ///
    /// Pairs are built concurrently on blocking tasks; reports are written in chain
    /// order once each tree is complete.
    pub async fn compare(&self, paths: &[PathBuf]) -> anyhow::Result<()> {
        let chain = folder_chain(paths)?;
        info!(snapshots = chain.len(), "Comparing snapshot chain");

        let tasks = chain
            .windows(2)
            .map(|pair| {
                let (left, right) = (pair[0].clone(), pair[1].clone());
                let builder = self.builder();

                tokio::task::spawn_blocking(move || {
                    info!(left = ?left, right = ?right, "Building diff tree");

                    let mut root = DiffTreeNode::root(left.clone(), right.clone());
                    builder.build(&mut root);
                    (left, right, root)
                })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            let (left, right, root) = task.await.context("Diff tree task failed")?;
            self.report(&left, &right, &root)?;
        }

        Ok(())
    }

    fn report(&self, left: &Path, right: &Path, root: &DiffTreeNode) -> anyhow::Result<()> {
        let filter = self.options().filter;

        {
            let mut writer = self.writer();
            writeln!(
                writer,
                "{} {} -> {}",
                "Comparing".bold(),
                left.display(),
                right.display()
            )?;
            TextReport::new(filter).render(root, &mut **writer)?;
        }

        if self.options().html {
            let report_path = html_report_path(right)?;
            HtmlReport::new(filter).write_to(root, &report_path)?;
            info!(report = ?report_path, "Wrote HTML report");

            writeln!(self.writer(), "Created {}", report_path.display())?;
        }

        writeln!(self.writer())?;
        Ok(())
    }
}

/// Resolve the ordered list of snapshot folders to compare
///
/// A single path stands for the folder holding the snapshots: its visible
/// sub-directories, sorted by name, form the chain. Several paths are the chain.
pub fn folder_chain(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    if paths.is_empty() {
        anyhow::bail!("No snapshot folders given.");
    }

    for path in paths {
        if !path.is_dir() {
            anyhow::bail!("Directory {} does not exist.", path.display());
        }
    }

    if let [parent] = paths {
        let chain = snapshot::list_entries(parent, &IgnoreSet::default())
            .with_context(|| format!("Failed to list snapshots in {}", parent.display()))?
            .directories
            .into_iter()
            .map(|name| parent.join(name))
            .collect::<Vec<_>>();

        if chain.len() < 2 {
            anyhow::bail!(
                "Directory {} needs at least two snapshot folders to compare.",
                parent.display()
            );
        }

        return Ok(chain);
    }

    Ok(paths.to_vec())
}

/// `<right>.html`, next to the right-hand snapshot folder
pub fn html_report_path(right: &Path) -> anyhow::Result<PathBuf> {
    let mut folder = right.components().collect::<PathBuf>();

    // "." and ".." have no name of their own
    if folder.file_name().is_none() {
        folder = folder
            .canonicalize()
            .with_context(|| format!("Failed to resolve snapshot path: {:?}", right))?;
    }

    let mut file_name = OsString::from(folder);
    file_name.push(HTML_EXTENSION);
    Ok(PathBuf::from(file_name))
}
