use crate::areas::snapshot::{self, DirectoryListing, IgnoreSet};
use crate::artifacts::compare::ordered;
use crate::artifacts::diff_tree::expander::NodeExpander;
use crate::artifacts::diff_tree::node::{DiffTreeNode, NodeKind};
use derive_new::new;
use std::path::{Path, PathBuf};

/// Aligns the immediate sub-directories and files of a directory pair by name
///
/// File pairs found on both sides are only provisionally `Unmodified`: their content
/// is classified later by whichever expander claims the file node.
#[derive(Debug, Clone, Default, new)]
pub struct DirectoryExpander {
    ignore: IgnoreSet,
}

impl DirectoryExpander {
    fn listing(&self, dir_path: Option<&Path>) -> anyhow::Result<DirectoryListing> {
        match dir_path {
            Some(dir_path) => snapshot::list_entries(dir_path, &self.ignore),
            None => Ok(DirectoryListing::default()),
        }
    }

    fn child_nodes(
        left: Vec<String>,
        right: Vec<String>,
        kind: NodeKind,
        left_dir: &Option<PathBuf>,
        right_dir: &Option<PathBuf>,
    ) -> Vec<DiffTreeNode> {
        ordered::align(left, right, |l, r| snapshot::compare_names(l, r))
            .map(|change| {
                let node = DiffTreeNode::new(
                    change.item().as_str(),
                    left_dir.clone(),
                    right_dir.clone(),
                    kind.clone(),
                    change.kind(),
                );

                match change.right() {
                    Some(right_name) => node.with_right_name(right_name),
                    None => node,
                }
            })
            .collect()
    }
}

impl NodeExpander for DirectoryExpander {
    fn name(&self) -> &str {
        "DirectoryExpander"
    }

    fn can_expand(&self, node: &DiffTreeNode) -> bool {
        node.kind() == &NodeKind::Directory
    }

    fn expand(&self, node: &mut DiffTreeNode) -> anyhow::Result<()> {
        let left_dir = node.left_full_path();
        let right_dir = node.right_full_path();

        let left = self.listing(left_dir.as_deref())?;
        let right = self.listing(right_dir.as_deref())?;

        let mut children = Self::child_nodes(
            left.directories,
            right.directories,
            NodeKind::Directory,
            &left_dir,
            &right_dir,
        );
        children.extend(Self::child_nodes(
            left.files,
            right.files,
            NodeKind::File,
            &left_dir,
            &right_dir,
        ));

        node.children = children;
        Ok(())
    }
}
