use crate::areas::snapshot;
use crate::artifacts::compare::change::ChangeKind;
use crate::artifacts::diff_tree::expander::NodeExpander;
use crate::artifacts::diff_tree::node::{DiffTreeNode, NodeKind};

/// Classifies a file pair by its bytes
///
/// Register after any structural expander: it accepts every file node.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentExpander;

impl NodeExpander for ContentExpander {
    fn name(&self) -> &str {
        "ContentExpander"
    }

    fn can_expand(&self, node: &DiffTreeNode) -> bool {
        node.kind() == &NodeKind::File
    }

    fn expand(&self, node: &mut DiffTreeNode) -> anyhow::Result<()> {
        // additions and removals are already final
        if matches!(node.change, ChangeKind::Added | ChangeKind::Removed) {
            return Ok(());
        }

        let equal = snapshot::contents_equal(
            node.left_full_path().as_deref(),
            node.right_full_path().as_deref(),
        )?;

        node.change = if equal {
            ChangeKind::Unmodified
        } else {
            ChangeKind::Modified
        };

        Ok(())
    }

    fn is_leaf_expander(&self) -> bool {
        true
    }
}
