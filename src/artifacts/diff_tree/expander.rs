use crate::artifacts::diff_tree::node::DiffTreeNode;

/// Plugin that knows how to produce the children of a node
///
/// Expanders are consulted in registration order and the first one whose
/// `can_expand` accepts a node wins, so more specific expanders must be registered
/// ahead of generic ones.
pub trait NodeExpander: Send + Sync {
    /// Identity reported in error markers and logs
    fn name(&self) -> &str;

    fn can_expand(&self, node: &DiffTreeNode) -> bool;

    /// Assign the node's children, or reclassify the node itself for leaf expanders
    fn expand(&self, node: &mut DiffTreeNode) -> anyhow::Result<()>;

    /// Leaf expanders produce no children that need further expansion
    fn is_leaf_expander(&self) -> bool {
        false
    }
}
