//! Recursive diff tree construction
//!
//! The builder materializes a whole tree in place, starting from a caller supplied
//! root. Each node is handed to the first registered expander that accepts it, the
//! freshly created children are expanded in turn (unless the expander only produces
//! leaves), and once the children are settled an `Unmodified` node with any changed
//! child is promoted to `Modified`.
//!
//! ## Failure isolation
//!
//! An expander error never aborts the build. The failing node keeps its own
//! classification, its children are replaced by a single `Message` node describing
//! the failure, and siblings and ancestors carry on as usual.

use crate::artifacts::diff_tree::expander::NodeExpander;
use crate::artifacts::diff_tree::node::DiffTreeNode;
use tracing::{debug, warn};

#[derive(Default)]
pub struct DiffTreeBuilder {
    expanders: Vec<Box<dyn NodeExpander>>,
}

impl DiffTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, expander: impl NodeExpander + 'static) -> &mut Self {
        self.expanders.push(Box::new(expander));
        self
    }

    pub fn with_expander(mut self, expander: impl NodeExpander + 'static) -> Self {
        self.register(expander);
        self
    }

    pub fn expander_names(&self) -> Vec<&str> {
        self.expanders.iter().map(|expander| expander.name()).collect()
    }

    pub fn build(&self, root: &mut DiffTreeNode) {
        self.expand_node_and_children(root);
    }

    fn expand_node_and_children(&self, node: &mut DiffTreeNode) {
        if let Some(expander) = self.find_expander(node) {
            debug!(
                expander = expander.name(),
                node = node.name(),
                kind = %node.kind(),
                "Expanding node"
            );

            match expander.expand(node) {
                Ok(()) if !expander.is_leaf_expander() => {
                    for child in node.children.iter_mut() {
                        self.expand_node_and_children(child);
                    }
                }
                Ok(()) => {}
                Err(error) => {
                    warn!(
                        expander = expander.name(),
                        item = node.name(),
                        left_parent = ?node.left_parent(),
                        right_parent = ?node.right_parent(),
                        "Expander returned an error while expanding: {:#}",
                        error
                    );
                    node.children = vec![DiffTreeNode::message(expander.name(), node, &error)];
                }
            }
        }

        node.promote_from_children();
    }

    fn find_expander(&self, node: &DiffTreeNode) -> Option<&dyn NodeExpander> {
        self.expanders
            .iter()
            .find(|expander| expander.can_expand(node))
            .map(|expander| expander.as_ref())
    }
}
