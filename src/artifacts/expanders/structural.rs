use crate::areas::snapshot;
use crate::artifacts::compare::change::ChangeKind;
use crate::artifacts::compare::unordered;
use crate::artifacts::diff_tree::expander::NodeExpander;
use crate::artifacts::diff_tree::node::{CodePair, DiffTreeNode, NodeKind};
use crate::artifacts::structure::ContentExtractor;
use crate::artifacts::structure::code_node::{CodeNode, is_same_element};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expands recognized source files into their structural elements
///
/// File nodes are parsed on both sides through the extractor and their top level
/// elements aligned by identity. Every element node keeps the fragments it was built
/// from, so the builder can hand it back to this expander to align the next level.
pub struct StructuralExpander {
    extractor: Box<dyn ContentExtractor>,
}

impl StructuralExpander {
    pub fn new(extractor: impl ContentExtractor + 'static) -> Self {
        StructuralExpander {
            extractor: Box::new(extractor),
        }
    }

    fn handles_file(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .is_some_and(|extension| {
                extension
                    .to_string_lossy()
                    .eq_ignore_ascii_case(self.extractor.extension())
            })
    }

    fn extract(&self, file_path: Option<PathBuf>) -> anyhow::Result<Vec<CodeNode>> {
        let Some(file_path) = file_path else {
            return Ok(Vec::new());
        };

        let text = std::fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        self.extractor
            .extract(&text)
            .with_context(|| format!("Failed to extract structure of {:?}", file_path))
    }

    fn extract_pair(
        &self,
        node: &DiffTreeNode,
    ) -> anyhow::Result<(Vec<CodeNode>, Vec<CodeNode>)> {
        Ok((
            self.extract(node.left_full_path())?,
            self.extract(node.right_full_path())?,
        ))
    }

    // identical bytes stay unmodified even when they cannot be parsed
    fn fall_back_to_bytes(node: &DiffTreeNode, error: anyhow::Error) -> anyhow::Result<()> {
        let left = node.left_full_path();
        let right = node.right_full_path();

        if node.change.is_unmodified()
            && snapshot::contents_equal(left.as_deref(), right.as_deref())?
        {
            debug!(
                item = node.name(),
                "Unparseable file is identical on both sides: {:#}", error
            );
            return Ok(());
        }

        Err(error)
    }

    fn element_nodes(
        parent: &DiffTreeNode,
        left: Vec<CodeNode>,
        right: Vec<CodeNode>,
    ) -> Vec<DiffTreeNode> {
        let left_parent = parent.left_full_path();
        let right_parent = parent.right_full_path();

        unordered::align(left, right, is_same_element)
            .map(|change| {
                let name = change.item().label.clone();
                let kind = NodeKind::Element(change.item().kind.clone());
                let (left, right, change) = change.into_parts();

                let change = match (&left, &right) {
                    (Some(left), Some(right)) if left.own_source() != right.own_source() => {
                        ChangeKind::Modified
                    }
                    _ => change,
                };

                DiffTreeNode::new(
                    name,
                    left_parent.clone(),
                    right_parent.clone(),
                    kind,
                    change,
                )
                .with_code(CodePair { left, right })
            })
            .collect()
    }
}

fn take_children(node: Option<&mut CodeNode>) -> Vec<CodeNode> {
    node.map(|node| std::mem::take(&mut node.children))
        .unwrap_or_default()
}

impl NodeExpander for StructuralExpander {
    fn name(&self) -> &str {
        self.extractor.name()
    }

    fn can_expand(&self, node: &DiffTreeNode) -> bool {
        match node.kind() {
            NodeKind::File => self.handles_file(node.name()),
            NodeKind::Element(_) => node.code().is_some(),
            _ => false,
        }
    }

    fn expand(&self, node: &mut DiffTreeNode) -> anyhow::Result<()> {
        let (left, right) = if node.kind == NodeKind::File {
            match self.extract_pair(node) {
                Ok(pair) => pair,
                Err(error) => return Self::fall_back_to_bytes(node, error),
            }
        } else {
            let code = node
                .code
                .as_mut()
                .ok_or_else(|| anyhow::anyhow!("Element {} has no source", node.name))?;
            (
                take_children(code.left.as_mut()),
                take_children(code.right.as_mut()),
            )
        };

        node.children = Self::element_nodes(node, left, right);
        Ok(())
    }
}
