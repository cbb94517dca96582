use crate::artifacts::compare::change::ChangeKind;
use crate::artifacts::structure::code_node::CodeNode;
use std::path::{Path, PathBuf};

const ROOT_NAME: &str = ".";

/// Semantic category of a diff tree node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Directory,
    File,
    /// Synthetic node reporting a failed expansion
    Message,
    /// Structural element, tagged with the extractor's kind (`fn`, `struct`, `stmt`, ...)
    Element(String),
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Directory => write!(f, "directory"),
            NodeKind::File => write!(f, "file"),
            NodeKind::Message => write!(f, "message"),
            NodeKind::Element(kind) => write!(f, "{}", kind),
        }
    }
}

/// Structural fragments an element node was aligned from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodePair {
    pub left: Option<CodeNode>,
    pub right: Option<CodeNode>,
}

/// One compared entity: a directory, a file, a structural element or an error marker
///
/// The node keeps its parents on both sides rather than its own paths, so the
/// resolved paths always follow the current classification: an added node has no
/// left path and a removed node has no right path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTreeNode {
    pub(crate) name: String,
    pub(crate) left_parent: Option<PathBuf>,
    pub(crate) right_parent: Option<PathBuf>,
    pub(crate) kind: NodeKind,
    pub(crate) change: ChangeKind,
    pub(crate) children: Vec<DiffTreeNode>,
    pub(crate) code: Option<CodePair>,
    /// Spelling on the right side when it differs from `name` only by case
    pub(crate) right_name: Option<String>,
}

impl DiffTreeNode {
    pub fn new(
        name: impl Into<String>,
        left_parent: Option<PathBuf>,
        right_parent: Option<PathBuf>,
        kind: NodeKind,
        change: ChangeKind,
    ) -> Self {
        DiffTreeNode {
            name: name.into(),
            left_parent,
            right_parent,
            kind,
            change,
            children: Vec::new(),
            code: None,
            right_name: None,
        }
    }

    /// Root directory node comparing two snapshot folders
    pub fn root(left: impl Into<PathBuf>, right: impl Into<PathBuf>) -> Self {
        Self::new(
            ROOT_NAME,
            Some(left.into()),
            Some(right.into()),
            NodeKind::Directory,
            ChangeKind::Unmodified,
        )
    }

    /// Error marker standing in for the children of a node whose expansion failed
    ///
    /// Markers are classified as `Modified` so that they promote their ancestors and
    /// remain visible in reports that only list changes.
    pub fn message(expander: &str, node: &DiffTreeNode, error: &anyhow::Error) -> Self {
        Self::new(
            format!("#err#{}#{}#{:#}#", expander, node.name, error),
            node.left_parent.clone(),
            node.right_parent.clone(),
            NodeKind::Message,
            ChangeKind::Modified,
        )
    }

    pub(crate) fn with_code(mut self, code: CodePair) -> Self {
        self.code = Some(code);
        self
    }

    pub(crate) fn with_right_name(mut self, right_name: &str) -> Self {
        if right_name != self.name {
            self.right_name = Some(right_name.to_string());
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn change(&self) -> ChangeKind {
        self.change
    }

    pub fn children(&self) -> &[DiffTreeNode] {
        &self.children
    }

    pub fn left_parent(&self) -> Option<&Path> {
        self.left_parent.as_deref()
    }

    pub fn right_parent(&self) -> Option<&Path> {
        self.right_parent.as_deref()
    }

    pub fn code(&self) -> Option<&CodePair> {
        self.code.as_ref()
    }

    pub fn left_full_path(&self) -> Option<PathBuf> {
        if self.change == ChangeKind::Added {
            return None;
        }
        self.left_parent.as_ref().map(|parent| parent.join(&self.name))
    }

    pub fn right_full_path(&self) -> Option<PathBuf> {
        if self.change == ChangeKind::Removed {
            return None;
        }
        let name = self.right_name.as_deref().unwrap_or(&self.name);
        self.right_parent.as_ref().map(|parent| parent.join(name))
    }

    pub fn full_path(&self) -> Option<PathBuf> {
        self.left_full_path().or_else(|| self.right_full_path())
    }

    /// Pre-order traversal of this node and all its descendants
    pub fn iter(&self) -> impl Iterator<Item = &DiffTreeNode> {
        let mut stack = vec![self];

        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Look up a descendant by its `/` separated chain of names
    pub fn find(&self, path: &str) -> Option<&DiffTreeNode> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| {
                node.children.iter().find(|child| child.name == segment)
            })
    }

    pub fn has_messages(&self) -> bool {
        self.iter().any(|node| node.kind == NodeKind::Message)
    }

    pub(crate) fn promote_from_children(&mut self) {
        if self.change.is_unmodified()
            && self
                .children
                .iter()
                .any(|child| !child.change.is_unmodified())
        {
            self.change = ChangeKind::Modified;
        }
    }
}
