use crate::artifacts::compare::change::ChangeKind;
use crate::artifacts::diff_tree::node::DiffTreeNode;
use bitflags::bitflags;

bitflags! {
    /// Set of change kinds a report lists
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ChangeFilter: u32 {
        const UNMODIFIED = 0b0001;
        const MODIFIED = 0b0010;
        const ADDED = 0b0100;
        const REMOVED = 0b1000;
    }
}

impl ChangeFilter {
    /// Parse a filter from its letters: `U`, `M`, `A` and `R`
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'U' => filter |= Self::UNMODIFIED,
                'M' => filter |= Self::MODIFIED,
                'A' => filter |= Self::ADDED,
                'R' => filter |= Self::REMOVED,
                _ => return None,
            }
        }

        Some(filter)
    }

    pub fn changes_only() -> Self {
        Self::MODIFIED | Self::ADDED | Self::REMOVED
    }

    pub fn matches(&self, change: ChangeKind) -> bool {
        let flag = match change {
            ChangeKind::Unmodified => Self::UNMODIFIED,
            ChangeKind::Modified => Self::MODIFIED,
            ChangeKind::Added => Self::ADDED,
            ChangeKind::Removed => Self::REMOVED,
        };

        self.contains(flag)
    }

    /// Which nodes of a tree belong in a report, resolved in one bottom-up pass
    ///
    /// A node is shown when it matches or when any of its descendants does.
    pub fn visibility(&self, node: &DiffTreeNode) -> Visibility {
        let children = node
            .children()
            .iter()
            .map(|child| self.visibility(child))
            .collect::<Vec<_>>();
        let shown = self.matches(node.change()) || children.iter().any(|child| child.shown);

        Visibility { shown, children }
    }
}

/// Report visibility of a node and, in the same order, of its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    pub shown: bool,
    pub children: Vec<Visibility>,
}

impl Default for ChangeFilter {
    fn default() -> Self {
        Self::changes_only()
    }
}
