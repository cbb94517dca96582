use colored::{ColoredString, Colorize};

/// Classification of one aligned pair
///
/// Only `Unmodified` is ever reclassified after construction, and only to `Modified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ChangeKind {
    #[default]
    Unmodified,
    Modified,
    Added,
    Removed,
}

impl ChangeKind {
    pub fn is_unmodified(&self) -> bool {
        matches!(self, ChangeKind::Unmodified)
    }

    pub fn marker(&self) -> &'static str {
        self.into()
    }

    pub fn colored_marker(&self) -> ColoredString {
        match self {
            ChangeKind::Unmodified => self.marker().normal(),
            ChangeKind::Modified => self.marker().yellow(),
            ChangeKind::Added => self.marker().green(),
            ChangeKind::Removed => self.marker().red(),
        }
    }
}

impl From<&ChangeKind> for &str {
    fn from(kind: &ChangeKind) -> Self {
        match kind {
            ChangeKind::Unmodified => "=",
            ChangeKind::Modified => "!=",
            ChangeKind::Added => "+",
            ChangeKind::Removed => "-",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker: &str = self.into();
        write!(f, "{}", marker)
    }
}

/// One element of an alignment between a left and a right sequence
///
/// At least one side is always present: `Unmodified` carries both sides,
/// `Removed` only the left one and `Added` only the right one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<T> {
    left: Option<T>,
    right: Option<T>,
    kind: ChangeKind,
}

impl<T> Change<T> {
    pub(crate) fn unmodified(left: T, right: T) -> Self {
        Change {
            left: Some(left),
            right: Some(right),
            kind: ChangeKind::Unmodified,
        }
    }

    pub(crate) fn removed(left: T) -> Self {
        Change {
            left: Some(left),
            right: None,
            kind: ChangeKind::Removed,
        }
    }

    pub(crate) fn added(right: T) -> Self {
        Change {
            left: None,
            right: Some(right),
            kind: ChangeKind::Added,
        }
    }

    pub fn left(&self) -> Option<&T> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&T> {
        self.right.as_ref()
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// The right item for additions, the left item otherwise
    pub fn item(&self) -> &T {
        match (&self.left, &self.right) {
            (_, Some(right)) if self.kind == ChangeKind::Added => right,
            (Some(left), _) => left,
            (None, Some(right)) => right,
            (None, None) => unreachable!("a change always carries at least one side"),
        }
    }

    pub fn into_parts(self) -> (Option<T>, Option<T>, ChangeKind) {
        (self.left, self.right, self.kind)
    }
}
