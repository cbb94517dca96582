use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Generic structural element produced by a content extractor
///
/// `identifiers` is empty when the element has no declared identity within its scope
/// (statements, blocks, imports). Elements that do carry identifiers are matched
/// across snapshots by kind and identifiers instead of by their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeNode {
    pub label: String,
    pub kind: String,
    pub source: String,
    pub identifiers: Vec<String>,
    pub children: Vec<CodeNode>,
}

impl CodeNode {
    pub fn new(kind: impl Into<String>, source: impl Into<String>) -> Self {
        let kind = kind.into();
        let source = source.into();

        CodeNode {
            label: format!("{} {}", kind, abbreviate(&normalize_whitespace(&source))),
            kind,
            source,
            identifiers: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn identified(
        kind: impl Into<String>,
        identifiers: Vec<String>,
        source: impl Into<String>,
    ) -> Self {
        let kind = kind.into();

        CodeNode {
            label: format!("{} {}", kind, identifiers.join(", ")),
            kind,
            source: source.into(),
            identifiers,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<CodeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_identified(&self) -> bool {
        !self.identifiers.is_empty()
    }

    pub fn normalized_source(&self) -> String {
        normalize_whitespace(&self.source)
    }

    /// Normalized source with the text of every child cut out
    ///
    /// What remains is the element's own signature (a function header, a struct
    /// declaration) so that reordered or edited children do not count against it.
    pub fn own_source(&self) -> String {
        let own = self
            .children
            .iter()
            .fold(self.normalized_source(), |source, child| {
                source.replacen(&child.normalized_source(), "", 1)
            });

        normalize_whitespace(&own)
    }
}

/// Identity predicate used to align two structural trees
///
/// Two identified elements are the same element when their kinds match and every
/// identifier of `left` also appears on `right`. This is a one-directional subset
/// check, so `(x)` matches `(x, y)` but not the other way around. Anything else is
/// compared by its whitespace-normalized source text.
pub fn is_same_element(left: &CodeNode, right: &CodeNode) -> bool {
    if left.is_identified() && right.is_identified() {
        left.kind == right.kind
            && left
                .identifiers
                .iter()
                .all(|identifier| right.identifiers.contains(identifier))
    } else {
        left.normalized_source() == right.normalized_source()
    }
}

/// Collapse every whitespace run into a single space and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

const LABEL_WIDTH: usize = 60;

fn abbreviate(text: &str) -> String {
    match text.char_indices().nth(LABEL_WIDTH) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
