use crate::artifacts::diff_tree::node::{DiffTreeNode, NodeKind};
use crate::artifacts::report::change_filter::{ChangeFilter, Visibility};
use colored::Colorize;
use derive_new::new;
use std::io::Write;

const INDENT: &str = "  ";
const MARKER_WIDTH: usize = 2;

/// Indented, coloured tree of the nodes selected by a `ChangeFilter`
///
/// ```text
/// != ./
///   != src/
///     +  new.rs
///   -  old.txt
/// ```
#[derive(Debug, Clone, Copy, Default, new)]
pub struct TextReport {
    filter: ChangeFilter,
}

impl TextReport {
    pub fn render(&self, root: &DiffTreeNode, writer: &mut dyn Write) -> anyhow::Result<()> {
        let visibility = self.filter.visibility(root);
        if visibility.shown {
            self.render_node(root, &visibility, 0, writer)?;
        }

        Ok(())
    }

    fn render_node(
        &self,
        node: &DiffTreeNode,
        visibility: &Visibility,
        depth: usize,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let change = node.change();
        let padding = " ".repeat(MARKER_WIDTH.saturating_sub(change.marker().len()));

        writeln!(
            writer,
            "{}{}{} {}",
            INDENT.repeat(depth),
            change.colored_marker(),
            padding,
            display_name(node)
        )?;

        for (child, child_visibility) in node.children().iter().zip(&visibility.children) {
            if child_visibility.shown {
                self.render_node(child, child_visibility, depth + 1, writer)?;
            }
        }

        Ok(())
    }
}

fn display_name(node: &DiffTreeNode) -> String {
    match node.kind() {
        NodeKind::Directory => format!("{}/", node.name()).bold().to_string(),
        NodeKind::Message => node.name().red().to_string(),
        NodeKind::Element(_) => node.name().dimmed().to_string(),
        NodeKind::File => node.name().to_string(),
    }
}
