use crate::artifacts::diff_tree::node::{DiffTreeNode, NodeKind};
use crate::artifacts::report::change_filter::{ChangeFilter, Visibility};
use anyhow::Context;
use derive_new::new;
use std::path::Path;

const STYLESHEET: &str = r#"<link rel="stylesheet" href="https://use.fontawesome.com/releases/v5.1.1/css/all.css" crossorigin="anonymous">"#;
const DIRECTORY_ICON: &str = r#"<i class="fas fa-folder-open" style="color: #FCE181;"></i>"#;
const FILE_ICON: &str = r#"<i class="fas fa-file" style="color: #909292;"></i>"#;
const ELEMENT_ICON: &str = r#"<i class="fas fa-code" style="color: #909292;"></i>"#;
const MESSAGE_ICON: &str = r#"<i class="fas fa-exclamation-triangle" style="color: #D9534F;"></i>"#;

/// Nested `<ul>` document of the nodes selected by a `ChangeFilter`
#[derive(Debug, Clone, Copy, Default, new)]
pub struct HtmlReport {
    filter: ChangeFilter,
}

impl HtmlReport {
    pub fn render(&self, root: &DiffTreeNode) -> String {
        let mut html = String::new();

        html.push_str("<html>\n<head>\n");
        html.push_str(STYLESHEET);
        html.push_str("\n</head>\n");
        html.push_str("<body style=\"font-family: Arial, Helvetica, sans-serif;\">\n");
        let visibility = self.filter.visibility(root);
        self.render_nodes(
            std::slice::from_ref(root),
            std::slice::from_ref(&visibility),
            &mut html,
        );
        html.push_str("</body>\n</html>\n");

        html
    }

    pub fn write_to(&self, root: &DiffTreeNode, file_path: &Path) -> anyhow::Result<()> {
        std::fs::write(file_path, self.render(root))
            .with_context(|| format!("Failed to write report: {:?}", file_path))
    }

    fn render_nodes(&self, nodes: &[DiffTreeNode], visibility: &[Visibility], html: &mut String) {
        if !visibility.iter().any(|visibility| visibility.shown) {
            return;
        }

        html.push_str("<ul>\n");

        for (node, visibility) in nodes.iter().zip(visibility) {
            if !visibility.shown {
                continue;
            }

            html.push_str(&format!(
                "<li>{} {} {}",
                html_escape::encode_text(node.change().marker()),
                icon(node.kind()),
                html_escape::encode_text(node.name())
            ));

            if !node.children().is_empty() {
                html.push('\n');
                self.render_nodes(node.children(), &visibility.children, html);
            }
            html.push_str("</li>\n");
        }

        html.push_str("</ul>\n");
    }
}

fn icon(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Directory => DIRECTORY_ICON,
        NodeKind::File => FILE_ICON,
        NodeKind::Element(_) => ELEMENT_ICON,
        NodeKind::Message => MESSAGE_ICON,
    }
}
