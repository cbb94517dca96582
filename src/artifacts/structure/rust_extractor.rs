use crate::artifacts::structure::ContentExtractor;
use crate::artifacts::structure::code_node::CodeNode;
use quote::ToTokens;
use syn::{Block, Expr, ExprIf, Fields, ImplItem, Item, ItemImpl, Stmt, TraitItem};

const LANGUAGE: &str = "rust";

/// Extracts items, fields, variants, statements and nested blocks from Rust sources
///
/// The whole file becomes a single root element identified by the language name, so
/// the roots of two snapshots always pair up.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustExtractor;

impl ContentExtractor for RustExtractor {
    fn name(&self) -> &str {
        "RustExtractor"
    }

    fn extension(&self) -> &str {
        "rs"
    }

    fn extract(&self, text: &str) -> anyhow::Result<Vec<CodeNode>> {
        let file = syn::parse_file(text)
            .map_err(|e| anyhow::anyhow!("Failed to parse Rust source: {}", e))?;

        let root = CodeNode::identified("file", vec![LANGUAGE.to_string()], tokens(&file))
            .with_children(file.items.iter().map(item_node).collect());

        Ok(vec![root])
    }
}

fn tokens(node: &impl ToTokens) -> String {
    node.to_token_stream().to_string()
}

fn identified(kind: &str, identifier: impl ToString, node: &impl ToTokens) -> CodeNode {
    CodeNode::identified(kind, vec![identifier.to_string()], tokens(node))
}

fn item_node(item: &Item) -> CodeNode {
    match item {
        Item::Fn(item) => {
            identified("fn", &item.sig.ident, item).with_children(block_nodes(&item.block))
        }
        Item::Struct(item) => {
            identified("struct", &item.ident, item).with_children(field_nodes(&item.fields))
        }
        Item::Enum(item) => identified("enum", &item.ident, item).with_children(
            item.variants
                .iter()
                .map(|variant| {
                    identified("variant", &variant.ident, variant)
                        .with_children(field_nodes(&variant.fields))
                })
                .collect(),
        ),
        Item::Union(item) => identified("union", &item.ident, item).with_children(
            item.fields
                .named
                .iter()
                .map(|field| match &field.ident {
                    Some(ident) => identified("field", ident, field),
                    None => CodeNode::new("field", tokens(field)),
                })
                .collect(),
        ),
        Item::Trait(item) => identified("trait", &item.ident, item)
            .with_children(item.items.iter().map(trait_item_node).collect()),
        Item::TraitAlias(item) => identified("trait", &item.ident, item),
        Item::Impl(item) => identified("impl", impl_identity(item), item)
            .with_children(item.items.iter().map(impl_item_node).collect()),
        Item::Mod(item) => identified("mod", &item.ident, item).with_children(
            item.content
                .as_ref()
                .map(|(_, items)| items.iter().map(item_node).collect())
                .unwrap_or_default(),
        ),
        Item::Const(item) => identified("const", &item.ident, item),
        Item::Static(item) => identified("static", &item.ident, item),
        Item::Type(item) => identified("type", &item.ident, item),
        Item::ExternCrate(item) => identified("extern crate", &item.ident, item),
        Item::Macro(item) => match &item.ident {
            Some(ident) => identified("macro", ident, item),
            None => CodeNode::new("macro", tokens(item)),
        },
        Item::Use(item) => CodeNode::new("use", tokens(item)),
        other => CodeNode::new("item", tokens(other)),
    }
}

// `impl Display for Foo` and `impl Foo` are different elements
fn impl_identity(item: &ItemImpl) -> String {
    let self_ty = tokens(&*item.self_ty);

    match &item.trait_ {
        Some((_, path, _)) => format!("{} for {}", tokens(path), self_ty),
        None => self_ty,
    }
}

fn impl_item_node(item: &ImplItem) -> CodeNode {
    match item {
        ImplItem::Fn(item) => {
            identified("fn", &item.sig.ident, item).with_children(block_nodes(&item.block))
        }
        ImplItem::Const(item) => identified("const", &item.ident, item),
        ImplItem::Type(item) => identified("type", &item.ident, item),
        other => CodeNode::new("item", tokens(other)),
    }
}

fn trait_item_node(item: &TraitItem) -> CodeNode {
    match item {
        TraitItem::Fn(item) => identified("fn", &item.sig.ident, item)
            .with_children(item.default.as_ref().map(block_nodes).unwrap_or_default()),
        TraitItem::Const(item) => identified("const", &item.ident, item),
        TraitItem::Type(item) => identified("type", &item.ident, item),
        other => CodeNode::new("item", tokens(other)),
    }
}

fn field_nodes(fields: &Fields) -> Vec<CodeNode> {
    fields
        .iter()
        .map(|field| match &field.ident {
            Some(ident) => identified("field", ident, field),
            None => CodeNode::new("field", tokens(field)),
        })
        .collect()
}

fn block_nodes(block: &Block) -> Vec<CodeNode> {
    block.stmts.iter().map(stmt_node).collect()
}

fn stmt_node(stmt: &Stmt) -> CodeNode {
    match stmt {
        Stmt::Local(local) => CodeNode::new("let", tokens(local)),
        Stmt::Item(item) => item_node(item),
        Stmt::Expr(expr, _) => expr_node(expr, tokens(stmt)),
        Stmt::Macro(mac) => CodeNode::new("macro", tokens(mac)),
    }
}

fn expr_node(expr: &Expr, source: String) -> CodeNode {
    let children = match expr {
        Expr::Block(expr) => block_nodes(&expr.block),
        Expr::Unsafe(expr) => block_nodes(&expr.block),
        Expr::Loop(expr) => block_nodes(&expr.body),
        Expr::While(expr) => block_nodes(&expr.body),
        Expr::ForLoop(expr) => block_nodes(&expr.body),
        Expr::If(expr) => if_nodes(expr),
        _ => return CodeNode::new("stmt", source),
    };

    CodeNode::new("block", source).with_children(children)
}

fn if_nodes(expr: &ExprIf) -> Vec<CodeNode> {
    let mut nodes = block_nodes(&expr.then_branch);

    if let Some((_, else_branch)) = &expr.else_branch {
        match else_branch.as_ref() {
            Expr::If(nested) => nodes.extend(if_nodes(nested)),
            Expr::Block(block) => nodes.extend(block_nodes(&block.block)),
            other => nodes.push(CodeNode::new("stmt", tokens(other))),
        }
    }

    nodes
}
