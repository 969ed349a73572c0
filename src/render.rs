//! Outline rendering for render trees
//!
//! Renders a subtree as an indented, one-node-per-line text outline. Used
//! for debugging output and readable test expectations.

use std::fmt::Write;

use crate::error::RenderTreeResult;
use crate::id::NodeId;
use crate::node::{Node, NodeData};
use crate::tree::Tree;

// =============================================================================
// OutlineConfig
// =============================================================================

/// Configuration for outline rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Whether to print node ids.
    pub show_ids: bool,
    /// Spaces per nesting level.
    pub indent: usize,
}

impl OutlineConfig {
    /// Debug config (ids shown).
    pub const DEBUG: Self = Self {
        show_ids: true,
        indent: 2,
    };

    /// Compact config for snapshots (no ids).
    pub const COMPACT: Self = Self {
        show_ids: false,
        indent: 2,
    };
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self::COMPACT
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render the subtree at `start` as an outline.
pub fn render_outline(
    tree: &Tree,
    start: NodeId,
    config: &OutlineConfig,
) -> RenderTreeResult<String> {
    let mut output = String::new();
    render_node(tree, tree.node(start)?, 0, config, &mut output)?;
    Ok(output)
}

fn render_node(
    tree: &Tree,
    node: &Node,
    level: usize,
    config: &OutlineConfig,
    output: &mut String,
) -> RenderTreeResult<()> {
    for _ in 0..level * config.indent {
        output.push(' ');
    }
    if config.show_ids {
        let _ = write!(output, "{} ", node.id());
    }

    match node.data() {
        NodeData::Root => output.push_str("root"),
        NodeData::Element(e) => {
            output.push('<');
            output.push_str(e.tag());
            for (k, v) in e.attrs() {
                let _ = write!(output, " {k}=\"{v}\"");
            }
            output.push('>');
        }
        NodeData::Text(t) => {
            let _ = write!(output, "{:?} {}pt", t.value(), t.font_size());
            if let Some(font) = t.explicit_font() {
                let _ = write!(output, " {font:?}");
            }
            if t.is_bold() {
                output.push_str(" bold");
            }
        }
    }
    output.push('\n');

    for &child in node.children() {
        render_node(tree, tree.node(child)?, level + 1, config, output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ElementData, TextData};
    use crate::tree::TreeBuilder;

    #[test]
    fn test_render_outline() {
        let mut b = TreeBuilder::new();
        b.open(ElementData::new("body").attr("class", "page")).unwrap();
        b.heading1("Title").unwrap();
        b.text(TextData::new("note", "Sans", 10.5, false).unwrap()).unwrap();
        let tree = b.finish();

        let out = render_outline(&tree, tree.root(), &OutlineConfig::default()).unwrap();
        assert_eq!(
            out,
            "root\n  <body class=\"page\">\n    \"Title\" 32pt bold\n    \"note\" 10.5pt \"Sans\"\n"
        );
    }

    #[test]
    fn test_render_with_ids() {
        let tree = Tree::new();
        let out = render_outline(&tree, tree.root(), &OutlineConfig::DEBUG).unwrap();
        assert_eq!(out, "#0v0 root\n");
    }
}
