use std::fmt::Write as _;
use std::rc::Rc;

use crate::model::{Level, Node, Outline};

/// Render a nested forest as an indented list, one line per node, two spaces
/// per depth. Leveled nodes show their level tag before the title; every line
/// ends with the node id in parentheses.
pub fn serialize_forest(forest: &[Rc<Node>]) -> String {
    let mut out = String::new();
    write_nodes(forest, 0, &mut out);
    out
}

fn write_nodes(nodes: &[Rc<Node>], depth: usize, out: &mut String) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        match node.level {
            Some(level) => {
                let _ = writeln!(out, "{}- {} {} ({})", indent, level.label(), node.title, node.id);
            }
            None => {
                let _ = writeln!(out, "{}- {} ({})", indent, node.title, node.id);
            }
        }
        write_nodes(&node.children, depth + 1, out);
    }
}

/// Render an outline as per-level listings in level order, skipping empty
/// groups.
pub fn serialize_outline(outline: &Outline) -> String {
    let mut out = String::new();
    for level in Level::ALL {
        let group = outline.group(level);
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}:", level.key());
        for heading in group {
            let _ = writeln!(out, "- {} ({})", heading.title, heading.id);
        }
    }
    out
}
