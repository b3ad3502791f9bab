use std::rc::Rc;

use crate::model::{Heading, Level, Node, Outline};

/// Error type for representation conversions
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("node {0} has no level and cannot be grouped by level")]
    MissingLevel(String),
}

/// Build a nested forest from a level-grouped outline.
///
/// Groups are concatenated in level order and consumed left to right with a
/// stack of open ancestors: each item first closes every open ancestor at its
/// own level or deeper, then attaches to the remaining top — or becomes a
/// root when no ancestor is left. An item deeper than anything before it
/// simply starts a new root, so malformed outlines still yield a renderable
/// forest. O(n) over the item count, O(depth) auxiliary stack.
pub fn nest(outline: &Outline) -> Vec<Rc<Node>> {
    let mut roots: Vec<Rc<Node>> = Vec::new();
    let mut stack: Vec<Node> = Vec::new();

    for level in Level::ALL {
        for heading in outline.group(level) {
            while stack.last().is_some_and(|open| open.level >= Some(level)) {
                close_top(&mut roots, &mut stack);
            }
            stack.push(Node::with_level(
                heading.id.clone(),
                heading.level,
                heading.title.clone(),
            ));
        }
    }
    while !stack.is_empty() {
        close_top(&mut roots, &mut stack);
    }
    roots
}

/// Pop the top open ancestor and attach it to its parent, or promote it to a
/// root when the stack is empty
fn close_top(roots: &mut Vec<Rc<Node>>, stack: &mut Vec<Node>) {
    let Some(done) = stack.pop() else { return };
    match stack.last_mut() {
        Some(parent) => parent.children.push(Rc::new(done)),
        None => roots.push(Rc::new(done)),
    }
}

/// Flatten a nested forest into level groups, depth-first pre-order.
///
/// Every node must carry a level — an unleveled node has no group to land in
/// and is reported as an error rather than silently dropped.
pub fn flatten(forest: &[Rc<Node>]) -> Result<Outline, ConvertError> {
    let mut outline = Outline::new();
    flatten_into(forest, &mut outline)?;
    Ok(outline)
}

fn flatten_into(nodes: &[Rc<Node>], outline: &mut Outline) -> Result<(), ConvertError> {
    for node in nodes {
        let level = node
            .level
            .ok_or_else(|| ConvertError::MissingLevel(node.id.clone()))?;
        outline.push(Heading::new(node.id.clone(), level, node.title.clone()));
        flatten_into(&node.children, outline)?;
    }
    Ok(())
}
