use std::rc::Rc;

use crate::model::Node;

/// Replace the first node whose id matches `target_id` with `transform(node)`.
///
/// Only the path from a root down to the target is rebuilt; every other
/// subtree is returned as a pointer-identical `Rc` clone, so callers can use
/// `Rc::ptr_eq` to see what changed. A miss returns the forest unchanged —
/// never an error.
///
/// `transform` must return a node with the same id; this is not enforced.
/// With duplicate ids, the first match in traversal order (depth-first,
/// node before children) wins.
pub fn update_node<F>(forest: &[Rc<Node>], target_id: &str, transform: F) -> Vec<Rc<Node>>
where
    F: FnOnce(&Node) -> Node,
{
    let mut transform = Some(transform);
    update_in(forest, target_id, &mut transform)
}

fn update_in<F>(nodes: &[Rc<Node>], target_id: &str, transform: &mut Option<F>) -> Vec<Rc<Node>>
where
    F: FnOnce(&Node) -> Node,
{
    nodes
        .iter()
        .map(|node| {
            if transform.is_none() {
                // Target already replaced further left
                return Rc::clone(node);
            }
            if node.id == target_id
                && let Some(f) = transform.take()
            {
                return Rc::new(f(node));
            }
            let children = update_in(&node.children, target_id, transform);
            if transform.is_none() {
                // Target was below this node — rebuild it with the new children
                let mut rebuilt = (**node).clone();
                rebuilt.children = children;
                Rc::new(rebuilt)
            } else {
                Rc::clone(node)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two roots:
    ///   1 ── 1-1 ── 1-1-1
    ///    └── 1-2
    ///   2
    fn sample_forest() -> Vec<Rc<Node>> {
        let mut deep = Node::new("1-1".into(), "Item 1.1".into());
        deep.children
            .push(Rc::new(Node::new("1-1-1".into(), "Item 1.1.1".into())));

        let mut root = Node::new("1".into(), "Item 1".into());
        root.children.push(Rc::new(deep));
        root.children
            .push(Rc::new(Node::new("1-2".into(), "Item 1.2".into())));

        vec![Rc::new(root), Rc::new(Node::new("2".into(), "Item 2".into()))]
    }

    #[test]
    fn test_update_replaces_target() {
        let forest = sample_forest();
        let updated = update_node(&forest, "1-1-1", |node| {
            let mut n = node.clone();
            n.title = "Renamed".into();
            n
        });
        assert_eq!(updated[0].children[0].children[0].title, "Renamed");
        assert_eq!(updated[0].children[0].children[0].id, "1-1-1");
    }

    #[test]
    fn test_update_rebuilds_only_the_path() {
        let forest = sample_forest();
        let updated = update_node(&forest, "1-1-1", |node| {
            let mut n = node.clone();
            n.title = "Renamed".into();
            n
        });

        // Path to the target is new
        assert!(!Rc::ptr_eq(&updated[0], &forest[0]));
        assert!(!Rc::ptr_eq(&updated[0].children[0], &forest[0].children[0]));
        // Untouched sibling subtree and untouched root are shared
        assert!(Rc::ptr_eq(&updated[0].children[1], &forest[0].children[1]));
        assert!(Rc::ptr_eq(&updated[1], &forest[1]));
    }

    #[test]
    fn test_update_miss_is_a_shared_noop() {
        let forest = sample_forest();
        let updated = update_node(&forest, "missing", |node| node.clone());
        assert_eq!(updated, forest);
        for (new, old) in updated.iter().zip(&forest) {
            assert!(Rc::ptr_eq(new, old));
        }
    }

    #[test]
    fn test_update_first_match_wins_on_duplicates() {
        let dup_a = Rc::new(Node::new("dup".into(), "First".into()));
        let dup_b = Rc::new(Node::new("dup".into(), "Second".into()));
        let forest = vec![dup_a, dup_b];

        let updated = update_node(&forest, "dup", |node| {
            let mut n = node.clone();
            n.title = "Touched".into();
            n
        });
        assert_eq!(updated[0].title, "Touched");
        assert_eq!(updated[1].title, "Second");
    }

    #[test]
    fn test_update_checks_node_before_children() {
        // "p" is both a root and (as a duplicate) a child — the root wins
        let mut root = Node::new("p".into(), "Parent".into());
        root.children
            .push(Rc::new(Node::new("p".into(), "Child".into())));
        let forest = vec![Rc::new(root)];

        let updated = update_node(&forest, "p", |node| {
            let mut n = node.clone();
            n.title = "Touched".into();
            n
        });
        assert_eq!(updated[0].title, "Touched");
        assert_eq!(updated[0].children[0].title, "Child");
    }
}
