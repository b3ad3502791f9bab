use std::rc::Rc;

use crate::model::Node;

use super::update::update_node;

/// Append a synthesized child under the first node matching `parent_id`.
///
/// The child id is the parent id plus the new child's 1-based ordinal
/// (`"1"` with one existing child gains `"1-2"`), so sequential calls on the
/// same parent always produce distinct ids. The title is derived from the
/// parent's. A miss returns the forest unchanged.
pub fn add_child(forest: &[Rc<Node>], parent_id: &str) -> Vec<Rc<Node>> {
    update_node(forest, parent_id, |parent| {
        let child = Node::new(
            format!("{}-{}", parent.id, parent.children.len() + 1),
            format!("Child of {}", parent.title),
        );
        let mut updated = parent.clone();
        updated.children.push(Rc::new(child));
        updated
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The demo's starting tree: "1" with one child, plus an empty "2"
    fn sample_forest() -> Vec<Rc<Node>> {
        let mut first = Node::new("1".into(), "Item 1".into());
        first
            .children
            .push(Rc::new(Node::new("1-1".into(), "Item 1.1".into())));
        vec![
            Rc::new(first),
            Rc::new(Node::new("2".into(), "Item 2".into())),
        ]
    }

    #[test]
    fn test_add_child_appends_with_ordinal_id() {
        let forest = sample_forest();
        let updated = add_child(&forest, "1");

        let parent = &updated[0];
        assert_eq!(parent.children.len(), 2);
        let child = parent.children.last().unwrap();
        assert_eq!(child.id, "1-2");
        assert_eq!(child.title, "Child of Item 1");
        assert!(child.children.is_empty());
        assert_eq!(child.level, None);
    }

    #[test]
    fn test_sequential_adds_get_distinct_ids() {
        let forest = sample_forest();
        let once = add_child(&forest, "2");
        let twice = add_child(&once, "2");

        let ids: Vec<&str> = twice[1].children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2-1", "2-2"]);
    }

    #[test]
    fn test_add_child_to_nested_parent() {
        let forest = sample_forest();
        let updated = add_child(&forest, "1-1");
        assert_eq!(updated[0].children[0].children[0].id, "1-1-1");
        // The untouched root is shared with the input
        assert!(Rc::ptr_eq(&updated[1], &forest[1]));
    }

    #[test]
    fn test_add_child_miss_is_a_shared_noop() {
        let forest = sample_forest();
        let updated = add_child(&forest, "missing");
        assert_eq!(updated, forest);
        for (new, old) in updated.iter().zip(&forest) {
            assert!(Rc::ptr_eq(new, old));
        }
    }
}
