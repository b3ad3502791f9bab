use std::rc::Rc;

use crate::model::{Heading, Level, Outline};
use crate::parse::parse_slot;

/// Apply a drag-end event to an outline: remove the dragged item from its
/// current group and reinsert it at the slot's level and index, relabeled to
/// the slot's level.
///
/// All of the following return the input unchanged (with every group still
/// sharing its items): no slot at all (aborted drag), self-drop, a dragged id
/// that is missing or sits in the anchor group, a malformed slot id, or a
/// slot naming the anchor level.
///
/// The slot index addresses the target group *after* the dragged item has
/// been removed; indices past the end append.
pub fn reorder(outline: &Outline, dragged_id: &str, target_slot_id: Option<&str>) -> Outline {
    let Some(slot_id) = target_slot_id else {
        return outline.clone();
    };
    if dragged_id == slot_id {
        return outline.clone();
    }

    // Anchor items are pinned, so only the reorderable groups are scanned
    let Some((source_level, dragged)) = find_reorderable(outline, dragged_id) else {
        return outline.clone();
    };

    let Some(slot) = parse_slot(slot_id) else {
        return outline.clone();
    };
    if slot.level.is_anchor() {
        return outline.clone();
    }

    let mut updated = outline.clone();
    updated.group_mut(source_level).retain(|h| h.id != dragged_id);

    let relabeled = Heading {
        level: slot.level,
        ..(*dragged).clone()
    };
    let target = updated.group_mut(slot.level);
    let index = slot.index.min(target.len());
    target.insert(index, Rc::new(relabeled));

    updated
}

fn find_reorderable(outline: &Outline, id: &str) -> Option<(Level, Rc<Heading>)> {
    Level::ALL
        .into_iter()
        .filter(|level| !level.is_anchor())
        .find_map(|level| {
            outline
                .group(level)
                .iter()
                .find(|h| h.id == id)
                .map(|h| (level, Rc::clone(h)))
        })
}
