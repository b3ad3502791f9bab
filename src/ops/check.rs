use std::rc::Rc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{Level, Node, Outline};

/// Structured result from an invariant check, suitable for JSON output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
}

/// A violated caller precondition.
///
/// The transforms never raise these — they resolve duplicates first-match and
/// nest malformed outlines best-effort — but callers that want to fail loudly
/// can run a check first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// The same id appears on more than one item
    #[serde(rename = "duplicate_id")]
    DuplicateId { id: String, count: usize },
    /// A leveled child does not sit strictly deeper than its leveled parent
    #[serde(rename = "level_inversion")]
    LevelInversion { parent_id: String, child_id: String },
    /// A heading stored under a group key other than its own level
    #[serde(rename = "mislabeled_group")]
    MislabeledGroup {
        id: String,
        group: Level,
        level: Level,
    },
}

/// Validate a nested forest: ids unique across the whole forest, and every
/// leveled child strictly deeper than its leveled parent.
///
/// Read-only — the forest is never modified.
pub fn check_forest(forest: &[Rc<Node>]) -> CheckResult {
    let mut result = CheckResult::default();

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    count_ids(forest, &mut counts);
    push_duplicates(&counts, &mut result);

    check_levels(forest, &mut result);

    result.valid = result.errors.is_empty();
    result
}

/// Validate a level-grouped outline: ids unique across groups, and every
/// heading stored in the group named by its own level.
pub fn check_outline(outline: &Outline) -> CheckResult {
    let mut result = CheckResult::default();

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for group in Level::ALL {
        for heading in outline.group(group) {
            *counts.entry(heading.id.clone()).or_insert(0) += 1;
            if heading.level != group {
                result.errors.push(CheckError::MislabeledGroup {
                    id: heading.id.clone(),
                    group,
                    level: heading.level,
                });
            }
        }
    }
    push_duplicates(&counts, &mut result);

    result.valid = result.errors.is_empty();
    result
}

fn count_ids(nodes: &[Rc<Node>], counts: &mut IndexMap<String, usize>) {
    for node in nodes {
        *counts.entry(node.id.clone()).or_insert(0) += 1;
        count_ids(&node.children, counts);
    }
}

fn push_duplicates(counts: &IndexMap<String, usize>, result: &mut CheckResult) {
    for (id, count) in counts {
        if *count > 1 {
            result.errors.push(CheckError::DuplicateId {
                id: id.clone(),
                count: *count,
            });
        }
    }
}

fn check_levels(nodes: &[Rc<Node>], result: &mut CheckResult) {
    for node in nodes {
        if let Some(parent_level) = node.level {
            for child in &node.children {
                if let Some(child_level) = child.level
                    && child_level <= parent_level
                {
                    result.errors.push(CheckError::LevelInversion {
                        parent_id: node.id.clone(),
                        child_id: child.id.clone(),
                    });
                }
            }
        }
        check_levels(&node.children, result);
    }
}
