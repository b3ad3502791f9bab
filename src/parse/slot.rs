use std::sync::OnceLock;

use regex::Regex;

use crate::model::Level;

/// A parsed drop slot: the gap immediately before `index` in `level`'s group.
/// `index` ranges `0..=len`, where `len` means "append at end".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub level: Level,
    pub index: usize,
}

/// The slot-id grammar shared with the drag layer: a known level key,
/// the literal `-slot-`, and a base-10 index with no leading zeros beyond
/// `"0"` itself.
fn slot_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(h[1-6])-slot-(0|[1-9][0-9]*)$").expect("slot pattern is valid")
    })
}

/// Parse a slot identifier. Anything outside the grammar (including an index
/// too large for `usize`) yields `None`.
pub fn parse_slot(id: &str) -> Option<Slot> {
    let caps = slot_pattern().captures(id)?;
    let level = Level::from_key(caps.get(1)?.as_str())?;
    let index = caps.get(2)?.as_str().parse().ok()?;
    Some(Slot { level, index })
}

/// Format a slot identifier. The output is bit-exact for the drag layer:
/// `"<levelKey>-slot-<index>"`.
pub fn slot_id(level: Level, index: usize) -> String {
    format!("{}-slot-{}", level.key(), index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slots() {
        assert_eq!(
            parse_slot("h2-slot-0"),
            Some(Slot {
                level: Level::H2,
                index: 0
            })
        );
        assert_eq!(
            parse_slot("h6-slot-12"),
            Some(Slot {
                level: Level::H6,
                index: 12
            })
        );
        // The anchor level parses; rejecting it as a landing target is the
        // reorder engine's call
        assert_eq!(
            parse_slot("h1-slot-3"),
            Some(Slot {
                level: Level::H1,
                index: 3
            })
        );
    }

    #[test]
    fn test_parse_rejects_malformed_slots() {
        for id in [
            "",
            "h2-slot-",
            "h2-slot",
            "slot-1",
            "h2-slot-01",
            "h2-slot-1x",
            "h2-slot--1",
            "h7-slot-0",
            "H2-slot-0",
            "h2 -slot-0",
            "h2-slot-0 ",
            "h2-slot-9999999999999999999999",
        ] {
            assert_eq!(parse_slot(id), None, "should reject {:?}", id);
        }
    }

    #[test]
    fn test_zero_index_is_the_only_zero_form() {
        assert_eq!(
            parse_slot("h3-slot-0"),
            Some(Slot {
                level: Level::H3,
                index: 0
            })
        );
        assert_eq!(parse_slot("h3-slot-00"), None);
    }

    #[test]
    fn test_format_parse_round_trip() {
        for level in Level::ALL {
            for index in [0usize, 1, 2, 10, 99] {
                let id = slot_id(level, index);
                assert_eq!(parse_slot(&id), Some(Slot { level, index }));
            }
        }
    }

    #[test]
    fn test_slot_id_format_is_exact() {
        assert_eq!(slot_id(Level::H2, 2), "h2-slot-2");
        assert_eq!(slot_id(Level::H5, 0), "h5-slot-0");
    }
}
