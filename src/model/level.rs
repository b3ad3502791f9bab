use serde::{Deserialize, Serialize};

/// Heading level — the depth class of an item in an outline.
///
/// The set is closed: every level that can appear in a slot identifier or on
/// an item is a variant here, so an unknown level is unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl Level {
    /// All levels in document order, shallowest first
    pub const ALL: [Level; 6] = [
        Level::H1,
        Level::H2,
        Level::H3,
        Level::H4,
        Level::H5,
        Level::H6,
    ];

    /// The key used in group maps and slot identifiers (e.g. `"h2"`)
    pub fn key(self) -> &'static str {
        match self {
            Level::H1 => "h1",
            Level::H2 => "h2",
            Level::H3 => "h3",
            Level::H4 => "h4",
            Level::H5 => "h5",
            Level::H6 => "h6",
        }
    }

    /// Parse a group/slot key into a level
    pub fn from_key(key: &str) -> Option<Level> {
        match key {
            "h1" => Some(Level::H1),
            "h2" => Some(Level::H2),
            "h3" => Some(Level::H3),
            "h4" => Some(Level::H4),
            "h5" => Some(Level::H5),
            "h6" => Some(Level::H6),
            _ => None,
        }
    }

    /// The display tag shown on an item (e.g. `"H2"`)
    pub fn label(self) -> &'static str {
        match self {
            Level::H1 => "H1",
            Level::H2 => "H2",
            Level::H3 => "H3",
            Level::H4 => "H4",
            Level::H5 => "H5",
            Level::H6 => "H6",
        }
    }

    /// Numeric rank, 1 (shallowest) through 6
    pub fn rank(self) -> u8 {
        match self {
            Level::H1 => 1,
            Level::H2 => 2,
            Level::H3 => 3,
            Level::H4 => 4,
            Level::H5 => 5,
            Level::H6 => 6,
        }
    }

    /// Anchor items (the top level) are pinned: never draggable, and their
    /// group is never a valid landing target.
    pub fn is_anchor(self) -> bool {
        self == Level::H1
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
