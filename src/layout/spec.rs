use serde::{Deserialize, Serialize};

use crate::GridShape;

pub const LEVEL1_NAME: &str = "Level 1";
pub const LEVEL2_NAME: &str = "Level 2";
pub const SUBGRID_NAME: &str = "Subgrid";

/// Letters plus target dimensions for one layout.
///
/// `letters` is a whitespace-separated list of blocks. Separators only exist
/// for readability; the blocks are concatenated into a single letter pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterSpecification {
    pub letters: String,
    pub columns: usize,
    pub rows: usize,
}

impl LetterSpecification {
    pub fn new(letters: impl Into<String>, columns: usize, rows: usize) -> Self {
        Self {
            letters: letters.into(),
            columns,
            rows,
        }
    }

    pub fn shape(&self) -> GridShape {
        GridShape::new(self.columns, self.rows)
    }
}

/// Identifies one of the three user-editable layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayoutSlot {
    Level1,
    Level2,
    Subgrid,
}

impl LayoutSlot {
    pub const ALL: [LayoutSlot; 3] = [LayoutSlot::Level1, LayoutSlot::Level2, LayoutSlot::Subgrid];

    /// Name used in validation errors and on screen.
    pub fn label(&self) -> &'static str {
        match self {
            LayoutSlot::Level1 => LEVEL1_NAME,
            LayoutSlot::Level2 => LEVEL2_NAME,
            LayoutSlot::Subgrid => SUBGRID_NAME,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.label() == label)
    }
}

/// The full user configuration: two nested levels plus the standalone subgrid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridLevels {
    pub level1: LetterSpecification,
    pub level2: LetterSpecification,
    pub subgrid: LetterSpecification,
}

impl Default for GridLevels {
    fn default() -> Self {
        Self {
            level1: LetterSpecification::new("QY WP OE RT UI AS DF GH JN ZM XL CV B", 5, 5),
            level2: LetterSpecification::new("QWERT ASDFG ZXCVB YUIOP HJKLN", 6, 4),
            subgrid: LetterSpecification::new("YUIOP HJKLN QWERT ASDFG ZXCVB", 5, 5),
        }
    }
}

impl GridLevels {
    pub fn get(&self, slot: LayoutSlot) -> &LetterSpecification {
        match slot {
            LayoutSlot::Level1 => &self.level1,
            LayoutSlot::Level2 => &self.level2,
            LayoutSlot::Subgrid => &self.subgrid,
        }
    }

    pub fn get_mut(&mut self, slot: LayoutSlot) -> &mut LetterSpecification {
        match slot {
            LayoutSlot::Level1 => &mut self.level1,
            LayoutSlot::Level2 => &mut self.level2,
            LayoutSlot::Subgrid => &mut self.subgrid,
        }
    }

    /// Copy of `self` with one layout replaced.
    pub fn with(&self, slot: LayoutSlot, spec: LetterSpecification) -> Self {
        let mut next = self.clone();
        *next.get_mut(slot) = spec;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_labels_round_trip() {
        for slot in LayoutSlot::ALL {
            assert_eq!(LayoutSlot::from_label(slot.label()), Some(slot));
        }
        assert_eq!(LayoutSlot::from_label("Level 3"), None);
    }

    #[test]
    fn with_replaces_only_the_named_slot() {
        let levels = GridLevels::default();
        let spec = LetterSpecification::new("AB", 2, 1);
        let next = levels.with(LayoutSlot::Level2, spec.clone());
        assert_eq!(next.level2, spec);
        assert_eq!(next.level1, levels.level1);
        assert_eq!(next.subgrid, levels.subgrid);
    }

    #[test]
    fn levels_deserialize_from_stored_json() {
        let json = r#"{
            "level1": {"letters": "AB CD", "rows": 2, "columns": 2},
            "level2": {"letters": "XY", "rows": 1, "columns": 2},
            "subgrid": {"letters": "QWE", "rows": 1, "columns": 3}
        }"#;
        let levels: GridLevels = serde_json::from_str(json).unwrap();
        assert_eq!(levels.level1, LetterSpecification::new("AB CD", 2, 2));
        assert_eq!(levels.subgrid.shape(), GridShape::new(3, 1));
    }
}
