//! Letter grids - rectangular cell storage shared by tiled layouts and composites
//!
//! A [`LetterGrid`] holds one letter per cell and is produced by tiling a
//! [`LetterSpecification`](super::LetterSpecification). A [`CompositeGrid`]
//! holds a two-letter [`Pair`] per cell and is produced by nesting a Level 2
//! grid inside every cell of a Level 1 grid.
//!
//! Grids are values: every edit to a specification produces a brand-new grid.
//! Validation failures are reported through [`GridError`], which carries the
//! offending layout name and values so callers can route the failure to the
//! right input without parsing messages.
//!
//! # Example
//! ```
//! use mouseless_grid::layout::{LetterSpecification, compose, tile};
//!
//! let grid = tile(&LetterSpecification::new("AB CD", 2, 2), "Level 1")?;
//! assert_eq!(grid.to_strings(), vec![vec!["A", "B"], vec!["C", "D"]]);
//!
//! let composite = compose(
//!     &LetterSpecification::new("AB CD", 2, 2),
//!     &LetterSpecification::new("XY", 2, 1),
//! )?;
//! assert_eq!(composite.to_strings()[0], vec!["AX", "AY", "BX", "BY"]);
//! # Ok::<(), mouseless_grid::layout::GridError>(())
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::GridShape;

/// Rectangular grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

/// Grid of single letters produced by tiling one layout.
pub type LetterGrid = Grid<char>;

/// Grid of two-letter codes produced by composing Level 1 with Level 2.
pub type CompositeGrid = Grid<Pair>;

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> Grid<T> {
    /// Wrap pre-built rows. Rows are taken as-is; callers are responsible for
    /// keeping them the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Column count taken from the first row (zero for an empty grid).
    pub fn columns(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn shape(&self) -> GridShape {
        GridShape::new(self.columns(), self.rows())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl<T: fmt::Display> Grid<T> {
    /// Render every cell through `Display`, matching the string-array view
    /// used by front-ends.
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|cells| cells.iter().map(ToString::to_string).collect())
            .collect()
    }
}

/// Two-letter composite code: the Level 1 letter followed by the Level 2 letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub first: char,
    pub second: char,
}

impl Pair {
    pub const fn new(first: char, second: char) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A letter that appears more than once in a layout's letter pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateLetter {
    pub letter: char,
    pub count: usize,
}

impl fmt::Display for DuplicateLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({} times)", self.letter, self.count)
    }
}

fn join_duplicates(duplicates: &[DuplicateLetter]) -> String {
    duplicates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fieldless classification of a [`GridError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridErrorKind {
    EmptyInput,
    InvalidDimensions,
    InsufficientLetters,
    DuplicateLetters,
    DuplicatePair,
    MissingLetter,
}

impl GridErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GridErrorKind::EmptyInput => "empty_input",
            GridErrorKind::InvalidDimensions => "invalid_dimensions",
            GridErrorKind::InsufficientLetters => "insufficient_letters",
            GridErrorKind::DuplicateLetters => "duplicate_letters",
            GridErrorKind::DuplicatePair => "duplicate_pair",
            GridErrorKind::MissingLetter => "missing_letter",
        }
    }
}

/// Validation failures raised while tiling or composing grids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("{name} letters string cannot be empty")]
    EmptyInput { name: String },

    #[error(
        "{name} must have at least one column and one row (got {columns} cols × {rows} rows)"
    )]
    InvalidDimensions {
        name: String,
        columns: usize,
        rows: usize,
    },

    #[error(
        "{name} requires at least {required} letters ({columns} cols × {rows} rows), but only {provided} provided"
    )]
    InsufficientLetters {
        name: String,
        required: usize,
        columns: usize,
        rows: usize,
        provided: usize,
    },

    #[error("{name} contains duplicate letters: {}", join_duplicates(.duplicates))]
    DuplicateLetters {
        name: String,
        duplicates: Vec<DuplicateLetter>,
    },

    #[error("Duplicate pair detected: \"{pair}\" at position [{row}, {col}]")]
    DuplicatePair { pair: Pair, row: usize, col: usize },

    /// A source grid was ragged and had no letter where the composite needed one.
    #[error("Missing letter at position [{row}, {col}]")]
    MissingLetter { row: usize, col: usize },
}

impl GridError {
    pub fn kind(&self) -> GridErrorKind {
        match self {
            GridError::EmptyInput { .. } => GridErrorKind::EmptyInput,
            GridError::InvalidDimensions { .. } => GridErrorKind::InvalidDimensions,
            GridError::InsufficientLetters { .. } => GridErrorKind::InsufficientLetters,
            GridError::DuplicateLetters { .. } => GridErrorKind::DuplicateLetters,
            GridError::DuplicatePair { .. } => GridErrorKind::DuplicatePair,
            GridError::MissingLetter { .. } => GridErrorKind::MissingLetter,
        }
    }

    /// Name of the layout the failure belongs to. Composite-level failures
    /// (duplicate pairs, missing letters) belong to no single layout.
    pub fn layout_name(&self) -> Option<&str> {
        match self {
            GridError::EmptyInput { name }
            | GridError::InvalidDimensions { name, .. }
            | GridError::InsufficientLetters { name, .. }
            | GridError::DuplicateLetters { name, .. } => Some(name.as_str()),
            GridError::DuplicatePair { .. } | GridError::MissingLetter { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_displays_first_letter_first() {
        assert_eq!(Pair::new('Q', 'W').to_string(), "QW");
    }

    #[test]
    fn composite_grid_serializes_as_string_rows() {
        let grid = CompositeGrid::from_rows(vec![vec![Pair::new('A', 'X'), Pair::new('A', 'Y')]]);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["AX","AY"]]"#);
    }

    #[test]
    fn letter_grid_reports_shape() {
        let grid = LetterGrid::from_rows(vec![vec!['A', 'B', 'C'], vec!['D', 'E', 'F']]);
        assert_eq!(grid.shape(), GridShape::new(3, 2));
        assert_eq!(grid.get(1, 2), Some(&'F'));
        assert_eq!(grid.get(2, 0), None);
        assert!(LetterGrid::empty().is_empty());
        assert_eq!(LetterGrid::empty().columns(), 0);
    }

    #[test]
    fn duplicate_letters_message_lists_every_letter() {
        let err = GridError::DuplicateLetters {
            name: "Level 2".to_string(),
            duplicates: vec![
                DuplicateLetter { letter: 'A', count: 2 },
                DuplicateLetter { letter: 'B', count: 3 },
            ],
        };
        assert_eq!(
            err.to_string(),
            r#"Level 2 contains duplicate letters: "A" (2 times), "B" (3 times)"#
        );
        assert_eq!(err.kind(), GridErrorKind::DuplicateLetters);
        assert_eq!(err.layout_name(), Some("Level 2"));
    }

    #[test]
    fn insufficient_letters_message_names_dimensions() {
        let err = GridError::InsufficientLetters {
            name: "Level 1".to_string(),
            required: 4,
            columns: 2,
            rows: 2,
            provided: 2,
        };
        assert_eq!(
            err.to_string(),
            "Level 1 requires at least 4 letters (2 cols × 2 rows), but only 2 provided"
        );
    }

    #[test]
    fn duplicate_pair_has_no_layout() {
        let err = GridError::DuplicatePair {
            pair: Pair::new('A', 'X'),
            row: 1,
            col: 3,
        };
        assert_eq!(
            err.to_string(),
            r#"Duplicate pair detected: "AX" at position [1, 3]"#
        );
        assert_eq!(err.layout_name(), None);
        assert_eq!(err.kind().as_str(), "duplicate_pair");
    }
}
