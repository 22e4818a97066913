use std::collections::HashSet;

use super::core::tile;
use super::grid::{CompositeGrid, GridError, LetterGrid, Pair};
use super::spec::{LEVEL1_NAME, LEVEL2_NAME, LetterSpecification};

/// Tile both levels and nest Level 2 inside every Level 1 cell.
///
/// Level 1 is validated before Level 2, and both before any pair check, so
/// the reported error is always the earliest one in that order.
pub fn compose(
    level1: &LetterSpecification,
    level2: &LetterSpecification,
) -> Result<CompositeGrid, GridError> {
    let outer = tile(level1, LEVEL1_NAME)?;
    let inner = tile(level2, LEVEL2_NAME)?;
    compose_grids(&outer, &inner)
}

/// Compose two already tiled grids.
///
/// Composite cell `(r, c)` pairs `level1[r / inner_rows][c / inner_cols]`
/// with `level2[r % inner_rows][c % inner_cols]`. Every pair must be unique;
/// the first repeat (scanning row-major) is reported at its own position.
pub fn compose_grids(level1: &LetterGrid, level2: &LetterGrid) -> Result<CompositeGrid, GridError> {
    let inner = level2.shape();
    let total = level1.shape().nest(inner);

    let mut seen: HashSet<Pair> = HashSet::with_capacity(total.cell_count());
    let mut rows = Vec::with_capacity(total.rows);

    // Loops only run when both inner axes are non-zero, so the divisions are safe.
    for row in 0..total.rows {
        let mut cells = Vec::with_capacity(total.columns);
        let (outer_row, inner_row) = (row / inner.rows, row % inner.rows);

        for col in 0..total.columns {
            let (outer_col, inner_col) = (col / inner.columns, col % inner.columns);

            let first = level1.get(outer_row, outer_col);
            let second = level2.get(inner_row, inner_col);
            let pair = match (first, second) {
                (Some(&first), Some(&second)) => Pair::new(first, second),
                _ => return Err(GridError::MissingLetter { row, col }),
            };

            if !seen.insert(pair) {
                return Err(GridError::DuplicatePair { pair, row, col });
            }
            cells.push(pair);
        }

        rows.push(cells);
    }

    Ok(CompositeGrid::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridShape;
    use crate::layout::GridErrorKind;
    use proptest::prelude::*;

    fn spec(letters: &str, columns: usize, rows: usize) -> LetterSpecification {
        LetterSpecification::new(letters, columns, rows)
    }

    fn grid(rows: &[&str]) -> LetterGrid {
        LetterGrid::from_rows(rows.iter().map(|row| row.chars().collect()).collect())
    }

    #[test]
    fn nests_level2_inside_each_level1_cell() {
        let composite = compose(&spec("AB CD", 2, 2), &spec("XY", 2, 1)).unwrap();
        assert_eq!(
            composite.to_strings(),
            vec![
                vec!["AX", "AY", "BX", "BY"],
                vec!["CX", "CY", "DX", "DY"],
            ]
        );
    }

    #[test]
    fn inner_rows_vary_fastest_vertically() {
        let composite = compose(&spec("AB", 1, 2), &spec("XY", 1, 2)).unwrap();
        assert_eq!(
            composite.to_strings(),
            vec![vec!["AX"], vec!["AY"], vec!["BX"], vec!["BY"]]
        );
    }

    #[test]
    fn default_levels_compose_to_full_shape() {
        let levels = crate::GridLevels::default();
        let composite = compose(&levels.level1, &levels.level2).unwrap();
        assert_eq!(composite.shape(), GridShape::new(30, 20));
        assert_eq!(composite.get(0, 0).map(ToString::to_string).as_deref(), Some("QQ"));
        assert_eq!(composite.get(0, 6).map(ToString::to_string).as_deref(), Some("YQ"));
    }

    #[test]
    fn level1_errors_win_over_level2() {
        let err = compose(&spec("", 1, 1), &spec("AA", 1, 2)).unwrap_err();
        assert_eq!(err.kind(), GridErrorKind::EmptyInput);
        assert_eq!(err.layout_name(), Some(LEVEL1_NAME));
    }

    #[test]
    fn level2_errors_pass_through_unchanged() {
        let err = compose(&spec("AB", 2, 1), &spec("AA", 1, 2)).unwrap_err();
        assert_eq!(err.kind(), GridErrorKind::DuplicateLetters);
        assert_eq!(err.layout_name(), Some(LEVEL2_NAME));
        assert_eq!(
            err.to_string(),
            r#"Level 2 contains duplicate letters: "A" (2 times)"#
        );
    }

    #[test]
    fn letters_shared_between_levels_are_fine() {
        let composite = compose(&spec("AB", 2, 1), &spec("BA", 2, 1)).unwrap();
        assert_eq!(composite.to_strings(), vec![vec!["AB", "AA", "BB", "BA"]]);
    }

    #[test]
    fn colliding_pairs_report_second_position() {
        let level1 = grid(&["AB", "CA"]);
        let level2 = grid(&["XY"]);
        let err = compose_grids(&level1, &level2).unwrap_err();
        assert_eq!(
            err,
            GridError::DuplicatePair {
                pair: Pair::new('A', 'X'),
                row: 1,
                col: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            r#"Duplicate pair detected: "AX" at position [1, 2]"#
        );
    }

    #[test]
    fn ragged_level2_reports_missing_letter() {
        let level1 = grid(&["A"]);
        let level2 = grid(&["XY", "Z"]);
        let err = compose_grids(&level1, &level2).unwrap_err();
        assert_eq!(err, GridError::MissingLetter { row: 1, col: 1 });
    }

    #[test]
    fn empty_grids_compose_to_empty() {
        let composite = compose_grids(&LetterGrid::empty(), &grid(&["XY"])).unwrap();
        assert!(composite.is_empty());
    }

    proptest! {
        #[test]
        fn every_cell_matches_the_nesting_formula(
            c1 in 1usize..5,
            r1 in 1usize..5,
            c2 in 1usize..5,
            r2 in 1usize..5,
        ) {
            let alphabet: Vec<char> = ('A'..='Z').chain('a'..='z').collect();
            let level1 = spec(&alphabet[..c1 * r1].iter().collect::<String>(), c1, r1);
            let level2 = spec(&alphabet[26..26 + c2 * r2].iter().collect::<String>(), c2, r2);

            let outer = tile(&level1, LEVEL1_NAME).unwrap();
            let inner = tile(&level2, LEVEL2_NAME).unwrap();
            let composite = compose(&level1, &level2).unwrap();

            prop_assert_eq!(composite.shape(), GridShape::new(c1 * c2, r1 * r2));
            for r in 0..r1 * r2 {
                for c in 0..c1 * c2 {
                    let expected = Pair::new(
                        *outer.get(r / r2, c / c2).unwrap(),
                        *inner.get(r % r2, c % c2).unwrap(),
                    );
                    prop_assert_eq!(composite.get(r, c), Some(&expected));
                }
            }
            prop_assert_eq!(compose(&level1, &level2), Ok(composite));
        }
    }
}
