use std::collections::HashMap;

use super::grid::{DuplicateLetter, GridError, LetterGrid};
use super::spec::LetterSpecification;

/// Flatten a letters field into its letter pool.
///
/// Returns `None` when the field holds no blocks at all (empty or
/// whitespace only).
pub fn letter_pool(letters: &str) -> Option<Vec<char>> {
    let mut blocks = letters.split_whitespace().peekable();
    blocks.peek()?;
    Some(blocks.flat_map(str::chars).collect())
}

/// Letters occurring more than once in `pool`, in order of first appearance.
pub fn find_duplicates(pool: &[char]) -> Vec<DuplicateLetter> {
    let mut counts: HashMap<char, usize> = HashMap::with_capacity(pool.len());
    let mut order = Vec::new();

    for &letter in pool {
        let count = counts.entry(letter).or_insert(0);
        if *count == 0 {
            order.push(letter);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|letter| match counts.get(&letter) {
            Some(&count) if count > 1 => Some(DuplicateLetter { letter, count }),
            _ => None,
        })
        .collect()
}

/// Tile a layout's letters into a `rows × columns` grid.
///
/// Validation runs in a fixed order (empty input, dimensions, pool length,
/// duplicates) and the first failing check is reported; no partial grid is
/// ever returned.
pub fn tile(spec: &LetterSpecification, name: &str) -> Result<LetterGrid, GridError> {
    let pool = letter_pool(&spec.letters).ok_or_else(|| GridError::EmptyInput {
        name: name.to_string(),
    })?;

    let shape = spec.shape();
    if shape.is_empty() {
        return Err(GridError::InvalidDimensions {
            name: name.to_string(),
            columns: spec.columns,
            rows: spec.rows,
        });
    }

    let required = shape.cell_count();
    if pool.len() < required {
        return Err(GridError::InsufficientLetters {
            name: name.to_string(),
            required,
            columns: spec.columns,
            rows: spec.rows,
            provided: pool.len(),
        });
    }

    let duplicates = find_duplicates(&pool);
    if !duplicates.is_empty() {
        return Err(GridError::DuplicateLetters {
            name: name.to_string(),
            duplicates,
        });
    }

    // pool.len() >= required, so the modulo never wraps inside the grid.
    let rows = (0..spec.rows)
        .map(|row| {
            (0..spec.columns)
                .map(|col| pool[(row * spec.columns + col) % pool.len()])
                .collect()
        })
        .collect();

    Ok(LetterGrid::from_rows(rows))
}
