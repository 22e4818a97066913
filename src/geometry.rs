/// Dimensions of a letter grid measured in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    pub columns: usize,
    pub rows: usize,
}

impl GridShape {
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Number of cells covered by the shape. Saturates instead of overflowing.
    pub fn cell_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Shape produced by expanding every cell of `self` into a full copy of `inner`.
    pub fn nest(&self, inner: GridShape) -> GridShape {
        GridShape {
            columns: self.columns.saturating_mul(inner.columns),
            rows: self.rows.saturating_mul(inner.rows),
        }
    }
}
