//! Square cell matrix backing the adjacency and weight stores.
//!
//! Cells live in a single row-major `Vec`. The dimension is the vertex
//! capacity; only the top-left `len × len` block holds live data.

/// Growable square matrix of `Copy` cells.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SquareMatrix<V> {
    dimension: usize,
    cells: Vec<V>,
}

impl<V: Copy + Default> SquareMatrix<V> {
    /// Create a `dimension × dimension` matrix filled with `V::default()`.
    pub(crate) fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![V::default(); dimension * dimension],
        }
    }

    pub(crate) fn dimension(&self) -> usize {
        self.dimension
    }

    pub(crate) fn get(&self, row: usize, column: usize) -> V {
        self.cells[row * self.dimension + column]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, value: V) {
        self.cells[row * self.dimension + column] = value;
    }

    /// Dimension to grow to so that `required` slots fit.
    ///
    /// At least doubles, so repeated single insertions copy amortized O(1)
    /// cells each.
    pub(crate) fn grown_dimension(&self, required: usize) -> usize {
        (self.dimension * 2).max(required).max(1)
    }

    /// Grow to `dimension`, preserving every existing cell.
    ///
    /// Does nothing when the matrix is already at least that large.
    pub(crate) fn grow_to(&mut self, dimension: usize) {
        if dimension <= self.dimension {
            return;
        }

        let mut cells = vec![V::default(); dimension * dimension];
        for row in 0..self.dimension {
            let from = row * self.dimension;
            let to = row * dimension;
            cells[to..to + self.dimension].copy_from_slice(&self.cells[from..from + self.dimension]);
        }

        self.cells = cells;
        self.dimension = dimension;
    }

    /// Reset the row and column of `index` to `V::default()`.
    pub(crate) fn clear_index(&mut self, index: usize, live: usize) {
        for other in 0..live.max(index + 1) {
            self.set(index, other, V::default());
            self.set(other, index, V::default());
        }
    }

    /// Delete row and column `index` from the live `live × live` block.
    ///
    /// Later rows and columns shift down by one and the vacated last row and
    /// column are reset, so the remaining block is exactly the old block with
    /// `index` cut out.
    pub(crate) fn remove_index(&mut self, index: usize, live: usize) {
        debug_assert!(index < live && live <= self.dimension);

        // Row-major forward copy: every source cell sits at or after its
        // destination, so nothing is read after being overwritten.
        let remaining = live - 1;
        for row in 0..remaining {
            let source_row = if row >= index { row + 1 } else { row };
            for column in 0..remaining {
                let source_column = if column >= index { column + 1 } else { column };
                let value = self.get(source_row, source_column);
                self.set(row, column, value);
            }
        }

        self.clear_index(remaining, live);
    }
}
