//! Dense P×R matrix of resource unit counts

/// Row-major table of non-negative unit counts
///
/// Rows are processes, columns are resources. Shape checks happen in
/// `ResourceState::new` and `WaitForGraphBuilder::build_from_parts`; the
/// matrix itself trusts its caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl Matrix {
    /// All-zero matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Flatten rows that are already known to have `cols` entries each
    pub(crate) fn from_rows_unchecked(rows: &[Vec<u32>], cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            cells.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Units at (row, col)
    ///
    /// # Panics
    /// If the position is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.offset(row, col)]
    }

    /// Overwrite units at (row, col)
    ///
    /// # Panics
    /// If the position is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Set every entry of a row to zero
    pub fn zero_row(&mut self, row: usize) {
        let start = row * self.cols;
        self.cells[start..start + self.cols].fill(0);
    }

    pub fn is_row_zero(&self, row: usize) -> bool {
        self.row(row).iter().all(|&v| v == 0)
    }

    /// Iterate rows in ascending order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.iter_rows().map(<[u32]>::to_vec).collect()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}
