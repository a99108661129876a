use serde::{Deserialize, Serialize};

/// 1-based `(column, row)` pair used at every external boundary.
///
/// Signed components so that out-of-range user input (zero, negative) can be
/// carried to the room and rejected there instead of at the parse site.
/// Never stored; only a request/lookup parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub column: i64,
    pub row: i64,
}

impl Coordinate {
    pub fn new(column: i64, row: i64) -> Self {
        Self { column, row }
    }

    /// Checked conversion to 0-based `(row, column)` grid indices.
    ///
    /// `None` when either component falls outside a `rows x seats_per_row`
    /// grid.
    pub(crate) fn grid_indices(self, rows: usize, seats_per_row: usize) -> Option<(usize, usize)> {
        if self.row < 1 || self.column < 1 {
            return None;
        }
        let row = (self.row - 1) as usize;
        let column = (self.column - 1) as usize;
        if row < rows && column < seats_per_row {
            Some((row, column))
        } else {
            None
        }
    }
}
