use crate::xword_assert_simple;

/// The cell structure of a crossword puzzle: which cells may hold a letter and which are blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major matrix where `true` marks a fillable cell.
    fillable: Vec<bool>,
}

impl Grid {
    /// Creates a grid from rows of booleans where `true` marks a fillable cell.
    ///
    /// The width of the grid is the length of the longest row; shorter rows are padded with
    /// blocked cells.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut fillable = vec![false; height * width];
        for (row_index, row) in rows.iter().enumerate() {
            for (column_index, &cell) in row.iter().enumerate() {
                fillable[row_index * width + column_index] = cell;
            }
        }
        Grid {
            height,
            width,
            fillable,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_fillable(&self, row: usize, column: usize) -> bool {
        xword_assert_simple!(row < self.height && column < self.width);
        self.fillable[row * self.width + column]
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn ragged_rows_are_padded_with_blocked_cells() {
        let grid = Grid::from_rows(vec![vec![true, true, true], vec![true]]);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert!(grid.is_fillable(1, 0));
        assert!(!grid.is_fillable(1, 1));
        assert!(!grid.is_fillable(1, 2));
    }

    #[test]
    fn an_empty_grid_has_no_cells() {
        let grid = Grid::from_rows(vec![]);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.width(), 0);
    }
}
