use std::fs;
use std::path::Path;

use xword_solver::puzzle::Grid;

use crate::result::XwordError;
use crate::result::XwordResult;

/// Reads and parses a structure file; see [`parse_structure`].
pub(crate) fn parse_structure_file(path: &Path) -> XwordResult<Grid> {
    let source = fs::read_to_string(path)
        .map_err(|e| XwordError::FileReadingError(e, path.display().to_string()))?;
    parse_structure(&source)
}

/// Parses the textual description of a grid: every line is a row, `_` marks a fillable cell, and
/// any other character marks a blocked cell. Lines shorter than the longest line are padded with
/// blocked cells.
pub(crate) fn parse_structure(source: &str) -> XwordResult<Grid> {
    let rows = source
        .lines()
        .map(|line| line.chars().map(|cell| cell == '_').collect())
        .collect();
    let grid = Grid::from_rows(rows);

    let has_fillable_cell = (0..grid.height())
        .any(|row| (0..grid.width()).any(|column| grid.is_fillable(row, column)));
    if !has_fillable_cell {
        return Err(XwordError::EmptyStructure);
    }
    Ok(grid)
}
