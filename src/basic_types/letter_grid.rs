use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::Solution;
use crate::puzzle::Crossword;
use crate::xword_assert_moderate;

/// The letter placed in every fillable cell of a solved puzzle.
///
/// The [`Display`] implementation renders one line per grid row: blocked cells are rendered as
/// `█`, fillable cells as their letter, and fillable cells which are not part of any slot as a
/// space.
#[derive(Debug, Clone)]
pub struct LetterGrid {
    height: usize,
    width: usize,
    fillable: Vec<bool>,
    letters: Vec<Option<char>>,
}

impl LetterGrid {
    /// Places the words of `solution` into the cells of the puzzle grid.
    pub fn new(puzzle: &Crossword, solution: &Solution) -> Self {
        let grid = puzzle.grid();
        let width = grid.width();
        let mut letters = vec![None; grid.height() * width];
        for slot_id in puzzle.slots() {
            let slot = puzzle.slot(slot_id);
            for (index, letter) in solution.word(slot_id).chars().enumerate() {
                let (row, column) = slot.cell(index);
                let cell = row * width + column;
                // Crossing slots must have written the same letter into the shared cell.
                xword_assert_moderate!(letters[cell].is_none() || letters[cell] == Some(letter));
                letters[cell] = Some(letter);
            }
        }
        let fillable = (0..grid.height())
            .flat_map(|row| (0..width).map(move |column| (row, column)))
            .map(|(row, column)| grid.is_fillable(row, column))
            .collect();
        LetterGrid {
            height: grid.height(),
            width,
            fillable,
            letters,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The letter in the given cell, or [`None`] when the cell is blocked or not covered by any
    /// slot.
    pub fn letter(&self, row: usize, column: usize) -> Option<char> {
        self.letters[row * self.width + column]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for column in 0..self.width {
                if self.fillable[row * self.width + column] {
                    write!(f, "{}", self.letter(row, column).unwrap_or(' '))?;
                } else {
                    write!(f, "█")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterGrid;
    use crate::basic_types::Assignment;
    use crate::basic_types::Solution;
    use crate::puzzle::Crossword;
    use crate::puzzle::Grid;
    use crate::puzzle::Vocabulary;

    #[test]
    fn letters_are_placed_along_the_slot() {
        let puzzle = Crossword::new(Grid::from_rows(vec![vec![true, true, true]]));
        let vocabulary = Vocabulary::new(["CAT".to_owned()]);
        let mut assignment = Assignment::new(puzzle.num_slots(), vocabulary.len());
        let slot = puzzle.slots().next().unwrap();
        assignment.assign(slot, vocabulary.id_of("CAT").unwrap());
        let solution = Solution::new(&assignment, &vocabulary);

        let letter_grid = LetterGrid::new(&puzzle, &solution);
        assert_eq!(letter_grid.letter(0, 0), Some('C'));
        assert_eq!(letter_grid.letter(0, 1), Some('A'));
        assert_eq!(letter_grid.letter(0, 2), Some('T'));
        assert_eq!(letter_grid.to_string(), "CAT\n");
    }

    #[test]
    fn blocked_and_uncovered_cells_are_rendered_distinctly() {
        // The final column is a fillable cell which is too short to form a slot.
        let puzzle = Crossword::new(Grid::from_rows(vec![vec![
            true, true, true, false, true,
        ]]));
        let vocabulary = Vocabulary::new(["CAT".to_owned()]);
        let mut assignment = Assignment::new(puzzle.num_slots(), vocabulary.len());
        let slot = puzzle.slots().next().unwrap();
        assignment.assign(slot, vocabulary.id_of("CAT").unwrap());
        let solution = Solution::new(&assignment, &vocabulary);

        let letter_grid = LetterGrid::new(&puzzle, &solution);
        assert_eq!(letter_grid.letter(0, 4), None);
        assert_eq!(letter_grid.to_string(), "CAT█ \n");
    }
}
