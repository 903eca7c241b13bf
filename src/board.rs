use std::{
    fmt::{Display, Write},
    ops::Range,
};

use itertools::{Itertools, Product};
use log::{debug, warn};

use crate::{
    cell::{Cell, CellState, Family},
    error::{LifeError, Result},
};

/// A `height` x `width` grid of cells surrounded by a one cell thick frame of
/// border cells.
///
/// Cells are stored row-major in a single `Vec` of
/// `(height + 2) * (width + 2)` slots. Interior coordinate `(x, y)` lives at
/// physical `(x + 1, y + 1)`, so every interior cell has eight neighbours
/// without bounds checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    family: Family,
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// A board of dead cells.
    pub fn new(family: Family, height: usize, width: usize) -> Self {
        let interior = Cell::new(CellState::dead(family));
        let border = Cell::border(family);
        let cells = (0..height + 2)
            .cartesian_product(0..width + 2)
            .map(|(row, col)| {
                if (1..=height).contains(&row) && (1..=width).contains(&col) {
                    interior
                } else {
                    border
                }
            })
            .collect();
        Self {
            family,
            height,
            width,
            cells,
        }
    }

    /// Builds a board from one line of text per row. The width is the length
    /// of the first line and every other line must match it; a mismatch is
    /// reported with the 1-based number of the offending row.
    pub fn from_lines<I, S>(family: Family, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<Cell>> = lines
            .into_iter()
            .map(|line| {
                line.as_ref()
                    .chars()
                    .map(|c| Cell::parse(family, c))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        let width = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(LifeError::EmptyInput),
        };
        if let Some((i, row)) = rows.iter().find_position(|row| row.len() != width) {
            return Err(LifeError::JaggedInput {
                line: i + 1,
                expected: width,
                found: row.len(),
            });
        }
        let mut board = Self::new(family, rows.len(), width);
        for (x, row) in rows.into_iter().enumerate() {
            let start = board.index(x, 0);
            board.cells[start..start + width].copy_from_slice(&row);
        }
        debug!(
            "parsed {}x{} {} board, population {}",
            board.height,
            board.width,
            family,
            board.population()
        );
        Ok(board)
    }

    /// Builds a board from text. Leading blank lines are skipped and the
    /// first blank line after the board ends it.
    pub fn parse(family: Family, text: &str) -> Result<Self> {
        let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
        let rows = lines
            .by_ref()
            .take_while(|line| !line.trim().is_empty())
            .collect_vec();
        let ignored = lines.filter(|line| !line.trim().is_empty()).count();
        if ignored > 0 {
            warn!("ignoring {ignored} lines after the end of the board");
        }
        Self::from_lines(family, rows)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn at(&self, x: isize, y: isize) -> Result<&Cell> {
        let i = self.checked_index(x, y)?;
        Ok(&self.cells[i])
    }

    /// Replaces the interior cell at `(x, y)`.
    pub fn set(&mut self, x: isize, y: isize, cell: Cell) -> Result<()> {
        let i = self.checked_index(x, y)?;
        if cell.is_border() {
            return Err(LifeError::BorderCell { x, y });
        }
        if cell.family() != self.family {
            return Err(LifeError::FamilyMismatch {
                expected: self.family,
                found: cell.family(),
            });
        }
        self.cells[i] = cell;
        Ok(())
    }

    /// The eight cells around `(x, y)` in the order
    /// `[up, right, down, left, top-right, bottom-right, bottom-left, top-left]`.
    pub fn neighbours_of(&self, x: isize, y: isize) -> Result<[Cell; 8]> {
        let i = self.checked_index(x, y)?;
        Ok(self.neighbour_indices(i).map(|j| self.cells[j]))
    }

    /// Number of live interior cells.
    pub fn population(&self) -> usize {
        self.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Interior cells in row-major order.
    pub fn iter(&self) -> Interior<'_> {
        Interior {
            board: self,
            front: 0,
            back: self.height * self.width,
        }
    }

    /// Interior coordinates in the same order as [`Board::iter`].
    pub fn coordinates(&self) -> Product<Range<usize>, Range<usize>> {
        (0..self.height).cartesian_product(0..self.width)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells
            .chunks(self.width + 2)
            .skip(1)
            .take(self.height)
            .map(|row| &row[1..row.len() - 1])
    }

    /// The border frame, row-major.
    pub fn frame(&self) -> impl Iterator<Item = &Cell> {
        let stride = self.width + 2;
        let last_row = self.height + 1;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let (row, col) = (i / stride, i % stride);
            let on_frame = row == 0 || row == last_row || col == 0 || col == stride - 1;
            on_frame.then_some(cell)
        })
    }

    /// Moves every interior cell on by one generation. All cells read their
    /// neighbours from `snapshot`, a copy of the board taken before any cell
    /// is replaced.
    pub(crate) fn advance(&mut self, snapshot: &mut Vec<Cell>) -> Result<()> {
        snapshot.clone_from(&self.cells);
        for (x, y) in self.coordinates() {
            let i = self.index(x, y);
            let neighbours = self.neighbour_indices(i).map(|j| snapshot[j]);
            self.cells[i] = snapshot[i].evolve(&neighbours)?;
        }
        Ok(())
    }
}

impl Board {
    fn index(&self, x: usize, y: usize) -> usize {
        (x + 1) * (self.width + 2) + y + 1
    }

    fn checked_index(&self, x: isize, y: isize) -> Result<usize> {
        let out_of_bounds = || LifeError::OutOfBounds {
            x,
            y,
            height: self.height,
            width: self.width,
        };
        let row = usize::try_from(x)
            .ok()
            .filter(|&row| row < self.height)
            .ok_or_else(out_of_bounds)?;
        let col = usize::try_from(y)
            .ok()
            .filter(|&col| col < self.width)
            .ok_or_else(out_of_bounds)?;
        Ok(self.index(row, col))
    }

    fn neighbour_indices(&self, i: usize) -> [usize; 8] {
        let stride = self.width + 2;
        [
            i - stride,
            i + 1,
            i + stride,
            i - 1,
            i - stride + 1,
            i + stride + 1,
            i + stride - 1,
            i - stride - 1,
        ]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_char(cell.render())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Cell;

    type IntoIter = Interior<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row-major iterator over the interior cells of a [`Board`].
#[derive(Clone, Debug)]
pub struct Interior<'a> {
    board: &'a Board,
    front: usize,
    back: usize,
}

impl<'a> Interior<'a> {
    fn cell(&self, n: usize) -> &'a Cell {
        let board = self.board;
        &board.cells[board.index(n / board.width, n % board.width)]
    }
}

impl<'a> Iterator for Interior<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let cell = self.cell(self.front);
        self.front += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Interior<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.cell(self.back))
    }
}

impl ExactSizeIterator for Interior<'_> {}
