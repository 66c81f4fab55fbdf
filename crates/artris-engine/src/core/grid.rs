use std::{fmt::Write as _, ops::ControlFlow};

use super::unit::UnitId;

/// Fixed-size rectangular occupancy map of optional units.
///
/// Cells are stored row-major: cell `(column, row)` lives at
/// `row * num_columns + column`, with row 0 at the top. Both the board and every
/// piece rotation are grids.
///
/// Cloning a grid copies the occupancy map only; the copy refers to the very same
/// [`UnitId`]s as the original.
///
/// # Panics
///
/// Every indexed accessor panics when `(column, row)` falls outside the grid.
/// Out-of-range access is a bug in the caller, never a game situation.
///
/// # Example
///
/// ```
/// use artris_engine::{Grid, UnitId};
///
/// let mut grid = Grid::new(3, 2);
/// grid.set(1, 0, Some(UnitId::new(0)));
/// grid.set(2, 1, Some(UnitId::new(1)));
///
/// assert_eq!(grid.ascii_art(), ".#.\n..#");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    num_columns: usize,
    num_rows: usize,
    cells: Vec<Option<UnitId>>,
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new(num_columns: usize, num_rows: usize) -> Self {
        assert!(num_columns > 0, "grid must have at least one column");
        assert!(num_rows > 0, "grid must have at least one row");
        Self {
            num_columns,
            num_rows,
            cells: vec![None; num_columns * num_rows],
        }
    }

    #[must_use]
    pub const fn num_columns(&self) -> usize {
        self.num_columns
    }

    #[must_use]
    pub const fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn index(&self, column: usize, row: usize) -> usize {
        assert!(
            column < self.num_columns && row < self.num_rows,
            "grid index ({column}, {row}) out of range for {}x{} grid",
            self.num_columns,
            self.num_rows,
        );
        row * self.num_columns + column
    }

    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> Option<UnitId> {
        self.cells[self.index(column, row)]
    }

    pub fn set(&mut self, column: usize, row: usize, value: Option<UnitId>) {
        let index = self.index(column, row);
        self.cells[index] = value;
    }

    /// Empties a cell and returns what it held.
    pub fn take(&mut self, column: usize, row: usize) -> Option<UnitId> {
        let index = self.index(column, row);
        self.cells[index].take()
    }

    #[must_use]
    pub fn is_occupied(&self, column: usize, row: usize) -> bool {
        self.get(column, row).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Visits occupied cells in row-major order until the visitor breaks.
    ///
    /// Returns the break value of the visitor, or `ControlFlow::Continue(())` when
    /// every occupied cell was visited.
    pub fn traverse<B, F>(&self, mut visitor: F) -> ControlFlow<B>
    where
        F: FnMut(usize, usize, UnitId) -> ControlFlow<B>,
    {
        for (column, row, unit) in self.units() {
            visitor(column, row, unit)?;
        }
        ControlFlow::Continue(())
    }

    /// Visits every occupied cell in row-major order.
    pub fn for_each_unit<F>(&self, mut visitor: F)
    where
        F: FnMut(usize, usize, UnitId),
    {
        for (column, row, unit) in self.units() {
            visitor(column, row, unit);
        }
    }

    /// Iterates `(column, row, unit)` for occupied cells in row-major order.
    pub fn units(&self) -> impl Iterator<Item = (usize, usize, UnitId)> + '_ {
        let num_columns = self.num_columns;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|unit| (i % num_columns, i / num_columns, unit)))
    }

    /// Returns `true` when every cell of `row` holds a unit.
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        let start = self.index(0, row);
        self.cells[start..][..self.num_columns]
            .iter()
            .all(Option::is_some)
    }

    /// Returns `true` when no cell of `row` holds a unit.
    #[must_use]
    pub fn is_row_empty(&self, row: usize) -> bool {
        let start = self.index(0, row);
        self.cells[start..][..self.num_columns]
            .iter()
            .all(Option::is_none)
    }

    /// Returns `true` when no cell of `column` holds a unit.
    #[must_use]
    pub fn is_column_empty(&self, column: usize) -> bool {
        (0..self.num_rows).all(|row| !self.is_occupied(column, row))
    }

    /// Occupancy dump using `#` for occupied and `.` for empty cells.
    ///
    /// Rows are separated by `\n`; there is no trailing newline.
    #[must_use]
    pub fn ascii_art(&self) -> String {
        let mut s = String::with_capacity((self.num_columns + 1) * self.num_rows);
        for row in 0..self.num_rows {
            if row > 0 {
                s.push('\n');
            }
            for column in 0..self.num_columns {
                let c = if self.is_occupied(column, row) { '#' } else { '.' };
                s.push(c);
            }
        }
        s
    }

    /// Parses a `#`/`.` dump back into a grid, allocating units with `next_unit`.
    ///
    /// Any character other than `.` counts as occupied. All rows must share the same
    /// length.
    ///
    /// # Panics
    ///
    /// Panics on an empty picture or on ragged rows.
    #[must_use]
    pub fn from_ascii_art<F>(rows: &[&str], mut next_unit: F) -> Self
    where
        F: FnMut() -> UnitId,
    {
        assert!(!rows.is_empty(), "picture has no rows");
        let num_columns = rows[0].chars().count();
        let mut grid = Self::new(num_columns, rows.len());
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                num_columns,
                "row {row} of picture has a different width",
            );
            for (column, c) in line.chars().enumerate() {
                if c != '.' {
                    grid.set(column, row, Some(next_unit()));
                }
            }
        }
        grid
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.num_rows {
            for column in 0..self.num_columns {
                f.write_char(if self.is_occupied(column, row) { '#' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
