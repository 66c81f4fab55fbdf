use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use super::{grid::Grid, unit::UnitId};

/// Signed board coordinate.
///
/// Rows grow downward from row 0 at the top of the field. Piece anchors and the
/// cells they translate to may sit above the field (`row < 0`) while a piece
/// enters play.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::Display,
)]
#[display("({column}, {row})")]
pub struct BoardPosition {
    pub column: i32,
    pub row: i32,
}

impl BoardPosition {
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The position of cell `(x, y)` of a grid anchored at `self`.
    #[must_use]
    pub fn offset(self, x: usize, y: usize) -> Self {
        Self::new(self.column + signed(x), self.row + signed(y))
    }

    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.column - 1, self.row)
    }

    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.column + 1, self.row)
    }

    #[must_use]
    pub const fn down(self, rows: i32) -> Self {
        Self::new(self.column, self.row + rows)
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const fn signed(value: usize) -> i32 {
    value as i32
}

/// The playing field: a grid of settled units plus the rules that govern it.
///
/// A cell holds a unit exactly when a landed block occupies it. Everything that
/// falls is tested against the board through [`Board::conflicts`] and
/// [`Board::drop_distance`]; completed rows disappear through
/// [`Board::collapse_full_rows`].
///
/// # Example
///
/// ```
/// use artris_engine::{Board, BoardPosition, Piece, PieceKind, Rotation, UnitIdAllocator};
///
/// let mut units = UnitIdAllocator::new();
/// let board = Board::new(10, 20);
/// let piece = Piece::new(PieceKind::I, Rotation::DEG_0, || units.allocate());
///
/// let anchor = BoardPosition::new(3, -4);
/// assert!(!board.conflicts(piece.grid(), anchor));
/// assert_eq!(board.drop_distance(piece.grid(), anchor), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

/// A unit registered during a collapse pass, waiting to learn how far it falls.
#[derive(Debug, Clone, Copy)]
struct PendingMove {
    unit: UnitId,
    column: usize,
    row: usize,
    shift: usize,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(num_columns: usize, num_rows: usize) -> Self {
        Self {
            grid: Grid::new(num_columns, num_rows),
        }
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> Option<UnitId> {
        self.grid.get(column, row)
    }

    pub fn set(&mut self, column: usize, row: usize, value: Option<UnitId>) {
        self.grid.set(column, row, value);
    }

    fn column_index(&self, column: i32) -> Option<usize> {
        usize::try_from(column)
            .ok()
            .filter(|&column| column < self.num_columns())
    }

    /// Returns `true` if `grid` anchored at `location` overlaps a wall, the floor
    /// or a settled unit.
    ///
    /// Cells above the top row never conflict with the board contents, but they
    /// still have to stay between the side walls.
    #[must_use]
    pub fn conflicts(&self, grid: &Grid, location: BoardPosition) -> bool {
        let num_rows = signed(self.num_rows());
        grid.traverse(|x, y, _| {
            let position = location.offset(x, y);
            if position.row >= num_rows {
                return ControlFlow::Break(());
            }
            let Some(column) = self.column_index(position.column) else {
                return ControlFlow::Break(());
            };
            match usize::try_from(position.row) {
                Ok(row) if self.grid.is_occupied(column, row) => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            }
        })
        .is_break()
    }

    /// How many rows `grid` anchored at `location` can fall before it lands.
    ///
    /// Every grid column that holds a unit and lies over the board bounds the fall:
    /// the distance from its lowest unit to the first settled unit (or the floor)
    /// below it. The result is the tightest of those bounds, or `num_rows + 1` when
    /// no column constrains the fall. Settled units above a grid column's lowest
    /// unit do not count, so a piece tucked under an overhang is bounded by what is
    /// beneath it.
    #[must_use]
    pub fn drop_distance(&self, grid: &Grid, location: BoardPosition) -> i32 {
        let grid_rows = grid.num_rows();
        let mut distance = signed(self.num_rows()) + 1;
        for x in 0..grid.num_columns() {
            let Some(column) = self.column_index(location.column + signed(x)) else {
                continue;
            };
            let grid_empty_units = (0..grid_rows)
                .rev()
                .take_while(|&y| !grid.is_occupied(x, y))
                .count();
            if grid_empty_units == grid_rows {
                continue;
            }
            // First board row below the lowest unit of this grid column.
            let below = location.row + signed(grid_rows) - signed(grid_empty_units);
            let board_empty_units = self.first_occupied_row(column, below);
            distance = distance.min(board_empty_units - below);
        }
        distance
    }

    fn first_occupied_row(&self, column: usize, from_row: i32) -> i32 {
        let from = usize::try_from(from_row).unwrap_or(0);
        (from..self.num_rows())
            .find(|&row| self.grid.is_occupied(column, row))
            .map_or(signed(self.num_rows()), signed)
    }

    /// Moves every unit of `grid` anchored at `location` onto the board.
    ///
    /// # Panics
    ///
    /// Panics if a unit would land outside the board or on an occupied cell; the
    /// caller has to rule both out with [`Board::conflicts`] and a top-overflow
    /// check first.
    pub fn place(&mut self, grid: &Grid, location: BoardPosition) {
        grid.for_each_unit(|x, y, unit| {
            let position = location.offset(x, y);
            let column = self
                .column_index(position.column)
                .unwrap_or_else(|| panic!("unit {unit} placed off the board at {position}"));
            let row = usize::try_from(position.row)
                .unwrap_or_else(|_| panic!("unit {unit} placed above the board at {position}"));
            assert!(
                !self.grid.is_occupied(column, row),
                "unit {unit} placed on occupied cell {position}",
            );
            self.grid.set(column, row, Some(unit));
        });
    }

    /// Removes every settled unit, returning them in row-major order.
    pub fn clear(&mut self) -> Vec<UnitId> {
        let units: Vec<_> = self.grid.units().map(|(_, _, unit)| unit).collect();
        self.grid = Grid::new(self.num_columns(), self.num_rows());
        units
    }

    /// Removes every full row and compacts the rows above it downward.
    ///
    /// All full rows are handled in one top-to-bottom pass, so a unit above several
    /// cleared rows falls by exactly the number of rows cleared below it. Once the
    /// pass is over, `on_remove` is called for each unit of a cleared row and
    /// `on_move` for each surviving unit that fell, with its new position. Both
    /// callbacks see units in the row-major order of the board before the collapse.
    ///
    /// Returns the number of rows cleared.
    ///
    /// # Example
    ///
    /// ```
    /// use artris_engine::{Board, UnitId};
    ///
    /// let mut board = Board::new(2, 3);
    /// board.set(0, 0, Some(UnitId::new(0)));
    /// board.set(0, 2, Some(UnitId::new(1)));
    /// board.set(1, 2, Some(UnitId::new(2)));
    ///
    /// let mut removed = vec![];
    /// let mut moved = vec![];
    /// let rows = board.collapse_full_rows(|u| removed.push(u), |u, p| moved.push((u, p)));
    ///
    /// assert_eq!(rows, 1);
    /// assert_eq!(removed, [UnitId::new(1), UnitId::new(2)]);
    /// assert_eq!(board.ascii_art(), "..\n#.\n..");
    /// ```
    pub fn collapse_full_rows<R, M>(&mut self, mut on_remove: R, mut on_move: M) -> usize
    where
        R: FnMut(UnitId),
        M: FnMut(UnitId, BoardPosition),
    {
        let mut removed = vec![];
        let mut pending: Vec<PendingMove> = vec![];
        let mut collapsed = 0;

        for row in 0..self.num_rows() {
            if self.grid.is_row_full(row) {
                for column in 0..self.num_columns() {
                    removed.extend(self.grid.take(column, row));
                }
                self.shift_rows_above(row);
                collapsed += 1;
                for entry in &mut pending {
                    entry.shift += 1;
                }
            } else {
                pending.extend((0..self.num_columns()).filter_map(|column| {
                    self.grid.get(column, row).map(|unit| PendingMove {
                        unit,
                        column,
                        row,
                        shift: 0,
                    })
                }));
            }
        }

        for unit in removed {
            on_remove(unit);
        }
        for entry in pending.into_iter().filter(|entry| entry.shift > 0) {
            let position = BoardPosition::new(signed(entry.column), signed(entry.row + entry.shift));
            debug_assert_eq!(
                self.grid.get(entry.column, entry.row + entry.shift),
                Some(entry.unit)
            );
            on_move(entry.unit, position);
        }
        collapsed
    }

    /// Shifts every row above `row` down by one, leaving row 0 empty.
    fn shift_rows_above(&mut self, row: usize) {
        for y in (0..row).rev() {
            for column in 0..self.num_columns() {
                let unit = self.grid.take(column, y);
                self.grid.set(column, y + 1, unit);
            }
        }
    }

    #[must_use]
    pub fn ascii_art(&self) -> String {
        self.grid.ascii_art()
    }
}
