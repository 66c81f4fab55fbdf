use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::{grid::Grid, unit::UnitId};

/// Side length of the square frame every piece shape lives in.
pub const PIECE_SIZE: usize = 4;

/// A falling piece: a kind, its rotation state and the units it is made of.
///
/// The piece keeps its canonical 0° grid and derives the active grid from it by
/// applying the current rotation. Both grids refer to the same units, so rotating a
/// piece moves its units rather than creating new ones.
///
/// # Example
///
/// ```
/// use artris_engine::{Piece, PieceKind, Rotation, UnitIdAllocator};
///
/// let mut units = UnitIdAllocator::new();
/// let mut piece = Piece::new(PieceKind::L, Rotation::DEG_0, || units.allocate());
/// assert_eq!(piece.ascii_art(), ".#..\n.#..\n.##.\n....");
///
/// piece.set_rotation(piece.rotation().rotated_right());
/// assert_eq!(piece.ascii_art(), "....\n.###\n.#..\n....");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    grid: Grid,
    rotation: Rotation,
    rotated_grid: Grid,
    margins: Margins,
}

impl Piece {
    /// Creates a piece of `kind` in `rotation`, drawing one unit id per block from
    /// `next_unit`.
    #[must_use]
    pub fn new<F>(kind: PieceKind, rotation: Rotation, next_unit: F) -> Self
    where
        F: FnMut() -> UnitId,
    {
        let grid = Grid::from_ascii_art(kind.shape(), next_unit);
        let rotated_grid = rotate_grid(&grid, rotation);
        let margins = Margins::of(&rotated_grid);
        Self {
            kind,
            grid,
            rotation,
            rotated_grid,
            margins,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The grid in the current rotation.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.rotated_grid
    }

    /// The grid in the 0° rotation.
    #[must_use]
    pub fn canonical_grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn bottom_margin(&self) -> usize {
        self.margins.bottom
    }

    /// Computes the grid this piece would have in `rotation` without committing it.
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Grid {
        rotate_grid(&self.grid, rotation)
    }

    /// Commits `rotation`, replacing the active grid and its margins.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotated_grid = rotate_grid(&self.grid, rotation);
        self.margins = Margins::of(&self.rotated_grid);
        self.rotation = rotation;
    }

    /// Iterates `(column, row, unit)` of the active grid in row-major order.
    pub fn units(&self) -> impl Iterator<Item = (usize, usize, UnitId)> + '_ {
        self.rotated_grid.units()
    }

    #[must_use]
    pub fn ascii_art(&self) -> String {
        self.rotated_grid.ascii_art()
    }
}

fn rotate_grid(grid: &Grid, rotation: Rotation) -> Grid {
    let mut rotated = Grid::new(PIECE_SIZE, PIECE_SIZE);
    grid.for_each_unit(|x, y, unit| {
        let (rx, ry) = rotation.transform(x, y);
        rotated.set(rx, ry, Some(unit));
    });
    rotated
}

/// Rotation state of a piece.
///
/// - `0`: 0° (spawn orientation)
/// - `1`: 90° clockwise
/// - `2`: 180°
/// - `3`: 270° clockwise (90° counterclockwise)
///
/// Rotation operations wrap around modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation(u8);

impl Rotation {
    pub const DEG_0: Self = Self(0);
    pub const DEG_90: Self = Self(1);
    pub const DEG_180: Self = Self(2);
    pub const DEG_270: Self = Self(3);

    /// All rotations in clockwise order.
    pub const ALL: [Self; 4] = [Self::DEG_0, Self::DEG_90, Self::DEG_180, Self::DEG_270];

    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 4 { Some(Self(index)) } else { None }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn rotated_left(self) -> Self {
        Self((self.0 + 3) % 4)
    }

    /// Maps a cell of the canonical 4×4 frame to its place in this rotation.
    #[must_use]
    pub const fn transform(self, x: usize, y: usize) -> (usize, usize) {
        const L: usize = PIECE_SIZE - 1;
        match self.0 {
            0 => (x, y),
            1 => (L - y, x),
            2 => (L - x, L - y),
            _ => (y, L - x),
        }
    }
}

impl Distribution<Rotation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rotation {
        Rotation(rng.random_range(0..4))
    }
}

/// Number of entirely empty border rows and columns of a piece grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Margins {
    /// Scans the borders of `grid` for empty rows and columns.
    ///
    /// An empty grid reports its full size on every side.
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        let rows = grid.num_rows();
        let columns = grid.num_columns();
        Self {
            top: (0..rows).take_while(|&r| grid.is_row_empty(r)).count(),
            bottom: (0..rows).rev().take_while(|&r| grid.is_row_empty(r)).count(),
            left: (0..columns).take_while(|&c| grid.is_column_empty(c)).count(),
            right: (0..columns)
                .rev()
                .take_while(|&c| grid.is_column_empty(c))
                .count(),
        }
    }
}

/// The kind of a piece, which fixes its shape and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// 2×2 square (O).
    Square = 0,
    /// Straight line of four (I).
    I = 1,
    /// L-piece.
    L = 2,
    /// Mirrored L-piece (J).
    InverseL = 3,
    /// S-piece.
    S = 4,
    /// Mirrored S-piece (Z).
    InverseS = 5,
    /// T-piece.
    T = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        PieceKind::Square,
        PieceKind::I,
        PieceKind::L,
        PieceKind::InverseL,
        PieceKind::S,
        PieceKind::InverseS,
        PieceKind::T,
    ];

    /// Canonical 0° pattern in the 4×4 frame, `X` marking occupied cells.
    #[must_use]
    pub fn shape(self) -> &'static [&'static str; PIECE_SIZE] {
        &PIECE_SHAPES[self as usize]
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use artris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::Square.as_char(), 'O');
    /// assert_eq!(PieceKind::InverseS.as_char(), 'Z');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::Square => 'O',
            PieceKind::I => 'I',
            PieceKind::L => 'L',
            PieceKind::InverseL => 'J',
            PieceKind::S => 'S',
            PieceKind::InverseS => 'Z',
            PieceKind::T => 'T',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use artris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('J'), Some(PieceKind::InverseL));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(PieceKind::Square),
            'I' => Some(PieceKind::I),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::InverseL),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::InverseS),
            'T' => Some(PieceKind::T),
            _ => None,
        }
    }
}

static PIECE_SHAPES: [[&str; PIECE_SIZE]; PieceKind::LEN] = [
    // Square
    ["....", ".XX.", ".XX.", "...."],
    // I
    [".X..", ".X..", ".X..", ".X.."],
    // L
    [".X..", ".X..", ".XX.", "...."],
    // InverseL
    ["..X.", "..X.", ".XX.", "...."],
    // S
    ["....", ".XX.", "XX..", "...."],
    // InverseS
    ["....", ".XX.", "..XX", "...."],
    // T
    ["....", "XXX.", ".X..", "...."],
];
