//! Geometry of the playing field: units, grids, pieces and the board.

pub use self::{board::*, grid::*, piece::*, unit::*};

pub(crate) mod board;
pub(crate) mod grid;
pub(crate) mod piece;
pub(crate) mod unit;
