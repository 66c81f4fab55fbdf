//! Deterministic rule engine for a falling-block puzzle game.
//!
//! The crate is split the same way the game is layered:
//!
//! - [`core`] holds the geometry: [`Grid`], the [`Piece`] catalog and the
//!   [`Board`] with collision, drop-distance and row-collapse logic.
//! - [`engine`] holds the [`Game`] orchestrator, its configuration, scoring
//!   and the [`GameObserver`] boundary through which the embedding
//!   application learns about every block that appears, moves or vanishes.
//!
//! The engine owns no clock. The host calls [`Game::tick`] whenever the
//! interval returned by [`Game::next_tick_interval`] has elapsed.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece colliding with the board or its walls")]
pub struct PieceCollisionError;

/// Why a game command was rejected.
///
/// Rejected commands leave the game untouched and fire no callback.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum CommandError {
    #[display("piece colliding when applying command")]
    PieceCollision(PieceCollisionError),
    #[display("game is not running")]
    #[from(skip)]
    NotRunning,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("board width {width} is narrower than the {min}-column piece frame")]
    BoardTooNarrow { width: usize, min: usize },
    #[display("board height must be positive")]
    EmptyBoard,
    #[display("minimum tick interval exceeds the base tick interval")]
    TickFloorAboveBase,
    #[display("tick ramp must span at least one piece")]
    EmptyTickRamp,
}
