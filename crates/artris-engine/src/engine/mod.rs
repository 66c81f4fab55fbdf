//! Game engine logic and state management.
//!
//! This module drives the core data structures through a game:
//!
//! - [`Game`] - Board, falling piece, fall/lock state machine and scoring
//! - [`GameConfig`] - Board size, tick ramp and score table, fixed per game
//! - [`GameStats`] - Score, locked pieces and line clear counters
//! - [`PieceGenerator`] - Seeded (or scripted) source of spawned pieces
//! - [`GameObserver`] - Callbacks through which the host mirrors every unit
//!
//! # Game Flow
//!
//! 1. Create a [`Game`] with a configuration and an observer, then call
//!    [`Game::start`]
//! 2. Forward player commands: [`Game::move_piece`], [`Game::rotate_piece`],
//!    [`Game::soft_drop_piece`], [`Game::drop_piece`]
//! 3. Each time [`Game::next_tick_interval`] elapses, call [`Game::tick`]
//! 4. Pieces lock, full rows collapse and the next piece spawns
//! 5. Repeat until a piece locks above the top row
//!
//! # Example
//!
//! ```
//! use artris_engine::{EventRecorder, Game, GameConfig, MoveDirection, PieceSeed};
//!
//! let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
//! let mut game = Game::with_seed(GameConfig::default(), seed, EventRecorder::new()).unwrap();
//! game.start();
//!
//! game.move_piece(MoveDirection::Left).ok();
//! while game.tick().is_fell() {}
//!
//! assert_eq!(game.score(), 10);
//! assert!(game.next_tick_interval().is_some());
//! ```

pub use self::{config::*, game::*, game_stats::*, observer::*, piece_generator::*};

mod config;
mod game;
mod game_stats;
mod observer;
mod piece_generator;
mod serde_duration;
