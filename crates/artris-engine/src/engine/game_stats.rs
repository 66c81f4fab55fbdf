use serde::Serialize;

use super::config::{GameConfig, MAX_CLEARED_ROWS};

/// Game statistics tracking score, lines cleared, and piece count.
///
/// - **Score**: a flat amount per locked piece plus a bonus per line clear,
///   both taken from the [`GameConfig`]
/// - **Locked pieces**: total number of pieces that became part of the board
/// - **Line clear distribution**: count of locks by the number of rows they cleared
///
/// # Example
///
/// ```
/// use artris_engine::{GameConfig, GameStats};
///
/// let config = GameConfig::default();
/// let mut stats = GameStats::new();
/// stats.record_lock(0, &config);
/// stats.record_lock(4, &config);
///
/// assert_eq!(stats.score(), 10 + 10 + 800);
/// assert_eq!(stats.total_cleared_lines(), 4);
/// assert_eq!(stats.line_cleared_counter()[4], 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: u64,
    locked_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; MAX_CLEARED_ROWS + 1],
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; MAX_CLEARED_ROWS + 1],
        }
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Returns the total number of pieces that have been locked into place.
    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of locks by cleared rows.
    ///
    /// Index `n` counts the locks that cleared exactly `n` rows.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; MAX_CLEARED_ROWS + 1] {
        &self.line_cleared_counter
    }

    /// Updates statistics after a piece locks.
    ///
    /// # Panics
    ///
    /// Panics if `cleared_rows` exceeds [`MAX_CLEARED_ROWS`]; a single piece cannot
    /// complete more rows than it is tall.
    pub fn record_lock(&mut self, cleared_rows: usize, config: &GameConfig) {
        assert!(
            cleared_rows <= MAX_CLEARED_ROWS,
            "a single lock cleared {cleared_rows} rows",
        );
        self.locked_pieces += 1;
        self.total_cleared_lines += cleared_rows;
        self.line_cleared_counter[cleared_rows] += 1;
        self.score += config.lock_points(cleared_rows);
    }
}
