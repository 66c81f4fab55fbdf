use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, core::piece::PIECE_SIZE};

/// Largest number of rows a single lock can clear.
pub const MAX_CLEARED_ROWS: usize = PIECE_SIZE;

/// Rules of a game, fixed when the game is created.
///
/// Missing fields take their [`Default`] values when deserializing, so a
/// configuration file only has to name what it changes. Durations are written as
/// whole milliseconds.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use artris_engine::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.tick_interval(0), Duration::from_millis(1000));
/// assert_eq!(config.tick_interval(100), Duration::from_millis(575));
/// assert_eq!(config.tick_interval(1000), Duration::from_millis(150));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in units.
    pub board_width: usize,
    /// Board height in units.
    pub board_height: usize,
    /// Gravity interval before any piece has spawned.
    #[serde(with = "super::serde_duration")]
    pub base_tick_interval: Duration,
    /// Gravity interval once the ramp is complete.
    #[serde(with = "super::serde_duration")]
    pub min_tick_interval: Duration,
    /// Number of spawned pieces over which the interval shrinks to the minimum.
    pub tick_ramp_pieces: u32,
    /// Points for every locked piece.
    pub lock_score: u64,
    /// Bonus points indexed by the number of rows a lock cleared.
    pub line_clear_scores: [u64; MAX_CLEARED_ROWS + 1],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 10,
            board_height: 20,
            base_tick_interval: Duration::from_millis(1000),
            min_tick_interval: Duration::from_millis(150),
            tick_ramp_pieces: 200,
            lock_score: 10,
            line_clear_scores: [0, 100, 300, 500, 800],
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < PIECE_SIZE {
            return Err(ConfigError::BoardTooNarrow {
                width: self.board_width,
                min: PIECE_SIZE,
            });
        }
        if self.board_height == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.min_tick_interval > self.base_tick_interval {
            return Err(ConfigError::TickFloorAboveBase);
        }
        if self.tick_ramp_pieces == 0 {
            return Err(ConfigError::EmptyTickRamp);
        }
        Ok(())
    }

    /// Gravity interval after `spawned_pieces` pieces have entered play.
    ///
    /// Shrinks linearly from [`base_tick_interval`](Self::base_tick_interval) to
    /// [`min_tick_interval`](Self::min_tick_interval) over the first
    /// [`tick_ramp_pieces`](Self::tick_ramp_pieces) spawns, then stays at the floor.
    #[must_use]
    pub fn tick_interval(&self, spawned_pieces: usize) -> Duration {
        let ramp = self.tick_ramp_pieces.max(1);
        let progress = u32::try_from(spawned_pieces).map_or(ramp, |n| n.min(ramp));
        let span = self.base_tick_interval.saturating_sub(self.min_tick_interval);
        self.base_tick_interval - span * progress / ramp
    }

    /// Points awarded for a lock that cleared `cleared_rows` rows.
    #[must_use]
    pub fn lock_points(&self, cleared_rows: usize) -> u64 {
        self.lock_score + self.line_clear_scores[cleared_rows]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let narrow = GameConfig {
            board_width: 3,
            ..GameConfig::default()
        };
        assert_eq!(
            narrow.validate(),
            Err(ConfigError::BoardTooNarrow { width: 3, min: 4 })
        );

        let flat = GameConfig {
            board_height: 0,
            ..GameConfig::default()
        };
        assert_eq!(flat.validate(), Err(ConfigError::EmptyBoard));

        let inverted = GameConfig {
            min_tick_interval: Duration::from_secs(2),
            ..GameConfig::default()
        };
        assert_eq!(inverted.validate(), Err(ConfigError::TickFloorAboveBase));

        let no_ramp = GameConfig {
            tick_ramp_pieces: 0,
            ..GameConfig::default()
        };
        assert_eq!(no_ramp.validate(), Err(ConfigError::EmptyTickRamp));
    }

    #[test]
    fn test_tick_interval_ramp() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(0), Duration::from_millis(1000));
        assert_eq!(config.tick_interval(1), Duration::from_micros(995_750));
        assert_eq!(config.tick_interval(100), Duration::from_millis(575));
        assert_eq!(config.tick_interval(199), Duration::from_micros(154_250));
        assert_eq!(config.tick_interval(200), Duration::from_millis(150));
        assert_eq!(config.tick_interval(5000), Duration::from_millis(150));
        assert_eq!(config.tick_interval(usize::MAX), Duration::from_millis(150));

        let mut previous = config.tick_interval(0);
        for spawned in 1..=250 {
            let interval = config.tick_interval(spawned);
            assert!(interval <= previous);
            previous = interval;
        }
    }

    #[test]
    fn test_lock_points() {
        let config = GameConfig::default();
        assert_eq!(config.lock_points(0), 10);
        assert_eq!(config.lock_points(1), 110);
        assert_eq!(config.lock_points(2), 310);
        assert_eq!(config.lock_points(4), 810);
    }

    #[test]
    fn test_config_serde() {
        let json = serde_json::to_string(&GameConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"board_width":10,"board_height":20,"base_tick_interval":1000,"min_tick_interval":150,"tick_ramp_pieces":200,"lock_score":10,"line_clear_scores":[0,100,300,500,800]}"#
        );

        let config: GameConfig =
            serde_json::from_str(r#"{"board_width":12,"base_tick_interval":800}"#).unwrap();
        assert_eq!(config.board_width, 12);
        assert_eq!(config.board_height, 20);
        assert_eq!(config.base_tick_interval, Duration::from_millis(800));
        assert_eq!(config.min_tick_interval, Duration::from_millis(150));
    }
}
