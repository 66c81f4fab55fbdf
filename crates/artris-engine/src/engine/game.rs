use std::{collections::BTreeMap, time::Duration};

use crate::{
    CommandError, ConfigError, PieceCollisionError,
    core::{
        board::{Board, BoardPosition, signed},
        piece::{PIECE_SIZE, Piece},
        unit::{Unit, UnitId, UnitIdAllocator},
    },
};

use super::{GameConfig, GameObserver, GameStats, PieceGenerator, PieceSeed};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Created but never started.
    #[default]
    Idle,
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// What a gravity tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// The game is not running; nothing happened.
    Idle,
    /// The falling piece moved one row down.
    Fell,
    /// The falling piece settled, `cleared_rows` rows collapsed and the next
    /// piece spawned.
    Locked { cleared_rows: usize },
    /// The falling piece settled partly above the board and ended the game.
    GameOver,
}

/// What locking the falling piece did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum LockOutcome {
    Locked { cleared_rows: usize },
    GameOver,
}

impl From<LockOutcome> for TickOutcome {
    fn from(outcome: LockOutcome) -> Self {
        match outcome {
            LockOutcome::Locked { cleared_rows } => Self::Locked { cleared_rows },
            LockOutcome::GameOver => Self::GameOver,
        }
    }
}

#[derive(Debug, Clone, Default)]
enum FallingPiece {
    #[default]
    None,
    Active {
        piece: Piece,
        anchor: BoardPosition,
    },
}

/// One game: the board, the falling piece, scoring and the gravity ramp.
///
/// Every unit on the board or in the falling piece is mirrored in the observer:
/// the game calls [`GameObserver::add_geometry`] when a piece spawns and keeps the
/// returned handle until the unit is cleared or the game restarts.
///
/// The game has no clock of its own. While it is running, the host waits
/// [`next_tick_interval`](Self::next_tick_interval) and then calls
/// [`tick`](Self::tick); player commands may arrive in between.
pub struct Game<O: GameObserver> {
    config: GameConfig,
    board: Board,
    falling: FallingPiece,
    units: BTreeMap<UnitId, Unit<O::Handle>>,
    unit_ids: UnitIdAllocator,
    generator: PieceGenerator,
    stats: GameStats,
    spawned_pieces: usize,
    state: GameState,
    observer: O,
}

impl<O> Game<O>
where
    O: GameObserver,
{
    /// Creates an idle game drawing pieces from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(config: GameConfig, observer: O) -> Result<Self, ConfigError> {
        Self::with_generator(config, PieceGenerator::new(), observer)
    }

    /// Like [`Self::new`], but with a specific seed for reproducible games.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_seed(
        config: GameConfig,
        seed: PieceSeed,
        observer: O,
    ) -> Result<Self, ConfigError> {
        Self::with_generator(config, PieceGenerator::with_seed(seed), observer)
    }

    /// Creates an idle game drawing pieces from `generator`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_generator(
        config: GameConfig,
        generator: PieceGenerator,
        observer: O,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.board_width, config.board_height),
            config,
            falling: FallingPiece::None,
            units: BTreeMap::new(),
            unit_ids: UnitIdAllocator::new(),
            generator,
            stats: GameStats::new(),
            spawned_pieces: 0,
            state: GameState::Idle,
            observer,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece and its anchor, the board position of its grid's
    /// top-left corner.
    #[must_use]
    pub fn falling_piece(&self) -> Option<(&Piece, BoardPosition)> {
        match &self.falling {
            FallingPiece::None => None,
            FallingPiece::Active { piece, anchor } => Some((piece, *anchor)),
        }
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.stats.score()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Pieces spawned since the last [`start`](Self::start).
    #[must_use]
    pub fn spawned_pieces(&self) -> usize {
        self.spawned_pieces
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// How long the host should wait before the next [`tick`](Self::tick).
    ///
    /// `None` unless the game is running.
    #[must_use]
    pub fn next_tick_interval(&self) -> Option<Duration> {
        self.state
            .is_running()
            .then(|| self.config.tick_interval(self.spawned_pieces))
    }

    /// Starts a new game, discarding whatever the previous one left behind.
    pub fn start(&mut self) {
        for (_, unit) in std::mem::take(&mut self.units) {
            self.observer.remove_geometry(unit.into_handle());
        }
        self.board.clear();
        self.falling = FallingPiece::None;
        self.stats = GameStats::new();
        self.spawned_pieces = 0;
        self.state = GameState::Running;
        self.observer.score_updated(self.stats.score());
        self.spawn_piece();
    }

    /// Shifts the falling piece one column.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not running or the piece would collide.
    pub fn move_piece(&mut self, direction: MoveDirection) -> Result<(), CommandError> {
        let (piece, anchor) = self.active_piece()?;
        let target = match direction {
            MoveDirection::Left => anchor.left(),
            MoveDirection::Right => anchor.right(),
        };
        if self.board.conflicts(piece.grid(), target) {
            return Err(PieceCollisionError.into());
        }
        self.move_anchor(target);
        Ok(())
    }

    /// Rotates the falling piece one quarter turn in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not running or the piece would collide.
    pub fn rotate_piece(&mut self, direction: RotationDirection) -> Result<(), CommandError> {
        let (piece, anchor) = self.active_piece()?;
        let rotation = match direction {
            RotationDirection::Clockwise => piece.rotation().rotated_right(),
            RotationDirection::CounterClockwise => piece.rotation().rotated_left(),
        };
        if self.board.conflicts(&piece.rotated(rotation), anchor) {
            return Err(PieceCollisionError.into());
        }
        if let FallingPiece::Active { piece, .. } = &mut self.falling {
            piece.set_rotation(rotation);
        }
        self.report_piece_position();
        Ok(())
    }

    /// Moves the falling piece one row down. Never locks it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not running or the piece is resting on
    /// something.
    pub fn soft_drop_piece(&mut self) -> Result<(), CommandError> {
        let (piece, anchor) = self.active_piece()?;
        let target = anchor.down(1);
        if self.board.conflicts(piece.grid(), target) {
            return Err(PieceCollisionError.into());
        }
        self.move_anchor(target);
        Ok(())
    }

    /// Drops the falling piece as far as it goes and locks it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not running.
    pub fn drop_piece(&mut self) -> Result<LockOutcome, CommandError> {
        let (piece, anchor) = self.active_piece()?;
        let distance = self.board.drop_distance(piece.grid(), anchor);
        if distance > 0 {
            self.move_anchor(anchor.down(distance));
        }
        Ok(self.lock_piece())
    }

    /// Applies gravity once: the falling piece moves one row down, or locks if it
    /// cannot.
    pub fn tick(&mut self) -> TickOutcome {
        let Ok((piece, anchor)) = self.active_piece() else {
            return TickOutcome::Idle;
        };
        let target = anchor.down(1);
        if !self.board.conflicts(piece.grid(), target) {
            self.move_anchor(target);
            return TickOutcome::Fell;
        }
        self.lock_piece().into()
    }

    /// Board dump with the falling piece drawn as `@`.
    ///
    /// Rows above the board are left out, so a piece that has not entered the
    /// board yet is not shown.
    #[must_use]
    pub fn ascii_art(&self) -> String {
        let mut rows: Vec<Vec<char>> = self
            .board
            .ascii_art()
            .lines()
            .map(|line| line.chars().collect())
            .collect();
        if let FallingPiece::Active { piece, anchor } = &self.falling {
            for (x, y, _) in piece.units() {
                let position = anchor.offset(x, y);
                let (Ok(column), Ok(row)) =
                    (usize::try_from(position.column), usize::try_from(position.row))
                else {
                    continue;
                };
                if let Some(cell) = rows.get_mut(row).and_then(|row| row.get_mut(column)) {
                    *cell = '@';
                }
            }
        }
        rows.iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn active_piece(&self) -> Result<(&Piece, BoardPosition), CommandError> {
        if !self.state.is_running() {
            return Err(CommandError::NotRunning);
        }
        self.falling_piece().ok_or(CommandError::NotRunning)
    }

    fn move_anchor(&mut self, target: BoardPosition) {
        if let FallingPiece::Active { anchor, .. } = &mut self.falling {
            *anchor = target;
        }
        self.report_piece_position();
    }

    fn report_piece_position(&mut self) {
        let FallingPiece::Active { piece, anchor } = &self.falling else {
            return;
        };
        for (x, y, unit) in piece.units() {
            self.observer
                .move_geometry(self.units[&unit].handle(), anchor.offset(x, y), true);
        }
    }

    fn spawn_piece(&mut self) {
        let (kind, rotation) = self.generator.next_piece();
        let piece = Piece::new(kind, rotation, || self.unit_ids.allocate());
        let anchor = BoardPosition::new(
            signed((self.board.num_columns() - PIECE_SIZE) / 2),
            -signed(PIECE_SIZE - piece.bottom_margin()),
        );
        for (x, y, unit) in piece.units() {
            let handle = self.observer.add_geometry(kind, anchor.offset(x, y));
            self.units.insert(unit, Unit::new(kind, handle));
        }
        self.spawned_pieces += 1;
        self.falling = FallingPiece::Active { piece, anchor };
    }

    fn lock_piece(&mut self) -> LockOutcome {
        let FallingPiece::Active { piece, anchor } = std::mem::take(&mut self.falling) else {
            panic!("no falling piece to lock");
        };

        if anchor.row + signed(piece.margins().top) < 0 {
            self.state = GameState::GameOver;
            self.observer.game_over();
            return LockOutcome::GameOver;
        }

        self.board.place(piece.grid(), anchor);
        let mut removed = vec![];
        let mut moved = vec![];
        let cleared_rows = self.board.collapse_full_rows(
            |unit| removed.push(unit),
            |unit, position| moved.push((unit, position)),
        );
        for unit in removed {
            let unit = self
                .units
                .remove(&unit)
                .unwrap_or_else(|| panic!("cleared unit {unit} is not tracked"));
            self.observer.remove_geometry(unit.into_handle());
        }
        for (unit, position) in moved {
            self.observer
                .move_geometry(self.units[&unit].handle(), position, true);
        }

        self.stats.record_lock(cleared_rows, &self.config);
        self.observer.score_updated(self.stats.score());
        self.spawn_piece();
        LockOutcome::Locked { cleared_rows }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::piece::{PieceKind, Rotation},
        engine::{EventRecorder, GameEvent},
    };

    use super::*;

    fn small_config(width: usize, height: usize) -> GameConfig {
        GameConfig {
            board_width: width,
            board_height: height,
            ..GameConfig::default()
        }
    }

    fn scripted(config: GameConfig, pieces: Vec<(PieceKind, Rotation)>) -> Game<EventRecorder> {
        Game::with_generator(config, PieceGenerator::cycle(pieces), EventRecorder::new()).unwrap()
    }

    /// Settles units on the board the way earlier locks would have, handles included.
    fn fill(game: &mut Game<EventRecorder>, cells: &[(usize, usize)]) {
        for &(column, row) in cells {
            let unit = game.unit_ids.allocate();
            let handle = game
                .observer
                .add_geometry(PieceKind::Square, BoardPosition::new(signed(column), signed(row)));
            game.units.insert(unit, Unit::new(PieceKind::Square, handle));
            game.board.set(column, row, Some(unit));
        }
    }

    fn piece_cells(game: &Game<EventRecorder>) -> Vec<BoardPosition> {
        let (piece, anchor) = game.falling_piece().unwrap();
        piece.units().map(|(x, y, _)| anchor.offset(x, y)).collect()
    }

    #[test]
    fn test_new_game_is_idle() {
        let mut game = Game::new(GameConfig::default(), EventRecorder::new()).unwrap();
        assert!(game.state().is_idle());
        assert!(game.falling_piece().is_none());
        assert_eq!(game.next_tick_interval(), None);
        assert_eq!(game.tick(), TickOutcome::Idle);
        assert_eq!(
            game.move_piece(MoveDirection::Left),
            Err(CommandError::NotRunning)
        );
        assert!(game.observer().events().is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = small_config(3, 20);
        assert!(matches!(
            Game::new(config, EventRecorder::new()),
            Err(ConfigError::BoardTooNarrow { width: 3, .. })
        ));
    }

    #[test]
    fn test_start_spawns_first_piece() {
        let mut game = scripted(GameConfig::default(), vec![(PieceKind::T, Rotation::DEG_0)]);
        game.start();

        assert!(game.state().is_running());
        assert_eq!(game.spawned_pieces(), 1);
        assert_eq!(
            game.next_tick_interval(),
            Some(GameConfig::default().tick_interval(1))
        );

        let events = game.observer().events();
        assert_eq!(events[0], GameEvent::ScoreUpdated { score: 0 });
        assert_eq!(
            &events[1..],
            [
                GameEvent::GeometryAdded {
                    handle: 0,
                    kind: PieceKind::T,
                    position: BoardPosition::new(3, -2),
                },
                GameEvent::GeometryAdded {
                    handle: 1,
                    kind: PieceKind::T,
                    position: BoardPosition::new(4, -2),
                },
                GameEvent::GeometryAdded {
                    handle: 2,
                    kind: PieceKind::T,
                    position: BoardPosition::new(5, -2),
                },
                GameEvent::GeometryAdded {
                    handle: 3,
                    kind: PieceKind::T,
                    position: BoardPosition::new(4, -1),
                },
            ]
        );
    }

    #[test]
    fn test_spawn_puts_lowest_unit_just_above_the_board() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let mut game = scripted(GameConfig::default(), vec![(kind, rotation)]);
                game.start();
                let (_, anchor) = game.falling_piece().unwrap();
                assert_eq!(anchor.column, 3, "{kind:?} {rotation:?}");
                let lowest = piece_cells(&game).iter().map(|p| p.row).max().unwrap();
                assert_eq!(lowest, -1, "{kind:?} {rotation:?}");
            }
        }
    }

    #[test]
    fn test_move_stops_at_wall() {
        let mut game = scripted(GameConfig::default(), vec![(PieceKind::I, Rotation::DEG_0)]);
        game.start();

        for _ in 0..4 {
            game.move_piece(MoveDirection::Left).unwrap();
        }
        assert_eq!(game.falling_piece().unwrap().1, BoardPosition::new(-1, -4));

        let before = game.observer().events().len();
        assert_eq!(
            game.move_piece(MoveDirection::Left),
            Err(CommandError::PieceCollision(PieceCollisionError))
        );
        assert_eq!(game.observer().events().len(), before);
        assert_eq!(game.falling_piece().unwrap().1, BoardPosition::new(-1, -4));

        game.move_piece(MoveDirection::Right).unwrap();
        assert_eq!(game.falling_piece().unwrap().1, BoardPosition::new(0, -4));
    }

    #[test]
    fn test_move_reports_every_unit() {
        let mut game = scripted(GameConfig::default(), vec![(PieceKind::Square, Rotation::DEG_0)]);
        game.start();
        game.observer_mut().take_events();

        game.move_piece(MoveDirection::Right).unwrap();
        let events = game.observer().events();
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(GameEvent::is_geometry_moved));
        assert_eq!(
            events[0],
            GameEvent::GeometryMoved {
                handle: 0,
                position: BoardPosition::new(5, -2),
                animate: true,
            }
        );
    }

    #[test]
    fn test_rotation_rejected_at_wall() {
        let mut game = scripted(GameConfig::default(), vec![(PieceKind::I, Rotation::DEG_0)]);
        game.start();
        for _ in 0..4 {
            game.move_piece(MoveDirection::Left).unwrap();
        }
        game.observer_mut().take_events();

        assert_eq!(
            game.rotate_piece(RotationDirection::Clockwise),
            Err(CommandError::PieceCollision(PieceCollisionError))
        );
        assert!(game.observer().events().is_empty());
        assert_eq!(game.falling_piece().unwrap().0.rotation(), Rotation::DEG_0);
    }

    #[test]
    fn test_rotation_in_place() {
        let mut game = scripted(GameConfig::default(), vec![(PieceKind::I, Rotation::DEG_0)]);
        game.start();
        game.soft_drop_piece().unwrap();
        game.soft_drop_piece().unwrap();

        game.rotate_piece(RotationDirection::Clockwise).unwrap();
        let (piece, anchor) = game.falling_piece().unwrap();
        assert_eq!(piece.rotation(), Rotation::DEG_90);
        assert_eq!(anchor, BoardPosition::new(3, -2));
        assert_eq!(
            piece_cells(&game),
            (3..7).map(|c| BoardPosition::new(c, -1)).collect::<Vec<_>>()
        );

        game.rotate_piece(RotationDirection::CounterClockwise).unwrap();
        assert_eq!(game.falling_piece().unwrap().0.rotation(), Rotation::DEG_0);
    }

    #[test]
    fn test_gravity_then_lock() {
        let mut game = scripted(GameConfig::default(), vec![(PieceKind::I, Rotation::DEG_0)]);
        game.start();

        for _ in 0..20 {
            assert_eq!(game.tick(), TickOutcome::Fell);
        }
        assert_eq!(game.tick(), TickOutcome::Locked { cleared_rows: 0 });
        assert_eq!(game.score(), 10);
        assert_eq!(game.spawned_pieces(), 2);
        for row in 16..20 {
            assert!(game.board().grid().is_occupied(4, row));
        }
        assert_eq!(game.board().grid().units().count(), 4);
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let mut game = scripted(small_config(4, 6), vec![(PieceKind::Square, Rotation::DEG_0)]);
        game.start();
        while game.soft_drop_piece().is_ok() {}

        assert_eq!(
            game.soft_drop_piece(),
            Err(CommandError::PieceCollision(PieceCollisionError))
        );
        assert_eq!(game.falling_piece().unwrap().1, BoardPosition::new(0, 3));
        assert!(game.board().grid().is_empty());
        assert_eq!(game.spawned_pieces(), 1);
    }

    #[test]
    fn test_hard_drop_scores_and_collapses() {
        let mut game = scripted(
            small_config(4, 6),
            vec![
                (PieceKind::I, Rotation::DEG_0),
                (PieceKind::Square, Rotation::DEG_0),
            ],
        );
        game.start();
        fill(&mut game, &[(0, 4), (3, 4), (0, 5), (3, 5)]);

        game.move_piece(MoveDirection::Left).unwrap();
        assert_eq!(
            game.drop_piece(),
            Ok(LockOutcome::Locked { cleared_rows: 0 })
        );
        assert_eq!(game.score(), 10);
        assert_eq!(game.board().ascii_art(), "#...\n#...\n#...\n#...\n#..#\n#..#");
        let i_handles: Vec<usize> = (0..4)
            .map(|row| *game.units[&game.board().get(0, row).unwrap()].handle())
            .collect();
        game.observer_mut().take_events();

        assert_eq!(
            game.drop_piece(),
            Ok(LockOutcome::Locked { cleared_rows: 2 })
        );
        assert_eq!(game.score(), 10 + 10 + 300);
        assert_eq!(game.stats().line_cleared_counter()[2], 1);
        assert_eq!(game.board().ascii_art(), "....\n....\n#...\n#...\n#...\n#...");

        let events = game.observer_mut().take_events();
        let removed = events.iter().filter(|e| e.is_geometry_removed()).count();
        assert_eq!(removed, 8);
        let moved: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::GeometryMoved {
                    handle,
                    position,
                    animate: true,
                } if i_handles.contains(handle) => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(
            moved,
            (2..6).map(|row| BoardPosition::new(0, row)).collect::<Vec<_>>()
        );
        assert!(events.contains(&GameEvent::ScoreUpdated { score: 320 }));
        assert_eq!(game.units.len(), 4 + 4);
    }

    #[test]
    fn test_game_over_when_locking_above_the_board() {
        let mut game = scripted(small_config(4, 6), vec![(PieceKind::Square, Rotation::DEG_0)]);
        game.start();
        fill(&mut game, &[(1, 0)]);

        assert_eq!(game.tick(), TickOutcome::GameOver);
        assert!(game.state().is_game_over());
        assert!(game.falling_piece().is_none());
        assert_eq!(game.next_tick_interval(), None);
        let game_overs = |game: &Game<EventRecorder>| {
            game.observer()
                .events()
                .iter()
                .filter(|e| e.is_game_over())
                .count()
        };
        assert_eq!(game_overs(&game), 1);

        assert_eq!(game.tick(), TickOutcome::Idle);
        assert_eq!(game.drop_piece(), Err(CommandError::NotRunning));
        assert_eq!(
            game.rotate_piece(RotationDirection::Clockwise),
            Err(CommandError::NotRunning)
        );
        assert_eq!(game.soft_drop_piece(), Err(CommandError::NotRunning));
        assert_eq!(game_overs(&game), 1);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_restart_discards_previous_game() {
        let mut game = scripted(GameConfig::default(), vec![(PieceKind::Square, Rotation::DEG_0)]);
        game.start();
        game.drop_piece().unwrap();
        assert_eq!(game.score(), 10);
        game.observer_mut().take_events();

        game.start();
        let events = game.observer().events();
        let removed: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::GeometryRemoved { handle } => Some(*handle),
                _ => None,
            })
            .collect();
        assert_eq!(removed, (0..8).collect::<Vec<_>>());
        assert_eq!(events[8], GameEvent::ScoreUpdated { score: 0 });
        assert!(game.board().grid().is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.spawned_pieces(), 1);
        assert_eq!(game.stats().locked_pieces(), 0);
    }

    #[test]
    fn test_tick_interval_tracks_spawns() {
        let mut game = scripted(GameConfig::default(), vec![(PieceKind::I, Rotation::DEG_90)]);
        game.start();
        let first = game.next_tick_interval().unwrap();
        game.drop_piece().unwrap();
        let second = game.next_tick_interval().unwrap();
        assert!(second < first);
        assert_eq!(second, game.config().tick_interval(2));
    }

    #[test]
    fn test_ascii_art_overlays_falling_piece() {
        let mut game = scripted(small_config(4, 4), vec![(PieceKind::Square, Rotation::DEG_0)]);
        game.start();
        assert_eq!(game.ascii_art(), "....\n....\n....\n....");
        game.tick();
        assert_eq!(game.ascii_art(), ".@@.\n....\n....\n....");
        game.tick();
        assert_eq!(game.ascii_art(), ".@@.\n.@@.\n....\n....");
    }
}
