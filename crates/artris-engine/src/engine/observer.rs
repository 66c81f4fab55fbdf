use serde::Serialize;

use crate::core::{board::BoardPosition, piece::PieceKind};

/// Receiver of everything the game does to its units.
///
/// The game calls these synchronously from inside the command or tick that caused
/// them. `Handle` is chosen by the implementation (a scene node, a sprite index,
/// ...); the game stores the handle returned by [`add_geometry`](Self::add_geometry)
/// next to the unit and hands it back on every later call about that unit.
pub trait GameObserver {
    type Handle;

    /// A unit appeared at `position`, as part of a freshly spawned piece.
    fn add_geometry(&mut self, kind: PieceKind, position: BoardPosition) -> Self::Handle;

    /// A unit moved to `position`. `animate` is a presentation hint.
    fn move_geometry(&mut self, handle: &Self::Handle, position: BoardPosition, animate: bool);

    /// A unit left the game, either cleared with its row or discarded by a restart.
    fn remove_geometry(&mut self, handle: Self::Handle);

    fn score_updated(&mut self, score: u64);

    /// The game ended. Called once per game.
    fn game_over(&mut self);
}

/// One observer callback, as recorded by [`EventRecorder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    GeometryAdded {
        handle: usize,
        kind: PieceKind,
        position: BoardPosition,
    },
    GeometryMoved {
        handle: usize,
        position: BoardPosition,
        animate: bool,
    },
    GeometryRemoved {
        handle: usize,
    },
    ScoreUpdated {
        score: u64,
    },
    GameOver,
}

/// Observer that hands out sequential handles and records every callback.
///
/// Useful for headless runs and for asserting on the exact callback stream.
///
/// # Example
///
/// ```
/// use artris_engine::{BoardPosition, EventRecorder, GameEvent, GameObserver, PieceKind};
///
/// let mut recorder = EventRecorder::new();
/// let handle = recorder.add_geometry(PieceKind::T, BoardPosition::new(4, -1));
/// recorder.remove_geometry(handle);
///
/// assert_eq!(recorder.events().len(), 2);
/// assert!(recorder.events()[1].is_geometry_removed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<GameEvent>,
    next_handle: usize,
}

impl EventRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Returns the events recorded so far and starts a fresh log.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for EventRecorder {
    type Handle = usize;

    fn add_geometry(&mut self, kind: PieceKind, position: BoardPosition) -> usize {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.events.push(GameEvent::GeometryAdded {
            handle,
            kind,
            position,
        });
        handle
    }

    fn move_geometry(&mut self, handle: &usize, position: BoardPosition, animate: bool) {
        self.events.push(GameEvent::GeometryMoved {
            handle: *handle,
            position,
            animate,
        });
    }

    fn remove_geometry(&mut self, handle: usize) {
        self.events.push(GameEvent::GeometryRemoved { handle });
    }

    fn score_updated(&mut self, score: u64) {
        self.events.push(GameEvent::ScoreUpdated { score });
    }

    fn game_over(&mut self) {
        self.events.push(GameEvent::GameOver);
    }
}
