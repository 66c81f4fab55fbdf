use serde::{Deserialize, Serialize};

use super::piece::PieceKind;

/// Identity of one block cell.
///
/// A unit has no position of its own; its position is wherever a [`Grid`](super::Grid)
/// cell refers to it. Ids are handed out by [`UnitIdAllocator`] and never reused within
/// a game, so they double as a stable key while rows collapse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("#{_0}")]
pub struct UnitId(u32);

impl UnitId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Sequential source of fresh [`UnitId`]s.
#[derive(Debug, Clone, Default)]
pub struct UnitIdAllocator {
    next: u32,
}

impl UnitIdAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    pub fn allocate(&mut self) -> UnitId {
        let id = UnitId(self.next);
        self.next = self
            .next
            .checked_add(1)
            .expect("unit id space exhausted");
        id
    }
}

/// Per-unit data kept by the game for every live unit.
///
/// `H` is whatever the embedding application returned from
/// [`GameObserver::add_geometry`](crate::GameObserver::add_geometry); the engine never
/// looks inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit<H> {
    kind: PieceKind,
    handle: H,
}

impl<H> Unit<H> {
    #[must_use]
    pub const fn new(kind: PieceKind, handle: H) -> Self {
        Self { kind, handle }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn handle(&self) -> &H {
        &self.handle
    }

    #[must_use]
    pub fn into_handle(self) -> H {
        self.handle
    }
}
