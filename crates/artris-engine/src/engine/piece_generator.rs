use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::piece::{PieceKind, Rotation};

/// Source of the kind and initial rotation of every spawned piece.
///
/// A random generator draws both uniformly from a seeded PCG stream, so two
/// generators built from the same [`PieceSeed`] produce the same pieces. A
/// scripted generator replays a fixed sequence, starting over when it runs out.
///
/// # Example
///
/// ```
/// use artris_engine::{PieceGenerator, PieceKind, Rotation};
///
/// let mut pieces = PieceGenerator::cycle(vec![
///     (PieceKind::I, Rotation::DEG_0),
///     (PieceKind::T, Rotation::DEG_90),
/// ]);
/// assert_eq!(pieces.next_piece(), (PieceKind::I, Rotation::DEG_0));
/// assert_eq!(pieces.next_piece(), (PieceKind::T, Rotation::DEG_90));
/// assert_eq!(pieces.next_piece(), (PieceKind::I, Rotation::DEG_0));
/// ```
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    source: PieceSource,
}

#[derive(Debug, Clone)]
enum PieceSource {
    Random(Pcg32),
    Cycle {
        pieces: Vec<(PieceKind, Rotation)>,
        next: usize,
    },
}

impl PieceGenerator {
    /// Creates a generator with a fresh random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic piece generation.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            source: PieceSource::Random(Pcg32::from_seed(seed.0)),
        }
    }

    /// Creates a generator replaying `pieces` in order, forever.
    ///
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    #[must_use]
    pub fn cycle(pieces: Vec<(PieceKind, Rotation)>) -> Self {
        assert!(!pieces.is_empty(), "piece cycle must not be empty");
        Self {
            source: PieceSource::Cycle { pieces, next: 0 },
        }
    }

    /// Draws the kind and initial rotation of the next piece.
    pub fn next_piece(&mut self) -> (PieceKind, Rotation) {
        match &mut self.source {
            PieceSource::Random(rng) => (rng.random(), rng.random()),
            PieceSource::Cycle { pieces, next } => {
                let piece = pieces[*next];
                *next = (*next + 1) % pieces.len();
                piece
            }
        }
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed, written as 32 hexadecimal digits in text and serialized forms.
/// Using the same seed reproduces the same sequence of pieces, which makes games
/// replayable and tests deterministic.
///
/// # Example
///
/// ```
/// use artris_engine::{PieceGenerator, PieceSeed};
/// use rand::Rng as _;
///
/// let seed: PieceSeed = rand::rng().random();
/// let mut a = PieceGenerator::with_seed(seed);
/// let mut b = PieceGenerator::with_seed(seed);
/// assert_eq!(a.next_piece(), b.next_piece());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid piece seed {input:?}: expected 32 hexadecimal digits")]
pub struct ParsePieceSeedError {
    input: String,
}

impl PieceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParsePieceSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(error());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| error())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `PieceSeed` values using the standard random distribution.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}
