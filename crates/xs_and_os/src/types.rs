//! Core domain types for Xs and Os.

use serde::Serialize;
use strum::IntoEnumIterator;

/// Three-valued index for a column or a row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Scalar {
    /// First column / top row.
    A,
    /// Second column / middle row.
    B,
    /// Third column / bottom row.
    C,
}

impl Scalar {
    /// Zero-based offset of this scalar.
    pub fn offset(self) -> usize {
        match self {
            Scalar::A => 0,
            Scalar::B => 1,
            Scalar::C => 2,
        }
    }

    /// Scalar at the given zero-based offset.
    pub fn from_offset(offset: usize) -> Option<Self> {
        match offset {
            0 => Some(Scalar::A),
            1 => Some(Scalar::B),
            2 => Some(Scalar::C),
            _ => None,
        }
    }
}

/// A location on the grid: a column and a row.
///
/// Locations order row by row, so iterating a [`Board`] walks the grid the
/// way it is drawn. Serialized as its display form (`"BA"` is column B,
/// row A) so that it can key a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Loc {
    row: Scalar,
    col: Scalar,
}

impl Loc {
    /// Creates a location from a column and a row.
    pub const fn new(col: Scalar, row: Scalar) -> Self {
        Self { row, col }
    }

    /// Column of this location.
    pub fn col(&self) -> Scalar {
        self.col
    }

    /// Row of this location.
    pub fn row(&self) -> Scalar {
        self.row
    }

    /// The grid places, one array per row.
    pub fn grid() -> [[Loc; 3]; 3] {
        use Scalar::*;
        [
            [Loc::new(A, A), Loc::new(B, A), Loc::new(C, A)],
            [Loc::new(A, B), Loc::new(B, B), Loc::new(C, B)],
            [Loc::new(A, C), Loc::new(B, C), Loc::new(C, C)],
        ]
    }

    /// All nine places in grid order.
    pub fn all() -> impl Iterator<Item = Loc> {
        Scalar::iter().flat_map(|row| Scalar::iter().map(move |col| Loc::new(col, row)))
    }

    /// Keypad index of this location (0 top-left, 8 bottom-right).
    pub fn index(&self) -> usize {
        self.row.offset() * 3 + self.col.offset()
    }

    /// Location for a keypad index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        let row = Scalar::from_offset(index / 3)?;
        let col = Scalar::from_offset(index % 3)?;
        Some(Loc::new(col, row))
    }
}

impl std::fmt::Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.col, self.row)
    }
}

impl From<Loc> for String {
    fn from(loc: Loc) -> Self {
        loc.to_string()
    }
}

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Phase of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Play {
    /// Moves can be made.
    Active,
    /// The board filled up with no winner.
    Draw,
    /// Someone completed a path or the opponent forfeited.
    Won,
}

/// Mapping from locations to the player occupying them. Absent keys are empty.
pub type Board = im::OrdMap<Loc, Player>;

/// Win counts per player.
pub type Score = im::OrdMap<Player, u32>;

/// Score with every player at zero.
pub fn initial_score() -> Score {
    Player::iter().map(|p| (p, 0u32)).collect()
}
