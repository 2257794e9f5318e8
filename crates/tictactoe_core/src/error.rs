//! Game error types.

use derive_more::{Display, Error};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMoveReason {
    /// Index outside 0-8.
    #[display("position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),
    /// Target square already taken.
    #[display("square {} is already occupied", _0)]
    Occupied(usize),
    /// The round has already been won or tied.
    #[display("game is already over")]
    GameOver,
}

/// Specific error conditions reported by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A move violated the move preconditions.
    #[display("invalid move: {}", _0)]
    InvalidMove(InvalidMoveReason),
    /// The heuristic was asked to move on a full board.
    #[display("no move available")]
    NoMoveAvailable,
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`GameErrorKind::InvalidMove`] error.
    #[track_caller]
    pub fn invalid_move(reason: InvalidMoveReason) -> Self {
        Self::new(GameErrorKind::InvalidMove(reason))
    }

    /// Shorthand for [`GameErrorKind::NoMoveAvailable`].
    #[track_caller]
    pub fn no_move_available() -> Self {
        Self::new(GameErrorKind::NoMoveAvailable)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> GameErrorKind {
        self.kind
    }
}
