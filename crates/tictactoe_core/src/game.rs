//! Game state machine for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::{GameError, InvalidMoveReason};
use crate::rules::{WinLine, check_winner, is_full};
use crate::types::{Board, CELL_COUNT, GameMode, Player, Scores, Square};

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Play continues with `next_player` to move.
    Continue {
        /// Player expected to move next.
        next_player: Player,
    },
    /// The mover completed a line.
    Win {
        /// Player who won the round.
        winner: Player,
        /// The completed line.
        line: WinLine,
    },
    /// The board filled up with no line.
    Tie,
}

/// Complete state of a game session.
///
/// Holds one round's board plus the scores accumulated over every round
/// played in the same mode.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move.
    active_player: Player,
    /// Who plays against whom.
    mode: GameMode,
    /// False once the round is won or tied.
    active: bool,
    /// Cumulative results.
    scores: Scores,
    /// Line completed by the last win, for highlighting.
    #[getter(skip)]
    winning_line: Option<WinLine>,
}

impl GameState {
    /// Creates a new game in `mode` with an empty board and X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            mode,
            active: true,
            scores: Scores::default(),
            winning_line: None,
        }
    }

    /// Places the active player's mark at `index` (0-8).
    ///
    /// Rejected moves leave the state untouched.
    #[track_caller]
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        if !self.active {
            return Err(GameError::invalid_move(InvalidMoveReason::GameOver));
        }
        if index >= CELL_COUNT {
            return Err(GameError::invalid_move(InvalidMoveReason::OutOfRange(index)));
        }
        if !self.board.is_empty(index) {
            return Err(GameError::invalid_move(InvalidMoveReason::Occupied(index)));
        }

        let player = self.active_player;
        self.board.set(index, Square::Occupied(player))?;
        debug!(index, %player, "Move applied");

        if let Some((winner, line)) = check_winner(&self.board) {
            self.active = false;
            self.winning_line = Some(line);
            self.scores.record_win(winner);
            info!(%winner, line = ?line.indices(), "Round won");
            return Ok(MoveOutcome::Win { winner, line });
        }

        if is_full(&self.board) {
            self.active = false;
            self.scores.record_tie();
            info!("Round tied");
            return Ok(MoveOutcome::Tie);
        }

        self.active_player = player.opponent();
        Ok(MoveOutcome::Continue {
            next_player: self.active_player,
        })
    }

    /// Clears the board for another round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.active_player = Player::X;
        self.active = true;
        self.winning_line = None;
        debug!("Board reset");
    }

    /// Zeroes all score counters.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.clear();
    }

    /// Starts over in `mode`: fresh board and zeroed scores.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, mode: GameMode) {
        info!(%mode, "New game");
        self.mode = mode;
        self.reset();
        self.reset_scores();
    }

    /// Whether the computer should move now.
    pub fn is_computer_turn(&self) -> bool {
        self.active && self.mode.computer_side() == Some(self.active_player)
    }

    /// The line completed by the winning move of a finished round.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
