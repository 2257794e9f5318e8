//! Heuristic move selection for the computer opponent.
//!
//! No lookahead beyond one ply. Priorities, highest first:
//!
//! 1. complete one of our own lines
//! 2. block an opponent line
//! 3. take the center
//! 4. take a random free corner
//! 5. take any random free square
//!
//! Steps 1 and 2 scan in ascending index order, so ties between equally
//! good cells always resolve to the lowest index.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::error::GameError;
use crate::rules::check_winner;
use crate::types::{Board, Player, Square};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Which priority tier produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum MoveReason {
    /// Completes a line for the mover.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes a free corner.
    Corner,
    /// Any free square.
    Any,
}

/// Chooses a move for `player` using the thread-local RNG.
pub fn choose_move(board: &Board, player: Player) -> Result<usize, GameError> {
    choose_move_with(board, player, &mut rand::rng())
}

/// Chooses a move for `player`, drawing random picks from `rng`.
pub fn choose_move_with<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<usize, GameError> {
    select(board, player, rng).map(|(index, _)| index)
}

/// Chooses a move and reports which tier produced it.
#[instrument(skip(rng))]
pub fn select<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<(usize, MoveReason), GameError> {
    let empty: Vec<usize> = board.empty_indices().collect();
    if empty.is_empty() {
        return Err(GameError::no_move_available());
    }

    let choice = completing_move(board, player)
        .map(|i| (i, MoveReason::Win))
        .or_else(|| completing_move(board, player.opponent()).map(|i| (i, MoveReason::Block)))
        .or_else(|| board.is_empty(CENTER).then_some((CENTER, MoveReason::Center)))
        .or_else(|| {
            let corners: Vec<usize> = CORNERS.into_iter().filter(|&i| board.is_empty(i)).collect();
            corners.choose(rng).map(|&i| (i, MoveReason::Corner))
        })
        .or_else(|| empty.choose(rng).map(|&i| (i, MoveReason::Any)))
        .ok_or_else(GameError::no_move_available)?;

    debug!(index = choice.0, reason = %choice.1, "Heuristic move chosen");
    Ok(choice)
}

/// Lowest empty index where `mark` would complete a line.
fn completing_move(board: &Board, mark: Player) -> Option<usize> {
    board.empty_indices().find(|&i| {
        let mut scratch = *board;
        scratch.set(i, Square::Occupied(mark)).is_ok() && check_winner(&scratch).is_some()
    })
}
