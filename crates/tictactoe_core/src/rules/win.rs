//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::{Board, Player, Square};

/// Three board indices that win when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// The indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Whether `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// The player holding all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let sq = board.get(a)?;
        if sq != Square::Empty && Some(sq) == board.get(b) && Some(sq) == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

/// All winning lines, in detection order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Checks if there is a winner on the board.
///
/// Returns the winner and the first completed line in [`WIN_LINES`]
/// order. Only that line gets highlighted when a malformed board holds
/// more than one.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}

/// Every completed line on the board, in [`WIN_LINES`] order.
pub fn winning_lines(board: &Board) -> Vec<(Player, WinLine)> {
    WIN_LINES
        .iter()
        .filter_map(|line| line.owner(board).map(|player| (player, *line)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board_with(player: Player, cells: [usize; 3]) -> Board {
        let mut board = Board::new();
        for i in cells {
            board.set(i, Square::Occupied(player)).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_individually() {
        for line in WIN_LINES {
            for player in Player::iter() {
                let board = board_with(player, line.indices());
                assert_eq!(
                    check_winner(&board),
                    Some((player, line)),
                    "line {:?} for {}",
                    line,
                    player
                );
            }
        }
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XXO......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // Top row and left column both complete on a malformed board.
        let board: Board = "XXX X.. X..".parse().unwrap();
        let all = winning_lines(&board);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].1, WIN_LINES[0]);
        assert_eq!(all[1].1, WIN_LINES[3]);
        assert_eq!(check_winner(&board), Some((Player::X, WIN_LINES[0])));
    }
}
