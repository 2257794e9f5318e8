//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, InvalidMoveReason};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumIter)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Index `i` maps to row `i / 3`, column `i % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    ///
    /// No turn-order or occupancy checks happen here; use
    /// [`GameState::apply_move`](crate::GameState::apply_move) for play.
    #[track_caller]
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), GameError> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or_else(|| GameError::invalid_move(InvalidMoveReason::OutOfRange(index)))?;
        *slot = square;
        Ok(())
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(player))
            .count()
    }

    /// Clears every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a board from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("expected 9 cells, found {}", _0)]
    Length(#[error(not(source))] usize),
    /// A character that is not a cell.
    #[display("invalid cell character {:?}", _0)]
    Cell(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells: `X`, `O`, and `.` or `-` for empty.
    /// Whitespace and `|` separators are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' => Ok(Square::Empty),
                other => Err(ParseBoardError::Cell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; CELL_COUNT] = cells
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::Length(v.len()))?;
        Ok(Self { squares })
    }
}

/// Who plays against whom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    #[default]
    #[strum(to_string = "Player vs Player")]
    HumanVsHuman,
    /// Human plays X, the computer plays O.
    #[strum(to_string = "Player vs Computer")]
    HumanVsComputer,
}

impl GameMode {
    /// Side played by the computer, if any.
    pub fn computer_side(self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer => Some(Player::O),
        }
    }
}

/// Cumulative results across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Rounds ending in a tie.
    ties: u32,
}

impl Scores {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    pub(crate) fn record_tie(&mut self) {
        self.ties += 1;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_board_with_separators() {
        assert_eq!("X|O|. ...".parse::<Board>(), Err(ParseBoardError::Length(6)));

        let board: Board = "XO. .X. ..O".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(1), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(8), Some(Square::Occupied(Player::O)));
        assert_eq!(board.empty_indices().collect::<Vec<_>>(), vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn rejects_unknown_cell() {
        assert_eq!("XO?......".parse::<Board>(), Err(ParseBoardError::Cell('?')));
    }

    #[test]
    fn set_out_of_range_fails() {
        let mut board = Board::new();
        assert!(board.set(9, Square::Occupied(Player::X)).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn display_numbers_empty_cells() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
