//! Pure tic-tac-toe game logic.
//!
//! The crate has no rendering or terminal dependency; a presentation layer
//! owns a [`GameState`], feeds it moves, and asks [`choose_move`] for the
//! computer's reply.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameMode, GameState, MoveOutcome, Player, choose_move};
//!
//! let mut game = GameState::new(GameMode::HumanVsComputer);
//! let outcome = game.apply_move(0).unwrap();
//! assert_eq!(outcome, MoveOutcome::Continue { next_player: Player::O });
//!
//! assert!(game.is_computer_turn());
//! let reply = choose_move(game.board(), *game.active_player()).unwrap();
//! assert_eq!(reply, 4);
//! game.apply_move(reply).unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod selector;
mod types;

pub use error::{GameError, GameErrorKind, InvalidMoveReason};
pub use game::{GameState, MoveOutcome};
pub use position::{Direction, Position};
pub use rules::{WIN_LINES, WinLine, check_winner, is_full, is_tie};
pub use selector::{MoveReason, choose_move, choose_move_with, select};
pub use types::{Board, CELL_COUNT, GameMode, ParseBoardError, Player, Scores, Square};
