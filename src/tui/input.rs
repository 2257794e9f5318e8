//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::{Direction, GameMode};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a game in the given mode.
    ChooseMode(GameMode),
    /// Move the cursor.
    Cursor(Direction),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a board index.
    Place(usize),
    /// Dismiss the result banner and play another round.
    PlayAgain,
    /// Clear the board, keeping scores.
    Restart,
    /// Return to mode selection.
    NewGame,
    /// Switch light/dark theme.
    ToggleTheme,
    /// Leave the application.
    Quit,
}

/// Which key map applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The mode selection screen.
    ModeSelect,
    /// A round in progress.
    Board,
    /// The result banner after a round.
    Banner,
}

/// Maps a key press to a command.
pub fn command_for(context: KeyContext, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let common = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Command::ToggleTheme),
        _ => None,
    };
    if common.is_some() {
        return common;
    }

    match context {
        KeyContext::ModeSelect => match key.code {
            KeyCode::Char('1') | KeyCode::Char('p') | KeyCode::Char('P') => {
                Some(Command::ChooseMode(GameMode::HumanVsHuman))
            }
            KeyCode::Char('2') | KeyCode::Char('c') | KeyCode::Char('C') => {
                Some(Command::ChooseMode(GameMode::HumanVsComputer))
            }
            _ => None,
        },
        KeyContext::Board => match key.code {
            KeyCode::Up => Some(Command::Cursor(Direction::Up)),
            KeyCode::Down => Some(Command::Cursor(Direction::Down)),
            KeyCode::Left => Some(Command::Cursor(Direction::Left)),
            KeyCode::Right => Some(Command::Cursor(Direction::Right)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
            KeyCode::Char(c) => digit_cell(c).map(Command::Place).or(match c {
                'r' | 'R' => Some(Command::Restart),
                'n' | 'N' => Some(Command::NewGame),
                _ => None,
            }),
            _ => None,
        },
        KeyContext::Banner => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                Some(Command::PlayAgain)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),
            _ => None,
        },
    }
}

/// Keys 1-9 address cells 0-8, row by row.
fn digit_cell(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_map_to_cells() {
        assert_eq!(
            command_for(KeyContext::Board, key(KeyCode::Char('1'))),
            Some(Command::Place(0))
        );
        assert_eq!(
            command_for(KeyContext::Board, key(KeyCode::Char('9'))),
            Some(Command::Place(8))
        );
        assert_eq!(command_for(KeyContext::Board, key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn mode_keys_only_on_mode_screen() {
        assert_eq!(
            command_for(KeyContext::ModeSelect, key(KeyCode::Char('2'))),
            Some(Command::ChooseMode(GameMode::HumanVsComputer))
        );
        assert_eq!(
            command_for(KeyContext::Board, key(KeyCode::Char('c'))),
            None
        );
    }

    #[test]
    fn banner_accepts_play_again() {
        assert_eq!(
            command_for(KeyContext::Banner, key(KeyCode::Enter)),
            Some(Command::PlayAgain)
        );
        assert_eq!(command_for(KeyContext::Banner, key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn banner_accepts_restart() {
        assert_eq!(
            command_for(KeyContext::Banner, key(KeyCode::Char('r'))),
            Some(Command::Restart)
        );
        assert_eq!(
            command_for(KeyContext::Banner, key(KeyCode::Char('R'))),
            Some(Command::Restart)
        );
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(KeyContext::ModeSelect, ev), Some(Command::Quit));
        assert_eq!(command_for(KeyContext::Board, ev), Some(Command::Quit));
    }
}
