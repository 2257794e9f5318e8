//! Application state and logic.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use std::time::{Duration, Instant};
use tictactoe_core::{GameMode, GameState, MoveOutcome, Player, Position, choose_move};
use tracing::{debug, info, instrument, warn};

use super::confetti::Confetti;
use super::input::{Command, KeyContext, command_for};
use super::theme::Theme;
use crate::config::AppConfig;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choose two-player or versus-computer.
    ModeSelect,
    /// The board.
    Playing,
}

/// Result banner shown over the board after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Someone completed a line.
    Win(Player),
    /// Board filled with no line.
    Tie,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the app.
    Quit,
}

/// Main application state.
///
/// Driven by [`App::handle_key`] for input and [`App::tick`] for the
/// passage of time; both take the current instant so the computer's
/// thinking pause can be simulated in tests.
#[derive(Debug, Getters)]
pub struct App {
    screen: Screen,
    game: GameState,
    cursor: Position,
    theme: Theme,
    banner: Option<Banner>,
    confetti: Option<Confetti>,
    /// When the pending computer move fires.
    #[getter(skip)]
    computer_due: Option<Instant>,
    #[getter(skip)]
    ai_delay: Duration,
    #[getter(skip)]
    confetti_particles: usize,
    #[getter(skip)]
    confetti_duration: Duration,
}

impl App {
    /// Creates the app on the mode selection screen.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            screen: Screen::ModeSelect,
            game: GameState::default(),
            cursor: Position::Center,
            theme: *config.theme(),
            banner: None,
            confetti: None,
            computer_due: None,
            ai_delay: config.ai_delay(),
            confetti_particles: *config.confetti_particles(),
            confetti_duration: config.confetti_duration(),
        }
    }

    /// Key map for the current state.
    pub fn key_context(&self) -> KeyContext {
        match (self.screen, self.banner) {
            (Screen::ModeSelect, _) => KeyContext::ModeSelect,
            (Screen::Playing, Some(_)) => KeyContext::Banner,
            (Screen::Playing, None) => KeyContext::Board,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        match command_for(self.key_context(), key) {
            Some(command) => self.apply(command, now),
            None => Flow::Continue,
        }
    }

    /// Executes a command.
    #[instrument(skip(self, now))]
    pub fn apply(&mut self, command: Command, now: Instant) -> Flow {
        match command {
            Command::ChooseMode(mode) => self.start(mode),
            Command::Cursor(direction) => self.cursor = self.cursor.step(direction),
            Command::PlaceAtCursor => self.place(self.cursor.to_index(), now),
            Command::Place(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.place(index, now);
            }
            Command::PlayAgain | Command::Restart => self.restart(),
            Command::NewGame => self.back_to_mode_select(),
            Command::ToggleTheme => {
                self.theme = self.theme.toggle();
                debug!(theme = ?self.theme, "Theme toggled");
            }
            Command::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Starts a game in `mode` with zeroed scores.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode) {
        self.game.new_game(mode);
        self.screen = Screen::Playing;
        self.cursor = Position::Center;
        self.clear_round_effects();
    }

    /// Human move at `index`.
    ///
    /// Ignored while the computer is due to move.
    #[instrument(skip(self, now))]
    pub fn place(&mut self, index: usize, now: Instant) {
        if self.screen != Screen::Playing || self.computer_pending() {
            debug!("Input ignored");
            return;
        }
        match self.game.apply_move(index) {
            Ok(outcome) => self.after_move(outcome, now),
            Err(e) => debug!(error = %e, "Move rejected"),
        }
    }

    /// Advances time: fires a due computer move and expires confetti.
    pub fn tick(&mut self, now: Instant) {
        if self.computer_due.is_some_and(|due| due <= now) {
            self.computer_due = None;
            self.play_computer(now);
        }
        if self.confetti.as_ref().is_some_and(|c| c.is_expired(now)) {
            debug!("Confetti cleared");
            self.confetti = None;
        }
    }

    /// Whether a computer move is scheduled.
    pub fn computer_pending(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Turn or result line under the board.
    pub fn status_text(&self) -> String {
        if let Some(banner) = self.banner {
            return self.banner_text(banner);
        }
        let player = *self.game.active_player();
        match self.game.mode() {
            GameMode::HumanVsHuman => format!("Player {}'s Turn", player),
            GameMode::HumanVsComputer if self.game.is_computer_turn() => {
                "Computer Thinking...".to_string()
            }
            GameMode::HumanVsComputer => format!("Your Turn ({})", player),
        }
    }

    /// Headline for a result banner.
    pub fn banner_text(&self, banner: Banner) -> String {
        match (banner, self.game.mode()) {
            (Banner::Tie, _) => "It's a Tie!".to_string(),
            (Banner::Win(player), GameMode::HumanVsHuman) => format!("Player {} Wins!", player),
            (Banner::Win(player), GameMode::HumanVsComputer) => {
                if Some(player) == self.game.mode().computer_side() {
                    "Computer Wins!".to_string()
                } else {
                    "You Win!".to_string()
                }
            }
        }
    }

    fn play_computer(&mut self, now: Instant) {
        if !self.game.is_computer_turn() {
            return;
        }
        let player = *self.game.active_player();
        let result = choose_move(self.game.board(), player)
            .and_then(|index| self.game.apply_move(index).map(|outcome| (index, outcome)));
        match result {
            Ok((index, outcome)) => {
                debug!(index, %player, "Computer moved");
                self.after_move(outcome, now);
            }
            Err(e) => warn!(error = %e, "Computer could not move"),
        }
    }

    fn after_move(&mut self, outcome: MoveOutcome, now: Instant) {
        match outcome {
            MoveOutcome::Continue { .. } => {
                if self.game.is_computer_turn() {
                    self.computer_due = Some(now + self.ai_delay);
                }
            }
            MoveOutcome::Win { winner, .. } => {
                self.banner = Some(Banner::Win(winner));
                let confetti = Confetti::burst(
                    self.confetti_particles,
                    self.confetti_duration,
                    now,
                    &mut rand::rng(),
                );
                debug!(particles = confetti.particle_count(), "Confetti launched");
                self.confetti = Some(confetti);
            }
            MoveOutcome::Tie => {
                self.banner = Some(Banner::Tie);
            }
        }
    }

    /// Clears the board for another round; scores are kept.
    fn restart(&mut self) {
        self.game.reset();
        self.clear_round_effects();
    }

    fn back_to_mode_select(&mut self) {
        self.screen = Screen::ModeSelect;
        self.clear_round_effects();
    }

    fn clear_round_effects(&mut self) {
        self.banner = None;
        self.confetti = None;
        self.computer_due = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tictactoe_core::{Player, Square};

    fn app(delay_ms: u64) -> App {
        App::new(&AppConfig::default().with_ai_delay_ms(delay_ms))
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) -> Flow {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now)
    }

    #[test]
    fn starts_on_mode_select() {
        let app = app(0);
        assert_eq!(*app.screen(), Screen::ModeSelect);
        assert_eq!(app.key_context(), KeyContext::ModeSelect);
    }

    #[test]
    fn pvp_round_to_win_shows_banner_and_confetti() {
        let now = Instant::now();
        let mut app = app(0);
        press(&mut app, KeyCode::Char('1'), now);
        assert_eq!(app.status_text(), "Player X's Turn");

        for key in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(key), now);
        }

        assert_eq!(*app.banner(), Some(Banner::Win(Player::X)));
        assert_eq!(app.status_text(), "Player X Wins!");
        assert!(app.confetti().is_some());
        assert_eq!(*app.game().scores().x(), 1);
        assert_eq!(app.key_context(), KeyContext::Banner);
    }

    #[test]
    fn play_again_keeps_scores() {
        let now = Instant::now();
        let mut app = app(0);
        app.start(GameMode::HumanVsHuman);
        for index in [0, 3, 1, 4, 2] {
            app.place(index, now);
        }
        press(&mut app, KeyCode::Enter, now);

        assert_eq!(*app.banner(), None);
        assert!(app.confetti().is_none());
        assert!(*app.game().active());
        assert_eq!(*app.game().scores().x(), 1);
    }

    #[test]
    fn restart_key_clears_result_banner() {
        let now = Instant::now();
        let mut app = app(0);
        app.start(GameMode::HumanVsHuman);
        for index in [0, 3, 1, 4, 2] {
            app.place(index, now);
        }
        assert_eq!(app.key_context(), KeyContext::Banner);

        press(&mut app, KeyCode::Char('r'), now);

        assert_eq!(*app.banner(), None);
        assert_eq!(app.key_context(), KeyContext::Board);
        assert_eq!(app.game().board().count(Player::X), 0);
        assert_eq!(*app.game().scores().x(), 1);
    }

    #[test]
    fn tie_has_no_confetti() {
        let now = Instant::now();
        let mut app = app(0);
        app.start(GameMode::HumanVsHuman);
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            app.place(index, now);
        }
        assert_eq!(*app.banner(), Some(Banner::Tie));
        assert_eq!(app.status_text(), "It's a Tie!");
        assert!(app.confetti().is_none());
        assert_eq!(*app.game().scores().ties(), 1);
    }

    #[test]
    fn computer_moves_after_delay() {
        let now = Instant::now();
        let mut app = app(800);
        app.start(GameMode::HumanVsComputer);
        assert_eq!(app.status_text(), "Your Turn (X)");

        app.place(0, now);
        assert!(app.computer_pending());
        assert_eq!(app.status_text(), "Computer Thinking...");

        app.tick(now + Duration::from_millis(799));
        assert!(app.computer_pending());
        assert_eq!(app.game().board().get(4), Some(Square::Empty));

        app.tick(now + Duration::from_millis(800));
        assert!(!app.computer_pending());
        assert_eq!(app.game().board().get(4), Some(Square::Occupied(Player::O)));
        assert_eq!(*app.game().active_player(), Player::X);
    }

    #[test]
    fn input_ignored_while_computer_pending() {
        let now = Instant::now();
        let mut app = app(800);
        app.start(GameMode::HumanVsComputer);
        app.place(0, now);
        app.place(1, now);

        assert_eq!(app.game().board().get(1), Some(Square::Empty));
        assert_eq!(app.game().board().count(Player::X), 1);
    }

    #[test]
    fn zero_delay_behaves_the_same() {
        let now = Instant::now();
        let mut app = app(0);
        app.start(GameMode::HumanVsComputer);
        app.place(0, now);
        app.tick(now);
        assert_eq!(app.game().board().get(4), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn computer_blocks_and_can_win() {
        let now = Instant::now();
        let mut app = app(0);
        app.start(GameMode::HumanVsComputer);
        // X 0, O 4 (center), X 1, O blocks at 2, X 3, O must block at 6
        // which also completes its anti-diagonal 2-4-6.
        for index in [0, 1, 3] {
            app.place(index, now);
            app.tick(now);
        }
        assert_eq!(app.game().board().get(2), Some(Square::Occupied(Player::O)));
        assert_eq!(*app.banner(), Some(Banner::Win(Player::O)));
        assert_eq!(app.status_text(), "Computer Wins!");
        assert_eq!(*app.game().scores().o(), 1);
    }

    #[test]
    fn restart_discards_pending_computer_move() {
        let now = Instant::now();
        let mut app = app(800);
        app.start(GameMode::HumanVsComputer);
        app.place(0, now);
        press(&mut app, KeyCode::Char('r'), now);

        assert!(!app.computer_pending());
        app.tick(now + Duration::from_secs(1));
        assert_eq!(app.game().board().empty_indices().count(), 9);
    }

    #[test]
    fn new_game_resets_scores_on_next_start() {
        let now = Instant::now();
        let mut app = app(0);
        app.start(GameMode::HumanVsHuman);
        for index in [0, 3, 1, 4, 2] {
            app.place(index, now);
        }
        press(&mut app, KeyCode::Char('n'), now);
        assert_eq!(*app.screen(), Screen::ModeSelect);

        press(&mut app, KeyCode::Char('2'), now);
        assert_eq!(*app.game().mode(), GameMode::HumanVsComputer);
        assert_eq!(*app.game().scores().x(), 0);
    }

    #[test]
    fn confetti_expires_on_tick() {
        let now = Instant::now();
        let mut app = app(0);
        app.start(GameMode::HumanVsHuman);
        for index in [0, 3, 1, 4, 2] {
            app.place(index, now);
        }
        app.tick(now + Duration::from_millis(4999));
        assert!(app.confetti().is_some());
        app.tick(now + Duration::from_secs(5));
        assert!(app.confetti().is_none());
    }

    #[test]
    fn cursor_moves_and_places() {
        let now = Instant::now();
        let mut app = app(0);
        app.start(GameMode::HumanVsHuman);
        press(&mut app, KeyCode::Up, now);
        press(&mut app, KeyCode::Left, now);
        assert_eq!(*app.cursor(), Position::TopLeft);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.game().board().get(0), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn theme_toggles_and_quit_ends_loop() {
        let now = Instant::now();
        let mut app = app(0);
        press(&mut app, KeyCode::Char('t'), now);
        assert_eq!(*app.theme(), Theme::Dark);
        assert_eq!(press(&mut app, KeyCode::Char('q'), now), Flow::Quit);
    }
}
