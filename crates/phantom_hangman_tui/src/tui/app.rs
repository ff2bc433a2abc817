//! Application state and key handling.
//!
//! Rendering lives in [`super::ui`]; everything here is plain state so the
//! whole flow can be driven from tests without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use derive_new::new;
use phantom_hangman::{GameSession, GuessOutcome, Letter, Password, ValidationError};
use tracing::{debug, info, instrument};

use super::rack::LetterRack;

/// Longest text the password field accepts before validation.
const INPUT_LIMIT: usize = 32;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Password entry dialog state.
#[derive(Debug, Clone, Default, Getters)]
pub struct PasswordPrompt {
    /// Text typed so far.
    input: String,
    /// Reason the last submission was rejected.
    error: Option<ValidationError>,
}

impl PasswordPrompt {
    /// The input as it should be drawn: echoed or hidden behind bullets.
    pub fn display_input(&self, show: bool) -> String {
        if show {
            self.input.clone()
        } else {
            "•".repeat(self.input.chars().count())
        }
    }
}

/// One game in progress or just finished.
#[derive(Debug, new, Getters)]
pub struct Round {
    /// The game state.
    session: GameSession,
    /// Tiles already played and the tile cursor.
    #[new(default)]
    rack: LetterRack,
    /// Result of the most recent guess.
    #[new(default)]
    last_outcome: Option<GuessOutcome>,
}

impl Round {
    /// Plays `letter` unless its tile is already used or the game is over.
    #[instrument(skip(self))]
    fn play(&mut self, letter: Letter) {
        if self.session.status().is_terminal() {
            debug!("Rack is closed");
            return;
        }
        if !self.rack.pick(letter) {
            return;
        }
        let outcome = self.session.guess(letter);
        debug!(?outcome, "Guess evaluated");
        self.last_outcome = Some(outcome);
    }
}

/// Current top-level screen.
#[derive(Debug)]
pub enum Phase {
    /// Asking for the secret word.
    EnterPassword(PasswordPrompt),
    /// Guessing; a finished round shows the play-again prompt.
    Playing(Round),
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// Active screen.
    phase: Phase,
    #[getter(skip)]
    confirm_quit: bool,
    #[getter(skip)]
    show_password: bool,
}

impl App {
    /// Creates the application on the password screen.
    #[instrument]
    pub fn new(show_password: bool) -> Self {
        Self {
            phase: Phase::EnterPassword(PasswordPrompt::default()),
            confirm_quit: false,
            show_password,
        }
    }

    /// Whether the quit confirmation dialog is open.
    pub fn confirm_quit(&self) -> bool {
        self.confirm_quit
    }

    /// Whether the password is echoed while it is typed.
    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            if self.confirm_quit {
                return Control::Quit;
            }
            self.confirm_quit = true;
            return Control::Continue;
        }

        if self.confirm_quit {
            return self.handle_confirm_quit(key.code);
        }

        match &mut self.phase {
            Phase::EnterPassword(prompt) => {
                match key.code {
                    KeyCode::Esc => {
                        info!("Quit from password prompt");
                        Control::Quit
                    }
                    KeyCode::Tab => {
                        self.show_password = !self.show_password;
                        Control::Continue
                    }
                    KeyCode::Enter => {
                        match Password::parse(&prompt.input) {
                            Ok(password) => {
                                self.phase = Phase::Playing(Round::new(
                                    GameSession::from_password(password),
                                ));
                            }
                            Err(reason) => {
                                debug!(%reason, "Password rejected");
                                prompt.error = Some(reason);
                                prompt.input.clear();
                            }
                        }
                        Control::Continue
                    }
                    KeyCode::Backspace => {
                        prompt.input.pop();
                        Control::Continue
                    }
                    KeyCode::Char(c) if !c.is_control() => {
                        if prompt.input.chars().count() < INPUT_LIMIT {
                            prompt.input.push(c);
                        }
                        Control::Continue
                    }
                    _ => Control::Continue,
                }
            }
            Phase::Playing(round) if round.session.status().is_terminal() => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    info!("Starting a new game");
                    self.phase = Phase::EnterPassword(PasswordPrompt::default());
                    Control::Continue
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    info!("Declined a new game");
                    Control::Quit
                }
                _ => Control::Continue,
            },
            Phase::Playing(round) => {
                match key.code {
                    KeyCode::Esc => self.confirm_quit = true,
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let letter = round.rack.selected();
                        round.play(letter);
                    }
                    KeyCode::Char(c) => {
                        if let Ok(letter) = Letter::try_from(c) {
                            round.play(letter);
                        }
                    }
                    code => round.rack.move_cursor(code),
                }
                Control::Continue
            }
        }
    }

    fn handle_confirm_quit(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                info!("Quit confirmed");
                Control::Quit
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_quit = false;
                Control::Continue
            }
            _ => Control::Continue,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use phantom_hangman::SessionStatus;

    pub(crate) fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub(crate) fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    pub(crate) fn start_game(password: &str) -> App {
        let mut app = App::new(false);
        type_text(&mut app, password);
        press(&mut app, KeyCode::Enter);
        app
    }

    fn round(app: &App) -> &Round {
        match app.phase() {
            Phase::Playing(round) => round,
            Phase::EnterPassword(_) => panic!("Expected a game in progress"),
        }
    }

    #[test]
    fn test_valid_password_starts_game() {
        let app = start_game("Phantom");
        assert_eq!(round(&app).session().current_mask_text(), "*******");
    }

    #[test]
    fn test_invalid_password_reprompts() {
        let mut app = App::new(false);
        type_text(&mut app, "abc123");
        press(&mut app, KeyCode::Enter);

        match app.phase() {
            Phase::EnterPassword(prompt) => {
                assert_eq!(prompt.error(), &Some(ValidationError::EmptyOrNonAlpha));
                assert!(prompt.input().is_empty());
            }
            Phase::Playing(_) => panic!("Invalid password must not start a game"),
        }
    }

    #[test]
    fn test_too_long_password_reprompts() {
        let mut app = App::new(false);
        type_text(&mut app, "abcdefghijkl");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.phase(),
            Phase::EnterPassword(prompt) if prompt.error() == &Some(ValidationError::TooLong)
        ));
    }

    #[test]
    fn test_password_hidden_unless_shown() {
        let mut app = App::new(false);
        type_text(&mut app, "cat");
        let Phase::EnterPassword(prompt) = app.phase() else {
            panic!("Expected password prompt");
        };
        assert_eq!(prompt.display_input(false), "•••");
        assert_eq!(prompt.display_input(true), "cat");

        press(&mut app, KeyCode::Tab);
        assert!(app.show_password());
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut app = App::new(false);
        type_text(&mut app, "dogs");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(round(&app).session().revealed_password(), "dog");
    }

    #[test]
    fn test_escape_on_prompt_quits() {
        let mut app = App::new(false);
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
    }

    #[test]
    fn test_typed_letters_are_guessed_once() {
        let mut app = start_game("dog");
        type_text(&mut app, "xx");
        assert_eq!(round(&app).session().mistake_count(), 1);
        assert!(round(&app).rack().is_picked(Letter::try_from('x').unwrap()));
    }

    #[test]
    fn test_rack_cursor_guess() {
        let mut app = start_game("cab");
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(round(&app).session().current_mask_text(), "**b");
        assert_eq!(
            round(&app).last_outcome(),
            &Some(GuessOutcome::Correct {
                updated_mask: "**b".to_string(),
                won: false
            })
        );
    }

    #[test]
    fn test_win_then_play_again() {
        let mut app = start_game("cat");
        type_text(&mut app, "cat");
        assert_eq!(round(&app).session().status(), SessionStatus::Won);

        press(&mut app, KeyCode::Char('y'));
        assert!(matches!(app.phase(), Phase::EnterPassword(_)));

        type_text(&mut app, "dog");
        press(&mut app, KeyCode::Enter);
        assert_eq!(round(&app).session().mistake_count(), 0);
        assert_eq!(round(&app).session().current_mask_text(), "***");
    }

    #[test]
    fn test_loss_then_decline() {
        let mut app = start_game("a");
        type_text(&mut app, "bcdefg");
        assert_eq!(round(&app).session().status(), SessionStatus::Lost);

        // The rack is closed once the round is over.
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(round(&app).session().status(), SessionStatus::Lost);

        assert_eq!(press(&mut app, KeyCode::Char('n')), Control::Quit);
    }

    #[test]
    fn test_escape_asks_before_quitting() {
        let mut app = start_game("dog");
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Continue);
        assert!(app.confirm_quit());

        // Letters do not reach the game while the dialog is open.
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(round(&app).session().current_mask_text(), "***");

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.confirm_quit());
        press(&mut app, KeyCode::Esc);
        assert_eq!(press(&mut app, KeyCode::Char('y')), Control::Quit);
    }

    #[test]
    fn test_ctrl_c_twice_quits() {
        let mut app = App::new(false);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Control::Continue);
        assert!(app.confirm_quit());
        assert_eq!(app.handle_key(ctrl_c), Control::Quit);
    }
}
