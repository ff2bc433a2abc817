//! Stateless rendering for the hangman screens.

use phantom_hangman::{GuessOutcome, MAX_INCORRECT, SessionStatus, ValidationError};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, Phase, PasswordPrompt, Round};
use super::gallows;
use super::rack::ROW_LEN;

/// Draws the whole application.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Body
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Phantom Hangman")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = match app.phase() {
        Phase::EnterPassword(prompt) => {
            draw_password_prompt(frame, chunks[1], prompt, app.show_password());
            "Enter: Let's Play   Tab: show/hide   Esc: Quit"
        }
        Phase::Playing(round) => {
            draw_round(frame, chunks[1], round);
            if round.session().status().is_terminal() {
                draw_game_over(frame, area, round);
                "y: new game   n: quit"
            } else {
                "Type a letter or use arrows + Enter   Esc: Quit"
            }
        }
    };

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, chunks[2]);

    if app.confirm_quit() {
        draw_dialog(
            frame,
            area,
            "Quit?",
            vec![
                Line::from("Are you sure you want to quit?"),
                Line::from(""),
                Line::from("y: yes   n: no"),
            ],
            Color::Yellow,
        );
    }
}

fn draw_password_prompt(frame: &mut Frame, area: Rect, prompt: &PasswordPrompt, show: bool) {
    let mut lines = vec![
        Line::from("Enter Password to Be Guessed:"),
        Line::from(""),
        Line::from(Span::styled(
            format!("[{:<10}]", prompt.display_input(show)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(reason) = prompt.error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Invalid Password: {}.", reason),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(Span::styled(
            ValidationError::HINT,
            Style::default().fg(Color::Red),
        )));
    }

    let box_area = center_rect(area, 60, 9);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Enter Password"));
    frame.render_widget(paragraph, box_area);
}

fn draw_round(frame: &mut Frame, area: Rect, round: &Round) {
    let session = round.session();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Word / Incorrect
            Constraint::Min(7),    // Figure
            Constraint::Length(1), // Last guess
            Constraint::Length(5), // Rack
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let word = Paragraph::new(format!("Word: {}", session.current_mask_text()))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(word, header[0]);

    let incorrect = Paragraph::new(format!(
        "Incorrect: {} / {}",
        session.mistake_count(),
        MAX_INCORRECT
    ))
    .style(Style::default().fg(Color::Red));
    frame.render_widget(incorrect, header[1]);

    let figure_color = match session.status() {
        SessionStatus::InProgress => Color::White,
        SessionStatus::Won => Color::Green,
        SessionStatus::Lost => Color::Red,
    };
    let figure: Vec<Line> = gallows::figure(session.figure_stage())
        .iter()
        .map(|line| Line::from(*line))
        .collect();
    let figure = Paragraph::new(figure)
        .style(Style::default().fg(figure_color))
        .alignment(Alignment::Center);
    frame.render_widget(figure, rows[1]);

    let last = match round.last_outcome() {
        Some(GuessOutcome::Correct { .. }) => Span::styled("Correct!", Style::default().fg(Color::Green)),
        Some(GuessOutcome::Incorrect { .. }) => Span::styled("Wrong letter.", Style::default().fg(Color::Red)),
        Some(GuessOutcome::Ignored) | None => Span::raw(""),
    };
    frame.render_widget(
        Paragraph::new(Line::from(last)).alignment(Alignment::Center),
        rows[2],
    );

    draw_rack(frame, rows[3], round);
}

fn draw_rack(frame: &mut Frame, area: Rect, round: &Round) {
    let rack = round.rack();
    let cursor = rack.selected();
    let closed = round.session().status().is_terminal();

    let tiles: Vec<(char, Style)> = rack
        .tiles()
        .map(|(letter, picked)| {
            let mut style = if picked {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            };
            if letter == cursor && !closed {
                style = style.bg(Color::White).fg(Color::Black);
            }
            let face = if picked { '·' } else { letter.to_upper() };
            (face, style)
        })
        .collect();

    let lines: Vec<Line> = tiles
        .chunks(ROW_LEN)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|(face, style)| Span::styled(format!(" {} ", face), *style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let rack_area = center_rect(area, (ROW_LEN * 3 + 2) as u16, 4);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Letters"));
    frame.render_widget(paragraph, rack_area);
}

fn draw_game_over(frame: &mut Frame, area: Rect, round: &Round) {
    let session = round.session();
    let (title, headline, color) = match session.status() {
        SessionStatus::Won => ("You Win!", "You guessed it!", Color::Green),
        _ => ("Game Over", "The hangman is complete.", Color::Red),
    };
    draw_dialog(
        frame,
        area,
        title,
        vec![
            Line::from(headline),
            Line::from(format!("The password was: {}", session.revealed_password())),
            Line::from(""),
            Line::from("Would you like to start a new game? (y/n)"),
        ],
        color,
    );
}

fn draw_dialog(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, color: Color) {
    let dialog_area = center_rect(area, 48, lines.len() as u16 + 2);
    frame.render_widget(Clear, dialog_area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(paragraph, dialog_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::{press, start_game, type_text};
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_password_screen_hides_input() {
        let mut app = App::new(false);
        type_text(&mut app, "secret");
        let screen = render(&app);
        assert!(screen.contains("Enter Password to Be Guessed"));
        assert!(!screen.contains("secret"));
    }

    #[test]
    fn test_password_error_shown() {
        let mut app = App::new(false);
        type_text(&mut app, "no way");
        press(&mut app, KeyCode::Enter);
        assert!(render(&app).contains("Invalid Password"));
    }

    #[test]
    fn test_game_screen_shows_mask_and_count() {
        let mut app = start_game("dog");
        type_text(&mut app, "dz");
        let screen = render(&app);
        assert!(screen.contains("Word: d**"));
        assert!(screen.contains("Incorrect: 1 / 6"));
    }

    #[test]
    fn test_game_over_reveals_password() {
        let mut app = start_game("ox");
        type_text(&mut app, "abcdef");
        let screen = render(&app);
        assert!(screen.contains("The password was: ox"));
        assert!(screen.contains("start a new game"));
    }

    #[test]
    fn test_quit_dialog_drawn() {
        let mut app = start_game("ox");
        press(&mut app, KeyCode::Esc);
        assert!(render(&app).contains("Are you sure you want to quit?"));
    }
}
