//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::Instant;
use tictactoe_core::{GameMode, Player, Position, Square};

use super::app::{App, Banner, Screen};
use super::theme::Palette;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let palette = app.theme().palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    match app.screen() {
        Screen::ModeSelect => draw_mode_select(frame, area, app, &palette),
        Screen::Playing => draw_game(frame, area, app, &palette),
    }

    if let Some(confetti) = app.confetti() {
        let buf = frame.buffer_mut();
        for piece in confetti.pieces(now) {
            let x = area.x + (piece.x * f32::from(area.width)) as u16;
            let y = area.y + (piece.y * f32::from(area.height)) as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("▪").set_fg(piece.color);
            }
        }
    }
}

fn draw_mode_select(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let text = vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Choose a game mode"),
        Line::from(""),
        Line::from(format!("[1] {}", GameMode::HumanVsHuman)),
        Line::from(format!("[2] {}", GameMode::HumanVsComputer)),
        Line::from(""),
        Line::from(Span::styled(
            format!("[t] {}   [q] Quit", app.theme().toggle_label()),
            Style::default().fg(palette.muted),
        )),
    ];
    let box_area = center_rect(area, 40, 12);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    );
    frame.render_widget(paragraph, box_area);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Scores
            Constraint::Min(CELL_HEIGHT * 3 + 2), // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Tic Tac Toe - {}", app.game().mode()))
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let scores = app.game().scores();
    let score_line = Line::from(vec![
        Span::styled(format!("X: {}", scores.x()), Style::default().fg(palette.x)),
        Span::raw("   "),
        Span::styled(format!("O: {}", scores.o()), Style::default().fg(palette.o)),
        Span::raw("   "),
        Span::raw(format!("Ties: {}", scores.ties())),
    ]);
    frame.render_widget(Paragraph::new(score_line).alignment(Alignment::Center), chunks[1]);

    draw_board(frame, chunks[2], app, palette);

    let mut status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    if *app.game().active() {
        status_block = status_block.title(format!(" {} ", app.cursor()));
    }
    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(status_block);
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(format!(
        "arrows/1-9 move  enter place  [r] restart  [n] new game  [t] {}  [q] quit",
        app.theme().toggle_label()
    ))
    .style(Style::default().fg(palette.muted))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Some(banner) = app.banner() {
        draw_banner(frame, chunks[2], app, *banner, palette);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            draw_cell(frame, *cell_area, app, row * 3 + col, palette);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize, palette: &Palette) {
    let game = app.game();
    let (symbol, mut style) = match game.board().get(index) {
        Some(Square::Occupied(Player::X)) => (
            "X",
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            "O",
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
        _ => ("·", Style::default().fg(palette.muted)),
    };

    let on_win_line = game.winning_line().is_some_and(|line| line.contains(index));
    let under_cursor = *game.active() && Position::from_index(index) == Some(*app.cursor());
    if on_win_line {
        style = style.bg(palette.win);
    } else if under_cursor {
        style = style.bg(palette.cursor);
    }

    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text)
        .style(Style::default().bg(style.bg.unwrap_or(palette.background)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App, banner: Banner, palette: &Palette) {
    let headline = app.banner_text(banner);
    let mut text = Vec::new();
    if let Banner::Win(_) = banner {
        text.push(Line::from(Span::styled(
            "🏆",
            Style::default().fg(palette.accent),
        )));
    }
    text.push(Line::from(Span::styled(
        headline,
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    )));
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "[enter] Play Again   [n] New Game",
        Style::default().fg(palette.muted),
    )));

    let modal = center_rect(area, 38, 7);
    frame.render_widget(Clear, modal);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    frame.render_widget(paragraph, modal);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
