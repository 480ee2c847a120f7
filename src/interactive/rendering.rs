//! TUI rendering with ratatui
//!
//! Board, keyboard and side panels for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{KEYBOARD_ROWS, LetterOutcome, MAX_GUESSES, WORD_LENGTH, empty_outcomes};
use crate::game::{ANAGRAM_SECONDS, GameStatus};
use crate::output::share_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board + keyboard
            Constraint::Percentage(50), // Hint + messages / end game
        ])
        .split(chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(main_chunks[0]);

    render_board(f, app, left_chunks[0]);
    render_keyboard(f, app, left_chunks[1]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hint
            Constraint::Min(6),    // End game or messages
        ])
        .split(main_chunks[1]);

    render_hint(f, app, right_chunks[0]);
    if app.session.status() == GameStatus::Playing {
        render_messages(f, app, right_chunks[1]);
    } else {
        render_endgame(f, app, right_chunks[1]);
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("😈 EVIL TERMO")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn outcome_style(outcome: LetterOutcome) -> Style {
    match outcome {
        LetterOutcome::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterOutcome::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterOutcome::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterOutcome::Invalid => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        LetterOutcome::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for i in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        if let Some(row) = session.rows().get(i) {
            for (letter, outcome) in row.display_cells() {
                spans.push(Span::styled(format!(" {letter} "), outcome_style(outcome)));
                spans.push(Span::raw(" "));
            }
        } else if i == session.turn() && session.status() == GameStatus::Playing {
            let buffer = session.buffer_chars();
            for (j, &c) in buffer.iter().enumerate() {
                let style = if j == session.cursor() {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::UNDERLINED)
                };
                spans.push(Span::styled(format!(" {c} "), style));
                spans.push(Span::raw(" "));
            }
        } else {
            for outcome in empty_outcomes() {
                spans.push(Span::styled(" · ", outcome_style(outcome)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Quadro ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let key_states = app.session.key_states();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|b| {
                    let style = match key_states.get(b) {
                        Some(LetterOutcome::Correct) => {
                            Style::default().fg(Color::Black).bg(Color::Green)
                        }
                        Some(LetterOutcome::Present) => {
                            Style::default().fg(Color::Black).bg(Color::Yellow)
                        }
                        Some(LetterOutcome::Absent) => Style::default().fg(Color::DarkGray),
                        _ => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {} ", b as char), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Teclado ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let (text, color) = if session.hint_pending() {
        ("Buscando dica...".to_string(), Color::Yellow)
    } else if let Some(hint) = session.hint() {
        (format!("💡 {hint}"), Color::Cyan)
    } else {
        (
            "TAB troca uma tentativa por uma dica.".to_string(),
            Color::DarkGray,
        )
    };

    let hint = Paragraph::new(text)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Dica ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(hint, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Mensagens ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

/// End-game panel: anagram challenge while it runs, then result + share grid
fn render_endgame(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;

    if let Some(anagram) = session.anagram() {
        if !anagram.revealed() {
            render_anagram(f, app, area);
            return;
        }
    }

    let mut lines = Vec::new();
    match session.status() {
        GameStatus::Won => lines.push(Line::styled(
            format!("🎉 Venceu em {} tentativas!", session.turn()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        GameStatus::Lost | GameStatus::Playing => {
            lines.push(Line::styled(
                format!("A palavra era {}", session.solution().text()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            if session.anagram().is_some_and(|a| a.solved()) {
                lines.push(Line::styled(
                    "🏆 Mas o anagrama foi resolvido a tempo!",
                    Style::default().fg(Color::Green),
                ));
            }
        }
    }

    lines.push(Line::default());
    for row in share_text(session).lines() {
        lines.push(Line::from(row.to_string()));
    }
    lines.push(Line::default());
    lines.push(Line::from(format!(
        "Jogos: {}  Vitórias: {}%  Sequência: {} (melhor {})",
        app.stats.games_played(),
        app.stats.win_percentage(),
        app.stats.current_streak(),
        app.stats.max_streak(),
    )));

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Fim de jogo ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(panel, area);
}

fn render_anagram(f: &mut Frame, app: &App, area: Rect) {
    let Some(anagram) = app.session.anagram() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Prompt + input
            Constraint::Length(3), // Countdown
            Constraint::Min(0),
        ])
        .split(area);

    let prompt = Paragraph::new(vec![
        Line::from("Desafio bônus! Desembaralhe:"),
        Line::styled(
            anagram.anagram().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("> {}", app.anagram_input())),
    ])
    .block(
        Block::default()
            .title(" Anagrama ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(prompt, chunks[0]);

    let remaining = anagram.seconds_remaining();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(if remaining <= 5 {
            Color::Red
        } else {
            Color::Cyan
        }))
        .percent(u16::try_from(remaining * 100 / ANAGRAM_SECONDS).unwrap_or(0))
        .label(format!("{remaining}s"));
    f.render_widget(gauge, chunks[1]);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let turn_text = format!("Tentativa: {}/{MAX_GUESSES}", app.session.turn());
    f.render_widget(Paragraph::new(turn_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Jogos: {} | Vitórias: {}%",
        app.stats.games_played(),
        app.stats.win_percentage()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help_text = match app.session.status() {
        GameStatus::Playing => "Enter: enviar | TAB: dica | Esc: sair",
        GameStatus::Won | GameStatus::Lost => "n: novo jogo | q: sair",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
