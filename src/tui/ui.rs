//! UI rendering for the calculator.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    style::{Color, Modifier, Style},
};
use crate::engine::Mode;
use super::app::CalculatorApp;

/// Keypad labels in base mode, row by row.
const BASE_KEYS: [[&str; 4]; 5] = [
    ["÷", "H", "CLR", "⌫"],
    ["×", "7", "8", "9"],
    ["−", "4", "5", "6"],
    ["+", "1", "2", "3"],
    ["Convert", "0", ".", "="],
];

/// Keypad labels in convert mode.
const CONVERT_KEYS: [[&str; 4]; 5] = [
    ["÷", "H", "FRACTION", "BIN"],
    ["×", "7", "8", "9"],
    ["−", "4", "5", "6"],
    ["+", "1", "2", "3"],
    ["Convert", "0", ".", "="],
];

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &CalculatorApp) {
    let columns = if app.show_history {
        vec![Constraint::Percentage(60), Constraint::Percentage(40)]
    } else {
        vec![Constraint::Percentage(100)]
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns)
        .split(frame.area());

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(chunks[0]);

    draw_display(frame, left_chunks[0], app);
    draw_keypad(frame, left_chunks[1], app);
    draw_status(frame, left_chunks[2], app);
    draw_help(frame, left_chunks[3]);

    if app.show_history {
        draw_history(frame, chunks[1], app);
    }
}

/// Draw the equation (top-left) and result (bottom-right).
fn draw_display(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let engine = app.session.engine();
    let mut equation = engine.display_equation();
    if engine.result_display().is_some() && !equation.is_empty() {
        equation.push_str(" =");
    }

    let result = engine.result_display().unwrap_or_default();
    let content = vec![
        Line::from(equation),
        Line::from(""),
        Line::from(Span::styled(
            result.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default()
            .title(" Display ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    frame.render_widget(paragraph, area);
}

/// Draw the keypad for the current mode.
fn draw_keypad(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let mode = app.mode();
    let (keys, color) = match mode {
        Mode::Base => (&BASE_KEYS, Color::Green),
        Mode::Convert => (&CONVERT_KEYS, Color::Yellow),
    };
    let title = format!(" Keypad [{}] ", mode);

    let lines: Vec<Line> = keys
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|label| {
                    let style = if matches!(*label, "÷" | "×" | "−" | "+") {
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                    } else if matches!(*label, "FRACTION" | "BIN") {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Span::styled(format!("[{:^8}] ", label), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keypad = Paragraph::new(lines)
        .block(Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)));

    frame.render_widget(keypad, area);
}

/// Draw the history panel.
fn draw_history(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let history = app.session.engine().history();

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new("No calculations yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        history
            .recent_window()
            .iter()
            .map(|entry| ListItem::new(entry.to_string()))
            .collect()
    };

    let list = List::new(items)
        .block(Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)));

    frame.render_widget(list, area);
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &CalculatorApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("0-9 . + - * /: Type  Enter/=: Evaluate  ⌫: Back  Del: Clear"),
        Line::from("c: Convert  b: Binary  f: Fraction  h: History  Esc: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default()
        .title(" Help ")
        .borders(Borders::ALL));

    frame.render_widget(help, area);
}
