//! UI rendering

mod abilities_view;
mod combat_view;
mod equipment_view;
mod help_view;
mod sheet_view;
mod skills_view;

use crate::app::{App, Tab};
use character_core::PoolKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Sheet => sheet_view::draw(f, app, chunks[1]),
        Tab::Combat => combat_view::draw(f, app, chunks[1]),
        Tab::Abilities => abilities_view::draw(f, app, chunks[1]),
        Tab::Skills => skills_view::draw(f, app, chunks[1]),
        Tab::Equipment => equipment_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("s", "Save"), ("l", "Load"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Sheet => vec![],
        Tab::Combat => vec![
            ("↑/↓", "Select pool"),
            ("a/Enter", "Take a hit"),
            ("h", "Heal"),
            ("p", "Spend point"),
        ],
        Tab::Abilities => vec![
            ("←/→", "Switch pane"),
            ("↑/↓", "Select"),
            ("Enter", "Use / learn"),
        ],
        Tab::Skills => vec![("↑/↓", "Select"), ("Enter", "Train")],
        Tab::Equipment => vec![
            ("↑/↓", "Select"),
            ("+/-", "Pick up / drop"),
            ("e", "Earn"),
            ("y", "Pay"),
        ],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    // Add separator if we have tab-specific keys
    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    // Add common keys
    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Character Manager "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Fixed-width bar showing how full a pool is
pub fn pool_bar(current: u32, max: u32, width: usize) -> String {
    let filled = if max > 0 {
        (current as usize * width) / max as usize
    } else {
        0
    };
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Colour convention shared by every view that names a pool
pub fn pool_color(kind: PoolKind) -> Color {
    match kind {
        PoolKind::Might => Color::Red,
        PoolKind::Speed => Color::Green,
        PoolKind::Intellect => Color::Cyan,
    }
}
