//! Combat tab: pool selector, session log, cascade preview

use crate::app::App;
use crate::ui::{pool_bar, pool_color};
use character_core::PoolKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(50),    // Pools and log
            Constraint::Length(35), // Cascade preview panel
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Pool status bar
            Constraint::Min(0),    // Session log
        ])
        .split(chunks[0]);

    draw_pools(f, app, main_chunks[0]);
    draw_session_log(f, app, main_chunks[1]);
    draw_cascade_preview(f, app, chunks[1]);
}

fn draw_pools(f: &mut Frame, app: &App, area: Rect) {
    let bar_width = area.width.saturating_sub(24) as usize;
    let mut lines = Vec::new();

    for (i, kind) in PoolKind::all().into_iter().enumerate() {
        let attr = app.character.stats.pool(kind);
        let selected = i == app.selected_pool;
        let prefix = if selected { "► " } else { "  " };
        let name_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:10}", prefix, kind.name()), name_style),
            Span::styled(
                format!("{:>5}  ", attr.to_string()),
                Style::default().fg(pool_color(kind)),
            ),
            Span::styled(
                pool_bar(attr.current, attr.max, bar_width),
                Style::default().fg(pool_color(kind)),
            ),
        ]));
    }

    let total = app.character.stats.total();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", total),
            Style::default()
                .fg(if total == 0 { Color::Red } else { Color::White })
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Armour: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", app.character.armour),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled("Effort: ", Style::default().fg(Color::Gray)),
        Span::styled(
            app.character.effort.to_string(),
            Style::default().fg(Color::Magenta),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Pools "));

    f.render_widget(paragraph, area);
}

fn draw_session_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session_log
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.contains("DEFEATED") {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if line.starts_with("Hit for") {
                Style::default().fg(Color::Red)
            } else if line.starts_with("Recovered") || line.starts_with("+1 ") {
                Style::default().fg(Color::Green)
            } else if line.starts_with("Used") || line.starts_with("Learned") {
                Style::default().fg(Color::Cyan)
            } else if line.starts_with("Saved") || line.starts_with("Loaded") {
                Style::default().fg(Color::Yellow)
            } else if line.contains("failed") {
                Style::default().fg(Color::LightRed)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Session Log "),
    );

    f.render_widget(list, area);
}

fn draw_cascade_preview(f: &mut Frame, app: &App, area: Rect) {
    let pool = app.current_pool();
    let attr = app.character.stats.pool(pool);

    let mut lines = vec![
        Line::from(Span::styled(
            pool.name(),
            Style::default()
                .fg(pool_color(pool))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Points: ", Style::default().fg(Color::Gray)),
            Span::styled(attr.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled("── Overflow ──", Style::default().fg(Color::Cyan))),
    ];

    // Walk the cascade order starting at the selected pool
    let mut order = vec![pool];
    let mut next = pool.next();
    while next != pool {
        order.push(next);
        next = next.next();
    }
    for (i, kind) in order.iter().enumerate() {
        let marker = if i == 0 { "hit " } else { "then" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", marker), Style::default().fg(Color::DarkGray)),
            Span::styled(kind.name(), Style::default().fg(pool_color(*kind))),
            Span::styled(
                format!("  ({})", app.character.stats.pool(*kind)),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "  damage spills along this path",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "  until absorbed; at total 0 the",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "  character is defeated",
        Style::default().fg(Color::DarkGray),
    )));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("── Budget ──", Style::default().fg(Color::Cyan))));
    lines.push(Line::from(vec![
        Span::styled("Unspent points: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", app.character.extra_points),
            Style::default().fg(if app.character.has_unspent_points() {
                Color::Green
            } else {
                Color::DarkGray
            }),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        "  [p] grows the selected pool",
        Style::default().fg(Color::DarkGray),
    )));

    if app.character.is_defeated() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "DEFEATED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "  [h] heals a pool to recover",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Cascade Preview "),
    );

    f.render_widget(paragraph, area);
}
