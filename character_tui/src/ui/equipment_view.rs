//! Equipment tab: the pack and the purse

use crate::app::App;
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
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_pack(f, app, chunks[0]);
    draw_purse(f, app, chunks[1]);
}

fn draw_pack(f: &mut Frame, app: &App, area: Rect) {
    let names = app.item_names();

    let mut items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let held = app.character.equipment.get(name).copied().unwrap_or(0);
            let style = if i == app.selected_item {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == app.selected_item { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:20}", prefix, name), style),
                Span::styled(format!("×{}", held), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    if items.is_empty() {
        items.push(ListItem::new(Line::from(Span::styled(
            "  The pack is empty",
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Pack (+/- to pick up or drop) "),
    );

    f.render_widget(list, area);
}

fn draw_purse(f: &mut Frame, app: &App, area: Rect) {
    let pc = &app.character;

    let shin_color = if pc.shins < 0 { Color::Red } else { Color::Yellow };
    let mut lines = vec![
        Line::from(Span::styled(
            "═══ Purse ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("{:12}", "shins"), Style::default().fg(Color::Gray)),
            Span::styled(format!("{}", pc.shins), Style::default().fg(shin_color)),
        ]),
    ];

    if pc.shins < 0 {
        lines.push(Line::from(Span::styled(
            "  in debt; earnings settle it first",
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "═══ Worn ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(format!("{:12}", "armour"), Style::default().fg(Color::Gray)),
        Span::styled(format!("{}", pc.armour), Style::default().fg(Color::White)),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [e] Earn 5 shins   [y] Pay 3 shins",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "  Dropping the last of an item removes",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "  its line from the pack entirely",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Purse "));

    f.render_widget(paragraph, area);
}
