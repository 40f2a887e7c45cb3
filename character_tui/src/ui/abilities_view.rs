//! Abilities tab: known abilities, the rulebook catalogue, and details

use crate::app::{AbilityFocus, App};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    // Three columns: known, rulebook catalogue, details
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    draw_known(f, app, chunks[0]);
    draw_rulebook(f, app, chunks[1]);
    draw_details(f, app, chunks[2]);
}

fn draw_known(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.ability_focus == AbilityFocus::Known;
    let mut lines: Vec<Line> = vec![];

    if app.character.abilities.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No abilities yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, name) in app.character.abilities.iter().enumerate() {
        let is_selected = i == app.selected_known && is_focused;
        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        let badge = if app.registry.is_passive(name) {
            if app.character.times_applied(name) > 0 {
                " ●"
            } else {
                " ○"
            }
        } else {
            ""
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(name.clone(), style),
            Span::styled(badge, Style::default().fg(Color::Green)),
        ]));
    }

    // Help text
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Enter] Use  [→] Rulebook",
        Style::default().fg(Color::DarkGray),
    )));

    let border_color = if is_focused { Color::Yellow } else { Color::White };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Known "),
    );

    f.render_widget(paragraph, area);
}

fn draw_rulebook(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.ability_focus == AbilityFocus::Rulebook;
    let names = app.rulebook_abilities();
    let mut lines: Vec<Line> = vec![];

    if names.is_empty() {
        lines.push(Line::from(Span::styled(
            "  The rulebook lists no abilities",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, name) in names.iter().enumerate() {
        let is_selected = i == app.selected_rulebook && is_focused;
        let already_known = app.character.abilities.iter().any(|known| known == name);

        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else if already_known {
            ("  ", Style::default().fg(Color::DarkGray))
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        let mut spans = vec![Span::styled(prefix, style), Span::styled(name.clone(), style)];
        if already_known {
            spans.push(Span::styled(" (known)", Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
    }

    // Help text
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Enter] Learn  [←] Known",
        Style::default().fg(Color::DarkGray),
    )));

    let border_color = if is_focused { Color::Yellow } else { Color::White };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Rulebook "),
    );

    f.render_widget(paragraph, area);
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let selected: Option<String> = match app.ability_focus {
        AbilityFocus::Known => app.character.abilities.get(app.selected_known).cloned(),
        AbilityFocus::Rulebook => app
            .rulebook_abilities()
            .get(app.selected_rulebook)
            .cloned(),
    };

    let mut lines: Vec<Line> = vec![];

    if let Some(name) = selected {
        lines.push(Line::from(Span::styled(
            name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));

        let kind = if app.registry.is_passive(&name) {
            "passive, applies once"
        } else {
            "applies on every use"
        };
        lines.push(Line::from(Span::styled(kind, Style::default().fg(Color::Cyan))));
        lines.push(Line::from(""));

        match app.rules.ability_description(&name) {
            Some(description) => {
                lines.push(Line::from(Span::styled(
                    description.to_string(),
                    Style::default().fg(Color::White),
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "No rulebook entry",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        lines.push(Line::from(""));
        let known = app.character.abilities.iter().any(|k| k == &name);
        if known {
            let applied = app.character.times_applied(&name);
            lines.push(Line::from(vec![
                Span::styled("Applied: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{} times", applied),
                    Style::default().fg(Color::White),
                ),
            ]));
            if app.registry.is_passive(&name) && applied > 0 {
                lines.push(Line::from(Span::styled(
                    "In effect",
                    Style::default().fg(Color::Green),
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "Not known yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "));

    f.render_widget(paragraph, area);
}
