//! Skills tab view

use crate::app::App;
use character_core::SkillLevel;
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
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_skill_list(f, app, chunks[0]);
    draw_skill_details(f, app, chunks[1]);
}

fn level_color(level: SkillLevel) -> Color {
    match level {
        SkillLevel::Trained => Color::Yellow,
        SkillLevel::Specialised => Color::Green,
    }
}

fn draw_skill_list(f: &mut Frame, app: &App, area: Rect) {
    let names = app.skill_names();
    let items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let level = app.character.skill_level(name);
            let style = if i == app.selected_skill {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let prefix = if i == app.selected_skill { "► " } else { "  " };
            let mut spans = vec![Span::styled(format!("{}{:16}", prefix, name), style)];
            if let Some(level) = level {
                spans.push(Span::styled(
                    level.to_string(),
                    Style::default().fg(level_color(level)),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Skills (↑/↓ to select, Enter to train) "),
    );

    f.render_widget(list, area);
}

fn draw_skill_details(f: &mut Frame, app: &App, area: Rect) {
    let names = app.skill_names();
    let mut lines: Vec<Line> = vec![];

    match names.get(app.selected_skill) {
        Some(name) => {
            let level = app.character.skill_level(name);

            lines.push(Line::from(Span::styled(
                name.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            if let Some(level) = level {
                lines.push(Line::from(vec![
                    Span::styled("Level: ", Style::default().fg(Color::Gray)),
                    Span::styled(level.to_string(), Style::default().fg(level_color(level))),
                ]));
                lines.push(Line::from(""));
                match level {
                    SkillLevel::Trained => {
                        lines.push(Line::from(Span::styled(
                            "Press Enter to specialise",
                            Style::default().fg(Color::White),
                        )));
                    }
                    SkillLevel::Specialised => {
                        lines.push(Line::from(Span::styled(
                            "Already at the top of the ladder",
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                }
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No skills known",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "═══ Ladder ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  untrained: the skill is simply absent",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(vec![
        Span::styled("  trained", Style::default().fg(Color::Yellow)),
        Span::styled(
            ": one step of practice",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  specialised", Style::default().fg(Color::Green)),
        Span::styled(
            ": mastered, cannot be trained further",
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Skill Details "));

    f.render_widget(paragraph, area);
}
