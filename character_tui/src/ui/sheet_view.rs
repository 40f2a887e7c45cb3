//! Character sheet view

use crate::app::App;
use crate::ui::{pool_bar, pool_color};
use character_core::{Attribute, PoolKind, SkillLevel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_identity(f, app, chunks[0]);
    draw_holdings(f, app, chunks[1]);
}

fn draw_identity(f: &mut Frame, app: &App, area: Rect) {
    let pc = &app.character;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                pc.name.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} {} / {})", pc.adjective, pc.noun, pc.verb),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            pc.descriptor(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    for text in archetype_descriptions(app) {
        lines.push(Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "═══ Pools ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));

    for kind in PoolKind::all() {
        lines.push(format_pool(kind, pc.stats.pool(kind)));
    }

    lines.push(Line::from(vec![
        Span::styled(format!("{:12}", "effort"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:>5}  ", pc.effort.to_string()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            pool_bar(pc.effort.current, pc.effort.max, 20),
            Style::default().fg(Color::Magenta),
        ),
    ]));

    if pc.is_defeated() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "DEFEATED - every pool is empty",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "═══ Resources ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(format_count("armour", pc.armour as i64, Color::White));
    lines.push(format_count(
        "shins",
        pc.shins,
        if pc.shins < 0 { Color::Red } else { Color::Yellow },
    ));
    lines.push(format_count(
        "unspent",
        pc.extra_points as i64,
        if pc.has_unspent_points() {
            Color::Green
        } else {
            Color::DarkGray
        },
    ));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Character "));

    f.render_widget(paragraph, area);
}

fn draw_holdings(f: &mut Frame, app: &App, area: Rect) {
    let pc = &app.character;

    let mut lines = vec![Line::from(Span::styled(
        "═══ Skills ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];

    if pc.skills.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for name in app.skill_names() {
        if let Some(level) = pc.skill_level(&name) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:16}", name), Style::default().fg(Color::White)),
                Span::styled(
                    level.to_string(),
                    Style::default().fg(match level {
                        SkillLevel::Trained => Color::Yellow,
                        SkillLevel::Specialised => Color::Green,
                    }),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "═══ Abilities ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    if pc.abilities.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for name in &pc.abilities {
        let applied = pc.times_applied(name);
        let note = if app.registry.is_passive(name) {
            if applied > 0 {
                "passive, in effect".to_string()
            } else {
                "passive".to_string()
            }
        } else {
            format!("used {} times", applied)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:16}", name), Style::default().fg(Color::White)),
            Span::styled(note, Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "═══ Equipment ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    if pc.equipment.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for name in app.item_names() {
        let held = pc.equipment.get(&name).copied().unwrap_or(0);
        lines.push(Line::from(vec![
            Span::styled(format!("  {:16}", name), Style::default().fg(Color::White)),
            Span::styled(format!("×{}", held), Style::default().fg(Color::Gray)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Holdings "));

    f.render_widget(paragraph, area);
}

/// Flavour text for the archetype words the character was built from,
/// in descriptor order. Words missing from the loaded rulebook, or
/// records without a description, contribute nothing.
fn archetype_descriptions(app: &App) -> Vec<&str> {
    let pc = &app.character;
    [
        app.rules
            .adjective(&pc.adjective)
            .ok()
            .map(|r| r.description.as_str()),
        app.rules.noun(&pc.noun).ok().map(|r| r.description.as_str()),
        app.rules.verb(&pc.verb).ok().map(|r| r.description.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|text| !text.is_empty())
    .collect()
}

fn format_pool(kind: PoolKind, attr: &Attribute) -> Line<'static> {
    let color = pool_color(kind);
    Line::from(vec![
        Span::styled(format!("{:12}", kind.name()), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:>5}  ", attr.to_string()), Style::default().fg(color)),
        Span::styled(pool_bar(attr.current, attr.max, 20), Style::default().fg(color)),
    ])
}

fn format_count(name: &str, value: i64, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:12}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("{}", value), Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    /// Render the sheet into a test buffer and flatten it to text.
    fn rendered_sheet() -> String {
        let app = App::new().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw(f, &app, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            if i > 0 && i % width == 0 {
                text.push('\n');
            }
            text.push_str(cell.symbol());
        }
        text
    }

    #[test]
    fn test_sheet_shows_the_archetype_descriptions() {
        let text = rendered_sheet();

        // One sentence per archetype word, straight from the rulebook.
        assert!(text.contains("A warrior, relying on strength of arm and quickness of foot."));
        assert!(text.contains("You are hardy and difficult to hurt."));
        assert!(text.contains("You will take any advantage you can get, fair or not."));
    }

    #[test]
    fn test_sheet_shows_identity_and_pools() {
        let text = rendered_sheet();

        assert!(text.contains("Tor"));
        assert!(text.contains("(tough glaive / fights dirty)"));
        assert!(text.contains("might"));
        assert!(text.contains("speed"));
        assert!(text.contains("intellect"));
        assert!(text.contains("shins"));
    }
}
