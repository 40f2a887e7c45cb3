//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("1-6", "Jump to tab (Sheet/Combat/Abilities/Skills/Equip/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Navigate lists"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Combat ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("a / Enter", "Take a rolled hit (1-6) on the selected pool"),
        key_line("h", "Recover rolled points (1-3) into the selected pool"),
        key_line("p", "Spend one build point to grow the selected pool"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Abilities ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("←/→", "Switch between known abilities and the rulebook"),
        key_line("Enter", "Use the selected ability, or learn it"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Equipment ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("+/-", "Pick up / drop one of the selected item"),
        key_line("e / y", "Earn 5 shins / pay 3 shins"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Saves ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("s", "Write a snapshot under saves/<name>/"),
        key_line("l", "Load this character's newest snapshot"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Rules of Play ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The damage cascade:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Damage drains the pool it hits. Leftover points spill into"),
        Line::from("  the next pool: might feeds speed, speed feeds intellect,"),
        Line::from("  intellect wraps back to might. When all three pools reach"),
        Line::from("  zero together the character is defeated and any leftover"),
        Line::from("  damage is discarded."),
        Line::from(""),
        Line::from(Span::styled(
            "Healing:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Healing goes to exactly one pool and never spills over."),
        Line::from("  A pool cannot be healed past its maximum."),
        Line::from(""),
        Line::from(Span::styled(
            "The build budget:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Growing a pool permanently costs unspent build points."),
        Line::from("  Ability effects are exempt; only deliberate spends pay."),
        Line::from(""),
        Line::from(Span::styled(
            "Passive abilities:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  A passive ability takes hold the moment it is learned and"),
        Line::from("  applies exactly once; using it again changes nothing."),
        Line::from(""),
        Line::from(Span::styled(
            "Shins:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  The purse may go negative. Debt is tracked, not forbidden."),
        Line::from(""),
        Line::from(Span::styled(
            "Saves:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Every save is a new timestamped snapshot; loading picks"),
        Line::from("  the newest. Snapshots from a newer app version are refused"),
        Line::from("  rather than misread."),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Rules "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
