//! Stateless render functions for the visible panes
//!
//! - board: the scene's rows and graph view, role-coloured
//! - state: the scene's key/value panel plus the phase tag
//! - log: narration history up to the current step
//! - status bar: step position, playback state, keybindings
//!
//! Every function takes the data it renders explicitly; pane scroll offsets
//! are clamped here so the app never has to bounds-check them.

use crate::runner::Runner;
use crate::scene::{GraphView, Role, Scene};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn role_style(role: Role) -> Style {
    let mut style = Style::default().fg(DEFAULT_THEME.role_color(role));
    if role == Role::Cursor {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

fn graph_lines(view: &GraphView) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, node) in view.nodes.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("({}) ", node.label),
            role_style(node.role),
        )];
        let mut first = true;
        for edge in view.edges_from(i) {
            if first {
                spans.push(Span::styled("-> ", Style::default().fg(DEFAULT_THEME.comment)));
                first = false;
            } else {
                spans.push(Span::styled(", ", Style::default().fg(DEFAULT_THEME.comment)));
            }
            let target = view
                .nodes
                .get(edge.to)
                .map_or_else(|| edge.to.to_string(), |n| n.label.clone());
            spans.push(Span::styled(target, role_style(edge.role)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Render the board pane: rows of cells plus the optional graph view
pub fn render_board_pane(
    frame: &mut Frame,
    area: Rect,
    scene: &Scene,
    title: &str,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(title, is_focused);

    let mut lines: Vec<Line> = Vec::new();
    let label_width = scene
        .rows
        .iter()
        .map(|r| r.label.len())
        .max()
        .unwrap_or(0);
    for row in &scene.rows {
        let mut spans = vec![Span::styled(
            format!("{:>width$} ", row.label, width = label_width),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        for cell in &row.cells {
            spans.push(Span::styled(format!("[{}]", cell.text), role_style(cell.role)));
        }
        lines.push(Line::from(spans));
    }
    if let Some(view) = &scene.graph {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(graph_lines(view));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "(nothing to show)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let visible = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    *scroll = (*scroll).min(max_scroll);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll)
        .take(visible)
        .map(ListItem::new)
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Render the state pane: phase tag and the scene's key/value panel
pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    scene: &Scene,
    phase: &str,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block("State", is_focused);

    let mut lines = vec![Line::from(vec![
        Span::styled("phase ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            phase.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.phase)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    for (key, value) in &scene.vars {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", key), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(value.clone(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let visible = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    *scroll = (*scroll).min(max_scroll);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll)
        .take(visible)
        .map(ListItem::new)
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Render the narration log up to and including the current step.
///
/// `scroll == usize::MAX` pins the log to the bottom (auto-follow).
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    runner: &Runner,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block("Narration", is_focused);

    let mut lines = Vec::new();
    for i in 0..=runner.position() {
        if let Some(snapshot) = runner.snapshot_at(i) {
            let style = if i == runner.position() {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>4}  ", i),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(snapshot.narration.clone(), style),
            ]));
        }
    }

    let visible = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    *scroll = (*scroll).min(max_scroll);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll)
        .take(visible)
        .map(ListItem::new)
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    position: usize,
    total: Option<usize>,
    is_playing: bool,
) {
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(55),
            ratatui::layout::Constraint::Percentage(45),
        ])
        .split(area);

    let step_text = match total {
        Some(total) => format!(" Step {}/{} ", position + 1, total),
        // Lazy stepping: the total is unknown until the terminal phase.
        None => format!(" Step {}/? ", position + 1),
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            if is_playing { "▶ " } else { "" },
            Style::default().fg(DEFAULT_THEME.success),
        ),
        Span::styled(message.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ];
    frame.render_widget(Paragraph::new(Line::from(left_spans)), layout[0]);

    let right = Paragraph::new(Line::from(Span::styled(
        "←/→ step  space play  1-9 multi-step  ⏎ end  ⌫ start  tab focus  q quit ",
        Style::default().fg(DEFAULT_THEME.comment),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
