//! Sidebar navigation: one row per registered view

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::domain::ViewId;
use crate::shell::NavBar;

/// Draw the navigation sidebar; the active view is highlighted
pub fn draw_nav_bar(f: &mut Frame, area: Rect, nav: &NavBar) {
    let lines: Vec<Line> = nav
        .entries
        .iter()
        .map(|entry| {
            let (marker, label_style) = if entry.active {
                (
                    "▌",
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(Color::White))
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::LightCyan)),
                Span::styled(
                    format!("{}:", entry.shortcut),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{} ", entry.icon.glyph()), label_style),
                Span::styled(entry.label, label_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Views")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);
}

/// Clickable rows of the sidebar, paired with the view they select
pub fn nav_hitboxes(area: Rect, nav: &NavBar) -> Vec<(Rect, ViewId)> {
    if area.width < 3 || area.height < 3 {
        return Vec::new();
    }
    let inner_rows = area.height - 2;
    nav.entries
        .iter()
        .enumerate()
        .take(inner_rows as usize)
        .map(|(i, entry)| {
            let rect = Rect::new(area.x + 1, area.y + 1 + i as u16, area.width - 2, 1);
            (rect, entry.id)
        })
        .collect()
}
