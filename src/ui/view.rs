//! Lays out a mounted [`WidgetTree`] inside the content area

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::{Cell, Row, WidgetTree};

use super::charts;

pub fn draw_tree(f: &mut Frame, area: Rect, tree: &WidgetTree) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let heading = Line::from(vec![
        Span::styled(
            format!(" {}", tree.heading),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", tree.view.title()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(heading), chunks[0]);

    for (row, rect) in tree.rows.iter().zip(row_areas(chunks[1], &tree.rows)) {
        draw_row(f, rect, row);
    }
}

pub(crate) fn row_areas(area: Rect, rows: &[Row]) -> Vec<Rect> {
    let total: u32 = rows.iter().map(|r| u32::from(r.weight)).sum();
    if total == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            rows.iter()
                .map(|r| Constraint::Ratio(u32::from(r.weight), total))
                .collect::<Vec<_>>(),
        )
        .split(area)
        .to_vec()
}

fn even_split(area: Rect, direction: Direction, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(direction)
        .constraints(
            (0..count)
                .map(|_| Constraint::Ratio(1, count as u32))
                .collect::<Vec<_>>(),
        )
        .split(area)
        .to_vec()
}

fn draw_row(f: &mut Frame, area: Rect, row: &Row) {
    for (cell, rect) in row
        .cells
        .iter()
        .zip(even_split(area, Direction::Horizontal, row.cells.len()))
    {
        draw_cell(f, rect, cell);
    }
}

fn draw_cell(f: &mut Frame, area: Rect, cell: &Cell) {
    for (widget, rect) in cell
        .widgets
        .iter()
        .zip(even_split(area, Direction::Vertical, cell.widgets.len()))
    {
        charts::draw_widget(f, rect, widget);
    }
}
