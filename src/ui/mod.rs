use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

mod charts;
pub mod format;
pub mod layout;
pub mod tabs;
mod view;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::domain::Icon;

pub const TITLE: &str = "Fulfillment HR Dashboard";

const VIEW_HINT: &str = "views: dashboard recruitment workforce productivity attendance diversity";

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    tabs::draw_nav_bar(f, areas.nav, &app.shell.navigation());
    view::draw_tree(f, areas.content, app.shell.mounted());
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("View", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", app.active_view().title())),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let registry = app.shell.registry();
    let right_line = Line::from(vec![
        Span::styled("Views ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", registry.len())),
        Span::styled(Icon::Bell.glyph(), Style::default().fg(Color::LightMagenta)),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mounted = app.shell.mounted();
    let position = app
        .shell
        .registry()
        .position(app.active_view())
        .map(|i| i + 1)
        .unwrap_or(0);
    let line = Line::from(vec![
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(
            "{} ({}/{})  ",
            app.active_view().key(),
            position,
            app.shell.registry().len()
        )),
        Span::styled("Widgets ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", mounted.widget_ids().len())),
        Span::styled("Switches ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.transitions().to_string()),
    ]);

    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("view", "view <name>: open a view"),
        ("goto", "goto <name>: open a view"),
        ("next", "Next view"),
        ("prev", "Previous view"),
        ("help", "Toggle help"),
        ("quit", "Quit"),
    ];

    commands
        .into_iter()
        .find(|(cmd, _)| cmd.starts_with(&input))
        .map(|(_, desc)| desc)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or(VIEW_HINT);
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints() -> Line<'static> {
    let key = Style::default().fg(Color::LightCyan);
    Line::from(vec![
        Span::styled("1-6", key),
        Span::raw(" View  "),
        Span::styled("Tab", key),
        Span::raw(" Next  "),
        Span::styled("S-Tab", key),
        Span::raw(" Prev  "),
        Span::styled(":", key),
        Span::raw(" Command  "),
        Span::styled("?", key),
        Span::raw(" Help  "),
        Span::styled("q", key),
        Span::raw(" Quit"),
    ])
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from("Navigation"),
        Line::from("  1-6        Jump to view"),
        Line::from("  Tab / l    Next view"),
        Line::from("  S-Tab / h  Previous view"),
        Line::from("  Mouse      Click a sidebar entry"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :view <name>  Open a view (also :goto, :v)"),
        Line::from("  :<name>       Open a view"),
        Line::from("  :next :prev   Cycle views"),
        Line::from("  :quit         Quit"),
        Line::from("  Up            Recall last command"),
        Line::from(""),
        Line::from("  ?          Toggle help"),
        Line::from("  Esc        Close"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("Views"),
    ];
    for entry in app.shell.navigation().entries {
        lines.push(Line::from(format!(
            "  {}  {} {}",
            entry.shortcut,
            entry.icon.glyph(),
            entry.id.key()
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
