//! Drawing for a single [`Widget`]: a titled block plus its chart body

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart as LineChart, Dataset, GraphType,
    Paragraph,
};
use ratatui::Frame;

use crate::domain::widget::{
    AgendaItem, BarSpec, Chart, KpiTile, Orientation, Stacking, TrendSpec, Widget,
};
use crate::ui::format;
use crate::ui::widgets::{AreaChart, Funnel, MiniSparkline, ShareBar, StackedBars};

/// Bar values are handed to ratatui as integers in tenths
const BAR_SCALE: f64 = 10.0;

pub fn draw_widget(f: &mut Frame, area: Rect, widget: &Widget) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", widget.title()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    if widget.chart.is_empty() {
        f.render_widget(
            Paragraph::new("No data").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    match &widget.chart {
        Chart::KpiGrid(tiles) => draw_kpi_grid(f, inner, tiles),
        Chart::Donut(slices) => f.render_widget(ShareBar::new(slices), inner),
        Chart::Bars(spec) => match spec.stacking {
            Stacking::Stacked => f.render_widget(StackedBars::new(spec), inner),
            Stacking::Grouped => draw_bars(f, inner, spec),
        },
        Chart::Line(spec) => draw_line(f, inner, spec),
        Chart::Area(spec) => draw_area(f, inner, spec),
        Chart::Funnel(stages) => f.render_widget(Funnel::new(stages), inner),
        Chart::Agenda(items) => draw_agenda(f, inner, items),
    }
}

fn draw_kpi_grid(f: &mut Frame, area: Rect, tiles: &[KpiTile]) {
    let count = tiles.len() as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            tiles
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (tile, rect) in tiles.iter().zip(columns.iter()) {
        let mut heading = vec![Span::styled(tile.label, Style::default().fg(Color::Gray))];
        if let Some(icon) = tile.icon {
            heading.push(Span::raw(" "));
            heading.push(Span::styled(
                icon.glyph(),
                Style::default().fg(Color::LightMagenta),
            ));
        }
        let mut lines = vec![
            Line::from(heading),
            Line::from(Span::styled(
                format::value(tile.value, tile.precision, tile.unit),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(delta) = tile.delta_pct {
            let color = if delta >= 0 { Color::LightGreen } else { Color::LightRed };
            lines.push(Line::from(vec![
                Span::styled(format::delta(delta), Style::default().fg(color)),
                Span::styled(" vs last month", Style::default().fg(Color::DarkGray)),
            ]));
        }
        f.render_widget(Paragraph::new(lines), *rect);
    }
}

/// Split off a one-row legend at the bottom when several series share a chart
fn split_legend(area: Rect, series: usize) -> (Rect, Option<Rect>) {
    if series < 2 || area.height < 4 {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

fn legend_line(spec: &BarSpec) -> Line<'static> {
    let mut spans = Vec::new();
    for series in &spec.series {
        spans.push(Span::styled("■ ", Style::default().fg(series.color)));
        spans.push(Span::styled(
            format!("{}  ", series.name),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Horizontal bars need room for the category column plus at least one bar cell
pub(crate) fn horizontal_fits(spec: &BarSpec, width: u16) -> bool {
    let label_width = spec
        .categories
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0) as u16;
    width > label_width.saturating_add(2)
}

fn draw_bars(f: &mut Frame, area: Rect, spec: &BarSpec) {
    let (plot, legend) = split_legend(area, spec.series.len());
    if spec.orientation == Orientation::Horizontal && !horizontal_fits(spec, plot.width) {
        f.render_widget(
            Paragraph::new("…").style(Style::default().fg(Color::DarkGray)),
            plot,
        );
        return;
    }
    let precision = format::precision_for(
        &spec
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .collect::<Vec<_>>(),
    );

    let groups: Vec<BarGroup> = spec
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            // single-series horizontal bars carry the category on the bar itself
            let inline_label =
                spec.orientation == Orientation::Horizontal && spec.series.len() == 1;
            let bars: Vec<Bar> = spec
                .series
                .iter()
                .map(|series| {
                    let value = series.values.get(i).copied().unwrap_or(0.0);
                    let text = if spec.show_values {
                        format::value(value, precision, spec.unit)
                    } else {
                        String::new()
                    };
                    let bar = Bar::default()
                        .value((value.max(0.0) * BAR_SCALE).round() as u64)
                        .text_value(text)
                        .style(Style::default().fg(series.color))
                        .value_style(Style::default().fg(Color::Black).bg(series.color));
                    if inline_label {
                        bar.label(Line::from(category.clone()))
                    } else {
                        bar
                    }
                })
                .collect();
            let group = BarGroup::default().bars(&bars);
            if inline_label {
                group
            } else {
                group.label(Line::from(category.clone()))
            }
        })
        .collect();

    let per_group = spec.series.len().max(1) as u16;
    let mut chart = BarChart::default().group_gap(1).bar_gap(0);
    chart = match spec.orientation {
        Orientation::Vertical => {
            let slots = (spec.categories.len() as u16).max(1);
            let bar_width = (plot.width / slots).saturating_sub(1) / per_group;
            chart.bar_width(bar_width.clamp(1, 9))
        }
        Orientation::Horizontal => chart.direction(Direction::Horizontal).bar_width(1),
    };
    for group in groups {
        chart = chart.data(group);
    }
    f.render_widget(chart, plot);

    if let Some(rect) = legend {
        f.render_widget(Paragraph::new(legend_line(spec)), rect);
    }
}

fn axis_labels(categories: &[String]) -> Vec<Span<'static>> {
    match categories {
        [] => Vec::new(),
        [only] => vec![Span::raw(only.clone())],
        [first, .., last] => {
            let mid = &categories[categories.len() / 2];
            if categories.len() > 2 {
                vec![
                    Span::raw(first.clone()),
                    Span::raw(mid.clone()),
                    Span::raw(last.clone()),
                ]
            } else {
                vec![Span::raw(first.clone()), Span::raw(last.clone())]
            }
        }
    }
}

fn draw_line(f: &mut Frame, area: Rect, spec: &TrendSpec) {
    let legend_rows = spec.series.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(legend_rows)])
        .split(area);

    let points: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .map(|s| {
            s.values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();
    let datasets: Vec<Dataset> = spec
        .series
        .iter()
        .zip(points.iter())
        .map(|(series, data)| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color))
                .data(data)
        })
        .collect();

    let (lo, hi) = spec.bounds();
    let pad = ((hi - lo) * 0.1).max(1.0);
    let y_lo = (lo - pad).max(0.0);
    let y_hi = hi + pad;
    let x_hi = (spec.categories.len().saturating_sub(1)).max(1) as f64;
    let precision = format::precision_for(&[y_lo, y_hi]);

    let chart = LineChart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_hi])
                .labels(axis_labels(&spec.categories)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_lo, y_hi])
                .labels(vec![
                    Span::raw(format!("{y_lo:.precision$}")),
                    Span::raw(format!("{y_hi:.precision$}")),
                ]),
        );
    f.render_widget(chart, chunks[0]);

    let name_width = spec.series.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);
    for (i, series) in spec.series.iter().enumerate() {
        let row = Rect {
            y: chunks[1].y + i as u16,
            height: 1,
            ..chunks[1]
        };
        if row.y >= chunks[1].y + chunks[1].height {
            break;
        }
        let last = series
            .last()
            .map(|v| format::value(v, format::precision_for(&series.values), spec.unit))
            .unwrap_or_default();
        let label = format!("■ {:<name_width$} ", series.name);
        let label_width = label.chars().count() as u16;
        f.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(series.color))),
            row,
        );
        let last = format!(" {last}");
        let last_width = last.chars().count() as u16;
        if row.width <= label_width + last_width {
            continue;
        }
        let spark = Rect {
            x: row.x + label_width,
            width: row.width - label_width - last_width,
            ..row
        };
        f.render_widget(
            MiniSparkline::new(&series.values).style(Style::default().fg(series.color)),
            spark,
        );
        let value = Rect {
            x: spark.x + spark.width.min(series.values.len() as u16),
            width: last_width,
            ..row
        };
        f.render_widget(
            Paragraph::new(Span::styled(last, Style::default().fg(Color::White))),
            value,
        );
    }
}

fn draw_area(f: &mut Frame, area: Rect, spec: &TrendSpec) {
    let (lo, hi) = spec.bounds();
    let floor = (lo - (hi - lo) * 0.5).max(0.0);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let mut summary = Vec::new();
    for series in &spec.series {
        let precision = format::precision_for(&series.values);
        summary.push(Span::styled("■ ", Style::default().fg(series.color)));
        summary.push(Span::styled(
            format!(
                "{}  peak {}  latest {}  ",
                series.name,
                format::value(series.max(), precision, spec.unit),
                format::value(series.last().unwrap_or(0.0), precision, spec.unit),
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(summary)), chunks[0]);

    for series in &spec.series {
        f.render_widget(
            AreaChart::new(&series.values, &spec.categories)
                .bounds(floor, hi)
                .color(series.color),
            chunks[1],
        );
    }
}

fn draw_agenda(f: &mut Frame, area: Rect, items: &[AgendaItem]) {
    let width = area.width as usize;
    let lines: Vec<Line> = items
        .iter()
        .flat_map(|item| {
            let time_width = item.time.chars().count();
            let title_width = width.saturating_sub(time_width + 1);
            let title: String = item.title.chars().take(title_width).collect();
            let gap = width.saturating_sub(title.chars().count() + time_width);
            [
                Line::from(vec![
                    Span::styled(title, Style::default().fg(Color::White)),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(item.time.clone(), Style::default().fg(Color::LightMagenta)),
                ]),
                Line::from(""),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}
