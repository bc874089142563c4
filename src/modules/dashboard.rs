//! Dashboard view - headline snapshot

use crate::domain::widget::{
    AgendaItem, BarSpec, Cell, Chart, KpiTile, Orientation, Row, Stacking, Widget, WidgetId,
    WidgetTree,
};
use crate::domain::{Datasets, ViewId};

use super::{month_categories, month_series, slices, INDIGO};

const WORKING_FORMAT_COLORS: [ratatui::style::Color; 3] = [
    ratatui::style::Color::Rgb(34, 197, 94),
    ratatui::style::Color::Rgb(59, 130, 246),
    ratatui::style::Color::Rgb(168, 85, 247),
];

pub fn render(data: &Datasets) -> WidgetTree {
    let tiles = data
        .kpis
        .iter()
        .map(|kpi| KpiTile {
            label: kpi.label,
            value: kpi.value as f64,
            precision: 0,
            unit: "",
            delta_pct: Some(kpi.delta_pct),
            icon: Some(kpi.icon),
        })
        .collect();

    let team_kpi = BarSpec {
        categories: month_categories(&data.avg_team_kpi),
        series: vec![month_series("KPI", INDIGO, &data.avg_team_kpi)],
        orientation: Orientation::Vertical,
        stacking: Stacking::Grouped,
        unit: "",
        show_values: true,
    };

    let agenda = data
        .schedule
        .iter()
        .map(|a| AgendaItem {
            title: a.title,
            time: format!("{}–{}", a.start.format("%H:%M"), a.end.format("%H:%M")),
        })
        .collect();

    WidgetTree::new(ViewId::Dashboard, "Snapshot KPIs")
        .row(
            Row::new(vec![Cell::of(Widget::new(
                WidgetId::SnapshotKpis,
                Chart::KpiGrid(tiles),
            ))])
            .weight(1),
        )
        .row(Row::new(vec![
            Cell::of(Widget::new(
                WidgetId::WorkingFormat,
                Chart::Donut(slices(&data.working_format, &WORKING_FORMAT_COLORS)),
            )),
            Cell::of(Widget::new(WidgetId::AverageTeamKpi, Chart::Bars(team_kpi))),
            Cell::of(Widget::new(WidgetId::Schedule, Chart::Agenda(agenda))),
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_time_ranges() {
        let tree = render(&Datasets::from_seed(1));
        let Some(Chart::Agenda(items)) = tree.widget(WidgetId::Schedule).map(|w| &w.chart) else {
            panic!("schedule widget missing");
        };
        assert_eq!(items[0].time, "09:00–10:00");
        assert_eq!(items[1].title, "Retro Day – HR Dept");
    }

    #[test]
    fn test_kpi_tiles_keep_deltas() {
        let tree = render(&Datasets::from_seed(1));
        let Some(Chart::KpiGrid(tiles)) = tree.widget(WidgetId::SnapshotKpis).map(|w| &w.chart)
        else {
            panic!("kpi grid missing");
        };
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[1].delta_pct, Some(-8));
        assert_eq!(tiles[0].value, 23_541.0);
    }
}
