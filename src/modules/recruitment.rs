//! Recruitment view - funnel, hiring trend and candidate sources

use crate::domain::widget::{Cell, Chart, Row, Stage, TrendSpec, Widget, WidgetId, WidgetTree};
use crate::domain::{Datasets, ViewId};

use super::{month_categories, month_series, slices, INDIGO_DEEP, SOURCE_COLORS};

pub fn render(data: &Datasets) -> WidgetTree {
    let stages = data
        .funnel
        .iter()
        .enumerate()
        .map(|(i, s)| Stage {
            label: s.stage,
            value: f64::from(s.value),
            color: SOURCE_COLORS[i % SOURCE_COLORS.len()],
        })
        .collect();

    let trend = TrendSpec {
        categories: month_categories(&data.hiring_trend),
        series: vec![month_series("Hires", INDIGO_DEEP, &data.hiring_trend)],
        unit: "",
    };

    WidgetTree::new(ViewId::Recruitment, "Recruitment").row(Row::new(vec![
        Cell::of(Widget::new(WidgetId::RecruitmentFunnel, Chart::Funnel(stages))),
        Cell::stack(vec![
            Widget::new(WidgetId::MonthlyHiringTrend, Chart::Line(trend)),
            Widget::new(
                WidgetId::SourceSplit,
                Chart::Donut(slices(&data.source_split, &SOURCE_COLORS)),
            ),
        ]),
    ]))
}
