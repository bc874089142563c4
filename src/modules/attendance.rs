//! Attendance view

use crate::domain::widget::{
    BarSpec, Cell, Chart, Orientation, Row, Stacking, TrendSpec, Widget, WidgetId, WidgetTree,
};
use crate::domain::{Datasets, ViewId};

use super::{month_categories, month_series, AMBER, RED};

pub fn render(data: &Datasets) -> WidgetTree {
    let absence = TrendSpec {
        categories: month_categories(&data.absence),
        series: vec![month_series("Absence", RED, &data.absence)],
        unit: "%",
    };
    let overtime = BarSpec {
        categories: month_categories(&data.overtime),
        series: vec![month_series("OT", AMBER, &data.overtime)],
        orientation: Orientation::Vertical,
        stacking: Stacking::Grouped,
        unit: "h",
        show_values: true,
    };

    WidgetTree::new(ViewId::Attendance, "Attendance").row(Row::new(vec![
        Cell::of(Widget::new(WidgetId::AbsenceTrend, Chart::Area(absence))),
        Cell::of(Widget::new(WidgetId::MonthlyOvertime, Chart::Bars(overtime))),
    ]))
}
