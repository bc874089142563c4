//! Workforce view - headcount structure

use crate::domain::widget::{
    BarSpec, Cell, Chart, Orientation, Row, Series, Stacking, Widget, WidgetId, WidgetTree,
};
use crate::domain::{Datasets, ViewId};

use super::{slices, GENDER_COLORS, GENERATION_COLORS, VIOLET};

pub fn render(data: &Datasets) -> WidgetTree {
    let ages = BarSpec {
        categories: data
            .age_distribution
            .iter()
            .map(|b| b.range.to_string())
            .collect(),
        series: vec![Series {
            name: "Headcount",
            color: VIOLET,
            values: data
                .age_distribution
                .iter()
                .map(|b| f64::from(b.count))
                .collect(),
        }],
        orientation: Orientation::Horizontal,
        stacking: Stacking::Grouped,
        unit: "",
        show_values: true,
    };

    WidgetTree::new(ViewId::Workforce, "Workforce").row(Row::new(vec![
        Cell::of(Widget::new(
            WidgetId::GenderStructure,
            Chart::Donut(slices(&data.gender_structure, &GENDER_COLORS)),
        )),
        Cell::of(Widget::new(
            WidgetId::GenerationSplit,
            Chart::Donut(slices(&data.generation_split, &GENERATION_COLORS)),
        )),
        Cell::of(Widget::new(WidgetId::AgeDistribution, Chart::Bars(ages))),
    ]))
}
