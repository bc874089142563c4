//! Diversity view - leadership mix, promotion and pay by gender

use crate::domain::dataset::GenderPair;
use crate::domain::widget::{
    BarSpec, Cell, Chart, Orientation, Row, Series, Stacking, Widget, WidgetId, WidgetTree,
};
use crate::domain::{Datasets, ViewId};

use super::{slices, GENDER_COLORS, INDIGO, LAVENDER};

fn by_gender(pairs: &[GenderPair], stacking: Stacking, unit: &'static str) -> BarSpec {
    BarSpec {
        categories: pairs.iter().map(|p| p.group.to_string()).collect(),
        series: vec![
            Series {
                name: "Male",
                color: INDIGO,
                values: pairs.iter().map(|p| p.male).collect(),
            },
            Series {
                name: "Female",
                color: LAVENDER,
                values: pairs.iter().map(|p| p.female).collect(),
            },
        ],
        orientation: match stacking {
            Stacking::Stacked => Orientation::Horizontal,
            Stacking::Grouped => Orientation::Vertical,
        },
        stacking,
        unit,
        show_values: true,
    }
}

pub fn render(data: &Datasets) -> WidgetTree {
    WidgetTree::new(ViewId::Diversity, "Diversity").row(Row::new(vec![
        Cell::stack(vec![
            Widget::new(
                WidgetId::LeadershipDiversity,
                Chart::Donut(slices(&data.leadership, &GENDER_COLORS)),
            ),
            Widget::new(
                WidgetId::PromotionRate,
                Chart::Bars(by_gender(&data.promotion_rate, Stacking::Stacked, "%")),
            ),
        ]),
        Cell::of(Widget::new(
            WidgetId::PayGap,
            Chart::Bars(by_gender(&data.pay_gap, Stacking::Grouped, "k$")),
        )),
    ]))
}
