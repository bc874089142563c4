//! Productivity view - warehouse throughput and revenue

use crate::domain::dataset::hour_label;
use crate::domain::widget::{
    BarSpec, Cell, Chart, KpiTile, Orientation, Row, Series, Stacking, TrendSpec, Widget,
    WidgetId, WidgetTree,
};
use crate::domain::{Datasets, ViewId};

use super::{INDIGO, INDIGO_DEEP, LAVENDER, RED, VIOLET_SOFT};

pub fn render(data: &Datasets) -> WidgetTree {
    let tiles = data
        .productivity_kpis
        .iter()
        .map(|k| KpiTile {
            label: k.label,
            value: k.value,
            precision: if k.value.fract() == 0.0 { 0 } else { 1 },
            unit: k.unit,
            delta_pct: None,
            icon: None,
        })
        .collect();

    let hours: Vec<String> = data.uph.iter().map(|t| hour_label(t.hour)).collect();
    let uph = TrendSpec {
        categories: hours,
        series: vec![
            Series {
                name: "Pick",
                color: INDIGO_DEEP,
                values: data.uph.iter().map(|t| f64::from(t.pick)).collect(),
            },
            Series {
                name: "Pack",
                color: VIOLET_SOFT,
                values: data.uph.iter().map(|t| f64::from(t.pack)).collect(),
            },
        ],
        unit: "",
    };

    let errors = TrendSpec {
        categories: data.error_trend.iter().map(|h| hour_label(h.hour)).collect(),
        series: vec![Series {
            name: "Err %",
            color: RED,
            values: data.error_trend.iter().map(|h| h.value).collect(),
        }],
        unit: "%",
    };

    let rows = &data.revenue_per_staff;
    let revenue = BarSpec {
        categories: rows.iter().map(|q| q.quarter.to_string()).collect(),
        series: vec![
            Series {
                name: "Junior",
                color: LAVENDER,
                values: rows.iter().map(|q| f64::from(q.junior)).collect(),
            },
            Series {
                name: "Mid",
                color: VIOLET_SOFT,
                values: rows.iter().map(|q| f64::from(q.mid)).collect(),
            },
            Series {
                name: "Senior",
                color: INDIGO,
                values: rows.iter().map(|q| f64::from(q.senior)).collect(),
            },
        ],
        orientation: Orientation::Horizontal,
        stacking: Stacking::Stacked,
        unit: "k$",
        show_values: true,
    };

    WidgetTree::new(ViewId::Productivity, "Productivity")
        .row(
            Row::new(vec![Cell::of(Widget::new(
                WidgetId::ProductivityKpis,
                Chart::KpiGrid(tiles),
            ))])
            .weight(1),
        )
        .row(Row::new(vec![
            Cell::of(Widget::new(WidgetId::PickPackUph, Chart::Line(uph))),
            Cell::stack(vec![
                Widget::new(WidgetId::ErrorRate, Chart::Area(errors)),
                Widget::new(WidgetId::RevenuePerStaff, Chart::Bars(revenue)),
            ]),
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_kpis_keep_one_decimal() {
        let tree = render(&Datasets::from_seed(3));
        let Some(Chart::KpiGrid(tiles)) =
            tree.widget(WidgetId::ProductivityKpis).map(|w| &w.chart)
        else {
            panic!("productivity kpis missing");
        };
        let err = tiles.iter().find(|t| t.label == "Err Rate").map(|t| t.precision);
        let pick = tiles.iter().find(|t| t.label == "Pick UPH").map(|t| t.precision);
        assert_eq!(err, Some(1));
        assert_eq!(pick, Some(0));
    }

    #[test]
    fn test_revenue_is_stacked_by_seniority() {
        let tree = render(&Datasets::from_seed(3));
        let Some(Chart::Bars(spec)) = tree.widget(WidgetId::RevenuePerStaff).map(|w| &w.chart)
        else {
            panic!("revenue chart missing");
        };
        assert_eq!(spec.stacking, Stacking::Stacked);
        assert_eq!(spec.totals(), vec![1290.0, 1330.0, 1370.0]);
    }
}
