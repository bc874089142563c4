//! View renderers
//!
//! Each module exposes a pure `render(&Datasets) -> WidgetTree` that binds
//! datasets to the widgets of one dashboard section:
//! - dashboard: snapshot KPIs, working format, team KPI, schedule
//! - recruitment: funnel, hiring trend, source split
//! - workforce: gender, generation, age distribution
//! - productivity: ops KPIs, UPH, error rate, revenue per staff
//! - attendance: absence trend, overtime
//! - diversity: leadership, promotion rate, pay gap

pub mod attendance;
pub mod dashboard;
pub mod diversity;
pub mod productivity;
pub mod recruitment;
pub mod workforce;

use ratatui::style::Color;

use crate::domain::dataset::{month_label, MonthValue, Share};
use crate::domain::widget::{Series, Slice};

pub(crate) const INDIGO: Color = Color::Rgb(99, 102, 241);
pub(crate) const INDIGO_DEEP: Color = Color::Rgb(79, 70, 229);
pub(crate) const VIOLET: Color = Color::Rgb(139, 92, 246);
pub(crate) const VIOLET_SOFT: Color = Color::Rgb(167, 139, 250);
pub(crate) const LAVENDER: Color = Color::Rgb(196, 181, 253);
pub(crate) const RED: Color = Color::Rgb(239, 68, 68);
pub(crate) const AMBER: Color = Color::Rgb(245, 158, 11);

pub(crate) const SOURCE_COLORS: [Color; 4] = [VIOLET_SOFT, INDIGO, LAVENDER, VIOLET];
pub(crate) const GENDER_COLORS: [Color; 2] = [LAVENDER, INDIGO];
pub(crate) const GENERATION_COLORS: [Color; 4] = [
    Color::Rgb(253, 224, 71),
    Color::Rgb(251, 191, 36),
    AMBER,
    Color::Rgb(180, 83, 9),
];

/// Donut slices from shares, cycling through the palette
pub(crate) fn slices(shares: &[Share], palette: &[Color]) -> Vec<Slice> {
    shares
        .iter()
        .enumerate()
        .map(|(i, share)| Slice {
            label: share.name,
            value: f64::from(share.value),
            color: palette[i % palette.len()],
        })
        .collect()
}

pub(crate) fn month_categories(points: &[MonthValue]) -> Vec<String> {
    points
        .iter()
        .map(|p| month_label(p.month).to_string())
        .collect()
}

pub(crate) fn month_series(name: &'static str, color: Color, points: &[MonthValue]) -> Series {
    Series {
        name,
        color,
        values: points.iter().map(|p| p.value).collect(),
    }
}
