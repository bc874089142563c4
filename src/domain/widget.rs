//! Terminal-independent widget tree produced by view renderers
//!
//! A renderer copies what it needs out of the datasets into a [`WidgetTree`],
//! so the tree can be compared, cached and drawn without touching the
//! datasets again.

use ratatui::style::Color;

use super::view::{Icon, ViewId};

/// Every chart or metric block that can appear on a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetId {
    SnapshotKpis,
    WorkingFormat,
    AverageTeamKpi,
    Schedule,
    RecruitmentFunnel,
    MonthlyHiringTrend,
    SourceSplit,
    GenderStructure,
    GenerationSplit,
    AgeDistribution,
    ProductivityKpis,
    PickPackUph,
    ErrorRate,
    RevenuePerStaff,
    AbsenceTrend,
    MonthlyOvertime,
    LeadershipDiversity,
    PromotionRate,
    PayGap,
}

impl WidgetId {
    pub fn title(&self) -> &'static str {
        match self {
            WidgetId::SnapshotKpis => "Snapshot KPIs",
            WidgetId::WorkingFormat => "Working Format",
            WidgetId::AverageTeamKpi => "Average team KPI",
            WidgetId::Schedule => "Schedule",
            WidgetId::RecruitmentFunnel => "Recruitment Funnel",
            WidgetId::MonthlyHiringTrend => "Monthly Hiring Trend",
            WidgetId::SourceSplit => "Source Split",
            WidgetId::GenderStructure => "Gender Structure",
            WidgetId::GenerationSplit => "Generation Split",
            WidgetId::AgeDistribution => "Age Distribution",
            WidgetId::ProductivityKpis => "Productivity KPIs",
            WidgetId::PickPackUph => "Pick vs Pack UPH (last 4 hrs)",
            WidgetId::ErrorRate => "Error Rate %",
            WidgetId::RevenuePerStaff => "Revenue per Staff (k$)",
            WidgetId::AbsenceTrend => "Absence Trend %",
            WidgetId::MonthlyOvertime => "Monthly OT hours",
            WidgetId::LeadershipDiversity => "Leadership Diversity",
            WidgetId::PromotionRate => "Promotion Rate %",
            WidgetId::PayGap => "Pay Gap (k$)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiTile {
    pub label: &'static str,
    pub value: f64,
    pub precision: usize,
    pub unit: &'static str,
    pub delta_pct: Option<i32>,
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: Color,
}

/// Percentage of the total for each slice, in slice order
pub fn shares(slices: &[Slice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|s| if total > 0.0 { s.value / total * 100.0 } else { 0.0 })
        .collect()
}

/// One named series of values aligned with a chart's categories
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: Color,
    pub values: Vec<f64>,
}

impl Series {
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stacking {
    Grouped,
    Stacked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub orientation: Orientation,
    pub stacking: Stacking,
    pub unit: &'static str,
    pub show_values: bool,
}

impl BarSpec {
    /// Sum across series for each category
    pub fn totals(&self) -> Vec<f64> {
        (0..self.categories.len())
            .map(|i| {
                self.series
                    .iter()
                    .filter_map(|s| s.values.get(i))
                    .sum()
            })
            .collect()
    }

    /// Largest single bar, or largest stack when stacked
    pub fn peak(&self) -> f64 {
        match self.stacking {
            Stacking::Stacked => self.totals().into_iter().fold(0.0, f64::max),
            Stacking::Grouped => self.series.iter().map(Series::max).fold(0.0, f64::max),
        }
    }
}

/// Shared shape of line and area charts
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSpec {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub unit: &'static str,
}

impl TrendSpec {
    pub fn bounds(&self) -> (f64, f64) {
        let lo = self.series.iter().map(Series::min).fold(f64::INFINITY, f64::min);
        let hi = self.series.iter().map(Series::max).fold(0.0, f64::max);
        if lo.is_finite() {
            (lo, hi)
        } else {
            (0.0, hi)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub label: &'static str,
    pub value: f64,
    pub color: Color,
}

/// Percentage of the first stage reached by each stage
pub fn conversion_rates(stages: &[Stage]) -> Vec<f64> {
    let Some(first) = stages.first().map(|s| s.value) else {
        return Vec::new();
    };
    stages
        .iter()
        .map(|s| if first > 0.0 { s.value / first * 100.0 } else { 0.0 })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaItem {
    pub title: &'static str,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    KpiGrid(Vec<KpiTile>),
    Donut(Vec<Slice>),
    Bars(BarSpec),
    Line(TrendSpec),
    Area(TrendSpec),
    Funnel(Vec<Stage>),
    Agenda(Vec<AgendaItem>),
}

impl Chart {
    pub fn kind(&self) -> &'static str {
        match self {
            Chart::KpiGrid(_) => "kpi",
            Chart::Donut(_) => "donut",
            Chart::Bars(_) => "bar",
            Chart::Line(_) => "line",
            Chart::Area(_) => "area",
            Chart::Funnel(_) => "funnel",
            Chart::Agenda(_) => "agenda",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Chart::KpiGrid(tiles) => tiles.is_empty(),
            Chart::Donut(slices) => slices.is_empty(),
            Chart::Bars(spec) => spec.categories.is_empty() || spec.series.is_empty(),
            Chart::Line(spec) | Chart::Area(spec) => {
                spec.series.iter().all(|s| s.values.is_empty())
            }
            Chart::Funnel(stages) => stages.is_empty(),
            Chart::Agenda(items) => items.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub id: WidgetId,
    pub chart: Chart,
}

impl Widget {
    pub fn new(id: WidgetId, chart: Chart) -> Self {
        Self { id, chart }
    }

    pub fn title(&self) -> &'static str {
        self.id.title()
    }
}

/// Vertical stack of widgets inside one row column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub widgets: Vec<Widget>,
}

impl Cell {
    pub fn of(widget: Widget) -> Self {
        Self {
            widgets: vec![widget],
        }
    }

    pub fn stack(widgets: Vec<Widget>) -> Self {
        Self { widgets }
    }
}

/// Columns laid out side by side, each taking an equal share of the width
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// Relative height against the other rows of the tree
    pub weight: u16,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells, weight: 3 }
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight.max(1);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetTree {
    pub view: ViewId,
    pub heading: &'static str,
    pub rows: Vec<Row>,
}

impl WidgetTree {
    pub fn new(view: ViewId, heading: &'static str) -> Self {
        Self {
            view,
            heading,
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .flat_map(|cell| cell.widgets.iter())
    }

    pub fn widget_ids(&self) -> Vec<WidgetId> {
        self.widgets().map(|w| w.id).collect()
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets().find(|w| w.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.widgets().next().is_none()
    }
}
