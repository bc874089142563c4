//! Custom widgets for chart kinds ratatui has no built-in for

pub mod area;
pub mod funnel;
pub mod share_bar;
pub mod sparkline;
pub mod stacked;

pub use area::AreaChart;
pub use funnel::Funnel;
pub use share_bar::ShareBar;
pub use sparkline::MiniSparkline;
pub use stacked::StackedBars;
