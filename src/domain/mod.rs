pub mod dataset;
pub mod view;
pub mod widget;

pub use dataset::Datasets;
pub use view::{Icon, ViewError, ViewId};
pub use widget::{Cell, Chart, Row, Widget, WidgetId, WidgetTree};
