pub mod cell;
pub mod chart;
pub mod selection;
pub mod table;

pub use cell::Cell;
pub use chart::{ChartSpec, ChartStyle};
pub use selection::{ChartSelection, ChartSettings, ColumnRole, ResolvedColumn, SelectionRequest};
pub use table::OptionsTable;
