pub mod charts;
pub mod filters;
pub mod header;
pub mod statistics_panel;
pub mod transactions;

pub use charts::{ChartKind, DatasetChart};
pub use filters::Filters;
pub use header::Header;
pub use statistics_panel::StatisticsPanel;
pub use transactions::TransactionTable;
