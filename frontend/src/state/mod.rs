pub mod dashboard_state;
pub mod sync;

pub use dashboard_state::{DashboardAction, DashboardState};
pub use sync::{FetchBatch, FetchOutcome, FetchRequest, SyncTrigger};
