//! View-state controller layer: explicit state, the record store, and the
//! pipeline assembly for whichever chart is visible.

pub mod controller;
pub mod debounce;
pub mod state;
pub mod store;

pub use controller::{build_view, ChartViewModel, SummaryCards};
pub use debounce::Debouncer;
pub use state::{Category, DashboardState};
pub use store::{plan_live_update, DataStore, LiveUpdate, RecordBump};
