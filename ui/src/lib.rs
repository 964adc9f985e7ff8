//! Shared UI crate for SalesPulse. The data pipeline, view state, and all
//! dashboard views live here; platform launchers stay thin.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod views;

pub mod components {
    pub mod chart_panel;
    pub mod detail_modal;
    pub mod header;
    pub mod insight_panel;
    pub mod summary_cards;
    pub mod toast;
    pub mod tooltip;

    pub use chart_panel::ChartPanel;
    pub use detail_modal::DetailModal;
    pub use header::DashboardHeader;
    pub use insight_panel::InsightPanel;
    pub use summary_cards::{ChartStats, SummaryDeck};
    pub use toast::{Toast, ToastStack, ToastTray};
    pub use tooltip::{ChartTooltip, TooltipData};
}
