//! Explicit view state for the dashboard. Every transform takes this state
//! as an argument; nothing lives in ambient globals.

use serde::Serialize;

use crate::charts::{DisplayMode, FilterBucket, SortKey};
use crate::core::seed::ReportingPeriod;

/// Which chart is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Clients,
    Products,
    Months,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Clients, Category::Products, Category::Months];

    pub fn value(self) -> &'static str {
        match self {
            Category::Clients => "client",
            Category::Products => "product",
            Category::Months => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Clients => "By Client",
            Category::Products => "By Product",
            Category::Months => "By Month",
        }
    }
}

/// The four state axes plus the active reporting period. Exactly one value
/// per axis is active; any change re-renders the active category only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub sort_key: SortKey,
    pub filter_bucket: FilterBucket,
    pub display_mode: DisplayMode,
    pub active_category: Category,
    pub period: ReportingPeriod,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape-key reset: sort, filter, and mode return to their defaults.
    /// The active category and period stay put.
    pub fn clear_filters(&mut self) {
        self.sort_key = SortKey::default();
        self.filter_bucket = FilterBucket::default();
        self.display_mode = DisplayMode::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_initial_page() {
        let state = DashboardState::new();
        assert_eq!(state.sort_key, SortKey::Achievement);
        assert_eq!(state.filter_bucket, FilterBucket::All);
        assert_eq!(state.display_mode, DisplayMode::Bars);
        assert_eq!(state.active_category, Category::Clients);
    }

    #[test]
    fn clear_filters_keeps_category_and_period() {
        let mut state = DashboardState {
            sort_key: SortKey::Name,
            filter_bucket: FilterBucket::Low,
            display_mode: DisplayMode::Stacked,
            active_category: Category::Months,
            period: ReportingPeriod::January2026,
        };
        state.clear_filters();
        assert_eq!(state.sort_key, SortKey::Achievement);
        assert_eq!(state.filter_bucket, FilterBucket::All);
        assert_eq!(state.display_mode, DisplayMode::Bars);
        assert_eq!(state.active_category, Category::Months);
        assert_eq!(state.period, ReportingPeriod::January2026);
    }
}
