//! Assembles the view model for the active category: the one place where
//! the pipeline runs and the empty-filter fallbacks are decided.

use crate::charts::insights::{self, ChartTotals, InsightRow, Insights};
use crate::charts::layout::{self, ChartLayout};
use crate::charts::transform;
use crate::core::format;

use super::state::{Category, DashboardState};
use super::store::DataStore;

/// Everything the presentation surface needs for one render of the active
/// chart. Plain data; building it never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartViewModel {
    pub category: Category,
    pub layout: ChartLayout,
    pub insights: Insights,
    pub insight_rows: Vec<InsightRow>,
    pub totals: ChartTotals,
    pub summary: SummaryCards,
}

/// Texts for the three summary cards under the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub top_performer: String,
    pub needs_attention: String,
    pub trend: String,
}

/// Runs sort → filter → {layout, insights, totals} for the active category.
/// Inactive categories are left alone; they are recomputed from scratch
/// when they become active.
pub fn build_view(state: &DashboardState, store: &DataStore) -> ChartViewModel {
    let category = state.active_category;
    let sorted = transform::sort_records(store.records(category), state.sort_key);
    let visible = transform::filter_records(&sorted, state.filter_bucket);

    let chart = layout::build_layout(&visible, state.display_mode);
    let aggregates = insights::summarize(&visible);

    let insight_rows = match category {
        Category::Clients => insights::client_rows(&aggregates),
        Category::Products => insights::product_rows(&visible),
        Category::Months => insights::month_rows(&visible),
    };

    // Totals and summary cards fall back to the unfiltered list when the
    // filter empties the chart; the insight panel shows the sentinel instead.
    let display = if visible.is_empty() { &sorted } else { &visible };
    let totals = insights::compute_totals(display);
    let summary = summary_cards(display, store);

    ChartViewModel {
        category,
        layout: chart,
        insights: aggregates,
        insight_rows,
        totals,
        summary,
    }
}

fn summary_cards(display: &[crate::core::record::PerfRecord], store: &DataStore) -> SummaryCards {
    let (top_performer, needs_attention) = match insights::summarize(display) {
        Insights::Ready { top, lowest, .. } => (
            format!(
                "{} - {}",
                top.name,
                format::format_percent(top.percentage)
            ),
            format!(
                "{} - {}",
                lowest.name,
                format::format_percent(lowest.percentage)
            ),
        ),
        Insights::NoData => ("No data".to_string(), "No data".to_string()),
    };

    // The trend card always reads the month series in calendar order,
    // whatever category is on screen.
    let trend = match insights::month_trend(&store.months) {
        Some(trend) => format!(
            "{} ({} → {})",
            format::format_delta(trend.delta),
            trend.from,
            trend.to
        ),
        None => "Single data point".to_string(),
    };

    SummaryCards {
        top_performer,
        needs_attention,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{DisplayMode, FilterBucket, SortKey};

    fn state() -> DashboardState {
        DashboardState::new()
    }

    #[test]
    fn default_view_sorts_clients_by_achievement() {
        let store = DataStore::seeded();
        let view = build_view(&state(), &store);

        assert_eq!(view.category, Category::Clients);
        let names: Vec<&str> = view.layout.groups.iter().map(|g| g.name.as_str()).collect();
        // 90.0, 88.6, 86.7, 84.4, 73.3
        assert_eq!(
            names,
            vec![
                "MediaCorp India",
                "AutoMax Group",
                "Star Brands Ltd",
                "Premier Foods",
                "HealthFirst Pharma"
            ]
        );
    }

    #[test]
    fn switching_category_rebuilds_from_that_list() {
        let store = DataStore::seeded();
        let mut st = state();
        st.active_category = Category::Products;
        st.sort_key = SortKey::Target;

        let view = build_view(&st, &store);
        assert_eq!(view.layout.groups[0].name, "FCT");
        assert_eq!(view.insight_rows.len(), 3);
    }

    #[test]
    fn empty_filter_keeps_totals_via_fallback() {
        let store = DataStore::seeded();
        let mut st = state();
        st.active_category = Category::Products;
        st.filter_bucket = FilterBucket::High; // no Q1 product reaches 85%

        let view = build_view(&st, &store);
        assert!(view.layout.is_empty());
        assert_eq!(view.insights, Insights::NoData);
        assert_eq!(view.insight_rows[0].title, "No Data");
        // Fallback: totals still cover the whole product list.
        assert_eq!(view.totals.target, 2_500_000.0);
        assert!(view.summary.top_performer.starts_with("FCT"));
    }

    #[test]
    fn trend_card_is_sort_independent() {
        let store = DataStore::seeded();
        let mut st = state();
        st.active_category = Category::Months;
        st.sort_key = SortKey::Achieved;

        let view = build_view(&st, &store);
        assert!(view.summary.trend.contains("+2.3%"));
        assert!(view.summary.trend.contains("January → March"));
    }

    #[test]
    fn mode_switch_reuses_identical_groups() {
        let store = DataStore::seeded();
        let mut st = state();
        let bars = build_view(&st, &store);

        st.display_mode = DisplayMode::Comparison;
        let comparison = build_view(&st, &store);

        assert_eq!(bars.layout.groups, comparison.layout.groups);
        assert_ne!(bars.layout.geometry, comparison.layout.geometry);
    }

    #[test]
    fn rebuild_with_identical_state_is_identical() {
        let store = DataStore::seeded();
        let first = build_view(&state(), &store);
        let second = build_view(&state(), &store);
        assert_eq!(first, second);
    }
}
