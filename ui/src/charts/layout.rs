//! Turns a transformed record list into a plain bar-chart layout.
//!
//! The layout is pure data: the presentation surface renders it without
//! reaching back into the pipeline. Display modes only change geometry,
//! never the numbers, so re-applying a mode is idempotent.

use serde::Serialize;

use crate::core::format;
use crate::core::record::{Bucket, PerfRecord};

/// Bars shorter than this stay visible and clickable.
const MIN_BAR_HEIGHT_PCT: f64 = 2.0;

/// Stagger applied per bar group for the entrance animation.
const GROUP_DELAY_STEP_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Bars,
    Stacked,
    Comparison,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [
        DisplayMode::Bars,
        DisplayMode::Stacked,
        DisplayMode::Comparison,
    ];

    pub fn value(self) -> &'static str {
        match self {
            DisplayMode::Bars => "bars",
            DisplayMode::Stacked => "stacked",
            DisplayMode::Comparison => "comparison",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Bars => "Standard Bars",
            DisplayMode::Stacked => "Stacked Bars",
            DisplayMode::Comparison => "Comparison View",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DisplayMode::Bars => "bars-view",
            DisplayMode::Stacked => "stacked-view",
            DisplayMode::Comparison => "comparison-view",
        }
    }

    pub fn geometry(self) -> ViewGeometry {
        match self {
            DisplayMode::Bars => ViewGeometry {
                group_width_px: 100,
                bar_width: "32px",
                gap_px: 8,
                stacked: false,
            },
            DisplayMode::Stacked => ViewGeometry {
                group_width_px: 80,
                bar_width: "100%",
                gap_px: 0,
                stacked: true,
            },
            DisplayMode::Comparison => ViewGeometry {
                group_width_px: 120,
                bar_width: "40%",
                gap_px: 12,
                stacked: false,
            },
        }
    }
}

/// Spacing and stacking parameters derived purely from the display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewGeometry {
    pub group_width_px: u32,
    pub bar_width: &'static str,
    pub gap_px: u32,
    /// Achieved bar overlays the target bar instead of sitting beside it.
    pub stacked: bool,
}

/// One record's slice of the chart: two scaled bars plus labels, ready for
/// the presentation surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGroup {
    pub name: String,
    pub bucket: Bucket,
    pub color: String,
    pub target: f64,
    pub achieved: f64,
    pub percentage: f64,
    pub percentage_label: String,
    pub target_display: String,
    pub achieved_display: String,
    /// Heights as a share of the tallest target in view.
    pub target_height_pct: f64,
    pub achieved_height_pct: f64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub mode: DisplayMode,
    pub geometry: ViewGeometry,
    pub max_target: f64,
    pub groups: Vec<BarGroup>,
}

impl ChartLayout {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Builds the layout for an already sorted-and-filtered record list.
///
/// An empty list produces a degenerate but valid layout with zero groups;
/// `max_target` defaults to 1 so the scale maths stays total.
pub fn build_layout(records: &[PerfRecord], mode: DisplayMode) -> ChartLayout {
    let tallest = records.iter().map(|r| r.target).fold(0.0_f64, f64::max);
    let max_target = if tallest > 0.0 { tallest } else { 1.0 };

    let groups = records
        .iter()
        .enumerate()
        .map(|(index, record)| bar_group(record, max_target, index))
        .collect();

    ChartLayout {
        mode,
        geometry: mode.geometry(),
        max_target,
        groups,
    }
}

fn bar_group(record: &PerfRecord, max_target: f64, index: usize) -> BarGroup {
    let percentage = record.percentage();
    BarGroup {
        name: record.name.clone(),
        bucket: record.bucket(),
        color: record.color.clone(),
        target: record.target,
        achieved: record.achieved,
        percentage,
        percentage_label: format::format_percent(percentage),
        target_display: format::format_inr(record.target),
        achieved_display: format::format_inr(record.achieved),
        target_height_pct: scaled_height(record.target, max_target),
        achieved_height_pct: scaled_height(record.achieved, max_target),
        delay_ms: index as u64 * GROUP_DELAY_STEP_MS,
    }
}

fn scaled_height(value: f64, max_target: f64) -> f64 {
    (value / max_target * 100.0).max(MIN_BAR_HEIGHT_PCT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, target: f64, achieved: f64) -> PerfRecord {
        PerfRecord::new(name, target, achieved, "#10b981")
    }

    #[test]
    fn bars_scale_against_tallest_target() {
        let records = vec![
            record("Tall", 600_000.0, 300_000.0),
            record("Short", 150_000.0, 150_000.0),
        ];
        let layout = build_layout(&records, DisplayMode::Bars);
        assert_eq!(layout.max_target, 600_000.0);
        assert!((layout.groups[0].target_height_pct - 100.0).abs() < 0.001);
        assert!((layout.groups[0].achieved_height_pct - 50.0).abs() < 0.001);
        assert!((layout.groups[1].target_height_pct - 25.0).abs() < 0.001);
    }

    #[test]
    fn zero_bars_keep_minimum_height() {
        let records = vec![record("Fresh", 500_000.0, 0.0)];
        let layout = build_layout(&records, DisplayMode::Bars);
        assert_eq!(layout.groups[0].achieved_height_pct, 2.0);
    }

    #[test]
    fn empty_input_yields_valid_empty_layout() {
        let layout = build_layout(&[], DisplayMode::Stacked);
        assert!(layout.is_empty());
        assert_eq!(layout.max_target, 1.0);
        assert!(layout.geometry.stacked);
    }

    #[test]
    fn all_zero_targets_default_the_scale() {
        let records = vec![record("Ghost", 0.0, 0.0)];
        let layout = build_layout(&records, DisplayMode::Bars);
        assert_eq!(layout.max_target, 1.0);
        assert_eq!(layout.groups[0].target_height_pct, 2.0);
    }

    #[test]
    fn mode_changes_geometry_not_numbers() {
        let records = vec![record("A", 600_000.0, 520_000.0)];
        let bars = build_layout(&records, DisplayMode::Bars);
        let comparison = build_layout(&records, DisplayMode::Comparison);

        assert_eq!(bars.groups, comparison.groups);
        assert_ne!(bars.geometry, comparison.geometry);
        assert_eq!(comparison.geometry.group_width_px, 120);
        assert_eq!(comparison.geometry.bar_width, "40%");
    }

    #[test]
    fn render_is_idempotent_for_identical_state() {
        let records = vec![
            record("A", 600_000.0, 520_000.0),
            record("B", 500_000.0, 450_000.0),
        ];
        let first = build_layout(&records, DisplayMode::Bars);
        let second = build_layout(&records, DisplayMode::Bars);
        assert_eq!(first, second);
    }

    #[test]
    fn groups_carry_formatted_labels_and_stagger() {
        let records = vec![
            record("A", 600_000.0, 520_000.0),
            record("B", 500_000.0, 450_000.0),
        ];
        let layout = build_layout(&records, DisplayMode::Bars);
        assert_eq!(layout.groups[0].target_display, "₹6,00,000");
        assert_eq!(layout.groups[0].percentage_label, "86.7%");
        assert_eq!(layout.groups[0].delay_ms, 0);
        assert_eq!(layout.groups[1].delay_ms, 50);
    }
}
