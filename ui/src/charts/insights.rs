//! Derived summary facts for the side panels and summary cards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::core::format;
use crate::core::record::PerfRecord;

/// Canonical calendar ordering for month labels. Trend comparisons use this
/// table, never the active sort order.
static MONTH_ORDER: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]
    .into_iter()
    .enumerate()
    .map(|(index, name)| (name, index))
    .collect()
});

/// Visual tone for an insight row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Performer {
    pub name: String,
    pub percentage: f64,
}

/// Aggregates over the visible record list. `NoData` is the designed
/// fallback for an empty list, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Insights {
    NoData,
    Ready {
        top: Performer,
        lowest: Performer,
        average: f64,
        count: usize,
    },
}

pub fn summarize(records: &[PerfRecord]) -> Insights {
    let Some(first) = records.first() else {
        return Insights::NoData;
    };

    let mut top = Performer {
        name: first.name.clone(),
        percentage: first.percentage(),
    };
    let mut lowest = top.clone();
    let mut sum = 0.0;

    for record in records {
        let percentage = record.percentage();
        sum += percentage;
        // Strict comparisons keep the first record of a tied group.
        if percentage > top.percentage {
            top = Performer {
                name: record.name.clone(),
                percentage,
            };
        }
        if percentage < lowest.percentage {
            lowest = Performer {
                name: record.name.clone(),
                percentage,
            };
        }
    }

    Insights::Ready {
        top,
        lowest,
        average: sum / records.len() as f64,
        count: records.len(),
    }
}

/// Summed target and achieved values with the blended percentage shown in
/// the chart header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTotals {
    pub target: f64,
    pub achieved: f64,
    pub percentage: f64,
}

impl ChartTotals {
    /// Stat-value modifier for the overall percentage readout.
    pub fn tone_class(&self) -> &'static str {
        if self.percentage >= 85.0 {
            "highlight"
        } else if self.percentage >= 70.0 {
            "warning"
        } else {
            "danger"
        }
    }
}

pub fn compute_totals(records: &[PerfRecord]) -> ChartTotals {
    let target: f64 = records.iter().map(|r| r.target).sum();
    let achieved: f64 = records.iter().map(|r| r.achieved).sum();
    let percentage = if target > 0.0 {
        achieved / target * 100.0
    } else {
        0.0
    };
    ChartTotals {
        target,
        achieved,
        percentage,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Growing,
    Declining,
    Stable,
}

/// First-to-last movement across the canonical month order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    pub from: String,
    pub to: String,
    pub delta: f64,
    pub direction: TrendDirection,
}

/// Anything that would print as 0.0% at one decimal counts as stable.
const STABLE_DELTA: f64 = 0.05;

/// Computes the period trend from month records. Returns `None` with fewer
/// than two months present. Ordering comes from the calendar table, so an
/// active display sort never changes the answer.
pub fn month_trend(records: &[PerfRecord]) -> Option<Trend> {
    let mut ordered: Vec<&PerfRecord> = records
        .iter()
        .filter(|record| MONTH_ORDER.contains_key(record.name.as_str()))
        .collect();
    if ordered.len() < 2 {
        return None;
    }
    ordered.sort_by_key(|record| MONTH_ORDER[record.name.as_str()]);

    let first = ordered.first()?;
    let last = ordered.last()?;
    let delta = last.percentage() - first.percentage();
    let direction = if delta >= STABLE_DELTA {
        TrendDirection::Growing
    } else if delta <= -STABLE_DELTA {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    Some(Trend {
        from: first.name.clone(),
        to: last.name.clone(),
        delta,
        direction,
    })
}

/// One line in an insight side panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightRow {
    pub title: String,
    pub text: String,
    pub tone: Tone,
}

fn no_data_row(noun: &str) -> Vec<InsightRow> {
    vec![InsightRow {
        title: "No Data".into(),
        text: format!("No {noun} match the current filter"),
        tone: Tone::Neutral,
    }]
}

/// Client panel: top performer, needs-attention, and the average line.
pub fn client_rows(insights: &Insights) -> Vec<InsightRow> {
    let Insights::Ready {
        top,
        lowest,
        average,
        count,
    } = insights
    else {
        return no_data_row("clients");
    };

    vec![
        InsightRow {
            title: "Top Performer".into(),
            text: format!(
                "{} is leading with {} achievement",
                top.name,
                format::format_percent(top.percentage)
            ),
            tone: Tone::Success,
        },
        InsightRow {
            title: "Needs Attention".into(),
            text: format!(
                "{} needs focus ({})",
                lowest.name,
                format::format_percent(lowest.percentage)
            ),
            tone: if lowest.percentage < 70.0 {
                Tone::Warning
            } else {
                Tone::Neutral
            },
        },
        InsightRow {
            title: if *count > 1 { "Average" } else { "Performance" }.into(),
            text: if *count > 1 {
                format!("Average achievement: {}", format::format_percent(*average))
            } else {
                format::format_percent(*average)
            },
            tone: Tone::Neutral,
        },
    ]
}

/// Product panel: one line per product, toned by its own percentage.
pub fn product_rows(records: &[PerfRecord]) -> Vec<InsightRow> {
    if records.is_empty() {
        return no_data_row("products");
    }

    records
        .iter()
        .map(|record| {
            let percentage = record.percentage();
            InsightRow {
                title: record.name.clone(),
                text: format!(
                    "{} achievement ({} of {})",
                    format::format_percent(percentage),
                    format::format_inr(record.achieved),
                    format::format_inr(record.target)
                ),
                tone: if percentage >= 80.0 {
                    Tone::Success
                } else if percentage >= 70.0 {
                    Tone::Warning
                } else {
                    Tone::Danger
                },
            }
        })
        .collect()
}

/// Month panel: the computed trend plus the best month.
pub fn month_rows(records: &[PerfRecord]) -> Vec<InsightRow> {
    if records.is_empty() {
        return no_data_row("months");
    }

    let trend_row = match month_trend(records) {
        Some(trend) => {
            let (word, tone) = match trend.direction {
                TrendDirection::Growing => ("Growing", Tone::Success),
                TrendDirection::Declining => ("Declining", Tone::Danger),
                TrendDirection::Stable => ("Stable", Tone::Neutral),
            };
            InsightRow {
                title: "Growth Trend".into(),
                text: format!(
                    "{} {} ({} → {})",
                    word,
                    format::format_delta(trend.delta),
                    trend.from,
                    trend.to
                ),
                tone,
            }
        }
        None => InsightRow {
            title: "Growth Trend".into(),
            text: "Single month data".into(),
            tone: Tone::Neutral,
        },
    };

    let mut best = &records[0];
    for record in records {
        if record.percentage() > best.percentage() {
            best = record;
        }
    }

    let best_row = if records.len() > 1 {
        InsightRow {
            title: "Best Month".into(),
            text: format!("{} showed highest achievement", best.name),
            tone: Tone::Success,
        }
    } else {
        InsightRow {
            title: "Best Month".into(),
            text: format!(
                "{}: {}",
                best.name,
                format::format_percent(best.percentage())
            ),
            tone: Tone::Success,
        }
    };

    vec![trend_row, best_row]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, target: f64, achieved: f64) -> PerfRecord {
        PerfRecord::new(name, target, achieved, "#8b5cf6")
    }

    fn q1_months() -> Vec<PerfRecord> {
        vec![
            record("January", 850_000.0, 675_000.0),  // 79.4%
            record("February", 900_000.0, 792_000.0), // 88.0%
            record("March", 750_000.0, 613_000.0),    // 81.7%
        ]
    }

    #[test]
    fn summarize_reports_extremes_and_mean() {
        let records = vec![
            record("A", 600_000.0, 520_000.0), // 86.67%
            record("B", 500_000.0, 450_000.0), // 90.0%
            record("C", 300_000.0, 220_000.0), // 73.33%
        ];
        let Insights::Ready {
            top,
            lowest,
            average,
            count,
        } = summarize(&records)
        else {
            panic!("expected data");
        };

        assert_eq!(top.name, "B");
        assert_eq!(lowest.name, "C");
        assert_eq!(count, 3);
        assert!((average - 83.333).abs() < 0.01);
    }

    #[test]
    fn summarize_breaks_ties_by_first_in_order() {
        let records = vec![
            record("First", 100_000.0, 80_000.0),
            record("Second", 200_000.0, 160_000.0),
        ];
        let Insights::Ready { top, lowest, .. } = summarize(&records) else {
            panic!("expected data");
        };
        assert_eq!(top.name, "First");
        assert_eq!(lowest.name, "First");
    }

    #[test]
    fn empty_list_is_the_sentinel_not_a_failure() {
        assert_eq!(summarize(&[]), Insights::NoData);
        assert_eq!(client_rows(&Insights::NoData)[0].title, "No Data");
    }

    #[test]
    fn totals_blend_and_survive_zero_target() {
        let totals = compute_totals(&[
            record("A", 600_000.0, 520_000.0),
            record("B", 400_000.0, 330_000.0),
        ]);
        assert_eq!(totals.target, 1_000_000.0);
        assert_eq!(totals.achieved, 850_000.0);
        assert!((totals.percentage - 85.0).abs() < 0.001);
        assert_eq!(totals.tone_class(), "highlight");

        let empty = compute_totals(&[]);
        assert_eq!(empty.percentage, 0.0);
        assert_eq!(empty.tone_class(), "danger");
    }

    #[test]
    fn trend_uses_calendar_order_not_sort_order() {
        // Shuffle the display order; the trend must still run January → March.
        let mut months = q1_months();
        months.swap(0, 2);

        let trend = month_trend(&months).expect("three months present");
        assert_eq!(trend.from, "January");
        assert_eq!(trend.to, "March");
        assert!((trend.delta - 2.32).abs() < 0.01);
        assert_eq!(trend.direction, TrendDirection::Growing);
        assert_eq!(format::format_delta(trend.delta), "+2.3%");
    }

    #[test]
    fn single_month_has_no_trend() {
        let months = vec![record("January", 850_000.0, 675_000.0)];
        assert!(month_trend(&months).is_none());
        let rows = month_rows(&months);
        assert_eq!(rows[0].text, "Single month data");
        assert!(rows[1].text.starts_with("January:"));
    }

    #[test]
    fn near_flat_delta_reads_stable() {
        let months = vec![
            record("January", 100_000.0, 80_000.0),
            record("February", 100_000.0, 80_020.0),
        ];
        let trend = month_trend(&months).expect("two months");
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn product_rows_tone_by_own_percentage() {
        let rows = product_rows(&[
            record("FCT", 1_200_000.0, 950_000.0),     // 79.2% → warning
            record("Sponsorship", 800_000.0, 680_000.0), // 85.0% → success
            record("LBAN", 500_000.0, 300_000.0),      // 60.0% → danger
        ]);
        assert_eq!(rows[0].tone, Tone::Warning);
        assert_eq!(rows[1].tone, Tone::Success);
        assert_eq!(rows[2].tone, Tone::Danger);
        assert!(rows[2].text.contains("₹3,00,000 of ₹5,00,000"));
    }
}
