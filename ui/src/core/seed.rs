//! Reporting periods and the sample datasets served for each of them.
//!
//! There is no backend; the period driver swaps complete record lists in and
//! out. Each period function returns freshly owned vectors so a swap never
//! aliases a previously rendered list.

use super::record::PerfRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportingPeriod {
    #[default]
    Q1Fy2026,
    Q2Fy2026,
    January2026,
    February2026,
}

impl ReportingPeriod {
    pub const ALL: [ReportingPeriod; 4] = [
        ReportingPeriod::Q1Fy2026,
        ReportingPeriod::Q2Fy2026,
        ReportingPeriod::January2026,
        ReportingPeriod::February2026,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportingPeriod::Q1Fy2026 => "Q1 2026",
            ReportingPeriod::Q2Fy2026 => "Q2 2026",
            ReportingPeriod::January2026 => "January 2026",
            ReportingPeriod::February2026 => "February 2026",
        }
    }

    /// Maps a selector value back to a period. Unknown labels fall back to
    /// the default quarter rather than erroring.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|period| period.label() == label)
            .unwrap_or_default()
    }
}

/// Per-category record lists for one reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodDataset {
    pub clients: Vec<PerfRecord>,
    pub products: Vec<PerfRecord>,
    pub months: Vec<PerfRecord>,
}

pub fn dataset_for(period: ReportingPeriod) -> PeriodDataset {
    match period {
        ReportingPeriod::Q2Fy2026 => q2_dataset(),
        ReportingPeriod::January2026 => january_dataset(),
        // February has no dedicated sample yet; serve the quarter defaults.
        ReportingPeriod::Q1Fy2026 | ReportingPeriod::February2026 => q1_dataset(),
    }
}

fn q1_dataset() -> PeriodDataset {
    PeriodDataset {
        clients: vec![
            PerfRecord::new("Star Brands Ltd", 600_000.0, 520_000.0, "#10b981"),
            PerfRecord::new("MediaCorp India", 500_000.0, 450_000.0, "#3b82f6"),
            PerfRecord::new("Premier Foods", 450_000.0, 380_000.0, "#8b5cf6"),
            PerfRecord::new("AutoMax Group", 350_000.0, 310_000.0, "#f59e0b"),
            PerfRecord::new("HealthFirst Pharma", 300_000.0, 220_000.0, "#ef4444"),
        ],
        products: vec![
            PerfRecord::new("FCT", 1_200_000.0, 950_000.0, "#3b82f6"),
            PerfRecord::new("Sponsorship", 800_000.0, 625_000.0, "#8b5cf6"),
            PerfRecord::new("LBAN", 500_000.0, 300_000.0, "#10b981"),
        ],
        months: vec![
            PerfRecord::new("January", 850_000.0, 675_000.0, "#3b82f6"),
            PerfRecord::new("February", 900_000.0, 792_000.0, "#10b981"),
            PerfRecord::new("March", 750_000.0, 613_000.0, "#8b5cf6"),
        ],
    }
}

fn q2_dataset() -> PeriodDataset {
    PeriodDataset {
        clients: vec![
            PerfRecord::new("Star Brands Ltd", 650_000.0, 0.0, "#10b981"),
            PerfRecord::new("MediaCorp India", 550_000.0, 0.0, "#3b82f6"),
            PerfRecord::new("Premier Foods", 500_000.0, 0.0, "#8b5cf6"),
            PerfRecord::new("AutoMax Group", 400_000.0, 0.0, "#f59e0b"),
            PerfRecord::new("HealthFirst Pharma", 350_000.0, 0.0, "#ef4444"),
        ],
        products: vec![
            PerfRecord::new("FCT", 1_300_000.0, 0.0, "#3b82f6"),
            PerfRecord::new("Sponsorship", 900_000.0, 0.0, "#8b5cf6"),
            PerfRecord::new("LBAN", 600_000.0, 0.0, "#10b981"),
        ],
        months: vec![
            PerfRecord::new("April", 900_000.0, 0.0, "#3b82f6"),
            PerfRecord::new("May", 950_000.0, 0.0, "#10b981"),
            PerfRecord::new("June", 950_000.0, 0.0, "#8b5cf6"),
        ],
    }
}

fn january_dataset() -> PeriodDataset {
    PeriodDataset {
        clients: vec![
            PerfRecord::new("Star Brands Ltd", 200_000.0, 175_000.0, "#10b981"),
            PerfRecord::new("MediaCorp India", 180_000.0, 162_000.0, "#3b82f6"),
            PerfRecord::new("Premier Foods", 150_000.0, 120_000.0, "#8b5cf6"),
            PerfRecord::new("AutoMax Group", 120_000.0, 108_000.0, "#f59e0b"),
            PerfRecord::new("HealthFirst Pharma", 100_000.0, 70_000.0, "#ef4444"),
        ],
        products: vec![
            PerfRecord::new("FCT", 400_000.0, 320_000.0, "#3b82f6"),
            PerfRecord::new("Sponsorship", 300_000.0, 225_000.0, "#8b5cf6"),
            PerfRecord::new("LBAN", 200_000.0, 120_000.0, "#10b981"),
        ],
        months: vec![PerfRecord::new("January", 850_000.0, 675_000.0, "#3b82f6")],
    }
}
