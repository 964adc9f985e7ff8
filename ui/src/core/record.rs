//! The performance record and its achievement tiers.
//!
//! Percentage and tier are never stored; both derive from the current
//! target/achieved pair at the moment of use, so a live bump can never leave
//! a stale classification behind.

use serde::Serialize;

/// Achievement tier. Boundaries are inclusive at the lower edge: exactly
/// 85% is High, exactly 70% is Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    High,
    Medium,
    Low,
}

impl Bucket {
    pub fn css_class(self) -> &'static str {
        match self {
            Bucket::High => "high",
            Bucket::Medium => "medium",
            Bucket::Low => "low",
        }
    }
}

pub fn categorize(percentage: f64) -> Bucket {
    if percentage >= 85.0 {
        Bucket::High
    } else if percentage >= 70.0 {
        Bucket::Medium
    } else {
        Bucket::Low
    }
}

/// One named target/achieved pair, the unit every chart renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfRecord {
    pub name: String,
    pub target: f64,
    pub achieved: f64,
    /// Accent colour carried into the achieved bar.
    pub color: String,
}

impl PerfRecord {
    pub fn new(name: impl Into<String>, target: f64, achieved: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target,
            achieved,
            color: color.into(),
        }
    }

    /// Achievement percentage, computed live. A non-positive target reads as
    /// 0% rather than dividing by zero.
    pub fn percentage(&self) -> f64 {
        if self.target > 0.0 {
            self.achieved / self.target * 100.0
        } else {
            0.0
        }
    }

    pub fn bucket(&self) -> Bucket {
        categorize(self.percentage())
    }

    /// Applies a simulated booking to the achieved value.
    pub fn bump_achieved(&mut self, increment: f64) {
        self.achieved += increment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive_below() {
        assert_eq!(categorize(85.0), Bucket::High);
        assert_eq!(categorize(84.999), Bucket::Medium);
        assert_eq!(categorize(70.0), Bucket::Medium);
        assert_eq!(categorize(69.999), Bucket::Low);
        assert_eq!(categorize(0.0), Bucket::Low);
    }

    #[test]
    fn percentage_survives_zero_target() {
        let record = PerfRecord::new("Fresh", 0.0, 1_000.0, "#3b82f6");
        assert_eq!(record.percentage(), 0.0);
        assert_eq!(record.bucket(), Bucket::Low);
    }

    #[test]
    fn percentage_is_a_plain_ratio() {
        let record = PerfRecord::new("Star Brands Ltd", 600_000.0, 520_000.0, "#10b981");
        assert!((record.percentage() - 86.666).abs() < 0.01);
        assert_eq!(record.bucket(), Bucket::High);
    }

    #[test]
    fn bump_reclassifies_without_any_refresh_step() {
        let mut record = PerfRecord::new("HealthFirst Pharma", 300_000.0, 220_000.0, "#ef4444");
        assert_eq!(record.bucket(), Bucket::Medium);

        record.bump_achieved(50_000.0);
        assert_eq!(record.bucket(), Bucket::High);
        assert!((record.percentage() - 90.0).abs() < 0.001);
    }
}
