//! Pure sort and filter stages of the chart pipeline.
//!
//! Composition order is fixed: sort first, then filter. Filters are
//! threshold predicates so membership doesn't depend on order, but any
//! "first of a tied group" visual does, and sorting first keeps that
//! deterministic.

use serde::Serialize;

use crate::core::record::{categorize, Bucket, PerfRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    #[default]
    Achievement,
    Target,
    Achieved,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Achievement,
        SortKey::Name,
        SortKey::Target,
        SortKey::Achieved,
    ];

    pub fn value(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Achievement => "achievement",
            SortKey::Target => "target",
            SortKey::Achieved => "achieved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Achievement => "Achievement %",
            SortKey::Target => "Target Value",
            SortKey::Achieved => "Achieved Value",
        }
    }

    /// Selector values come from trusted markup; anything unrecognised keeps
    /// the current default rather than rejecting the change.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterBucket {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl FilterBucket {
    pub const ALL: [FilterBucket; 4] = [
        FilterBucket::All,
        FilterBucket::High,
        FilterBucket::Medium,
        FilterBucket::Low,
    ];

    pub fn value(self) -> &'static str {
        match self {
            FilterBucket::All => "all",
            FilterBucket::High => "high",
            FilterBucket::Medium => "medium",
            FilterBucket::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterBucket::All => "Show All",
            FilterBucket::High => "High (>85%)",
            FilterBucket::Medium => "Medium (70-85%)",
            FilterBucket::Low => "Low (<70%)",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.value() == value)
            .unwrap_or_default()
    }

    /// Live-recomputed membership test. The record's percentage is the
    /// source of truth, never a stored tier tag.
    pub fn admits(self, record: &PerfRecord) -> bool {
        match self {
            FilterBucket::All => true,
            FilterBucket::High => categorize(record.percentage()) == Bucket::High,
            FilterBucket::Medium => categorize(record.percentage()) == Bucket::Medium,
            FilterBucket::Low => categorize(record.percentage()) == Bucket::Low,
        }
    }
}

/// Returns a new ordering of `records`; the input is never mutated. All
/// sorts are stable so ties keep their original relative order.
pub fn sort_records(records: &[PerfRecord], key: SortKey) -> Vec<PerfRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Achievement => {
            sorted.sort_by(|a, b| b.percentage().total_cmp(&a.percentage()))
        }
        SortKey::Target => sorted.sort_by(|a, b| b.target.total_cmp(&a.target)),
        SortKey::Achieved => sorted.sort_by(|a, b| b.achieved.total_cmp(&a.achieved)),
    }
    sorted
}

/// Keeps the records the bucket admits, preserving input order. `All` is a
/// pass-through. An empty result is valid; downstream layers decide how to
/// present it.
pub fn filter_records(records: &[PerfRecord], bucket: FilterBucket) -> Vec<PerfRecord> {
    match bucket {
        FilterBucket::All => records.to_vec(),
        _ => records
            .iter()
            .filter(|record| bucket.admits(record))
            .cloned()
            .collect(),
    }
}
