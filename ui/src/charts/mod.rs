//! The chart engine: pure transforms, layout construction, aggregation, and
//! the snapshot export. Nothing in here touches the DOM.

pub mod export;
pub mod insights;
pub mod layout;
pub mod transform;

pub use insights::{ChartTotals, InsightRow, Insights, Tone, Trend, TrendDirection};
pub use layout::{BarGroup, ChartLayout, DisplayMode, ViewGeometry};
pub use transform::{FilterBucket, SortKey};
