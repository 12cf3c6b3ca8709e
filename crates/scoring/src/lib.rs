//! Progress & Performance Scoring
//!
//! Hierarchical weighted scoring over project snapshots: priority-weighted
//! phase and project progress, plus a three-metric portfolio performance
//! score (completion, delivery timing, progress) with letter grading.

#![warn(missing_docs)]

pub mod weights;
pub mod report;
pub mod progress;
pub mod performance;

mod insight;

pub use weights::{DeliveryTiming, Grade};
pub use report::{
    BreakdownEntry, DeliveryRecord, MetricScore, PerformanceReport, PhaseReport,
    PortfolioStatistics, ProgressReport, TaskContribution,
};
pub use progress::ProgressCalculator;
pub use performance::PerformanceCalculator;
