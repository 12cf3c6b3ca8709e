//! Report structures produced by the scoring engine.
//!
//! Reports are derived snapshots: they carry no persisted identity and are
//! serialized as-is for the CLI's `--json` output.

use serde::Serialize;
use std::collections::HashMap;
use taskflow_core::{PhaseId, Priority, ProjectId, WorkStatus};

use crate::weights::{DeliveryTiming, Grade};

/// Count and share of tasks (or projects) in one bucket of a breakdown.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BreakdownEntry {
    /// Number of items in this bucket
    pub count: usize,

    /// Share of the total, 0-100
    pub percentage: f64,
}

/// A single task's weighted contribution to phase progress.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TaskContribution {
    /// Priority weight
    pub weight: f64,

    /// Status completion percentage
    pub completion: f64,

    /// `weight * completion`
    pub contribution: f64,
}

/// Progress of a single phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseReport {
    /// Phase identifier
    pub phase_id: PhaseId,

    /// Phase name
    pub name: String,

    /// Number of tasks in the phase
    pub task_count: usize,

    /// Completed tasks
    pub completed_tasks: usize,

    /// Cancelled tasks
    pub cancelled_tasks: usize,

    /// Priority-weighted progress, 0-100
    pub weighted_progress: f64,

    /// Completed over non-cancelled tasks, 0-100
    pub simple_progress: f64,

    /// Task counts and percentages per status
    pub status_breakdown: HashMap<WorkStatus, BreakdownEntry>,

    /// Task counts and percentages per priority
    pub priority_breakdown: HashMap<Priority, BreakdownEntry>,
}

/// Progress of a whole project, aggregated over its phases.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    /// Project identifier
    pub project_id: ProjectId,

    /// Project name
    pub project_name: String,

    /// Task-count-weighted progress across phases, 0-100
    pub progress_percentage: f64,

    /// Completed over non-cancelled tasks across the project, 0-100
    pub simple_progress_percentage: f64,

    /// Number of phases
    pub total_phases: usize,

    /// Number of tasks across all phases
    pub total_tasks: usize,

    /// Task counts and percentages per status
    pub status_breakdown: HashMap<WorkStatus, BreakdownEntry>,

    /// Task counts and percentages per priority
    pub priority_breakdown: HashMap<Priority, BreakdownEntry>,

    /// Per-phase progress
    pub phases: Vec<PhaseReport>,

    /// Human-readable observations
    pub insights: Vec<String>,
}

/// Delivery timing of one completed project.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryRecord {
    /// Project identifier
    pub project_id: ProjectId,

    /// Project name
    pub project_name: String,

    /// Planned duration in whole days
    pub planned_days: i64,

    /// Days past the planned end (negative when early)
    pub days_late: i64,

    /// Delay as a percentage of the planned duration
    pub delay_percent: f64,

    /// Timing classification
    pub timing: DeliveryTiming,

    /// Contribution to the time-management score (`100 * multiplier`)
    pub contribution: f64,
}

/// One metric of the performance score.
#[derive(Debug, Clone, Serialize)]
pub struct MetricScore {
    /// Raw metric score, 0-100
    pub score: f64,

    /// Weight of this metric in the overall score
    pub weight: f64,

    /// `score * weight`
    pub weighted: f64,

    /// Data-shape annotation, e.g. when no projects qualified
    pub note: Option<String>,
}

impl MetricScore {
    /// Build a metric from a raw score and its weight.
    pub fn new(score: f64, weight: f64) -> Self {
        Self {
            score,
            weight,
            weighted: score * weight,
            note: None,
        }
    }

    /// Attach a data-shape note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Portfolio-level counts backing the performance report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioStatistics {
    /// Total projects evaluated
    pub total_projects: usize,

    /// Projects per status
    pub by_status: HashMap<WorkStatus, usize>,

    /// Completed projects with a recorded completion date
    pub delivered_projects: usize,

    /// Mean project progress percentage
    pub average_progress: f64,
}

/// Overall performance report for a project portfolio.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    /// Weighted combination of the three metrics, 0-100, 2 decimals
    pub overall_score: f64,

    /// Letter grade for the overall score
    pub grade: Grade,

    /// Total projects evaluated
    pub total_projects: usize,

    /// Completion metric (status-weighted portfolio outcome)
    pub completion: MetricScore,

    /// Time-management metric (delivery timing of completed projects)
    pub time: MetricScore,

    /// Progress metric (mean project progress)
    pub progress: MetricScore,

    /// Per-project delivery classifications
    pub deliveries: Vec<DeliveryRecord>,

    /// Portfolio counts
    pub statistics: PortfolioStatistics,

    /// Human-readable observations
    pub insights: Vec<String>,

    /// Suggested follow-ups
    pub recommendations: Vec<String>,
}
