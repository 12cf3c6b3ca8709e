//! Portfolio performance scoring: completion, delivery timing, and progress.

use std::collections::HashMap;

use taskflow_core::{Project, WorkStatus};
use tracing::debug;

use crate::insight;
use crate::progress::ProgressCalculator;
use crate::report::{
    DeliveryRecord, MetricScore, PerformanceReport, PortfolioStatistics, ProgressReport,
};
use crate::weights::{
    status_weight, DeliveryTiming, Grade, COMPLETION_METRIC_WEIGHT, ON_TIME_GRACE_DAYS,
    PROGRESS_METRIC_WEIGHT, SEVERE_DELAY_PERCENT, TIME_METRIC_WEIGHT,
};

/// Performance calculator over a portfolio of project snapshots.
///
/// Like the progress calculator it is pure and infallible: every empty or
/// malformed input degrades to a zero score with an annotation.
pub struct PerformanceCalculator {
    progress: ProgressCalculator,
}

impl PerformanceCalculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self {
            progress: ProgressCalculator,
        }
    }

    /// Status-weighted completion score over all projects, floored at zero.
    ///
    /// Cancelled projects carry negative weight, so a cancellation-heavy
    /// portfolio can drive the raw ratio below zero; a negative percentage is
    /// meaningless to report, hence the floor.
    pub fn completion_score(&self, projects: &[Project]) -> MetricScore {
        if projects.is_empty() {
            return MetricScore::new(0.0, COMPLETION_METRIC_WEIGHT)
                .with_note("no projects to score");
        }

        let raw: f64 = projects.iter().map(|p| status_weight(p.status)).sum();
        let max_possible = projects.len() as f64;
        let score = (raw / max_possible * 100.0).max(0.0);
        MetricScore::new(score, COMPLETION_METRIC_WEIGHT)
    }

    /// Classify one project's delivery timing.
    ///
    /// Returns `None` unless the project is completed with a recorded
    /// completion date. Durations are measured in whole days; a delivery
    /// within the grace period counts as on-time, and a delay above
    /// [`SEVERE_DELAY_PERCENT`] of the planned duration is severely late.
    pub fn delivery_record(&self, project: &Project) -> Option<DeliveryRecord> {
        if !project.is_delivered() {
            return None;
        }
        let completed_at = project.completed_at?;

        let planned_days = (project.planned_end - project.started_at).num_days();
        let days_late = (completed_at - project.planned_end).num_days();
        let delay_percent = if planned_days > 0 {
            days_late as f64 / planned_days as f64 * 100.0
        } else {
            0.0
        };

        let timing = if days_late < 0 {
            DeliveryTiming::Early
        } else if days_late <= ON_TIME_GRACE_DAYS {
            DeliveryTiming::OnTime
        } else if delay_percent <= SEVERE_DELAY_PERCENT {
            DeliveryTiming::Late
        } else {
            DeliveryTiming::SeverelyLate
        };

        Some(DeliveryRecord {
            project_id: project.id,
            project_name: project.name.clone(),
            planned_days,
            days_late,
            delay_percent,
            timing,
            contribution: 100.0 * timing.multiplier(),
        })
    }

    /// Time-management score over completed projects, capped at 100.
    ///
    /// Early deliveries earn a bonus multiplier, so an all-early portfolio
    /// would otherwise exceed 100; the cap keeps the metric comparable with
    /// the other two. Projects without a completion date stay out of the
    /// denominator entirely.
    pub fn time_score(&self, projects: &[Project]) -> (MetricScore, Vec<DeliveryRecord>) {
        let deliveries: Vec<DeliveryRecord> = projects
            .iter()
            .filter_map(|p| self.delivery_record(p))
            .collect();

        if deliveries.is_empty() {
            let metric = MetricScore::new(0.0, TIME_METRIC_WEIGHT)
                .with_note("no completed projects to evaluate");
            return (metric, deliveries);
        }

        let total: f64 = deliveries.iter().map(|d| d.contribution).sum();
        let score = (total / deliveries.len() as f64).min(100.0);
        (MetricScore::new(score, TIME_METRIC_WEIGHT), deliveries)
    }

    /// Mean project progress across the portfolio.
    pub fn progress_score(&self, reports: &[ProgressReport]) -> MetricScore {
        if reports.is_empty() {
            return MetricScore::new(0.0, PROGRESS_METRIC_WEIGHT)
                .with_note("no projects to score");
        }
        let total: f64 = reports.iter().map(|r| r.progress_percentage).sum();
        MetricScore::new(total / reports.len() as f64, PROGRESS_METRIC_WEIGHT)
    }

    /// Evaluate the whole portfolio into a performance report.
    ///
    /// An empty portfolio yields the sentinel report (score 0.0, grade N/A)
    /// instead of an error.
    pub fn evaluate(&self, projects: &[Project]) -> PerformanceReport {
        if projects.is_empty() {
            return PerformanceReport {
                overall_score: 0.0,
                grade: Grade::NotAvailable,
                total_projects: 0,
                completion: self.completion_score(&[]),
                time: self.time_score(&[]).0,
                progress: self.progress_score(&[]),
                deliveries: Vec::new(),
                statistics: PortfolioStatistics::default(),
                insights: vec!["No projects found to evaluate.".to_string()],
                recommendations: Vec::new(),
            };
        }

        let progress_reports: Vec<ProgressReport> = projects
            .iter()
            .map(|p| self.progress.project_report(p))
            .collect();

        let completion = self.completion_score(projects);
        let (time, deliveries) = self.time_score(projects);
        let progress = self.progress_score(&progress_reports);

        let overall_score = round2(completion.weighted + time.weighted + progress.weighted);
        let grade = Grade::from_score(overall_score);

        let statistics = portfolio_statistics(projects, &deliveries, progress.score);

        debug!(
            projects = projects.len(),
            overall = overall_score,
            grade = %grade,
            "evaluated portfolio performance"
        );

        let insights = insight::performance_insights(&completion, &time, &progress, &statistics);
        let recommendations =
            insight::performance_recommendations(&completion, &time, &progress, &statistics);

        PerformanceReport {
            overall_score,
            grade,
            total_projects: projects.len(),
            completion,
            time,
            progress,
            deliveries,
            statistics,
            insights,
            recommendations,
        }
    }
}

impl Default for PerformanceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn portfolio_statistics(
    projects: &[Project],
    deliveries: &[DeliveryRecord],
    average_progress: f64,
) -> PortfolioStatistics {
    let mut by_status: HashMap<WorkStatus, usize> =
        WorkStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for project in projects {
        *by_status.entry(project.status).or_insert(0) += 1;
    }

    PortfolioStatistics {
        total_projects: projects.len(),
        by_status,
        delivered_projects: deliveries.len(),
        average_progress,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use taskflow_core::{Phase, Priority, Task, Time};

    fn base_time() -> Time {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn project_with_status(status: WorkStatus) -> Project {
        let start = base_time();
        let mut project = Project::new("P", start, start + Duration::days(30));
        project.status = status;
        project
    }

    fn delivered_project(planned_days: i64, days_late: i64) -> Project {
        let start = base_time();
        let planned_end = start + Duration::days(planned_days);
        let mut project = Project::new("P", start, planned_end);
        project.status = WorkStatus::Completed;
        project.completed_at = Some(planned_end + Duration::days(days_late));
        project
    }

    #[test]
    fn test_completion_score_mixed_portfolio() {
        // 5 completed + 2 ongoing + 1 delayed + 1 cancelled
        // = (5.0 + 1.2 + 0.3 - 0.5) / 9 = 66.67 (within float error).
        let calc = PerformanceCalculator::new();
        let mut projects = Vec::new();
        for _ in 0..5 {
            projects.push(project_with_status(WorkStatus::Completed));
        }
        for _ in 0..2 {
            projects.push(project_with_status(WorkStatus::Ongoing));
        }
        projects.push(project_with_status(WorkStatus::Delayed));
        projects.push(project_with_status(WorkStatus::Cancelled));

        let metric = calc.completion_score(&projects);
        assert!((metric.score - 66.6666).abs() < 0.01);
    }

    #[test]
    fn test_completion_score_floors_at_zero() {
        let calc = PerformanceCalculator::new();
        let projects: Vec<Project> = (0..4)
            .map(|_| project_with_status(WorkStatus::Cancelled))
            .collect();

        let metric = calc.completion_score(&projects);
        assert_eq!(metric.score, 0.0);
    }

    #[test]
    fn test_completion_score_empty_is_annotated() {
        let calc = PerformanceCalculator::new();
        let metric = calc.completion_score(&[]);
        assert_eq!(metric.score, 0.0);
        assert!(metric.note.is_some());
    }

    #[test]
    fn test_delivery_classification_early() {
        let calc = PerformanceCalculator::new();
        let record = calc.delivery_record(&delivered_project(30, -3)).unwrap();
        assert_eq!(record.timing, DeliveryTiming::Early);
        assert_eq!(record.contribution, 130.0);
        assert_eq!(record.days_late, -3);
    }

    #[test]
    fn test_delivery_classification_grace_period() {
        let calc = PerformanceCalculator::new();
        let on_time = calc.delivery_record(&delivered_project(30, 0)).unwrap();
        assert_eq!(on_time.timing, DeliveryTiming::OnTime);

        let edge = calc.delivery_record(&delivered_project(30, 2)).unwrap();
        assert_eq!(edge.timing, DeliveryTiming::OnTime);

        let past = calc.delivery_record(&delivered_project(100, 3)).unwrap();
        assert_eq!(past.timing, DeliveryTiming::Late);
    }

    #[test]
    fn test_delivery_classification_severely_late() {
        // 10 days late on a 30-day plan = 33% delay.
        let calc = PerformanceCalculator::new();
        let record = calc.delivery_record(&delivered_project(30, 10)).unwrap();
        assert_eq!(record.timing, DeliveryTiming::SeverelyLate);
        assert_eq!(record.contribution, 40.0);
        assert!((record.delay_percent - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_delivery_record_requires_completion() {
        let calc = PerformanceCalculator::new();
        assert!(calc
            .delivery_record(&project_with_status(WorkStatus::Ongoing))
            .is_none());

        // Completed status without a completion date does not qualify.
        let mut project = project_with_status(WorkStatus::Completed);
        project.completed_at = None;
        assert!(calc.delivery_record(&project).is_none());
    }

    #[test]
    fn test_time_score_capped_at_100() {
        // Multipliers 1.3, 1.0, 0.7 average to exactly 100.
        let calc = PerformanceCalculator::new();
        let projects = vec![
            delivered_project(30, -5),
            delivered_project(30, 1),
            delivered_project(100, 5),
        ];
        let (metric, deliveries) = calc.time_score(&projects);
        assert_eq!(metric.score, 100.0);
        assert_eq!(deliveries.len(), 3);

        // All early would exceed 100 without the cap.
        let projects: Vec<Project> = (0..3).map(|_| delivered_project(30, -5)).collect();
        let (metric, _) = calc.time_score(&projects);
        assert_eq!(metric.score, 100.0);
    }

    #[test]
    fn test_time_score_no_completed_projects() {
        let calc = PerformanceCalculator::new();
        let projects = vec![
            project_with_status(WorkStatus::Ongoing),
            project_with_status(WorkStatus::Pending),
        ];
        let (metric, deliveries) = calc.time_score(&projects);
        assert_eq!(metric.score, 0.0);
        assert!(metric.note.as_deref().unwrap().contains("no completed"));
        assert!(deliveries.is_empty());
    }

    #[test]
    fn test_evaluate_empty_portfolio_sentinel() {
        let calc = PerformanceCalculator::new();
        let report = calc.evaluate(&[]);
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.grade, Grade::NotAvailable);
        assert_eq!(report.total_projects, 0);
        assert!(report.insights.iter().any(|i| i.contains("No projects")));
    }

    #[test]
    fn test_evaluate_perfect_portfolio() {
        let mut project = delivered_project(30, 0);
        let mut phase = Phase::new("Only");
        let mut task = Task::new("Done", Priority::Medium);
        task.status = WorkStatus::Completed;
        phase.tasks.push(task);
        project.phases.push(phase);

        let calc = PerformanceCalculator::new();
        let report = calc.evaluate(&[project]);

        // completion 100, time 100, progress 100 -> 35 + 30 + 35.
        assert_eq!(report.overall_score, 100.0);
        assert_eq!(report.grade, Grade::APlus);
        assert_eq!(report.statistics.delivered_projects, 1);
    }

    #[test]
    fn test_evaluate_rounds_to_two_decimals() {
        let calc = PerformanceCalculator::new();
        let projects = vec![
            project_with_status(WorkStatus::Ongoing),
            project_with_status(WorkStatus::Delayed),
            project_with_status(WorkStatus::Pending),
        ];
        let report = calc.evaluate(&projects);
        let scaled = report.overall_score * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let calc = PerformanceCalculator::new();
        let projects = vec![
            delivered_project(30, 1),
            project_with_status(WorkStatus::Ongoing),
            project_with_status(WorkStatus::Cancelled),
        ];

        let first = calc.evaluate(&projects);
        let second = calc.evaluate(&projects);
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.grade, second.grade);
        assert_eq!(first.insights, second.insights);
        assert_eq!(first.recommendations, second.recommendations);
    }
}
