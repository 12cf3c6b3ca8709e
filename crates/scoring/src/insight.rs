//! Threshold-driven insight and recommendation strings.
//!
//! The numeric contract lives in `progress` and `performance`; everything
//! here is presentational. Thresholds are fixed, phrasing is not.

use std::collections::HashMap;

use taskflow_core::WorkStatus;

use crate::report::{BreakdownEntry, MetricScore, PhaseReport, PortfolioStatistics};

pub(crate) fn progress_insights(
    progress_percentage: f64,
    total_tasks: usize,
    phases: &[PhaseReport],
    status_breakdown: &HashMap<WorkStatus, BreakdownEntry>,
) -> Vec<String> {
    let mut insights = Vec::new();

    if total_tasks == 0 {
        insights.push("No phases or tasks found for this project.".to_string());
        return insights;
    }

    let count_of = |status: WorkStatus| status_breakdown.get(&status).map_or(0, |e| e.count);

    let delayed = count_of(WorkStatus::Delayed);
    if delayed > 0 {
        insights.push(format!("{} delayed task(s) need attention.", delayed));
    }

    let cancelled = count_of(WorkStatus::Cancelled);
    if cancelled > 0 {
        insights.push(format!(
            "{} cancelled task(s) are excluded from simple progress.",
            cancelled
        ));
    }

    let empty_phases = phases.iter().filter(|p| p.task_count == 0).count();
    if empty_phases > 0 {
        insights.push(format!("{} phase(s) have no tasks yet.", empty_phases));
    }

    if progress_percentage >= 90.0 {
        insights.push("Project is nearly complete.".to_string());
    } else if progress_percentage <= 25.0 {
        insights.push("Project is still in its early stages.".to_string());
    }

    insights
}

pub(crate) fn performance_insights(
    completion: &MetricScore,
    time: &MetricScore,
    progress: &MetricScore,
    stats: &PortfolioStatistics,
) -> Vec<String> {
    let mut insights = Vec::new();

    if completion.score >= 80.0 {
        insights.push("Strong completion record across the portfolio.".to_string());
    } else if completion.score < 50.0 {
        insights.push("Less than half of the possible completion score was earned.".to_string());
    }

    if let Some(note) = &time.note {
        insights.push(format!("Delivery timing not scored: {}.", note));
    } else if time.score >= 90.0 {
        insights.push("Completed projects are consistently on time or early.".to_string());
    } else if time.score < 60.0 {
        insights.push("Late deliveries are dragging the time-management score down.".to_string());
    }

    if progress.score < 40.0 && progress.note.is_none() {
        insights.push("Average project progress is low.".to_string());
    }

    let delayed = stats.by_status.get(&WorkStatus::Delayed).copied().unwrap_or(0);
    if delayed > 0 {
        insights.push(format!("{} project(s) are currently delayed.", delayed));
    }

    insights
}

pub(crate) fn performance_recommendations(
    completion: &MetricScore,
    time: &MetricScore,
    progress: &MetricScore,
    stats: &PortfolioStatistics,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let cancelled = stats
        .by_status
        .get(&WorkStatus::Cancelled)
        .copied()
        .unwrap_or(0);
    if cancelled > 0 {
        recommendations.push(format!(
            "Review the {} cancelled project(s); cancellations reduce the completion score.",
            cancelled
        ));
    }

    if completion.score < 50.0 {
        recommendations.push("Focus on closing out ongoing and delayed projects.".to_string());
    }

    if time.note.is_none() && time.score < 60.0 {
        recommendations.push(
            "Add schedule buffers when planning; recent deliveries ran past their deadlines."
                .to_string(),
        );
    }

    if progress.note.is_none() && progress.score < 40.0 {
        recommendations
            .push("Break stalled projects into smaller tasks to restore momentum.".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Portfolio is healthy; keep up the current pace.".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::{COMPLETION_METRIC_WEIGHT, PROGRESS_METRIC_WEIGHT, TIME_METRIC_WEIGHT};

    fn stats_with(status: WorkStatus, count: usize) -> PortfolioStatistics {
        let mut stats = PortfolioStatistics::default();
        stats.by_status.insert(status, count);
        stats
    }

    #[test]
    fn test_progress_insights_no_tasks() {
        let insights = progress_insights(0.0, 0, &[], &HashMap::new());
        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("No phases or tasks"));
    }

    #[test]
    fn test_progress_insights_delayed_threshold() {
        let mut breakdown = HashMap::new();
        breakdown.insert(
            WorkStatus::Delayed,
            BreakdownEntry {
                count: 3,
                percentage: 30.0,
            },
        );
        let insights = progress_insights(50.0, 10, &[], &breakdown);
        assert!(insights.iter().any(|i| i.contains("3 delayed task(s)")));

        // Zero delayed tasks must not trigger the insight.
        let insights = progress_insights(50.0, 10, &[], &HashMap::new());
        assert!(!insights.iter().any(|i| i.contains("delayed")));
    }

    #[test]
    fn test_performance_insights_no_completed_projects() {
        let completion = MetricScore::new(60.0, COMPLETION_METRIC_WEIGHT);
        let time = MetricScore::new(0.0, TIME_METRIC_WEIGHT)
            .with_note("no completed projects to evaluate");
        let progress = MetricScore::new(60.0, PROGRESS_METRIC_WEIGHT);

        let insights =
            performance_insights(&completion, &time, &progress, &PortfolioStatistics::default());
        assert!(insights
            .iter()
            .any(|i| i.contains("no completed projects to evaluate")));
    }

    #[test]
    fn test_recommendations_cancelled_projects() {
        let completion = MetricScore::new(80.0, COMPLETION_METRIC_WEIGHT);
        let time = MetricScore::new(90.0, TIME_METRIC_WEIGHT);
        let progress = MetricScore::new(80.0, PROGRESS_METRIC_WEIGHT);

        let recs = performance_recommendations(
            &completion,
            &time,
            &progress,
            &stats_with(WorkStatus::Cancelled, 2),
        );
        assert!(recs.iter().any(|r| r.contains("2 cancelled project(s)")));
    }

    #[test]
    fn test_recommendations_healthy_fallback() {
        let completion = MetricScore::new(90.0, COMPLETION_METRIC_WEIGHT);
        let time = MetricScore::new(95.0, TIME_METRIC_WEIGHT);
        let progress = MetricScore::new(85.0, PROGRESS_METRIC_WEIGHT);

        let recs = performance_recommendations(
            &completion,
            &time,
            &progress,
            &PortfolioStatistics::default(),
        );
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("healthy"));
    }
}
