//! Weighted progress calculation for phases and projects.

use std::collections::HashMap;
use std::hash::Hash;

use taskflow_core::{Phase, Priority, Project, Task, WorkStatus};
use tracing::debug;

use crate::insight;
use crate::report::{BreakdownEntry, PhaseReport, ProgressReport, TaskContribution};
use crate::weights::{priority_weight, status_completion};

/// Progress calculator over project snapshots.
///
/// Pure and infallible: empty collections and unmapped enum values produce
/// zero-valued results, never errors.
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// A task's weighted contribution: priority weight, status completion,
    /// and their product. Unknown status or priority contributes nothing.
    pub fn task_contribution(&self, task: &Task) -> TaskContribution {
        let weight = priority_weight(task.priority);
        let completion = status_completion(task.status);
        TaskContribution {
            weight,
            completion,
            contribution: weight * completion,
        }
    }

    /// Aggregate one phase's tasks into a phase report.
    ///
    /// Weighted progress divides summed contributions by summed priority
    /// weights; cancelled tasks keep their weight in that denominator but
    /// contribute 0% completion. Simple progress excludes cancelled tasks
    /// from its denominator entirely. A phase with no tasks reports 0.0 on
    /// both metrics.
    pub fn phase_report(&self, phase: &Phase) -> PhaseReport {
        let task_count = phase.tasks.len();
        let mut weight_sum = 0.0;
        let mut contribution_sum = 0.0;
        let mut completed = 0;
        let mut cancelled = 0;

        for task in &phase.tasks {
            let c = self.task_contribution(task);
            weight_sum += c.weight;
            contribution_sum += c.contribution;
            match task.status {
                WorkStatus::Completed => completed += 1,
                WorkStatus::Cancelled => cancelled += 1,
                _ => {}
            }
        }

        let weighted_progress = if weight_sum > 0.0 {
            contribution_sum / weight_sum
        } else {
            0.0
        };

        let countable = task_count - cancelled;
        let simple_progress = if countable > 0 {
            completed as f64 / countable as f64 * 100.0
        } else {
            0.0
        };

        PhaseReport {
            phase_id: phase.id,
            name: phase.name.clone(),
            task_count,
            completed_tasks: completed,
            cancelled_tasks: cancelled,
            weighted_progress,
            simple_progress,
            status_breakdown: status_breakdown(phase.tasks.iter()),
            priority_breakdown: priority_breakdown(phase.tasks.iter()),
        }
    }

    /// Combine phase reports into a project progress percentage, weighting
    /// each phase by its task count. A small nearly-done phase must not
    /// outweigh a large unfinished one.
    pub fn project_progress(&self, phases: &[PhaseReport]) -> f64 {
        let total_tasks: usize = phases.iter().map(|p| p.task_count).sum();
        if total_tasks == 0 {
            return 0.0;
        }
        let weighted_sum: f64 = phases
            .iter()
            .map(|p| p.weighted_progress * p.task_count as f64)
            .sum();
        weighted_sum / total_tasks as f64
    }

    /// Build the full progress report for a project.
    pub fn project_report(&self, project: &Project) -> ProgressReport {
        let phases: Vec<PhaseReport> = project
            .phases
            .iter()
            .map(|phase| self.phase_report(phase))
            .collect();

        let total_tasks: usize = phases.iter().map(|p| p.task_count).sum();
        let completed: usize = phases.iter().map(|p| p.completed_tasks).sum();
        let cancelled: usize = phases.iter().map(|p| p.cancelled_tasks).sum();

        let progress_percentage = self.project_progress(&phases);

        let countable = total_tasks - cancelled;
        let simple_progress_percentage = if countable > 0 {
            completed as f64 / countable as f64 * 100.0
        } else {
            0.0
        };

        let all_tasks = project.phases.iter().flat_map(|p| p.tasks.iter());
        let status_breakdown = status_breakdown(all_tasks.clone());
        let priority_breakdown = priority_breakdown(all_tasks);

        debug!(
            project = %project.id,
            progress = progress_percentage,
            tasks = total_tasks,
            "calculated project progress"
        );

        let insights = insight::progress_insights(
            progress_percentage,
            total_tasks,
            &phases,
            &status_breakdown,
        );

        ProgressReport {
            project_id: project.id,
            project_name: project.name.clone(),
            progress_percentage,
            simple_progress_percentage,
            total_phases: phases.len(),
            total_tasks,
            status_breakdown,
            priority_breakdown,
            phases,
            insights,
        }
    }
}

impl Default for ProgressCalculator {
    fn default() -> Self {
        Self
    }
}

fn breakdown<K>(counts: HashMap<K, usize>, known: &[K], total: usize) -> HashMap<K, BreakdownEntry>
where
    K: Eq + Hash + Copy,
{
    let mut out = HashMap::new();
    for key in known {
        out.insert(*key, BreakdownEntry::default());
    }
    for (key, count) in counts {
        let entry = out.entry(key).or_default();
        entry.count = count;
    }
    for entry in out.values_mut() {
        entry.percentage = if total > 0 {
            entry.count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
    }
    out
}

fn status_breakdown<'a>(
    tasks: impl Iterator<Item = &'a Task>,
) -> HashMap<WorkStatus, BreakdownEntry> {
    let mut counts: HashMap<WorkStatus, usize> = HashMap::new();
    let mut total = 0;
    for task in tasks {
        *counts.entry(task.status).or_insert(0) += 1;
        total += 1;
    }
    breakdown(counts, &WorkStatus::ALL, total)
}

fn priority_breakdown<'a>(
    tasks: impl Iterator<Item = &'a Task>,
) -> HashMap<Priority, BreakdownEntry> {
    let mut counts: HashMap<Priority, usize> = HashMap::new();
    let mut total = 0;
    for task in tasks {
        *counts.entry(task.priority).or_insert(0) += 1;
        total += 1;
    }
    breakdown(counts, &Priority::ALL, total)
}
