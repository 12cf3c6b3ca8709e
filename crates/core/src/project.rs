//! Project model - the top-level unit of planning and delivery.

use serde::{Deserialize, Serialize};
use crate::id::ProjectId;
use crate::phase::Phase;
use crate::task::WorkStatus;
use crate::Time;

/// A project: status, delivery timeline, and its phases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,

    /// Project name
    pub name: String,

    /// Description
    pub description: String,

    /// Current status
    pub status: WorkStatus,

    /// When work started
    pub started_at: Time,

    /// Planned completion date
    pub planned_end: Time,

    /// Actual completion date, set once the project finishes
    pub completed_at: Option<Time>,

    /// Project phases, in order
    pub phases: Vec<Phase>,

    /// When created
    pub created_at: Time,
}

impl Project {
    /// Create a new pending project with the given delivery window.
    pub fn new(name: impl Into<String>, started_at: Time, planned_end: Time) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: String::new(),
            status: WorkStatus::Pending,
            started_at,
            planned_end,
            completed_at: None,
            phases: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    /// Total number of tasks across all phases.
    pub fn task_count(&self) -> usize {
        self.phases.iter().map(|p| p.tasks.len()).sum()
    }

    /// Whether the project finished with a recorded completion date.
    ///
    /// Only such projects qualify for time-management scoring.
    pub fn is_delivered(&self) -> bool {
        self.status == WorkStatus::Completed && self.completed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, Task};

    #[test]
    fn test_task_count_across_phases() {
        let mut project = Project::new("Site relaunch", chrono::Utc::now(), chrono::Utc::now());
        let mut design = Phase::new("Design");
        design.tasks.push(Task::new("Wireframes", Priority::High));
        design.tasks.push(Task::new("Mockups", Priority::Medium));
        let mut build = Phase::new("Build");
        build.tasks.push(Task::new("Frontend", Priority::High));
        project.phases = vec![design, build];

        assert_eq!(project.task_count(), 3);
    }

    #[test]
    fn test_is_delivered_requires_completion_date() {
        let mut project = Project::new("Migration", chrono::Utc::now(), chrono::Utc::now());
        project.status = WorkStatus::Completed;
        assert!(!project.is_delivered());

        project.completed_at = Some(chrono::Utc::now());
        assert!(project.is_delivered());
    }
}
