//! Task model - the unit of work tracked by TaskFlow.

use serde::{Deserialize, Serialize};
use crate::id::TaskId;
use crate::Time;

/// Status of a work item (shared by tasks and projects).
///
/// Parsed leniently from its string form: any unmapped value becomes
/// [`WorkStatus::Unknown`] instead of failing, and scoring treats unknown
/// statuses as zero-valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkStatus {
    /// Not started yet
    Pending,
    /// Currently being worked on
    Ongoing,
    /// Finished
    Completed,
    /// Behind schedule
    Delayed,
    /// Will not be finished
    Cancelled,
    /// Unmapped status value
    Unknown,
}

impl WorkStatus {
    /// The known statuses, in display order.
    pub const ALL: [WorkStatus; 5] = [
        WorkStatus::Pending,
        WorkStatus::Ongoing,
        WorkStatus::Completed,
        WorkStatus::Delayed,
        WorkStatus::Cancelled,
    ];

    /// Parse a status string. Unmapped values yield `Unknown`, never an error.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "pending" => WorkStatus::Pending,
            "ongoing" => WorkStatus::Ongoing,
            "completed" => WorkStatus::Completed,
            "delayed" => WorkStatus::Delayed,
            "cancelled" => WorkStatus::Cancelled,
            _ => WorkStatus::Unknown,
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Pending => "pending",
            WorkStatus::Ongoing => "ongoing",
            WorkStatus::Completed => "completed",
            WorkStatus::Delayed => "delayed",
            WorkStatus::Cancelled => "cancelled",
            WorkStatus::Unknown => "unknown",
        }
    }
}

impl From<String> for WorkStatus {
    fn from(s: String) -> Self {
        WorkStatus::parse(&s)
    }
}

impl From<WorkStatus> for String {
    fn from(status: WorkStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority.
///
/// Same lenient parsing as [`WorkStatus`]: unmapped values become `Unknown`
/// and carry zero weight in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority
    High,
    /// Unmapped priority value
    Unknown,
}

impl Priority {
    /// The known priorities, in ascending order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Parse a priority string. Unmapped values yield `Unknown`, never an error.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Unknown,
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Unknown => "unknown",
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::parse(&s)
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task inside a phase.
///
/// Scoring only reads `status` and `priority`; the rest identifies the task
/// to humans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Current status
    pub status: WorkStatus,

    /// Priority
    pub priority: Priority,

    /// Creation timestamp
    pub created_at: Time,
}

impl Task {
    /// Create a new pending task.
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            status: WorkStatus::Pending,
            priority,
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_known() {
        assert_eq!(WorkStatus::parse("completed"), WorkStatus::Completed);
        assert_eq!(WorkStatus::parse("onGoing"), WorkStatus::Ongoing);
        assert_eq!(WorkStatus::parse("CANCELLED"), WorkStatus::Cancelled);
    }

    #[test]
    fn test_status_parse_unknown() {
        assert_eq!(WorkStatus::parse("archived"), WorkStatus::Unknown);
        assert_eq!(WorkStatus::parse(""), WorkStatus::Unknown);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("high"), Priority::High);
        assert_eq!(Priority::parse("Medium"), Priority::Medium);
        assert_eq!(Priority::parse("urgent"), Priority::Unknown);
    }

    #[test]
    fn test_status_serde_roundtrip() {
        let json = serde_json::to_string(&WorkStatus::Delayed).unwrap();
        assert_eq!(json, "\"delayed\"");
        let back: WorkStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WorkStatus::Delayed);
    }

    #[test]
    fn test_status_serde_unmapped() {
        let status: WorkStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, WorkStatus::Unknown);
    }

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("Write docs", Priority::Low);
        assert_eq!(task.status, WorkStatus::Pending);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.title, "Write docs");
    }
}
