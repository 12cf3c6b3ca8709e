//! Phase model - an ordered group of tasks within a project.

use serde::{Deserialize, Serialize};
use crate::id::PhaseId;
use crate::task::Task;
use crate::Time;

/// A phase is a stage of a project holding an ordered set of tasks.
///
/// Phases embed their tasks directly: scoring operates on a snapshot of the
/// whole project tree, not on id references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    /// Unique identifier
    pub id: PhaseId,

    /// Phase name
    pub name: String,

    /// Tasks in this phase
    pub tasks: Vec<Task>,

    /// Created at
    pub created_at: Time,
}

impl Phase {
    /// Create a new empty phase.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PhaseId::new(),
            name: name.into(),
            tasks: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    /// Number of tasks in this phase.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
