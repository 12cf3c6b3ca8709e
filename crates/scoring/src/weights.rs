//! Scoring weight tables and grading scale.
//!
//! Two distinct status tables exist on purpose: `status_weight` (ceiling 1.0)
//! feeds portfolio completion scoring, `status_completion` (ceiling 100.0)
//! feeds task-level progress scoring. They must never be conflated.

use serde::Serialize;
use taskflow_core::{Priority, WorkStatus};

/// Status weight for completion scoring. Cancelled work counts against the
/// portfolio; unmapped statuses count as zero.
pub fn status_weight(status: WorkStatus) -> f64 {
    match status {
        WorkStatus::Completed => 1.0,
        WorkStatus::Ongoing => 0.6,
        WorkStatus::Delayed => 0.3,
        WorkStatus::Pending => 0.2,
        WorkStatus::Cancelled => -0.5,
        WorkStatus::Unknown => 0.0,
    }
}

/// Status completion percentage for progress scoring. Cancelled tasks count
/// as 0% done; unmapped statuses count as zero.
pub fn status_completion(status: WorkStatus) -> f64 {
    match status {
        WorkStatus::Completed => 100.0,
        WorkStatus::Ongoing => 50.0,
        WorkStatus::Delayed => 25.0,
        WorkStatus::Pending => 0.0,
        WorkStatus::Cancelled => 0.0,
        WorkStatus::Unknown => 0.0,
    }
}

/// Priority weight for weighted progress. Unmapped priorities carry no
/// weight.
pub fn priority_weight(priority: Priority) -> f64 {
    match priority {
        Priority::High => 3.0,
        Priority::Medium => 2.0,
        Priority::Low => 1.0,
        Priority::Unknown => 0.0,
    }
}

/// Weight of the completion metric in the overall score.
pub const COMPLETION_METRIC_WEIGHT: f64 = 0.35;

/// Weight of the time-management metric in the overall score.
pub const TIME_METRIC_WEIGHT: f64 = 0.30;

/// Weight of the progress metric in the overall score.
pub const PROGRESS_METRIC_WEIGHT: f64 = 0.35;

/// Days past the planned end still counted as on-time.
pub const ON_TIME_GRACE_DAYS: i64 = 2;

/// Delay (as a percentage of planned duration) beyond which a late delivery
/// is severely late.
pub const SEVERE_DELAY_PERCENT: f64 = 20.0;

/// Delivery timing classification for a completed project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum DeliveryTiming {
    /// Finished before the planned end
    Early,
    /// Finished within the grace period
    OnTime,
    /// Finished past the grace period but within the severe-delay threshold
    Late,
    /// Delay exceeded the severe-delay threshold
    SeverelyLate,
}

impl DeliveryTiming {
    /// Score multiplier for this classification.
    pub fn multiplier(&self) -> f64 {
        match self {
            DeliveryTiming::Early => 1.3,
            DeliveryTiming::OnTime => 1.0,
            DeliveryTiming::Late => 0.7,
            DeliveryTiming::SeverelyLate => 0.4,
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryTiming::Early => "early",
            DeliveryTiming::OnTime => "on-time",
            DeliveryTiming::Late => "late",
            DeliveryTiming::SeverelyLate => "severely-late",
        }
    }
}

impl From<DeliveryTiming> for String {
    fn from(timing: DeliveryTiming) -> Self {
        timing.as_str().to_string()
    }
}

impl std::fmt::Display for DeliveryTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade for an overall performance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Grade {
    /// 95 and above
    APlus,
    /// 90 to 95
    A,
    /// 85 to 90
    BPlus,
    /// 80 to 85
    B,
    /// 75 to 80
    CPlus,
    /// 70 to 75
    C,
    /// 65 to 70
    DPlus,
    /// 60 to 65
    D,
    /// Below 60
    F,
    /// No data to grade
    NotAvailable,
}

impl Grade {
    /// Map a 0-100 score to its letter grade.
    pub fn from_score(score: f64) -> Self {
        if score >= 95.0 {
            Grade::APlus
        } else if score >= 90.0 {
            Grade::A
        } else if score >= 85.0 {
            Grade::BPlus
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 75.0 {
            Grade::CPlus
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 65.0 {
            Grade::DPlus
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
            Grade::NotAvailable => "N/A",
        }
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.as_str().to_string()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_weight_table() {
        assert_eq!(status_weight(WorkStatus::Completed), 1.0);
        assert_eq!(status_weight(WorkStatus::Ongoing), 0.6);
        assert_eq!(status_weight(WorkStatus::Delayed), 0.3);
        assert_eq!(status_weight(WorkStatus::Pending), 0.2);
        assert_eq!(status_weight(WorkStatus::Cancelled), -0.5);
        assert_eq!(status_weight(WorkStatus::Unknown), 0.0);
    }

    #[test]
    fn test_status_completion_table() {
        assert_eq!(status_completion(WorkStatus::Completed), 100.0);
        assert_eq!(status_completion(WorkStatus::Ongoing), 50.0);
        assert_eq!(status_completion(WorkStatus::Delayed), 25.0);
        assert_eq!(status_completion(WorkStatus::Pending), 0.0);
        assert_eq!(status_completion(WorkStatus::Cancelled), 0.0);
        assert_eq!(status_completion(WorkStatus::Unknown), 0.0);
    }

    #[test]
    fn test_priority_weight_table() {
        assert_eq!(priority_weight(Priority::High), 3.0);
        assert_eq!(priority_weight(Priority::Medium), 2.0);
        assert_eq!(priority_weight(Priority::Low), 1.0);
        assert_eq!(priority_weight(Priority::Unknown), 0.0);
    }

    #[test]
    fn test_metric_weights_sum_to_one() {
        let sum = COMPLETION_METRIC_WEIGHT + TIME_METRIC_WEIGHT + PROGRESS_METRIC_WEIGHT;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_timing_multipliers() {
        assert_eq!(DeliveryTiming::Early.multiplier(), 1.3);
        assert_eq!(DeliveryTiming::OnTime.multiplier(), 1.0);
        assert_eq!(DeliveryTiming::Late.multiplier(), 0.7);
        assert_eq!(DeliveryTiming::SeverelyLate.multiplier(), 0.4);
    }

    #[test]
    fn test_grade_breakpoints() {
        assert_eq!(Grade::from_score(95.0), Grade::APlus);
        assert_eq!(Grade::from_score(94.99), Grade::A);
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(85.0), Grade::BPlus);
        assert_eq!(Grade::from_score(80.0), Grade::B);
        assert_eq!(Grade::from_score(75.0), Grade::CPlus);
        assert_eq!(Grade::from_score(70.0), Grade::C);
        assert_eq!(Grade::from_score(65.0), Grade::DPlus);
        assert_eq!(Grade::from_score(60.0), Grade::D);
        assert_eq!(Grade::from_score(59.99), Grade::F);
        assert_eq!(Grade::from_score(0.0), Grade::F);
    }

    #[test]
    fn test_grade_strings() {
        assert_eq!(Grade::APlus.as_str(), "A+");
        assert_eq!(Grade::NotAvailable.as_str(), "N/A");
        assert_eq!(DeliveryTiming::SeverelyLate.as_str(), "severely-late");
    }

    #[test]
    fn test_serialize_as_strings() {
        assert_eq!(serde_json::to_string(&Grade::BPlus).unwrap(), "\"B+\"");
        assert_eq!(
            serde_json::to_string(&DeliveryTiming::OnTime).unwrap(),
            "\"on-time\""
        );
    }
}
