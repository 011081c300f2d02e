//! Schedule status classification and delay alerts.

use crate::model::Course;
use crate::progress::Progress;

/// Coarse schedule status used for badges and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    OnTrack,
    Behind,
    Critical,
}

impl ScheduleStatus {
    #[must_use]
    pub fn from_progress(progress: &Progress) -> Self {
        if progress.is_on_track {
            ScheduleStatus::OnTrack
        } else if progress.weeks_behind <= 2 {
            ScheduleStatus::Behind
        } else {
            ScheduleStatus::Critical
        }
    }

    /// Label shown on the course overview card.
    #[must_use]
    pub fn overview_label(&self) -> &'static str {
        match self {
            ScheduleStatus::OnTrack => "On Track",
            ScheduleStatus::Behind => "Slightly Behind",
            ScheduleStatus::Critical => "Significantly Behind",
        }
    }

    /// Short label shown in the course list.
    #[must_use]
    pub fn badge_label(&self) -> &'static str {
        match self {
            ScheduleStatus::OnTrack => "On Track",
            ScheduleStatus::Behind => "Behind",
            ScheduleStatus::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelaySeverity {
    Minor,
    Significant,
    Critical,
}

impl DelaySeverity {
    #[must_use]
    pub fn from_weeks_behind(weeks_behind: u64) -> Self {
        match weeks_behind {
            0..=1 => DelaySeverity::Minor,
            2..=3 => DelaySeverity::Significant,
            _ => DelaySeverity::Critical,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            DelaySeverity::Minor => "Minor Delay",
            DelaySeverity::Significant => "Significant Delay",
            DelaySeverity::Critical => "Critical Delay",
        }
    }

    #[must_use]
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            DelaySeverity::Minor => &[
                "Consider dedicating extra time this week to catch up",
                "Review current topics to ensure understanding",
            ],
            DelaySeverity::Significant => &[
                "Schedule additional study sessions",
                "Consider office hours or tutoring support",
                "Prioritize upcoming high-impact topics",
            ],
            DelaySeverity::Critical => &[
                "Immediate intervention required",
                "Meet with instructor to discuss catch-up plan",
                "Consider course load adjustment if necessary",
            ],
        }
    }
}

/// A delay warning for a course that has fallen off track.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayAlert {
    pub course_name: String,
    pub severity: DelaySeverity,
    pub weeks_behind: u64,
    pub completed_topics: usize,
    pub total_topics: usize,
    pub completion_percentage: f64,
}

impl DelayAlert {
    /// Build an alert, or `None` while the course is on track.
    #[must_use]
    pub fn for_course(course: &Course, progress: &Progress) -> Option<Self> {
        if progress.is_on_track {
            return None;
        }
        Some(Self {
            course_name: course.name().to_owned(),
            severity: DelaySeverity::from_weeks_behind(progress.weeks_behind),
            weeks_behind: progress.weeks_behind,
            completed_topics: progress.completed_topics,
            total_topics: progress.total_topics,
            completion_percentage: progress.completion_percentage,
        })
    }

    /// "1 week behind" / "3 weeks behind".
    #[must_use]
    pub fn behind_label(&self) -> String {
        let plural = if self.weeks_behind > 1 { "s" } else { "" };
        format!("{} week{plural} behind", self.weeks_behind)
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "The syllabus progress for {} is falling behind schedule. You have completed {} out of {} topics ({}% completion).",
            self.course_name,
            self.completed_topics,
            self.total_topics,
            self.completion_percentage.round(),
        )
    }
}
