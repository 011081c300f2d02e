//! Completion and schedule-deviation metrics for a course.
//!
//! Everything here is derived on demand from a `Course` and an explicit "now";
//! nothing is cached or stored.

use chrono::{DateTime, Duration, Utc};

use crate::model::Course;

/// Schedule deficit at which a course stops counting as on track.
pub const ON_TRACK_MAX_WEEKS_BEHIND: u64 = 1;

/// Derived, read-only progress snapshot for one course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed_topics: usize,
    pub total_topics: usize,
    /// `completed / total * 100`, unrounded. Zero for a course without topics.
    pub completion_percentage: f64,
    /// Deficit between the number of topics expected by now and the number
    /// completed.
    ///
    /// Despite the name this counts topics, not weeks.
    pub weeks_behind: u64,
    pub is_on_track: bool,
    /// 1-based week of the course at the time of calculation. Not clamped:
    /// zero or negative before the start, past `total_weeks` after the end.
    pub current_week: i64,
    pub expected_completed: i64,
}

/// Week number of `now` within a course that started at `start`.
///
/// `ceil(elapsed / 7 days)` at millisecond resolution.
#[must_use]
pub fn current_week(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed = (now - start).num_milliseconds();
    let week = Duration::weeks(1).num_milliseconds();
    (elapsed + week - 1).div_euclid(week)
}

/// Compute the progress snapshot of `course` as of `now`.
#[must_use]
pub fn calculate_progress(course: &Course, now: DateTime<Utc>) -> Progress {
    let completed_topics = course.completed_topics();
    let total_topics = course.topics().len();
    let completion_percentage = if total_topics == 0 {
        0.0
    } else {
        completed_topics as f64 / total_topics as f64 * 100.0
    };

    let current_week = current_week(course.start_date(), now);
    let expected_completed = expected_completed(current_week, course.total_weeks(), total_topics);

    let completed = i64::try_from(completed_topics).unwrap_or(i64::MAX);
    let weeks_behind = u64::try_from(expected_completed.saturating_sub(completed)).unwrap_or(0);

    Progress {
        completed_topics,
        total_topics,
        completion_percentage,
        weeks_behind,
        is_on_track: weeks_behind <= ON_TRACK_MAX_WEEKS_BEHIND,
        current_week,
        expected_completed,
    }
}

/// `floor(current_week / total_weeks * total_topics)` in exact integer math.
fn expected_completed(current_week: i64, total_weeks: u32, total_topics: usize) -> i64 {
    if total_weeks == 0 {
        return 0;
    }
    let total_topics = i64::try_from(total_topics).unwrap_or(i64::MAX);
    current_week
        .saturating_mul(total_topics)
        .div_euclid(i64::from(total_weeks))
}
