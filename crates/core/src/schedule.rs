//! Week-by-week view of a course syllabus.

use std::collections::BTreeMap;

use crate::model::{Course, Topic};

/// Where a topic sits relative to the current course week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicWeekStatus {
    Completed,
    Current,
    Upcoming,
}

impl TopicWeekStatus {
    /// Classify a topic for the given (unclamped) current week.
    ///
    /// Incomplete topics from past weeks also count as `Current`.
    #[must_use]
    pub fn of(topic: &Topic, current_week: i64) -> Self {
        if topic.is_completed() {
            TopicWeekStatus::Completed
        } else if current_week >= i64::from(topic.week()) {
            TopicWeekStatus::Current
        } else {
            TopicWeekStatus::Upcoming
        }
    }
}

/// Topics scheduled in a single week, in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGroup<'a> {
    pub week: u32,
    pub topics: Vec<&'a Topic>,
}

impl WeekGroup<'_> {
    #[must_use]
    pub fn completed(&self) -> usize {
        self.topics.iter().filter(|topic| topic.is_completed()).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.topics.len()
    }

    /// Share of this week's topics that are complete, in percent.
    #[must_use]
    pub fn completion_percentage(&self) -> f64 {
        if self.topics.is_empty() {
            return 0.0;
        }
        self.completed() as f64 / self.total() as f64 * 100.0
    }
}

/// Group a course's topics by week, weeks ascending. Weeks without topics are
/// omitted.
#[must_use]
pub fn topics_by_week(course: &Course) -> Vec<WeekGroup<'_>> {
    let mut weeks: BTreeMap<u32, Vec<&Topic>> = BTreeMap::new();
    for topic in course.topics() {
        weeks.entry(topic.week()).or_default().push(topic);
    }
    weeks
        .into_iter()
        .map(|(week, topics)| WeekGroup { week, topics })
        .collect()
}
