use syllabus_core::model::{Course, Topic, TopicId};
use syllabus_core::schedule::{TopicWeekStatus, WeekGroup, topics_by_week};

use crate::vm::time_fmt::{format_date, format_hours};

#[derive(Clone, Debug, PartialEq)]
pub struct TopicVm {
    pub id: TopicId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub status: TopicWeekStatus,
    pub estimate_label: String,
    pub actual_label: Option<String>,
    pub completed_label: Option<String>,
}

impl TopicVm {
    #[must_use]
    pub fn new(topic: &Topic, current_week: i64) -> Self {
        Self {
            id: topic.id(),
            title: topic.title().to_owned(),
            description: topic.description().to_owned(),
            is_completed: topic.is_completed(),
            status: TopicWeekStatus::of(topic, current_week),
            estimate_label: format!("Est: {}h", format_hours(topic.estimated_hours())),
            actual_label: topic
                .actual_hours()
                .map(|hours| format!("Actual: {}h", format_hours(hours))),
            completed_label: topic
                .completed_at()
                .map(|at| format!("Completed: {}", format_date(at))),
        }
    }

    #[must_use]
    pub fn card_class(&self) -> &'static str {
        match self.status {
            TopicWeekStatus::Completed => "topic topic--completed",
            TopicWeekStatus::Current => "topic topic--current",
            TopicWeekStatus::Upcoming => "topic",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeekGroupVm {
    pub week: u32,
    pub heading: String,
    pub completed_label: String,
    pub bar_width: String,
    pub topics: Vec<TopicVm>,
}

impl WeekGroupVm {
    fn new(group: &WeekGroup<'_>, current_week: i64) -> Self {
        Self {
            week: group.week,
            heading: format!("Week {}", group.week),
            completed_label: format!("{}/{} completed", group.completed(), group.total()),
            bar_width: format!("{}%", group.completion_percentage()),
            topics: group
                .topics
                .iter()
                .map(|topic| TopicVm::new(topic, current_week))
                .collect(),
        }
    }
}

/// Week sections for the topic manager, weeks ascending.
#[must_use]
pub fn map_week_groups(course: &Course, current_week: i64) -> Vec<WeekGroupVm> {
    topics_by_week(course)
        .iter()
        .map(|group| WeekGroupVm::new(group, current_week))
        .collect()
}
