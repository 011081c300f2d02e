use syllabus_core::Progress;
use syllabus_core::alerts::ScheduleStatus;
use syllabus_core::model::Course;

/// CSS modifier for a schedule status.
#[must_use]
pub fn status_class(status: ScheduleStatus) -> &'static str {
    match status {
        ScheduleStatus::OnTrack => "status--on-track",
        ScheduleStatus::Behind => "status--behind",
        ScheduleStatus::Critical => "status--critical",
    }
}

/// Header card for the selected course.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressOverviewVm {
    pub course_name: String,
    pub subtitle: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub percent_label: String,
    pub bar_width: String,
    pub completed: usize,
    pub total: usize,
    pub weeks_behind: u64,
    pub schedule_caption: &'static str,
    pub total_weeks: u32,
    pub week_label: String,
}

impl ProgressOverviewVm {
    #[must_use]
    pub fn new(course: &Course, progress: &Progress) -> Self {
        let status = ScheduleStatus::from_progress(progress);
        let week_label = if progress.current_week < 1 {
            "Not started".to_owned()
        } else if progress.current_week > i64::from(course.total_weeks()) {
            "Finished".to_owned()
        } else {
            format!("Week {} of {}", progress.current_week, course.total_weeks())
        };
        Self {
            course_name: course.name().to_owned(),
            subtitle: format!("{} • {}", course.code(), course.semester()),
            status_label: status.overview_label(),
            status_class: status_class(status),
            percent_label: format!("{:.0}", progress.completion_percentage.round()),
            bar_width: format!("{}%", progress.completion_percentage),
            completed: progress.completed_topics,
            total: progress.total_topics,
            weeks_behind: progress.weeks_behind,
            schedule_caption: if progress.is_on_track {
                "ahead/on time"
            } else {
                "behind schedule"
            },
            total_weeks: course.total_weeks(),
            week_label,
        }
    }
}
