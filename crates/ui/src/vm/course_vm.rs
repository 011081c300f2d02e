use services::CourseOverview;
use syllabus_core::model::CourseId;

use crate::vm::progress_vm::status_class;

/// One row of the course sidebar.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseListItemVm {
    pub id: CourseId,
    pub name: String,
    pub subtitle: String,
    pub topics_label: String,
    pub percent_label: String,
    pub bar_width: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub is_selected: bool,
}

impl CourseListItemVm {
    #[must_use]
    pub fn new(entry: &CourseOverview, selected: Option<CourseId>) -> Self {
        let course = &entry.course;
        let progress = &entry.progress;
        let status = entry.status();
        Self {
            id: course.id(),
            name: course.name().to_owned(),
            subtitle: format!("{} • {}", course.code(), course.instructor()),
            topics_label: format!("{}/{} topics", progress.completed_topics, progress.total_topics),
            percent_label: format!("{:.0}%", progress.completion_percentage.round()),
            bar_width: format!("{}%", progress.completion_percentage),
            status_label: status.badge_label(),
            status_class: status_class(status),
            is_selected: selected == Some(course.id()),
        }
    }
}

#[must_use]
pub fn map_course_list(
    overview: &[CourseOverview],
    selected: Option<CourseId>,
) -> Vec<CourseListItemVm> {
    overview
        .iter()
        .map(|entry| CourseListItemVm::new(entry, selected))
        .collect()
}
