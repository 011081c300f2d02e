mod alert_vm;
mod course_vm;
mod forms;
mod progress_vm;
mod time_fmt;
mod topic_vm;

pub use alert_vm::AlertVm;
pub use course_vm::{CourseListItemVm, map_course_list};
pub use forms::{CourseForm, CourseFormError, LoginForm, TopicForm, TopicFormError};
pub use progress_vm::{ProgressOverviewVm, status_class};
pub use time_fmt::{format_date, format_date_input, format_hours, parse_date_input};
pub use topic_vm::{TopicVm, WeekGroupVm, map_week_groups};
