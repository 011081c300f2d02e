mod alert_panel;
mod course_list;
mod dashboard;
mod home;
mod login;
mod modals;
mod progress_overview;
mod state;
mod topic_manager;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use alert_panel::AlertPanel;
pub use course_list::CourseList;
pub use dashboard::DashboardView;
pub use home::{CourseView, HomeView};
pub use login::LoginView;
pub use modals::{AddCourseModal, AddTopicModal};
pub use progress_overview::ProgressOverview;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topic_manager::TopicManager;
