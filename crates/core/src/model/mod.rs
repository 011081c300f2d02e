mod course;
mod ids;
mod topic;
mod user;

pub use ids::{CourseId, TopicId, UserId};

pub use course::{Course, CourseDraft, CourseError};
pub use topic::{Completion, Topic, TopicDraft, TopicError};
pub use user::{User, UserDraft, UserError, UserRole};
