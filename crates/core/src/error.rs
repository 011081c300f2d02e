use thiserror::Error;

use crate::model::{CourseError, TopicError, UserError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    User(#[from] UserError),
}
