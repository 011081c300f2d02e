#![forbid(unsafe_code)]

pub mod app_services;
pub mod course_service;
pub mod error;
pub mod identity_service;

pub use syllabus_core::Clock;

pub use app_services::AppServices;
pub use course_service::{CourseOverview, CourseService};
pub use error::{AppServicesError, CourseServiceError, IdentityError};
pub use identity_service::IdentityService;
