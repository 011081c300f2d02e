//! Role-based capability checks for course mutations.

use crate::model::UserRole;

/// Operations a user can attempt against the course catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewCourses,
    AddCourse,
    AddTopic,
    ToggleTopic,
}

impl Capability {
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Capability::ViewCourses => "view courses",
            Capability::AddCourse => "add courses",
            Capability::AddTopic => "add topics",
            Capability::ToggleTopic => "update topic completion",
        }
    }
}

/// Permission matrix for user roles.
pub struct PermissionMatrix;

impl PermissionMatrix {
    /// Check if a role may perform a capability.
    #[must_use]
    pub fn can_perform(role: UserRole, capability: Capability) -> bool {
        match capability {
            Capability::ViewCourses => true,
            // Students get a read-only dashboard.
            Capability::AddCourse | Capability::AddTopic | Capability::ToggleTopic => {
                role == UserRole::Faculty
            }
        }
    }
}
