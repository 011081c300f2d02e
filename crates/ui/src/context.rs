use std::sync::Arc;

use dioxus::prelude::*;
use services::{CourseService, IdentityService};
use syllabus_core::model::User;

pub trait UiApp: Send + Sync {
    fn course_service(&self) -> Arc<CourseService>;
    fn identity(&self) -> Arc<IdentityService>;
}

#[derive(Clone)]
pub struct AppContext {
    course_service: Arc<CourseService>,
    identity: Arc<IdentityService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course_service: app.course_service(),
            identity: app.identity(),
        }
    }

    #[must_use]
    pub fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }

    #[must_use]
    pub fn identity(&self) -> Arc<IdentityService> {
        Arc::clone(&self.identity)
    }
}

/// Reactive copy of the logged-in user. `IdentityService` stays the owner;
/// views write here after login and logout so the page switches.
#[derive(Clone, Copy, PartialEq)]
pub struct Session(pub Signal<Option<User>>);

impl Session {
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.0.read().clone()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
