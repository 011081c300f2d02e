use dioxus::prelude::*;

use crate::context::Session;
use crate::views::{DashboardView, LoginView};

/// Entry route: the login page, or the dashboard once someone is logged in.
#[component]
pub fn HomeView() -> Element {
    let session = use_context::<Session>();
    match session.user() {
        Some(user) => rsx! { DashboardView { user, selected: None } },
        None => rsx! { LoginView {} },
    }
}

#[component]
pub fn CourseView(course_id: u64) -> Element {
    let session = use_context::<Session>();
    match session.user() {
        Some(user) => rsx! { DashboardView { user, selected: Some(course_id) } },
        None => rsx! { LoginView {} },
    }
}
