use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{CourseView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", HomeView)] Home {},
    #[route("/courses/:course_id", CourseView)] Course { course_id: u64 },
}
