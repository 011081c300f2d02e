use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::CourseOverview;
use syllabus_core::access::{Capability, PermissionMatrix};
use syllabus_core::model::{CourseDraft, CourseId, TopicDraft, TopicId, User};

use crate::context::{AppContext, Session};
use crate::routes::Route;
use crate::views::{
    AddCourseModal, AlertPanel, CourseList, ProgressOverview, TopicManager, ViewError, ViewState,
    view_state_from_resource,
};
use crate::vm::{AlertVm, ProgressOverviewVm, map_course_list, map_week_groups};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    overview: Vec<CourseOverview>,
}

/// Course selected by the route, falling back to the first course.
fn resolve_selection(
    overview: &[CourseOverview],
    requested: Option<u64>,
) -> Option<&CourseOverview> {
    match requested {
        Some(raw) => overview
            .iter()
            .find(|entry| entry.course.id() == CourseId::new(raw)),
        None => overview.first(),
    }
}

#[component]
pub fn DashboardView(user: User, selected: Option<u64>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Session>();
    let navigator = use_navigator();
    let course_service = ctx.course_service();
    let course_service_for_resource = course_service.clone();

    let mut show_add_course = use_signal(|| false);
    let mut course_error = use_signal(|| None::<String>);
    let action_error = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let courses = course_service_for_resource.clone();
        async move {
            let overview = courses.overview().await.map_err(|err| {
                tracing::warn!(error = %err, "failed to load course overview");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(DashboardData { overview })
        }
    });
    let state = view_state_from_resource(&resource);

    let can_view = PermissionMatrix::can_perform(user.role, Capability::ViewCourses);
    let can_add_course = PermissionMatrix::can_perform(user.role, Capability::AddCourse);
    let can_add_topic = PermissionMatrix::can_perform(user.role, Capability::AddTopic);
    let can_toggle = PermissionMatrix::can_perform(user.role, Capability::ToggleTopic);

    let on_select = use_callback(move |course_id: CourseId| {
        navigator.push(Route::Course {
            course_id: course_id.value(),
        });
    });

    let on_toggle = {
        let courses = course_service.clone();
        let user = user.clone();
        use_callback(move |(course_id, topic_id): (CourseId, TopicId)| {
            let courses = courses.clone();
            let user = user.clone();
            let mut resource = resource;
            let mut action_error = action_error;
            spawn(async move {
                match courses.toggle_topic(&user, course_id, topic_id).await {
                    Ok(_) => {
                        action_error.set(None);
                        resource.restart();
                    }
                    Err(err) => action_error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_add_topic = {
        let courses = course_service.clone();
        let user = user.clone();
        use_callback(move |(course_id, draft): (CourseId, TopicDraft)| {
            let courses = courses.clone();
            let user = user.clone();
            let mut resource = resource;
            let mut action_error = action_error;
            spawn(async move {
                match courses.add_topic(&user, course_id, draft).await {
                    Ok(_) => {
                        action_error.set(None);
                        resource.restart();
                    }
                    Err(err) => action_error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_add_course = {
        let courses = course_service.clone();
        let user = user.clone();
        use_callback(move |draft: CourseDraft| {
            let courses = courses.clone();
            let user = user.clone();
            let mut resource = resource;
            spawn(async move {
                match courses.add_course(&user, draft).await {
                    Ok(course_id) => {
                        course_error.set(None);
                        show_add_course.set(false);
                        resource.restart();
                        navigator.push(Route::Course {
                            course_id: course_id.value(),
                        });
                    }
                    Err(err) => course_error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_logout = {
        let identity = ctx.identity();
        use_callback(move |()| {
            let identity = identity.clone();
            let mut current = session.0;
            spawn(async move {
                identity.logout().await;
                current.set(None);
                navigator.replace(Route::Home {});
            });
        })
    };

    let greeting = if user.is_faculty() {
        "Manage your courses and track syllabus progress"
    } else {
        "Stay updated on your learning progress"
    };

    let body = match state {
        ViewState::Idle => rsx! {
            p { "Idle" }
        },
        ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "form-error", "{err.message()}" }
        },
        ViewState::Ready(data) => {
            let now = course_service.clock().now();
            let current = resolve_selection(&data.overview, selected);
            let selected_id = current.map(|entry| entry.course.id());
            let items = map_course_list(&data.overview, selected_id);
            let overview_vm =
                current.map(|entry| ProgressOverviewVm::new(&entry.course, &entry.progress));
            let alert_vm = current
                .and_then(CourseOverview::alert)
                .map(|alert| AlertVm::from(&alert));
            let topics = current.map(|entry| {
                (
                    entry.course.id(),
                    entry.course.total_weeks(),
                    map_week_groups(&entry.course, entry.progress.current_week),
                )
            });

            rsx! {
                if let Some(vm) = overview_vm {
                    ProgressOverview { vm }
                }
                if let Some(vm) = alert_vm {
                    AlertPanel { vm }
                }
                div { class: "dashboard-grid",
                    section { class: "panel course-panel",
                        div { class: "panel-header",
                            h2 { "Courses" }
                            if can_add_course {
                                button {
                                    class: "btn btn-link",
                                    r#type: "button",
                                    onclick: move |_| {
                                        course_error.set(None);
                                        show_add_course.set(true);
                                    },
                                    "+ Add Course"
                                }
                            }
                        }
                        if can_view {
                            CourseList { items, on_select }
                        }
                    }
                    div { class: "topic-column",
                        match topics {
                            Some((course_id, total_weeks, groups)) => rsx! {
                                TopicManager {
                                    course_id,
                                    total_weeks,
                                    groups,
                                    can_add: can_add_topic,
                                    can_toggle,
                                    on_toggle,
                                    on_add: on_add_topic,
                                }
                            },
                            None => rsx! {
                                section { class: "panel placeholder",
                                    h3 { "Select a Course" }
                                    p { class: "muted",
                                        "Choose a course from the sidebar to view and manage syllabus progress."
                                    }
                                }
                            },
                        }
                    }
                }
                if show_add_course() {
                    AddCourseModal {
                        today: now,
                        error: course_error(),
                        on_close: move |()| show_add_course.set(false),
                        on_submit: on_add_course,
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page dashboard",
            header { class: "dashboard-header",
                div { class: "brand",
                    h1 { "SyllabusTracker" }
                    p { class: "muted", "Smart Progress Management" }
                }
                div { class: "user-chip",
                    span { class: "user-name", "{user.name}" }
                    span { class: "user-role", "{user.role.label()}" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_logout.call(()),
                        "Log out"
                    }
                }
            }
            section { class: "welcome",
                h2 { "Welcome back, {user.name}!" }
                p { class: "muted", "{greeting}" }
            }
            if let Some(message) = action_error() {
                div { class: "banner banner--error", "{message}" }
            }
            {body}
        }
    }
}
