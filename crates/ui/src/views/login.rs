use dioxus::prelude::*;
use syllabus_core::model::UserRole;

use crate::context::{AppContext, Session};
use crate::vm::LoginForm;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Session>();

    let mut form = use_signal(LoginForm::default);
    let error = use_signal(|| None::<String>);
    let submitting = use_signal(|| false);

    let on_submit = {
        let identity = ctx.identity();
        use_callback(move |()| {
            let Some(draft) = form.read().to_draft() else {
                return;
            };
            let identity = identity.clone();
            let mut user = session.0;
            let mut error = error;
            let mut submitting = submitting;
            spawn(async move {
                submitting.set(true);
                match identity.login(draft).await {
                    Ok(logged_in) => {
                        error.set(None);
                        user.set(Some(logged_in));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let current = form();

    rsx! {
        div { class: "page login-page",
            header { class: "login-header",
                h1 { "SyllabusTracker" }
                p { "Smart Progress Management" }
            }

            section { class: "hero",
                h2 { "Track Your Syllabus Progress" }
                p {
                    "Never lose track of course completion again. Visual dashboards, progress tracking, and collaborative tools for modern education."
                }
                div { class: "features",
                    div { class: "feature",
                        h3 { "Visual Progress" }
                        p { "Real-time syllabus completion tracking with intuitive charts" }
                    }
                    div { class: "feature",
                        h3 { "Collaborative" }
                        p { "Students and faculty working together on course progress" }
                    }
                    div { class: "feature",
                        h3 { "Smart Alerts" }
                        p { "Get notified when falling behind schedule" }
                    }
                }
            }

            section { class: "login-card",
                h3 { "Get Started" }
                p { "Choose your role to continue" }

                match current.role {
                    None => rsx! {
                        div { class: "role-picker",
                            button {
                                class: "role-option role-option--faculty",
                                r#type: "button",
                                onclick: move |_| form.write().role = Some(UserRole::Faculty),
                                div { class: "role-title", "Faculty Member" }
                                div { class: "role-caption", "Manage courses and track syllabus progress" }
                            }
                            button {
                                class: "role-option role-option--student",
                                r#type: "button",
                                onclick: move |_| form.write().role = Some(UserRole::Student),
                                div { class: "role-title", "Student" }
                                div { class: "role-caption", "Track your learning progress and stay updated" }
                            }
                        }
                    },
                    Some(role) => rsx! {
                        div { class: "login-form",
                            div { class: "role-pill",
                                span { "{role.label()}" }
                                button {
                                    class: "btn btn-link",
                                    r#type: "button",
                                    onclick: move |_| form.write().role = None,
                                    "Change"
                                }
                            }
                            label { "Full Name"
                                input {
                                    r#type: "text",
                                    placeholder: "Enter your full name",
                                    value: "{current.name}",
                                    oninput: move |evt| form.write().name = evt.value(),
                                }
                            }
                            label { "Email Address"
                                input {
                                    r#type: "email",
                                    placeholder: "Enter your email",
                                    value: "{current.email}",
                                    oninput: move |evt| form.write().email = evt.value(),
                                }
                            }
                            label { "Department"
                                input {
                                    r#type: "text",
                                    placeholder: "e.g., Computer Science",
                                    value: "{current.department}",
                                    oninput: move |evt| form.write().department = evt.value(),
                                }
                            }
                            if role == UserRole::Student {
                                label { "Course"
                                    input {
                                        r#type: "text",
                                        placeholder: "e.g., CS201",
                                        value: "{current.course}",
                                        oninput: move |evt| form.write().course = evt.value(),
                                    }
                                }
                            }
                            if let Some(message) = error() {
                                p { class: "form-error", "{message}" }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: submitting(),
                                onclick: move |_| on_submit.call(()),
                                "Continue to Dashboard"
                            }
                        }
                    },
                }
            }
        }
    }
}
