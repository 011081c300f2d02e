use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use syllabus_core::model::{CourseDraft, TopicDraft};

use crate::vm::{CourseForm, CourseFormError, TopicForm, TopicFormError};

#[component]
pub fn AddCourseModal(
    today: DateTime<Utc>,
    error: Option<String>,
    on_close: Callback<()>,
    on_submit: Callback<CourseDraft>,
) -> Element {
    let mut form = use_signal(|| CourseForm::starting(today));
    let mut form_error = use_signal(|| None::<CourseFormError>);
    let current = form();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Add New Course" }
                p { class: "muted", "Create a course and build its syllabus" }

                label { "Course Name"
                    input {
                        r#type: "text",
                        placeholder: "e.g., Data Structures and Algorithms",
                        value: "{current.name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                div { class: "form-row",
                    label { "Course Code"
                        input {
                            r#type: "text",
                            placeholder: "e.g., CS201",
                            value: "{current.code}",
                            oninput: move |evt| form.write().code = evt.value(),
                        }
                    }
                    label { "Semester"
                        input {
                            r#type: "text",
                            placeholder: "e.g., Fall 2024",
                            value: "{current.semester}",
                            oninput: move |evt| form.write().semester = evt.value(),
                        }
                    }
                }
                label { "Instructor"
                    input {
                        r#type: "text",
                        value: "{current.instructor}",
                        oninput: move |evt| form.write().instructor = evt.value(),
                    }
                }
                div { class: "form-row",
                    label { "Total Weeks"
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{current.total_weeks}",
                            oninput: move |evt| form.write().total_weeks = evt.value(),
                        }
                    }
                    label { "Start Date"
                        input {
                            r#type: "date",
                            value: "{current.start_date}",
                            oninput: move |evt| form.write().start_date = evt.value(),
                        }
                    }
                    label { "End Date"
                        input {
                            r#type: "date",
                            value: "{current.end_date}",
                            oninput: move |evt| form.write().end_date = evt.value(),
                        }
                    }
                }

                if let Some(err) = form_error() {
                    p { class: "form-error", "{err.message()}" }
                }
                if let Some(message) = error {
                    p { class: "form-error", "{message}" }
                }

                div { class: "modal-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let validated = form.read().validate();
                            match validated {
                                Ok(draft) => {
                                    form_error.set(None);
                                    on_submit.call(draft);
                                }
                                Err(err) => form_error.set(Some(err)),
                            }
                        },
                        "Add Course"
                    }
                }
            }
        }
    }
}

#[component]
pub fn AddTopicModal(
    total_weeks: u32,
    on_close: Callback<()>,
    on_submit: Callback<TopicDraft>,
) -> Element {
    let mut form = use_signal(TopicForm::default);
    let mut form_error = use_signal(|| None::<TopicFormError>);
    let current = form();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Add New Topic" }
                p { class: "muted", "Add a topic to the syllabus" }

                label { "Topic Title"
                    input {
                        r#type: "text",
                        placeholder: "e.g., Introduction to Binary Trees",
                        value: "{current.title}",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                }
                label { "Description"
                    textarea {
                        rows: "3",
                        placeholder: "Brief description of the topic and what will be covered...",
                        value: "{current.description}",
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                div { class: "form-row",
                    label { "Estimated Hours"
                        input {
                            r#type: "number",
                            min: "1",
                            max: "20",
                            value: "{current.estimated_hours}",
                            oninput: move |evt| form.write().estimated_hours = evt.value(),
                        }
                    }
                    label { "Week"
                        select {
                            value: "{current.week}",
                            onchange: move |evt| form.write().week = evt.value(),
                            for week in 1..=total_weeks {
                                option { value: "{week}", "Week {week}" }
                            }
                        }
                    }
                }

                if let Some(err) = form_error() {
                    p { class: "form-error", "{err.message()}" }
                }

                div { class: "modal-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let validated = form.read().validate();
                            match validated {
                                Ok(draft) => {
                                    form_error.set(None);
                                    form.set(TopicForm::default());
                                    on_submit.call(draft);
                                }
                                Err(err) => form_error.set(Some(err)),
                            }
                        },
                        "Add Topic"
                    }
                }
            }
        }
    }
}
