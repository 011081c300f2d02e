use dioxus::prelude::*;
use syllabus_core::model::CourseId;

use crate::vm::CourseListItemVm;

#[component]
pub fn CourseList(items: Vec<CourseListItemVm>, on_select: Callback<CourseId>) -> Element {
    if items.is_empty() {
        return rsx! {
            p { class: "empty", "No courses yet." }
        };
    }

    rsx! {
        ul { class: "course-list",
            for item in items.iter() {
                CourseRow { key: "{item.id}", item: item.clone(), on_select }
            }
        }
    }
}

#[component]
fn CourseRow(item: CourseListItemVm, on_select: Callback<CourseId>) -> Element {
    let id = item.id;
    rsx! {
        li {
            button {
                class: if item.is_selected { "course-row course-row--selected" } else { "course-row" },
                r#type: "button",
                onclick: move |_| on_select.call(id),
                h3 { "{item.name}" }
                p { class: "muted", "{item.subtitle}" }
                div { class: "progress-meta",
                    span { "{item.topics_label}" }
                    span { "{item.percent_label}" }
                }
                div { class: "bar bar--thin",
                    div { class: "bar-fill {item.status_class}", style: "width: {item.bar_width}" }
                }
                span { class: "status-badge {item.status_class}", "{item.status_label}" }
            }
        }
    }
}
