use dioxus::prelude::*;

use crate::vm::ProgressOverviewVm;

#[component]
pub fn ProgressOverview(vm: ProgressOverviewVm) -> Element {
    let schedule_class = if vm.schedule_caption == "ahead/on time" {
        "stat stat--schedule stat--ok"
    } else {
        "stat stat--schedule stat--late"
    };

    rsx! {
        section { class: "panel progress-overview",
            div { class: "overview-header",
                div {
                    h2 { "{vm.course_name}" }
                    p { class: "muted", "{vm.subtitle}" }
                }
                div { class: "overview-status {vm.status_class}",
                    span { "{vm.status_label}" }
                    span { class: "muted", "{vm.week_label}" }
                }
            }
            div { class: "stats",
                div { class: "stat stat--overall",
                    h3 { "Overall Progress" }
                    p { class: "stat-value", "{vm.percent_label}" span { "%" } }
                    div { class: "bar",
                        div { class: "bar-fill", style: "width: {vm.bar_width}" }
                    }
                }
                div { class: "stat stat--completed",
                    h3 { "Completed" }
                    p { class: "stat-value", "{vm.completed}" span { " / {vm.total}" } }
                    p { class: "stat-caption", "topics completed" }
                }
                div { class: schedule_class,
                    h3 { "Schedule" }
                    p { class: "stat-value", "{vm.weeks_behind}" span { " weeks" } }
                    p { class: "stat-caption", "{vm.schedule_caption}" }
                }
                div { class: "stat stat--duration",
                    h3 { "Duration" }
                    p { class: "stat-value", "{vm.total_weeks}" span { " weeks" } }
                    p { class: "stat-caption", "total course length" }
                }
            }
        }
    }
}
