use dioxus::prelude::*;
use syllabus_core::model::{CourseId, TopicDraft, TopicId};

use crate::views::AddTopicModal;
use crate::vm::{TopicVm, WeekGroupVm};

#[component]
pub fn TopicManager(
    course_id: CourseId,
    total_weeks: u32,
    groups: Vec<WeekGroupVm>,
    can_add: bool,
    can_toggle: bool,
    on_toggle: Callback<(CourseId, TopicId)>,
    on_add: Callback<(CourseId, TopicDraft)>,
) -> Element {
    let mut show_add_topic = use_signal(|| false);
    let has_topics = !groups.is_empty();

    rsx! {
        section { class: "panel topic-manager",
            div { class: "panel-header",
                div {
                    h2 { "Syllabus Topics" }
                    p { class: "muted", "Track progress week by week" }
                }
                if can_add {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| show_add_topic.set(true),
                        "+ Add Topic"
                    }
                }
            }

            if show_add_topic() {
                AddTopicModal {
                    total_weeks,
                    on_close: move |()| show_add_topic.set(false),
                    on_submit: move |draft: TopicDraft| {
                        on_add.call((course_id, draft));
                        show_add_topic.set(false);
                    },
                }
            }

            if !has_topics {
                p { class: "empty", "No topics scheduled yet." }
            }
            for group in groups {
                div { key: "{group.week}", class: "week",
                    div { class: "week-header",
                        h3 { "{group.heading}" }
                        div { class: "bar",
                            div { class: "bar-fill", style: "width: {group.bar_width}" }
                        }
                        span { class: "muted", "{group.completed_label}" }
                    }
                    for topic in group.topics.iter() {
                        TopicRow {
                            key: "{topic.id}",
                            topic: topic.clone(),
                            disabled: !can_toggle,
                            on_toggle: move |topic_id: TopicId| on_toggle.call((course_id, topic_id)),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TopicRow(topic: TopicVm, disabled: bool, on_toggle: Callback<TopicId>) -> Element {
    let id = topic.id;
    let card_class = topic.card_class();
    rsx! {
        div { class: card_class,
            button {
                class: if topic.is_completed { "topic-toggle topic-toggle--done" } else { "topic-toggle" },
                r#type: "button",
                title: if topic.is_completed { "Mark as not completed" } else { "Mark as completed" },
                disabled,
                onclick: move |_| on_toggle.call(id),
                if topic.is_completed { "✓" }
            }
            div { class: "topic-body",
                h4 { "{topic.title}" }
                p { class: "muted", "{topic.description}" }
                div { class: "topic-meta",
                    span { "{topic.estimate_label}" }
                    if let Some(actual) = topic.actual_label.as_ref() {
                        span { "• {actual}" }
                    }
                    if let Some(completed) = topic.completed_label.as_ref() {
                        span { class: "topic-completed", "{completed}" }
                    }
                }
            }
        }
    }
}
