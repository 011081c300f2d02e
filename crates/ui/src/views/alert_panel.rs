use dioxus::prelude::*;

use crate::vm::AlertVm;

#[component]
pub fn AlertPanel(vm: AlertVm) -> Element {
    rsx! {
        section { class: "alert-panel {vm.severity_class}",
            div { class: "alert-header",
                h3 { "{vm.title}" }
                span { class: "alert-badge", "{vm.behind_label}" }
            }
            p { class: "alert-message", "{vm.message}" }
            h4 { "Recommended Actions:" }
            ul { class: "alert-actions",
                for recommendation in vm.recommendations.iter() {
                    li { "{recommendation}" }
                }
            }
        }
    }
}
