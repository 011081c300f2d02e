use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, Session};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_context_provider(|| Session(Signal::new(ctx.identity().current_user())));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Syllabus Tracker" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
