use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, Clock, CourseService, IdentityService};
use storage::repository::Storage;
use syllabus_core::model::{User, UserId, UserRole};
use syllabus_core::time::fixed_now;

use crate::context::{Session, UiApp, build_app_context};
use crate::views::{CourseView, HomeView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn course_service(&self) -> Arc<CourseService> {
        self.services.course_service()
    }

    fn identity(&self) -> Arc<IdentityService> {
        self.services.identity()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Course(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    user: Option<User>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Session(Signal::new(props.user.clone())));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Course(course_id) => rsx! { CourseView { course_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_user(role: UserRole) -> User {
    User {
        id: UserId::new("test-user"),
        name: "Dr. Sarah Johnson".into(),
        email: "sarah.johnson@university.edu".into(),
        role,
        department: Some("Computer Science".into()),
        course: None,
    }
}

pub async fn setup_view_harness(view: ViewKind, user: Option<User>) -> ViewHarness {
    setup_view_harness_with_storage(view, user, Storage::in_memory(), true).await
}

pub async fn setup_view_harness_with_storage(
    view: ViewKind,
    user: Option<User>,
    storage: Storage,
    seed_sample_data: bool,
) -> ViewHarness {
    let services = AppServices::from_storage(storage, Clock::fixed(fixed_now()), seed_sample_data)
        .await
        .expect("build services");
    let app = Arc::new(TestApp {
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, user });

    ViewHarness { dom, services }
}
