use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use codepulse_core::model::{Theme, User, UserId};
use codepulse_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, AuthService, Completions, EditorialError, EditorialService, PreferencesService,
    SessionService, SessionState,
};
use storage::repository::Storage;

use crate::context::{SessionStatus, UiApp, build_app_context, use_ui_state_provider};
use crate::views::{AuthView, EditorialView, NotFoundView, TrackerView};

/// Completions backend that answers every prompt the same way.
pub struct ScriptedCompletions {
    reply: Option<&'static str>,
}

impl ScriptedCompletions {
    pub fn replying(reply: &'static str) -> Arc<dyn Completions> {
        Arc::new(Self { reply: Some(reply) })
    }

    pub fn failing() -> Arc<dyn Completions> {
        Arc::new(Self { reply: None })
    }
}

#[async_trait]
impl Completions for ScriptedCompletions {
    async fn complete(&self, _prompt: &str) -> Result<String, EditorialError> {
        self.reply
            .map(str::to_string)
            .ok_or(EditorialError::EmptyResponse)
    }
}

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn session(&self) -> Arc<SessionService> {
        self.services.session()
    }

    fn preferences(&self) -> Arc<PreferencesService> {
        self.services.preferences()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn editorial(&self) -> Arc<EditorialService> {
        self.services.editorial()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Auth,
    Tracker,
    Editorial(String),
    NotFound,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: SessionStatus,
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
    use_ui_state_provider(props.session.clone(), Theme::Light);
    use_context_provider(|| props.view.clone());
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
    match use_context::<ViewKind>() {
        ViewKind::Auth => rsx! { AuthView {} },
        ViewKind::Tracker => rsx! { TrackerView {} },
        ViewKind::Editorial(problem_id) => rsx! { EditorialView { problem_id } },
        ViewKind::NotFound => rsx! { NotFoundView { segments: vec!["missing".to_string()] } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the dom until the rendered html contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
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

pub fn signed_in_user() -> User {
    User::new(
        UserId::new("1700000000000"),
        "Ada",
        "ada@example.com",
        Some("https://ui-avatars.com/api/?name=Ada&background=3b82f6&color=ffffff".into()),
    )
}

pub fn setup_view_harness(
    view: ViewKind,
    session: SessionState,
    completions: Arc<dyn Completions>,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = AppServices::new(&storage, fixed_clock(), completions, Duration::ZERO);
    let app = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            session: SessionStatus::Ready(session),
        },
    );

    ViewHarness { dom }
}
