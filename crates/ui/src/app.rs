use codepulse_core::model::Theme;
use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, SessionStatus, use_ui_state_provider};
use crate::routes::Route;
use crate::views::LoadingScreen;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut ui = use_ui_state_provider(SessionStatus::Restoring, Theme::Light);

    use_future(move || {
        let session = ctx.session();
        let preferences = ctx.preferences();
        async move {
            let theme = preferences.theme().await;
            let state = session.restore().await;
            ui.theme.set(theme);
            ui.session.set(SessionStatus::Ready(state));
        }
    });

    let theme_class = ui.theme.read().class();
    let restoring = ui.session.read().is_restoring();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "CodePulse" }

        div { class: "app-root {theme_class}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                if restoring {
                    LoadingScreen {}
                } else {
                    Router::<Route> {}
                }
            }
        }
    }
}
