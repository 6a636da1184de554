use codepulse_core::model::{ProblemId, Theme};
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::SessionState;

use crate::context::{AppContext, SessionStatus, use_ui_state};
use crate::routes::Route;

#[component]
pub fn TrackerView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut ui = use_ui_state();
    let navigator = use_navigator();

    let logout = move |_: MouseEvent| {
        let session = ctx.session();
        spawn(async move {
            if let Err(err) = session.logout().await {
                tracing::warn!(error = %err, "logout left stored keys behind");
            }
            ui.theme.set(Theme::Light);
            ui.session.set(SessionStatus::Ready(SessionState::Anonymous));
            navigator.replace(Route::Authentication {});
        });
    };

    let session = ui.session.read().clone();
    let Some(user) = session.user() else {
        return rsx! {};
    };
    let greeting = user.display_name().to_string();
    let email = user.email().to_string();
    let avatar = user.avatar().map(str::to_string);

    rsx! {
        div { class: "page tracker",
            header { class: "topbar",
                div { class: "topbar-brand",
                    h1 { "CodePulse" }
                }
                div { class: "topbar-actions",
                    ThemeToggle {}
                    div { class: "user-chip",
                        if let Some(src) = avatar {
                            img { class: "user-avatar", src: "{src}", alt: "{greeting}" }
                        }
                        div { class: "user-meta",
                            span { class: "user-name", "{greeting}" }
                            span { class: "user-email", "{email}" }
                        }
                    }
                    button { class: "btn btn-secondary", onclick: logout, "Logout" }
                }
            }
            main { class: "content",
                section { class: "card tracker-welcome",
                    h2 { "Welcome, {greeting}" }
                    p { "Your study plan lives here. Open an editorial for any problem you are working on." }
                }
                section { class: "card",
                    h3 { "Open an editorial" }
                    ProblemPicker {}
                }
            }
        }
    }
}

/// Problem number entry that opens the editorial screen.
#[component]
pub fn ProblemPicker() -> Element {
    let navigator = use_navigator();
    let mut raw = use_signal(String::new);
    let parsed = ProblemId::parse(&raw.read()).ok();
    let disabled = parsed.is_none();

    let open = move |evt: FormEvent| {
        evt.prevent_default();
        if let Ok(problem_id) = ProblemId::parse(&raw.read()) {
            navigator.push(Route::Editorial {
                problem_id: problem_id.to_string(),
            });
        }
    };

    rsx! {
        form { class: "problem-picker", onsubmit: open,
            input {
                class: "problem-input",
                r#type: "text",
                placeholder: "Problem number, e.g. 146",
                value: "{raw}",
                oninput: move |evt| raw.set(evt.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", disabled: disabled, "View Editorial" }
        }
    }
}

/// Light/dark switch; persists the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_context::<AppContext>();
    let mut ui = use_ui_state();
    let theme = *ui.theme.read();
    let label = if theme.is_dark() { "Light mode" } else { "Dark mode" };

    let toggle = move |_: MouseEvent| {
        let next = ui.theme.read().toggled();
        ui.theme.set(next);
        let preferences = ctx.preferences();
        spawn(async move {
            if let Err(err) = preferences.set_theme(next).await {
                tracing::warn!(error = %err, "failed to save theme");
            }
        });
    };

    rsx! {
        button { class: "btn btn-ghost theme-toggle", aria_label: "{label}", onclick: toggle, "{label}" }
    }
}
