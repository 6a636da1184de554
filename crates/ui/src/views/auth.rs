use codepulse_core::auth::FormField;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::{AuthError, SessionState};

use crate::context::{AppContext, SessionStatus, use_ui_state};
use crate::routes::Route;
use crate::vm::AuthFormVm;

#[component]
pub fn AuthView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut ui = use_ui_state();
    let navigator = use_navigator();
    let mut form = use_signal(AuthFormVm::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if form.read().submitting {
            return;
        }
        let auth = ctx.auth();
        let session = ctx.session();
        let (mode, draft) = {
            let current = form.read();
            (current.mode, current.draft.clone())
        };
        form.write().begin_submit();
        spawn(async move {
            let user = match auth.authenticate(mode, &draft).await {
                Ok(user) => user,
                Err(AuthError::Validation(errors)) => {
                    form.write().reject(errors);
                    return;
                }
                Err(err) => {
                    form.write().fail(err.to_string());
                    return;
                }
            };
            match session.login(user).await {
                Ok(state) => {
                    ui.session.set(SessionStatus::Ready(state));
                    navigator.replace(Route::Track {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to persist session");
                    form.write().fail("Authentication failed. Please try again.");
                    ui.session.set(SessionStatus::Ready(SessionState::Anonymous));
                }
            }
        });
    };

    let vm = form.read().clone();
    let (toggle_question, toggle_action) = vm.toggle_prompt();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                div { class: "auth-brand",
                    h1 { "CodePulse" }
                    p { class: "auth-tagline", "Track your practice. Read the editorial." }
                }
                h2 { class: "auth-heading", "{vm.heading()}" }

                if let Some(banner) = vm.banner.clone() {
                    div { class: "auth-banner", role: "alert", "{banner}" }
                }

                form { class: "auth-form", onsubmit: submit,
                    if vm.is_sign_up() {
                        FormInput {
                            field: FormField::Name,
                            label: "Full Name",
                            input_type: "text",
                            placeholder: "Enter your full name",
                            value: vm.draft.name.clone(),
                            error: vm.errors.name,
                            on_edit: move |(field, value): (FormField, String)| form.write().edit(field, value),
                        }
                    }
                    FormInput {
                        field: FormField::Email,
                        label: "Email Address",
                        input_type: "email",
                        placeholder: "Enter your email",
                        value: vm.draft.email.clone(),
                        error: vm.errors.email,
                        on_edit: move |(field, value): (FormField, String)| form.write().edit(field, value),
                    }
                    FormInput {
                        field: FormField::Password,
                        label: "Password",
                        input_type: "password",
                        placeholder: "Enter your password",
                        value: vm.draft.password.clone(),
                        error: vm.errors.password,
                        on_edit: move |(field, value): (FormField, String)| form.write().edit(field, value),
                    }
                    if vm.is_sign_up() {
                        FormInput {
                            field: FormField::ConfirmPassword,
                            label: "Confirm Password",
                            input_type: "password",
                            placeholder: "Confirm your password",
                            value: vm.draft.confirm_password.clone(),
                            error: vm.errors.confirm_password,
                            on_edit: move |(field, value): (FormField, String)| form.write().edit(field, value),
                        }
                    }
                    button {
                        class: "btn btn-primary auth-submit",
                        r#type: "submit",
                        disabled: vm.submitting,
                        "{vm.submit_label()}"
                    }
                }

                div { class: "auth-divider", span { "or" } }
                button {
                    class: "btn btn-secondary auth-identity",
                    r#type: "button",
                    disabled: vm.submitting,
                    onclick: move |_| form.write().identity_unavailable(),
                    "Continue with Google"
                }

                p { class: "auth-toggle",
                    "{toggle_question} "
                    button {
                        class: "btn-link",
                        r#type: "button",
                        disabled: vm.submitting,
                        onclick: move |_| form.write().toggle_mode(),
                        "{toggle_action}"
                    }
                }
            }
        }
    }
}

#[component]
fn FormInput(
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    error: Option<&'static str>,
    on_edit: EventHandler<(FormField, String)>,
) -> Element {
    let class = if error.is_some() {
        "auth-input auth-input-invalid"
    } else {
        "auth-input"
    };
    rsx! {
        label { class: "auth-field",
            span { class: "auth-label", "{label}" }
            input {
                class: "{class}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_edit.call((field, evt.value())),
            }
            if let Some(message) = error {
                span { class: "auth-error", "{message}" }
            }
        }
    }
}
