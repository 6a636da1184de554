use std::sync::Arc;

use codepulse_core::model::ProblemId;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::{EditorialRequests, EditorialService};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ProblemPicker, ThemeToggle, ViewState};
use crate::vm::{COPY_FEEDBACK, CodeBlockVm, EditorialVm, ProblemInfoVm, SectionVm, map_editorial_state};

use super::scripts::write_clipboard_text;

/// Kick off a request for `problem_id`.
///
/// A superseding request (new route) always starts; a retry is ignored while
/// another request is running.
fn start_request(
    service: Arc<EditorialService>,
    problem_id: ProblemId,
    mut requests: Signal<EditorialRequests>,
    mut screen: Signal<ViewState<EditorialVm>>,
    supersede: bool,
) {
    let ticket = if supersede {
        requests.write().supersede()
    } else {
        let Some(ticket) = requests.write().begin() else {
            return;
        };
        ticket
    };
    screen.set(ViewState::Loading);

    spawn(async move {
        let state = service.load(&problem_id).await;
        if requests.write().finish(ticket) {
            screen.set(ViewState::Ready(map_editorial_state(&state)));
        } else {
            tracing::debug!(%problem_id, seq = ticket.seq(), "discarding stale editorial");
        }
    });
}

#[component]
pub fn EditorialView(problem_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let requests = use_signal(EditorialRequests::new);
    let screen = use_signal(|| ViewState::<EditorialVm>::Loading);
    let copied = use_signal(|| None::<usize>);

    let service = ctx.editorial();
    let service_for_route = Arc::clone(&service);
    use_effect(use_reactive!(|problem_id| {
        if let Ok(id) = ProblemId::parse(&problem_id) {
            start_request(Arc::clone(&service_for_route), id, requests, screen, true);
        }
    }));

    let Ok(parsed_id) = ProblemId::parse(&problem_id) else {
        return rsx! {
            div { class: "page editorial",
                p { "Invalid problem id." }
                button { class: "btn btn-primary", onclick: move |_| { navigator.push(Route::Track {}); }, "Back to Tracker" }
            }
        };
    };

    let retry_id = parsed_id.clone();
    let retry = move |_: MouseEvent| {
        start_request(Arc::clone(&service), retry_id.clone(), requests, screen, false);
    };
    let retry_banner = retry.clone();

    let in_flight = requests.read().is_in_flight();
    let refresh_label = if in_flight { "Generating..." } else { "Regenerate" };

    rsx! {
        div { class: "page editorial",
            header { class: "topbar",
                div { class: "topbar-brand",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            navigator.push(Route::Track {});
                        },
                        "Back to Tracker"
                    }
                    h1 { "Editorial" }
                }
                div { class: "topbar-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: in_flight,
                        onclick: retry,
                        "{refresh_label}"
                    }
                    ThemeToggle {}
                }
            }

            main { class: "content",
                match screen.read().clone() {
                    ViewState::Loading => rsx! {
                        div { class: "card editorial-loading",
                            div { class: "spinner" }
                            h3 { "Generating Editorial..." }
                            p { "Analyzing problem {parsed_id} and creating a comprehensive solution..." }
                        }
                    },
                    ViewState::Ready(vm) => rsx! {
                        ProblemInfoCard { info: vm.info.clone() }
                        if let Some(message) = vm.error.clone() {
                            div { class: "card editorial-error", role: "alert",
                                h3 { "Error Loading Editorial" }
                                p { "{message}" }
                                button {
                                    class: "btn btn-danger",
                                    disabled: in_flight,
                                    onclick: retry_banner,
                                    "Try Again"
                                }
                            }
                        } else {
                            article { class: "card editorial-body",
                                h2 { class: "editorial-heading", "Complete Editorial" }
                                for (index, section) in vm.sections.into_iter().enumerate() {
                                    match section {
                                        SectionVm::Prose(html) => rsx! {
                                            div { key: "{index}", class: "ed-prose", dangerous_inner_html: "{html}" }
                                        },
                                        SectionVm::Code(block) => rsx! {
                                            CodeBlock { key: "{index}", block: block, copied: copied }
                                        },
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ProblemInfoCard(info: ProblemInfoVm) -> Element {
    rsx! {
        section { class: "card problem-info",
            h2 { class: "problem-title", "{info.title}" }
            div { class: "problem-tags",
                span { class: "badge {info.difficulty_class}", "{info.difficulty}" }
                for topic in info.topics.iter() {
                    span { key: "{topic}", class: "badge badge-topic", "{topic}" }
                }
            }
            div { class: "problem-description",
                h3 { "Problem Description" }
                p { "{info.description}" }
            }
        }
    }
}

#[component]
fn CodeBlock(block: CodeBlockVm, copied: Signal<Option<usize>>) -> Element {
    let mut copied = copied;
    let id = block.id;
    let code = block.code.clone();
    let is_copied = *copied.read() == Some(id);

    let copy = move |_: MouseEvent| {
        let code = code.clone();
        spawn(async move {
            if !write_clipboard_text(&code).await {
                tracing::warn!(block = id, "copy to clipboard failed");
                return;
            }
            copied.set(Some(id));
            tokio::time::sleep(COPY_FEEDBACK).await;
            if *copied.peek() == Some(id) {
                copied.set(None);
            }
        });
    };

    let (copy_class, copy_label) = if is_copied {
        ("code-copy code-copy-done", "Copied!")
    } else {
        ("code-copy", "Copy")
    };
    let gutter_class = if block.has_gutter() {
        "code-body code-body-gutter"
    } else {
        "code-body"
    };

    rsx! {
        div { class: "code-block",
            div { class: "code-header",
                div { class: "code-dots",
                    span { class: "dot dot-red" }
                    span { class: "dot dot-yellow" }
                    span { class: "dot dot-green" }
                    span { class: "code-language", "{block.language}" }
                }
                button { class: "{copy_class}", onclick: copy, "{copy_label}" }
            }
            div { class: "{gutter_class}",
                if block.has_gutter() {
                    div { class: "code-gutter",
                        for number in block.line_numbers.iter() {
                            div { key: "{number}", "{number}" }
                        }
                    }
                }
                pre {
                    code { class: "language-{block.language}", "{block.code}" }
                }
            }
        }
    }
}

/// `/editorial` without a problem: ask for one.
#[component]
pub fn EditorialIndexView() -> Element {
    let navigator = use_navigator();
    rsx! {
        div { class: "page editorial",
            header { class: "topbar",
                div { class: "topbar-brand",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            navigator.push(Route::Track {});
                        },
                        "Back to Tracker"
                    }
                    h1 { "Editorial" }
                }
                div { class: "topbar-actions", ThemeToggle {} }
            }
            main { class: "content",
                section { class: "card",
                    h3 { "Which problem?" }
                    p { "Enter a problem number to generate its editorial." }
                    ProblemPicker {}
                }
            }
        }
    }
}
