use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "page not-found",
            h1 { "404" }
            p { "Page not found" }
            p { class: "not-found-path", "{path}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    navigator.push(Route::Root {});
                },
                "Go Home"
            }
        }
    }
}
