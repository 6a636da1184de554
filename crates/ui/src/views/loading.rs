use dioxus::prelude::*;

/// Shown while the stored session is restored.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "spinner" }
            p { "Loading..." }
        }
    }
}
