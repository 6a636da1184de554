use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator};

use crate::context::use_ui_state;
use crate::views::{AuthView, EditorialIndexView, EditorialView, NotFoundView, TrackerView};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", RootRedirect)] Root {},
    #[layout(AnonymousOnly)]
        #[route("/authentication", AuthView)] Authentication {},
    #[end_layout]
    #[layout(AuthenticatedOnly)]
        #[route("/track", TrackerView)] Track {},
        #[route("/editorial", EditorialIndexView)] EditorialIndex {},
        #[route("/editorial/:problem_id", EditorialView)] Editorial { problem_id: String },
    #[end_layout]
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    /// Where `/` leads for the current session.
    #[must_use]
    pub fn home(authenticated: bool) -> Self {
        if authenticated {
            Self::Track {}
        } else {
            Self::Authentication {}
        }
    }
}

#[component]
fn RootRedirect() -> Element {
    let ui = use_ui_state();
    let navigator = use_navigator();
    use_effect(move || {
        let target = Route::home(ui.session.read().is_authenticated());
        navigator.replace(target);
    });
    rsx! {}
}

#[component]
fn AnonymousOnly() -> Element {
    let ui = use_ui_state();
    let navigator = use_navigator();
    let authenticated = ui.session.read().is_authenticated();
    use_effect(move || {
        if ui.session.read().is_authenticated() {
            navigator.replace(Route::Track {});
        }
    });
    if authenticated {
        return rsx! {};
    }
    rsx! { Outlet::<Route> {} }
}

#[component]
fn AuthenticatedOnly() -> Element {
    let ui = use_ui_state();
    let navigator = use_navigator();
    let authenticated = ui.session.read().is_authenticated();
    use_effect(move || {
        if !ui.session.read().is_authenticated() {
            navigator.replace(Route::Authentication {});
        }
    });
    if !authenticated {
        return rsx! {};
    }
    rsx! { Outlet::<Route> {} }
}
