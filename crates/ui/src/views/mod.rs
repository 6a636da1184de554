mod auth;
mod editorial;
mod loading;
mod not_found;
mod state;
mod tracker;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::AuthView;
pub use editorial::{EditorialIndexView, EditorialView};
pub use loading::LoadingScreen;
pub use not_found::NotFoundView;
pub use state::ViewState;
pub use tracker::{ProblemPicker, ThemeToggle, TrackerView};
