mod scripts;
mod view;

pub use view::{EditorialIndexView, EditorialView};
