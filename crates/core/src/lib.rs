#![forbid(unsafe_code)]

pub mod auth;
pub mod editorial;
pub mod model;
pub mod time;

pub use time::Clock;
