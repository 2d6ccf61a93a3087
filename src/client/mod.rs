pub mod api;
pub mod app;
pub mod component;
pub mod config;
pub mod constant;
pub mod hook;
pub mod model;
pub mod route;
pub mod router;
pub mod store;
pub mod util;
pub mod validation;

pub use app::App;
