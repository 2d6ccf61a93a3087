//! Application API wrappers used by the admin area.

pub mod database_host;
pub mod location;
pub mod node;
pub mod server;
pub mod user;
