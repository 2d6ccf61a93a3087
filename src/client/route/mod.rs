pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod server;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
