pub mod flash;
pub mod server;
pub mod user;
