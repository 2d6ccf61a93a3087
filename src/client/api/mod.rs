pub mod account;
pub mod admin;
pub mod auth;
pub mod backup;
pub mod case;
pub mod database;
pub mod file;
pub mod network;
pub mod pagination;
pub mod request;
pub mod schedule;
pub mod server;

pub use pagination::{Paginated, PaginationMeta};
