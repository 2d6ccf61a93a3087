pub mod account;
pub mod admin;
pub mod api;
pub mod auth;
pub mod backup;
pub mod database;
pub mod file;
pub mod network;
pub mod schedule;
pub mod server;
