//! Adapters: SQLite persistence and the HTTP transport

pub mod database;
pub mod http;
