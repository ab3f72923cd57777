//! Database adapters

pub mod sqlite;
