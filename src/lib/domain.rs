//! Domain types, services and repository contracts

pub mod communication;
