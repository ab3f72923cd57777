//! Email composition and history

pub mod email_addresses;
pub mod emails;
