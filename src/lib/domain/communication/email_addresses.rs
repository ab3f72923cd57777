//! Email addresses module.

mod contact;
mod email_address;

pub use contact::{Contact, ContactError};
pub use email_address::{EmailAddress, EmailAddressError};
