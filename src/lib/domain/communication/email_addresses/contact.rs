//! Contacts: a display name paired with an email address

use thiserror::Error;

use super::{EmailAddress, EmailAddressError};

/// Errors raised while building a contact
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    /// Only one half of an optional contact was given
    #[error("Both name and email must be provided if either is specified")]
    Incomplete,

    /// The address part is not a valid email address
    #[error(transparent)]
    EmailAddress(#[from] EmailAddressError),
}

/// A sender or recipient
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    /// Display name, may be empty
    pub name: String,

    /// Email address
    pub email: EmailAddress,
}

impl Contact {
    /// Create a contact from an already validated address
    pub fn new(name: impl Into<String>, email: EmailAddress) -> Self {
        Self {
            name: name.into(),
            email,
        }
    }

    /// Build an optional contact (reply-to, cc, bcc).
    ///
    /// Empty strings count as missing; whitespace does not. Both halves missing yields `Ok(None)`,
    /// exactly one yields [`ContactError::Incomplete`].
    pub fn optional(name: Option<&str>, email: Option<&str>) -> Result<Option<Self>, ContactError> {
        let name = name.filter(|name| !name.is_empty());
        let email = email.filter(|email| !email.is_empty());

        match (name, email) {
            (None, None) => Ok(None),
            (Some(name), Some(email)) => Ok(Some(Self::new(name, EmailAddress::new(email)?))),
            _ => Err(ContactError::Incomplete),
        }
    }

    /// Rebuild a stored optional contact from its nullable columns
    pub fn from_columns(name: Option<String>, email: Option<String>) -> Option<Self> {
        match (name, email) {
            (Some(name), Some(email)) => Some(Self::new(name, EmailAddress::new_unchecked(&email))),
            _ => None,
        }
    }
}
