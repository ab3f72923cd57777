//! Email models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::communication::email_addresses::Contact;

use super::{Attachment, MessageFormat, NewAttachment};

/// The email id is zero or negative
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Email id must be a positive integer")]
pub struct InvalidEmailId;

/// Identity of a stored email
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(i64);

impl EmailId {
    /// Create an email id, rejecting anything that is not positive
    pub fn new(id: i64) -> Result<Self, InvalidEmailId> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(InvalidEmailId)
        }
    }

    /// The raw integer
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated send request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEmail {
    /// Sender
    pub from: Contact,

    /// Recipient
    pub to: Contact,

    /// Reply-to contact
    pub reply_to: Option<Contact>,

    /// Carbon copy recipient
    pub cc: Option<Contact>,

    /// Blind carbon copy recipient
    pub bcc: Option<Contact>,

    /// Subject line
    pub subject: String,

    /// Message body
    pub body: String,

    /// How `body` is to be rendered
    pub message_format: MessageFormat,

    /// Files sent with the email
    pub attachments: Vec<NewAttachment>,
}

/// A stored email
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email {
    /// Email ID
    pub id: EmailId,

    /// Sender
    pub from: Contact,

    /// Recipient
    pub to: Contact,

    /// Reply-to contact
    pub reply_to: Option<Contact>,

    /// Carbon copy recipient
    pub cc: Option<Contact>,

    /// Blind carbon copy recipient
    pub bcc: Option<Contact>,

    /// Subject line
    pub subject: String,

    /// Message body
    pub body: String,

    /// How `body` is to be rendered
    pub message_format: MessageFormat,

    /// When the email was sent, in UTC
    pub sent_at: Option<DateTime<Utc>>,

    /// Creation date in UTC
    pub created_at: DateTime<Utc>,
}

/// An email together with all of its attachments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailWithAttachments {
    /// The email
    pub email: Email,

    /// Attachments ordered by id
    pub attachments: Vec<Attachment>,
}
