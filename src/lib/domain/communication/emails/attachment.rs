//! Attachment models

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::EmailId;

/// Errors raised while validating an attachment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachmentError {
    /// Size is below zero
    #[error("Attachment size must be a non-negative integer")]
    NegativeSize,
}

/// An attachment to be stored alongside a new email
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAttachment {
    /// File name as chosen by the user
    pub filename: String,

    /// MIME type
    pub content_type: String,

    /// Size of the original file in bytes
    pub size: i64,

    /// Encoded file payload, stored as given
    pub file_data: String,
}

impl NewAttachment {
    /// Create a new attachment
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        size: i64,
        file_data: impl Into<String>,
    ) -> Result<Self, AttachmentError> {
        if size < 0 {
            return Err(AttachmentError::NegativeSize);
        }

        Ok(Self {
            filename: filename.into(),
            content_type: content_type.into(),
            size,
            file_data: file_data.into(),
        })
    }
}

/// A stored attachment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    /// Attachment ID
    pub id: i64,

    /// Owning email
    pub email_id: EmailId,

    /// File name
    pub filename: String,

    /// MIME type
    pub content_type: String,

    /// Size in bytes
    pub size: i64,

    /// Encoded file payload
    pub file_data: String,

    /// Creation date in UTC
    pub created_at: DateTime<Utc>,
}
