//! Email history handlers and their shared response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::communication::{
    email_addresses::Contact,
    emails::{Attachment, Email, EmailWithAttachments, MessageFormat},
};

pub mod get_email_by_id;
pub mod get_emails;
pub mod send_email;

/// A stored email
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailResponse {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Sender")]
    pub from_name: String,

    #[schema(example = "sender@example.com")]
    pub from_email: String,

    #[schema(example = "Recipient")]
    pub to_name: String,

    #[schema(example = "recipient@example.com")]
    pub to_email: String,

    pub reply_to_name: Option<String>,
    pub reply_to_email: Option<String>,
    pub cc_name: Option<String>,
    pub cc_email: Option<String>,
    pub bcc_name: Option<String>,
    pub bcc_email: Option<String>,

    #[schema(example = "Hello")]
    pub subject: String,

    #[schema(example = "Hello there")]
    pub body: String,

    pub message_format: MessageFormat,

    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

fn split_contact(contact: Option<Contact>) -> (Option<String>, Option<String>) {
    match contact {
        Some(contact) => (Some(contact.name), Some(contact.email.into())),
        None => (None, None),
    }
}

impl From<Email> for EmailResponse {
    fn from(email: Email) -> Self {
        let (reply_to_name, reply_to_email) = split_contact(email.reply_to);
        let (cc_name, cc_email) = split_contact(email.cc);
        let (bcc_name, bcc_email) = split_contact(email.bcc);

        Self {
            id: email.id.get(),
            from_name: email.from.name,
            from_email: email.from.email.into(),
            to_name: email.to.name,
            to_email: email.to.email.into(),
            reply_to_name,
            reply_to_email,
            cc_name,
            cc_email,
            bcc_name,
            bcc_email,
            subject: email.subject,
            body: email.body,
            message_format: email.message_format,
            sent_at: email.sent_at,
            created_at: email.created_at,
        }
    }
}

/// A stored attachment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttachmentResponse {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub email_id: i64,

    #[schema(example = "notes.txt")]
    pub filename: String,

    #[schema(example = "text/plain")]
    pub content_type: String,

    /// Size of the original file in bytes
    #[schema(example = 17)]
    pub size: i64,

    /// Base64 payload
    #[schema(example = "VGVzdCBmaWxlIGNvbnRlbnQ=")]
    pub file_data: String,

    pub created_at: DateTime<Utc>,
}

impl From<Attachment> for AttachmentResponse {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id,
            email_id: attachment.email_id.get(),
            filename: attachment.filename,
            content_type: attachment.content_type,
            size: attachment.size,
            file_data: attachment.file_data,
            created_at: attachment.created_at,
        }
    }
}

/// A stored email with its attachments
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailWithAttachmentsResponse {
    #[serde(flatten)]
    pub email: EmailResponse,

    pub attachments: Vec<AttachmentResponse>,
}

impl From<EmailWithAttachments> for EmailWithAttachmentsResponse {
    fn from(email: EmailWithAttachments) -> Self {
        Self {
            email: email.email.into(),
            attachments: email.attachments.into_iter().map(Into::into).collect(),
        }
    }
}
