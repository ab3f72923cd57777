//! Shared test data

use chrono::Utc;

use crate::domain::communication::email_addresses::{Contact, EmailAddress};

use super::{Attachment, Email, EmailId, EmailWithAttachments, MessageFormat, NewAttachment, NewEmail};

/// A minimal send request: plain text, no optional contacts, no attachments
pub fn new_email(subject: &str) -> NewEmail {
    NewEmail {
        from: Contact::new("A", EmailAddress::new_unchecked("a@x.com")),
        to: Contact::new("B", EmailAddress::new_unchecked("b@x.com")),
        reply_to: None,
        cc: None,
        bcc: None,
        subject: subject.to_string(),
        body: "Bd".to_string(),
        message_format: MessageFormat::Plain,
        attachments: vec![],
    }
}

/// A send request with every optional field filled in
pub fn complete_new_email() -> NewEmail {
    NewEmail {
        reply_to: Some(Contact::new(
            "Reply Person",
            EmailAddress::new_unchecked("reply@example.com"),
        )),
        cc: Some(Contact::new(
            "CC Person",
            EmailAddress::new_unchecked("cc@example.com"),
        )),
        bcc: Some(Contact::new(
            "BCC Person",
            EmailAddress::new_unchecked("bcc@example.com"),
        )),
        body: "<p>This is HTML email content</p>".to_string(),
        message_format: MessageFormat::Html,
        attachments: vec![
            NewAttachment {
                filename: "test.txt".to_string(),
                content_type: "text/plain".to_string(),
                size: 1024,
                file_data: "VGVzdCBmaWxlIGNvbnRlbnQ=".to_string(),
            },
            NewAttachment {
                filename: "image.png".to_string(),
                content_type: "image/png".to_string(),
                size: 2048,
                file_data: "iVBORw0KGgo=".to_string(),
            },
        ],
        ..new_email("Complete Test Email")
    }
}

/// A stored email built from [`new_email`]
pub fn email(id: i64, subject: &str) -> Email {
    let now = Utc::now();
    let new_email = new_email(subject);

    Email {
        id: EmailId::new(id).expect("positive id"),
        from: new_email.from,
        to: new_email.to,
        reply_to: None,
        cc: None,
        bcc: None,
        subject: new_email.subject,
        body: new_email.body,
        message_format: new_email.message_format,
        sent_at: Some(now),
        created_at: now,
    }
}

/// A stored email with a single attachment
pub fn email_with_attachment(id: i64) -> EmailWithAttachments {
    let email = email(id, "S");

    EmailWithAttachments {
        attachments: vec![Attachment {
            id: 7,
            email_id: email.id,
            filename: "test.txt".to_string(),
            content_type: "text/plain".to_string(),
            size: 17,
            file_data: "VGVzdCBmaWxlIGNvbnRlbnQ=".to_string(),
            created_at: email.created_at,
        }],
        email,
    }
}
