//! SQLite implementation of the EmailRepository trait

use anyhow::{Context, Error};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{query, query_as, FromRow};

use crate::{
    domain::communication::{
        email_addresses::{Contact, EmailAddress},
        emails::{
            errors::{GetEmailByIdError, GetEmailsError, SendEmailError},
            Attachment, Email, EmailId, EmailRepository, EmailWithAttachments, MessageFormat,
            NewEmail, Pagination,
        },
    },
    infrastructure::database::sqlite::SqliteDatabase,
};

const EMAIL_COLUMNS: &str = r#"
    id,
    from_name,
    from_email,
    to_name,
    to_email,
    reply_to_name,
    reply_to_email,
    cc_name,
    cc_email,
    bcc_name,
    bcc_email,
    subject,
    body,
    message_format,
    sent_at,
    created_at
"#;

#[derive(FromRow)]
struct EmailRecord {
    id: i64,
    from_name: String,
    from_email: String,
    to_name: String,
    to_email: String,
    reply_to_name: Option<String>,
    reply_to_email: Option<String>,
    cc_name: Option<String>,
    cc_email: Option<String>,
    bcc_name: Option<String>,
    bcc_email: Option<String>,
    subject: String,
    body: String,
    message_format: String,
    sent_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<EmailRecord> for Email {
    type Error = Error;

    fn try_from(record: EmailRecord) -> Result<Self, Self::Error> {
        Ok(Email {
            id: EmailId::new(record.id).context("stored email has an invalid id")?,
            from: Contact::new(
                record.from_name,
                EmailAddress::new_unchecked(&record.from_email),
            ),
            to: Contact::new(record.to_name, EmailAddress::new_unchecked(&record.to_email)),
            reply_to: Contact::from_columns(record.reply_to_name, record.reply_to_email),
            cc: Contact::from_columns(record.cc_name, record.cc_email),
            bcc: Contact::from_columns(record.bcc_name, record.bcc_email),
            subject: record.subject,
            body: record.body,
            message_format: record
                .message_format
                .parse::<MessageFormat>()
                .context("stored email has an unknown message format")?,
            sent_at: record.sent_at,
            created_at: record.created_at,
        })
    }
}

#[derive(FromRow)]
struct AttachmentRecord {
    id: i64,
    email_id: i64,
    filename: String,
    content_type: String,
    size: i64,
    file_data: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AttachmentRecord> for Attachment {
    type Error = Error;

    fn try_from(record: AttachmentRecord) -> Result<Self, Self::Error> {
        Ok(Attachment {
            id: record.id,
            email_id: EmailId::new(record.email_id)
                .context("stored attachment has an invalid email id")?,
            filename: record.filename,
            content_type: record.content_type,
            size: record.size,
            file_data: record.file_data,
            created_at: record.created_at,
        })
    }
}

#[async_trait]
impl EmailRepository for SqliteDatabase {
    async fn create_email(&self, email: &NewEmail) -> Result<EmailId, SendEmailError> {
        // no delivery step exists, so the email counts as sent once it is stored
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let id = query(
            r#"
            INSERT INTO emails (
                from_name, from_email, to_name, to_email,
                reply_to_name, reply_to_email, cc_name, cc_email, bcc_name, bcc_email,
                subject, body, message_format, sent_at, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&email.from.name)
        .bind(email.from.email.as_str())
        .bind(&email.to.name)
        .bind(email.to.email.as_str())
        .bind(email.reply_to.as_ref().map(|c| c.name.as_str()))
        .bind(email.reply_to.as_ref().map(|c| c.email.as_str()))
        .bind(email.cc.as_ref().map(|c| c.name.as_str()))
        .bind(email.cc.as_ref().map(|c| c.email.as_str()))
        .bind(email.bcc.as_ref().map(|c| c.name.as_str()))
        .bind(email.bcc.as_ref().map(|c| c.email.as_str()))
        .bind(&email.subject)
        .bind(&email.body)
        .bind(email.message_format.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for attachment in &email.attachments {
            query(
                r#"
                INSERT INTO attachments (email_id, filename, content_type, size, file_data, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(&attachment.filename)
            .bind(&attachment.content_type)
            .bind(attachment.size)
            .bind(&attachment.file_data)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(EmailId::new(id).context("database returned an invalid email id")?)
    }

    async fn get_email_by_id(
        &self,
        id: EmailId,
    ) -> Result<Option<EmailWithAttachments>, GetEmailByIdError> {
        let record = query_as::<_, EmailRecord>(&format!(
            "SELECT {EMAIL_COLUMNS} FROM emails WHERE id = ?"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        let attachments = query_as::<_, AttachmentRecord>(
            r#"
            SELECT id, email_id, filename, content_type, size, file_data, created_at
            FROM attachments
            WHERE email_id = ?
            ORDER BY id
            "#,
        )
        .bind(id.get())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Attachment::try_from)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(EmailWithAttachments {
            email: record.try_into()?,
            attachments,
        }))
    }

    async fn get_emails(&self, pagination: &Pagination) -> Result<Vec<Email>, GetEmailsError> {
        Ok(query_as::<_, EmailRecord>(&format!(
            "SELECT {EMAIL_COLUMNS} FROM emails ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Email::try_from)
        .collect::<Result<Vec<_>, _>>()?)
    }
}
