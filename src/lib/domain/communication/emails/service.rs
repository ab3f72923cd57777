//! Email service module

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

#[cfg(test)]
use mockall::mock;

use super::{
    errors::{GetEmailByIdError, GetEmailsError, SendEmailError},
    Email, EmailId, EmailRepository, EmailWithAttachments, NewEmail, Pagination,
};

/// Email service
#[async_trait]
pub trait EmailService: Clone + Send + Sync + 'static {
    /// Records a sent email together with its attachments.
    ///
    /// # Arguments
    /// * `email` - A reference to a validated [`NewEmail`].
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the new [`EmailId`] if the email and every
    /// attachment were stored, or an [`Err`] containing a [`SendEmailError`] if nothing was.
    async fn send_email(&self, email: &NewEmail) -> Result<EmailId, SendEmailError>;

    /// Retrieves an email and its attachments by ID.
    ///
    /// # Arguments
    /// * `id` - The [`EmailId`] of the email to retrieve.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing [`Some`] [`EmailWithAttachments`] if found,
    /// [`Ok`] containing [`None`] if no email has that ID,
    /// or an [`Err`] containing a [`GetEmailByIdError`] if the lookup failed.
    async fn get_email_by_id(
        &self,
        id: EmailId,
    ) -> Result<Option<EmailWithAttachments>, GetEmailByIdError>;

    /// Retrieves a page of the email history, most recently created first.
    async fn get_emails(&self, pagination: &Pagination) -> Result<Vec<Email>, GetEmailsError>;
}

#[cfg(test)]
mock! {
    pub EmailService {}

    impl Clone for EmailService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl EmailService for EmailService {
        async fn send_email(&self, email: &NewEmail) -> Result<EmailId, SendEmailError>;
        async fn get_email_by_id(&self, id: EmailId) -> Result<Option<EmailWithAttachments>, GetEmailByIdError>;
        async fn get_emails(&self, pagination: &Pagination) -> Result<Vec<Email>, GetEmailsError>;
    }
}

/// Email service implementation
#[derive(Debug, Clone)]
pub struct EmailServiceImpl<R>
where
    R: EmailRepository,
{
    repo: Arc<R>,
}

impl<R> EmailServiceImpl<R>
where
    R: EmailRepository,
{
    /// Create a new email service
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> EmailService for EmailServiceImpl<R>
where
    R: EmailRepository,
{
    async fn send_email(&self, email: &NewEmail) -> Result<EmailId, SendEmailError> {
        let id = self.repo.create_email(email).await?;

        info!(
            email_id = %id,
            attachments = email.attachments.len(),
            format = %email.message_format,
            "email sent"
        );

        Ok(id)
    }

    async fn get_email_by_id(
        &self,
        id: EmailId,
    ) -> Result<Option<EmailWithAttachments>, GetEmailByIdError> {
        let email = self.repo.get_email_by_id(id).await?;

        if email.is_none() {
            debug!(email_id = %id, "email not found");
        }

        Ok(email)
    }

    async fn get_emails(&self, pagination: &Pagination) -> Result<Vec<Email>, GetEmailsError> {
        self.repo.get_emails(pagination).await
    }
}
