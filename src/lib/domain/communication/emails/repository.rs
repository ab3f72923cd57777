//! Email repository module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use super::{
    errors::{GetEmailByIdError, GetEmailsError, SendEmailError},
    Email, EmailId, EmailWithAttachments, NewEmail, Pagination,
};

/// Email repository
#[async_trait]
pub trait EmailRepository: Clone + Send + Sync + 'static {
    /// Store an email and its attachments atomically, returning the new id
    async fn create_email(&self, email: &NewEmail) -> Result<EmailId, SendEmailError>;

    /// Get an email and its attachments, or `None` if no email has that id
    async fn get_email_by_id(
        &self,
        id: EmailId,
    ) -> Result<Option<EmailWithAttachments>, GetEmailByIdError>;

    /// Get a page of emails, newest first, without attachments
    async fn get_emails(&self, pagination: &Pagination) -> Result<Vec<Email>, GetEmailsError>;
}

#[cfg(test)]
mock! {
    pub EmailRepository {}

    impl Clone for EmailRepository {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl EmailRepository for EmailRepository {
        async fn create_email(&self, email: &NewEmail) -> Result<EmailId, SendEmailError>;
        async fn get_email_by_id(&self, id: EmailId) -> Result<Option<EmailWithAttachments>, GetEmailByIdError>;
        async fn get_emails(&self, pagination: &Pagination) -> Result<Vec<Email>, GetEmailsError>;
    }
}
