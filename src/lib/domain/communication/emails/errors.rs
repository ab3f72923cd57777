//! Error types for sending and reading emails

use anyhow::anyhow;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when storing a sent email
#[derive(Debug, Error)]
pub enum SendEmailError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when fetching an email by id
#[derive(Debug, Error)]
pub enum GetEmailByIdError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when listing emails
#[derive(Debug, Error)]
pub enum GetEmailsError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<sqlx::Error> for SendEmailError {
    fn from(err: sqlx::Error) -> Self {
        debug!("sqlxError: {:?}", err);

        match err {
            sqlx::Error::Database(db_err) => SendEmailError::UnknownError(anyhow!(
                "Database rejected email: {}",
                db_err.message()
            )),
            _ => SendEmailError::UnknownError(anyhow!("Unknown database error: {:?}", err)),
        }
    }
}

impl From<sqlx::Error> for GetEmailByIdError {
    fn from(err: sqlx::Error) -> Self {
        GetEmailByIdError::UnknownError(anyhow!("Unknown database error: {:?}", err))
    }
}

impl From<sqlx::Error> for GetEmailsError {
    fn from(err: sqlx::Error) -> Self {
        GetEmailsError::UnknownError(anyhow!("Unknown database error: {:?}", err))
    }
}
