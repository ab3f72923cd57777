//! Application state module

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::communication::emails::EmailService;

use super::DEFAULT_BODY_LIMIT;

/// Global application state
#[derive(Clone)]
pub struct AppState<E: EmailService> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// Email service
    pub emails: Arc<E>,

    /// Largest accepted send request body, in bytes
    pub body_limit: usize,
}

/// Implementation of the application state
impl<E> AppState<E>
where
    E: EmailService,
{
    /// Create a new application state
    pub fn new(emails: E) -> Self {
        Self {
            start_time: Utc::now(),
            emails: Arc::new(emails),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Override the send request body limit
    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}

impl<E> fmt::Debug for AppState<E>
where
    E: EmailService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("emails", &"EmailService")
            .field("body_limit", &self.body_limit)
            .finish()
    }
}

#[cfg(test)]
use crate::domain::communication::emails::tests::MockEmailService;

#[cfg(test)]
pub fn test_state(emails: Option<MockEmailService>) -> AppState<MockEmailService> {
    let emails = emails
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockEmailService::new()));

    AppState {
        start_time: Utc::now(),
        emails,
        body_limit: DEFAULT_BODY_LIMIT,
    }
}
