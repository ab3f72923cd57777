//! Sent email history: models, validation, storage contract and service.

mod attachment;
mod email;
mod message_format;
mod pagination;
mod repository;
mod service;
mod validation;

#[cfg(test)]
mod fixtures;

pub mod errors;

pub use attachment::{Attachment, AttachmentError, NewAttachment};
pub use email::{Email, EmailId, EmailWithAttachments, InvalidEmailId, NewEmail};
pub use message_format::{MessageFormat, MessageFormatError};
pub use pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use repository::EmailRepository;
pub use service::{EmailService, EmailServiceImpl};
pub use validation::{FieldError, ValidationErrors};

#[cfg(test)]
pub mod tests {
    pub use super::fixtures::*;
    pub use super::repository::MockEmailRepository;
    pub use super::service::MockEmailService;
}
