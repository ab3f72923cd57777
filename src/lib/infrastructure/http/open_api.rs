//! OpenAPI document and its browsable reference page

use askama::Template;
use utoipa::OpenApi;

use crate::{
    domain::communication::emails::MessageFormat,
    infrastructure::http::{
        errors::{ErrorResponse, FieldErrorResponse},
        handlers::v1::*,
    },
};

/// Where the OpenAPI document is served
pub const OPENAPI_URL: &str = "/api/v1/openapi.json";

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Mail Outbox"),
    paths(
        emails::send_email::handler,
        emails::get_emails::handler,
        emails::get_email_by_id::handler,
        healthcheck::handler
    ),
    components(schemas(
        emails::send_email::ContactBody,
        emails::send_email::OptionalContactBody,
        emails::send_email::AttachmentBody,
        emails::send_email::SendEmailBody,
        emails::send_email::SendEmailResponse,
        emails::EmailResponse,
        emails::AttachmentResponse,
        emails::EmailWithAttachmentsResponse,
        healthcheck::HealthcheckResponse,
        MessageFormat,
        ErrorResponse,
        FieldErrorResponse,
    ))
)]
pub struct ApiDocs;

/// Stoplight Elements view of [`ApiDocs`]
#[derive(Debug, Template)]
#[template(path = "api_docs.html")]
pub struct ApiDocsPage {
    title: String,
    spec_url: &'static str,
}

/// Render the API reference page
pub async fn page_handler() -> ApiDocsPage {
    ApiDocsPage {
        title: ApiDocs::openapi().info.title,
        spec_url: OPENAPI_URL,
    }
}
