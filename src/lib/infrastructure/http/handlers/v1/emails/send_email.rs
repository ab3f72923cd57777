//! Send email handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    domain::communication::{
        email_addresses::{Contact, EmailAddress},
        emails::{EmailService, MessageFormat, NewAttachment, NewEmail, ValidationErrors},
    },
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// A required contact
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactBody {
    #[schema(example = "Sender")]
    pub name: String,

    #[schema(example = "sender@example.com")]
    pub email: String,
}

/// An optional contact; give both halves or neither
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct OptionalContactBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A file sent with the email
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AttachmentBody {
    #[schema(example = "notes.txt")]
    pub filename: String,

    #[schema(example = "text/plain")]
    pub content_type: String,

    /// Size of the original file in bytes
    #[schema(example = 17)]
    pub size: i64,

    /// Base64 payload without a `data:` prefix
    #[schema(example = "VGVzdCBmaWxlIGNvbnRlbnQ=")]
    pub file_data: String,
}

/// Send email request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailBody {
    pub from: ContactBody,
    pub to: ContactBody,
    pub reply_to: Option<OptionalContactBody>,
    pub cc: Option<OptionalContactBody>,
    pub bcc: Option<OptionalContactBody>,

    #[schema(example = "Hello")]
    pub subject: String,

    #[schema(example = "Hello there")]
    pub body: String,

    /// One of `plain` (default), `html` or `rich`
    #[schema(example = "plain")]
    pub message_format: Option<String>,

    #[serde(default)]
    pub attachments: Vec<AttachmentBody>,
}

fn required_contact(
    errors: &mut ValidationErrors,
    field: &str,
    body: ContactBody,
) -> Option<Contact> {
    let email = errors.check(format!("{field}.email"), EmailAddress::new(&body.email))?;

    Some(Contact::new(body.name, email))
}

fn optional_contact(
    errors: &mut ValidationErrors,
    field: &str,
    body: Option<OptionalContactBody>,
) -> Option<Contact> {
    let body = body.unwrap_or_default();

    errors
        .check(
            field,
            Contact::optional(body.name.as_deref(), body.email.as_deref()),
        )
        .flatten()
}

impl TryFrom<SendEmailBody> for NewEmail {
    type Error = ValidationErrors;

    fn try_from(body: SendEmailBody) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        let from = required_contact(&mut errors, "from", body.from);
        let to = required_contact(&mut errors, "to", body.to);
        let reply_to = optional_contact(&mut errors, "reply_to", body.reply_to);
        let cc = optional_contact(&mut errors, "cc", body.cc);
        let bcc = optional_contact(&mut errors, "bcc", body.bcc);

        let message_format = match body.message_format.as_deref() {
            Some(raw) => errors.check("message_format", raw.parse::<MessageFormat>()),
            None => Some(MessageFormat::default()),
        };

        let attachments = body
            .attachments
            .into_iter()
            .enumerate()
            .filter_map(|(index, attachment)| {
                errors.check(
                    format!("attachments[{index}].size"),
                    NewAttachment::new(
                        attachment.filename,
                        attachment.content_type,
                        attachment.size,
                        attachment.file_data,
                    ),
                )
            })
            .collect::<Vec<_>>();

        match (from, to, message_format) {
            (Some(from), Some(to), Some(message_format)) if errors.is_empty() => Ok(NewEmail {
                from,
                to,
                reply_to,
                cc,
                bcc,
                subject: body.subject,
                body: body.body,
                message_format,
                attachments,
            }),
            _ => Err(errors),
        }
    }
}

/// Send email response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailResponse {
    pub success: bool,

    #[schema(example = "Email sent successfully")]
    pub message: String,

    /// Present on success only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub email_id: Option<i64>,
}

/// Send an email and record it in the history
#[utoipa::path(
    post,
    operation_id = "send_email",
    tag = "Emails",
    path = "/api/v1/emails",
    request_body = SendEmailBody,
    responses(
        (status = StatusCode::CREATED, description = "Email sent", body = SendEmailResponse),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Unprocessable entity", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Email could not be stored", body = SendEmailResponse, example = json!({"success": false, "message": "Failed to send email"})),
    )
)]
pub async fn handler<E: EmailService>(
    State(state): State<AppState<E>>,
    request: Result<Json<SendEmailBody>, JsonRejection>,
) -> Result<(StatusCode, Json<SendEmailResponse>), ApiError> {
    let Json(request) = request?;

    let new_email: NewEmail = request.try_into()?;

    match state.emails.send_email(&new_email).await {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(SendEmailResponse {
                success: true,
                message: "Email sent successfully".to_string(),
                email_id: Some(id.get()),
            }),
        )),
        Err(err) => {
            error!("failed to send email: {err:?}");

            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendEmailResponse {
                    success: false,
                    message: "Failed to send email".to_string(),
                    email_id: None,
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::communication::emails::{
            errors::SendEmailError,
            tests::{complete_new_email, new_email, MockEmailService},
            EmailId, MessageFormat, NewEmail,
        },
        infrastructure::http::{
            errors::ErrorResponse,
            handlers::v1::emails::send_email::{SendEmailBody, SendEmailResponse},
            router,
            state::test_state,
        },
    };

    fn minimal_body() -> serde_json::Value {
        json!({
            "from": { "name": "A", "email": "a@x.com" },
            "to": { "name": "B", "email": "b@x.com" },
            "subject": "S",
            "body": "Bd",
            "message_format": "plain",
            "attachments": []
        })
    }

    fn complete_body() -> serde_json::Value {
        json!({
            "from": { "name": "A", "email": "a@x.com" },
            "to": { "name": "B", "email": "b@x.com" },
            "reply_to": { "name": "Reply Person", "email": "reply@example.com" },
            "cc": { "name": "CC Person", "email": "cc@example.com" },
            "bcc": { "name": "BCC Person", "email": "bcc@example.com" },
            "subject": "Complete Test Email",
            "body": "<p>This is HTML email content</p>",
            "message_format": "html",
            "attachments": [
                {
                    "filename": "test.txt",
                    "content_type": "text/plain",
                    "size": 1024,
                    "file_data": "VGVzdCBmaWxlIGNvbnRlbnQ="
                },
                {
                    "filename": "image.png",
                    "content_type": "image/png",
                    "size": 2048,
                    "file_data": "iVBORw0KGgo="
                }
            ]
        })
    }

    fn parse(value: serde_json::Value) -> SendEmailBody {
        serde_json::from_value(value).expect("valid request body")
    }

    #[test]
    fn test_body_converts_to_new_email() {
        let new_email: NewEmail = parse(complete_body()).try_into().expect("valid email");

        assert_eq!(new_email, complete_new_email());
    }

    #[test]
    fn test_missing_format_and_attachments_use_defaults() {
        let mut body = minimal_body();
        if let Some(body) = body.as_object_mut() {
            body.remove("message_format");
            body.remove("attachments");
        }

        let new_email: NewEmail = parse(body).try_into().expect("valid email");

        assert_eq!(new_email.message_format, MessageFormat::Plain);
        assert!(new_email.attachments.is_empty());
    }

    #[test]
    fn test_optional_contact_needs_both_halves() {
        for contact in [
            json!({ "name": "Only Name" }),
            json!({ "email": "only@example.com" }),
            json!({ "name": "", "email": "only@example.com" }),
        ] {
            let mut body = minimal_body();
            body["cc"] = contact;

            let errors = NewEmail::try_from(parse(body)).expect_err("half a contact");

            assert_eq!(errors.errors().len(), 1);
            assert_eq!(errors.errors()[0].field, "cc");
            assert_eq!(
                errors.errors()[0].reason,
                "Both name and email must be provided if either is specified"
            );
        }
    }

    #[test]
    fn test_empty_optional_contact_is_absent() {
        let mut body = minimal_body();
        body["bcc"] = json!({ "name": "", "email": "" });

        let new_email: NewEmail = parse(body).try_into().expect("valid email");

        assert_eq!(new_email.bcc, None);
    }

    #[test]
    fn test_blank_optional_contact_name_is_kept() {
        let mut body = minimal_body();
        body["cc"] = json!({ "name": " ", "email": "cc@x.com" });

        let new_email: NewEmail = parse(body).try_into().expect("valid email");

        assert_eq!(new_email.cc.map(|cc| cc.name), Some(" ".to_string()));
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let mut body = minimal_body();
        body["from"]["email"] = json!("not an email");
        body["reply_to"] = json!({ "name": "R", "email": "r@@example.com" });
        body["message_format"] = json!("markdown");
        body["attachments"] = json!([
            { "filename": "a", "content_type": "text/plain", "size": 1, "file_data": "" },
            { "filename": "b", "content_type": "text/plain", "size": -1, "file_data": "" }
        ]);

        let errors = NewEmail::try_from(parse(body)).expect_err("invalid fields");
        let fields = errors
            .errors()
            .iter()
            .map(|error| error.field.as_str())
            .collect::<Vec<_>>();

        assert_eq!(
            fields,
            vec!["from.email", "reply_to", "message_format", "attachments[1].size"]
        );
    }

    #[tokio::test]
    async fn test_send_email_success() -> TestResult {
        let mut emails = MockEmailService::new();
        let expected = new_email("S");

        emails
            .expect_send_email()
            .times(1)
            .withf(move |email| email == &expected)
            .returning(|_| Ok(EmailId::new(1).expect("positive id")));

        let response = TestServer::new(router(test_state(Some(emails))))?
            .post("/api/v1/emails")
            .json(&minimal_body())
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);

        let json = response.json::<SendEmailResponse>();

        assert!(json.success);
        assert_eq!(json.message, "Email sent successfully");
        assert_eq!(json.email_id, Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_validation_error() -> TestResult {
        let mut body = minimal_body();
        body["to"]["email"] = json!("nope");

        let response = TestServer::new(router(test_state(None)))?
            .post("/api/v1/emails")
            .json(&body)
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = response.json::<ErrorResponse>();

        assert_eq!(json.fields.len(), 1);
        assert_eq!(json.fields[0].field, "to.email");
        assert_eq!(json.fields[0].reason, "Please provide a valid email address");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_missing_required_field() -> TestResult {
        let mut body = minimal_body();
        if let Some(body) = body.as_object_mut() {
            body.remove("subject");
        }

        let response = TestServer::new(router(test_state(None)))?
            .post("/api/v1/emails")
            .json(&body)
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_storage_failure() -> TestResult {
        let mut emails = MockEmailService::new();

        emails
            .expect_send_email()
            .times(1)
            .returning(|_| Err(SendEmailError::UnknownError(anyhow!("database is locked"))));

        let response = TestServer::new(router(test_state(Some(emails))))?
            .post("/api/v1/emails")
            .json(&minimal_body())
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = response.json::<serde_json::Value>();

        assert_eq!(
            json,
            json!({ "success": false, "message": "Failed to send email" })
        );

        Ok(())
    }
}
