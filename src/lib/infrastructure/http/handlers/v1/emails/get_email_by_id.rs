//! Get email by ID

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::{
    domain::communication::emails::{EmailId, EmailService},
    infrastructure::http::{errors::ApiError, state::AppState},
};

use super::EmailWithAttachmentsResponse;

/// Get a sent email and its attachments. Answers `null` when no email has the ID.
#[utoipa::path(
    get,
    operation_id = "get_email_by_id",
    tag = "Emails",
    path = "/api/v1/emails/{id}",
    params(
        ("id" = i64, Path, description = "Email ID", example = 1),
    ),
    responses(
        (status = StatusCode::OK, description = "The email, or null if it does not exist", body = EmailWithAttachmentsResponse),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid ID", body = ErrorResponse),
    )
)]
pub async fn handler<E: EmailService>(
    State(state): State<AppState<E>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Option<EmailWithAttachmentsResponse>>, ApiError> {
    let Path(id) = id?;

    let id = EmailId::new(id)?;

    let email = state.emails.get_email_by_id(id).await?;

    Ok(Json(email.map(Into::into)))
}
