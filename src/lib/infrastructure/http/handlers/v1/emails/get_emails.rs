//! List sent emails

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::{
    domain::communication::emails::{EmailService, Pagination},
    infrastructure::http::{errors::ApiError, state::AppState},
};

use super::EmailResponse;

/// Paging of the email history
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetEmailsParams {
    /// Maximum number of emails to return, defaults to 50
    #[param(example = 50)]
    pub limit: Option<i64>,

    /// Number of emails to skip, defaults to 0
    #[param(example = 0)]
    pub offset: Option<i64>,
}

/// List the email history, newest first
#[utoipa::path(
    get,
    operation_id = "get_emails",
    tag = "Emails",
    path = "/api/v1/emails",
    params(GetEmailsParams),
    responses(
        (status = StatusCode::OK, description = "A page of sent emails", body = [EmailResponse]),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid pagination", body = ErrorResponse),
    )
)]
pub async fn handler<E: EmailService>(
    State(state): State<AppState<E>>,
    params: Result<Query<GetEmailsParams>, QueryRejection>,
) -> Result<Json<Vec<EmailResponse>>, ApiError> {
    let Query(params) = params?;

    let pagination = Pagination::new(params.limit, params.offset)?;

    let emails = state.emails.get_emails(&pagination).await?;

    Ok(Json(emails.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::{
        domain::communication::emails::{
            errors::GetEmailsError,
            tests::{email, MockEmailService},
            MessageFormat, DEFAULT_LIMIT, DEFAULT_OFFSET,
        },
        infrastructure::http::{
            errors::ErrorResponse, handlers::v1::emails::EmailResponse, router,
            state::test_state,
        },
    };

    #[tokio::test]
    async fn test_get_emails_defaults() -> TestResult {
        let mut emails = MockEmailService::new();

        emails
            .expect_get_emails()
            .times(1)
            .withf(|pagination| {
                pagination.limit() == DEFAULT_LIMIT && pagination.offset() == DEFAULT_OFFSET
            })
            .returning(|_| Ok(vec![email(2, "Second"), email(1, "First")]));

        let response = TestServer::new(router(test_state(Some(emails))))?
            .get("/api/v1/emails")
            .await;

        response.assert_status_ok();

        let json = response.json::<Vec<EmailResponse>>();

        assert_eq!(json.len(), 2);
        assert_eq!(json[0].id, 2);
        assert_eq!(json[0].subject, "Second");
        assert_eq!(json[0].from_email, "a@x.com");
        assert_eq!(json[0].message_format, MessageFormat::Plain);
        assert_eq!(json[0].reply_to_email, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_emails_passes_limit_and_offset() -> TestResult {
        let mut emails = MockEmailService::new();

        emails
            .expect_get_emails()
            .times(1)
            .withf(|pagination| pagination.limit() == 3 && pagination.offset() == 2)
            .returning(|_| Ok(vec![]));

        let response = TestServer::new(router(test_state(Some(emails))))?
            .get("/api/v1/emails")
            .add_query_param("limit", 3)
            .add_query_param("offset", 2)
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<EmailResponse>>(), vec![]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_emails_rejects_bad_pagination() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .get("/api/v1/emails")
            .add_query_param("limit", 0)
            .add_query_param("offset", -1)
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = response.json::<ErrorResponse>();
        let fields = json
            .fields
            .iter()
            .map(|field| field.field.as_str())
            .collect::<Vec<_>>();

        assert_eq!(fields, vec!["limit", "offset"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_emails_rejects_non_numeric_limit() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .get("/api/v1/emails")
            .add_query_param("limit", "many")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_emails_storage_failure() -> TestResult {
        let mut emails = MockEmailService::new();

        emails
            .expect_get_emails()
            .returning(|_| Err(GetEmailsError::UnknownError(anyhow!("database is locked"))));

        let response = TestServer::new(router(test_state(Some(emails))))?
            .get("/api/v1/emails")
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = response.json::<ErrorResponse>();

        assert_eq!(json.error, "An unknown error occurred, please try again");

        Ok(())
    }
}
