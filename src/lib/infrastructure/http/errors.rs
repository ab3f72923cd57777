//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::communication::emails::{
    errors::{GetEmailByIdError, GetEmailsError},
    FieldError, InvalidEmailId, ValidationErrors,
};

/// A rejected input field
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct FieldErrorResponse {
    /// Path of the offending field
    #[schema(example = "from.email")]
    pub field: String,

    /// Why it was rejected
    #[schema(example = "Please provide a valid email address")]
    pub reason: String,
}

impl From<FieldError> for FieldErrorResponse {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field,
            reason: error.reason,
        }
    }
}

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The error message
    #[schema(example = "Internal server error")]
    pub error: String,

    /// Rejected fields, present for validation errors only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldErrorResponse>,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Internal server error")]
    pub message: String,

    /// Rejected fields
    #[serde(default)]
    pub fields: Vec<FieldErrorResponse>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            fields: vec![],
        }
    }

    /// Create a new unprocessable entity error
    pub fn new_422(message: &str) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
                fields: self.fields,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        unknown_error(&err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors.to_string();
        let fields: Vec<FieldError> = errors.into();

        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<InvalidEmailId> for ApiError {
    fn from(err: InvalidEmailId) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add("id", err.to_string());

        errors.into()
    }
}

impl From<GetEmailByIdError> for ApiError {
    fn from(err: GetEmailByIdError) -> Self {
        match err {
            GetEmailByIdError::UnknownError(err) => unknown_error(&err),
        }
    }
}

impl From<GetEmailsError> for ApiError {
    fn from(err: GetEmailsError) -> Self {
        match err {
            GetEmailsError::UnknownError(err) => unknown_error(&err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

/// Log the underlying error and answer with a generic 500
fn unknown_error(err: &anyhow::Error) -> ApiError {
    error!("unhandled error: {err:?}");

    ApiError::new_500("An unknown error occurred, please try again")
}
