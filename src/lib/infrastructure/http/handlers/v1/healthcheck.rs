//! Health check handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::communication::emails::EmailService,
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// The health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthcheckResponse {
    /// Always `ok` while the server is answering
    #[schema(example = "ok")]
    pub status: String,

    /// The current server time
    pub timestamp: DateTime<Utc>,

    /// The uptime of the application in seconds
    #[schema(example = 123)]
    pub uptime: i64,
}

/// Check that the server is up
#[utoipa::path(
    get,
    operation_id = "healthcheck",
    tag = "System",
    path = "/api/v1/healthcheck",
    responses(
        (status = StatusCode::OK, description = "Server is healthy", body = HealthcheckResponse),
    )
)]
pub async fn handler<E: EmailService>(
    State(state): State<AppState<E>>,
) -> Result<Json<HealthcheckResponse>, ApiError> {
    let timestamp = Utc::now();
    let uptime = timestamp.timestamp() - state.start_time.timestamp();

    Ok(Json(HealthcheckResponse {
        status: "ok".to_string(),
        timestamp,
        uptime,
    }))
}
