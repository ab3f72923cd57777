//! Version 1 of the JSON API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::communication::emails::EmailService,
    infrastructure::http::{
        open_api::{self, ApiDocs},
        state::AppState,
    },
};

pub mod emails;
pub mod healthcheck;

/// Routes served under `/api/v1`. Send requests may be up to `body_limit` bytes.
pub fn router<E: EmailService>(body_limit: usize) -> Router<AppState<E>> {
    Router::new()
        .route("/", get(open_api::page_handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/healthcheck", get(healthcheck::handler::<E>))
        .route(
            "/emails",
            post(emails::send_email::handler::<E>)
                .layer(DefaultBodyLimit::max(body_limit))
                .get(emails::get_emails::handler::<E>),
        )
        .route("/emails/:id", get(emails::get_email_by_id::handler::<E>))
}
