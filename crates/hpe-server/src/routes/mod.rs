//! HPE Routes
//!
//! - / - Community page (HTML)
//! - /api/strings - Localized page strings
//! - /api/profiles - Member listing and joining
//! - /api/profiles/:id/vote - Voting
//! - /api/graph - Affinity graph (nodes + overlap edges)

pub mod graph;
pub mod page;
pub mod profile;
pub mod swagger;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use hpe::DomainError;

/// Domain error rendered as an HTTP response
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        match self.0 {
            DomainError::CooldownActive { retry_after_secs } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
                message,
            )
                .into_response(),
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, message).into_response(),
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, message).into_response(),
            DomainError::Repository(_) | DomainError::ExternalService(_) => {
                tracing::warn!("Profile store failure: {}", message);
                (StatusCode::BAD_GATEWAY, message).into_response()
            }
        }
    }
}
