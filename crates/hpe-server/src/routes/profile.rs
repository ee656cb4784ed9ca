//! Profile Routes - Members, joining and voting
//!
//! HTTP handlers that delegate to ProfileService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};

use hpe::{NewProfile, Visitor};

use crate::models::{CreateProfileRequest, ListProfilesQuery, ProfileResponse, VoteResponse};
use crate::routes::ApiError;
use crate::AppState;

/// List all profiles
#[utoipa::path(
    get,
    path = "/api/profiles",
    params(ListProfilesQuery),
    responses(
        (status = 200, description = "List of all profiles", body = Vec<ProfileResponse>),
        (status = 502, description = "Profile store unavailable")
    ),
    tag = "Profile"
)]
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(query): Query<ListProfilesQuery>,
) -> Result<Json<Vec<ProfileResponse>>, ApiError> {
    let profiles = state
        .profile_service
        .list(query.order.unwrap_or_default())
        .await?;

    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

/// Join the network
#[utoipa::path(
    post,
    path = "/api/profiles",
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = ProfileResponse),
        (status = 400, description = "Invalid profile"),
        (status = 429, description = "Submission cooldown active"),
        (status = 502, description = "Profile store unavailable")
    ),
    tag = "Profile"
)]
pub async fn create_profile(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let new_profile = NewProfile::try_from(payload)?;
    let profile = state.profile_service.join(visitor, new_profile).await?;

    Ok((StatusCode::CREATED, Json(profile.into())))
}

/// Vote for a profile
#[utoipa::path(
    post,
    path = "/api/profiles/{id}/vote",
    params(
        ("id" = i64, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Vote counted", body = VoteResponse),
        (status = 429, description = "Already voted for this profile recently"),
        (status = 502, description = "Profile store unavailable")
    ),
    tag = "Profile"
)]
pub async fn vote_profile(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
    Path(id): Path<i64>,
) -> Result<Json<VoteResponse>, ApiError> {
    state.profile_service.vote(visitor, id).await?;

    Ok(Json(VoteResponse {
        status: "ok".to_string(),
        profile_id: id,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/profiles", get(list_profiles).post(create_profile))
        .route("/api/profiles/:id/vote", post(vote_profile))
}
