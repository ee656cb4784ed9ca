//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateProfileRequest,
    // Graph models
    GraphEdgeResponse,
    GraphNodeResponse,
    GraphResponse,
    // Profile models
    ProfileDisplay,
    ProfileResponse,
    SharedTagsResponse,
    VoteResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Profile endpoints
        super::profile::list_profiles,
        super::profile::create_profile,
        super::profile::vote_profile,
        // Graph endpoints
        super::graph::get_graph,
    ),
    info(
        title = "Human Potential Exchange API",
        version = "0.1.0",
        description = "Identify, connect and activate human potential.\n\nMembers share strengths, aspirations and values; shared tags draw the affinity map.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Profile", description = "Profile - Members, joining and voting"),
        (name = "Graph", description = "Graph - Affinity map built from shared tags"),
    ),
    components(
        schemas(
            // Profile
            CreateProfileRequest,
            ProfileDisplay,
            ProfileResponse,
            VoteResponse,
            // Graph
            GraphNodeResponse,
            SharedTagsResponse,
            GraphEdgeResponse,
            GraphResponse,
        )
    ),
)]
pub struct ApiDoc;
