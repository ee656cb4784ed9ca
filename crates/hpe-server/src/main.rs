use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use shuttle_runtime::SecretStore;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod html;
mod locale;
mod models;
mod routes;
mod services;
#[cfg(test)]
mod testing;
mod visitor;

use adapters::{InMemoryCooldownLedger, SupabaseProfileRepository};
use application::ProfileService;
use config::Config;
use hpe::{CooldownLedger, ProfileRepository};
use services::sweeper;

/// Type alias for the profile service over the runtime adapters
pub type AppProfileService = ProfileService<dyn ProfileRepository, dyn CooldownLedger>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<AppProfileService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Human Potential Exchange is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble every route with its middleware
pub fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::page::router())
        .merge(routes::profile::router())
        .merge(routes::graph::router())
        .layer(middleware::from_fn(visitor::visitor_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(#[shuttle_runtime::Secrets] secrets: SecretStore) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🌱 Human Potential Exchange initializing...");

    // Local runs may keep settings in a .env file
    dotenvy::dotenv().ok();

    let config = Config::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))?;

    let repo = SupabaseProfileRepository::new(&config.supabase_url, &config.supabase_key)
        .map_err(|e| anyhow::anyhow!("Failed to create Supabase client: {e}"))?;
    tracing::info!("🗄️  Profile store: {}", config.supabase_url);

    let repo: Arc<dyn ProfileRepository> = Arc::new(repo);
    let ledger: Arc<dyn CooldownLedger> = Arc::new(InMemoryCooldownLedger::new());
    let profile_service = Arc::new(ProfileService::new(repo, ledger, config.cooldowns));

    tracing::info!(
        "⏳ Cooldowns: submission {:?}, vote {:?}",
        config.cooldowns.submission,
        config.cooldowns.vote
    );

    if let Some(_handle) = sweeper::maybe_start_sweeper(profile_service.clone(), config.sweep_interval)
    {
        tracing::info!("🧹 Cooldown sweeper started");
    } else {
        tracing::warn!("⚠️  Cooldown sweeper disabled (HPE_SWEEP_INTERVAL_SECS=0)");
    }

    let router = build_router(AppState { profile_service });

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Human Potential Exchange ready");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::testing::{test_app, FakeProfileRepository};

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app(Arc::new(FakeProfileRepository::default()));

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_openapi_served() {
        let app = test_app(Arc::new(FakeProfileRepository::default()));

        let response = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
