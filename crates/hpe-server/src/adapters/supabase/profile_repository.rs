//! Supabase implementation of ProfileRepository
//!
//! Talks to the PostgREST endpoint of a Supabase project using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use hpe::{DomainError, NewProfile, Profile, ProfileId, ProfileOrder, ProfileRepository, StoredTags};

const TABLE: &str = "profiles";
const INCREMENT_VOTE_RPC: &str = "increment_vote";

/// Supabase implementation of ProfileRepository
pub struct SupabaseProfileRepository {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseProfileRepository {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("hpe-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                DomainError::ExternalService(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, function)
    }

    /// Attach the project key the way supabase-js does
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Supabase unreachable: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Supabase returned {}: {}", status, body);
            return Err(DomainError::ExternalService(format!(
                "Supabase error ({}): {}",
                status, body
            )));
        }

        Ok(response)
    }
}

/// Internal row type for PostgREST mapping
#[derive(Deserialize)]
struct ProfileRow {
    id: ProfileId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    strengths: serde_json::Value,
    #[serde(default)]
    aspirations: serde_json::Value,
    #[serde(default)]
    values: serde_json::Value,
    #[serde(default)]
    votes: Option<i64>,
    #[serde(default)]
    created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            name: row.name.unwrap_or_default(),
            strengths: StoredTags::from_value(row.strengths),
            aspirations: StoredTags::from_value(row.aspirations),
            values: StoredTags::from_value(row.values),
            votes: row.votes.unwrap_or(0).max(0),
            created_at: row.created_at,
        }
    }
}

#[derive(Serialize)]
struct InsertRow<'a> {
    name: &'a str,
    strengths: &'a [String],
    aspirations: &'a [String],
    values: &'a [String],
}

#[derive(Serialize)]
struct IncrementVoteArgs {
    row_id: ProfileId,
}

#[async_trait]
impl ProfileRepository for SupabaseProfileRepository {
    async fn find_all(&self, order: ProfileOrder) -> Result<Vec<Profile>, DomainError> {
        let mut query = vec![("select", "*")];
        if order == ProfileOrder::Votes {
            query.push(("order", "votes.desc"));
        }

        tracing::debug!("Fetching profiles (order: {})", order);

        let rows: Vec<ProfileRow> = self
            .send(self.client.get(self.table_url()).query(&query))
            .await?
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Invalid profiles payload: {e}")))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, profile: &NewProfile) -> Result<Profile, DomainError> {
        let body = [InsertRow {
            name: &profile.name,
            strengths: &profile.strengths,
            aspirations: &profile.aspirations,
            values: &profile.values,
        }];

        let rows: Vec<ProfileRow> = self
            .send(
                self.client
                    .post(self.table_url())
                    .header("Prefer", "return=representation")
                    .json(&body),
            )
            .await?
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Invalid insert payload: {e}")))?;

        rows.into_iter()
            .next()
            .map(Into::into)
            .ok_or_else(|| DomainError::Repository("Insert returned no row".to_string()))
    }

    async fn increment_vote(&self, id: ProfileId) -> Result<(), DomainError> {
        tracing::debug!("Calling {} for profile {}", INCREMENT_VOTE_RPC, id);

        self.send(
            self.client
                .post(self.rpc_url(INCREMENT_VOTE_RPC))
                .json(&IncrementVoteArgs { row_id: id }),
        )
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    const KEY: &str = "test-key";

    type Log = Arc<Mutex<Vec<String>>>;

    fn authorized(headers: &HeaderMap) -> bool {
        headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(KEY)
            && headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                == Some("Bearer test-key")
    }

    async fn list(
        State(log): State<Log>,
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Json<Value>, StatusCode> {
        if !authorized(&headers) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        log.lock().unwrap().push(format!(
            "select={} order={}",
            params.get("select").cloned().unwrap_or_default(),
            params.get("order").cloned().unwrap_or_default()
        ));
        Ok(Json(json!([
            {"id": 1, "name": "Ada", "strengths": ["logic"], "aspirations": "[\"build\"]",
             "values": "freedom; care", "votes": 4},
            {"id": 2, "name": "Lin", "strengths": null, "votes": null}
        ])))
    }

    async fn insert(
        State(log): State<Log>,
        headers: HeaderMap,
        Json(rows): Json<Vec<Value>>,
    ) -> Result<(StatusCode, Json<Value>), StatusCode> {
        if !authorized(&headers) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        let prefer = headers
            .get("Prefer")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        log.lock().unwrap().push(format!("insert prefer={prefer}"));

        let mut row = rows[0].clone();
        row["id"] = json!(9);
        row["votes"] = json!(0);
        Ok((StatusCode::CREATED, Json(json!([row]))))
    }

    async fn increment(
        State(log): State<Log>,
        headers: HeaderMap,
        Json(args): Json<Value>,
    ) -> StatusCode {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED;
        }
        log.lock().unwrap().push(format!("rpc row_id={}", args["row_id"]));
        StatusCode::NO_CONTENT
    }

    async fn spawn_store(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    async fn fake_store() -> (SupabaseProfileRepository, Log) {
        let log: Log = Arc::default();
        let router = Router::new()
            .route("/rest/v1/profiles", get(list).post(insert))
            .route("/rest/v1/rpc/increment_vote", post(increment))
            .with_state(log.clone());
        let url = spawn_store(router).await;
        (SupabaseProfileRepository::new(&url, KEY).unwrap(), log)
    }

    #[tokio::test]
    async fn test_find_all_orders_by_votes() {
        let (repo, log) = fake_store().await;

        let profiles = repo.find_all(ProfileOrder::Votes).await.unwrap();

        assert_eq!(log.lock().unwrap().as_slice(), ["select=* order=votes.desc"]);
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].strengths.tags(), vec!["logic"]);
        assert_eq!(profiles[0].aspirations.display(), "build");
        assert_eq!(profiles[0].values.display(), "freedom; care");
        assert_eq!(profiles[0].votes, 4);
        assert!(profiles[1].strengths.is_empty());
        assert_eq!(profiles[1].votes, 0);
    }

    #[tokio::test]
    async fn test_find_all_insertion_order_sends_no_order() {
        let (repo, log) = fake_store().await;

        repo.find_all(ProfileOrder::Insertion).await.unwrap();

        assert_eq!(log.lock().unwrap().as_slice(), ["select=* order="]);
    }

    #[tokio::test]
    async fn test_insert_returns_representation() {
        let (repo, log) = fake_store().await;
        let new = NewProfile::from_form("Ada", "logic, care", "build", "").unwrap();

        let profile = repo.insert(&new).await.unwrap();

        assert_eq!(profile.id, 9);
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.strengths.tags(), vec!["logic", "care"]);
        assert!(profile.values.is_empty());
        assert_eq!(
            log.lock().unwrap().as_slice(),
            ["insert prefer=return=representation"]
        );
    }

    #[tokio::test]
    async fn test_increment_vote_calls_rpc() {
        let (repo, log) = fake_store().await;

        repo.increment_vote(42).await.unwrap();

        assert_eq!(log.lock().unwrap().as_slice(), ["rpc row_id=42"]);
    }

    #[tokio::test]
    async fn test_error_status_maps_to_external_service() {
        let router = Router::new().route(
            "/rest/v1/profiles",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let url = spawn_store(router).await;
        let repo = SupabaseProfileRepository::new(&url, KEY).unwrap();

        let err = repo.find_all(ProfileOrder::Votes).await.unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(ref msg) if msg.contains("boom")));
    }
}
