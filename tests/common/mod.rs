#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path as AxumPath, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use prune_artifacts::Inputs;
use serde_json::json;

pub const TOKEN: &str = "ghs_test_token";

#[derive(Clone)]
pub struct MockArtifact {
    pub id: u64,
    pub name: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestHeaders {
    fn from_map(headers: &HeaderMap) -> RequestHeaders {
        RequestHeaders {
            authorization: header(headers, "authorization"),
            accept: header(headers, "accept"),
            user_agent: header(headers, "user-agent"),
        }
    }
}

pub struct ListRequest {
    pub headers: RequestHeaders,
    pub query: HashMap<String, String>,
}

pub struct MockState {
    pub base_url: String,
    pub artifacts: Vec<MockArtifact>,
    /// Reported instead of the number of stored artifacts when set.
    pub total_count: Option<u64>,
    pub list_status: StatusCode,
    /// Returned verbatim instead of the generated listing when set.
    pub list_body: Option<String>,
    pub delete_failures: HashMap<String, StatusCode>,
    pub list_requests: Vec<ListRequest>,
    /// Names of artifacts a DELETE was received for, in arrival order.
    pub delete_requests: Vec<String>,
    /// Headers of every DELETE received, in arrival order.
    pub delete_headers: Vec<RequestHeaders>,
}

#[derive(Clone)]
pub struct MockApi {
    state: Arc<Mutex<MockState>>,
}

impl MockApi {
    pub async fn start(artifacts: &[(&str, &str)]) -> MockApi {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();

        let artifacts = artifacts
            .iter()
            .enumerate()
            .map(|(i, (name, updated_at))| MockArtifact {
                id: i as u64 + 1,
                name: name.to_string(),
                updated_at: updated_at.to_string(),
            })
            .collect();

        let api = MockApi {
            state: Arc::new(Mutex::new(MockState {
                base_url: format!("http://{}", addr),
                artifacts,
                total_count: None,
                list_status: StatusCode::OK,
                list_body: None,
                delete_failures: HashMap::new(),
                list_requests: Vec::new(),
                delete_requests: Vec::new(),
                delete_headers: Vec::new(),
            })),
        };

        let app = Router::new()
            .route("/repos/{owner}/{repo}/actions/artifacts", get(list_artifacts))
            .route(
                "/repos/{owner}/{repo}/actions/artifacts/{id}",
                delete(delete_artifact),
            )
            .with_state(api.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        api
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn base_url(&self) -> String {
        self.state().base_url.clone()
    }

    pub fn fail_delete(&self, name: &str, status: StatusCode) {
        self.state()
            .delete_failures
            .insert(name.to_string(), status);
    }

    pub fn list_calls(&self) -> usize {
        self.state().list_requests.len()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.state().delete_requests.clone()
    }

    pub fn remaining(&self) -> Vec<String> {
        self.state()
            .artifacts
            .iter()
            .map(|a| a.name.clone())
            .collect()
    }

    pub fn inputs(&self, max_artifacts: &str) -> Inputs {
        Inputs {
            github_token: Some(TOKEN.to_string()),
            max_artifacts: Some(max_artifacts.to_string()),
            repository: Some("octo-org/octo-repo".to_string()),
            api_url: Some(self.base_url()),
        }
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

async fn list_artifacts(
    State(api): State<MockApi>,
    AxumPath((owner, repo)): AxumPath<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let mut state = api.state();
    state.list_requests.push(ListRequest {
        headers: RequestHeaders::from_map(&headers),
        query,
    });

    if !state.list_status.is_success() {
        return (state.list_status, Json(json!({ "message": "Not Found" }))).into_response();
    }

    if let Some(body) = &state.list_body {
        return (StatusCode::OK, body.clone()).into_response();
    }

    let artifacts: Vec<_> = state
        .artifacts
        .iter()
        .map(|a| {
            json!({
                "id": a.id,
                "name": a.name,
                "size_in_bytes": 1024,
                "url": format!("{}/repos/{}/{}/actions/artifacts/{}", state.base_url, owner, repo, a.id),
                "archive_download_url": format!("{}/repos/{}/{}/actions/artifacts/{}/zip", state.base_url, owner, repo, a.id),
                "expired": false,
                "created_at": a.updated_at,
                "updated_at": a.updated_at,
            })
        })
        .collect();
    let total_count = state
        .total_count
        .unwrap_or(state.artifacts.len() as u64);

    Json(json!({
        "total_count": total_count,
        "artifacts": artifacts,
    }))
    .into_response()
}

async fn delete_artifact(
    State(api): State<MockApi>,
    AxumPath((_owner, _repo, id)): AxumPath<(String, String, u64)>,
    headers: HeaderMap,
) -> StatusCode {
    let mut state = api.state();
    state.delete_headers.push(RequestHeaders::from_map(&headers));

    let Some(pos) = state.artifacts.iter().position(|a| a.id == id) else {
        state.delete_requests.push(format!("#{}", id));
        return StatusCode::NOT_FOUND;
    };
    let name = state.artifacts[pos].name.clone();
    state.delete_requests.push(name.clone());

    if let Some(status) = state.delete_failures.get(&name) {
        return *status;
    }

    state.artifacts.remove(pos);
    StatusCode::NO_CONTENT
}
