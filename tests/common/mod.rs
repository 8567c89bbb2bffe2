use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
};
use coffeeshop::UserDirectory;
use coffeeshop_auth::StaticAuthorizer;
use coffeeshop_config::ApiConfig;
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";

/// A request as the fake backend received it.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

type Script = HashMap<(Method, String), VecDeque<(StatusCode, Value)>>;

#[derive(Clone, Default)]
struct BackendState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    script: Arc<Mutex<Script>>,
}

/// Stand-in for the coffeeshop backend.
///
/// Every request is recorded. Responses come from a per-route queue; the last
/// queued response keeps being served, unknown routes get a 404.
pub struct FakeBackend {
    pub base_url: String,
    state: BackendState,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeBackend {
    pub async fn spawn() -> Self {
        let state = BackendState::default();
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            state,
            handle,
        }
    }

    /// Queue a response for `method path`.
    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: Value) {
        self.state
            .script
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back((status, body));
    }

    /// Queue a successful list response for `GET /{collection}`.
    #[allow(dead_code)]
    pub fn respond_users(&self, collection: &str, users: Value) {
        self.respond(
            Method::GET,
            &format!("/{collection}"),
            StatusCode::OK,
            json!({ "success": true, "users": users }),
        );
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    #[allow(dead_code)]
    pub fn directory(&self, permissions: &[&str]) -> UserDirectory {
        directory_for(&self.base_url, permissions)
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[allow(dead_code)]
pub fn directory_for(base_url: &str, permissions: &[&str]) -> UserDirectory {
    let auth = Arc::new(StaticAuthorizer::new(TOKEN, permissions.iter().copied()));
    UserDirectory::new(&ApiConfig::new(base_url), auth).expect("valid base url")
}

async fn record(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        authorization,
        body,
    });

    let mut script = state.script.lock().unwrap();
    let next = script.get_mut(&(method, path)).and_then(|queue| {
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    });

    match next {
        Some((status, body)) => (status, Json(body)),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": 404, "message": "resource not found" })),
        ),
    }
}

/// A user in the backend's JSON shape.
#[allow(dead_code)]
pub fn user_json(id: i64, name: &str, permissions: &[(&str, bool)]) -> Value {
    json!({
        "id": id,
        "name": name,
        "permissions": permissions
            .iter()
            .map(|(name, valid)| json!({ "name": name, "valid": valid }))
            .collect::<Vec<_>>(),
    })
}
