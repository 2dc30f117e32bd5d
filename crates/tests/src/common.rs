use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use client::navigation::HistoryNavigator;
use client::{HttpAuthService, LoginController, MemorySessionStore};
use shared_types::{FeatureFlags, LoginRequest, SessionUser};
use tokio::task::JoinHandle;

type Responder = Arc<dyn Fn(&LoginRequest) -> Response + Send + Sync>;

pub type TestController = LoginController<HttpAuthService, MemorySessionStore, HistoryNavigator>;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<LoginRequest>>>,
    hits: Arc<AtomicUsize>,
    delay: Duration,
    respond: Responder,
}

/// Stand-in auth backend serving `POST /api/auth/login` on a random port.
/// The server task is aborted on drop.
pub struct MockAuthServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<LoginRequest>>>,
    hits: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl MockAuthServer {
    pub async fn start(
        respond: impl Fn(&LoginRequest) -> Response + Send + Sync + 'static,
    ) -> Self {
        Self::start_with_delay(Duration::ZERO, respond).await
    }

    /// Like [`MockAuthServer::start`], but every response is held back for
    /// `delay` first.
    pub async fn start_with_delay(
        delay: Duration,
        respond: impl Fn(&LoginRequest) -> Response + Send + Sync + 'static,
    ) -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            hits: Arc::new(AtomicUsize::new(0)),
            delay,
            respond: Arc::new(respond),
        };
        let requests = state.requests.clone();
        let hits = state.hits.clone();

        let app = Router::new()
            .route("/api/auth/login", post(login_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock auth server");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock auth server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            hits,
            task,
        }
    }

    /// Number of requests the endpoint has received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<LoginRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

impl Drop for MockAuthServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn login_handler(
    State(state): State<MockState>,
    Json(request): Json<LoginRequest>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state
        .requests
        .lock()
        .expect("request log poisoned")
        .push(request.clone());
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.respond)(&request)
}

/// `200 {"user": ...}` for the given user.
pub fn ok_user(user: &SessionUser) -> Response {
    Json(serde_json::json!({ "user": user })).into_response()
}

/// Raw response with the given status and body.
pub fn raw(status: StatusCode, content_type: &str, body: &str) -> Response {
    (
        status,
        [(axum::http::header::CONTENT_TYPE, content_type.to_string())],
        body.to_string(),
    )
        .into_response()
}

/// Origin nothing is listening on: bind a port, then release it.
pub fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind scratch port");
    let addr = listener.local_addr().expect("Failed to read scratch addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn controller(base_url: &str, flags: &FeatureFlags) -> TestController {
    controller_with_timeout(base_url, flags, Duration::from_secs(5))
}

pub fn controller_with_timeout(
    base_url: &str,
    flags: &FeatureFlags,
    timeout: Duration,
) -> TestController {
    let auth = HttpAuthService::new(base_url, timeout).expect("Failed to build auth client");
    LoginController::new(auth, MemorySessionStore::new(), HistoryNavigator::new(), flags)
}

pub fn demo_off() -> FeatureFlags {
    FeatureFlags {
        demo_mode: false,
        ..FeatureFlags::default()
    }
}
