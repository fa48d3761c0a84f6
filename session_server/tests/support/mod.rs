// Shared helpers for running stub identity brokers and the session server in-process.
use axum::{http::StatusCode, routing::get, Json, Router};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};

// Canned broker reply: status plus JSON body.
pub type Reply = (StatusCode, Value);

pub fn ok(body: Value) -> Reply {
    (StatusCode::OK, body)
}

pub fn failure(message: &str) -> Reply {
    (StatusCode::BAD_REQUEST, json!({ "message": message }))
}

pub fn jwt_with_sub(sub: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "sub": sub }).to_string().as_bytes());
    format!("{header}.{payload}.sig")
}

pub fn credentials() -> Value {
    json!({
        "access_key_id": "AKIDEXAMPLE",
        "secret_access_key": "secret",
        "session_token": "session"
    })
}

// Broker script; every endpoint defaults to a signed-in user with a full setup.
#[derive(Clone)]
pub struct Broker {
    pub user_state: Reply,
    pub guest_credentials: Reply,
    pub identity_id: Reply,
    pub tokens: Reply,
    pub credentials: Reply,
}

impl Default for Broker {
    fn default() -> Self {
        Self {
            user_state: ok(json!({ "user_state": "SIGNED_IN" })),
            guest_credentials: ok(credentials()),
            identity_id: ok(json!({ "identity_id": "us-east-1:identity" })),
            tokens: ok(json!({
                "access_token": jwt_with_sub("user-123"),
                "id_token": jwt_with_sub("user-123"),
                "refresh_token": "refresh-token"
            })),
            credentials: ok(credentials()),
        }
    }
}

fn reply(canned: Reply) -> impl Fn() -> std::future::Ready<(StatusCode, Json<Value>)> + Clone {
    move || {
        let (status, body) = canned.clone();
        std::future::ready((status, Json(body)))
    }
}

// Serve `app` on an ephemeral port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });
    format!("http://{addr}")
}

impl Broker {
    pub async fn spawn(self) -> String {
        let app = Router::new()
            .route("/identity/user-state", get(reply(self.user_state)))
            .route(
                "/identity/credentials/guest",
                get(reply(self.guest_credentials)),
            )
            .route("/identity/id", get(reply(self.identity_id)))
            .route("/identity/tokens", get(reply(self.tokens)))
            .route("/identity/credentials", get(reply(self.credentials)));
        serve(app).await
    }
}
