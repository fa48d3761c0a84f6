use crate::interface_adapters::handlers::{fetch_session, id_token, sign_in};
use crate::interface_adapters::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/auth/session", get(fetch_session))
        .route("/auth/id-token", get(id_token))
        .route("/auth/sign-in", post(sign_in))
        .with_state(state)
}
