use crate::domain::entities::SignInOutcome;
use crate::domain::errors::SessionError;
use crate::interface_adapters::protocol::{
    ErrorResponse, IdTokenResponse, SessionResponse, SignInRequest,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::auth_session::AuthSessionUseCase;
use crate::use_cases::sign_in::SignInUseCase;
use axum::{extract::State, http::StatusCode, Json};

// Handler for assembling the current session.
#[tracing::instrument(name = "fetch_session", skip_all)]
pub async fn fetch_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = AuthSessionUseCase {
        client: state.identity.as_ref(),
        decoder: state.decoder,
    };

    let session = use_case
        .execute()
        .await
        .map_err(|err| map_session_error(err, SessionErrorContext::FetchSession))?;

    tracing::info!(is_signed_in = session.is_signed_in, "session assembled");
    Ok(Json(SessionResponse::from(session)))
}

// Handler for reading the signed-in user's id token.
#[tracing::instrument(name = "id_token", skip_all)]
pub async fn id_token(State(state): State<AppState>) -> Json<IdTokenResponse> {
    let use_case = AuthSessionUseCase {
        client: state.identity.as_ref(),
        decoder: state.decoder,
    };

    Json(IdTokenResponse {
        id_token: use_case.id_token().await,
    })
}

// Handler for signing a user in through the identity client.
#[tracing::instrument(name = "sign_in", skip_all, fields(username = %payload.username))]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<SignInOutcome>, (StatusCode, Json<ErrorResponse>)> {
    if payload.username.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "username is required"));
    }

    let use_case = SignInUseCase {
        client: state.identity.as_ref(),
    };

    let outcome = use_case
        .execute(payload)
        .await
        .map_err(|err| map_session_error(err, SessionErrorContext::SignIn))?;

    Ok(Json(outcome))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Maps classified errors to HTTP responses by endpoint context.
enum SessionErrorContext {
    FetchSession,
    SignIn,
}

fn map_session_error(
    err: SessionError,
    context: SessionErrorContext,
) -> (StatusCode, Json<ErrorResponse>) {
    match context {
        SessionErrorContext::FetchSession => {
            tracing::error!(error = %err, "failed to fetch session");
            error_response(StatusCode::BAD_GATEWAY, &err.to_string())
        }
        SessionErrorContext::SignIn => {
            tracing::warn!(error = %err, "sign in rejected");
            error_response(StatusCode::UNAUTHORIZED, &err.to_string())
        }
    }
}
