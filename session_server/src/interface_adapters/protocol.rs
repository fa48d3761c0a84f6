use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AuthSession, AwsCredentials, Outcome, UserPoolTokens};
use crate::domain::errors::SessionError;

// Classified error as exposed to HTTP clients.
#[derive(Debug, Serialize)]
pub struct SessionErrorBody {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_suggestion: Option<String>,
}

impl From<&SessionError> for SessionErrorBody {
    fn from(error: &SessionError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
            recovery_suggestion: error.recovery_suggestion().map(str::to_string),
        }
    }
}

// One session field: either a value or a classified error.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutcomeBody<T> {
    Success { value: T },
    Failure { error: SessionErrorBody },
}

impl<T> From<Outcome<T>> for OutcomeBody<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Ok(value) => OutcomeBody::Success { value },
            Err(error) => OutcomeBody::Failure {
                error: SessionErrorBody::from(&error),
            },
        }
    }
}

// Response payload for session fetches.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub is_signed_in: bool,
    pub identity_id: OutcomeBody<String>,
    pub aws_credentials: OutcomeBody<AwsCredentials>,
    pub user_sub: OutcomeBody<String>,
    pub user_pool_tokens: OutcomeBody<UserPoolTokens>,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            is_signed_in: session.is_signed_in,
            identity_id: session.identity_id.into(),
            aws_credentials: session.aws_credentials.into(),
            user_sub: session.user_sub.into(),
            user_pool_tokens: session.user_pool_tokens.into(),
        }
    }
}

// Response payload for id token lookups.
#[derive(Debug, Serialize)]
pub struct IdTokenResponse {
    pub id_token: Option<String>,
}

// Request payload for sign-in.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
    pub metadata: Option<HashMap<String, String>>,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
