use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};

use crate::domain::entities::{
    AwsCredentials, SignInResult, SignInState, UserPoolTokens, UserState,
};
use crate::domain::errors::ClientFailure;
use crate::domain::ports::IdentityClient;

pub(crate) type CallLog = Arc<Mutex<Vec<&'static str>>>;

// Unsigned JWT carrying the given claims, enough for payload decoding.
pub(crate) fn jwt_with_claims(claims: Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.signature")
}

pub(crate) fn sample_tokens(sub: &str) -> UserPoolTokens {
    UserPoolTokens {
        access_token: jwt_with_claims(json!({ "sub": sub, "token_use": "access" })),
        id_token: jwt_with_claims(json!({ "sub": sub, "token_use": "id" })),
        refresh_token: "refresh-token".to_string(),
    }
}

pub(crate) fn sample_credentials() -> AwsCredentials {
    AwsCredentials {
        access_key_id: "AKIDEXAMPLE".to_string(),
        secret_access_key: "secret".to_string(),
        session_token: Some("session".to_string()),
    }
}

// Identity client returning scripted responses and recording which calls ran.
#[derive(Clone)]
pub(crate) struct ScriptedClient {
    guest_credentials: Result<AwsCredentials, ClientFailure>,
    identity_id: Result<Option<String>, ClientFailure>,
    tokens: Result<UserPoolTokens, ClientFailure>,
    aws_credentials: Result<Option<AwsCredentials>, ClientFailure>,
    user_state: Result<UserState, ClientFailure>,
    sign_in: Result<SignInResult, ClientFailure>,
    calls: CallLog,
}

impl ScriptedClient {
    // Every call succeeds as for a fully configured, signed-in user.
    pub(crate) fn signed_in() -> Self {
        Self {
            guest_credentials: Ok(sample_credentials()),
            identity_id: Ok(Some("us-east-1:identity".to_string())),
            tokens: Ok(sample_tokens("user-123")),
            aws_credentials: Ok(Some(sample_credentials())),
            user_state: Ok(UserState::SignedIn),
            sign_in: Ok(SignInResult {
                sign_in_state: SignInState::Done,
                parameters: None,
                code_details: None,
            }),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn with_guest_credentials(
        mut self,
        result: Result<AwsCredentials, ClientFailure>,
    ) -> Self {
        self.guest_credentials = result;
        self
    }

    pub(crate) fn with_identity_id(mut self, result: Result<Option<String>, ClientFailure>) -> Self {
        self.identity_id = result;
        self
    }

    pub(crate) fn with_tokens(mut self, result: Result<UserPoolTokens, ClientFailure>) -> Self {
        self.tokens = result;
        self
    }

    pub(crate) fn with_aws_credentials(
        mut self,
        result: Result<Option<AwsCredentials>, ClientFailure>,
    ) -> Self {
        self.aws_credentials = result;
        self
    }

    pub(crate) fn with_user_state(mut self, result: Result<UserState, ClientFailure>) -> Self {
        self.user_state = result;
        self
    }

    pub(crate) fn with_sign_in(mut self, result: Result<SignInResult, ClientFailure>) -> Self {
        self.sign_in = result;
        self
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }
}

#[async_trait]
impl IdentityClient for ScriptedClient {
    async fn guest_credentials(&self) -> Result<AwsCredentials, ClientFailure> {
        self.record("guest_credentials");
        self.guest_credentials.clone()
    }

    async fn identity_id(&self) -> Result<Option<String>, ClientFailure> {
        self.record("identity_id");
        self.identity_id.clone()
    }

    async fn tokens(&self) -> Result<UserPoolTokens, ClientFailure> {
        self.record("tokens");
        self.tokens.clone()
    }

    async fn aws_credentials(&self) -> Result<Option<AwsCredentials>, ClientFailure> {
        self.record("aws_credentials");
        self.aws_credentials.clone()
    }

    async fn current_user_state(&self) -> Result<UserState, ClientFailure> {
        self.record("current_user_state");
        self.user_state.clone()
    }

    async fn sign_in(
        &self,
        _username: &str,
        _password: &str,
        _metadata: Option<&HashMap<String, String>>,
    ) -> Result<SignInResult, ClientFailure> {
        self.record("sign_in");
        self.sign_in.clone()
    }
}
