use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AwsCredentials, SignInResult, UserPoolTokens, UserState};
use crate::domain::errors::ClientFailure;
use crate::domain::ports::IdentityClient;

// Thin reqwest client for an identity broker that fronts the identity SDK.
// Broker failures are surfaced as their message text so they can be classified.
#[derive(Clone)]
pub struct HttpIdentityClient {
    http: Client,
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct IdentityIdResponse {
    identity_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserStateResponse {
    user_state: UserState,
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a HashMap<String, String>>,
}

impl HttpIdentityClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientFailure> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ClientFailure::new(format!("identity service unreachable: {err}")))?;

        decode(response).await
    }
}

// Map a broker response into the payload or a message-only failure.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientFailure> {
    let status = response.status();

    if !status.is_success() {
        // Keep the upstream message verbatim; classification matches it literally.
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|payload| payload.message)
            .unwrap_or_else(|_| format!("identity service returned {status}"));
        return Err(ClientFailure::new(message));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| ClientFailure::new(format!("identity response decode error: {err}")))
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn guest_credentials(&self) -> Result<AwsCredentials, ClientFailure> {
        self.get_json("/identity/credentials/guest").await
    }

    async fn identity_id(&self) -> Result<Option<String>, ClientFailure> {
        let response: Option<IdentityIdResponse> = self.get_json("/identity/id").await?;
        Ok(response.and_then(|payload| payload.identity_id))
    }

    async fn tokens(&self) -> Result<UserPoolTokens, ClientFailure> {
        self.get_json("/identity/tokens").await
    }

    async fn aws_credentials(&self) -> Result<Option<AwsCredentials>, ClientFailure> {
        self.get_json("/identity/credentials").await
    }

    async fn current_user_state(&self) -> Result<UserState, ClientFailure> {
        let response: UserStateResponse = self.get_json("/identity/user-state").await?;
        Ok(response.user_state)
    }

    async fn sign_in(
        &self,
        username: &str,
        password: &str,
        metadata: Option<&HashMap<String, String>>,
    ) -> Result<SignInResult, ClientFailure> {
        let url = format!("{}/identity/sign-in", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&SignInRequest {
                username,
                password,
                metadata,
            })
            .send()
            .await
            .map_err(|err| ClientFailure::new(format!("identity service unreachable: {err}")))?;

        decode(response).await
    }
}
