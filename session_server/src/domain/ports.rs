use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::entities::{AwsCredentials, SignInResult, UserPoolTokens, UserState};
use crate::domain::errors::{ClientFailure, TokenDecodeError};

/// Port for the external identity client.
///
/// Implementations report every failure as a free-text [`ClientFailure`];
/// the session use cases classify those messages. `Ok(None)` means the client
/// returned nothing and reported no error.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    async fn guest_credentials(&self) -> Result<AwsCredentials, ClientFailure>;
    async fn identity_id(&self) -> Result<Option<String>, ClientFailure>;
    async fn tokens(&self) -> Result<UserPoolTokens, ClientFailure>;
    async fn aws_credentials(&self) -> Result<Option<AwsCredentials>, ClientFailure>;
    async fn current_user_state(&self) -> Result<UserState, ClientFailure>;
    async fn sign_in(
        &self,
        username: &str,
        password: &str,
        metadata: Option<&HashMap<String, String>>,
    ) -> Result<SignInResult, ClientFailure>;
}

// Port for reading the claim set of an encoded token.
pub trait TokenDecoder: Send + Sync {
    fn claims(&self, token: &str) -> Result<Map<String, Value>, TokenDecodeError>;
}

impl<T> TokenDecoder for &T
where
    T: TokenDecoder + ?Sized,
{
    fn claims(&self, token: &str) -> Result<Map<String, Value>, TokenDecodeError> {
        (**self).claims(token)
    }
}
