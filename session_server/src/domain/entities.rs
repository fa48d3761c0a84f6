use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::SessionError;

// A single resolved sub-result of a session fetch.
pub type Outcome<T> = Result<T, SessionError>;

// AWS-style temporary credentials vended by the identity pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default)]
    pub session_token: Option<String>,
}

// User-pool token bundle returned by the identity client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPoolTokens {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
}

/// Composite session produced by every fetch.
///
/// The four outcomes are resolved independently; a failure in one field only
/// reaches another when the upstream call it depends on could not be made.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub is_signed_in: bool,
    pub identity_id: Outcome<String>,
    pub aws_credentials: Outcome<AwsCredentials>,
    pub user_sub: Outcome<String>,
    pub user_pool_tokens: Outcome<UserPoolTokens>,
}

impl AuthSession {
    // Session reported when the client holds tokens it can no longer refresh.
    pub fn expired() -> Self {
        Self {
            is_signed_in: true,
            identity_id: Err(SessionError::SessionExpired),
            aws_credentials: Err(SessionError::SessionExpired),
            user_sub: Err(SessionError::SessionExpired),
            user_pool_tokens: Err(SessionError::SessionExpired),
        }
    }
}

// Sign-in state reported by the identity client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserState {
    SignedIn,
    Guest,
    SignedOut,
    SignedOutUserPoolsTokensInvalid,
    SignedOutFederatedTokensInvalid,
    Unknown,
}

// Raw sign-in state as the identity client reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignInState {
    SmsMfa,
    PasswordVerifier,
    CustomChallenge,
    DeviceSrpAuth,
    DevicePasswordVerifier,
    AdminNoSrpAuth,
    NewPasswordRequired,
    Done,
    Unknown,
}

// Where a confirmation code was sent, as reported by the identity client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCodeDeliveryDetails {
    pub destination: String,
    pub delivery_medium: String,
    pub attribute_name: Option<String>,
}

// Raw result of a client sign-in call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResult {
    pub sign_in_state: SignInState,
    #[serde(default)]
    pub parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub code_details: Option<UserCodeDeliveryDetails>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMedium {
    Email,
    Sms,
    Phone,
    Unknown,
}

impl DeliveryMedium {
    pub fn from_name(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "email" => DeliveryMedium::Email,
            "sms" => DeliveryMedium::Sms,
            "phone" => DeliveryMedium::Phone,
            _ => DeliveryMedium::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeDeliveryDetails {
    pub destination: String,
    pub delivery_medium: DeliveryMedium,
    pub attribute_name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignInStep {
    ConfirmSignInWithSmsMfaCode,
    ConfirmSignInWithCustomChallenge,
    ConfirmSignInWithNewPassword,
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NextSignInStep {
    pub step: SignInStep,
    pub additional_info: HashMap<String, String>,
    pub code_delivery_details: Option<CodeDeliveryDetails>,
}

// Sign-in result in this service's vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInOutcome {
    pub is_signed_in: bool,
    pub next_step: NextSignInStep,
}
