use tracing::{debug, warn};

use crate::domain::classify::{classify, is_identity_pool_missing, MessageClass};
use crate::domain::entities::{AuthSession, AwsCredentials, Outcome, UserPoolTokens};
use crate::domain::errors::{Cause, SessionError, TokenDecodeError};
use crate::domain::ports::{IdentityClient, TokenDecoder};

// Claim holding the user-pool subject identifier.
const USER_SUB_CLAIM: &str = "sub";

// Session assembly use case over a borrowed identity client.
pub struct FetchSessionUseCase<'a, C: ?Sized, D> {
    pub client: &'a C,
    pub decoder: D,
}

// User-pool outcomes carried from the token stage into the later stages.
struct UserPoolResults {
    user_sub: Outcome<String>,
    tokens: Outcome<UserPoolTokens>,
}

impl UserPoolResults {
    fn failed(error: SessionError) -> Self {
        Self {
            user_sub: Err(error.clone()),
            tokens: Err(error),
        }
    }

    fn into_session(
        self,
        identity_id: Outcome<String>,
        aws_credentials: Outcome<AwsCredentials>,
    ) -> AuthSession {
        AuthSession {
            is_signed_in: true,
            identity_id,
            aws_credentials,
            user_sub: self.user_sub,
            user_pool_tokens: self.tokens,
        }
    }
}

impl<C, D> FetchSessionUseCase<'_, C, D>
where
    C: IdentityClient + ?Sized,
    D: TokenDecoder,
{
    /// Assemble the session for a user without user-pool tokens and hand it to
    /// `on_complete` exactly once.
    pub async fn fetch_signed_out_session<F>(&self, on_complete: F)
    where
        F: FnOnce(AuthSession) + Send,
    {
        on_complete(self.signed_out_session().await);
    }

    /// Assemble the session for a signed-in user and hand it to `on_complete`
    /// exactly once. May fall back to the signed-out assembly when the client
    /// reports that nobody is signed in.
    pub async fn fetch_signed_in_session<F>(&self, on_complete: F)
    where
        F: FnOnce(AuthSession) + Send,
    {
        on_complete(self.signed_in_session().await);
    }

    pub async fn signed_out_session(&self) -> AuthSession {
        // Guest credentials decide whether an identity pool with guest access exists.
        let credentials = match self.client.guest_credentials().await {
            Ok(credentials) => credentials,
            Err(failure) if is_identity_pool_missing(&failure.message) => {
                debug!(message = %failure.message, "no identity pool configured");
                let error = SessionError::InvalidAccountType { cause: None };
                return signed_out(Err(error.clone()), Err(error));
            }
            Err(failure) => {
                // Either guest access is disabled or the client could not reach it.
                debug!(message = %failure.message, "guest credentials unavailable");
                return signed_out(
                    Err(SessionError::SignedOutGuestPossible),
                    Err(SessionError::SignedOutGuestPossible),
                );
            }
        };

        let identity_id = match self.client.identity_id().await {
            Ok(Some(identity_id)) => Ok(identity_id),
            Ok(None) => Err(missing_identity_id()),
            Err(failure) => {
                warn!(message = %failure.message, "guest credentials present but identity id failed");
                Err(SessionError::unknown(failure))
            }
        };

        signed_out(identity_id, Ok(credentials))
    }

    pub async fn signed_in_session(&self) -> AuthSession {
        let user_pool = match self.client.tokens().await {
            Ok(tokens) => UserPoolResults {
                user_sub: self.user_sub(&tokens.access_token),
                tokens: Ok(tokens),
            },
            Err(failure) => match classify(&failure.message) {
                MessageClass::InvalidAccountType => {
                    debug!(message = %failure.message, "identity pool only account");
                    UserPoolResults::failed(SessionError::InvalidAccountType { cause: None })
                }
                MessageClass::SignedOut => {
                    debug!("token fetch reports signed out; assembling signed-out session");
                    return self.signed_out_session().await;
                }
                MessageClass::Unrecognized => {
                    warn!(message = %failure.message, "unrecognized token fetch failure");
                    UserPoolResults::failed(SessionError::unknown(failure))
                }
            },
        };

        let credentials = match self.client.aws_credentials().await {
            Ok(Some(credentials)) => credentials,
            Ok(None) => {
                warn!("identity client returned no credentials and no error");
                let error = SessionError::other(
                    "Could not fetch AWS credentials, but no error was reported by the identity client.",
                    "This is a bug in the identity client.",
                );
                return user_pool.into_session(Err(error.clone()), Err(error));
            }
            Err(failure) => {
                let error = match classify(&failure.message) {
                    MessageClass::InvalidAccountType => SessionError::InvalidAccountType {
                        cause: Some(Cause::new(failure)),
                    },
                    MessageClass::SignedOut | MessageClass::Unrecognized => {
                        warn!(message = %failure.message, "credential fetch failed");
                        SessionError::unknown(failure)
                    }
                };
                return user_pool.into_session(Err(error.clone()), Err(error));
            }
        };

        // Failures here are reported as-is; the client owns any retrying.
        let identity_id = match self.client.identity_id().await {
            Ok(Some(identity_id)) => Ok(identity_id),
            Ok(None) => Err(missing_identity_id()),
            Err(failure) => {
                warn!(message = %failure.message, "identity id fetch failed");
                Err(SessionError::unknown(failure))
            }
        };

        user_pool.into_session(identity_id, Ok(credentials))
    }

    fn user_sub(&self, access_token: &str) -> Outcome<String> {
        let claims = self
            .decoder
            .claims(access_token)
            .map_err(SessionError::unknown)?;

        claims
            .get(USER_SUB_CLAIM)
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                SessionError::unknown(TokenDecodeError::MissingClaim(USER_SUB_CLAIM.to_string()))
            })
    }
}

fn signed_out(
    identity_id: Outcome<String>,
    aws_credentials: Outcome<AwsCredentials>,
) -> AuthSession {
    AuthSession {
        is_signed_in: false,
        identity_id,
        aws_credentials,
        user_sub: Err(SessionError::SignedOut),
        user_pool_tokens: Err(SessionError::SignedOut),
    }
}

fn missing_identity_id() -> SessionError {
    SessionError::other(
        "Identity client returned AWS credentials but no identity id and no error.",
        "This is a bug in the identity client.",
    )
}
