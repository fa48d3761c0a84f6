use tracing::{debug, warn};

use crate::domain::entities::{AuthSession, UserState};
use crate::domain::errors::SessionError;
use crate::domain::ports::{IdentityClient, TokenDecoder};
use crate::use_cases::fetch_session::FetchSessionUseCase;

// Picks the session assembly path from the client's reported user state.
pub struct AuthSessionUseCase<'a, C: ?Sized, D> {
    pub client: &'a C,
    pub decoder: D,
}

impl<C, D> AuthSessionUseCase<'_, C, D>
where
    C: IdentityClient + ?Sized,
    D: TokenDecoder,
{
    pub async fn execute(&self) -> Result<AuthSession, SessionError> {
        let state = self.client.current_user_state().await.map_err(|failure| {
            warn!(message = %failure.message, "failed to read current user state");
            SessionError::other(
                "An error occurred while attempting to retrieve your user details",
                "See attached exception for more details",
            )
            .with_cause(failure)
        })?;
        debug!(?state, "fetching session for user state");

        let fetch = FetchSessionUseCase {
            client: self.client,
            decoder: &self.decoder,
        };

        let session = match state {
            UserState::SignedOut | UserState::Guest => fetch.signed_out_session().await,
            UserState::SignedOutFederatedTokensInvalid
            | UserState::SignedOutUserPoolsTokensInvalid => AuthSession::expired(),
            UserState::SignedIn | UserState::Unknown => fetch.signed_in_session().await,
        };

        Ok(session)
    }

    // Id token of the signed-in user, if the session carries one.
    pub async fn id_token(&self) -> Option<String> {
        let session = match self.execute().await {
            Ok(session) => session,
            Err(err) => {
                warn!(error = %err, "failed to fetch session for id token");
                return None;
            }
        };

        if !session.is_signed_in {
            return None;
        }

        match session.user_pool_tokens {
            Ok(tokens) => Some(tokens.id_token),
            Err(err) => {
                debug!(kind = err.kind(), "session has no user pool tokens");
                None
            }
        }
    }
}
